use web_sys::js_sys::Math;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{GITHUB_URL, LINKEDIN_URL, OWNER_FIRST_NAME, OWNER_LAST_NAME, OWNER_NAME};
use crate::reveal::{use_mount_reveal, Reveal};
use crate::scroll::{scroll_to_section, Section};

const PARTICLE_COUNT: usize = 20;

#[derive(Clone, PartialEq)]
struct Particle {
    left: f64,
    top: f64,
    delay: f64,
    duration: f64,
}

impl Particle {
    fn random() -> Self {
        Self {
            left: Math::random() * 100.0,
            top: Math::random() * 100.0,
            delay: Math::random() * 3.0,
            duration: 3.0 + Math::random() * 2.0,
        }
    }

    fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.left, self.top, self.delay, self.duration
        )
    }
}

fn scroll_to(section: Section) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| scroll_to_section(section))
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let revealed = use_mount_reveal();
    // Positions are rolled once per mount so re-renders don't reshuffle them.
    let particles = use_state(|| (0..PARTICLE_COUNT).map(|_| Particle::random()).collect::<Vec<_>>());

    html! {
        <section id={Section::Home.id()} class="hero">
            <div class="hero__overlay"></div>
            <div class="hero__particles">
                { for particles.iter().map(|p| html! { <div class="particle animate-float" style={p.style()}></div> }) }
            </div>

            <div class="container hero__inner">
                <Reveal {revealed} class="hero__content">
                    <h1 class="hero__title">
                        <span class="text-gradient-primary">{ OWNER_FIRST_NAME }</span>
                        <br />
                        <span>{ OWNER_LAST_NAME }</span>
                    </h1>
                    <div class="hero__role">{"Machine Learning & Generative AI Engineer"}</div>
                    <div class="hero__tagline">{"Building intelligent systems & seamless web experiences"}</div>

                    <div class="hero__actions">
                        <button class="btn btn-primary glow-primary" onclick={scroll_to(Section::Projects)}>
                            {"View Portfolio"}
                        </button>
                        <button class="btn btn-outline" onclick={scroll_to(Section::Contact)}>
                            {"Contact Me"}
                        </button>
                    </div>

                    <div class="hero__social">
                        <a class="icon-btn" href={GITHUB_URL} target="_blank" rel="noopener noreferrer" aria-label="GitHub">{"⌥"}</a>
                        <a class="icon-btn" href={LINKEDIN_URL} target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">{"in"}</a>
                        <button class="icon-btn" onclick={scroll_to(Section::Contact)} aria-label="Email">{"✉"}</button>
                    </div>
                </Reveal>

                <Reveal {revealed} delay_ms={300} class="hero__portrait">
                    <div class="portrait">
                        <div class="portrait__glow animate-pulse-glow"></div>
                        <img src="/assets/profile.jpg" alt={OWNER_NAME} class="portrait__img animate-float" />
                        <div class="portrait__dot portrait__dot--a animate-pulse"></div>
                        <div class="portrait__dot portrait__dot--b animate-pulse" style="animation-delay: 1s;"></div>
                        <div class="portrait__dot portrait__dot--c animate-pulse" style="animation-delay: 2s;"></div>
                    </div>
                </Reveal>
            </div>

            <button class="hero__scroll-hint icon-btn" onclick={scroll_to(Section::About)} aria-label="Scroll to about">
                {"⌄"}
            </button>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                    background: url('/assets/hero-background.jpg') center / cover;
                }
                .hero__overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(10, 12, 20, 0.8);
                    backdrop-filter: blur(4px);
                }
                .hero__particles { position: absolute; inset: 0; }
                .particle {
                    position: absolute;
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 50%;
                    background: rgba(56, 189, 248, 0.3);
                }
                .hero__inner {
                    position: relative;
                    z-index: 1;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 2rem;
                    padding: 5rem 0;
                }
                .hero__content { flex: 1; }
                .hero__title {
                    font-size: clamp(2.5rem, 8vw, 6rem);
                    font-weight: 700;
                    line-height: 1.1;
                    margin-bottom: 1rem;
                }
                .hero__role { font-size: 1.5rem; color: var(--muted); margin-bottom: 0.5rem; }
                .hero__tagline { font-size: 1.25rem; color: var(--neural); font-weight: 500; }
                .hero__actions { display: flex; gap: 1rem; margin: 2rem 0; flex-wrap: wrap; }
                .hero__social { display: flex; gap: 1rem; }
                .hero__portrait { flex: 1; display: flex; justify-content: center; }
                .portrait { position: relative; }
                .portrait__glow {
                    position: absolute;
                    inset: 0;
                    border-radius: 50%;
                    background: var(--gradient-primary);
                    filter: blur(24px);
                    opacity: 0.3;
                }
                .portrait__img {
                    position: relative;
                    width: clamp(16rem, 30vw, 24rem);
                    height: clamp(16rem, 30vw, 24rem);
                    border-radius: 50%;
                    object-fit: cover;
                    border: 4px solid rgba(56, 189, 248, 0.3);
                }
                .portrait__dot { position: absolute; border-radius: 50%; }
                .portrait__dot--a { top: -1rem; right: -1rem; width: 2rem; height: 2rem; background: var(--neural); }
                .portrait__dot--b { bottom: -1rem; left: -1rem; width: 1.5rem; height: 1.5rem; background: var(--secondary); }
                .portrait__dot--c { top: 50%; left: -2rem; width: 1rem; height: 1rem; background: var(--primary); }
                .hero__scroll-hint {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    animation: bounce 1.5s infinite;
                }
                @keyframes bounce {
                    0%, 100% { transform: translate(-50%, 0); }
                    50% { transform: translate(-50%, -25%); }
                }
                @media (max-width: 1024px) {
                    .hero__inner { flex-direction: column; text-align: center; }
                    .hero__actions, .hero__social { justify-content: center; }
                }
                "#}
            </style>
        </section>
    }
}
