use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;
use crate::content::{OWNER_NAME, TIMELINE};
use crate::reveal::{use_reveal, Motion, Reveal};
use crate::scroll::Section;

#[function_component(About)]
pub fn about() -> Html {
    let section_ref = use_node_ref();
    let revealed = use_reveal(section_ref.clone(), REVEAL_THRESHOLD);

    html! {
        <section ref={section_ref} id={Section::About.id()} class="section">
            <div class="container">
                <Reveal {revealed} class="section-header">
                    <h2 class="section-title">{"About "}<span class="text-gradient-primary">{"Me"}</span></h2>
                    <p class="section-lead">
                        {"Passionate about creating intelligent solutions that bridge the gap between cutting-edge AI technology and practical real-world applications."}
                    </p>
                </Reveal>

                <div class="about-grid">
                    <Reveal {revealed} motion={Motion::FadeLeft} delay_ms={300}>
                        <div class="profile">
                            <div class="profile__avatar">
                                <img src="/assets/profile.jpg" alt={OWNER_NAME} />
                                <span class="profile__badge"></span>
                            </div>
                            <div>
                                <h3 class="profile__name">{ OWNER_NAME }</h3>
                                <p class="profile__role">{"ML & AI Engineer"}</p>
                                <p class="muted">{"Currently Engineering Student"}</p>
                            </div>
                        </div>

                        <div class="card hover-lift">
                            <p class="bio">
                                {"I am a passionate "}
                                <span class="accent-text-primary">{"Machine Learning and Generative AI Engineer"}</span>
                                {", with a strong foundation in "}
                                <span class="accent-text-neural">{"Frontend Web Development"}</span>
                                {". I am driven by a curiosity to build intelligent systems and user-friendly digital experiences."}
                            </p>
                            <p class="muted">
                                {"My journey combines the analytical rigor of machine learning with the creative problem-solving of web development, allowing me to create comprehensive solutions that are both technically sophisticated and user-centric."}
                            </p>
                        </div>
                    </Reveal>

                    <Reveal {revealed} motion={Motion::FadeRight} delay_ms={500}>
                        <h3 class="subsection-title">{"Journey "}<span class="text-gradient-neural">{"Timeline"}</span></h3>
                        <div class="timeline">
                            { for TIMELINE.iter().map(|entry| html! {
                                <div class="timeline__item" key={entry.title}>
                                    <div class="timeline__icon">{ entry.icon }</div>
                                    <div>
                                        <div class="timeline__heading">
                                            <h4>{ entry.title }</h4>
                                            <span class="pill">{ entry.year }</span>
                                        </div>
                                        <p class="muted">{ entry.description }</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </Reveal>
                </div>
            </div>

            <style>
                {r#"
                .about-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 3rem;
                    align-items: center;
                }
                .profile { display: flex; gap: 1.5rem; align-items: flex-start; margin-bottom: 2rem; }
                .profile__avatar { position: relative; flex-shrink: 0; }
                .profile__avatar img {
                    width: 8rem;
                    height: 8rem;
                    border-radius: 0.75rem;
                    object-fit: cover;
                    border: 2px solid rgba(56, 189, 248, 0.3);
                }
                .profile__badge {
                    position: absolute;
                    right: -0.5rem;
                    bottom: -0.5rem;
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    background: var(--primary);
                    border: 4px solid var(--background);
                }
                .profile__name { font-size: 1.5rem; font-weight: 700; }
                .profile__role { color: var(--primary); font-weight: 500; }
                .bio { font-size: 1.125rem; line-height: 1.7; margin-bottom: 1.5rem; }
                .timeline { display: flex; flex-direction: column; gap: 1.5rem; }
                .timeline__item { display: flex; gap: 1rem; align-items: flex-start; }
                .timeline__icon {
                    flex-shrink: 0;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: var(--gradient-primary);
                }
                .timeline__heading { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 0.5rem; }
                .timeline__heading h4 { font-size: 1.125rem; font-weight: 600; }
                @media (max-width: 1024px) {
                    .about-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
