use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::content::OWNER_NAME;
use crate::scroll::{scroll_to_section, Section};

// Past this many pixels the bar gets its solid background.
const SCROLLED_OFFSET: f64 = 50.0;

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_event_with_window("scroll", move |_: Event| {
            if let Some(scroll_y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                is_scrolled.set(scroll_y > SCROLLED_OFFSET);
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = {
        let menu_open = menu_open.clone();
        move |section: Section| {
            let menu_open = menu_open.clone();
            Callback::from(move |_: MouseEvent| {
                scroll_to_section(section);
                menu_open.set(false);
            })
        }
    };

    let links = |class: &'static str| -> Html {
        Section::ALL
            .iter()
            .map(|section| {
                html! {
                    <button key={section.id()} class={class} onclick={go_to(*section)}>
                        { section.label() }
                    </button>
                }
            })
            .collect()
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <div class="nav-logo text-gradient-primary">{ OWNER_NAME }</div>

                <div class="nav-links">
                    { links("nav-link") }
                    <button class="btn btn-outline glow-primary" onclick={go_to(Section::Contact)}>
                        {"Let's Connect"}
                    </button>
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            if *menu_open {
                <div class="mobile-menu">
                    { links("mobile-link") }
                    <button class="btn btn-outline mobile-cta" onclick={go_to(Section::Contact)}>
                        {"Let's Connect"}
                    </button>
                </div>
            }

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1rem 1.5rem;
                    background: transparent;
                    transition: all 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(10, 12, 20, 0.9);
                    backdrop-filter: blur(16px);
                    border-bottom: 1px solid var(--border);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link, .mobile-link {
                    background: none;
                    border: none;
                    color: var(--muted);
                    font-weight: 500;
                    cursor: pointer;
                    transition: color 0.3s ease;
                }
                .nav-link:hover, .mobile-link:hover {
                    color: var(--primary);
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    color: var(--foreground);
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .mobile-menu {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    margin-top: 1rem;
                    padding: 1rem;
                    background: rgba(20, 24, 36, 0.95);
                    border: 1px solid var(--border);
                    border-radius: 0.5rem;
                }
                .mobile-link {
                    text-align: left;
                    padding: 0.5rem 1rem;
                }
                @media (max-width: 768px) {
                    .nav-links { display: none; }
                    .burger-menu { display: block; }
                }
                "#}
            </style>
        </nav>
    }
}
