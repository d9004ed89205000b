use chrono::{Datelike, Utc};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{OWNER_EMAIL, OWNER_NAME, SOCIAL_LINKS};
use crate::scroll::{scroll_to_section, Section};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();
    let mailto = format!("mailto:{}", OWNER_EMAIL);

    html! {
        <footer class="footer">
            <div class="container">
                <div class="footer__top">
                    <div class="footer__brand">
                        <h3 class="text-gradient-primary">{ OWNER_NAME }</h3>
                        <p class="muted">{"Building the future with AI & innovative web solutions"}</p>
                    </div>

                    <nav class="footer__nav">
                        { for Section::ALL.iter().map(|section| {
                            let section = *section;
                            html! {
                                <button key={section.id()} class="nav-link"
                                    onclick={Callback::from(move |_: MouseEvent| scroll_to_section(section))}>
                                    { section.label() }
                                </button>
                            }
                        }) }
                    </nav>

                    <div class="footer__social">
                        { for SOCIAL_LINKS.iter().map(|link| html! {
                            <a class="icon-btn" key={link.label} href={link.href}
                                target="_blank" rel="noopener noreferrer" aria-label={link.label}>
                                { link.icon }
                            </a>
                        }) }
                        <a class="icon-btn" href={mailto} aria-label="Email">{"✉"}</a>
                    </div>
                </div>

                <div class="footer__bottom muted small">
                    { format!("© {} {}. All rights reserved.", year, OWNER_NAME) }
                </div>
            </div>

            <style>
                {r#"
                .footer {
                    padding: 3rem 0;
                    background: rgba(20, 24, 36, 0.3);
                    backdrop-filter: blur(4px);
                    border-top: 1px solid var(--border);
                }
                .footer__top { display: flex; align-items: center; justify-content: space-between; gap: 1.5rem; }
                .footer__brand h3 { font-size: 1.5rem; font-weight: 700; margin-bottom: 0.5rem; }
                .footer__nav { display: flex; gap: 2rem; }
                .footer__social { display: flex; gap: 0.75rem; }
                .footer__bottom {
                    margin-top: 2rem;
                    padding-top: 2rem;
                    border-top: 1px solid rgba(51, 65, 85, 0.5);
                }
                @media (max-width: 768px) {
                    .footer__top { flex-direction: column; text-align: center; }
                    .footer__nav { display: none; }
                }
                "#}
            </style>
        </footer>
    }
}
