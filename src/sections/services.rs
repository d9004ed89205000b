use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;
use crate::content::{ADDITIONAL_EXPERTISE, SERVICES};
use crate::reveal::{use_reveal, Motion, Reveal};
use crate::scroll::{scroll_to_section, Section};

// Delay between consecutive cards in a grid.
const STAGGER_MS: u32 = 150;

#[function_component(Services)]
pub fn services() -> Html {
    let section_ref = use_node_ref();
    let revealed = use_reveal(section_ref.clone(), REVEAL_THRESHOLD);

    let to_contact = Callback::from(|_: MouseEvent| scroll_to_section(Section::Contact));

    html! {
        <section ref={section_ref} id={Section::Services.id()} class="section">
            <div class="container">
                <Reveal {revealed} class="section-header">
                    <h2 class="section-title">{"My "}<span class="text-gradient-primary">{"Services"}</span></h2>
                    <p class="section-lead">
                        {"Transforming ideas into intelligent solutions through cutting-edge technology and innovative development practices."}
                    </p>
                </Reveal>

                <div class="card-grid card-grid--3">
                    { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <Reveal {revealed} motion={Motion::ScaleIn} delay_ms={index as u32 * STAGGER_MS} key={service.title}>
                            <div class="card hover-lift service">
                                <div class={classes!("icon-badge", service.accent.class())}>{ service.icon }</div>
                                <h3 class="card__title">{ service.title }</h3>
                                <p class="muted">{ service.description }</p>
                                <ul class="bullet-list">
                                    { for service.features.iter().map(|feature| html! { <li>{ *feature }</li> }) }
                                </ul>
                                <button class="btn btn-outline btn-block" onclick={to_contact.clone()}>
                                    {"Request Service"}<span class="arrow">{"→"}</span>
                                </button>
                            </div>
                        </Reveal>
                    }) }
                </div>

                <Reveal {revealed} delay_ms={SERVICES.len() as u32 * STAGGER_MS} class="expertise">
                    <h3 class="subsection-title centered">{"Additional "}<span class="text-gradient-neural">{"Expertise"}</span></h3>
                    <div class="card-grid card-grid--3 narrow">
                        { for ADDITIONAL_EXPERTISE.iter().map(|item| html! {
                            <div class="card card--soft centered" key={item.title}>
                                <div class="icon-badge accent-primary">{ item.icon }</div>
                                <h4 class="expertise__title">{ item.title }</h4>
                                <p class="muted small">{ item.description }</p>
                            </div>
                        }) }
                    </div>
                </Reveal>

                <Reveal {revealed} delay_ms={600} class="cta">
                    <div class="glow-panel">
                        <h3 class="cta__title">{"Ready to Build Something Amazing?"}</h3>
                        <p class="muted">{"Let's collaborate to bring your ideas to life with intelligent, scalable solutions."}</p>
                        <button class="btn btn-primary glow-primary" onclick={to_contact.clone()}>
                            {"Start Your Project"}
                        </button>
                    </div>
                </Reveal>
            </div>

            <style>
                {r#"
                .service { display: flex; flex-direction: column; gap: 1rem; height: 100%; }
                .service .btn-block { margin-top: auto; }
                .service .arrow { margin-left: 0.5rem; transition: transform 0.3s ease; }
                .service:hover .arrow { transform: translateX(0.25rem); }
                .expertise { margin-top: 4rem; }
                .expertise__title { font-weight: 600; margin: 0.5rem 0; }
                "#}
            </style>
        </section>
    }
}
