use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;
use crate::content::{Project, GITHUB_URL, PROJECTS};
use crate::reveal::{use_reveal, Reveal};
use crate::scroll::Section;

fn project_card(project: &'static Project) -> Html {
    html! {
        <div class="card hover-lift project">
            <div class="project__top">
                <div class={classes!("icon-badge", project.accent.class())}>{ project.icon }</div>
                <div class="project__links">
                    <a class="icon-btn" href={project.source_url} target="_blank" rel="noopener noreferrer" aria-label="Source">{"⌥"}</a>
                    <a class="icon-btn" href={project.demo_url} target="_blank" rel="noopener noreferrer" aria-label="Demo">{"↗"}</a>
                </div>
            </div>

            <h3 class="card__title">{ project.title }</h3>
            <p class="muted">{ project.description }</p>

            <div class="badges">
                { for project.technologies.iter().map(|tech| html! { <span class="badge" key={*tech}>{ *tech }</span> }) }
            </div>

            <h4 class="project__features-title">{"Key Features:"}</h4>
            <ul class="bullet-list">
                { for project.features.iter().map(|feature| html! { <li>{ *feature }</li> }) }
            </ul>

            <div class="project__actions">
                <a class="btn btn-outline" href={project.demo_url} target="_blank" rel="noopener noreferrer">{"↗ Live Demo"}</a>
                <a class="btn btn-outline" href={project.source_url} target="_blank" rel="noopener noreferrer">{"⌥ Source Code"}</a>
            </div>
        </div>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let section_ref = use_node_ref();
    let revealed = use_reveal(section_ref.clone(), REVEAL_THRESHOLD);

    html! {
        <section ref={section_ref} id={Section::Projects.id()} class="section section--alt">
            <div class="container">
                <Reveal {revealed} class="section-header">
                    <h2 class="section-title">{"Featured "}<span class="text-gradient-primary">{"Projects"}</span></h2>
                    <p class="section-lead">
                        {"Showcasing innovative solutions that demonstrate the intersection of machine learning, artificial intelligence, and modern web technologies."}
                    </p>
                </Reveal>

                <div class="card-grid card-grid--2">
                    { for PROJECTS.iter().enumerate().map(|(index, project)| html! {
                        <Reveal {revealed} delay_ms={index as u32 * 200} key={project.title}>
                            { project_card(project) }
                        </Reveal>
                    }) }
                </div>

                <Reveal {revealed} delay_ms={500} class="cta">
                    <div class="glow-panel">
                        <h3 class="cta__title">{"More Projects Coming Soon!"}</h3>
                        <p class="muted">
                            {"I'm constantly working on new projects and experimenting with cutting-edge technologies. Follow my GitHub to stay updated with the latest developments."}
                        </p>
                        <a class="btn btn-outline" href={GITHUB_URL} target="_blank" rel="noopener noreferrer">
                            {"⌥ View All Projects"}
                        </a>
                    </div>
                </Reveal>
            </div>

            <style>
                {r#"
                .project { display: flex; flex-direction: column; gap: 1rem; }
                .project__top { display: flex; justify-content: space-between; align-items: flex-start; }
                .project__links { display: flex; gap: 0.5rem; }
                .project__features-title { font-weight: 600; font-size: 0.875rem; }
                .project__actions { display: flex; gap: 0.75rem; margin-top: auto; }
                .project__actions .btn { flex: 1; text-align: center; }
                .badges { display: flex; flex-wrap: wrap; gap: 0.5rem; }
                .badge {
                    padding: 0.25rem 0.625rem;
                    border-radius: 999px;
                    font-size: 0.75rem;
                    background: rgba(148, 163, 184, 0.15);
                    color: var(--muted);
                }
                @media (max-width: 640px) {
                    .project__actions { flex-direction: column; }
                }
                "#}
            </style>
        </section>
    }
}
