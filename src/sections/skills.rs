use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;
use crate::content::{SKILL_CATEGORIES, TECHNOLOGIES};
use crate::reveal::{use_reveal, Reveal};
use crate::scroll::Section;

/// Bars start filling this long after the section shows up.
const PROGRESS_DELAY_MS: u32 = 500;

fn bar_style(level: u8, filled: bool) -> String {
    let width = if filled { level.min(100) } else { 0 };
    format!("width: {}%;", width)
}

#[function_component(Skills)]
pub fn skills() -> Html {
    let section_ref = use_node_ref();
    let revealed = use_reveal(section_ref.clone(), REVEAL_THRESHOLD);
    let filled = use_state(|| false);

    {
        let filled = filled.clone();
        use_effect_with_deps(
            move |revealed: &bool| {
                let timeout = revealed.then(|| Timeout::new(PROGRESS_DELAY_MS, move || filled.set(true)));
                // Dropping a pending Timeout cancels it.
                move || drop(timeout)
            },
            revealed,
        );
    }

    html! {
        <section ref={section_ref} id={Section::Skills.id()} class="section section--alt">
            <div class="container">
                <Reveal {revealed} class="section-header">
                    <h2 class="section-title">{"Skills & "}<span class="text-gradient-primary">{"Expertise"}</span></h2>
                    <p class="section-lead">
                        {"A comprehensive toolkit spanning machine learning, web development, and emerging technologies to build innovative solutions."}
                    </p>
                </Reveal>

                <div class="card-grid card-grid--3">
                    { for SKILL_CATEGORIES.iter().enumerate().map(|(index, category)| html! {
                        <Reveal {revealed} delay_ms={index as u32 * 150} key={category.title}>
                            <div class="card hover-lift">
                                <div class={classes!("icon-badge", category.accent.class())}>{ category.icon }</div>
                                <h3 class="card__title">{ category.title }</h3>
                                <div class="skill-list">
                                    { for category.skills.iter().map(|skill| html! {
                                        <div class="skill" key={skill.name}>
                                            <div class="skill__row">
                                                <span>{ skill.name }</span>
                                                <span class="muted">{ format!("{}%", skill.level) }</span>
                                            </div>
                                            <div class="progress">
                                                <div class="progress__bar" style={bar_style(skill.level, *filled)}></div>
                                            </div>
                                        </div>
                                    }) }
                                </div>
                            </div>
                        </Reveal>
                    }) }
                </div>

                <Reveal {revealed} delay_ms={700} class="tech-stack">
                    <h3 class="subsection-title centered">{"Technologies I "}<span class="text-gradient-neural">{"Work With"}</span></h3>
                    <div class="chips">
                        { for TECHNOLOGIES.iter().map(|tech| html! { <div class="chip" key={*tech}>{ *tech }</div> }) }
                    </div>
                </Reveal>
            </div>

            <style>
                {r#"
                .skill-list { display: flex; flex-direction: column; gap: 1rem; }
                .skill { display: flex; flex-direction: column; gap: 0.5rem; }
                .skill__row { display: flex; justify-content: space-between; font-size: 0.875rem; font-weight: 500; }
                .progress {
                    height: 0.5rem;
                    border-radius: 999px;
                    background: rgba(148, 163, 184, 0.2);
                    overflow: hidden;
                }
                .progress__bar {
                    height: 100%;
                    background: var(--gradient-primary);
                    transition: width 1s ease-out;
                }
                .tech-stack { margin-top: 4rem; }
                .chips { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; }
                .chip {
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                    background: rgba(148, 163, 184, 0.1);
                    color: var(--muted);
                    font-size: 0.875rem;
                    font-weight: 500;
                    transition: all 0.3s ease;
                    cursor: default;
                }
                .chip:hover { color: var(--primary); background: rgba(56, 189, 248, 0.1); }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_stay_empty_until_filled() {
        assert_eq!(bar_style(85, false), "width: 0%;");
        assert_eq!(bar_style(85, true), "width: 85%;");
    }
}
