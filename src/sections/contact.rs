use gloo_timers::callback::Timeout;
use log::{debug, error, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, MouseEvent};
use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;
use crate::contact::{
    copied_toast, failed_toast, invalid_toast, sent_toast, submit, write_text, ContactAction, ContactState,
    CopyGenerations, CopyState, EmailJs, Field, COPY_RESET_MS,
};
use crate::content::{OWNER_EMAIL, OWNER_LOCATION, SOCIAL_LINKS};
use crate::reveal::{use_reveal, Motion, Reveal};
use crate::scroll::Section;
use crate::toast::use_toaster;

#[function_component(Contact)]
pub fn contact() -> Html {
    let section_ref = use_node_ref();
    let revealed = use_reveal(section_ref.clone(), REVEAL_THRESHOLD);

    let state = use_reducer(ContactState::default);
    let copy = use_reducer(CopyState::default);
    // Read inside callbacks that may fire before the next render hands out
    // fresh handles.
    let in_flight = use_mut_ref(|| false);
    let copy_generations = use_state(CopyGenerations::default);
    let toaster = use_toaster();

    let on_edit = |field: Field| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let value = match field {
                Field::Message => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                Field::Name | Field::Email => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            state.dispatch(ContactAction::Edit(field, value));
        })
    };

    let onsubmit = {
        let state = state.clone();
        let in_flight = in_flight.clone();
        let toaster = toaster.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *in_flight.borrow() || state.status.is_pending() {
                debug!("Contact submit ignored, send in flight");
                return;
            }
            if let Err(err) = state.form.validate() {
                warn!("Contact form rejected: {}", err);
                if let Some(toaster) = &toaster {
                    toaster.show(invalid_toast(&err));
                }
                return;
            }
            *in_flight.borrow_mut() = true;

            let form = state.form.clone();
            state.dispatch(ContactAction::Begin);

            let dispatcher = state.dispatcher();
            let in_flight = in_flight.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                let result = submit(&EmailJs::default(), &form).await;
                *in_flight.borrow_mut() = false;

                let toast = match &result {
                    Ok(()) => sent_toast(),
                    Err(err) => {
                        error!("Contact message failed: {}", err);
                        failed_toast()
                    }
                };
                dispatcher.dispatch(ContactAction::Settled(result.map_err(|err| err.to_string())));

                match toaster {
                    Some(toaster) => toaster.show(toast),
                    None => warn!("No toaster mounted for: {}", toast.title),
                }
            });
        })
    };

    let on_copy = {
        let dispatcher = copy.dispatcher();
        let generations = (*copy_generations).clone();
        let toaster = toaster.clone();
        Callback::from(move |_: MouseEvent| {
            let dispatcher = dispatcher.clone();
            let generations = generations.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                match write_text(OWNER_EMAIL).await {
                    Ok(()) => {
                        let (copied, expire) = generations.next();
                        dispatcher.dispatch(copied);
                        if let Some(toaster) = toaster {
                            toaster.show(copied_toast());
                        }

                        let dispatcher = dispatcher.clone();
                        Timeout::new(COPY_RESET_MS, move || dispatcher.dispatch(expire)).forget();
                    }
                    Err(err) => error!("Failed to copy: {}", err),
                }
            });
        })
    };

    let pending = state.status.is_pending();

    html! {
        <section ref={section_ref} id={Section::Contact.id()} class="section">
            <div class="container">
                <Reveal {revealed} class="section-header">
                    <h2 class="section-title">{"Let's "}<span class="text-gradient-primary">{"Connect"}</span></h2>
                    <p class="section-lead">
                        {"Ready to bring your ideas to life? I'm always excited to discuss new projects, opportunities, and innovative solutions."}
                    </p>
                </Reveal>

                <div class="contact-grid">
                    <Reveal {revealed} motion={Motion::FadeLeft} delay_ms={150}>
                        <h3 class="subsection-title">{"Get in "}<span class="text-gradient-neural">{"Touch"}</span></h3>

                        <div class="contact-info">
                            <div class="card contact-item">
                                <div class="icon-badge accent-primary">{"✉"}</div>
                                <div class="contact-item__body">
                                    <p class="muted small">{"Email"}</p>
                                    <p class="contact-item__value">{ OWNER_EMAIL }</p>
                                </div>
                                <button class="icon-btn" onclick={on_copy} aria-label="Copy email address">
                                    { if copy.copied { "✓" } else { "⧉" } }
                                </button>
                            </div>
                            <div class="card contact-item">
                                <div class="icon-badge accent-primary">{"⌖"}</div>
                                <div class="contact-item__body">
                                    <p class="muted small">{"Location"}</p>
                                    <p class="contact-item__value">{ OWNER_LOCATION }</p>
                                </div>
                            </div>
                        </div>

                        <h4 class="follow-title">{"Follow Me"}</h4>
                        <div class="follow-links">
                            { for SOCIAL_LINKS.iter().map(|link| html! {
                                <a class="icon-btn icon-btn--outline" key={link.label} href={link.href}
                                    target="_blank" rel="noopener noreferrer" aria-label={link.label}>
                                    { link.icon }
                                </a>
                            }) }
                        </div>

                        <div class="card glow-panel availability">
                            <div class="availability__heading">
                                <span class="availability__dot animate-pulse"></span>
                                <span>{"Available for Projects"}</span>
                            </div>
                            <p class="muted small">
                                {"Currently accepting new projects and collaboration opportunities. Let's build something amazing together!"}
                            </p>
                        </div>
                    </Reveal>

                    <Reveal {revealed} motion={Motion::FadeRight} delay_ms={300}>
                        <div class="card">
                            <h3 class="subsection-title">{"Send a Message"}</h3>
                            <form class="contact-form" {onsubmit}>
                                <div class="contact-form__row">
                                    <div>
                                        <label for={Field::Name.key()}>{ Field::Name.label() }</label>
                                        <input
                                            id={Field::Name.key()}
                                            name={Field::Name.key()}
                                            type="text"
                                            placeholder="Your full name"
                                            required={true}
                                            value={state.form.name.clone()}
                                            oninput={on_edit(Field::Name)}
                                        />
                                    </div>
                                    <div>
                                        <label for={Field::Email.key()}>{ Field::Email.label() }</label>
                                        <input
                                            id={Field::Email.key()}
                                            name={Field::Email.key()}
                                            type="email"
                                            placeholder="your.email@example.com"
                                            required={true}
                                            value={state.form.email.clone()}
                                            oninput={on_edit(Field::Email)}
                                        />
                                    </div>
                                </div>
                                <div>
                                    <label for={Field::Message.key()}>{ Field::Message.label() }</label>
                                    <textarea
                                        id={Field::Message.key()}
                                        name={Field::Message.key()}
                                        rows="5"
                                        placeholder="Tell me about your project or idea..."
                                        required={true}
                                        value={state.form.message.clone()}
                                        oninput={on_edit(Field::Message)}
                                    />
                                </div>
                                <button type="submit" class="btn btn-primary btn-block glow-primary" disabled={pending}>
                                    {"➤ "}{ state.status.button_label() }
                                </button>
                            </form>
                        </div>
                    </Reveal>
                </div>
            </div>

            <style>
                {r#"
                .contact-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 3rem;
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .contact-info { display: flex; flex-direction: column; gap: 1.5rem; margin-bottom: 2rem; }
                .contact-item { display: flex; align-items: center; gap: 1rem; padding: 1rem; }
                .contact-item__body { flex: 1; min-width: 0; }
                .contact-item__value { font-weight: 500; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
                .follow-title { font-size: 1.125rem; font-weight: 600; margin-bottom: 1rem; }
                .follow-links { display: flex; gap: 1rem; }
                .availability { margin-top: 2rem; }
                .availability__heading { display: flex; align-items: center; gap: 0.75rem; font-weight: 600; margin-bottom: 0.5rem; }
                .availability__dot { width: 0.75rem; height: 0.75rem; border-radius: 50%; background: var(--primary); }
                .contact-form { display: flex; flex-direction: column; gap: 1.5rem; }
                .contact-form__row { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1rem; }
                .contact-form label { display: block; font-size: 0.875rem; font-weight: 500; margin-bottom: 0.5rem; }
                .contact-form input, .contact-form textarea {
                    width: 100%;
                    padding: 0.625rem 0.75rem;
                    border-radius: 0.5rem;
                    border: 1px solid var(--border);
                    background: rgba(10, 12, 20, 0.5);
                    color: var(--foreground);
                    font: inherit;
                    font-size: 0.875rem;
                }
                .contact-form textarea { resize: none; }
                .contact-form input:focus, .contact-form textarea:focus { outline: none; border-color: var(--primary); }
                .contact-form button:disabled { opacity: 0.5; cursor: not-allowed; }
                @media (max-width: 1024px) {
                    .contact-grid { grid-template-columns: 1fr; }
                }
                @media (max-width: 640px) {
                    .contact-form__row { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
