use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// How long a toast stays up before dismissing itself.
pub const TOAST_DURATION_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            ..Self::new(title, description)
        }
    }
}

pub enum ToastAction {
    Push(u32, Toast),
    Dismiss(u32),
}

/// Toast id source shared by every `Toaster` clone, including ones captured
/// in callbacks from an earlier render.
#[derive(Clone, Debug, Default)]
pub struct ToastIds(Rc<Cell<u32>>);

impl ToastIds {
    pub fn next(&self) -> u32 {
        let id = self.0.get();
        self.0.set(id.wrapping_add(1));
        id
    }
}

impl PartialEq for ToastIds {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Only the newest toast is shown; pushing replaces whatever is up.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    current: Option<(u32, Toast)>,
}

impl ToastQueue {
    pub fn current(&self) -> Option<&(u32, Toast)> {
        self.current.as_ref()
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Push(id, toast) => Rc::new(Self {
                current: Some((id, toast)),
            }),
            ToastAction::Dismiss(id) => match &self.current {
                Some((current_id, _)) if *current_id == id => Rc::new(Self { current: None }),
                _ => self,
            },
        }
    }
}

/// Handle handed out through context for raising notifications.
#[derive(Clone, PartialEq)]
pub struct Toaster {
    queue: UseReducerHandle<ToastQueue>,
    ids: ToastIds,
}

impl Toaster {
    pub fn show(&self, toast: Toast) {
        let id = self.ids.next();
        self.queue.dispatch(ToastAction::Push(id, toast));

        let dispatcher = self.queue.dispatcher();
        Timeout::new(TOAST_DURATION_MS, move || {
            dispatcher.dispatch(ToastAction::Dismiss(id));
        })
        .forget();
    }

    pub fn dismiss(&self, id: u32) {
        self.queue.dispatch(ToastAction::Dismiss(id));
    }
}

#[hook]
pub fn use_toaster() -> Option<Toaster> {
    use_context::<Toaster>()
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let ids = use_state(ToastIds::default);
    let toaster = Toaster {
        queue: queue.clone(),
        ids: (*ids).clone(),
    };

    let viewport = match queue.current() {
        Some((id, toast)) => {
            let id = *id;
            let onclick = {
                let toaster = toaster.clone();
                Callback::from(move |_: MouseEvent| toaster.dismiss(id))
            };
            let variant = match toast.variant {
                ToastVariant::Default => "toast",
                ToastVariant::Destructive => "toast toast--destructive",
            };
            html! {
                <div class="toast-viewport" role="status" aria-live="polite">
                    <div class={variant} key={id} {onclick}>
                        <div class="toast__title">{ &toast.title }</div>
                        <div class="toast__description">{ &toast.description }</div>
                    </div>
                </div>
            }
        }
        None => html! {},
    };

    html! {
        <ContextProvider<Toaster> context={toaster}>
            { for props.children.iter() }
            { viewport }
            <style>
                {r#"
                .toast-viewport {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    z-index: 100;
                    max-width: 380px;
                    width: calc(100% - 3rem);
                }
                .toast {
                    background: rgba(20, 24, 36, 0.95);
                    border: 1px solid rgba(56, 189, 248, 0.25);
                    border-radius: 12px;
                    padding: 1rem 1.25rem;
                    box-shadow: 0 12px 32px rgba(0, 0, 0, 0.35);
                    cursor: pointer;
                    animation: toastIn 0.3s ease-out;
                }
                .toast--destructive {
                    background: rgba(127, 29, 29, 0.95);
                    border-color: rgba(248, 113, 113, 0.4);
                }
                .toast__title { font-weight: 600; margin-bottom: 0.25rem; }
                .toast__description { font-size: 0.9rem; opacity: 0.85; }
                @keyframes toastIn {
                    from { opacity: 0; transform: translateY(16px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                "#}
            </style>
        </ContextProvider<Toaster>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(queue: Rc<ToastQueue>, ids: &ToastIds, title: &str) -> (Rc<ToastQueue>, u32) {
        let id = ids.next();
        (queue.reduce(ToastAction::Push(id, Toast::new(title, ""))), id)
    }

    #[test]
    fn newest_toast_replaces_previous() {
        let ids = ToastIds::default();
        let queue = Rc::new(ToastQueue::default());
        let (queue, _) = push(queue, &ids, "Copied to clipboard!");
        let (queue, _) = push(queue, &ids, "Message sent!");

        let (id, toast) = queue.current().unwrap();
        assert_eq!(*id, 1);
        assert_eq!(toast.title, "Message sent!");
    }

    #[test]
    fn toaster_held_across_renders_dismisses_its_own_toast() {
        let ids = ToastIds::default();
        // Captured when the send started; another toast shows up meanwhile.
        let held = ids.clone();
        let queue = Rc::new(ToastQueue::default());
        let (queue, _) = push(queue, &ids, "Copied to clipboard!");
        let (queue, sent_id) = push(queue, &held, "Message sent!");

        let queue = queue.reduce(ToastAction::Dismiss(sent_id));
        assert!(queue.current().is_none());
    }

    #[test]
    fn ids_are_shared_between_clones() {
        let ids = ToastIds::default();
        let other = ids.clone();
        assert_eq!(ids.next(), 0);
        assert_eq!(other.next(), 1);
        assert_eq!(ids, other);
        assert_ne!(ids, ToastIds::default());
    }

    #[test]
    fn stale_dismiss_keeps_newer_toast() {
        let ids = ToastIds::default();
        let queue = Rc::new(ToastQueue::default());
        let (queue, _) = push(queue, &ids, "first");
        let (queue, _) = push(queue, &ids, "second");

        // The first toast's timer fires after it was replaced.
        let queue = queue.reduce(ToastAction::Dismiss(0));
        assert_eq!(queue.current().unwrap().1.title, "second");

        let queue = queue.reduce(ToastAction::Dismiss(1));
        assert!(queue.current().is_none());
    }

    #[test]
    fn destructive_variant() {
        let toast = Toast::destructive("Failed to send message", "Please try again");
        assert_eq!(toast.variant, ToastVariant::Destructive);
        assert_eq!(toast.title, "Failed to send message");
    }
}
