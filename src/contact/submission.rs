use std::rc::Rc;

use thiserror::Error;
use yew::Reducible;

use super::delivery::{DeliveryError, DeliveryService};
use super::form::{ContactForm, Field, ValidationError};
use crate::toast::Toast;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmissionStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_pending() {
            "Sending..."
        } else {
            "Send Message"
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

/// Validates the form and hands it to `delivery`. An invalid form never
/// reaches the delivery service; a valid one is sent exactly once.
pub async fn submit<D: DeliveryService>(delivery: &D, form: &ContactForm) -> Result<(), SubmitError> {
    form.validate()?;
    delivery.deliver(form).await?;
    Ok(())
}

pub enum ContactAction {
    Edit(Field, String),
    Begin,
    Settled(Result<(), String>),
}

/// Form fields plus where the current submission stands.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactState {
    pub form: ContactForm,
    pub status: SubmissionStatus,
}

impl ContactState {
    /// Whether a submit press should go ahead and dispatch.
    pub fn can_submit(&self) -> bool {
        !self.status.is_pending() && self.form.validate().is_ok()
    }
}

impl Reducible for ContactState {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ContactAction::Edit(field, value) => {
                let mut next = (*self).clone();
                next.form.set(field, value);
                Rc::new(next)
            }
            // Second press while a send is in flight.
            ContactAction::Begin if self.status.is_pending() => self,
            ContactAction::Begin => Rc::new(Self {
                form: self.form.clone(),
                status: SubmissionStatus::Submitting,
            }),
            ContactAction::Settled(Ok(())) => {
                let mut next = (*self).clone();
                next.form.clear();
                next.status = SubmissionStatus::Succeeded;
                Rc::new(next)
            }
            ContactAction::Settled(Err(reason)) => Rc::new(Self {
                form: self.form.clone(),
                status: SubmissionStatus::Failed(reason),
            }),
        }
    }
}

pub fn sent_toast() -> Toast {
    Toast::new(
        "Message sent!",
        "Thank you for reaching out. I'll get back to you soon.",
    )
}

/// Raised when a submit gets past the browser but not past `validate`.
pub fn invalid_toast(err: &ValidationError) -> Toast {
    let description = match err {
        ValidationError::Missing(fields) => {
            let names: Vec<&str> = fields.iter().map(|f| f.label()).collect();
            format!("Please fill in: {}.", names.join(", "))
        }
        ValidationError::InvalidEmail(_) => "Please enter a valid email address.".to_string(),
    };
    Toast::destructive("Message not sent", description)
}

pub fn failed_toast() -> Toast {
    Toast::destructive(
        "Failed to send message",
        "Please try again or contact me directly via email.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    struct FakeDelivery {
        calls: Cell<usize>,
        fail: bool,
    }

    impl FakeDelivery {
        fn ok() -> Self {
            Self { calls: Cell::new(0), fail: false }
        }

        fn failing() -> Self {
            Self { calls: Cell::new(0), fail: true }
        }
    }

    impl DeliveryService for FakeDelivery {
        async fn deliver(&self, _form: &ContactForm) -> Result<(), DeliveryError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                Err(DeliveryError::Rejected {
                    status: 412,
                    body: "Invalid template".into(),
                })
            } else {
                Ok(())
            }
        }
    }

    fn jane() -> ContactForm {
        ContactForm {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            message: "Hello".into(),
        }
    }

    fn filled_state() -> Rc<ContactState> {
        let state = Rc::new(ContactState::default());
        let state = state.reduce(ContactAction::Edit(Field::Name, "Jane Doe".into()));
        let state = state.reduce(ContactAction::Edit(Field::Email, "jane@example.com".into()));
        state.reduce(ContactAction::Edit(Field::Message, "Hello".into()))
    }

    /// Runs one submission through the reducer the way the contact section does.
    fn run(state: Rc<ContactState>, delivery: &FakeDelivery) -> Rc<ContactState> {
        if !state.can_submit() {
            return state;
        }
        let form = state.form.clone();
        let state = state.reduce(ContactAction::Begin);
        assert!(state.status.is_pending());
        let result = block_on(submit(delivery, &form)).map_err(|e| e.to_string());
        state.reduce(ContactAction::Settled(result))
    }

    #[test]
    fn successful_send_clears_form() {
        let delivery = FakeDelivery::ok();
        let state = run(filled_state(), &delivery);

        assert_eq!(delivery.calls.get(), 1);
        assert_eq!(state.form, ContactForm::default());
        assert_eq!(state.status, SubmissionStatus::Succeeded);
        assert!(!state.status.is_pending());
        assert_eq!(state.status.button_label(), "Send Message");
    }

    #[test]
    fn failed_send_keeps_what_was_typed() {
        let delivery = FakeDelivery::failing();
        let state = run(filled_state(), &delivery);

        assert_eq!(delivery.calls.get(), 1);
        assert_eq!(state.form, jane());
        assert!(matches!(state.status, SubmissionStatus::Failed(ref reason) if reason.contains("412")));
        assert!(!state.status.is_pending());
    }

    #[test]
    fn empty_message_never_reaches_delivery() {
        let delivery = FakeDelivery::ok();
        let mut form = jane();
        form.message.clear();

        let result = block_on(submit(&delivery, &form));
        assert!(matches!(result, Err(SubmitError::Invalid(ValidationError::Missing(_)))));
        assert_eq!(delivery.calls.get(), 0);

        let state = Rc::new(ContactState { form, status: SubmissionStatus::Idle });
        let state = run(state, &delivery);
        assert_eq!(delivery.calls.get(), 0);
        assert_eq!(state.status, SubmissionStatus::Idle);
    }

    #[test]
    fn begin_is_ignored_while_in_flight() {
        let state = filled_state().reduce(ContactAction::Begin);
        assert!(!state.can_submit());

        let again = state.clone().reduce(ContactAction::Begin);
        assert!(Rc::ptr_eq(&state, &again));
    }

    #[test]
    fn resubmit_allowed_right_after_failure() {
        let delivery = FakeDelivery::failing();
        let state = run(filled_state(), &delivery);
        assert!(state.can_submit());

        let state = run(state, &delivery);
        assert_eq!(delivery.calls.get(), 2);
        assert_eq!(state.form, jane());
    }

    #[test]
    fn editing_after_success_starts_fresh_form() {
        let delivery = FakeDelivery::ok();
        let state = run(filled_state(), &delivery);
        let state = state.reduce(ContactAction::Edit(Field::Name, "J".into()));
        assert_eq!(state.form.name, "J");
        assert_eq!(state.form.message, "");
    }

    #[test]
    fn whitespace_only_name_is_still_sent() {
        let delivery = FakeDelivery::ok();
        let state = filled_state().reduce(ContactAction::Edit(Field::Name, "   ".into()));
        assert!(state.can_submit());

        let state = run(state, &delivery);
        assert_eq!(delivery.calls.get(), 1);
        assert_eq!(state.status, SubmissionStatus::Succeeded);
    }

    #[test]
    fn invalid_form_explains_itself() {
        let toast = invalid_toast(&ValidationError::Missing(vec![Field::Name, Field::Message]));
        assert_eq!(toast.variant, crate::toast::ToastVariant::Destructive);
        assert_eq!(toast.description, "Please fill in: Name, Message.");

        let toast = invalid_toast(&ValidationError::InvalidEmail("jane".into()));
        assert_eq!(toast.description, "Please enter a valid email address.");
    }

    #[test]
    fn toasts_match_outcome() {
        assert_eq!(sent_toast().title, "Message sent!");
        assert_eq!(failed_toast().variant, crate::toast::ToastVariant::Destructive);
    }
}
