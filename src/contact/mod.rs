//! Contact form plumbing: field state, validation, delivery through the
//! hosted email relay, and the copy-email affordance.

pub mod clipboard;
pub mod delivery;
pub mod form;
pub mod submission;

pub use clipboard::{copied_toast, write_text, CopyGenerations, CopyState, COPY_RESET_MS};
pub use delivery::{DeliveryError, DeliveryService, EmailJs};
pub use form::{ContactForm, Field, ValidationError};
pub use submission::{
    failed_toast, invalid_toast, sent_toast, submit, ContactAction, ContactState, SubmissionStatus, SubmitError,
};
