use std::cell::Cell;
use std::rc::Rc;

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys::{Function, Promise, Reflect};
use yew::Reducible;

use crate::toast::Toast;

/// How long the "copied" check mark stays up.
pub const COPY_RESET_MS: u32 = 2_000;

#[derive(Debug, Error, PartialEq)]
pub enum ClipboardError {
    #[error("clipboard API is not available")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

impl From<JsValue> for ClipboardError {
    fn from(value: JsValue) -> Self {
        ClipboardError::Rejected(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// `navigator.clipboard.writeText(text)`, looked up dynamically so browsers
/// (or insecure origins) without the async clipboard degrade to an error.
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
    let navigator = window.navigator();

    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(ClipboardError::Unavailable);
    }

    let write = Reflect::get(&clipboard, &JsValue::from_str("writeText"))?
        .dyn_into::<Function>()
        .map_err(|_| ClipboardError::Unavailable)?;
    let promise: Promise = write
        .call1(&clipboard, &JsValue::from_str(text))?
        .dyn_into()
        .map_err(|_| ClipboardError::Unavailable)?;

    JsFuture::from(promise).await?;
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyAction {
    Copied(u64),
    Expire(u64),
}

/// Generation counter for copy presses. Clones share the count, so a handler
/// captured in an older render still hands out fresh generations.
#[derive(Clone, Debug, Default)]
pub struct CopyGenerations(Rc<Cell<u64>>);

impl CopyGenerations {
    /// Starts a new copy. Returns the action that shows the check mark and
    /// the one its reset timer dispatches after `COPY_RESET_MS`.
    pub fn next(&self) -> (CopyAction, CopyAction) {
        let generation = self.0.get() + 1;
        self.0.set(generation);
        (CopyAction::Copied(generation), CopyAction::Expire(generation))
    }
}

impl PartialEq for CopyGenerations {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// The check-mark state behind the copy button.
///
/// Each successful copy carries a fresh, increasing generation. A reset timer
/// carries the generation it was started for and is ignored if another copy
/// happened since.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CopyState {
    pub copied: bool,
    generation: u64,
}

impl CopyState {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Reducible for CopyState {
    type Action = CopyAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CopyAction::Copied(generation) if generation > self.generation => Rc::new(Self {
                copied: true,
                generation,
            }),
            CopyAction::Copied(_) => self,
            CopyAction::Expire(generation) if generation == self.generation && self.copied => {
                Rc::new(Self {
                    copied: false,
                    generation: self.generation,
                })
            }
            CopyAction::Expire(_) => self,
        }
    }
}

pub fn copied_toast() -> Toast {
    Toast::new("Copied to clipboard!", "Email address has been copied.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_sets_flag_immediately() {
        let state = Rc::new(CopyState::default()).reduce(CopyAction::Copied(1));
        assert!(state.copied);
        assert_eq!(state.generation(), 1);
    }

    #[test]
    fn timer_for_latest_copy_resets() {
        let state = Rc::new(CopyState::default()).reduce(CopyAction::Copied(1));
        let state = state.reduce(CopyAction::Expire(1));
        assert!(!state.copied);
    }

    #[test]
    fn earlier_timer_does_not_cut_second_copy_short() {
        let state = Rc::new(CopyState::default()).reduce(CopyAction::Copied(1));
        let state = state.reduce(CopyAction::Copied(2));

        let state = state.reduce(CopyAction::Expire(1));
        assert!(state.copied);

        let state = state.reduce(CopyAction::Expire(2));
        assert!(!state.copied);
    }

    #[test]
    fn late_copy_result_is_ignored() {
        let state = Rc::new(CopyState::default()).reduce(CopyAction::Copied(2));
        let state = state.reduce(CopyAction::Expire(2));
        let state = state.reduce(CopyAction::Copied(1));
        assert!(!state.copied);
        assert_eq!(state.generation(), 2);
    }

    #[test]
    fn reset_delay_is_two_seconds() {
        assert_eq!(COPY_RESET_MS, 2_000);
    }

    #[test]
    fn timer_expires_the_generation_it_was_started_for() {
        let generations = CopyGenerations::default();
        let (copied, expire) = generations.next();
        assert_eq!(copied, CopyAction::Copied(1));
        assert_eq!(expire, CopyAction::Expire(1));

        let state = Rc::new(CopyState::default()).reduce(copied);
        assert!(state.copied);
        let state = state.reduce(expire);
        assert!(!state.copied);
    }

    #[test]
    fn overlapping_copies_from_held_handler() {
        let generations = CopyGenerations::default();
        let held = generations.clone();

        let (first, first_expire) = generations.next();
        let (second, second_expire) = held.next();
        assert_eq!(second, CopyAction::Copied(2));

        let state = Rc::new(CopyState::default()).reduce(first).reduce(second);
        let state = state.reduce(first_expire);
        assert!(state.copied);
        let state = state.reduce(second_expire);
        assert!(!state.copied);
    }
}
