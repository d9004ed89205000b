//! Scroll-triggered entrance animations.
//!
//! Every section owns one `revealed` flag. It starts out `false`, flips to
//! `true` the first time enough of the section is on screen, and then stays
//! there for the lifetime of the component.

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::REVEAL_THRESHOLD;

/// One-way visibility latch for a single section.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealTracker {
    threshold: f64,
    revealed: bool,
}

impl RevealTracker {
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_finite() {
            threshold.clamp(0.0, 1.0)
        } else {
            REVEAL_THRESHOLD
        };
        Self {
            threshold,
            revealed: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feeds one observed intersection ratio. Returns `true` exactly once,
    /// on the transition into the revealed state.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.revealed || !ratio.is_finite() {
            return false;
        }
        if ratio >= self.threshold {
            self.revealed = true;
            return true;
        }
        false
    }
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new(REVEAL_THRESHOLD)
    }
}

/// Live IntersectionObserver registration. Dropping it disconnects the
/// observer, so the registration can never outlive the component holding it.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn observe<F>(element: &Element, threshold: f64, on_reveal: F) -> Result<Self, JsValue>
    where
        F: FnOnce() + 'static,
    {
        let mut tracker = RevealTracker::new(threshold);
        let mut on_reveal = Some(on_reveal);

        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                if tracker.observe(entry.intersection_ratio()) {
                    if let Some(on_reveal) = on_reveal.take() {
                        on_reveal();
                    }
                    // Nothing left to watch for.
                    observer.disconnect();
                    break;
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(RevealTracker::new(threshold).threshold()));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Returns whether the element behind `node` has been scrolled into view.
///
/// Without IntersectionObserver support the section just stays in its
/// hidden state.
#[hook]
pub fn use_reveal(node: NodeRef, threshold: f64) -> bool {
    let revealed = use_state(|| false);

    {
        let setter = revealed.setter();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let registration = match node.cast::<Element>() {
                    Some(element) => {
                        match RevealObserver::observe(&element, threshold, move || setter.set(true)) {
                            Ok(registration) => Some(registration),
                            Err(err) => {
                                warn!("IntersectionObserver unavailable: {:?}", err);
                                None
                            }
                        }
                    }
                    None => {
                        warn!("Reveal target is not mounted");
                        None
                    }
                };

                move || {
                    if registration.is_some() {
                        debug!("Releasing reveal observer");
                    }
                    drop(registration);
                }
            },
            node,
        );
    }

    *revealed
}

/// Reveal that fires as soon as the component mounts, for content that is on
/// screen when the page loads.
#[hook]
pub fn use_mount_reveal() -> bool {
    let revealed = use_state(|| false);

    {
        let setter = revealed.setter();
        use_mount(move || setter.set(true));
    }

    *revealed
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    FadeUp,
    FadeLeft,
    FadeRight,
    ScaleIn,
}

impl Motion {
    pub fn class(self) -> &'static str {
        match self {
            Motion::FadeUp => "reveal--up",
            Motion::FadeLeft => "reveal--left",
            Motion::FadeRight => "reveal--right",
            Motion::ScaleIn => "reveal--scale",
        }
    }

    pub fn classes(self, revealed: bool) -> Classes {
        classes!("reveal", self.class(), revealed.then_some("is-visible"))
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub revealed: bool,
    #[prop_or(Motion::FadeUp)]
    pub motion: Motion,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div class={classes!(props.motion.classes(props.revealed), props.class.clone())} {style}>
            { for props.children.iter() }
        </div>
    }
}

/// Shared transition rules for every `Reveal` wrapper on the page.
pub const REVEAL_CSS: &str = r#"
.reveal {
    opacity: 0;
    transition: opacity 0.7s ease-out, transform 0.7s ease-out;
    will-change: opacity, transform;
}
.reveal--up { transform: translateY(40px); }
.reveal--left { transform: translateX(-40px); }
.reveal--right { transform: translateX(40px); }
.reveal--scale { transform: scale(0.85); transition-duration: 0.5s; }
.reveal.is-visible {
    opacity: 1;
    transform: none;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_hidden_below_threshold() {
        let mut tracker = RevealTracker::new(0.3);
        assert!(!tracker.observe(0.0));
        assert!(!tracker.observe(0.1));
        assert!(!tracker.observe(0.29));
        assert!(!tracker.is_revealed());
    }

    #[test]
    fn reveals_once_at_threshold() {
        let mut tracker = RevealTracker::new(0.3);
        assert!(tracker.observe(0.3));
        assert!(tracker.is_revealed());
        assert!(!tracker.observe(0.8));
        assert!(!tracker.observe(1.0));
        assert!(tracker.is_revealed());
    }

    #[test]
    fn never_reverts_after_scrolling_away() {
        let mut tracker = RevealTracker::default();
        tracker.observe(0.5);
        for ratio in [0.2, 0.0, 0.0, 0.1] {
            assert!(!tracker.observe(ratio));
        }
        assert!(tracker.is_revealed());
    }

    #[test]
    fn just_under_threshold_stays_hidden() {
        let mut tracker = RevealTracker::new(0.3);
        assert!(!tracker.observe(0.2999));
        assert!(!tracker.is_revealed());
        assert!(tracker.observe(0.3));
    }

    #[test]
    fn threshold_is_sanitized() {
        assert_eq!(RevealTracker::new(1.7).threshold(), 1.0);
        assert_eq!(RevealTracker::new(-0.2).threshold(), 0.0);
        assert_eq!(RevealTracker::new(f64::NAN).threshold(), REVEAL_THRESHOLD);
    }

    #[test]
    fn ignores_non_finite_ratios() {
        let mut tracker = RevealTracker::new(0.3);
        assert!(!tracker.observe(f64::NAN));
        assert!(!tracker.is_revealed());
    }

    #[test]
    fn sections_reveal_independently() {
        let mut about = RevealTracker::default();
        let mut projects = RevealTracker::default();

        assert!(projects.observe(0.6));
        assert!(!about.is_revealed());

        assert!(!about.observe(0.1));
        assert!(about.observe(0.4));
        assert!(projects.is_revealed());
    }

    #[test]
    fn motion_classes_follow_visibility() {
        let hidden = Motion::FadeLeft.classes(false);
        assert!(hidden.contains("reveal--left"));
        assert!(!hidden.contains("is-visible"));
        assert!(Motion::ScaleIn.classes(true).contains("is-visible"));
    }
}
