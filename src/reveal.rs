//! Scroll-reveal state machine.
//!
//! The browser side (see `app::reveal`) feeds intersection observer entries
//! in and schedules the returned actions; this module decides what those
//! entries mean for the section's `is_visible` flag.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that must be inside the viewport.
    pub threshold: f64,
    /// CSS margin around the root, e.g. `"0px 0px -50px 0px"`.
    pub root_margin: String,
    /// Stop observing after the first reveal.
    pub once: bool,
    /// Extra wait before the reveal is committed, used to stagger sections.
    pub delay: Duration,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px".to_string(),
            once: true,
            delay: Duration::ZERO,
        }
    }
}

impl RevealOptions {
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn root_margin(mut self, margin: impl Into<String>) -> Self {
        self.root_margin = margin.into();
        self
    }

    pub fn once(mut self, once: bool) -> Self {
        self.once = once;
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    /// Commit `visible = true` after the given wait (plus one animation frame).
    Show { after: Duration },
    /// Commit `visible = false` on the next animation frame.
    Hide,
    Ignore,
}

#[derive(Debug, Clone)]
pub struct RevealState {
    options: RevealOptions,
    visible: bool,
    triggered: bool,
    /// Whether the latest observed entry was a crossing.
    crossing: bool,
    mounted: bool,
}

impl RevealState {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            visible: false,
            triggered: false,
            crossing: false,
            mounted: true,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// True once a `once` reveal has fired; the observer can be released.
    pub fn is_finished(&self) -> bool {
        self.options.once && self.triggered
    }

    pub fn on_intersection(&mut self, is_intersecting: bool, ratio: f64) -> RevealAction {
        if !self.mounted || self.is_finished() {
            return RevealAction::Ignore;
        }
        let crossed = is_intersecting && ratio >= self.options.threshold;
        self.crossing = crossed;
        if crossed {
            self.triggered = true;
            RevealAction::Show {
                after: self.options.delay,
            }
        } else if !self.options.once {
            RevealAction::Hide
        } else {
            RevealAction::Ignore
        }
    }

    /// Applies a previously scheduled action. Returns the new flag when it changed.
    ///
    /// Actions are checked against the latest observation, so a delayed show
    /// that lands after the section left the viewport is dropped.
    pub fn commit(&mut self, action: RevealAction) -> Option<bool> {
        if !self.mounted {
            return None;
        }
        let next = match action {
            RevealAction::Show { .. } if !self.crossing => return None,
            RevealAction::Show { .. } => true,
            // a late hide must not undo a `once` reveal
            RevealAction::Hide if self.options.once => return None,
            RevealAction::Hide if self.crossing => return None,
            RevealAction::Hide => false,
            RevealAction::Ignore => return None,
        };
        if next == self.visible {
            None
        } else {
            self.visible = next;
            Some(next)
        }
    }

    pub fn teardown(&mut self) {
        self.mounted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(state: &mut RevealState, is_intersecting: bool, ratio: f64) -> Option<bool> {
        let action = state.on_intersection(is_intersecting, ratio);
        state.commit(action)
    }

    #[test]
    fn test_default_options() {
        let opts = RevealOptions::default();
        assert_eq!(opts.threshold, 0.1);
        assert_eq!(opts.root_margin, "0px");
        assert!(opts.once);
        assert_eq!(opts.delay, Duration::ZERO);
    }

    #[test]
    fn test_once_reveals_exactly_once() {
        let mut state = RevealState::new(RevealOptions::default().threshold(0.25));
        assert_eq!(drive(&mut state, true, 0.1), None);
        assert!(!state.is_visible());

        assert_eq!(drive(&mut state, true, 0.3), Some(true));
        assert!(state.is_finished());

        // leaving and re-entering never changes anything again
        assert_eq!(state.on_intersection(false, 0.0), RevealAction::Ignore);
        assert_eq!(drive(&mut state, false, 0.0), None);
        assert_eq!(drive(&mut state, true, 1.0), None);
        assert!(state.is_visible());
    }

    #[test]
    fn test_toggle_without_once() {
        let mut state = RevealState::new(RevealOptions::default().once(false).threshold(0.5));
        assert_eq!(drive(&mut state, true, 0.6), Some(true));
        // still intersecting but below threshold
        assert_eq!(drive(&mut state, true, 0.4), Some(false));
        assert_eq!(drive(&mut state, true, 0.9), Some(true));
        assert_eq!(drive(&mut state, false, 0.0), Some(false));
        assert_eq!(drive(&mut state, false, 0.0), None);
        assert!(!state.is_finished());
    }

    #[test]
    fn test_delay_is_forwarded() {
        let delay = Duration::from_millis(200);
        let mut state = RevealState::new(RevealOptions::default().delay(delay));
        assert_eq!(
            state.on_intersection(true, 1.0),
            RevealAction::Show { after: delay }
        );
        // not visible until the scheduled commit runs
        assert!(!state.is_visible());
    }

    #[test]
    fn test_teardown_drops_pending_and_future_updates() {
        let mut state = RevealState::new(RevealOptions::default().once(false));
        let pending = state.on_intersection(true, 1.0);
        state.teardown();
        assert_eq!(state.commit(pending), None);
        assert_eq!(state.on_intersection(true, 1.0), RevealAction::Ignore);
        assert!(!state.is_visible());
        assert!(!state.is_mounted());
    }

    #[test]
    fn test_late_hide_cannot_undo_once() {
        let mut state = RevealState::new(RevealOptions::default());
        assert_eq!(drive(&mut state, true, 1.0), Some(true));
        assert_eq!(state.commit(RevealAction::Hide), None);
        assert!(state.is_visible());
    }

    #[test]
    fn test_delayed_show_after_leave_is_dropped() {
        let delay = Duration::from_millis(200);
        let mut state = RevealState::new(RevealOptions::default().once(false).delay(delay));
        let show = state.on_intersection(true, 1.0);
        let hide = state.on_intersection(false, 0.0);
        assert_eq!(state.commit(hide), None);
        // the timer fires after the section already left
        assert_eq!(state.commit(show), None);
        assert!(!state.is_visible());

        // re-entering shows it again
        let show = state.on_intersection(true, 1.0);
        assert_eq!(state.commit(show), Some(true));
    }

    #[test]
    fn test_stale_hide_after_reentry_is_dropped() {
        let mut state = RevealState::new(RevealOptions::default().once(false));
        assert_eq!(drive(&mut state, true, 1.0), Some(true));
        let hide = state.on_intersection(false, 0.0);
        let show = state.on_intersection(true, 1.0);
        assert_eq!(state.commit(hide), None);
        assert_eq!(state.commit(show), None);
        assert!(state.is_visible());
    }

    #[test]
    fn test_delayed_once_reveal_survives_leaving() {
        let delay = Duration::from_millis(200);
        let mut state = RevealState::new(RevealOptions::default().delay(delay));
        let show = state.on_intersection(true, 1.0);
        assert_eq!(state.on_intersection(false, 0.0), RevealAction::Ignore);
        assert_eq!(state.commit(show), Some(true));
        assert!(state.is_visible());
    }

    #[test]
    fn test_threshold_clamped() {
        assert_eq!(RevealOptions::default().threshold(3.0).threshold, 1.0);
        assert_eq!(RevealOptions::default().threshold(-1.0).threshold, 0.0);
    }
}
