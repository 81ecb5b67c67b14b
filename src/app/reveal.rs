use std::time::Duration;

use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::reveal::{RevealAction, RevealOptions, RevealState};

/// The observer is attached a moment after mount so layout has settled.
const OBSERVE_AFTER: Duration = Duration::from_millis(100);

pub struct Reveal {
    pub node_ref: NodeRef<html::Section>,
    pub is_visible: Signal<bool>,
}

pub fn use_reveal() -> Reveal {
    use_reveal_with_options(RevealOptions::default())
}

/// Flips `is_visible` when the section behind `node_ref` scrolls into view.
///
/// Updates are committed on the next animation frame, after `options.delay`
/// when one is set. Nothing is written once the owning component is gone.
pub fn use_reveal_with_options(options: RevealOptions) -> Reveal {
    let node_ref = NodeRef::<html::Section>::new();
    let (is_visible, set_visible) = signal(false);
    let observer_options = UseIntersectionObserverOptions::default()
        .immediate(false)
        .thresholds(vec![options.threshold])
        .root_margin(options.root_margin.clone());
    let state = StoredValue::new(RevealState::new(options));

    let commit = move |action: RevealAction| {
        request_animation_frame(move || {
            if let Some(Some(visible)) = state.try_update_value(|s| s.commit(action)) {
                set_visible.try_set(visible);
            }
        });
    };

    let UseIntersectionObserverReturn { resume, stop, .. } =
        use_intersection_observer_with_options(
            node_ref,
            move |entries, _| {
                for entry in entries {
                    let action = state
                        .try_update_value(|s| {
                            s.on_intersection(entry.is_intersecting(), entry.intersection_ratio())
                        })
                        .unwrap_or(RevealAction::Ignore);
                    match action {
                        RevealAction::Ignore => {}
                        RevealAction::Show { after } if !after.is_zero() => {
                            set_timeout(move || commit(action), after);
                        }
                        _ => commit(action),
                    }
                }
            },
            observer_options,
        );

    Effect::new(move |_| {
        if node_ref.get().is_none() {
            return;
        }
        let resume = resume.clone();
        set_timeout(
            move || {
                if state.try_with_value(RevealState::is_mounted).unwrap_or(false) {
                    resume();
                }
            },
            OBSERVE_AFTER,
        );
    });

    Effect::watch(
        move || is_visible.get(),
        move |visible, _, _| {
            if *visible && state.try_with_value(RevealState::is_finished).unwrap_or(false) {
                stop();
            }
        },
        false,
    );

    on_cleanup(move || {
        state.try_update_value(RevealState::teardown);
    });

    Reveal {
        node_ref,
        is_visible: is_visible.into(),
    }
}

/// Tailwind classes for the standard fade-and-rise entrance.
pub fn fade_up(visible: bool) -> &'static str {
    if visible {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-10"
    }
}
