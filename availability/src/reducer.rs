//! Reducer for the availability view.
//!
//! Every event is applied synchronously. Clicks that break a selection rule
//! leave the state untouched; the missing feedback is the only signal the
//! user gets.

use crate::config::AvailabilityConfig;
use crate::rules;
use crate::slot::{Selection, Slot};
use crate::types::{AvailabilityAction, AvailabilityState, SelectionState};
use std::sync::Arc;
use varaamo_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

/// Receives each committed selection (the view's `onSelect`)
///
/// Typically opens the reservation form. Closures implement it directly.
pub trait SelectionHandler: Send + Sync {
    /// Called exactly once per committed selection
    fn on_select(&self, selection: Selection);
}

impl<F> SelectionHandler for F
where
    F: Fn(Selection) + Send + Sync,
{
    fn on_select(&self, selection: Selection) {
        self(selection);
    }
}

/// Environment dependencies for the availability reducer
#[derive(Clone, Default)]
pub struct AvailabilityEnvironment {
    /// Validation settings
    pub config: AvailabilityConfig,
    /// Where committed selections go; without one they are dropped
    pub on_select: Option<Arc<dyn SelectionHandler>>,
}

impl AvailabilityEnvironment {
    /// Creates an environment without a selection handler
    #[must_use]
    pub const fn new(config: AvailabilityConfig) -> Self {
        Self {
            config,
            on_select: None,
        }
    }

    /// Installs the handler receiving committed selections
    #[must_use]
    pub fn with_handler(mut self, handler: Arc<dyn SelectionHandler>) -> Self {
        self.on_select = Some(handler);
        self
    }
}

impl std::fmt::Debug for AvailabilityEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AvailabilityEnvironment")
            .field("config", &self.config)
            .field("on_select", &self.on_select.is_some())
            .finish()
    }
}

/// Reducer for the availability view
#[derive(Clone, Copy, Debug, Default)]
pub struct AvailabilityReducer;

impl AvailabilityReducer {
    /// Creates a new `AvailabilityReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn hover_entered(selection: &mut SelectionState, slot: Slot) {
        if selection.accepts_hover(&slot) {
            selection.set_hover(Some(slot));
        } else {
            tracing::trace!(resource = %slot.resource_id(), "Ignored hover outside selectable range");
        }
    }

    fn hover_left(selection: &mut SelectionState, slot: &Slot) {
        // Leave events can arrive after the next enter; only clear our own slot.
        if selection.hover() == Some(slot) {
            selection.set_hover(None);
        }
    }

    fn slot_clicked(
        selection: &mut SelectionState,
        slot: Slot,
        env: &AvailabilityEnvironment,
    ) -> SmallVec<[Effect<AvailabilityAction>; 4]> {
        let anchor = match selection {
            SelectionState::Idle { hover } => {
                let hover = hover.take().filter(|h| rules::hover_fits_anchor(&slot, h));
                tracing::debug!(
                    resource = %slot.resource_id(),
                    begin = %slot.begin(),
                    "Selection started"
                );
                *selection = SelectionState::Anchored { anchor: slot, hover };
                return SmallVec::new();
            },
            SelectionState::Anchored { anchor, .. } => anchor,
        };

        if rules::is_cancel_click(anchor, &slot) {
            tracing::debug!(
                resource = %slot.resource_id(),
                "Selection cancelled by clicking the anchor slot again"
            );
            *selection = SelectionState::default();
            return SmallVec::new();
        }

        match rules::try_extend(anchor, &slot, &env.config) {
            Ok(committed) => {
                tracing::debug!(
                    resource = %committed.resource_id(),
                    begin = %committed.begin(),
                    end = %committed.end(),
                    "Selection committed"
                );
                *selection = SelectionState::default();
                Self::notify(committed, env)
            },
            Err(reason) => {
                tracing::debug!(%reason, "Ignored slot click");
                SmallVec::new()
            },
        }
    }

    fn notify(
        selection: Selection,
        env: &AvailabilityEnvironment,
    ) -> SmallVec<[Effect<AvailabilityAction>; 4]> {
        let Some(handler) = env.on_select.clone() else {
            tracing::warn!("No selection handler installed, dropping committed selection");
            return SmallVec::new();
        };

        smallvec![Effect::fire_and_forget(async move {
            handler.on_select(selection);
        })]
    }
}

impl Reducer for AvailabilityReducer {
    type State = AvailabilityState;
    type Action = AvailabilityAction;
    type Environment = AvailabilityEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            AvailabilityAction::HoverEntered { slot } => {
                Self::hover_entered(&mut state.selection, slot);
                SmallVec::new()
            },
            AvailabilityAction::HoverLeft { slot } => {
                Self::hover_left(&mut state.selection, &slot);
                SmallVec::new()
            },
            AvailabilityAction::SlotClicked { slot } => {
                Self::slot_clicked(&mut state.selection, slot, env)
            },
            AvailabilityAction::Cancel => {
                if state.selection.is_anchored() {
                    tracing::debug!("Selection cancelled");
                    state.selection = SelectionState::default();
                }
                SmallVec::new()
            },
            AvailabilityAction::DateChanged { date } => {
                tracing::debug!(%date, "Date changed");
                state.date = date;
                SmallVec::new()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::period::PolicyDuration;
    use crate::slot::ResourceId;
    use chrono::NaiveDate;
    use varaamo_testing::{ReducerTest, assertions};

    fn slot(resource: &str, begin: &str, end: &str) -> Slot {
        Slot::new(
            ResourceId::new(resource).unwrap(),
            format!("2024-01-01T{begin}:00").parse().unwrap(),
            format!("2024-01-01T{end}:00").parse().unwrap(),
        )
        .unwrap()
    }

    fn bounded(resource: &str, begin: &str, end: &str, min: &str, max: &str) -> Slot {
        slot(resource, begin, end)
            .with_min_period(Some(min.parse::<PolicyDuration>().unwrap()))
            .with_max_period(Some(max.parse::<PolicyDuration>().unwrap()))
    }

    fn user_env() -> AvailabilityEnvironment {
        AvailabilityEnvironment::new(AvailabilityConfig::new(false))
    }

    fn admin_env() -> AvailabilityEnvironment {
        AvailabilityEnvironment::new(AvailabilityConfig::new(true))
    }

    fn handler_env() -> AvailabilityEnvironment {
        user_env().with_handler(Arc::new(|_selection: Selection| {}))
    }

    fn idle() -> AvailabilityState {
        AvailabilityState::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    fn anchored_on(anchor: Slot) -> AvailabilityState {
        let mut state = idle();
        state.selection = SelectionState::Anchored { anchor, hover: None };
        state
    }

    #[test]
    fn first_click_anchors_on_slot() {
        let clicked = slot("r1", "10:00", "10:30");
        let expected = clicked.clone();

        ReducerTest::new(AvailabilityReducer::new())
            .with_env(user_env())
            .given_state(idle())
            .when_action(AvailabilityAction::SlotClicked { slot: clicked })
            .then_state(move |state| {
                assert_eq!(state.selection.anchor(), Some(&expected));
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn first_click_keeps_hover_on_the_clicked_slot() {
        let clicked = slot("r1", "10:00", "10:30");
        let expected = clicked.clone();

        ReducerTest::new(AvailabilityReducer::new())
            .with_env(user_env())
            .given_state(idle())
            .when_actions([
                AvailabilityAction::HoverEntered { slot: clicked.clone() },
                AvailabilityAction::SlotClicked { slot: clicked },
            ])
            .then_state(move |state| {
                assert_eq!(state.selection.hover(), Some(&expected));
            })
            .run();
    }

    #[test]
    fn first_click_drops_hover_on_other_resource() {
        ReducerTest::new(AvailabilityReducer::new())
            .with_env(user_env())
            .given_state(idle())
            .when_actions([
                AvailabilityAction::HoverEntered { slot: slot("r2", "10:00", "10:30") },
                AvailabilityAction::SlotClicked { slot: slot("r1", "10:00", "10:30") },
            ])
            .then_state(|state| {
                assert!(state.selection.is_anchored());
                assert_eq!(state.selection.hover(), None);
            })
            .run();
    }

    #[test]
    fn clicking_anchor_slot_again_cancels() {
        let anchor = slot("r1", "10:00", "10:30");

        ReducerTest::new(AvailabilityReducer::new())
            .with_env(handler_env())
            .given_state(anchored_on(anchor.clone()))
            .when_action(AvailabilityAction::SlotClicked { slot: anchor })
            .then_state(|state| {
                assert!(state.selection.is_clear());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn click_on_other_resource_is_ignored() {
        let anchor = slot("r1", "10:00", "10:30");
        let expected = anchor.clone();

        ReducerTest::new(AvailabilityReducer::new())
            .with_env(handler_env())
            .given_state(anchored_on(anchor))
            .when_action(AvailabilityAction::SlotClicked { slot: slot("r2", "11:00", "11:30") })
            .then_state(move |state| {
                assert_eq!(state.selection.anchor(), Some(&expected));
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn backwards_click_is_ignored() {
        let anchor = slot("r1", "10:00", "10:30");
        let expected = anchor.clone();

        ReducerTest::new(AvailabilityReducer::new())
            .with_env(admin_env())
            .given_state(anchored_on(anchor))
            .when_action(AvailabilityAction::SlotClicked { slot: slot("r1", "09:00", "09:30") })
            .then_state(move |state| {
                assert_eq!(state.selection.anchor(), Some(&expected));
            })
            .run();
    }

    #[test]
    fn regular_user_bounds() {
        // Anchored at 10:00 with a one to two hour policy.
        let cases = [
            ("10:00", "10:30", false),
            ("10:30", "11:00", true),
            ("11:30", "12:00", true),
            ("12:00", "12:30", false),
        ];

        for (begin, end, commits) in cases {
            ReducerTest::new(AvailabilityReducer::new())
                .with_env(handler_env())
                .given_state(anchored_on(slot("r1", "10:00", "10:15")))
                .when_action(AvailabilityAction::SlotClicked {
                    slot: bounded("r1", begin, end, "01:00:00", "02:00:00"),
                })
                .then_state(move |state| {
                    assert_eq!(state.selection.is_anchored(), !commits, "click ending {end}");
                })
                .then_effects(move |effects| {
                    assertions::assert_effects_count(effects, usize::from(commits));
                })
                .run();
        }
    }

    #[test]
    fn admin_ignores_bounds() {
        ReducerTest::new(AvailabilityReducer::new())
            .with_env(admin_env().with_handler(Arc::new(|_selection: Selection| {})))
            .given_state(anchored_on(slot("r1", "10:00", "10:30")))
            .when_action(AvailabilityAction::SlotClicked {
                slot: bounded("r1", "17:00", "17:30", "01:00:00", "02:00:00"),
            })
            .then_state(|state| {
                assert!(state.selection.is_clear());
            })
            .then_effects(assertions::assert_has_future_effect)
            .run();
    }

    #[test]
    fn commit_without_handler_still_resets() {
        ReducerTest::new(AvailabilityReducer::new())
            .with_env(user_env())
            .given_state(anchored_on(slot("r1", "10:00", "10:30")))
            .when_action(AvailabilityAction::SlotClicked { slot: slot("r1", "10:30", "11:00") })
            .then_state(|state| {
                assert!(state.selection.is_clear());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn hover_before_anchor_is_ignored() {
        ReducerTest::new(AvailabilityReducer::new())
            .with_env(user_env())
            .given_state(anchored_on(slot("r1", "10:00", "10:30")))
            .when_action(AvailabilityAction::HoverEntered { slot: slot("r1", "09:30", "10:00") })
            .then_state(|state| {
                assert_eq!(state.selection.hover(), None);
            })
            .run();
    }

    #[test]
    fn hover_after_anchor_previews() {
        let later = slot("r1", "11:00", "11:30");
        let expected = later.clone();

        ReducerTest::new(AvailabilityReducer::new())
            .with_env(user_env())
            .given_state(anchored_on(slot("r1", "10:00", "10:30")))
            .when_action(AvailabilityAction::HoverEntered { slot: later })
            .then_state(move |state| {
                assert_eq!(state.selection.hover(), Some(&expected));
            })
            .run();
    }

    #[test]
    fn stale_hover_leave_is_ignored() {
        let first = slot("r1", "10:00", "10:30");
        let second = slot("r1", "10:30", "11:00");
        let expected = second.clone();

        ReducerTest::new(AvailabilityReducer::new())
            .with_env(user_env())
            .given_state(idle())
            .when_actions([
                AvailabilityAction::HoverEntered { slot: first.clone() },
                AvailabilityAction::HoverEntered { slot: second },
                AvailabilityAction::HoverLeft { slot: first },
            ])
            .then_state(move |state| {
                assert_eq!(state.selection.hover(), Some(&expected));
            })
            .run();
    }

    #[test]
    fn matching_hover_leave_clears_preview() {
        let hovered = slot("r1", "10:00", "10:30");

        ReducerTest::new(AvailabilityReducer::new())
            .with_env(user_env())
            .given_state(idle())
            .when_actions([
                AvailabilityAction::HoverEntered { slot: hovered.clone() },
                AvailabilityAction::HoverLeft { slot: hovered },
            ])
            .then_state(|state| {
                assert!(state.selection.is_clear());
            })
            .run();
    }

    #[test]
    fn explicit_cancel_clears_anchor_and_hover() {
        let mut state = anchored_on(slot("r1", "10:00", "10:30"));
        state.selection.set_hover(Some(slot("r1", "10:30", "11:00")));

        ReducerTest::new(AvailabilityReducer::new())
            .with_env(user_env())
            .given_state(state)
            .when_action(AvailabilityAction::Cancel)
            .then_state(|state| {
                assert!(state.selection.is_clear());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn explicit_cancel_while_idle_keeps_hover() {
        let hovered = slot("r1", "10:00", "10:30");
        let expected = hovered.clone();

        ReducerTest::new(AvailabilityReducer::new())
            .with_env(user_env())
            .given_state(idle())
            .when_actions([
                AvailabilityAction::HoverEntered { slot: hovered },
                AvailabilityAction::Cancel,
            ])
            .then_state(move |state| {
                assert_eq!(state.selection.hover(), Some(&expected));
            })
            .run();
    }

    #[test]
    fn date_change_keeps_selection() {
        let anchor = slot("r1", "10:00", "10:30");
        let expected = anchor.clone();
        let next_day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();

        ReducerTest::new(AvailabilityReducer::new())
            .with_env(user_env())
            .given_state(anchored_on(anchor))
            .when_action(AvailabilityAction::DateChanged { date: next_day })
            .then_state(move |state| {
                assert_eq!(state.date, next_day);
                assert_eq!(state.selection.anchor(), Some(&expected));
            })
            .run();
    }
}
