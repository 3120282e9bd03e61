//! State and actions of the availability view.

use crate::rules;
use crate::slot::Slot;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use varaamo_core::environment::Clock;

/// Where the user is in choosing an interval
///
/// A hover preview can exist in both states; the anchor only in
/// [`SelectionState::Anchored`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionState {
    /// Nothing clicked yet
    Idle {
        /// Slot under the pointer
        hover: Option<Slot>,
    },
    /// First slot clicked; the next valid click ends the selection
    Anchored {
        /// The first clicked slot; its start is the selection's start
        anchor: Slot,
        /// Later slot under the pointer, previewing the extension
        hover: Option<Slot>,
    },
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::Idle { hover: None }
    }
}

impl SelectionState {
    /// The anchor slot, if a selection is in progress
    #[must_use]
    pub const fn anchor(&self) -> Option<&Slot> {
        match self {
            Self::Idle { .. } => None,
            Self::Anchored { anchor, .. } => Some(anchor),
        }
    }

    /// The hovered slot, if any
    #[must_use]
    pub const fn hover(&self) -> Option<&Slot> {
        match self {
            Self::Idle { hover } | Self::Anchored { hover, .. } => hover.as_ref(),
        }
    }

    /// Whether nothing is selected and nothing is hovered
    #[must_use]
    pub const fn is_clear(&self) -> bool {
        matches!(self, Self::Idle { hover: None })
    }

    /// Whether a selection is in progress
    #[must_use]
    pub const fn is_anchored(&self) -> bool {
        matches!(self, Self::Anchored { .. })
    }

    /// Whether hovering `slot` should replace the current preview
    #[must_use]
    pub fn accepts_hover(&self, slot: &Slot) -> bool {
        rules::accepts_hover(self.anchor(), slot)
    }

    pub(crate) fn set_hover(&mut self, slot: Option<Slot>) {
        match self {
            Self::Idle { hover } | Self::Anchored { hover, .. } => *hover = slot,
        }
    }
}

/// State of one availability view
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvailabilityState {
    /// Interval selection in progress
    pub selection: SelectionState,
    /// Day shown by the grid, owned by the date picker
    pub date: NaiveDate,
}

impl AvailabilityState {
    /// Creates an idle view showing `date`
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            selection: SelectionState::default(),
            date,
        }
    }

    /// Creates an idle view showing the current day
    #[must_use]
    pub fn today(clock: &dyn Clock) -> Self {
        Self::new(clock.now().date_naive())
    }
}

/// Everything the grid, its popups and the date picker can tell the view
///
/// Events are applied in the order they are sent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AvailabilityAction {
    /// Pointer entered a slot
    HoverEntered {
        /// The slot entered
        slot: Slot,
    },

    /// Pointer left a slot
    HoverLeft {
        /// The slot left
        slot: Slot,
    },

    /// A slot was clicked
    SlotClicked {
        /// The slot clicked
        slot: Slot,
    },

    /// A child control (e.g. closing the info popup) abandoned the selection
    Cancel,

    /// The date picker moved to another day
    DateChanged {
        /// The new day
        date: NaiveDate,
    },
}
