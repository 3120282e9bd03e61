//! Selectors turning availability state into what the grid and sidebar render.
//!
//! All functions here are pure and read only the snapshot they are given.

use crate::slot::{ResourceId, Slot, Timestamp};
use crate::types::{AvailabilityState, SelectionState};
use chrono::NaiveDate;
use serde::Serialize;

/// How the displayed selection came about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionKind {
    /// Only the anchor slot is selected
    Anchored,
    /// Anchor stretched to the hovered slot, not yet committed
    Extending,
    /// Nothing clicked; the slot under the pointer
    Hover,
}

/// The interval the grid highlights
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayedSelection {
    /// Resource of the highlighted interval
    pub resource_id: ResourceId,
    /// Start of the highlighted interval
    pub begin: Timestamp,
    /// End of the highlighted interval
    pub end: Timestamp,
    /// How the interval came about
    pub kind: SelectionKind,
}

impl DisplayedSelection {
    fn from_slot(slot: &Slot, kind: SelectionKind) -> Self {
        Self {
            resource_id: slot.resource_id().clone(),
            begin: *slot.begin(),
            end: *slot.end(),
            kind,
        }
    }

    /// Whether this is only a pointer preview with nothing clicked
    #[must_use]
    pub const fn is_hover(&self) -> bool {
        matches!(self.kind, SelectionKind::Hover)
    }

    /// Whether `slot` lies inside the highlighted interval
    #[must_use]
    pub fn contains(&self, slot: &Slot) -> bool {
        self.resource_id == *slot.resource_id()
            && *slot.begin() >= self.begin
            && *slot.end() <= self.end
    }
}

/// Props handed to the grid, sidebar and date picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityViewModel {
    /// Interval to highlight
    pub selection: Option<DisplayedSelection>,
    /// Resource to highlight in the sidebar
    pub selected_resource_id: Option<ResourceId>,
    /// Day shown, passed through from the date picker
    pub date: NaiveDate,
}

/// The interval to highlight for a selection state
#[must_use]
pub fn displayed_selection(selection: &SelectionState) -> Option<DisplayedSelection> {
    match selection {
        SelectionState::Idle { hover: None } => None,
        SelectionState::Idle { hover: Some(hover) } => {
            Some(DisplayedSelection::from_slot(hover, SelectionKind::Hover))
        },
        SelectionState::Anchored { anchor, hover: None } => {
            Some(DisplayedSelection::from_slot(anchor, SelectionKind::Anchored))
        },
        SelectionState::Anchored {
            anchor,
            hover: Some(hover),
        } => Some(DisplayedSelection {
            end: *hover.end(),
            ..DisplayedSelection::from_slot(anchor, SelectionKind::Extending)
        }),
    }
}

/// Everything the rendering collaborators need from one state snapshot
#[must_use]
pub fn view_model(state: &AvailabilityState) -> AvailabilityViewModel {
    let selection = displayed_selection(&state.selection);
    let selected_resource_id = selection.as_ref().map(|s| s.resource_id.clone());

    AvailabilityViewModel {
        selection,
        selected_resource_id,
        date: state.date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(resource: &str, begin: &str, end: &str) -> Slot {
        Slot::new(
            ResourceId::new(resource).unwrap(),
            format!("2024-01-01T{begin}:00").parse().unwrap(),
            format!("2024-01-01T{end}:00").parse().unwrap(),
        )
        .unwrap()
    }

    fn at(time: &str) -> Timestamp {
        format!("2024-01-01T{time}:00").parse().unwrap()
    }

    #[test]
    fn nothing_to_show_when_clear() {
        assert_eq!(displayed_selection(&SelectionState::default()), None);
    }

    #[test]
    fn hover_alone_is_flagged() {
        let shown = displayed_selection(&SelectionState::Idle {
            hover: Some(slot("r1", "09:00", "09:30")),
        })
        .unwrap();

        assert!(shown.is_hover());
        assert_eq!(shown.begin, at("09:00"));
        assert_eq!(shown.end, at("09:30"));
    }

    #[test]
    fn anchor_alone_is_shown_as_is() {
        let shown = displayed_selection(&SelectionState::Anchored {
            anchor: slot("r1", "09:00", "09:30"),
            hover: None,
        })
        .unwrap();

        assert_eq!(shown.kind, SelectionKind::Anchored);
        assert_eq!(shown.end, at("09:30"));
    }

    #[test]
    fn hover_extends_anchor() {
        let shown = displayed_selection(&SelectionState::Anchored {
            anchor: slot("A", "09:00", "09:30"),
            hover: Some(slot("A", "09:30", "10:00")),
        })
        .unwrap();

        assert_eq!(shown.kind, SelectionKind::Extending);
        assert!(!shown.is_hover());
        assert_eq!(shown.resource_id.as_str(), "A");
        assert_eq!(shown.begin, at("09:00"));
        assert_eq!(shown.end, at("10:00"));
    }

    #[test]
    fn contains_checks_resource_and_range() {
        let shown = displayed_selection(&SelectionState::Anchored {
            anchor: slot("A", "09:00", "09:30"),
            hover: Some(slot("A", "10:00", "10:30")),
        })
        .unwrap();

        assert!(shown.contains(&slot("A", "09:30", "10:00")));
        assert!(shown.contains(&slot("A", "10:00", "10:30")));
        assert!(!shown.contains(&slot("A", "10:30", "11:00")));
        assert!(!shown.contains(&slot("B", "09:30", "10:00")));
    }

    #[test]
    fn view_model_passes_date_through() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let mut state = AvailabilityState::new(date);
        state.selection = SelectionState::Anchored {
            anchor: slot("A", "09:00", "09:30"),
            hover: None,
        };

        let model = view_model(&state);
        assert_eq!(model.date, date);
        assert_eq!(model.selected_resource_id.unwrap().as_str(), "A");

        let json = serde_json::to_value(view_model(&AvailabilityState::new(date))).unwrap();
        assert_eq!(json["date"], "2024-03-15");
        assert!(json["selection"].is_null());
        assert!(json["selectedResourceId"].is_null());
    }
}
