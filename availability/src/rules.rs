//! Selection rules shared by the reducer and by grids that want to know in
//! advance whether a slot can be clicked.

use crate::config::AvailabilityConfig;
use crate::error::SelectionRejection;
use crate::slot::{Selection, Slot};

/// Whether hovering `slot` should show a preview
///
/// Without an anchor every slot previews. With one, only later slots on the
/// anchor's resource do.
#[must_use]
pub fn accepts_hover(anchor: Option<&Slot>, slot: &Slot) -> bool {
    match anchor {
        None => true,
        Some(anchor) => anchor.same_resource(slot) && slot.begin() > anchor.begin(),
    }
}

/// Whether a hover preview still makes sense after anchoring on `anchor`
#[must_use]
pub fn hover_fits_anchor(anchor: &Slot, hover: &Slot) -> bool {
    anchor.same_resource(hover) && hover.begin() >= anchor.begin()
}

/// Whether clicking `slot` collapses the selection anchored on `anchor`
///
/// Clicking the slot that ends where the anchor ends (the anchor slot
/// itself) cancels.
#[must_use]
pub fn is_cancel_click(anchor: &Slot, slot: &Slot) -> bool {
    anchor.same_resource(slot) && slot.end() == anchor.end()
}

/// Validate a click that would end the selection anchored on `anchor`
///
/// Staff only need the slot on the same resource and not before the anchor.
/// Everyone else must also stay within the clicked slot's minimum and
/// maximum reservation length, measured from the anchor's start to the
/// clicked slot's end.
///
/// # Errors
///
/// Returns the first rule the click breaks.
pub fn try_extend(
    anchor: &Slot,
    slot: &Slot,
    config: &AvailabilityConfig,
) -> Result<Selection, SelectionRejection> {
    if !anchor.same_resource(slot) {
        return Err(SelectionRejection::ResourceMismatch {
            anchored: anchor.resource_id().to_string(),
            clicked: slot.resource_id().to_string(),
        });
    }

    if slot.begin() < anchor.begin() {
        return Err(SelectionRejection::EndsBeforeAnchor);
    }

    if !config.is_admin {
        if let Some(min) = slot.min_period() {
            if !min.is_reached_by(anchor.begin(), slot.end()) {
                return Err(SelectionRejection::ShorterThanMinimum { min });
            }
        }
        if let Some(max) = slot.max_period() {
            if !max.is_respected_by(anchor.begin(), slot.end()) {
                return Err(SelectionRejection::LongerThanMaximum { max });
            }
        }
    }

    Ok(Selection::spanning(anchor, slot))
}
