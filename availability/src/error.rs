//! Error types for the availability crate.
//!
//! Invalid clicks are not errors: the reducer ignores them. These types cover
//! malformed input handed over by the grid and malformed configuration.

use crate::period::PolicyDuration;
use thiserror::Error;

/// Errors raised while building slots from grid input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    /// Timestamp was neither RFC 3339 nor a plain `YYYY-MM-DDTHH:MM:SS` value
    #[error("invalid timestamp {value:?}: expected an ISO-8601 date-time")]
    InvalidTimestamp {
        /// The rejected input
        value: String,
    },

    /// Policy duration was not of the form `HH:mm:ss` or `HH:mm`
    #[error("invalid period {value:?}: expected HH:mm:ss")]
    InvalidPeriod {
        /// The rejected input
        value: String,
    },

    /// Resource identifier was empty
    #[error("resource id cannot be empty")]
    EmptyResourceId,

    /// Slot ends before it begins
    #[error("slot ends at {end} before it begins at {begin}")]
    EndBeforeBegin {
        /// Slot start
        begin: String,
        /// Slot end
        end: String,
    },
}

/// Reasons a click cannot extend the current anchor into a selection
///
/// These never reach the user. The reducer logs them and leaves state as is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionRejection {
    /// Clicked slot belongs to another resource than the anchor
    #[error("slot belongs to resource {clicked}, selection is on {anchored}")]
    ResourceMismatch {
        /// Resource of the anchor
        anchored: String,
        /// Resource of the clicked slot
        clicked: String,
    },

    /// Clicked slot starts before the anchor
    #[error("slot starts before the selection")]
    EndsBeforeAnchor,

    /// Resulting reservation would be shorter than the resource allows
    #[error("selection is shorter than the minimum period {min}")]
    ShorterThanMinimum {
        /// Minimum reservation length
        min: PolicyDuration,
    },

    /// Resulting reservation would be longer than the resource allows
    #[error("selection is longer than the maximum period {max}")]
    LongerThanMaximum {
        /// Maximum reservation length
        max: PolicyDuration,
    },
}

/// Errors raised while loading configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A boolean flag had an unrecognized value
    #[error("invalid value {value:?} for {key}: expected true, false, 1 or 0")]
    InvalidFlag {
        /// Environment variable name
        key: &'static str,
        /// The rejected value
        value: String,
    },
}
