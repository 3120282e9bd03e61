//! Reservation length policy.
//!
//! Resources carry their minimum and maximum reservation length as `HH:mm:ss`
//! strings. [`PolicyDuration`] parses them into whole seconds so comparisons
//! against elapsed time are exact. Both bounds are inclusive.

use crate::error::SlotError;
use crate::slot::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A reservation length bound parsed from `HH:mm:ss`
///
/// Hours are not limited to a day, so `"48:00:00"` is two days.
///
/// ```
/// use varaamo_availability::PolicyDuration;
///
/// let period: PolicyDuration = "01:30:00".parse().unwrap();
/// assert_eq!(period.as_seconds(), 5400);
/// assert_eq!(period.to_string(), "01:30:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PolicyDuration {
    seconds: u32,
}

impl PolicyDuration {
    /// Creates a duration from whole seconds
    #[must_use]
    pub const fn from_seconds(seconds: u32) -> Self {
        Self { seconds }
    }

    /// Creates a duration from hours, minutes and seconds
    ///
    /// Returns `None` if the total does not fit in a `u32` of seconds.
    #[must_use]
    pub fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Option<Self> {
        hours
            .checked_mul(3600)
            .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
            .and_then(|total| total.checked_add(seconds))
            .map(Self::from_seconds)
    }

    /// Total length in seconds
    #[must_use]
    pub const fn as_seconds(self) -> u32 {
        self.seconds
    }

    /// Length as a chrono duration
    #[must_use]
    pub fn as_duration(self) -> chrono::Duration {
        chrono::Duration::seconds(i64::from(self.seconds))
    }

    /// Whether the interval `begin..end` lasts at least this long
    #[must_use]
    pub fn is_reached_by(self, begin: &Timestamp, end: &Timestamp) -> bool {
        begin.elapsed_until(end) >= self.as_duration()
    }

    /// Whether the interval `begin..end` lasts at most this long
    #[must_use]
    pub fn is_respected_by(self, begin: &Timestamp, end: &Timestamp) -> bool {
        begin.elapsed_until(end) <= self.as_duration()
    }
}

fn parse_component(part: &str, value: &str) -> Result<u32, SlotError> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SlotError::InvalidPeriod {
            value: value.to_string(),
        });
    }
    part.parse().map_err(|_| SlotError::InvalidPeriod {
        value: value.to_string(),
    })
}

impl FromStr for PolicyDuration {
    type Err = SlotError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || SlotError::InvalidPeriod {
            value: value.to_string(),
        };

        let parts: Vec<&str> = value.trim().split(':').collect();
        let (hours, minutes, seconds) = match parts.as_slice() {
            [h, m] => (parse_component(h, value)?, parse_component(m, value)?, 0),
            [h, m, s] => (
                parse_component(h, value)?,
                parse_component(m, value)?,
                parse_component(s, value)?,
            ),
            _ => return Err(invalid()),
        };

        if minutes >= 60 || seconds >= 60 {
            return Err(invalid());
        }

        Self::from_hms(hours, minutes, seconds).ok_or_else(invalid)
    }
}

impl TryFrom<String> for PolicyDuration {
    type Error = SlotError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PolicyDuration> for String {
    fn from(value: PolicyDuration) -> Self {
        value.to_string()
    }
}

impl fmt::Display for PolicyDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.seconds / 3600;
        let minutes = (self.seconds % 3600) / 60;
        let seconds = self.seconds % 60;
        write!(f, "{hours:02}:{minutes:02}:{seconds:02}")
    }
}
