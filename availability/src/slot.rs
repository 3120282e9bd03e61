//! Slots and selections on a resource timeline.
//!
//! The grid offers a [`Slot`] for every bookable interval it renders. A
//! [`Selection`] is what the user ends up choosing: one resource and one
//! interval, spanning one or more consecutive slots.

use crate::error::SlotError;
use crate::period::PolicyDuration;
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a bookable resource (room, equipment)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceId(String);

impl ResourceId {
    /// Creates a resource identifier
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::EmptyResourceId`] if `id` is blank.
    pub fn new(id: impl Into<String>) -> Result<Self, SlotError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(SlotError::EmptyResourceId);
        }
        Ok(Self(id))
    }

    /// Returns the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ResourceId {
    type Error = SlotError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ResourceId> for String {
    fn from(value: ResourceId) -> Self {
        value.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A point in time on the timeline
///
/// Accepts RFC 3339 values (`2024-01-01T10:00:00+02:00`) as sent by the
/// backend, and offset-less values (`2024-01-01T10:00:00`) which are read
/// as UTC. Equality and ordering compare instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timestamp(DateTime<FixedOffset>);

impl Timestamp {
    /// Signed time from `self` until `later`
    #[must_use]
    pub fn elapsed_until(&self, later: &Self) -> chrono::Duration {
        later.0.signed_duration_since(self.0)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value.into())
    }
}

impl FromStr for Timestamp {
    type Err = SlotError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if let Ok(at) = DateTime::parse_from_rfc3339(value) {
            return Ok(Self(at));
        }

        NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| Self::from(Utc.from_utc_datetime(&naive)))
            .map_err(|_| SlotError::InvalidTimestamp {
                value: value.to_string(),
            })
    }
}

impl TryFrom<String> for Timestamp {
    type Error = SlotError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Timestamp> for String {
    fn from(value: Timestamp) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339())
    }
}

/// A candidate interval on one resource's timeline
///
/// Slots are rebuilt by the grid on every render, so two slots are the same
/// slot when all their fields match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawSlot")]
pub struct Slot {
    resource_id: ResourceId,
    begin: Timestamp,
    end: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_period: Option<PolicyDuration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_period: Option<PolicyDuration>,
}

/// Wire shape of a slot, validated into [`Slot`]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSlot {
    resource_id: ResourceId,
    begin: Timestamp,
    end: Timestamp,
    #[serde(default)]
    min_period: Option<PolicyDuration>,
    #[serde(default)]
    max_period: Option<PolicyDuration>,
}

impl TryFrom<RawSlot> for Slot {
    type Error = SlotError;

    fn try_from(raw: RawSlot) -> Result<Self, Self::Error> {
        Ok(Self::new(raw.resource_id, raw.begin, raw.end)?
            .with_min_period(raw.min_period)
            .with_max_period(raw.max_period))
    }
}

impl Slot {
    /// Creates a slot without reservation length limits
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::EndBeforeBegin`] if `end` is before `begin`.
    pub fn new(resource_id: ResourceId, begin: Timestamp, end: Timestamp) -> Result<Self, SlotError> {
        if end < begin {
            return Err(SlotError::EndBeforeBegin {
                begin: begin.to_string(),
                end: end.to_string(),
            });
        }

        Ok(Self {
            resource_id,
            begin,
            end,
            min_period: None,
            max_period: None,
        })
    }

    /// Sets the minimum reservation length of the slot's resource
    #[must_use]
    pub fn with_min_period(mut self, min_period: Option<PolicyDuration>) -> Self {
        self.min_period = min_period;
        self
    }

    /// Sets the maximum reservation length of the slot's resource
    #[must_use]
    pub fn with_max_period(mut self, max_period: Option<PolicyDuration>) -> Self {
        self.max_period = max_period;
        self
    }

    /// Resource this slot belongs to
    #[must_use]
    pub const fn resource_id(&self) -> &ResourceId {
        &self.resource_id
    }

    /// Slot start
    #[must_use]
    pub const fn begin(&self) -> &Timestamp {
        &self.begin
    }

    /// Slot end
    #[must_use]
    pub const fn end(&self) -> &Timestamp {
        &self.end
    }

    /// Shortest reservation the resource accepts
    #[must_use]
    pub const fn min_period(&self) -> Option<PolicyDuration> {
        self.min_period
    }

    /// Longest reservation the resource accepts
    #[must_use]
    pub const fn max_period(&self) -> Option<PolicyDuration> {
        self.max_period
    }

    /// Whether both slots are on the same resource
    #[must_use]
    pub fn same_resource(&self, other: &Self) -> bool {
        self.resource_id == other.resource_id
    }
}

/// A resource and the interval chosen on it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    resource_id: ResourceId,
    begin: Timestamp,
    end: Timestamp,
}

impl Selection {
    /// Creates a selection
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::EndBeforeBegin`] if `end` is before `begin`.
    pub fn new(resource_id: ResourceId, begin: Timestamp, end: Timestamp) -> Result<Self, SlotError> {
        if end < begin {
            return Err(SlotError::EndBeforeBegin {
                begin: begin.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self {
            resource_id,
            begin,
            end,
        })
    }

    /// Selection running from the start of `anchor` to the end of `last`
    ///
    /// Callers check that `last` does not start before `anchor`.
    pub(crate) fn spanning(anchor: &Slot, last: &Slot) -> Self {
        Self {
            resource_id: anchor.resource_id.clone(),
            begin: anchor.begin,
            end: last.end,
        }
    }

    /// Resource the selection is on
    #[must_use]
    pub const fn resource_id(&self) -> &ResourceId {
        &self.resource_id
    }

    /// Selection start
    #[must_use]
    pub const fn begin(&self) -> &Timestamp {
        &self.begin
    }

    /// Selection end
    #[must_use]
    pub const fn end(&self) -> &Timestamp {
        &self.end
    }

    /// Length of the selection
    #[must_use]
    pub fn duration(&self) -> chrono::Duration {
        self.begin.elapsed_until(&self.end)
    }
}
