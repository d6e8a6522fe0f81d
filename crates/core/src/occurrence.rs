// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Concrete, dated occurrences handed to the delivery mechanism

use crate::definition::AlarmId;
use crate::weekday::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier under which one occurrence is registered for delivery
///
/// Derived deterministically from the alarm id:
/// - one-time: `{id}`
/// - weekday: `{id}_day_{d}`
/// - snooze: `{id}_snooze`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OccurrenceId(pub String);

impl OccurrenceId {
    pub fn once(alarm_id: &AlarmId) -> Self {
        Self(alarm_id.0.clone())
    }

    pub fn weekly(alarm_id: &AlarmId, day: Weekday) -> Self {
        Self(format!("{}_day_{}", alarm_id, day.number()))
    }

    pub fn snooze(alarm_id: &AlarmId) -> Self {
        Self(format!("{}_snooze", alarm_id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OccurrenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for OccurrenceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for OccurrenceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Data delivered back to the session manager when an occurrence fires
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryPayload {
    pub alarm_id: AlarmId,
    pub sound_name: String,
    /// Set for weekday occurrences only
    pub weekday: Option<Weekday>,
    /// Definition instant whose local time of day weekday occurrences reuse
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<i64>,
}

/// One concrete instance of an alarm's fire time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledOccurrence {
    pub occurrence_id: OccurrenceId,
    /// Epoch millis
    pub fire_at: i64,
    pub payload: DeliveryPayload,
}

impl ScheduledOccurrence {
    pub fn alarm_id(&self) -> &AlarmId {
        &self.payload.alarm_id
    }

    pub fn is_weekly(&self) -> bool {
        self.payload.weekday.is_some()
    }

    pub fn fire_at_utc(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::from_timestamp_millis(self.fire_at)
    }

    /// The fire event the delivery mechanism reports for this occurrence
    pub fn to_fire_event(&self) -> FireEvent {
        FireEvent {
            occurrence_id: self.occurrence_id.clone(),
            alarm_id: self.payload.alarm_id.clone(),
            sound_name: self.payload.sound_name.clone(),
            weekday: self.payload.weekday,
            anchor: self.payload.anchor,
            fire_at: self.fire_at,
        }
    }
}

impl fmt::Display for ScheduledOccurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fire_at_utc() {
            Some(at) => write!(f, "{:<24} {}", self.occurrence_id, at.to_rfc3339()),
            None => write!(f, "{:<24} {}ms", self.occurrence_id, self.fire_at),
        }
    }
}

/// A delivered occurrence, as reported by the delivery mechanism
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FireEvent {
    pub occurrence_id: OccurrenceId,
    pub alarm_id: AlarmId,
    pub sound_name: String,
    #[serde(default)]
    pub weekday: Option<Weekday>,
    #[serde(default)]
    pub anchor: Option<i64>,
    /// The instant the occurrence was registered for, in epoch millis
    pub fire_at: i64,
}

impl FireEvent {
    /// A fire event without registration details (no weekly re-arm)
    pub fn new(
        occurrence_id: impl Into<OccurrenceId>,
        alarm_id: impl Into<AlarmId>,
        sound_name: impl Into<String>,
        fire_at: i64,
    ) -> Self {
        Self {
            occurrence_id: occurrence_id.into(),
            alarm_id: alarm_id.into(),
            sound_name: sound_name.into(),
            weekday: None,
            anchor: None,
            fire_at,
        }
    }
}
