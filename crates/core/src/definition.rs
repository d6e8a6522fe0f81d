// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-created alarm definitions

use crate::error::AlarmError;
use crate::weekday::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Sound used when none is given or the requested one cannot be resolved
pub const DEFAULT_SOUND: &str = "alarm1";

/// Stable identifier of a user-created alarm
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlarmId(pub String);

impl AlarmId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AlarmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AlarmId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AlarmId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// An alarm as the user configured it
///
/// `repeat_days` holds raw day numbers so that out-of-range values survive
/// deserialization and are rejected when the alarm is scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmDefinition {
    pub id: AlarmId,
    /// Anchor instant in epoch millis. Repeating alarms reuse its local time of day.
    pub fire_at: i64,
    #[serde(default = "default_sound")]
    pub sound_name: String,
    /// 1=Monday through 7=Sunday; empty means one-time
    #[serde(default)]
    pub repeat_days: Vec<u8>,
}

fn default_sound() -> String {
    DEFAULT_SOUND.to_string()
}

/// Validated recurrence of a definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schedule {
    Once,
    /// Distinct weekdays, duplicates collapsed
    Weekly(BTreeSet<Weekday>),
}

impl AlarmDefinition {
    pub fn new(id: impl Into<AlarmId>, fire_at: i64) -> Self {
        Self {
            id: id.into(),
            fire_at,
            sound_name: default_sound(),
            repeat_days: Vec::new(),
        }
    }

    pub fn with_sound(mut self, sound_name: impl Into<String>) -> Self {
        self.sound_name = sound_name.into();
        self
    }

    pub fn with_repeat_days(mut self, days: impl IntoIterator<Item = u8>) -> Self {
        self.repeat_days = days.into_iter().collect();
        self
    }

    pub fn is_repeating(&self) -> bool {
        !self.repeat_days.is_empty()
    }

    /// Validate the definition and return its recurrence
    pub fn schedule(&self) -> Result<Schedule, AlarmError> {
        if self.id.0.trim().is_empty() {
            return Err(AlarmError::invalid("missing alarm id"));
        }
        if self.repeat_days.is_empty() {
            return Ok(Schedule::Once);
        }
        let days = self
            .repeat_days
            .iter()
            .map(|&n| Weekday::try_from(n))
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(Schedule::Weekly(days))
    }
}

#[cfg(test)]
#[path = "definition_tests.rs"]
mod tests;
