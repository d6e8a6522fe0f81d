// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use crate::time::render;
use alclock_core::ScheduledOccurrence;
use chrono::TimeZone;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Print output in the specified format
pub fn print<T: Serialize + fmt::Display>(value: &T, format: OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", value),
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(value) {
                println!("{}", json);
            }
        }
    }
}

/// Print a list of items
pub fn print_list<T: Serialize + fmt::Display>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            for item in items {
                println!("{}", item);
            }
        }
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(items) {
                println!("{}", json);
            }
        }
    }
}

/// One occurrence, rendered in the display time zone
#[derive(Debug, Clone, Serialize)]
pub struct OccurrenceRow {
    pub occurrence_id: String,
    pub alarm_id: String,
    pub fire_at: i64,
    pub local_time: String,
    pub sound: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekday: Option<u8>,
}

impl OccurrenceRow {
    pub fn new<Tz>(occurrence: &ScheduledOccurrence, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        Self {
            occurrence_id: occurrence.occurrence_id.to_string(),
            alarm_id: occurrence.alarm_id().to_string(),
            fire_at: occurrence.fire_at,
            local_time: render(tz, occurrence.fire_at),
            sound: occurrence.payload.sound_name.clone(),
            weekday: occurrence.payload.weekday.map(u8::from),
        }
    }
}

impl fmt::Display for OccurrenceRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<16} {}", self.occurrence_id, self.local_time)
    }
}

/// A bare occurrence id, as listed by `cancel-targets`
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct TargetRow(pub String);

impl fmt::Display for TargetRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
