// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effects and events for alarm orchestration
//!
//! The core never talks to the delivery mechanism or the alarm UI itself.
//! Every transition returns effects describing that work, and the engine
//! executes them against adapters.

use crate::definition::AlarmId;
use crate::occurrence::{OccurrenceId, ScheduledOccurrence};
use crate::sound::ResolvedSound;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Effects are side effects that transitions request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Emit an event for other components to observe
    Emit(Event),
    /// Register an occurrence with the delivery mechanism
    Register { occurrence: ScheduledOccurrence },
    /// Unregister an occurrence; absent registrations are ignored
    Unregister { occurrence_id: OccurrenceId },
    /// Render the alarm UI, start sound and vibration, keep the device awake
    Present(Presentation),
    /// Tear down whatever `Present` started for this alarm
    Dismiss { alarm_id: AlarmId },
}

impl Effect {
    pub fn name(&self) -> &'static str {
        match self {
            Effect::Emit(_) => "emit",
            Effect::Register { .. } => "register",
            Effect::Unregister { .. } => "unregister",
            Effect::Present(_) => "present",
            Effect::Dismiss { .. } => "dismiss",
        }
    }

    /// Key fields for structured logging
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            Effect::Emit(event) => vec![("event", event.name().to_string())],
            Effect::Register { occurrence } => vec![
                ("occurrence_id", occurrence.occurrence_id.to_string()),
                ("fire_at", occurrence.fire_at.to_string()),
            ],
            Effect::Unregister { occurrence_id } => {
                vec![("occurrence_id", occurrence_id.to_string())]
            }
            Effect::Present(p) => vec![
                ("alarm_id", p.alarm_id.to_string()),
                ("sound", p.sound.name.clone()),
            ],
            Effect::Dismiss { alarm_id } => vec![("alarm_id", alarm_id.to_string())],
        }
    }
}

/// Everything the presentation layer needs to start ringing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presentation {
    pub alarm_id: AlarmId,
    pub occurrence_id: OccurrenceId,
    pub sound: ResolvedSound,
    /// Upper bound on how long the device is kept awake for this session
    #[serde(with = "humantime_serde")]
    pub ring_timeout: Duration,
}

/// Events emitted by transitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    AlarmScheduled {
        alarm_id: String,
        occurrences: usize,
    },
    AlarmCancelled {
        alarm_id: String,
    },
    CancelAllUnsupported,
    SnoozeScheduled {
        alarm_id: String,
        fire_at: i64,
    },
    SnoozeCancelled {
        alarm_id: String,
    },

    AlarmRinging {
        alarm_id: String,
        occurrence_id: String,
    },
    SessionSuperseded {
        previous: String,
        next: String,
    },
    AlarmStopped {
        alarm_id: String,
    },
    AlarmSnoozed {
        alarm_id: String,
        fire_at: i64,
    },
    OccurrenceRearmed {
        occurrence_id: String,
        fire_at: i64,
    },
}

impl Event {
    /// Event name, formatted "category:action"
    pub fn name(&self) -> &'static str {
        match self {
            Event::AlarmScheduled { .. } => "alarm:scheduled",
            Event::AlarmCancelled { .. } => "alarm:cancelled",
            Event::CancelAllUnsupported => "alarm:cancel_all_unsupported",
            Event::SnoozeScheduled { .. } => "snooze:scheduled",
            Event::SnoozeCancelled { .. } => "snooze:cancelled",

            Event::AlarmRinging { .. } => "session:ringing",
            Event::SessionSuperseded { .. } => "session:superseded",
            Event::AlarmStopped { .. } => "session:stopped",
            Event::AlarmSnoozed { .. } => "session:snoozed",
            Event::OccurrenceRearmed { .. } => "occurrence:rearmed",
        }
    }
}
