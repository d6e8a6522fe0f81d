// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! alclock-core: wake-up alarm scheduling core
//!
//! This crate provides:
//! - A pure schedule planner for one-time, weekday and snooze occurrences
//! - The alarm session state machine (at most one ringing alarm)
//! - Effect-based orchestration: no I/O happens here
//! - Configuration and sound resolution

pub mod clock;
pub mod config;
pub mod error;
pub mod weekday;

// Planning and state (order matters for dependencies)
pub mod definition;
pub mod occurrence;
pub mod planner;
pub mod sound;
pub mod effect;
pub mod session;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{AlarmConfig, ConfigError};
pub use definition::{AlarmDefinition, AlarmId, Schedule, DEFAULT_SOUND};
pub use effect::{Effect, Event, Presentation};
pub use error::{AlarmError, CancelAllUnsupported};
pub use occurrence::{DeliveryPayload, FireEvent, OccurrenceId, ScheduledOccurrence};
pub use planner::{
    cancellation_targets, resolve_local, snooze_occurrence, snooze_target, SchedulePlanner,
};
pub use session::{AlarmSession, SessionEvent, SessionManager};
pub use sound::{ResolvedSound, SoundCatalog};
pub use weekday::Weekday;
