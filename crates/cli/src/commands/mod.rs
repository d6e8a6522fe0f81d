// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod cancel;
pub mod plan;
pub mod run;
pub mod snooze;

use crate::output::OutputFormat;
use alclock_core::AlarmConfig;
use chrono::TimeZone;

/// Everything a command needs besides its own arguments
pub struct Context<Tz: TimeZone> {
    /// Zone used to read and print local times
    pub tz: Tz,
    /// Epoch millis treated as "now"
    pub now: i64,
    pub config: AlarmConfig,
    pub format: OutputFormat,
}
