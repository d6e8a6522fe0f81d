// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `alclock snooze <id> [--minutes N | --at <time>]` - Compute a snooze occurrence

use super::Context;
use crate::output::{self, OccurrenceRow};
use crate::time::parse_at;
use alclock_core::{clock::duration_millis, snooze_occurrence, AlarmId};
use anyhow::Result;
use chrono::TimeZone;
use clap::Args;
use std::fmt::Display;
use std::time::Duration;

#[derive(Args)]
pub struct SnoozeArgs {
    /// Alarm id
    pub id: String,

    /// Minutes from now (defaults to the configured snooze)
    #[arg(long, conflicts_with = "at")]
    pub minutes: Option<u64>,

    /// Exact fire time instead of a delay
    #[arg(long)]
    pub at: Option<String>,

    /// Sound name (defaults to the configured default sound)
    #[arg(long)]
    pub sound: Option<String>,
}

pub fn handle<Tz>(args: SnoozeArgs, ctx: &Context<Tz>) -> Result<()>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let fire_at = match (&args.at, args.minutes) {
        (Some(at), _) => parse_at(at, &ctx.tz, ctx.now)?,
        (None, minutes) => {
            let delay = minutes
                .map(|m| Duration::from_secs(m.saturating_mul(60)))
                .unwrap_or(ctx.config.snooze);
            ctx.now.saturating_add(duration_millis(delay))
        }
    };
    let sound = args
        .sound
        .unwrap_or_else(|| ctx.config.default_sound.clone());

    let occurrence = snooze_occurrence(&AlarmId::new(args.id), &sound, fire_at);
    output::print(&OccurrenceRow::new(&occurrence, &ctx.tz), ctx.format);
    Ok(())
}
