// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `alclock plan <id> --at <time> [--days 1,3,5]` - Show the occurrences an alarm registers

use super::Context;
use crate::error::CliError;
use crate::output::{self, OccurrenceRow};
use crate::time::parse_at;
use alclock_core::{AlarmDefinition, SchedulePlanner};
use anyhow::Result;
use chrono::TimeZone;
use clap::Args;
use std::fmt::Display;

#[derive(Args)]
pub struct PlanArgs {
    /// Alarm id
    pub id: String,

    /// Anchor time: HH:MM (today), local date-time, or RFC 3339
    #[arg(long)]
    pub at: String,

    /// Repeat on these weekdays (1=Monday .. 7=Sunday)
    #[arg(long, value_delimiter = ',')]
    pub days: Vec<u8>,

    /// Sound name (defaults to the configured default sound)
    #[arg(long)]
    pub sound: Option<String>,
}

impl PlanArgs {
    pub fn definition<Tz: TimeZone>(&self, ctx: &Context<Tz>) -> Result<AlarmDefinition, CliError> {
        let fire_at = parse_at(&self.at, &ctx.tz, ctx.now)?;
        let sound = self
            .sound
            .clone()
            .unwrap_or_else(|| ctx.config.default_sound.clone());
        Ok(AlarmDefinition::new(self.id.as_str(), fire_at)
            .with_sound(sound)
            .with_repeat_days(self.days.iter().copied()))
    }
}

pub fn handle<Tz>(args: PlanArgs, ctx: &Context<Tz>) -> Result<()>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let def = args.definition(ctx)?;
    let planner = SchedulePlanner::new(ctx.tz.clone());
    let occurrences = planner
        .compute_occurrences(&def, ctx.now)
        .map_err(|e| CliError::invalid_alarm(&args.id, e))?;

    let rows: Vec<_> = occurrences
        .iter()
        .map(|occurrence| OccurrenceRow::new(occurrence, &ctx.tz))
        .collect();
    output::print_list(&rows, ctx.format);
    Ok(())
}
