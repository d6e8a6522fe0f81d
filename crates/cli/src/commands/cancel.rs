// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `alclock cancel-targets <id>` - List the occurrence ids cancelling an alarm unregisters

use super::Context;
use crate::output::{self, TargetRow};
use alclock_core::{cancellation_targets, snooze_target, AlarmId};
use anyhow::Result;
use chrono::TimeZone;
use clap::Args;

#[derive(Args)]
pub struct CancelTargetsArgs {
    /// Alarm id
    pub id: String,

    /// Also list the id of a pending snooze
    #[arg(long)]
    pub include_snooze: bool,
}

pub fn handle<Tz: TimeZone>(args: CancelTargetsArgs, ctx: &Context<Tz>) -> Result<()> {
    let alarm_id = AlarmId::new(args.id);
    let mut rows: Vec<_> = cancellation_targets(&alarm_id)
        .into_iter()
        .map(|id| TargetRow(id.0))
        .collect();
    if args.include_snooze {
        rows.push(TargetRow(snooze_target(&alarm_id).0));
    }
    output::print_list(&rows, ctx.format);
    Ok(())
}
