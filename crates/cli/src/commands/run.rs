// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `alclock run <alarms.toml>` - Schedule alarms and ring them in the foreground
//!
//! Reads commands from stdin while running:
//! `stop [id]`, `snooze [minutes]`, `cancel <id>`, `cancel-all`, `status`, `quit`.

use super::Context;
use crate::error::CliError;
use crate::output::OccurrenceRow;
use crate::time::parse_at;
use alclock_adapters::{
    ConsolePresenter, DeliveryAdapter, PresenterAdapter, TimerDelivery, TracedDeliveryAdapter,
    TracedPresenterAdapter,
};
use alclock_core::{
    snooze_target, AlarmDefinition, AlarmId, AlarmSession, OccurrenceId, SchedulePlanner,
    SessionManager, SystemClock,
};
use alclock_engine::{Executor, Runtime};
use anyhow::Result;
use chrono::TimeZone;
use clap::Args;
use serde::Deserialize;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::Instant;

#[derive(Args)]
pub struct RunArgs {
    /// TOML file of [[alarm]] tables
    pub alarms: PathBuf,

    /// Exit once this many sessions have rung and ended, and no snooze is pending
    #[arg(long)]
    pub max_rings: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AlarmsFile {
    #[serde(default)]
    alarm: Vec<AlarmEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AlarmEntry {
    id: String,
    at: String,
    #[serde(default)]
    days: Vec<u8>,
    sound: Option<String>,
}

/// A line typed while alarms are running
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Stop(Option<AlarmId>),
    Snooze(Option<Duration>),
    Cancel(AlarmId),
    CancelAll,
    Status,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let verb = words.next().unwrap_or_default();
    let arg = words.next();
    match (verb, arg) {
        ("stop", id) => Ok(Command::Stop(id.map(AlarmId::from))),
        ("snooze", None) => Ok(Command::Snooze(None)),
        ("snooze", Some(minutes)) => minutes
            .parse::<u64>()
            .map(|m| Command::Snooze(Some(Duration::from_secs(m.saturating_mul(60)))))
            .map_err(|_| format!("snooze takes whole minutes, got '{minutes}'")),
        ("cancel", Some(id)) => Ok(Command::Cancel(AlarmId::from(id))),
        ("cancel", None) => Err("cancel needs an alarm id".to_string()),
        ("cancel-all", _) => Ok(Command::CancelAll),
        ("status", _) => Ok(Command::Status),
        ("quit" | "exit", _) => Ok(Command::Quit),
        (other, _) => Err(format!("unknown command '{other}'")),
    }
}

fn load_definitions<Tz: TimeZone>(
    path: &Path,
    ctx: &Context<Tz>,
) -> Result<Vec<AlarmDefinition>, CliError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| CliError::alarms_file(path, e.to_string()))?;
    let file: AlarmsFile =
        toml::from_str(&contents).map_err(|e| CliError::alarms_file(path, e.to_string()))?;

    file.alarm
        .into_iter()
        .map(|entry| {
            let fire_at = parse_at(&entry.at, &ctx.tz, ctx.now)?;
            let sound = entry
                .sound
                .unwrap_or_else(|| ctx.config.default_sound.clone());
            Ok(AlarmDefinition::new(entry.id, fire_at)
                .with_sound(sound)
                .with_repeat_days(entry.days))
        })
        .collect()
}

pub async fn handle<Tz>(args: RunArgs, ctx: Context<Tz>) -> Result<()>
where
    Tz: TimeZone + Send + Sync,
    Tz::Offset: Display + Send + Sync,
{
    let definitions = load_definitions(&args.alarms, &ctx)?;
    let ring_timeout = ctx.config.ring_timeout;

    let (timers, mut fired) = TimerDelivery::new(SystemClock);
    let runtime = Runtime::new(
        Executor::new(
            TracedDeliveryAdapter::new(timers.clone(), SystemClock),
            TracedPresenterAdapter::new(ConsolePresenter::stdout()),
        ),
        SystemClock,
        SessionManager::from_config(SchedulePlanner::new(ctx.tz.clone()), &ctx.config),
    );

    for def in &definitions {
        let occurrences = runtime
            .schedule_alarm(def)
            .await
            .map_err(|e| {
                CliError::new(format!("Cannot schedule alarm '{}'", def.id))
                    .with_context(e.to_string())
                    .with_source(e)
            })?;
        for occurrence in &occurrences {
            println!("scheduled: {}", OccurrenceRow::new(occurrence, &ctx.tz));
        }
    }
    if definitions.is_empty() {
        println!("no alarms to run");
        return Ok(());
    }

    let mut stdin = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let snoozes: Vec<OccurrenceId> = definitions
        .iter()
        .map(|def| snooze_target(&def.id))
        .collect();

    // Alarm to stop automatically once its ring timeout elapses
    let mut ring_deadline: Option<(AlarmId, Instant)> = None;
    let mut rings = 0usize;

    loop {
        let deadline = ring_deadline.as_ref().map(|(_, at)| *at);
        tokio::select! {
            Some(event) = fired.recv() => {
                let session = match runtime.on_fire_event(event).await {
                    Ok(session) => {
                        rings += 1;
                        session
                    }
                    Err(e) => {
                        eprintln!("error: {e}");
                        runtime.session().await
                    }
                };
                // A session whose presentation failed still times out
                if let AlarmSession::Ringing { alarm_id, .. } = session {
                    ring_deadline = Some((alarm_id, Instant::now() + ring_timeout));
                }
            }

            _ = async {
                match deadline {
                    Some(at) => tokio::time::sleep_until(at).await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some((alarm_id, _)) = ring_deadline.take() {
                    tracing::info!(%alarm_id, "ring timeout elapsed");
                    println!("timed out: {alarm_id}");
                    if let Err(e) = runtime.on_stop(Some(alarm_id)).await {
                        eprintln!("error: {e}");
                    }
                }
            }

            line = stdin.next_line(), if stdin_open => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        stdin_open = false;
                        continue;
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "stdin closed");
                        stdin_open = false;
                        continue;
                    }
                };
                if line.trim().is_empty() {
                    continue;
                }
                match parse_command(&line) {
                    Ok(Command::Quit) => break,
                    Ok(command) => {
                        if let Err(e) = apply(&runtime, command, &ctx.tz).await {
                            eprintln!("error: {e}");
                        }
                        if !runtime.is_ringing().await {
                            ring_deadline = None;
                        }
                    }
                    Err(message) => eprintln!("error: {message}"),
                }
            }

            _ = &mut ctrl_c => {
                println!();
                break;
            }
        }

        if rings_exhausted(
            args.max_rings,
            rings,
            runtime.is_ringing().await,
            &timers.pending(),
            &snoozes,
        ) {
            break;
        }
    }

    timers.shutdown();
    Ok(())
}

/// Whether `--max-rings` sessions have rung, none is ringing, and no snooze
/// of a running alarm is still waiting to fire
fn rings_exhausted(
    max_rings: Option<usize>,
    rings: usize,
    ringing: bool,
    pending: &[OccurrenceId],
    snoozes: &[OccurrenceId],
) -> bool {
    let Some(max) = max_rings else {
        return false;
    };
    rings >= max && !ringing && !pending.iter().any(|id| snoozes.contains(id))
}

async fn apply<D, P, Tz>(
    runtime: &Runtime<D, P, SystemClock, Tz>,
    command: Command,
    tz: &Tz,
) -> Result<()>
where
    D: DeliveryAdapter,
    P: PresenterAdapter,
    Tz: TimeZone + Send + Sync,
    Tz::Offset: Display + Send + Sync,
{
    match command {
        Command::Stop(alarm_id) => {
            let session = runtime.on_stop(alarm_id).await?;
            if session.is_ringing() {
                println!("still ringing: {session}");
            }
        }
        Command::Snooze(delay) => {
            let (_, occurrence) = runtime.on_snooze_requested(delay).await?;
            match occurrence {
                Some(occurrence) => println!("snoozed: {}", OccurrenceRow::new(&occurrence, tz)),
                None => println!("nothing is ringing"),
            }
        }
        Command::Cancel(alarm_id) => {
            runtime.cancel_alarm(&alarm_id).await?;
            runtime.cancel_snooze(&alarm_id).await?;
            println!("cancelled: {alarm_id}");
        }
        Command::CancelAll => {
            let signal = runtime.cancel_all_alarms().await;
            println!("{signal}");
        }
        Command::Status => println!("{}", runtime.session().await),
        Command::Quit => {}
    }
    Ok(())
}
