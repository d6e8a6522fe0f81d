// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! alclock - wake-up alarm scheduler CLI

mod commands;
mod config;
mod error;
mod logging;
mod output;
mod time;

use alclock_core::{Clock, SystemClock};
use anyhow::Result;
use chrono::{Local, TimeZone, Utc};
use clap::{Parser, Subcommand};
use commands::{cancel, plan, run, snooze, Context};
use error::CliError;
use output::OutputFormat;
use std::fmt::Display;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "alclock",
    version,
    about = "alclock - wake-up alarm scheduler"
)]
struct Cli {
    /// Config file (default: <config dir>/alclock/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Read and print times in UTC instead of the local time zone
    #[arg(long, global = true)]
    utc: bool,

    /// Treat this RFC 3339 instant as the current time
    #[arg(long, global = true)]
    now: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the occurrences an alarm would register
    Plan(plan::PlanArgs),
    /// List the occurrence ids cancelling an alarm unregisters
    CancelTargets(cancel::CancelTargetsArgs),
    /// Compute a snooze occurrence
    Snooze(snooze::SnoozeArgs),
    /// Schedule alarms from a file and ring them in the foreground
    Run(run::RunArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_cli(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<CliError>() {
                Some(cli_error) => eprint!("{cli_error}"),
                None => eprintln!("error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run_cli(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    let _log_guard = logging::setup_logging(config.log_file.as_deref())?;
    let now = time::resolve_now(cli.now.as_deref(), SystemClock.now_millis())?;

    if cli.utc {
        dispatch(cli.command, Context { tz: Utc, now, config, format: cli.format }).await
    } else {
        dispatch(cli.command, Context { tz: Local, now, config, format: cli.format }).await
    }
}

async fn dispatch<Tz>(command: Commands, ctx: Context<Tz>) -> Result<()>
where
    Tz: TimeZone + Send + Sync,
    Tz::Offset: Display + Send + Sync,
{
    match command {
        Commands::Plan(args) => plan::handle(args, &ctx),
        Commands::CancelTargets(args) => cancel::handle(args, &ctx),
        Commands::Snooze(args) => snooze::handle(args, &ctx),
        Commands::Run(args) => run::handle(args, ctx).await,
    }
}
