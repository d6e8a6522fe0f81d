// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parsing and rendering of wall-clock times

use crate::error::CliError;
use alclock_core::resolve_local;
use chrono::{DateTime, NaiveDateTime, NaiveTime, TimeZone};
use std::fmt::Display;

const LOCAL_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parse an instant given on the command line into epoch millis
///
/// Accepts RFC 3339, a local date and time, or `HH:MM` meaning today in `tz`.
/// Local times skipped by a DST change move forward the way the planner
/// moves weekday occurrences.
pub fn parse_at<Tz: TimeZone>(input: &str, tz: &Tz, now: i64) -> Result<i64, CliError> {
    let input = input.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(input) {
        return Ok(at.timestamp_millis());
    }

    let naive = match LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
    {
        Some(naive) => naive,
        None => {
            let time = NaiveTime::parse_from_str(input, "%H:%M")
                .map_err(|e| CliError::bad_time(input, e.to_string()))?;
            let today = tz
                .timestamp_millis_opt(now)
                .single()
                .ok_or_else(|| CliError::bad_time(input, "current time is out of range"))?
                .date_naive();
            today.and_time(time)
        }
    };

    // Same DST handling as weekday occurrences
    resolve_local(tz, naive)
        .ok_or_else(|| CliError::bad_time(input, "that local time does not exist in this time zone"))
}

/// Resolve `--now`, falling back to the system clock
pub fn resolve_now(now: Option<&str>, system_now: i64) -> Result<i64, CliError> {
    match now {
        Some(input) => DateTime::parse_from_rfc3339(input.trim())
            .map(|at| at.timestamp_millis())
            .map_err(|e| CliError::bad_time(input, e.to_string())),
        None => Ok(system_now),
    }
}

/// Render epoch millis as e.g. `Tue 2026-10-13 09:00 +00:00`
pub fn render<Tz>(tz: &Tz, millis: i64) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match tz.timestamp_millis_opt(millis).single() {
        Some(at) => at.format("%a %Y-%m-%d %H:%M %:z").to_string(),
        None => format!("{millis}ms"),
    }
}
