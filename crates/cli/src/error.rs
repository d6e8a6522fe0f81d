// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! This module provides enhanced error types that include:
//! - What went wrong (message)
//! - Why it might have happened (context)
//! - How to fix it (suggestions)

use alclock_core::{AlarmError, ConfigError};
use std::fmt;
use std::path::Path;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct CliError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CliError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Set the source error that caused this error.
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Common error builders for typical failure scenarios.
impl CliError {
    /// An alarm definition was rejected by the planner.
    pub fn invalid_alarm(alarm_id: &str, err: AlarmError) -> Self {
        CliError::new(format!("Alarm '{}' is invalid", alarm_id))
            .with_context(err.to_string())
            .with_suggestion("Alarm ids must be non-empty")
            .with_suggestion("Weekdays are numbered 1 (Monday) to 7 (Sunday)")
            .with_source(err)
    }

    /// A time argument could not be parsed.
    pub fn bad_time(input: &str, reason: impl Into<String>) -> Self {
        CliError::new(format!("Cannot understand time '{}'", input))
            .with_context(reason)
            .with_suggestion("Use HH:MM for today, e.g. 07:30")
            .with_suggestion("Use a full timestamp, e.g. 2026-10-12T07:30:00+02:00")
    }

    /// A configuration file could not be loaded.
    pub fn config(path: &Path, err: ConfigError) -> Self {
        CliError::new(format!("Cannot load config {}", path.display()))
            .with_context(err.to_string())
            .with_suggestion("Durations use humantime syntax, e.g. snooze = \"9m\"")
            .with_suggestion("Remove unknown keys; accepted keys are default_sound, sounds, snooze, ring_timeout, log_file")
            .with_source(err)
    }

    /// An alarms file for `run` could not be loaded.
    pub fn alarms_file(path: &Path, reason: impl Into<String>) -> Self {
        CliError::new(format!("Cannot load alarms from {}", path.display()))
            .with_context(reason)
            .with_suggestion("Each alarm is an [[alarm]] table with id and at, plus optional days and sound")
    }
}
