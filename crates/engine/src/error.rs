// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the engine runtime

use crate::ExecuteError;
use alclock_core::AlarmError;
use thiserror::Error;

/// Errors that can occur in the runtime
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Alarm(#[from] AlarmError),
    /// Some delegated effects failed. The session transition still happened.
    #[error("{} of {total} delegated effects failed: {}", .failures.len(), summarize(.failures))]
    Delegation {
        total: usize,
        failures: Vec<ExecuteError>,
    },
}

impl RuntimeError {
    pub fn failures(&self) -> &[ExecuteError] {
        match self {
            RuntimeError::Delegation { failures, .. } => failures,
            RuntimeError::Alarm(_) => &[],
        }
    }
}

fn summarize(failures: &[ExecuteError]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
