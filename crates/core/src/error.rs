// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for alarm scheduling

use thiserror::Error;

/// Errors raised when an alarm is scheduled
///
/// Every other core operation is total: stopping or cancelling something
/// that does not exist is a no-op, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlarmError {
    #[error("invalid alarm definition: {0}")]
    InvalidDefinition(String),
    #[error("instant out of range: {0}ms")]
    TimeOutOfRange(i64),
}

impl AlarmError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        AlarmError::InvalidDefinition(reason.into())
    }
}

/// Signal returned by `cancel_all_alarms`
///
/// No catalogue of outstanding alarm ids is kept, so there is nothing to
/// enumerate. Callers track ids themselves and cancel each one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cancelling all alarms is unsupported; cancel each alarm by id")]
pub struct CancelAllUnsupported;
