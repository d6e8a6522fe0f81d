// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Alarm delivery adapters
//!
//! The delivery mechanism invokes a callback at a wall-clock instant, even if
//! the device is idle or the process restarted. On a phone this is the exact,
//! wake-capable OS alarm primitive; here it is an injected capability.

mod noop;
mod timer;

pub use noop::NoOpDeliveryAdapter;
pub use timer::{TimerDelivery, TIMER_CHANNEL_CAPACITY};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{DeliveryCall, FakeDeliveryAdapter};

use alclock_core::{DeliveryPayload, OccurrenceId};
use async_trait::async_trait;
use thiserror::Error;

/// Errors from delivery operations
#[derive(Debug, Clone, Error)]
pub enum DeliveryError {
    #[error("registration rejected: {0}")]
    Rejected(String),
    #[error("delivery mechanism unavailable: {0}")]
    Unavailable(String),
}

/// Adapter for the platform's timed delivery mechanism
#[async_trait]
pub trait DeliveryAdapter: Clone + Send + Sync + 'static {
    /// Register an occurrence, replacing any registration under the same id
    async fn register(
        &self,
        occurrence_id: &OccurrenceId,
        fire_at: i64,
        payload: &DeliveryPayload,
    ) -> Result<(), DeliveryError>;

    /// Unregister an occurrence. Unknown ids are not an error.
    async fn unregister(&self, occurrence_id: &OccurrenceId) -> Result<(), DeliveryError>;
}
