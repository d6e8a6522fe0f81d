// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Alarm presentation adapters
//!
//! Presentation covers the alarm UI, sound and vibration, and keeping the
//! device awake for the duration of a ringing session.

mod console;
mod noop;

pub use console::ConsolePresenter;
pub use noop::NoOpPresenterAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakePresenterAdapter, PresentCall};

use alclock_core::{AlarmId, Presentation};
use async_trait::async_trait;
use thiserror::Error;

/// Errors from presentation operations
#[derive(Debug, Clone, Error)]
pub enum PresentError {
    #[error("presentation failed: {0}")]
    Failed(String),
}

/// Adapter for rendering and tearing down a ringing alarm
#[async_trait]
pub trait PresenterAdapter: Clone + Send + Sync + 'static {
    /// Start ringing. Called again for the same alarm restarts it.
    async fn present(&self, presentation: &Presentation) -> Result<(), PresentError>;

    /// Stop ringing. Dismissing an alarm that is not presented is a no-op.
    async fn dismiss(&self, alarm_id: &AlarmId) -> Result<(), PresentError>;
}
