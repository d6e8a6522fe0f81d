// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op presenter adapter

use super::{PresentError, PresenterAdapter};
use alclock_core::{AlarmId, Presentation};
use async_trait::async_trait;

/// Presenter that does nothing
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpPresenterAdapter;

impl NoOpPresenterAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PresenterAdapter for NoOpPresenterAdapter {
    async fn present(&self, _presentation: &Presentation) -> Result<(), PresentError> {
        Ok(())
    }

    async fn dismiss(&self, _alarm_id: &AlarmId) -> Result<(), PresentError> {
        Ok(())
    }
}
