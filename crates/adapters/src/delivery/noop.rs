// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op delivery adapter for dry runs.

use super::{DeliveryAdapter, DeliveryError};
use alclock_core::{DeliveryPayload, OccurrenceId};
use async_trait::async_trait;

/// Delivery adapter that accepts everything and never fires.
///
/// Used when only the computed occurrences matter (planning, previews).
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpDeliveryAdapter;

impl NoOpDeliveryAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DeliveryAdapter for NoOpDeliveryAdapter {
    async fn register(
        &self,
        _occurrence_id: &OccurrenceId,
        _fire_at: i64,
        _payload: &DeliveryPayload,
    ) -> Result<(), DeliveryError> {
        Ok(())
    }

    async fn unregister(&self, _occurrence_id: &OccurrenceId) -> Result<(), DeliveryError> {
        Ok(())
    }
}
