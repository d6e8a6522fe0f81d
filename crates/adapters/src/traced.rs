// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::delivery::{DeliveryAdapter, DeliveryError};
use crate::presenter::{PresentError, PresenterAdapter};
use alclock_core::{AlarmId, Clock, DeliveryPayload, OccurrenceId, Presentation};
use async_trait::async_trait;

/// Wrapper that adds tracing to any DeliveryAdapter
///
/// `clock` should be the one the runtime schedules against, so lateness
/// warnings agree with the fire times it computes.
#[derive(Clone)]
pub struct TracedDeliveryAdapter<D, C: Clock> {
    inner: D,
    clock: C,
}

impl<D, C: Clock> TracedDeliveryAdapter<D, C> {
    pub fn new(inner: D, clock: C) -> Self {
        Self { inner, clock }
    }

    pub fn inner(&self) -> &D {
        &self.inner
    }
}

#[async_trait]
impl<D: DeliveryAdapter, C: Clock + 'static> DeliveryAdapter for TracedDeliveryAdapter<D, C> {
    async fn register(
        &self,
        occurrence_id: &OccurrenceId,
        fire_at: i64,
        payload: &DeliveryPayload,
    ) -> Result<(), DeliveryError> {
        let span = tracing::info_span!(
            "delivery.register",
            occurrence_id = %occurrence_id,
            alarm_id = %payload.alarm_id,
        );
        let _guard = span.enter();

        tracing::info!(fire_at, sound = %payload.sound_name, "registering");

        // Precondition: occurrence ids are derived from their alarm id
        if !occurrence_id.as_str().starts_with(payload.alarm_id.as_str()) {
            tracing::error!("occurrence id does not belong to alarm");
            return Err(DeliveryError::Rejected(format!(
                "occurrence {} does not belong to alarm {}",
                occurrence_id, payload.alarm_id
            )));
        }

        let late_by = self.clock.now_millis().saturating_sub(fire_at);
        if late_by > 0 {
            tracing::warn!(late_by_ms = late_by, "fire time already passed, delivers immediately");
        }

        let start = std::time::Instant::now();
        let result = self.inner.register(occurrence_id, fire_at, payload).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(()) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "registered"),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "register failed"
            ),
        }

        result
    }

    async fn unregister(&self, occurrence_id: &OccurrenceId) -> Result<(), DeliveryError> {
        let span = tracing::info_span!("delivery.unregister", occurrence_id = %occurrence_id);
        let _guard = span.enter();

        let result = self.inner.unregister(occurrence_id).await;
        match &result {
            Ok(()) => tracing::debug!("unregistered"),
            Err(e) => tracing::error!(error = %e, "unregister failed"),
        }

        result
    }
}

/// Wrapper that adds tracing to any PresenterAdapter
#[derive(Clone)]
pub struct TracedPresenterAdapter<P> {
    inner: P,
}

impl<P> TracedPresenterAdapter<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

#[async_trait]
impl<P: PresenterAdapter> PresenterAdapter for TracedPresenterAdapter<P> {
    async fn present(&self, presentation: &Presentation) -> Result<(), PresentError> {
        let span = tracing::info_span!(
            "presenter.present",
            alarm_id = %presentation.alarm_id,
            occurrence_id = %presentation.occurrence_id,
        );
        let _guard = span.enter();

        tracing::info!(
            sound = %presentation.sound.name,
            fallback = presentation.sound.fallback,
            ring_timeout_s = presentation.ring_timeout.as_secs(),
            "presenting"
        );

        let start = std::time::Instant::now();
        let result = self.inner.present(presentation).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(()) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "ringing"),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "present failed"
            ),
        }

        result
    }

    async fn dismiss(&self, alarm_id: &AlarmId) -> Result<(), PresentError> {
        let span = tracing::info_span!("presenter.dismiss", alarm_id = %alarm_id);
        let _guard = span.enter();

        let result = self.inner.dismiss(alarm_id).await;
        // Dismissing a session that already ended is expected after supersede
        match &result {
            Ok(()) => tracing::info!("dismissed"),
            Err(e) => tracing::warn!(error = %e, "dismiss failed (may be expected)"),
        }

        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
