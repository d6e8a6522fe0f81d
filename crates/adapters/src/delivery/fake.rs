// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake delivery adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{DeliveryAdapter, DeliveryError};
use alclock_core::{DeliveryPayload, OccurrenceId, ScheduledOccurrence};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// Recorded delivery call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryCall {
    Register {
        occurrence_id: OccurrenceId,
        fire_at: i64,
    },
    Unregister {
        occurrence_id: OccurrenceId,
    },
}

/// Fake delivery adapter for testing
///
/// Tracks live registrations the way the OS would: registering an existing
/// id replaces it, unregistering an unknown id does nothing.
#[derive(Clone, Default)]
pub struct FakeDeliveryAdapter {
    registered: Arc<Mutex<BTreeMap<OccurrenceId, ScheduledOccurrence>>>,
    calls: Arc<Mutex<Vec<DeliveryCall>>>,
    failure: Arc<Mutex<Option<DeliveryError>>>,
}

impl FakeDeliveryAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<DeliveryCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Live registrations, ordered by occurrence id
    pub fn registered(&self) -> Vec<ScheduledOccurrence> {
        self.registered
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .values()
            .cloned()
            .collect()
    }

    pub fn get(&self, occurrence_id: &str) -> Option<ScheduledOccurrence> {
        self.registered
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(&OccurrenceId::from(occurrence_id))
            .cloned()
    }

    /// Make every subsequent call fail with `error` (`None` to recover)
    pub fn set_failure(&self, error: Option<DeliveryError>) {
        *self.failure.lock().unwrap_or_else(|e| e.into_inner()) = error;
    }

    fn check_failure(&self) -> Result<(), DeliveryError> {
        match self.failure.lock().unwrap_or_else(|e| e.into_inner()).as_ref() {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DeliveryAdapter for FakeDeliveryAdapter {
    async fn register(
        &self,
        occurrence_id: &OccurrenceId,
        fire_at: i64,
        payload: &DeliveryPayload,
    ) -> Result<(), DeliveryError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(DeliveryCall::Register {
                occurrence_id: occurrence_id.clone(),
                fire_at,
            });
        self.check_failure()?;

        self.registered
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(
                occurrence_id.clone(),
                ScheduledOccurrence {
                    occurrence_id: occurrence_id.clone(),
                    fire_at,
                    payload: payload.clone(),
                },
            );
        Ok(())
    }

    async fn unregister(&self, occurrence_id: &OccurrenceId) -> Result<(), DeliveryError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(DeliveryCall::Unregister {
                occurrence_id: occurrence_id.clone(),
            });
        self.check_failure()?;

        self.registered
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(occurrence_id);
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
