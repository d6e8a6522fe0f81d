// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake presenter adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{PresentError, PresenterAdapter};
use alclock_core::{AlarmId, Presentation};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Recorded presenter call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentCall {
    Present(Presentation),
    Dismiss(AlarmId),
}

/// Fake presenter adapter for testing
#[derive(Clone, Default)]
pub struct FakePresenterAdapter {
    calls: Arc<Mutex<Vec<PresentCall>>>,
    presenting: Arc<Mutex<Option<AlarmId>>>,
}

impl FakePresenterAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<PresentCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// The alarm currently on screen, if any
    pub fn presenting(&self) -> Option<AlarmId> {
        self.presenting
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl PresenterAdapter for FakePresenterAdapter {
    async fn present(&self, presentation: &Presentation) -> Result<(), PresentError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(PresentCall::Present(presentation.clone()));
        *self.presenting.lock().unwrap_or_else(|e| e.into_inner()) =
            Some(presentation.alarm_id.clone());
        Ok(())
    }

    async fn dismiss(&self, alarm_id: &AlarmId) -> Result<(), PresentError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(PresentCall::Dismiss(alarm_id.clone()));
        let mut presenting = self.presenting.lock().unwrap_or_else(|e| e.into_inner());
        if presenting.as_ref() == Some(alarm_id) {
            *presenting = None;
        }
        Ok(())
    }
}
