// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-process timer delivery backed by tokio tasks
//!
//! Stands in for the OS alarm primitive when the core runs inside a
//! long-lived process. Registrations do not survive a restart.

use super::{DeliveryAdapter, DeliveryError};
use alclock_core::{Clock, DeliveryPayload, FireEvent, OccurrenceId, ScheduledOccurrence};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Buffered fire events before timers start waiting on the receiver
pub const TIMER_CHANNEL_CAPACITY: usize = 64;

type TimerTable = HashMap<OccurrenceId, (u64, JoinHandle<()>)>;

/// Delivery adapter that fires occurrences from sleeping tokio tasks
///
/// Fire events are sent on the channel returned by [`TimerDelivery::new`].
/// Registering an id that is already pending replaces the earlier timer.
#[derive(Clone)]
pub struct TimerDelivery<C: Clock> {
    clock: C,
    sender: mpsc::Sender<FireEvent>,
    timers: Arc<Mutex<TimerTable>>,
    generation: Arc<AtomicU64>,
}

impl<C: Clock + 'static> TimerDelivery<C> {
    pub fn new(clock: C) -> (Self, mpsc::Receiver<FireEvent>) {
        let (sender, receiver) = mpsc::channel(TIMER_CHANNEL_CAPACITY);
        let delivery = Self {
            clock,
            sender,
            timers: Arc::new(Mutex::new(HashMap::new())),
            generation: Arc::new(AtomicU64::new(0)),
        };
        (delivery, receiver)
    }

    /// Occurrence ids with a live timer, sorted
    pub fn pending(&self) -> Vec<OccurrenceId> {
        let timers = self.timers.lock().unwrap_or_else(|e| e.into_inner());
        let mut ids: Vec<_> = timers.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Abort every pending timer
    pub fn shutdown(&self) {
        let mut timers = self.timers.lock().unwrap_or_else(|e| e.into_inner());
        for (occurrence_id, (_, handle)) in timers.drain() {
            tracing::debug!(%occurrence_id, "timer aborted on shutdown");
            handle.abort();
        }
    }

    fn delay_until(&self, fire_at: i64) -> Duration {
        let remaining = fire_at.saturating_sub(self.clock.now_millis());
        Duration::from_millis(u64::try_from(remaining).unwrap_or(0))
    }
}

#[async_trait]
impl<C: Clock + 'static> DeliveryAdapter for TimerDelivery<C> {
    async fn register(
        &self,
        occurrence_id: &OccurrenceId,
        fire_at: i64,
        payload: &DeliveryPayload,
    ) -> Result<(), DeliveryError> {
        if self.sender.is_closed() {
            return Err(DeliveryError::Unavailable(
                "fire event receiver dropped".to_string(),
            ));
        }

        let delay = self.delay_until(fire_at);
        let event = ScheduledOccurrence {
            occurrence_id: occurrence_id.clone(),
            fire_at,
            payload: payload.clone(),
        }
        .to_fire_event();
        let generation = self.generation.fetch_add(1, Ordering::Relaxed);

        // Hold the table lock across spawn so the task cannot observe the
        // table before its own entry is inserted.
        let mut timers = self.timers.lock().unwrap_or_else(|e| e.into_inner());
        let table = Arc::clone(&self.timers);
        let sender = self.sender.clone();
        let id = occurrence_id.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            {
                let mut timers = table.lock().unwrap_or_else(|e| e.into_inner());
                match timers.get(&id) {
                    Some((current, _)) if *current == generation => {
                        timers.remove(&id);
                    }
                    // Replaced or unregistered while sleeping
                    _ => return,
                }
            }
            tracing::debug!(occurrence_id = %id, "timer elapsed");
            if sender.send(event).await.is_err() {
                tracing::warn!(occurrence_id = %id, "fire event dropped, receiver closed");
            }
        });

        if let Some((_, previous)) = timers.insert(occurrence_id.clone(), (generation, handle)) {
            previous.abort();
        }
        Ok(())
    }

    async fn unregister(&self, occurrence_id: &OccurrenceId) -> Result<(), DeliveryError> {
        let removed = self
            .timers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(occurrence_id);
        if let Some((_, handle)) = removed {
            handle.abort();
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "timer_tests.rs"]
mod tests;
