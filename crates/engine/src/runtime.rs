// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime for the alarm engine
//!
//! Every command locks the session manager, runs the transition, and
//! executes the resulting effects before releasing the lock. Fire, stop,
//! snooze, and cancel are therefore serialized against one state machine.

use crate::{error::RuntimeError, Executor};
use alclock_adapters::{DeliveryAdapter, PresenterAdapter};
use alclock_core::{
    AlarmDefinition, AlarmId, AlarmSession, CancelAllUnsupported, Clock, Effect, FireEvent,
    OccurrenceId, ScheduledOccurrence, SessionManager,
};
use chrono::TimeZone;
use std::time::Duration;
use tokio::sync::Mutex;

/// Runtime that owns the alarm session and delegates its effects
pub struct Runtime<D, P, C: Clock, Tz: TimeZone> {
    executor: Executor<D, P>,
    clock: C,
    manager: Mutex<SessionManager<Tz>>,
}

impl<D, P, C, Tz> Runtime<D, P, C, Tz>
where
    D: DeliveryAdapter,
    P: PresenterAdapter,
    C: Clock,
    Tz: TimeZone + Send + Sync,
    Tz::Offset: Send + Sync,
{
    pub fn new(executor: Executor<D, P>, clock: C, manager: SessionManager<Tz>) -> Self {
        Self {
            executor,
            clock,
            manager: Mutex::new(manager),
        }
    }

    pub fn executor(&self) -> &Executor<D, P> {
        &self.executor
    }

    /// Current session state
    pub async fn session(&self) -> AlarmSession {
        self.manager.lock().await.session().clone()
    }

    /// Whether an alarm is ringing right now
    pub async fn is_ringing(&self) -> bool {
        self.manager.lock().await.session().is_ringing()
    }

    /// Validate and register every occurrence of `def`
    pub async fn schedule_alarm(
        &self,
        def: &AlarmDefinition,
    ) -> Result<Vec<ScheduledOccurrence>, RuntimeError> {
        let manager = self.manager.lock().await;
        let (occurrences, effects) = manager.schedule_alarm(def, self.clock.now_millis())?;
        self.delegate(effects).await?;
        Ok(occurrences)
    }

    /// Unregister the bare id and all seven weekday variants of an alarm
    pub async fn cancel_alarm(&self, alarm_id: &AlarmId) -> Result<Vec<OccurrenceId>, RuntimeError> {
        let manager = self.manager.lock().await;
        let (targets, effects) = manager.cancel_alarm(alarm_id);
        self.delegate(effects).await?;
        Ok(targets)
    }

    pub async fn cancel_snooze(&self, alarm_id: &AlarmId) -> Result<OccurrenceId, RuntimeError> {
        let manager = self.manager.lock().await;
        let (target, effects) = manager.cancel_snooze(alarm_id);
        self.delegate(effects).await?;
        Ok(target)
    }

    /// Always answers unsupported: no catalogue of alarm ids is kept
    pub async fn cancel_all_alarms(&self) -> CancelAllUnsupported {
        let manager = self.manager.lock().await;
        let (signal, effects) = manager.cancel_all_alarms();
        // Only emits; nothing to fail
        let _ = self.executor.execute_all(effects).await;
        signal
    }

    pub async fn schedule_snooze(
        &self,
        alarm_id: &AlarmId,
        fire_at: i64,
        sound_name: &str,
    ) -> Result<ScheduledOccurrence, RuntimeError> {
        let manager = self.manager.lock().await;
        let (occurrence, effects) = manager.schedule_snooze(alarm_id, fire_at, sound_name);
        self.delegate(effects).await?;
        Ok(occurrence)
    }

    /// Handle an occurrence reported by the delivery mechanism
    pub async fn on_fire_event(&self, event: FireEvent) -> Result<AlarmSession, RuntimeError> {
        let mut manager = self.manager.lock().await;
        let (session, effects) = manager.on_fire_event(event, self.clock.now_millis());
        self.delegate(effects).await?;
        Ok(session)
    }

    /// Stop `alarm_id`, or whatever is ringing when `None`
    pub async fn on_stop(&self, alarm_id: Option<AlarmId>) -> Result<AlarmSession, RuntimeError> {
        let mut manager = self.manager.lock().await;
        let (session, effects) = manager.on_stop(alarm_id, self.clock.now_millis());
        self.delegate(effects).await?;
        Ok(session)
    }

    /// Snooze the ringing alarm by `delay`, or the configured default
    pub async fn on_snooze_requested(
        &self,
        delay: Option<Duration>,
    ) -> Result<(AlarmSession, Option<ScheduledOccurrence>), RuntimeError> {
        let mut manager = self.manager.lock().await;
        let delay = delay.unwrap_or_else(|| manager.default_snooze());
        let (session, occurrence, effects) =
            manager.on_snooze_requested(delay, self.clock.now_millis());
        self.delegate(effects).await?;
        Ok((session, occurrence))
    }

    async fn delegate(&self, effects: Vec<Effect>) -> Result<(), RuntimeError> {
        let total = effects.len();
        let failures = self.executor.execute_all(effects).await;
        if failures.is_empty() {
            Ok(())
        } else {
            Err(RuntimeError::Delegation { total, failures })
        }
    }
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod tests;
