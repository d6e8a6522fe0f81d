// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effect executor

use alclock_adapters::{DeliveryAdapter, DeliveryError, PresentError, PresenterAdapter};
use alclock_core::{Effect, Event};
use thiserror::Error;

/// Errors that can occur during effect execution
#[derive(Debug, Error)]
pub enum ExecuteError {
    #[error("delivery error: {0}")]
    Delivery(#[from] DeliveryError),
    #[error("presentation error: {0}")]
    Present(#[from] PresentError),
}

/// Executes effects using the configured adapters
#[derive(Clone)]
pub struct Executor<D, P> {
    delivery: D,
    presenter: P,
}

impl<D, P> Executor<D, P>
where
    D: DeliveryAdapter,
    P: PresenterAdapter,
{
    pub fn new(delivery: D, presenter: P) -> Self {
        Self {
            delivery,
            presenter,
        }
    }

    pub fn delivery(&self) -> &D {
        &self.delivery
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Execute a single effect with tracing
    pub async fn execute(&self, effect: Effect) -> Result<(), ExecuteError> {
        let op_name = effect.name();
        let span = tracing::info_span!("effect", effect = op_name);
        let _guard = span.enter();

        tracing::info!(fields = ?effect.fields(), "executing");

        let start = std::time::Instant::now();
        let result = self.execute_inner(effect).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(()) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "completed"),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "failed"
            ),
        }

        result
    }

    async fn execute_inner(&self, effect: Effect) -> Result<(), ExecuteError> {
        match effect {
            Effect::Emit(event) => {
                log_event(&event);
                Ok(())
            }

            Effect::Register { occurrence } => {
                // TracedDeliveryAdapter handles logging and precondition validation
                self.delivery
                    .register(
                        &occurrence.occurrence_id,
                        occurrence.fire_at,
                        &occurrence.payload,
                    )
                    .await?;
                Ok(())
            }

            Effect::Unregister { occurrence_id } => {
                self.delivery.unregister(&occurrence_id).await?;
                Ok(())
            }

            Effect::Present(presentation) => {
                self.presenter.present(&presentation).await?;
                Ok(())
            }

            Effect::Dismiss { alarm_id } => {
                self.presenter.dismiss(&alarm_id).await?;
                Ok(())
            }
        }
    }

    /// Execute every effect in order, collecting failures
    ///
    /// A failed effect does not stop the ones after it: the state transition
    /// that produced them has already happened.
    pub async fn execute_all(&self, effects: Vec<Effect>) -> Vec<ExecuteError> {
        let mut failures = Vec::new();
        for effect in effects {
            if let Err(e) = self.execute(effect).await {
                failures.push(e);
            }
        }
        failures
    }
}

fn log_event(event: &Event) {
    match event {
        Event::CancelAllUnsupported => {
            tracing::warn!(event = event.name(), "cancel all is unsupported")
        }
        Event::SessionSuperseded { previous, next } => {
            tracing::info!(event = event.name(), %previous, %next, "session superseded")
        }
        _ => tracing::info!(event = event.name(), detail = ?event, "event"),
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
