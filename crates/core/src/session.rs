// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Alarm session state machine
//!
//! A session is the runtime record of whether an alarm is ringing. At most
//! one session is active: a device can present only one full-screen alarm at
//! a time, so a fire event for another alarm supersedes the current one.
//!
//! ```text
//! Idle ──fire──▶ Ringing ──stop(match | any)──▶ Idle
//!                  │  ▲
//!                  │  └──fire(other alarm)       (supersede)
//!                  └──snooze──▶ Idle + register {id}_snooze
//! ```
//!
//! Scheduling and cancellation leave the session untouched; they only emit
//! registration work for the delivery mechanism.

use crate::clock::duration_millis;
use crate::config::AlarmConfig;
use crate::definition::{AlarmDefinition, AlarmId};
use crate::effect::{Effect, Event, Presentation};
use crate::error::{AlarmError, CancelAllUnsupported};
use crate::occurrence::{DeliveryPayload, FireEvent, OccurrenceId, ScheduledOccurrence};
use crate::planner::{cancellation_targets, snooze_occurrence, snooze_target, SchedulePlanner};
use crate::sound::SoundCatalog;
use chrono::TimeZone;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// The state of the alarm session
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AlarmSession {
    #[default]
    Idle,
    Ringing {
        alarm_id: AlarmId,
        sound_name: String,
    },
}

impl AlarmSession {
    pub fn is_ringing(&self) -> bool {
        matches!(self, AlarmSession::Ringing { .. })
    }

    pub fn active_alarm(&self) -> Option<&AlarmId> {
        match self {
            AlarmSession::Idle => None,
            AlarmSession::Ringing { alarm_id, .. } => Some(alarm_id),
        }
    }
}

impl fmt::Display for AlarmSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlarmSession::Idle => write!(f, "idle"),
            AlarmSession::Ringing {
                alarm_id,
                sound_name,
            } => write!(f, "ringing {} ({})", alarm_id, sound_name),
        }
    }
}

/// Events that can transition the session
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// The delivery mechanism reported an occurrence
    Fire(FireEvent),
    /// Stop the given alarm, or whichever is ringing when `None`
    Stop { alarm_id: Option<AlarmId> },
    /// Snooze the ringing alarm for `delay`
    Snooze { delay: Duration },
}

/// Owns the session and turns commands into effects
///
/// Not synchronized: callers serialize access (the engine holds it behind a
/// single async lock).
#[derive(Debug, Clone)]
pub struct SessionManager<Tz: TimeZone> {
    state: AlarmSession,
    planner: SchedulePlanner<Tz>,
    sounds: SoundCatalog,
    ring_timeout: Duration,
    snooze: Duration,
}

impl<Tz: TimeZone> SessionManager<Tz> {
    pub fn new(planner: SchedulePlanner<Tz>) -> Self {
        Self::from_config(planner, &AlarmConfig::default())
    }

    pub fn from_config(planner: SchedulePlanner<Tz>, config: &AlarmConfig) -> Self {
        Self {
            state: AlarmSession::Idle,
            planner,
            sounds: config.sound_catalog(),
            ring_timeout: config.ring_timeout,
            snooze: config.snooze,
        }
    }

    pub fn session(&self) -> &AlarmSession {
        &self.state
    }

    pub fn planner(&self) -> &SchedulePlanner<Tz> {
        &self.planner
    }

    /// Snooze delay used when a request does not carry one
    pub fn default_snooze(&self) -> Duration {
        self.snooze
    }

    /// Validate `def` and compute the occurrences to register
    pub fn schedule_alarm(
        &self,
        def: &AlarmDefinition,
        now: i64,
    ) -> Result<(Vec<ScheduledOccurrence>, Vec<Effect>), AlarmError> {
        let occurrences = self.planner.compute_occurrences(def, now)?;

        let mut effects: Vec<Effect> = occurrences
            .iter()
            .map(|occurrence| Effect::Register {
                occurrence: occurrence.clone(),
            })
            .collect();
        effects.push(Effect::Emit(Event::AlarmScheduled {
            alarm_id: def.id.0.clone(),
            occurrences: occurrences.len(),
        }));

        Ok((occurrences, effects))
    }

    /// Unregister every variant of an alarm
    ///
    /// Does not touch the session: a ringing alarm keeps ringing until stopped.
    pub fn cancel_alarm(&self, alarm_id: &AlarmId) -> (Vec<OccurrenceId>, Vec<Effect>) {
        let targets = cancellation_targets(alarm_id);

        let mut effects: Vec<Effect> = targets
            .iter()
            .map(|occurrence_id| Effect::Unregister {
                occurrence_id: occurrence_id.clone(),
            })
            .collect();
        effects.push(Effect::Emit(Event::AlarmCancelled {
            alarm_id: alarm_id.0.clone(),
        }));

        (targets, effects)
    }

    /// Unregister a pending snooze of an alarm
    pub fn cancel_snooze(&self, alarm_id: &AlarmId) -> (OccurrenceId, Vec<Effect>) {
        let target = snooze_target(alarm_id);
        let effects = vec![
            Effect::Unregister {
                occurrence_id: target.clone(),
            },
            Effect::Emit(Event::SnoozeCancelled {
                alarm_id: alarm_id.0.clone(),
            }),
        ];
        (target, effects)
    }

    pub fn cancel_all_alarms(&self) -> (CancelAllUnsupported, Vec<Effect>) {
        tracing::warn!("cancel all alarms requested; alarms must be cancelled individually");
        (
            CancelAllUnsupported,
            vec![Effect::Emit(Event::CancelAllUnsupported)],
        )
    }

    /// Register a one-time snooze occurrence outside of any session
    pub fn schedule_snooze(
        &self,
        alarm_id: &AlarmId,
        fire_at: i64,
        sound_name: &str,
    ) -> (ScheduledOccurrence, Vec<Effect>) {
        let occurrence = snooze_occurrence(alarm_id, sound_name, fire_at);
        let effects = vec![
            Effect::Register {
                occurrence: occurrence.clone(),
            },
            Effect::Emit(Event::SnoozeScheduled {
                alarm_id: alarm_id.0.clone(),
                fire_at,
            }),
        ];
        (occurrence, effects)
    }

    pub fn on_fire_event(&mut self, event: FireEvent, now: i64) -> (AlarmSession, Vec<Effect>) {
        let effects = self.transition(SessionEvent::Fire(event), now);
        (self.state.clone(), effects)
    }

    pub fn on_stop(&mut self, alarm_id: Option<AlarmId>, now: i64) -> (AlarmSession, Vec<Effect>) {
        let effects = self.transition(SessionEvent::Stop { alarm_id }, now);
        (self.state.clone(), effects)
    }

    /// Snooze the ringing alarm
    ///
    /// Returns the snooze occurrence, or `None` when nothing was ringing.
    pub fn on_snooze_requested(
        &mut self,
        delay: Duration,
        now: i64,
    ) -> (AlarmSession, Option<ScheduledOccurrence>, Vec<Effect>) {
        let effects = self.transition(SessionEvent::Snooze { delay }, now);
        let occurrence = effects.iter().find_map(|effect| match effect {
            Effect::Register { occurrence } => Some(occurrence.clone()),
            _ => None,
        });
        (self.state.clone(), occurrence, effects)
    }

    /// Apply an event to the session and return the effects to execute
    pub fn transition(&mut self, event: SessionEvent, now: i64) -> Vec<Effect> {
        match (&self.state, event) {
            (_, SessionEvent::Fire(fire)) => {
                let mut effects = Vec::new();

                if let AlarmSession::Ringing { alarm_id, .. } = &self.state {
                    if *alarm_id != fire.alarm_id {
                        tracing::info!(previous = %alarm_id, next = %fire.alarm_id, "superseding session");
                        effects.push(Effect::Dismiss {
                            alarm_id: alarm_id.clone(),
                        });
                        effects.push(Effect::Emit(Event::SessionSuperseded {
                            previous: alarm_id.0.clone(),
                            next: fire.alarm_id.0.clone(),
                        }));
                    }
                }

                effects.push(Effect::Present(Presentation {
                    alarm_id: fire.alarm_id.clone(),
                    occurrence_id: fire.occurrence_id.clone(),
                    sound: self.sounds.resolve(&fire.sound_name),
                    ring_timeout: self.ring_timeout,
                }));
                effects.push(Effect::Emit(Event::AlarmRinging {
                    alarm_id: fire.alarm_id.0.clone(),
                    occurrence_id: fire.occurrence_id.0.clone(),
                }));
                effects.extend(self.rearm(&fire, now));

                self.state = AlarmSession::Ringing {
                    alarm_id: fire.alarm_id,
                    sound_name: fire.sound_name,
                };
                effects
            }

            (AlarmSession::Ringing { alarm_id, .. }, SessionEvent::Stop { alarm_id: requested })
                if requested.as_ref().map_or(true, |r| r == alarm_id) =>
            {
                let effects = vec![
                    Effect::Dismiss {
                        alarm_id: alarm_id.clone(),
                    },
                    Effect::Emit(Event::AlarmStopped {
                        alarm_id: alarm_id.0.clone(),
                    }),
                ];
                self.state = AlarmSession::Idle;
                effects
            }

            (
                AlarmSession::Ringing {
                    alarm_id,
                    sound_name,
                },
                SessionEvent::Snooze { delay },
            ) => {
                let fire_at = now.saturating_add(duration_millis(delay));
                let occurrence = snooze_occurrence(alarm_id, sound_name, fire_at);
                let effects = vec![
                    Effect::Dismiss {
                        alarm_id: alarm_id.clone(),
                    },
                    Effect::Register { occurrence },
                    Effect::Emit(Event::AlarmSnoozed {
                        alarm_id: alarm_id.0.clone(),
                        fire_at,
                    }),
                ];
                self.state = AlarmSession::Idle;
                effects
            }

            // Stop with a mismatched id, or stop/snooze while idle
            (state, event) => {
                tracing::debug!(state = %state, event = ?event, "ignored");
                Vec::new()
            }
        }
    }

    /// Re-register a weekday occurrence for the following week
    fn rearm(&self, fire: &FireEvent, now: i64) -> Vec<Effect> {
        let Some(day) = fire.weekday else {
            return Vec::new();
        };
        // The registered instant may have been moved out of a DST gap
        let anchor = fire.anchor.unwrap_or(fire.fire_at);
        // Strictly after both the registered instant and now, so this week's slot is skipped
        let after = now.max(fire.fire_at).saturating_add(1);
        match self.planner.next_weekly(anchor, day, after) {
            Ok(next) => {
                let occurrence_id = OccurrenceId::weekly(&fire.alarm_id, day);
                vec![
                    Effect::Register {
                        occurrence: ScheduledOccurrence {
                            occurrence_id: occurrence_id.clone(),
                            fire_at: next,
                            payload: DeliveryPayload {
                                alarm_id: fire.alarm_id.clone(),
                                sound_name: fire.sound_name.clone(),
                                weekday: Some(day),
                                anchor: Some(anchor),
                            },
                        },
                    },
                    Effect::Emit(Event::OccurrenceRearmed {
                        occurrence_id: occurrence_id.0,
                        fire_at: next,
                    }),
                ]
            }
            Err(e) => {
                tracing::warn!(occurrence_id = %fire.occurrence_id, error = %e, "could not re-arm");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
