// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Schedule planner
//!
//! Pure computation of concrete fire instants and the occurrence ids they are
//! registered under. Weekday occurrences are placed in the planner's time
//! zone so "07:00 on Tuesday" means local wall-clock time.

use crate::definition::{AlarmDefinition, AlarmId, Schedule};
use crate::error::AlarmError;
use crate::occurrence::{DeliveryPayload, OccurrenceId, ScheduledOccurrence};
use crate::weekday::Weekday;
use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};

/// Computes occurrences of alarm definitions in a fixed time zone
#[derive(Debug, Clone)]
pub struct SchedulePlanner<Tz: TimeZone> {
    tz: Tz,
}

impl<Tz: TimeZone> SchedulePlanner<Tz> {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn timezone(&self) -> &Tz {
        &self.tz
    }

    /// Compute the next occurrence of every schedule entry of `def`
    ///
    /// A one-time alarm is passed through unchanged, even if its fire time is
    /// already past. Weekday occurrences are always at or after `now`.
    pub fn compute_occurrences(
        &self,
        def: &AlarmDefinition,
        now: i64,
    ) -> Result<Vec<ScheduledOccurrence>, AlarmError> {
        match def.schedule()? {
            Schedule::Once => Ok(vec![ScheduledOccurrence {
                occurrence_id: OccurrenceId::once(&def.id),
                fire_at: def.fire_at,
                payload: payload(&def.id, &def.sound_name, None, None),
            }]),
            Schedule::Weekly(days) => days
                .into_iter()
                .map(|day| {
                    Ok(ScheduledOccurrence {
                        occurrence_id: OccurrenceId::weekly(&def.id, day),
                        fire_at: self.next_weekly(def.fire_at, day, now)?,
                        payload: payload(&def.id, &def.sound_name, Some(day), Some(def.fire_at)),
                    })
                })
                .collect(),
        }
    }

    /// Next instant at or after `now` falling on `day` at the local time of day of `anchor`
    ///
    /// The candidate is taken from the Monday-started week containing `now`;
    /// if it is strictly before `now` it moves exactly one week later.
    pub fn next_weekly(&self, anchor: i64, day: Weekday, now: i64) -> Result<i64, AlarmError> {
        let time_of_day = self.local(anchor)?.time();
        let today = self.local(now)?.date_naive();

        let monday = today
            .checked_sub_days(Days::new(u64::from(
                today.weekday().num_days_from_monday(),
            )))
            .ok_or(AlarmError::TimeOutOfRange(now))?;
        let date = shift_days(monday, day.days_from_monday(), now)?;

        let candidate = self.resolve(date.and_time(time_of_day), now)?;
        if candidate >= now {
            return Ok(candidate);
        }
        let next_week = shift_days(date, 7, now)?;
        self.resolve(next_week.and_time(time_of_day), now)
    }

    pub fn compute_snooze_occurrence(
        &self,
        def: &AlarmDefinition,
        fire_at: i64,
    ) -> ScheduledOccurrence {
        snooze_occurrence(&def.id, &def.sound_name, fire_at)
    }

    fn local(&self, millis: i64) -> Result<DateTime<Tz>, AlarmError> {
        self.tz
            .timestamp_millis_opt(millis)
            .single()
            .ok_or(AlarmError::TimeOutOfRange(millis))
    }

    fn resolve(&self, naive: NaiveDateTime, context: i64) -> Result<i64, AlarmError> {
        resolve_local(&self.tz, naive).ok_or(AlarmError::TimeOutOfRange(context))
    }
}

/// Map a local wall-clock time in `tz` to epoch millis
///
/// Ambiguous times (clocks going back) take the earlier instant. Times in a
/// gap (clocks going forward) move forward in 15 minute steps until they
/// exist, so 02:30 in a one hour gap becomes 03:00. `None` when no valid
/// time turns up within three hours.
pub fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Option<i64> {
    let mut probe = naive;
    for _ in 0..=GAP_PROBE_STEPS {
        if let Some(dt) = tz.from_local_datetime(&probe).earliest() {
            return Some(dt.timestamp_millis());
        }
        probe = probe.checked_add_signed(TimeDelta::minutes(GAP_PROBE_MINUTES))?;
    }
    None
}

// Probe up to 3 hours past a DST gap in 15 minute steps
const GAP_PROBE_MINUTES: i64 = 15;
const GAP_PROBE_STEPS: usize = 12;

fn shift_days(date: NaiveDate, days: u64, context: i64) -> Result<NaiveDate, AlarmError> {
    date.checked_add_days(Days::new(days))
        .ok_or(AlarmError::TimeOutOfRange(context))
}

fn payload(
    alarm_id: &AlarmId,
    sound_name: &str,
    weekday: Option<Weekday>,
    anchor: Option<i64>,
) -> DeliveryPayload {
    DeliveryPayload {
        alarm_id: alarm_id.clone(),
        sound_name: sound_name.to_string(),
        weekday,
        anchor,
    }
}

/// A one-time snooze occurrence, independent of any repeat schedule
pub fn snooze_occurrence(alarm_id: &AlarmId, sound_name: &str, fire_at: i64) -> ScheduledOccurrence {
    ScheduledOccurrence {
        occurrence_id: OccurrenceId::snooze(alarm_id),
        fire_at,
        payload: payload(alarm_id, sound_name, None, None),
    }
}

/// Every occurrence id an alarm could be registered under, excluding snoozes
///
/// Always the bare id plus all seven weekday variants, whether or not they
/// were ever scheduled. Unregistering an unknown id is harmless.
pub fn cancellation_targets(alarm_id: &AlarmId) -> Vec<OccurrenceId> {
    std::iter::once(OccurrenceId::once(alarm_id))
        .chain(
            Weekday::ALL
                .iter()
                .map(|&day| OccurrenceId::weekly(alarm_id, day)),
        )
        .collect()
}

/// The occurrence id a pending snooze of `alarm_id` is registered under
pub fn snooze_target(alarm_id: &AlarmId) -> OccurrenceId {
    OccurrenceId::snooze(alarm_id)
}

#[cfg(test)]
#[path = "planner_tests.rs"]
mod tests;
