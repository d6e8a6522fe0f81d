// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chrono::{FixedOffset, Utc};
use chrono_tz::America::New_York;
use chrono_tz::Pacific::Apia;
use proptest::prelude::*;
use yare::parameterized;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;
const WEEK_MS: i64 = 7 * DAY_MS;

fn utc(s: &str) -> i64 {
    DateTime::parse_from_rfc3339(s).unwrap().timestamp_millis()
}

fn ids(occurrences: &[ScheduledOccurrence]) -> Vec<&str> {
    occurrences.iter().map(|o| o.occurrence_id.as_str()).collect()
}

fn fire_time(occurrences: &[ScheduledOccurrence], id: &str) -> i64 {
    occurrences
        .iter()
        .find(|o| o.occurrence_id.as_str() == id)
        .map(|o| o.fire_at)
        .unwrap()
}

// 2026-10-12 is a Monday
fn tuesday_thursday() -> AlarmDefinition {
    AlarmDefinition::new("a1", utc("2026-10-13T07:00:00Z")).with_repeat_days([2, 4])
}

#[test]
fn one_time_alarm_is_passed_through() {
    let planner = SchedulePlanner::new(Utc);
    let def = AlarmDefinition::new("a1", utc("2026-10-20T06:30:00Z")).with_sound("birds");

    let occurrences = planner
        .compute_occurrences(&def, utc("2026-10-12T09:00:00Z"))
        .unwrap();

    assert_eq!(occurrences.len(), 1);
    assert_eq!(occurrences[0].occurrence_id, OccurrenceId::from("a1"));
    assert_eq!(occurrences[0].fire_at, def.fire_at);
    assert_eq!(occurrences[0].payload.sound_name, "birds");
    assert_eq!(occurrences[0].payload.weekday, None);
}

#[test]
fn past_one_time_alarm_is_not_adjusted() {
    let planner = SchedulePlanner::new(Utc);
    let def = AlarmDefinition::new("a1", utc("2026-10-01T06:30:00Z"));

    let occurrences = planner
        .compute_occurrences(&def, utc("2026-10-12T09:00:00Z"))
        .unwrap();

    assert_eq!(occurrences[0].fire_at, def.fire_at);
}

#[test]
fn repeating_alarm_on_monday_stays_in_current_week() {
    let planner = SchedulePlanner::new(Utc);

    let occurrences = planner
        .compute_occurrences(&tuesday_thursday(), utc("2026-10-12T09:00:00Z"))
        .unwrap();

    assert_eq!(ids(&occurrences), vec!["a1_day_2", "a1_day_4"]);
    assert_eq!(
        fire_time(&occurrences, "a1_day_2"),
        utc("2026-10-13T07:00:00Z")
    );
    assert_eq!(
        fire_time(&occurrences, "a1_day_4"),
        utc("2026-10-15T07:00:00Z")
    );
}

#[test]
fn passed_weekday_moves_to_next_week() {
    let planner = SchedulePlanner::new(Utc);

    let occurrences = planner
        .compute_occurrences(&tuesday_thursday(), utc("2026-10-14T09:00:00Z"))
        .unwrap();

    assert_eq!(
        fire_time(&occurrences, "a1_day_2"),
        utc("2026-10-20T07:00:00Z")
    );
    assert_eq!(
        fire_time(&occurrences, "a1_day_4"),
        utc("2026-10-15T07:00:00Z")
    );
}

#[test]
fn later_the_same_day_moves_to_next_week() {
    let planner = SchedulePlanner::new(Utc);

    let occurrences = planner
        .compute_occurrences(&tuesday_thursday(), utc("2026-10-13T07:00:00.001Z"))
        .unwrap();

    assert_eq!(
        fire_time(&occurrences, "a1_day_2"),
        utc("2026-10-20T07:00:00Z")
    );
}

#[test]
fn exactly_now_is_not_in_the_past() {
    let planner = SchedulePlanner::new(Utc);
    let now = utc("2026-10-13T07:00:00Z");

    let occurrences = planner
        .compute_occurrences(&tuesday_thursday(), now)
        .unwrap();

    assert_eq!(fire_time(&occurrences, "a1_day_2"), now);
}

#[parameterized(
    monday_on_sunday = { 1, "2026-10-19T07:00:00Z" },
    sunday_morning_passed = { 7, "2026-10-25T07:00:00Z" },
    saturday_passed = { 6, "2026-10-24T07:00:00Z" },
)]
fn weeks_start_on_monday(day: u8, expected: &str) {
    let planner = SchedulePlanner::new(Utc);
    let def = AlarmDefinition::new("a1", utc("2026-10-01T07:00:00Z")).with_repeat_days([day]);

    // Sunday 10:00, the last day of the week
    let occurrences = planner
        .compute_occurrences(&def, utc("2026-10-18T10:00:00Z"))
        .unwrap();

    assert_eq!(occurrences[0].fire_at, utc(expected));
}

#[test]
fn time_of_day_is_local_to_the_planner_zone() {
    let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
    let planner = SchedulePlanner::new(tokyo);
    // 07:00 in Tokyo is 22:00 UTC the previous day
    let def = AlarmDefinition::new("a1", utc("2026-10-13T07:00:00+09:00")).with_repeat_days([2]);

    let occurrences = planner
        .compute_occurrences(&def, utc("2026-10-12T09:00:00+09:00"))
        .unwrap();

    assert_eq!(occurrences[0].fire_at, utc("2026-10-13T07:00:00+09:00"));
}

// 2027-03-14 is the Sunday New York springs forward at 02:00
#[parameterized(
    half_past = { "2027-03-07T02:30:00-05:00", "2027-03-14T03:00:00-04:00" },
    ten_past = { "2027-03-07T02:10:00-05:00", "2027-03-14T03:10:00-04:00" },
)]
fn time_in_spring_forward_gap_moves_forward(anchor: &str, expected: &str) {
    let planner = SchedulePlanner::new(New_York);
    let def = AlarmDefinition::new("a1", utc(anchor)).with_repeat_days([7]);

    let occurrences = planner
        .compute_occurrences(&def, utc("2027-03-13T12:00:00-05:00"))
        .unwrap();

    assert_eq!(occurrences[0].fire_at, utc(expected));
}

// 2027-11-07 is the Sunday New York falls back, so 01:30 happens twice
#[test]
fn ambiguous_fall_back_time_takes_the_earlier_instant() {
    let planner = SchedulePlanner::new(New_York);
    let def = AlarmDefinition::new("a1", utc("2027-10-31T01:30:00-04:00")).with_repeat_days([7]);

    let occurrences = planner
        .compute_occurrences(&def, utc("2027-11-06T12:00:00-04:00"))
        .unwrap();

    assert_eq!(occurrences[0].fire_at, utc("2027-11-07T01:30:00-04:00"));
}

#[test]
fn unaffected_weeks_keep_the_local_time_across_dst() {
    let planner = SchedulePlanner::new(New_York);
    // 07:00 EST anchor, placed in the first week of EDT
    let def = AlarmDefinition::new("a1", utc("2027-03-01T07:00:00-05:00")).with_repeat_days([1]);

    let occurrences = planner
        .compute_occurrences(&def, utc("2027-03-15T00:00:00-04:00"))
        .unwrap();

    assert_eq!(occurrences[0].fire_at, utc("2027-03-15T07:00:00-04:00"));
}

// Samoa skipped Friday 2011-12-30 entirely when it crossed the date line
#[test]
fn gap_longer_than_three_hours_is_an_error() {
    let planner = SchedulePlanner::new(Apia);
    let def = AlarmDefinition::new("a1", utc("2011-12-26T19:00:00Z")).with_repeat_days([5]);
    let now = utc("2011-12-29T22:00:00Z");

    assert!(matches!(
        planner.compute_occurrences(&def, now),
        Err(AlarmError::TimeOutOfRange(at)) if at == now
    ));
}

#[test]
fn old_anchor_still_yields_future_occurrence() {
    let planner = SchedulePlanner::new(Utc);
    let def = AlarmDefinition::new("a1", utc("2020-01-07T07:00:00Z")).with_repeat_days([2]);
    let now = utc("2026-10-14T09:00:00Z");

    let occurrences = planner.compute_occurrences(&def, now).unwrap();

    assert_eq!(occurrences[0].fire_at, utc("2026-10-20T07:00:00Z"));
}

#[test]
fn invalid_definition_is_rejected() {
    let planner = SchedulePlanner::new(Utc);
    let def = AlarmDefinition::new("a1", 0).with_repeat_days([0]);

    assert!(matches!(
        planner.compute_occurrences(&def, 0),
        Err(AlarmError::InvalidDefinition(_))
    ));
}

#[test]
fn payload_carries_weekday() {
    let planner = SchedulePlanner::new(Utc);

    let occurrences = planner
        .compute_occurrences(&tuesday_thursday(), utc("2026-10-12T09:00:00Z"))
        .unwrap();

    assert_eq!(occurrences[0].payload.weekday, Some(Weekday::Tuesday));
    assert_eq!(occurrences[0].payload.alarm_id, AlarmId::new("a1"));
    assert_eq!(occurrences[0].payload.anchor, Some(utc("2026-10-13T07:00:00Z")));
}

#[test]
fn snooze_is_one_time_for_repeating_alarms() {
    let planner = SchedulePlanner::new(Utc);
    let def = tuesday_thursday().with_sound("chime");

    let snooze = planner.compute_snooze_occurrence(&def, 123_456);

    assert_eq!(snooze.occurrence_id, OccurrenceId::from("a1_snooze"));
    assert_eq!(snooze.fire_at, 123_456);
    assert_eq!(snooze.payload.weekday, None);
    assert_eq!(snooze.payload.sound_name, "chime");
}

#[test]
fn cancellation_targets_cover_every_variant() {
    let targets = cancellation_targets(&AlarmId::new("a1"));

    let names: Vec<&str> = targets.iter().map(|t| t.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "a1", "a1_day_1", "a1_day_2", "a1_day_3", "a1_day_4", "a1_day_5", "a1_day_6",
            "a1_day_7",
        ]
    );
    assert_eq!(snooze_target(&AlarmId::new("a1")).as_str(), "a1_snooze");
}

fn arb_days() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(1..=7u8, 1..12)
}

// 2001-01-01 .. 2099-01-01
fn arb_instant() -> impl Strategy<Value = i64> {
    978_307_200_000i64..4_070_908_800_000i64
}

proptest! {
    #[test]
    fn weekly_occurrences_are_in_the_coming_week(
        anchor in arb_instant(),
        now in arb_instant(),
        days in arb_days(),
    ) {
        let planner = SchedulePlanner::new(Utc);
        let def = AlarmDefinition::new("p", anchor).with_repeat_days(days.clone());

        let occurrences = planner.compute_occurrences(&def, now).unwrap();

        let mut distinct = days.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(occurrences.len(), distinct.len());

        for occurrence in &occurrences {
            prop_assert!(occurrence.fire_at >= now);
            prop_assert!(occurrence.fire_at < now + WEEK_MS);
            // Same time of day as the anchor
            prop_assert_eq!((occurrence.fire_at - anchor).rem_euclid(DAY_MS), 0);

            let day = occurrence.payload.weekday.unwrap();
            let at = occurrence.fire_at_utc().unwrap();
            prop_assert_eq!(Weekday::from_chrono(at.weekday()), day);
        }
    }

    #[test]
    fn scheduling_is_idempotent(
        anchor in arb_instant(),
        now in arb_instant(),
        days in proptest::collection::vec(1..=7u8, 0..8),
    ) {
        let planner = SchedulePlanner::new(Utc);
        let def = AlarmDefinition::new("p", anchor).with_repeat_days(days);

        let first = planner.compute_occurrences(&def, now).unwrap();
        let second = planner.compute_occurrences(&def, now).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn cancellation_targets_always_has_eight(id in "[a-z0-9]{1,12}") {
        let targets = cancellation_targets(&AlarmId::new(id));
        prop_assert_eq!(targets.len(), 8);
    }
}
