//! Plan specs
//!
//! `alclock plan` prints the occurrences an alarm definition registers.

use crate::prelude::*;

#[test]
fn weekly_alarm_gets_one_occurrence_per_day_this_week() {
    let temp = Project::empty();
    temp.alclock()
        .args(&[
            "--utc", "--now", MONDAY_8AM, "plan", "a1", "--at", MONDAY_9AM, "--days", "2,4",
        ])
        .passes()
        .stdout_eq(
            "a1_day_2         Tue 2026-10-13 09:00 +00:00\n\
             a1_day_4         Thu 2026-10-15 09:00 +00:00\n",
        );
}

#[test]
fn passed_weekday_moves_to_next_week() {
    let temp = Project::empty();
    temp.alclock()
        .args(&[
            "--utc", "--now", WEDNESDAY_10AM, "plan", "a1", "--at", MONDAY_9AM, "--days", "2",
        ])
        .passes()
        .stdout_has("a1_day_2")
        .stdout_has("Tue 2026-10-20 09:00 +00:00");
}

#[test]
fn duplicate_weekdays_collapse() {
    let temp = Project::empty();
    let out = temp
        .alclock()
        .args(&[
            "--utc", "--now", MONDAY_8AM, "plan", "a1", "--at", MONDAY_9AM, "--days", "5,5,5",
        ])
        .passes()
        .stdout();
    assert_eq!(out.lines().count(), 1, "output:\n{out}");
}

#[test]
fn one_time_alarm_in_the_past_passes_through() {
    let temp = Project::empty();
    temp.alclock()
        .args(&[
            "--utc",
            "--now",
            MONDAY_8AM,
            "plan",
            "nap",
            "--at",
            "2026-10-01T07:00:00Z",
        ])
        .passes()
        .stdout_has("nap ")
        .stdout_has("Thu 2026-10-01 07:00 +00:00")
        .stdout_lacks("_day_");
}

#[test]
fn time_of_day_means_today() {
    let temp = Project::empty();
    temp.alclock()
        .args(&["--utc", "--now", MONDAY_8AM, "plan", "a1", "--at", "06:15"])
        .passes()
        .stdout_has("Mon 2026-10-12 06:15 +00:00");
}

#[test]
fn json_output_carries_weekday_and_sound() {
    let temp = Project::empty();
    temp.alclock()
        .args(&[
            "--utc", "--now", MONDAY_8AM, "--format", "json", "plan", "a1", "--at", MONDAY_9AM,
            "--days", "7", "--sound", "birds",
        ])
        .passes()
        .stdout_has("\"occurrence_id\": \"a1_day_7\"")
        .stdout_has("\"weekday\": 7")
        .stdout_has("\"sound\": \"birds\"");
}

#[test]
fn weekday_out_of_range_is_rejected() {
    let temp = Project::empty();
    temp.alclock()
        .args(&["--utc", "plan", "a1", "--at", MONDAY_9AM, "--days", "8"])
        .fails()
        .stderr_has("Alarm 'a1' is invalid")
        .stderr_has("weekday 8 outside 1..7");
}

#[test]
fn empty_alarm_id_is_rejected() {
    let temp = Project::empty();
    temp.alclock()
        .args(&["--utc", "plan", "", "--at", MONDAY_9AM])
        .fails()
        .stderr_has("missing alarm id");
}
