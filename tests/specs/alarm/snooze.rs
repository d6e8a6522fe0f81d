//! Snooze specs

use crate::prelude::*;

#[test]
fn snooze_defaults_to_nine_minutes() {
    let temp = Project::empty();
    temp.alclock()
        .args(&["--utc", "--now", MONDAY_9AM, "snooze", "wake"])
        .passes()
        .stdout_eq("wake_snooze      Mon 2026-10-12 09:09 +00:00\n");
}

#[test]
fn snooze_minutes_override_default() {
    let temp = Project::empty();
    temp.alclock()
        .args(&["--utc", "--now", MONDAY_9AM, "snooze", "wake", "--minutes", "2"])
        .passes()
        .stdout_has("Mon 2026-10-12 09:02 +00:00");
}

#[test]
fn snooze_uses_configured_delay() {
    let temp = Project::empty();
    temp.file("alclock.toml", "snooze = \"5m\"\n");
    temp.alclock()
        .args(&[
            "--config",
            "alclock.toml",
            "--utc",
            "--now",
            MONDAY_9AM,
            "snooze",
            "wake",
        ])
        .passes()
        .stdout_has("Mon 2026-10-12 09:05 +00:00");
}

#[test]
fn snooze_is_one_time_even_for_weekly_alarms() {
    let temp = Project::empty();
    temp.alclock()
        .args(&[
            "--utc", "--now", MONDAY_9AM, "--format", "json", "snooze", "wake", "--at",
            "2026-10-12T09:30:00Z",
        ])
        .passes()
        .stdout_has("\"occurrence_id\": \"wake_snooze\"")
        .stdout_lacks("weekday");
}
