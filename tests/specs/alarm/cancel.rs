//! Cancel target specs
//!
//! Cancelling an alarm unregisters the bare id and every weekday variant,
//! whether or not they were ever registered.

use crate::prelude::*;

#[test]
fn cancel_targets_lists_all_eight_ids() {
    let temp = Project::empty();
    temp.alclock()
        .args(&["cancel-targets", "wake"])
        .passes()
        .stdout_eq(
            "wake\nwake_day_1\nwake_day_2\nwake_day_3\nwake_day_4\nwake_day_5\nwake_day_6\nwake_day_7\n",
        );
}

#[test]
fn cancel_targets_can_include_snooze() {
    let temp = Project::empty();
    temp.alclock()
        .args(&["cancel-targets", "wake", "--include-snooze"])
        .passes()
        .stdout_has("wake_day_7\nwake_snooze\n");
}

#[test]
fn cancel_targets_as_json() {
    let temp = Project::empty();
    let out = temp
        .alclock()
        .args(&["--format", "json", "cancel-targets", "wake"])
        .passes()
        .stdout();
    assert!(out.starts_with('['), "output:\n{out}");
    assert_eq!(out.matches("\"wake").count(), 8, "output:\n{out}");
}
