//! Run specs
//!
//! `alclock run` schedules alarms with in-process timers and rings them on
//! stdout. A short ring timeout ends each session without input.

use crate::prelude::*;

const SHORT_RING: &str = "ring_timeout = \"1s\"\n";

#[test]
fn past_alarm_rings_and_times_out() {
    let temp = Project::empty();
    temp.file("alclock.toml", SHORT_RING);
    temp.file(
        "alarms.toml",
        r#"
[[alarm]]
id = "wake"
at = "2020-01-06T07:00:00Z"
"#,
    );

    temp.alclock()
        .args(&[
            "--config",
            "alclock.toml",
            "--utc",
            "run",
            "alarms.toml",
            "--max-rings",
            "1",
        ])
        .stdin("")
        .passes()
        .stdout_has("scheduled: wake ")
        .stdout_has("ringing: wake (wake) sound=alarm1")
        .stdout_has("timed out: wake")
        .stdout_has("stopped: wake");
}

#[test]
fn unknown_sound_falls_back_to_default() {
    let temp = Project::empty();
    temp.file(
        "alclock.toml",
        "ring_timeout = \"1s\"\nsounds = [\"alarm1\", \"chime\"]\n",
    );
    temp.file(
        "alarms.toml",
        r#"
[[alarm]]
id = "wake"
at = "2020-01-06T07:00:00Z"
sound = "foghorn"
"#,
    );

    temp.alclock()
        .args(&["--config", "alclock.toml", "run", "alarms.toml", "--max-rings", "1"])
        .stdin("")
        .passes()
        .stdout_has("sound=alarm1 (fallback from foghorn)");
}

#[test]
fn empty_alarms_file_exits_immediately() {
    let temp = Project::empty();
    temp.file("alarms.toml", "");

    temp.alclock()
        .args(&["run", "alarms.toml"])
        .passes()
        .stdout_has("no alarms to run");
}

#[test]
fn invalid_alarm_in_file_fails() {
    let temp = Project::empty();
    temp.file(
        "alarms.toml",
        r#"
[[alarm]]
id = "wake"
at = "07:00"
days = [0]
"#,
    );

    temp.alclock()
        .args(&["run", "alarms.toml"])
        .fails()
        .stderr_has("Cannot schedule alarm 'wake'");
}
