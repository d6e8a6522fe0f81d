//! Error reporting specs

use crate::prelude::*;

#[test]
fn unknown_command_fails() {
    let temp = Project::empty();
    temp.alclock().args(&["ring-now"]).fails();
}

#[test]
fn unreadable_time_shows_suggestions() {
    let temp = Project::empty();
    temp.alclock()
        .args(&["plan", "a1", "--at", "half past seven"])
        .fails()
        .stderr_has("error: Cannot understand time 'half past seven'")
        .stderr_has("suggestions:");
}

#[test]
fn missing_explicit_config_fails() {
    let temp = Project::empty();
    temp.alclock()
        .args(&["--config", "nope.toml", "cancel-targets", "a1"])
        .fails()
        .stderr_has("Cannot load config");
}

#[test]
fn config_with_unknown_key_fails() {
    let temp = Project::empty();
    temp.file("alclock.toml", "volume = 11\n");
    temp.alclock()
        .args(&["--config", "alclock.toml", "cancel-targets", "a1"])
        .fails()
        .stderr_has("Cannot load config");
}
