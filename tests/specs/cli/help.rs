//! Help output specs

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    let temp = Project::empty();
    temp.alclock()
        .args(&["--help"])
        .passes()
        .stdout_has("plan")
        .stdout_has("cancel-targets")
        .stdout_has("snooze")
        .stdout_has("run");
}

#[test]
fn plan_help_describes_weekday_numbering() {
    let temp = Project::empty();
    temp.alclock()
        .args(&["plan", "--help"])
        .passes()
        .stdout_has("1=Monday .. 7=Sunday");
}
