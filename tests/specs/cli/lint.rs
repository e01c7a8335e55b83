// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `qcron lint` specs
//!
//! Verify schedule files are checked in full and read errors exit non-zero.

use crate::prelude::*;

#[test]
fn valid_schedule_file_passes() {
    let temp = Project::empty();
    temp.file("schedules.toml", VALID_SCHEDULES);

    temp.qcron()
        .args(&["lint", "schedules.toml"])
        .passes()
        .stdout_has("valid: hourly (0 0 * * * ?)")
        .stdout_has("valid: weekdays (0 30 9 ? * MON-FRI)");
}

#[test]
fn reports_every_schedule_even_after_a_failure() {
    let temp = Project::empty();
    temp.file("schedules.toml", MIXED_SCHEDULES);

    temp.qcron()
        .args(&["lint", "schedules.toml"])
        .fails()
        .stdout_has("valid: nightly (0 0 2 * * ?) # Nightly cleanup")
        .stdout_has("invalid: reports (0 0 25 * * ?)")
        .stdout_has("[value-out-of-bounds]");
}

#[test]
fn json_includes_schedule_names() {
    let temp = Project::empty();
    temp.file("schedules.toml", MIXED_SCHEDULES);

    let run = temp
        .qcron()
        .args(&["--format", "json", "lint", "schedules.toml"])
        .fails();
    let json = run.json();

    assert_eq!(json[0]["name"], "nightly");
    assert_eq!(json[0]["valid"], true);
    assert_eq!(json[0]["description"], "Nightly cleanup");
    assert!(json[1].get("description").is_none());
    assert_eq!(json[1]["name"], "reports");
    assert_eq!(json[1]["error"]["field"], "hour");
}

#[test]
fn missing_file_fails() {
    let temp = Project::empty();

    temp.qcron()
        .args(&["lint", "absent.toml"])
        .fails()
        .stderr_has("failed to read absent.toml");
}

#[test]
fn malformed_toml_fails() {
    let temp = Project::empty();
    temp.file("broken.toml", "[schedule.a\ncron = 1");

    temp.qcron()
        .args(&["lint", "broken.toml"])
        .fails()
        .stderr_has("invalid schedule file");
}

#[test]
fn file_without_schedules_fails() {
    let temp = Project::empty();
    temp.file("empty.toml", "");

    temp.qcron()
        .args(&["lint", "empty.toml"])
        .fails()
        .stderr_has("defines no schedules");
}
