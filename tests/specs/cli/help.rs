// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Help and usage specs

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("check")
        .stdout_has("explain")
        .stdout_has("fields")
        .stdout_has("lint");
}

#[test]
fn unknown_command_is_a_usage_error() {
    cli()
        .args(&["schedule"])
        .usage_error()
        .stderr_has("unrecognized subcommand");
}

#[test]
fn unknown_format_is_a_usage_error() {
    cli()
        .args(&["--format", "yaml", "fields"])
        .usage_error();
}

#[test]
fn version_flag_prints_version() {
    use assert_cmd::Command;
    use predicates::prelude::*;

    Command::cargo_bin("qcron")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^qcron \d+\.\d+\.\d+\n$").unwrap());
}

#[test]
fn check_help_describes_expressions() {
    use assert_cmd::Command;
    use predicates::prelude::*;

    Command::cargo_bin("qcron")
        .unwrap()
        .args(["check", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expressions to validate"));
}
