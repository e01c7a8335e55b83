// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `qcron check` specs
//!
//! Verify verdicts, error kinds, and exit codes for single and batched input.

use crate::prelude::*;

#[test]
fn valid_expression_passes() {
    cli()
        .args(&["check", "0 0 12 * * ?"])
        .passes()
        .stdout_eq("valid: 0 0 12 * * ?\n");
}

#[test]
fn out_of_bounds_hour_fails_with_kind() {
    cli()
        .args(&["check", "0 0 25 * * ?"])
        .fails()
        .stdout_has("invalid: 0 0 25 * * ?")
        .stdout_has("[value-out-of-bounds] hour value '25' is out of bounds [0, 23]");
}

#[test]
fn both_day_fields_concrete_is_a_conflict() {
    cli()
        .args(&["check", "0 0 12 15 * MON"])
        .fails()
        .stdout_has("[cross-field-conflict]");
}

#[test]
fn wrong_field_count_is_structural() {
    cli()
        .args(&["check", "0 12 * * ?"])
        .fails()
        .stdout_has("[structural-mismatch]");
}

#[test]
fn one_invalid_expression_fails_the_batch() {
    cli()
        .args(&["check", "0 15 10 ? * 6L", "0 0 12 1 1,13 ?", "0 0 12 L * ?"])
        .fails()
        .stdout_has("valid: 0 15 10 ? * 6L")
        .stdout_has("invalid: 0 0 12 1 1,13 ?")
        .stdout_has("[specifics-out-of-bounds]")
        .stdout_has("valid: 0 0 12 L * ?");
}

#[test]
fn json_output_lists_every_verdict() {
    let run = cli()
        .args(&["--format", "json", "check", "0 0 12 * * ?", "0 */0 12 * * ?"])
        .fails();
    let json = run.json();

    assert_eq!(json[0]["valid"], true);
    assert_eq!(json[1]["valid"], false);
    assert_eq!(json[1]["error"]["kind"], "increment-out-of-bounds");
    assert_eq!(json[1]["error"]["field"], "minute");
}

#[test]
fn no_expressions_is_a_usage_error() {
    cli().args(&["check"]).usage_error();
}
