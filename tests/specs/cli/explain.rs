// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `qcron explain` specs

use crate::prelude::*;

#[test]
fn explains_each_field() {
    cli()
        .args(&["explain", "0 0/5 14 ? * MON-FRI"])
        .passes()
        .stdout_has("FIELD")
        .stdout_has("every 5 from 0")
        .stdout_has("literal '?'")
        .stdout_has("'MON-FRI' in MON-FRI form")
        .stdout_has("(absent)");
}

#[test]
fn invalid_expression_reports_error() {
    cli()
        .args(&["explain", "0 0 12 6#3 * ?"])
        .fails()
        .stdout_has("[no-grammar-match]")
        .stdout_lacks("FIELD");
}

#[test]
fn json_carries_shape_tags() {
    let run = cli()
        .args(&["--format", "json", "explain", "0 15 10 ? * 6L 2002-2005"])
        .passes();
    let json = run.json();

    assert_eq!(json.as_array().map(Vec::len), Some(7));
    assert_eq!(json[0]["field"], "second");
    assert_eq!(json[0]["shape"]["shape"], "single");
    assert_eq!(json[6]["shape"]["shape"], "range");
    assert_eq!(json[6]["shape"]["value"]["low"], 2002);
}
