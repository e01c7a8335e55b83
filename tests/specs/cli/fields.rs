// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `qcron fields` specs

use crate::prelude::*;

#[test]
fn lists_all_seven_fields() {
    let run = cli().args(&["fields"]).passes();
    let names: Vec<&str> = run
        .stdout()
        .lines()
        .skip(1)
        .filter_map(|line| line.split_whitespace().next())
        .collect();

    assert_eq!(
        names,
        vec!["second", "minute", "hour", "day_of_month", "month", "day_of_week", "year"]
    );
}

#[test]
fn json_exposes_domains() {
    let run = cli().args(&["--format", "json", "fields"]).passes();
    let json = run.json();

    assert_eq!(json[2]["name"], "hour");
    assert_eq!(json[2]["max_value"], 23);
    assert_eq!(json[6]["min_value"], 1970);
    assert_eq!(json[6]["nullable"], true);
    assert_eq!(json[4]["names"][0], "JAN");
}
