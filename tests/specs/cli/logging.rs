// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logging specs
//!
//! Reports go to stdout; diagnostics go to stderr only when asked for.

use crate::prelude::*;

#[test]
fn quiet_by_default() {
    cli()
        .args(&["check", "0 0 25 * * ?"])
        .fails()
        .stderr_empty();
}

#[test]
fn verbose_logs_rejection_to_stderr() {
    cli()
        .args(&["-v", "check", "0 0 25 * * ?"])
        .fails()
        .stderr_has("value-out-of-bounds")
        .stdout_has("invalid: 0 0 25 * * ?");
}

#[test]
fn rust_log_enables_tracing() {
    cli()
        .env("RUST_LOG", "trace")
        .args(&["check", "0 0 12 * * ?"])
        .passes()
        .stderr_has("hour");
}
