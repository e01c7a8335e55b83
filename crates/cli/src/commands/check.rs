// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `qcron check` - Validate cron expressions

use anyhow::Result;
use clap::Args;

use crate::output::{print_list, CheckReport, OutputFormat};

#[derive(Args)]
pub struct CheckArgs {
    /// Expressions to validate (quote each one)
    #[arg(required = true)]
    pub expressions: Vec<String>,
}

/// Returns true when every expression is valid
pub fn check(args: &CheckArgs, format: OutputFormat) -> Result<bool> {
    let reports: Vec<CheckReport> = args
        .expressions
        .iter()
        .map(|expression| {
            let result = qcron_core::validate(expression);
            CheckReport::new(expression.as_str(), result.as_ref().map(|_| ()))
        })
        .collect();

    let all_valid = reports.iter().all(|report| report.valid);
    print_list(&reports, format)?;
    Ok(all_valid)
}
