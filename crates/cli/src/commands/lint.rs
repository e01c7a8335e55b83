// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `qcron lint` - Validate a schedule file

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::output::{print_list, CheckReport, OutputFormat};
use crate::schedule::load_schedules;

#[derive(Args)]
pub struct LintArgs {
    /// TOML file with `[schedule.<name>]` tables
    pub file: PathBuf,
}

/// Returns true when every schedule is valid. Unreadable files are errors.
pub fn lint(args: &LintArgs, format: OutputFormat) -> Result<bool> {
    let file = load_schedules(&args.file)?;

    let reports: Vec<CheckReport> = file
        .check()
        .into_iter()
        .map(|check| {
            if let Err(err) = &check.result {
                tracing::debug!(schedule = check.name, error = %err, "invalid schedule");
            }
            CheckReport::new(check.cron, check.result.as_ref().map(|_| ()))
                .with_name(check.name)
                .with_description(check.description)
        })
        .collect();

    let all_valid = reports.iter().all(|report| report.valid);
    print_list(&reports, format)?;
    Ok(all_valid)
}
