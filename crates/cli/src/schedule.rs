// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Schedule files: named cron expressions in TOML.
//!
//! ```toml
//! [schedule.nightly]
//! cron = "0 0 2 * * ?"
//! description = "Nightly cleanup"
//! ```

use qcron_core::{CronError, CronExpression};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors loading a schedule file
#[derive(Debug, Error)]
pub enum LintError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid schedule file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("schedule file defines no schedules")]
    Empty,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleFile {
    #[serde(default)]
    pub schedule: BTreeMap<String, ScheduleDef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleDef {
    pub cron: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Result of validating a single named schedule
#[derive(Debug)]
pub struct ScheduleCheck<'a> {
    pub name: &'a str,
    pub cron: &'a str,
    pub description: Option<&'a str>,
    pub result: Result<CronExpression, CronError>,
}

impl ScheduleFile {
    /// Validate every schedule, in name order
    pub fn check(&self) -> Vec<ScheduleCheck<'_>> {
        self.schedule
            .iter()
            .map(|(name, def)| ScheduleCheck {
                name,
                cron: &def.cron,
                description: def.description.as_deref(),
                result: qcron_core::validate(&def.cron),
            })
            .collect()
    }
}

/// Parse schedule definitions from TOML content
pub fn parse_schedules(content: &str) -> Result<ScheduleFile, LintError> {
    let file: ScheduleFile = toml::from_str(content)?;
    if file.schedule.is_empty() {
        return Err(LintError::Empty);
    }
    Ok(file)
}

/// Read and parse a schedule file from disk
pub fn load_schedules(path: &Path) -> Result<ScheduleFile, LintError> {
    let content = std::fs::read_to_string(path).map_err(|source| LintError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loaded schedule file");
    parse_schedules(&content)
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod tests;
