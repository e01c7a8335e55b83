// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use clap::ValueEnum;
use qcron_core::{CronError, ErrorKind};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// A validation failure, flattened for display
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
    pub message: String,
}

impl From<&CronError> for ErrorReport {
    fn from(error: &CronError) -> Self {
        Self {
            kind: error.kind(),
            field: error.field(),
            message: error.to_string(),
        }
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

/// Outcome of checking one expression
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Schedule name, when the expression came from a schedule file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub expression: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}

impl CheckReport {
    pub fn new(expression: impl Into<String>, result: Result<(), &CronError>) -> Self {
        let error = result.err().map(ErrorReport::from);
        Self {
            name: None,
            description: None,
            expression: expression.into(),
            valid: error.is_none(),
            error,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: Option<&str>) -> Self {
        self.description = description.map(str::to_string);
        self
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.valid { "valid" } else { "invalid" };
        match &self.name {
            Some(name) => write!(f, "{}: {} ({})", status, name, self.expression)?,
            None => write!(f, "{}: {}", status, self.expression)?,
        }
        if let Some(description) = &self.description {
            write!(f, " # {}", description)?;
        }
        if let Some(error) = &self.error {
            write!(f, "\n  {}", error)?;
        }
        Ok(())
    }
}

/// Print output in the specified format
pub fn print<T: Serialize + fmt::Display>(
    value: &T,
    format: OutputFormat,
) -> serde_json::Result<()> {
    match format {
        OutputFormat::Text => {
            println!("{}", value);
            Ok(())
        }
        OutputFormat::Json => print_json(value),
    }
}

/// Print a list of items, one per line in text mode
pub fn print_list<T: Serialize + fmt::Display>(
    items: &[T],
    format: OutputFormat,
) -> serde_json::Result<()> {
    match format {
        OutputFormat::Text => {
            for item in items {
                println!("{}", item);
            }
            Ok(())
        }
        OutputFormat::Json => print_json(items),
    }
}

/// Serialize fully before writing, so a failure leaves stdout untouched
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
