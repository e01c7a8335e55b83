// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validation errors
//!
//! Every failure is raised at the point of detection and carries enough
//! context (field, raw value, bounds) to explain itself without the input.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Convenient alias for results produced by the checker
pub type Result<T, E = CronError> = std::result::Result<T, E>;

/// Errors raised while validating a cron expression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CronError {
    #[error("invalid cron expression '{expression}': expected 6 or 7 fields, got {count}")]
    FieldCount { expression: String, count: usize },

    #[error("missing required fields: {}", .fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },

    #[error(
        "exactly one of day_of_month ('{day_of_month}') and day_of_week ('{day_of_week}') must be '?'"
    )]
    CrossFieldConflict {
        day_of_month: String,
        day_of_week: String,
    },

    #[error("{field} cannot be empty")]
    MissingValue { field: &'static str },

    #[error("{field} value '{value}' is out of bounds [{min}, {max}]")]
    ValueOutOfBounds {
        field: &'static str,
        value: String,
        min: u32,
        max: u32,
    },

    #[error(
        "{field} increment '{value}' must start within [{min}, {max}] and step by 1 to {increment_max}"
    )]
    IncrementOutOfBounds {
        field: &'static str,
        value: String,
        min: u32,
        max: u32,
        increment_max: u32,
    },

    #[error("{field} range '{value}' ({low}-{high}) must be ascending within [{min}, {max}]")]
    RangeOutOfBounds {
        field: &'static str,
        value: String,
        low: u32,
        high: u32,
        min: u32,
        max: u32,
    },

    #[error(
        "{field} range '{value}' ({low}-{high} every {step}) must be ascending within [{min}, {max}] with a step of 1 to {increment_max}"
    )]
    RangeIncrementOutOfBounds {
        field: &'static str,
        value: String,
        low: u32,
        high: u32,
        step: u32,
        min: u32,
        max: u32,
        increment_max: u32,
    },

    #[error("{field} list '{value}' has entries outside [{min}, {max}]: {}", .invalid.join(", "))]
    SpecificsOutOfBounds {
        field: &'static str,
        value: String,
        invalid: Vec<String>,
        min: u32,
        max: u32,
    },

    #[error("{field} value '{value}' matches no known form (expected one of: {})", .expected.join(", "))]
    NoGrammarMatch {
        field: &'static str,
        value: String,
        expected: Vec<String>,
    },
}

/// Classification of a [`CronError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    StructuralMismatch,
    CrossFieldConflict,
    MissingValue,
    ValueOutOfBounds,
    IncrementOutOfBounds,
    RangeOutOfBounds,
    RangeIncrementOutOfBounds,
    SpecificsOutOfBounds,
    NoGrammarMatch,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::StructuralMismatch => "structural-mismatch",
            ErrorKind::CrossFieldConflict => "cross-field-conflict",
            ErrorKind::MissingValue => "missing-value",
            ErrorKind::ValueOutOfBounds => "value-out-of-bounds",
            ErrorKind::IncrementOutOfBounds => "increment-out-of-bounds",
            ErrorKind::RangeOutOfBounds => "range-out-of-bounds",
            ErrorKind::RangeIncrementOutOfBounds => "range-increment-out-of-bounds",
            ErrorKind::SpecificsOutOfBounds => "specifics-out-of-bounds",
            ErrorKind::NoGrammarMatch => "no-grammar-match",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CronError {
    /// The error kind tag
    pub fn kind(&self) -> ErrorKind {
        match self {
            CronError::FieldCount { .. } | CronError::MissingFields { .. } => {
                ErrorKind::StructuralMismatch
            }
            CronError::CrossFieldConflict { .. } => ErrorKind::CrossFieldConflict,
            CronError::MissingValue { .. } => ErrorKind::MissingValue,
            CronError::ValueOutOfBounds { .. } => ErrorKind::ValueOutOfBounds,
            CronError::IncrementOutOfBounds { .. } => ErrorKind::IncrementOutOfBounds,
            CronError::RangeOutOfBounds { .. } => ErrorKind::RangeOutOfBounds,
            CronError::RangeIncrementOutOfBounds { .. } => ErrorKind::RangeIncrementOutOfBounds,
            CronError::SpecificsOutOfBounds { .. } => ErrorKind::SpecificsOutOfBounds,
            CronError::NoGrammarMatch { .. } => ErrorKind::NoGrammarMatch,
        }
    }

    /// Name of the offending field, when the error concerns a single field
    pub fn field(&self) -> Option<&'static str> {
        match self {
            CronError::FieldCount { .. }
            | CronError::MissingFields { .. }
            | CronError::CrossFieldConflict { .. } => None,
            CronError::MissingValue { field }
            | CronError::ValueOutOfBounds { field, .. }
            | CronError::IncrementOutOfBounds { field, .. }
            | CronError::RangeOutOfBounds { field, .. }
            | CronError::RangeIncrementOutOfBounds { field, .. }
            | CronError::SpecificsOutOfBounds { field, .. }
            | CronError::NoGrammarMatch { field, .. } => Some(*field),
        }
    }

    /// The raw value that was rejected, when there is one
    pub fn value(&self) -> Option<&str> {
        match self {
            CronError::FieldCount { expression, .. } => Some(expression.as_str()),
            CronError::MissingFields { .. }
            | CronError::CrossFieldConflict { .. }
            | CronError::MissingValue { .. } => None,
            CronError::ValueOutOfBounds { value, .. }
            | CronError::IncrementOutOfBounds { value, .. }
            | CronError::RangeOutOfBounds { value, .. }
            | CronError::RangeIncrementOutOfBounds { value, .. }
            | CronError::SpecificsOutOfBounds { value, .. }
            | CronError::NoGrammarMatch { value, .. } => Some(value.as_str()),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
