// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cron expressions and the validation orchestrator
//!
//! An expression is split into fields, then checked in three steps:
//!
//! 1. every required field is present (all missing fields reported at once)
//! 2. the day-of-month / day-of-week exclusivity rule
//! 3. each field against its configuration, in order, year last
//!
//! Validation stops at the first error after step 1.

use crate::error::{CronError, Result};
use crate::field::FieldConfig;
use crate::fields;
use crate::parse::Shape;
use crate::rules;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A Quartz cron expression split into its fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CronExpression {
    pub second: String,
    pub minute: String,
    pub hour: String,
    pub day_of_month: String,
    pub month: String,
    pub day_of_week: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

/// How one field of a valid expression was recognized
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldMatch {
    pub field: &'static str,
    pub value: Option<String>,
    /// `None` only for an absent year
    pub shape: Option<Shape>,
}

impl CronExpression {
    /// Build a six-field expression. Whitespace inside a field is dropped.
    pub fn new(
        second: impl Into<String>,
        minute: impl Into<String>,
        hour: impl Into<String>,
        day_of_month: impl Into<String>,
        month: impl Into<String>,
        day_of_week: impl Into<String>,
    ) -> Self {
        Self {
            second: compact(second),
            minute: compact(minute),
            hour: compact(hour),
            day_of_month: compact(day_of_month),
            month: compact(month),
            day_of_week: compact(day_of_week),
            year: None,
        }
    }

    /// Add a year field; an empty year counts as absent.
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        let year = compact(year);
        self.year = (!year.is_empty()).then_some(year);
        self
    }

    /// Split a cron string on whitespace into six or seven fields.
    ///
    /// This only checks the field count; call [`CronExpression::validate`]
    /// for the fields themselves.
    pub fn parse(expression: &str) -> Result<Self> {
        let parts: Vec<&str> = expression.split_whitespace().collect();
        match parts.as_slice() {
            [second, minute, hour, day_of_month, month, day_of_week] => Ok(Self::new(
                *second,
                *minute,
                *hour,
                *day_of_month,
                *month,
                *day_of_week,
            )),
            [second, minute, hour, day_of_month, month, day_of_week, year] => Ok(Self::new(
                *second,
                *minute,
                *hour,
                *day_of_month,
                *month,
                *day_of_week,
            )
            .with_year(*year)),
            _ => Err(CronError::FieldCount {
                expression: expression.to_string(),
                count: parts.len(),
            }),
        }
    }

    /// Each field configuration paired with this expression's value for it
    pub fn fields(&self) -> [(&'static FieldConfig, Option<&str>); 7] {
        [
            (&fields::SECOND, Some(self.second.as_str())),
            (&fields::MINUTE, Some(self.minute.as_str())),
            (&fields::HOUR, Some(self.hour.as_str())),
            (&fields::DAY_OF_MONTH, Some(self.day_of_month.as_str())),
            (&fields::MONTH, Some(self.month.as_str())),
            (&fields::DAY_OF_WEEK, Some(self.day_of_week.as_str())),
            (&fields::YEAR, self.year.as_deref()),
        ]
    }

    /// Check the whole expression, stopping at the first violation.
    pub fn validate(&self) -> Result<()> {
        self.explain().map(|_| ())
    }

    /// Validate and report the shape each field was accepted as.
    pub fn explain(&self) -> Result<Vec<FieldMatch>> {
        tracing::debug!(expression = %self, "validating cron expression");
        let result: Result<Vec<FieldMatch>> = self.check_required().and_then(|()| {
            rules::check_day_exclusivity(&self.day_of_month, &self.day_of_week)?;
            self.fields()
                .into_iter()
                .map(|(config, value)| -> Result<FieldMatch> {
                    tracing::trace!(field = config.name, value = value.unwrap_or(""), "checking field");
                    let shape = config.classify(value)?;
                    Ok(FieldMatch {
                        field: config.name,
                        value: value.map(str::to_string),
                        shape,
                    })
                })
                .collect()
        });
        if let Err(e) = &result {
            tracing::debug!(
                kind = %e.kind(),
                field = e.field().unwrap_or("-"),
                error = %e,
                "rejected cron expression"
            );
        }
        result
    }

    fn check_required(&self) -> Result<()> {
        let missing: Vec<&'static str> = self
            .fields()
            .into_iter()
            .filter(|(config, value)| !config.nullable && value.is_none_or(str::is_empty))
            .map(|(config, _)| config.name)
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CronError::MissingFields { fields: missing })
        }
    }
}

impl FromStr for CronExpression {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for CronExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.second, self.minute, self.hour, self.day_of_month, self.month, self.day_of_week
        )?;
        if let Some(year) = &self.year {
            write!(f, " {}", year)?;
        }
        Ok(())
    }
}

/// Parse and validate a cron string in one step.
pub fn validate(expression: &str) -> Result<CronExpression> {
    let cron = CronExpression::parse(expression)?;
    cron.validate()?;
    Ok(cron)
}

pub fn is_valid(expression: &str) -> bool {
    validate(expression).is_ok()
}

fn compact(field: impl Into<String>) -> String {
    let field = field.into();
    if field.contains(char::is_whitespace) {
        field.chars().filter(|c| !c.is_whitespace()).collect()
    } else {
        field
    }
}

#[cfg(test)]
#[path = "expression_tests.rs"]
mod tests;
