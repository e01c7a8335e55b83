// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Field configuration
//!
//! A [`FieldConfig`] binds the token parsers and bounds validators to one
//! field's domain. Validation walks a fixed precedence chain:
//!
//! ```text
//! integer → increment → range → range/step → list → literal → extension grammar
//! ```
//!
//! The first typed shape recognized is committed to: if its values are out
//! of bounds the shape-specific error is raised and nothing else is tried.

use crate::bounds::{self, Domain};
use crate::error::{CronError, Result};
use crate::grammar::Grammar;
use crate::parse::{self, Shape};
use serde::Serialize;

/// Numeric forms every field accepts, listed in diagnostics
const NUMERIC_FORMS: [Grammar; 5] = [
    Grammar::Integer,
    Grammar::Increment,
    Grammar::Range,
    Grammar::RangeWithIncrement,
    Grammar::NumberList,
];

/// Immutable description of one cron field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldConfig {
    pub name: &'static str,
    pub min_value: u32,
    pub max_value: u32,
    /// Largest legal step size
    pub increment_max: u32,
    /// Bare symbols accepted verbatim, matched case-sensitively (`*`, `?`, `L`)
    pub literals: &'static [&'static str],
    /// Symbolic domain (month or weekday abbreviations), matched case-insensitively
    pub names: &'static [&'static str],
    /// Extension grammars tried after every typed parser and literal failed
    pub patterns: &'static [Grammar],
    /// Whether an absent value is tolerated
    pub nullable: bool,
}

impl FieldConfig {
    /// A non-nullable numeric field with no literals or extensions
    pub const fn new(name: &'static str, min_value: u32, max_value: u32, increment_max: u32) -> Self {
        Self {
            name,
            min_value,
            max_value,
            increment_max,
            literals: &[],
            names: &[],
            patterns: &[],
            nullable: false,
        }
    }

    pub const fn named(self, name: &'static str) -> Self {
        Self { name, ..self }
    }

    pub const fn bounded(self, min_value: u32, max_value: u32, increment_max: u32) -> Self {
        Self {
            min_value,
            max_value,
            increment_max,
            ..self
        }
    }

    pub const fn with_literals(self, literals: &'static [&'static str]) -> Self {
        Self { literals, ..self }
    }

    pub const fn with_names(self, names: &'static [&'static str]) -> Self {
        Self { names, ..self }
    }

    pub const fn with_patterns(self, patterns: &'static [Grammar]) -> Self {
        Self { patterns, ..self }
    }

    pub const fn nullable(self) -> Self {
        Self {
            nullable: true,
            ..self
        }
    }

    pub fn domain(&self) -> Domain {
        Domain::new(self.min_value, self.max_value, self.increment_max)
    }

    /// Symbols match exactly; names ignore ASCII case.
    pub fn allows_literal(&self, token: &str) -> bool {
        self.literals.iter().any(|literal| *literal == token)
            || self
                .names
                .iter()
                .any(|name| name.eq_ignore_ascii_case(token))
    }

    /// Validate one raw field value.
    pub fn validate(&self, value: Option<&str>) -> Result<()> {
        self.classify(value).map(|_| ())
    }

    /// Validate one raw field value and return the shape it was accepted as.
    ///
    /// Returns `Ok(None)` only for an absent value on a nullable field.
    pub fn classify(&self, value: Option<&str>) -> Result<Option<Shape>> {
        let Some(value) = value else {
            if self.nullable {
                return Ok(None);
            }
            return Err(CronError::MissingValue { field: self.name });
        };

        if let Some(shape) = parse::parse_typed(value) {
            self.check_bounds(value, &shape)?;
            return Ok(Some(shape));
        }

        if self.allows_literal(value) {
            return Ok(Some(Shape::Literal(value.to_string())));
        }

        if let Some(grammar) = self.patterns.iter().find(|g| g.matches(value)) {
            return Ok(Some(Shape::Pattern {
                grammar: *grammar,
                raw: value.to_string(),
            }));
        }

        Err(CronError::NoGrammarMatch {
            field: self.name,
            value: value.to_string(),
            expected: self.expected_forms(),
        })
    }

    /// Every form this field accepts, for diagnostics
    pub fn expected_forms(&self) -> Vec<String> {
        NUMERIC_FORMS
            .iter()
            .map(|grammar| grammar.example().to_string())
            .chain(self.literals.iter().map(|literal| literal.to_string()))
            .chain(self.names.iter().map(|name| name.to_string()))
            .chain(
                (!self.names.is_empty()).then(|| Grammar::NameList.example().to_string()),
            )
            .chain(self.patterns.iter().map(|grammar| grammar.example().to_string()))
            .collect()
    }

    fn check_bounds(&self, value: &str, shape: &Shape) -> Result<()> {
        let domain = self.domain();
        match shape {
            Shape::Single(n) => {
                if !bounds::single_in_bounds(*n, domain) {
                    return Err(CronError::ValueOutOfBounds {
                        field: self.name,
                        value: value.to_string(),
                        min: self.min_value,
                        max: self.max_value,
                    });
                }
            }
            Shape::Increment { start, step } => {
                if !bounds::increment_in_bounds(*start, *step, domain) {
                    return Err(CronError::IncrementOutOfBounds {
                        field: self.name,
                        value: value.to_string(),
                        min: self.min_value,
                        max: self.max_value,
                        increment_max: self.increment_max,
                    });
                }
            }
            Shape::Range { low, high } => {
                if !bounds::range_in_bounds(*low, *high, domain) {
                    return Err(CronError::RangeOutOfBounds {
                        field: self.name,
                        value: value.to_string(),
                        low: *low,
                        high: *high,
                        min: self.min_value,
                        max: self.max_value,
                    });
                }
            }
            Shape::RangeWithIncrement { low, high, step } => {
                if !bounds::range_with_increment_in_bounds(*low, *high, *step, domain) {
                    return Err(CronError::RangeIncrementOutOfBounds {
                        field: self.name,
                        value: value.to_string(),
                        low: *low,
                        high: *high,
                        step: *step,
                        min: self.min_value,
                        max: self.max_value,
                        increment_max: self.increment_max,
                    });
                }
            }
            Shape::Specifics(items) => {
                let accepts_name = |name: &str| self.allows_literal(name);
                if !bounds::specifics_in_bounds(items, domain, accepts_name) {
                    let invalid = bounds::offending_specifics(items, domain, accepts_name)
                        .into_iter()
                        .map(ToString::to_string)
                        .collect();
                    return Err(CronError::SpecificsOutOfBounds {
                        field: self.name,
                        value: value.to_string(),
                        invalid,
                        min: self.min_value,
                        max: self.max_value,
                    });
                }
            }
            // Never bounds-checked numerically
            Shape::Literal(_) | Shape::Pattern { .. } => {}
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "field_tests.rs"]
mod tests;
