// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token parsers
//!
//! Each parser either decomposes a raw field value into a typed [`Shape`] or
//! returns `None`. A `None` is "does not apply", not an error; only the field
//! configuration decides when nothing applied.

use crate::grammar::Grammar;
use serde::Serialize;
use std::fmt;

/// Base of an increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Start {
    /// `*`, i.e. the field minimum
    Wildcard,
    Value(u32),
}

/// One entry of a comma-separated list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Specific {
    Number(u32),
    /// Three-letter name as written, case preserved
    Name(String),
}

/// The recognized syntactic category of a field value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "shape", content = "value", rename_all = "snake_case")]
pub enum Shape {
    Single(u32),
    Increment {
        start: Start,
        step: u32,
    },
    Range {
        low: u32,
        high: u32,
    },
    RangeWithIncrement {
        low: u32,
        high: u32,
        step: u32,
    },
    Specifics(Vec<Specific>),
    /// Accepted verbatim from the field's literal set
    Literal(String),
    /// Accepted by one of the field's extension grammars
    Pattern {
        grammar: Grammar,
        raw: String,
    },
}

/// Typed parsers in precedence order
pub const TYPED_PARSERS: [fn(&str) -> Option<Shape>; 5] = [
    parse_single,
    parse_increment,
    parse_range,
    parse_range_with_increment,
    parse_specifics,
];

/// Try every typed parser in precedence order; the first match wins.
pub fn parse_typed(value: &str) -> Option<Shape> {
    TYPED_PARSERS.iter().find_map(|parse| parse(value))
}

pub fn parse_single(value: &str) -> Option<Shape> {
    Grammar::Integer
        .matches(value)
        .then(|| Shape::Single(number(value)))
}

/// `*/m` or `n/m`
pub fn parse_increment(value: &str) -> Option<Shape> {
    if !Grammar::Increment.matches(value) {
        return None;
    }
    let (base, step) = value.split_once('/')?;
    let start = if Grammar::Wildcard.matches(base) {
        Start::Wildcard
    } else {
        Start::Value(number(base))
    };
    Some(Shape::Increment {
        start,
        step: number(step),
    })
}

pub fn parse_range(value: &str) -> Option<Shape> {
    if !Grammar::Range.matches(value) {
        return None;
    }
    let (low, high) = value.split_once('-')?;
    Some(Shape::Range {
        low: number(low),
        high: number(high),
    })
}

pub fn parse_range_with_increment(value: &str) -> Option<Shape> {
    if !Grammar::RangeWithIncrement.matches(value) {
        return None;
    }
    let (range, step) = value.split_once('/')?;
    let (low, high) = range.split_once('-')?;
    Some(Shape::RangeWithIncrement {
        low: number(low),
        high: number(high),
        step: number(step),
    })
}

/// Lists are either all digits or all three-letter names, never mixed.
pub fn parse_specifics(value: &str) -> Option<Shape> {
    if Grammar::NumberList.matches(value) {
        let numbers = value.split(',').map(|n| Specific::Number(number(n)));
        return Some(Shape::Specifics(numbers.collect()));
    }
    if Grammar::NameList.matches(value) {
        let names = value.split(',').map(|n| Specific::Name(n.to_string()));
        return Some(Shape::Specifics(names.collect()));
    }
    None
}

// Only called on ASCII digit runs, so the sole failure is overflow. Saturate
// so an oversized number is reported as out of bounds, not malformed.
fn number(digits: &str) -> u32 {
    digits.parse().unwrap_or(u32::MAX)
}

impl fmt::Display for Start {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Start::Wildcard => write!(f, "*"),
            Start::Value(n) => write!(f, "{}", n),
        }
    }
}

impl fmt::Display for Specific {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Specific::Number(n) => write!(f, "{}", n),
            Specific::Name(name) => write!(f, "{}", name),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Single(n) => write!(f, "value {}", n),
            Shape::Increment {
                start: Start::Wildcard,
                step,
            } => write!(f, "every {} from the minimum", step),
            Shape::Increment {
                start: Start::Value(start),
                step,
            } => write!(f, "every {} from {}", step, start),
            Shape::Range { low, high } => write!(f, "range {} to {}", low, high),
            Shape::RangeWithIncrement { low, high, step } => {
                write!(f, "every {} from {} to {}", step, low, high)
            }
            Shape::Specifics(items) => {
                let items: Vec<String> = items.iter().map(ToString::to_string).collect();
                write!(f, "list of {}", items.join(", "))
            }
            Shape::Literal(raw) => write!(f, "literal '{}'", raw),
            Shape::Pattern { grammar, raw } => write!(f, "'{}' in {} form", raw, grammar),
        }
    }
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
