// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounds validators
//!
//! Pure predicates over a parsed [`Shape`](crate::parse::Shape)'s values.
//! They answer yes or no; turning a "no" into a classified error is the
//! field configuration's job.

use crate::parse::{Specific, Start};
use serde::Serialize;

/// Numeric domain of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Domain {
    pub min: u32,
    pub max: u32,
    /// Largest legal step
    pub increment_max: u32,
}

impl Domain {
    pub const fn new(min: u32, max: u32, increment_max: u32) -> Self {
        Self {
            min,
            max,
            increment_max,
        }
    }

    pub fn contains(&self, n: u32) -> bool {
        (self.min..=self.max).contains(&n)
    }

    pub fn allows_step(&self, step: u32) -> bool {
        (1..=self.increment_max).contains(&step)
    }

    /// Effective increment start; a wildcard starts at the field minimum
    pub fn resolve(&self, start: Start) -> u32 {
        match start {
            Start::Wildcard => self.min,
            Start::Value(n) => n,
        }
    }
}

pub fn single_in_bounds(n: u32, domain: Domain) -> bool {
    domain.contains(n)
}

pub fn increment_in_bounds(start: Start, step: u32, domain: Domain) -> bool {
    domain.contains(domain.resolve(start)) && domain.allows_step(step)
}

/// Ranges must be ascending (or a single point) and fully inside the domain
pub fn range_in_bounds(low: u32, high: u32, domain: Domain) -> bool {
    low <= high && domain.contains(low) && domain.contains(high)
}

pub fn range_with_increment_in_bounds(low: u32, high: u32, step: u32, domain: Domain) -> bool {
    range_in_bounds(low, high, domain) && domain.allows_step(step)
}

/// Every number must be in the domain and every name accepted by `accepts_name`
pub fn specifics_in_bounds(
    items: &[Specific],
    domain: Domain,
    accepts_name: impl Fn(&str) -> bool,
) -> bool {
    offending_specifics(items, domain, accepts_name).is_empty()
}

/// The list entries that fail [`specifics_in_bounds`], in input order
pub fn offending_specifics(
    items: &[Specific],
    domain: Domain,
    accepts_name: impl Fn(&str) -> bool,
) -> Vec<&Specific> {
    items
        .iter()
        .filter(|item| match item {
            Specific::Number(n) => !domain.contains(*n),
            Specific::Name(name) => !accepts_name(name),
        })
        .collect()
}

#[cfg(test)]
#[path = "bounds_tests.rs"]
mod tests;
