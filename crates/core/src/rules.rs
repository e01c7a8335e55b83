// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cross-field rules

use crate::error::{CronError, Result};

/// Quartz's "no specific value" marker
pub const PLACEHOLDER: &str = "?";

/// Day-of-month and day-of-week are mutually exclusive: exactly one of them
/// must be the `?` placeholder while the other carries the constraint.
///
/// `* … ?` passes; `* … *`, `? … ?` and two concrete values do not.
pub fn check_day_exclusivity(day_of_month: &str, day_of_week: &str) -> Result<()> {
    let dom_placeholder = day_of_month == PLACEHOLDER;
    let dow_placeholder = day_of_week == PLACEHOLDER;
    if dom_placeholder != dow_placeholder {
        return Ok(());
    }
    Err(CronError::CrossFieldConflict {
        day_of_month: day_of_month.to_string(),
        day_of_week: day_of_week.to_string(),
    })
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
