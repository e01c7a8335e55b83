// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The seven Quartz field configurations

use crate::field::FieldConfig;
use crate::grammar::{Grammar, MONTH_NAMES, WEEKDAY_NAMES};

pub const SECOND: FieldConfig = FieldConfig::new("second", 0, 59, 59).with_literals(&["*"]);

pub const MINUTE: FieldConfig = SECOND.named("minute");

pub const HOUR: FieldConfig = SECOND.named("hour").bounded(0, 23, 23);

pub const DAY_OF_MONTH: FieldConfig = FieldConfig::new("day_of_month", 1, 31, 31)
    .with_literals(&["*", "?", "L", "LW"])
    .with_patterns(&[Grammar::LastDayOffset, Grammar::NearestWeekday]);

pub const MONTH: FieldConfig = FieldConfig::new("month", 1, 12, 12)
    .with_literals(&["*"])
    .with_names(&MONTH_NAMES)
    .with_patterns(&[Grammar::MonthRange]);

pub const DAY_OF_WEEK: FieldConfig = FieldConfig::new("day_of_week", 1, 7, 7)
    .with_literals(&["*", "?"])
    .with_names(&WEEKDAY_NAMES)
    .with_patterns(&[
        Grammar::WeekdayOccurrence,
        Grammar::LastWeekdayOccurrence,
        Grammar::WeekdayRange,
    ]);

pub const YEAR: FieldConfig = FieldConfig::new("year", 1970, 2099, 130)
    .with_literals(&["*"])
    .nullable();

/// All fields in expression order
pub static ALL: [FieldConfig; 7] = [
    SECOND,
    MINUTE,
    HOUR,
    DAY_OF_MONTH,
    MONTH,
    DAY_OF_WEEK,
    YEAR,
];

/// Look up a field configuration by name
pub fn by_name(name: &str) -> Option<&'static FieldConfig> {
    ALL.iter().find(|config| config.name == name)
}

#[cfg(test)]
#[path = "fields_tests.rs"]
mod tests;
