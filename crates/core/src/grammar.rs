// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token-shape recognizers
//!
//! A [`Grammar`] only answers "does this string have my shape". It never
//! looks at whether the numbers inside are legal for a field; that is the
//! job of [`crate::bounds`].

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Weekday abbreviations in Quartz order (SUN = 1)
pub const WEEKDAY_NAMES: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// Month abbreviations in calendar order (JAN = 1)
pub const MONTH_NAMES: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// A syntactic shape a field value can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Grammar {
    /// `*`, on its own or as the base of `*/m`
    Wildcard,
    /// `n`
    Integer,
    /// `*/m` or `n/m`
    Increment,
    /// `n-n`
    Range,
    /// `n-n/m`
    RangeWithIncrement,
    /// `n,n,...`
    NumberList,
    /// `AAA,AAA,...`
    NameList,
    /// `L-n`, n days before the end of the month
    LastDayOffset,
    /// `nW`, weekday nearest to day n
    NearestWeekday,
    /// `n#m`, the m-th weekday n of the month
    WeekdayOccurrence,
    /// `nL`, the last weekday n of the month
    LastWeekdayOccurrence,
    /// `MON-FRI`
    WeekdayRange,
    /// `JAN-MAR`
    MonthRange,
}

// Indexed by `Grammar as usize`; keep in declaration order.
// Allow expect here as every pattern is built from constants
#[allow(clippy::expect_used)]
static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    Grammar::ALL
        .iter()
        .map(|grammar| Regex::new(&grammar.source()).expect("constant regex pattern is valid"))
        .collect()
});

impl Grammar {
    /// Every grammar, in declaration order
    pub const ALL: [Grammar; 13] = [
        Grammar::Wildcard,
        Grammar::Integer,
        Grammar::Increment,
        Grammar::Range,
        Grammar::RangeWithIncrement,
        Grammar::NumberList,
        Grammar::NameList,
        Grammar::LastDayOffset,
        Grammar::NearestWeekday,
        Grammar::WeekdayOccurrence,
        Grammar::LastWeekdayOccurrence,
        Grammar::WeekdayRange,
        Grammar::MonthRange,
    ];

    /// Whether `value` has this grammar's shape
    pub fn matches(&self, value: &str) -> bool {
        PATTERNS
            .get(*self as usize)
            .is_some_and(|pattern| pattern.is_match(value))
    }

    /// Stable identifier, identical to the serialized form
    pub fn name(&self) -> &'static str {
        match self {
            Grammar::Wildcard => "wildcard",
            Grammar::Integer => "integer",
            Grammar::Increment => "increment",
            Grammar::Range => "range",
            Grammar::RangeWithIncrement => "range_with_increment",
            Grammar::NumberList => "number_list",
            Grammar::NameList => "name_list",
            Grammar::LastDayOffset => "last_day_offset",
            Grammar::NearestWeekday => "nearest_weekday",
            Grammar::WeekdayOccurrence => "weekday_occurrence",
            Grammar::LastWeekdayOccurrence => "last_weekday_occurrence",
            Grammar::WeekdayRange => "weekday_range",
            Grammar::MonthRange => "month_range",
        }
    }

    /// Short notation used in diagnostics
    pub fn example(&self) -> &'static str {
        match self {
            Grammar::Wildcard => "*",
            Grammar::Integer => "n",
            Grammar::Increment => "*/n or n/m",
            Grammar::Range => "n-m",
            Grammar::RangeWithIncrement => "n-m/s",
            Grammar::NumberList => "n,m,...",
            Grammar::NameList => "AAA,BBB,...",
            Grammar::LastDayOffset => "L-n",
            Grammar::NearestWeekday => "nW",
            Grammar::WeekdayOccurrence => "n#m",
            Grammar::LastWeekdayOccurrence => "nL",
            Grammar::WeekdayRange => "MON-FRI",
            Grammar::MonthRange => "JAN-MAR",
        }
    }

    fn source(&self) -> String {
        match self {
            Grammar::Wildcard => r"^\*$".to_string(),
            Grammar::Integer => r"^[0-9]+$".to_string(),
            Grammar::Increment => r"^(\*|[0-9]+)/[0-9]+$".to_string(),
            Grammar::Range => r"^[0-9]+-[0-9]+$".to_string(),
            Grammar::RangeWithIncrement => r"^[0-9]+-[0-9]+/[0-9]+$".to_string(),
            Grammar::NumberList => r"^[0-9]+(,[0-9]+)+$".to_string(),
            Grammar::NameList => r"(?i-u)^[A-Z]{3}(,[A-Z]{3})+$".to_string(),
            Grammar::LastDayOffset => r"^L-[0-9]+$".to_string(),
            Grammar::NearestWeekday => r"^[0-9]+W$".to_string(),
            Grammar::WeekdayOccurrence => r"^[0-9]+#[0-9]+$".to_string(),
            Grammar::LastWeekdayOccurrence => r"^[0-9]+L$".to_string(),
            Grammar::WeekdayRange => name_range(&WEEKDAY_NAMES),
            Grammar::MonthRange => name_range(&MONTH_NAMES),
        }
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.example())
    }
}

// Names fold ASCII case only; Unicode folding would let `ſ` stand in for `s`.
fn name_range(names: &[&str]) -> String {
    let alternation = names.join("|");
    format!("(?i-u)^({alternation})-({alternation})$")
}

#[cfg(test)]
#[path = "grammar_tests.rs"]
mod tests;
