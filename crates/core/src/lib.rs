// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! qcron-core: Quartz cron expression validation
//!
//! This crate provides:
//! - **grammar**: token-shape recognizers, independent of any field
//! - **parse**: typed parsers tried in a fixed precedence order
//! - **bounds**: pure range checks for each parsed shape
//! - **field** / **fields**: declarative per-field configuration
//! - **rules**: the day-of-month / day-of-week exclusivity rule
//! - **expression**: splitting, formatting and whole-expression validation
//!
//! # Architecture
//!
//! ```text
//! "0 0 12 ? * MON-FRI" → CronExpression → required? → rules → FieldConfig × 7
//!                                                               ↳ parse → bounds
//!                                                               ↳ literal → grammar
//! ```
//!
//! # Example
//!
//! ```
//! use qcron_core::{validate, ErrorKind};
//!
//! assert!(validate("0 0 12 ? * MON-FRI").is_ok());
//!
//! let err = validate("0 0 25 * * ?").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::ValueOutOfBounds);
//! assert_eq!(err.field(), Some("hour"));
//! ```

pub mod bounds;
pub mod error;
pub mod expression;
pub mod field;
pub mod fields;
pub mod grammar;
pub mod parse;
pub mod rules;

pub use bounds::Domain;
pub use error::{CronError, ErrorKind, Result};
pub use expression::{is_valid, validate, CronExpression, FieldMatch};
pub use field::FieldConfig;
pub use grammar::{Grammar, MONTH_NAMES, WEEKDAY_NAMES};
pub use parse::{Shape, Specific, Start};
