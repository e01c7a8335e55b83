// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `qcron explain` - Show how each field is recognized

use anyhow::Result;
use clap::Args;
use qcron_core::{CronExpression, FieldMatch};

use crate::output::{print, print_json, CheckReport, OutputFormat};

#[derive(Args)]
pub struct ExplainArgs {
    /// Expression to explain (quote it)
    pub expression: String,
}

pub fn explain(args: &ExplainArgs, format: OutputFormat) -> Result<bool> {
    let explained = CronExpression::parse(&args.expression).and_then(|expr| expr.explain());

    match explained {
        Ok(matches) => {
            match format {
                OutputFormat::Text => print!("{}", format_table(&matches)),
                OutputFormat::Json => print_json(&matches)?,
            }
            Ok(true)
        }
        Err(err) => {
            print(&CheckReport::new(args.expression.as_str(), Err(&err)), format)?;
            Ok(false)
        }
    }
}

fn format_table(matches: &[FieldMatch]) -> String {
    let value_width = matches
        .iter()
        .filter_map(|m| m.value.as_deref())
        .map(str::len)
        .max()
        .unwrap_or(0)
        .max("VALUE".len());

    let mut out = format!("{:<14}{:<w$}  FORM\n", "FIELD", "VALUE", w = value_width);
    for m in matches {
        let value = m.value.as_deref().unwrap_or("-");
        let form = match &m.shape {
            Some(shape) => shape.to_string(),
            None => "(absent)".to_string(),
        };
        out.push_str(&format!(
            "{:<14}{:<w$}  {}\n",
            m.field,
            value,
            form,
            w = value_width
        ));
    }
    out
}

#[cfg(test)]
#[path = "explain_tests.rs"]
mod tests;
