// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `qcron fields` - List field domains

use anyhow::Result;
use qcron_core::FieldConfig;

use crate::output::{print_json, OutputFormat};

pub fn fields(format: OutputFormat) -> Result<()> {
    let configs = &qcron_core::fields::ALL;
    match format {
        OutputFormat::Text => print!("{}", format_table(configs)),
        OutputFormat::Json => print_json(configs)?,
    }
    Ok(())
}

fn format_table(configs: &[FieldConfig]) -> String {
    let mut out = format!(
        "{:<14}{:>6}{:>6}{:>6}  FORMS\n",
        "FIELD", "MIN", "MAX", "STEP"
    );
    for config in configs {
        let mut forms = config.expected_forms().join(" | ");
        if config.nullable {
            forms.push_str(" (optional)");
        }
        out.push_str(&format!(
            "{:<14}{:>6}{:>6}{:>6}  {}\n",
            config.name, config.min_value, config.max_value, config.increment_max, forms
        ));
    }
    out
}
