// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! qcron - Quartz cron expression checker

mod commands;
mod output;
mod schedule;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check, explain, fields, lint};
use output::OutputFormat;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "qcron",
    version,
    about = "Validate Quartz scheduler cron expressions"
)]
struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log validation steps to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate one or more cron expressions
    Check(check::CheckArgs),
    /// Show how each field of an expression is recognized
    Explain(explain::ExplainArgs),
    /// List the field domains and accepted forms
    Fields,
    /// Validate every schedule in a TOML schedule file
    Lint(lint::LintArgs),
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let all_valid = match cli.command {
        Commands::Check(args) => check::check(&args, cli.format)?,
        Commands::Explain(args) => explain::explain(&args, cli.format)?,
        Commands::Fields => {
            fields::fields(cli.format)?;
            true
        }
        Commands::Lint(args) => lint::lint(&args, cli.format)?,
    };

    Ok(if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn setup_logging(verbose: bool) {
    use std::io::IsTerminal;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries reports, so logs go to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .init();
}
