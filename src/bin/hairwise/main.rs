// ABOUTME: Hairwise CLI - analyzes wizard profiles from the command line
// ABOUTME: Prints analysis results as JSON on stdout and structured errors on stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Analyze a saved wizard submission
//! hairwise analyze --input profile.json --pretty
//!
//! # Analyze from stdin
//! cat profile.json | hairwise analyze --input -
//!
//! # Check a submission without analyzing it
//! hairwise validate --input profile.json
//! ```

mod commands;

use clap::{Parser, Subcommand};
use hairwise::error_report::ErrorReport;
use hairwise::errors::{AppError, AppResult};
use hairwise::logging::{AppLogger, LoggingConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(
    name = "hairwise",
    about = "Hairwise hair-health analysis CLI",
    long_about = "Runs the rule-based hair-health analysis over a wizard profile \
                  and prints the report as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Analyze a profile and print the full report
    Analyze {
        /// Profile JSON file, or `-` for stdin
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Pretty-print the JSON report
        #[arg(long)]
        pretty: bool,
    },

    /// Validate a profile without analyzing it
    Validate {
        /// Profile JSON file, or `-` for stdin
        #[arg(long, short = 'i')]
        input: PathBuf,
    },
}

impl Command {
    const fn name(&self) -> &'static str {
        match self {
            Self::Analyze { .. } => "analyze",
            Self::Validate { .. } => "validate",
        }
    }
}

fn run(command: Command) -> AppResult<()> {
    match command {
        Command::Analyze { input, pretty } => commands::analyze::run(&input, pretty),
        Command::Validate { input } => commands::validate::run(&input),
    }
}

fn report_error(error: AppError) -> ExitCode {
    let report = ErrorReport::from(error);
    eprintln!("{}", report.body);
    ExitCode::from(report.exit_status)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(error) = LoggingConfig::from_env().verbose(cli.verbose).init() {
        return report_error(error);
    }

    let name = cli.command.name();
    let started = Instant::now();
    let outcome = run(cli.command);
    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    AppLogger::log_command(name, outcome.is_ok(), duration_ms);

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report_error(error),
    }
}
