// ABOUTME: OneCoach CLI - command-line front end for the mesocycle periodization planner
// ABOUTME: Handles plan building, model listing, and diagnostics over length ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OneCoach Contributors
//!
//! Usage:
//! ```bash
//! # Eight-week linear plan with a trailing deload, highlighting week 8
//! onecoach-cli plan --weeks 8 --model linear --current-week 8
//!
//! # Nine-week block plan without deload, as JSON
//! onecoach-cli plan --weeks 9 --model block --no-deload --format json
//!
//! # Put the plan on the calendar
//! onecoach-cli plan --weeks 12 --model undulating --start-date 2025-03-03
//!
//! # List periodization models
//! onecoach-cli models
//!
//! # Report plans whose phases do not add up to the requested length
//! onecoach-cli check --weeks-from 2 --weeks-to 16 --only-issues
//! ```

mod commands;
mod helpers;

use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use onecoach::{
    errors::{AppError, AppResult, ErrorResponse},
    formatters::OutputFormat,
    logging::LoggingConfig,
    models::{ExperienceLevel, PeriodizationModel, TrainingGoal},
    periodization::PlannerConfig,
};
use tracing::debug;

use commands::plan::PlanOptions;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "onecoach-cli",
    about = "OneCoach mesocycle periodization planner",
    long_about = "Builds training mesocycles (accumulation, intensification, realization, deload) for the linear, block, undulating and autoregulated periodization models."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Build a mesocycle plan
    Plan {
        /// Mesocycle length in weeks (clamped to 2-16)
        #[arg(long, short = 'w')]
        weeks: Option<u32>,

        /// Periodization model (linear, block, undulating, autoregulated)
        #[arg(long, short = 'm')]
        model: Option<PeriodizationModel>,

        /// Training goal (strength, hypertrophy, power, general)
        #[arg(long)]
        goal: Option<TrainingGoal>,

        /// Athlete experience (beginner, intermediate, advanced)
        #[arg(long)]
        experience: Option<ExperienceLevel>,

        /// Append a deload phase
        #[arg(long, conflicts_with = "no_deload")]
        deload: bool,

        /// Do not append a deload phase
        #[arg(long)]
        no_deload: bool,

        /// Advisory weeks between deloads (2-8)
        #[arg(long)]
        deload_frequency: Option<u8>,

        /// Week to highlight on the timeline
        #[arg(long)]
        current_week: Option<u32>,

        /// First day of the mesocycle (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<NaiveDate>,
    },

    /// List periodization models
    Models {
        /// Mesocycle length used to count phases
        #[arg(long, default_value = "8")]
        weeks: u32,
    },

    /// Check plan invariants across a range of lengths
    Check {
        /// Shortest length to check
        #[arg(long, default_value = "2")]
        weeks_from: u32,

        /// Longest length to check
        #[arg(long, default_value = "16")]
        weeks_to: u32,

        /// Only list inconsistent plans
        #[arg(long)]
        only_issues: bool,
    },
}

const fn deload_choice(deload: bool, no_deload: bool) -> Option<bool> {
    if deload {
        Some(true)
    } else if no_deload {
        Some(false)
    } else {
        None
    }
}

fn execute(command: Command, format: OutputFormat) -> Result<()> {
    let config = PlannerConfig::global();
    debug!(?config, "Planner configuration loaded");

    match command {
        Command::Plan {
            weeks,
            model,
            goal,
            experience,
            deload,
            no_deload,
            deload_frequency,
            current_week,
            start_date,
        } => {
            let options = PlanOptions {
                weeks,
                model,
                goal,
                experience,
                deload: deload_choice(deload, no_deload),
                deload_frequency,
                current_week,
                start_date,
            };
            commands::plan::run(&options, config, format)
        }
        Command::Models { weeks } => commands::models::run(weeks, format),
        Command::Check {
            weeks_from,
            weeks_to,
            only_issues,
        } => commands::check::run(weeks_from, weeks_to, only_issues, format),
    }
}

fn report_error(error: AppError, format: OutputFormat) -> ExitCode {
    let exit_code = u8::try_from(error.exit_code()).unwrap_or(1);
    match format {
        OutputFormat::Json => {
            let response = ErrorResponse::from(error);
            match serde_json::to_string_pretty(&response) {
                Ok(json) => eprintln!("{json}"),
                Err(e) => eprintln!("Error: {e}"),
            }
        }
        OutputFormat::Text => eprintln!("Error: {error}"),
    }
    ExitCode::from(exit_code)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = if cli.verbose {
        LoggingConfig::from_env().with_level("debug")
    } else {
        LoggingConfig::from_env()
    };
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match execute(cli.command, cli.format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report_error(error, cli.format),
    }
}
