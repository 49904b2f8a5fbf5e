// ABOUTME: Plan command for onecoach-cli
// ABOUTME: Builds a mesocycle from flags plus configured defaults and prints the report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OneCoach Contributors

use chrono::NaiveDate;
use onecoach::{
    errors::AppResult,
    formatters::{OutputFormat, PlanReport},
    models::{ExperienceLevel, PeriodizationModel, TrainingGoal},
    periodization::{MesocycleConfig, MesocycleRequest, PlannerConfig},
};
use tracing::{info, warn};

type Result<T> = AppResult<T>;

/// Selections given on the command line; `None` falls back to configuration
#[derive(Debug, Default)]
pub struct PlanOptions {
    pub weeks: Option<u32>,
    pub model: Option<PeriodizationModel>,
    pub goal: Option<TrainingGoal>,
    pub experience: Option<ExperienceLevel>,
    pub deload: Option<bool>,
    pub deload_frequency: Option<u8>,
    pub current_week: Option<u32>,
    pub start_date: Option<NaiveDate>,
}

/// Merge flags over configured defaults
fn build_request(options: &PlanOptions, config: &PlannerConfig) -> MesocycleRequest {
    let defaults = MesocycleRequest::from_config(config);
    MesocycleRequest {
        model: options.model.unwrap_or(defaults.model),
        total_weeks: options.weeks.unwrap_or(defaults.total_weeks),
        goal: options.goal.unwrap_or(defaults.goal),
        experience_level: options.experience.unwrap_or(defaults.experience_level),
        auto_deload_enabled: options.deload.unwrap_or(defaults.auto_deload_enabled),
        deload_frequency: options.deload_frequency.unwrap_or(defaults.deload_frequency),
    }
}

/// Build and print a mesocycle plan
pub fn run(options: &PlanOptions, config: &PlannerConfig, format: OutputFormat) -> Result<()> {
    let request = build_request(options, config);
    request.validate()?;

    let mesocycle = MesocycleConfig::plan(&request);
    if mesocycle.total_weeks != request.total_weeks {
        warn!(
            "Requested {} weeks; planning {} (supported range is 2-16)",
            request.total_weeks, mesocycle.total_weeks
        );
    }

    info!(
        model = %mesocycle.model,
        total_weeks = mesocycle.total_weeks,
        phases = mesocycle.phases.len(),
        "Planned mesocycle"
    );

    let report = PlanReport::new(mesocycle, options.current_week, options.start_date)?;
    print!("{}", report.render(format)?);

    Ok(())
}
