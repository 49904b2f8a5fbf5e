// ABOUTME: Check command for onecoach-cli
// ABOUTME: Runs plan diagnostics over a grid of lengths, models, and deload settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OneCoach Contributors

use onecoach::{
    constants::mesocycle,
    errors::{AppError, AppResult},
    formatters::OutputFormat,
    models::PeriodizationModel,
    periodization::{MesocycleConfig, MesocycleRequest, PlanDiagnostics},
};
use serde::Serialize;
use tracing::info;

use crate::helpers::display::display_check_rows;

/// Diagnostics for one grid cell
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRow {
    pub model: PeriodizationModel,
    pub total_weeks: u32,
    pub auto_deload_enabled: bool,
    pub diagnostics: PlanDiagnostics,
}

fn check_grid(weeks_from: u32, weeks_to: u32) -> Vec<CheckRow> {
    let mut rows = Vec::new();
    for model in PeriodizationModel::ALL {
        for total_weeks in weeks_from..=weeks_to {
            for auto_deload_enabled in [false, true] {
                let plan = MesocycleConfig::plan(&MesocycleRequest {
                    model,
                    total_weeks,
                    auto_deload_enabled,
                    ..MesocycleRequest::default()
                });
                rows.push(CheckRow {
                    model,
                    total_weeks,
                    auto_deload_enabled,
                    diagnostics: PlanDiagnostics::inspect_phases(&plan.phases, plan.total_weeks),
                });
            }
        }
    }
    rows
}

/// Check structural invariants across a range of mesocycle lengths
pub fn run(
    weeks_from: u32,
    weeks_to: u32,
    only_issues: bool,
    format: OutputFormat,
) -> AppResult<()> {
    let bounds = mesocycle::MIN_TOTAL_WEEKS..=mesocycle::MAX_TOTAL_WEEKS;
    for (field, value) in [("weeks_from", weeks_from), ("weeks_to", weeks_to)] {
        if !bounds.contains(&value) {
            return Err(AppError::value_out_of_range(
                field,
                i64::from(value),
                i64::from(mesocycle::MIN_TOTAL_WEEKS),
                i64::from(mesocycle::MAX_TOTAL_WEEKS),
            ));
        }
    }
    if weeks_from > weeks_to {
        return Err(AppError::invalid_input(format!(
            "weeks_from ({weeks_from}) must not exceed weeks_to ({weeks_to})"
        )));
    }

    let mut rows = check_grid(weeks_from, weeks_to);
    let inconsistent = rows
        .iter()
        .filter(|row| !row.diagnostics.is_consistent())
        .count();
    info!(
        checked = rows.len(),
        inconsistent, "Plan diagnostics complete"
    );

    if only_issues {
        rows.retain(|row| !row.diagnostics.is_consistent());
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Text => display_check_rows(&rows, inconsistent),
    }

    Ok(())
}
