// ABOUTME: Models command for onecoach-cli
// ABOUTME: Lists the periodization models with their phase structure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OneCoach Contributors

use onecoach::{
    errors::AppResult,
    formatters::OutputFormat,
    models::PeriodizationModel,
    periodization::build_phases,
};
use serde::Serialize;

use crate::helpers::display::display_model_summaries;

/// One row of the model listing
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSummary {
    pub model: PeriodizationModel,
    pub label: &'static str,
    pub description: &'static str,
    pub phases_without_deload: usize,
    pub phases_with_deload: usize,
}

fn summarize(model: PeriodizationModel, weeks: u32) -> ModelSummary {
    ModelSummary {
        model,
        label: model.label(),
        description: model.description(),
        phases_without_deload: build_phases(weeks, model, false).len(),
        phases_with_deload: build_phases(weeks, model, true).len(),
    }
}

/// List periodization models
pub fn run(weeks: u32, format: OutputFormat) -> AppResult<()> {
    let summaries: Vec<ModelSummary> = PeriodizationModel::ALL
        .iter()
        .map(|model| summarize(*model, weeks))
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summaries)?),
        OutputFormat::Text => display_model_summaries(&summaries),
    }

    Ok(())
}
