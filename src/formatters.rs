// ABOUTME: Output formatting for mesocycle plan reports (human-readable text and JSON)
// ABOUTME: Bundles a planned mesocycle with its timeline, schedule, and diagnostics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OneCoach Contributors

//! # Output Formatters
//!
//! A [`PlanReport`] is everything a renderer needs for one plan. It can be
//! emitted as pretty JSON for other tools or as an aligned text table.

use std::fmt::Write as _;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use onecoach_core::errors::{AppError, AppResult};
use onecoach_periodization::{
    schedule, MesocycleConfig, PhaseWindow, PlanDiagnostics, ScheduledPhase,
};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned text for terminals
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "table" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::invalid_input(format!(
                "Unknown output format: '{other}'. Valid options: text, json"
            ))),
        }
    }
}

/// A planned mesocycle with its derived views
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanReport {
    /// The plan itself
    pub mesocycle: MesocycleConfig,
    /// Phases on the week timeline
    pub timeline: Vec<PhaseWindow>,
    /// Week to highlight, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_week: Option<u32>,
    /// Phase containing `current_week`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_phase_index: Option<usize>,
    /// Calendar dates, when a start date was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<ScheduledPhase>>,
    /// Structural checks
    pub diagnostics: PlanDiagnostics,
}

impl PlanReport {
    /// Assemble a report
    ///
    /// # Errors
    ///
    /// Returns an error if the schedule cannot be placed on the calendar
    pub fn new(
        mesocycle: MesocycleConfig,
        current_week: Option<u32>,
        start_date: Option<NaiveDate>,
    ) -> AppResult<Self> {
        let calendar = start_date
            .map(|start| schedule(&mesocycle.phases, start))
            .transpose()?;

        Ok(Self {
            timeline: mesocycle.timeline(),
            current_phase_index: mesocycle.current_phase_index(current_week),
            diagnostics: mesocycle.diagnostics(),
            current_week,
            schedule: calendar,
            mesocycle,
        })
    }

    /// Render in the requested format
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails
    pub fn render(&self, format: OutputFormat) -> AppResult<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Text => Ok(self.render_text()),
        }
    }

    fn render_text(&self) -> String {
        let plan = &self.mesocycle;
        let mut out = String::new();

        // Writing into a String cannot fail
        let _ = writeln!(
            out,
            "{} mesocycle: {} weeks, goal {}, {} athlete",
            plan.model.label(),
            plan.total_weeks,
            plan.goal.label(),
            plan.experience_level
        );
        let _ = writeln!(
            out,
            "{:<3} {:<16} {:>5} {:>7} {:>6} {:>9} {:>5}  {}",
            "#", "PHASE", "WEEKS", "RANGE", "VOLUME", "INTENSITY", "RPE", "FOCUS"
        );

        for (phase, window) in plan.phases.iter().zip(&self.timeline) {
            let marker = if self.current_phase_index == Some(window.index) {
                ">"
            } else {
                " "
            };
            let range = format!("{}-{}", window.range.start, window.range.end);
            let _ = writeln!(
                out,
                "{marker}{:<2} {:<16} {:>5} {:>7} {:>6.2} {:>9.2} {:>5}  {}",
                window.index + 1,
                phase.phase.label(),
                phase.duration_weeks,
                range,
                phase.volume_multiplier,
                phase.intensity_multiplier,
                phase.rpe_range.to_string(),
                phase.focus_description.as_deref().unwrap_or("-"),
            );
        }

        if let Some(schedule) = &self.schedule {
            let _ = writeln!(out, "Schedule:");
            for entry in schedule {
                let _ = writeln!(
                    out,
                    "  {:<16} {} .. {}",
                    entry.phase.label(),
                    entry.start_date,
                    entry.end_date
                );
            }
        }

        if let Some(week) = self.current_week {
            if self.current_phase_index.is_none() {
                let _ = writeln!(out, "Week {week} is outside this mesocycle");
            }
        }

        for issue in &self.diagnostics.issues {
            let _ = writeln!(out, "warning: {issue}");
        }

        let _ = writeln!(
            out,
            "Deload frequency (advisory): every {} weeks",
            plan.deload_frequency
        );

        out
    }
}
