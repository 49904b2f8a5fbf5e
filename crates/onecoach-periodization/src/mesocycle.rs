// ABOUTME: Mesocycle assembly - turns planner selections into a complete mesocycle config
// ABOUTME: Holds the request/validation types and convenience accessors over the phase list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OneCoach Contributors

use serde::{Deserialize, Serialize};

use onecoach_core::constants::mesocycle;
use onecoach_core::errors::{AppError, AppResult};
use onecoach_core::models::{ExperienceLevel, PeriodizationModel, PhaseConfig, TrainingGoal};

use crate::builder::{build_phases, clamp_total_weeks, planned_weeks};
use crate::config::PlannerConfig;
use crate::diagnostics::PlanDiagnostics;
use crate::timeline::{self, PhaseWindow};

/// Raw planner selections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MesocycleRequest {
    /// Periodization strategy
    pub model: PeriodizationModel,
    /// Requested length in weeks (clamped to 2-16 when planning)
    pub total_weeks: u32,
    /// Training goal
    #[serde(default)]
    pub goal: TrainingGoal,
    /// Athlete experience
    #[serde(default)]
    pub experience_level: ExperienceLevel,
    /// Append a deload phase
    pub auto_deload_enabled: bool,
    /// Advisory weeks between deloads (2-8)
    pub deload_frequency: u8,
}

impl Default for MesocycleRequest {
    fn default() -> Self {
        Self {
            model: PeriodizationModel::default(),
            total_weeks: mesocycle::DEFAULT_TOTAL_WEEKS,
            goal: TrainingGoal::default(),
            experience_level: ExperienceLevel::default(),
            auto_deload_enabled: true,
            deload_frequency: mesocycle::DEFAULT_DELOAD_FREQUENCY,
        }
    }
}

impl MesocycleRequest {
    /// Request seeded from planner defaults
    #[must_use]
    pub const fn from_config(config: &PlannerConfig) -> Self {
        Self {
            model: config.default_model,
            total_weeks: config.default_total_weeks,
            goal: config.default_goal,
            experience_level: config.default_experience,
            auto_deload_enabled: config.auto_deload,
            deload_frequency: config.deload_frequency,
        }
    }

    /// Check advisory fields
    ///
    /// `total_weeks` is never an error here; planning clamps it.
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `ValueOutOfRange` if `deload_frequency` is
    /// outside 2-8.
    pub fn validate(&self) -> AppResult<()> {
        let bounds = mesocycle::MIN_DELOAD_FREQUENCY..=mesocycle::MAX_DELOAD_FREQUENCY;
        if !bounds.contains(&self.deload_frequency) {
            return Err(AppError::value_out_of_range(
                "deload_frequency",
                i64::from(self.deload_frequency),
                i64::from(mesocycle::MIN_DELOAD_FREQUENCY),
                i64::from(mesocycle::MAX_DELOAD_FREQUENCY),
            ));
        }
        Ok(())
    }
}

/// A planned mesocycle
///
/// Transient: rebuilt from a [`MesocycleRequest`] whenever the selections
/// change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MesocycleConfig {
    /// Periodization strategy
    pub model: PeriodizationModel,
    /// Length in weeks after clamping
    pub total_weeks: u32,
    /// Ordered phases
    pub phases: Vec<PhaseConfig>,
    /// Advisory weeks between deloads; only a single trailing deload is planned
    pub deload_frequency: u8,
    /// Whether a deload phase was appended
    pub auto_deload_enabled: bool,
    /// Training goal
    pub goal: TrainingGoal,
    /// Athlete experience
    #[serde(default)]
    pub experience_level: ExperienceLevel,
}

impl MesocycleConfig {
    /// Plan a mesocycle from the given selections
    #[must_use]
    pub fn plan(request: &MesocycleRequest) -> Self {
        let total_weeks = clamp_total_weeks(request.total_weeks);
        Self {
            model: request.model,
            total_weeks,
            phases: build_phases(total_weeks, request.model, request.auto_deload_enabled),
            deload_frequency: request.deload_frequency,
            auto_deload_enabled: request.auto_deload_enabled,
            goal: request.goal,
            experience_level: request.experience_level,
        }
    }

    /// Sum of phase durations
    #[must_use]
    pub fn planned_weeks(&self) -> u32 {
        planned_weeks(&self.phases)
    }

    /// The deload phase, if planned
    #[must_use]
    pub fn deload_phase(&self) -> Option<&PhaseConfig> {
        self.phases.iter().find(|p| p.phase.is_deload())
    }

    /// Phases positioned on the week timeline
    #[must_use]
    pub fn timeline(&self) -> Vec<PhaseWindow> {
        timeline::timeline(&self.phases)
    }

    /// Index of the phase containing `current_week`
    #[must_use]
    pub fn current_phase_index(&self, current_week: Option<u32>) -> Option<usize> {
        timeline::current_phase_index(&self.phases, current_week)
    }

    /// Phase containing `current_week`
    #[must_use]
    pub fn current_phase(&self, current_week: Option<u32>) -> Option<&PhaseConfig> {
        self.current_phase_index(current_week)
            .and_then(|index| self.phases.get(index))
    }

    /// Structural diagnostics for this plan
    #[must_use]
    pub fn diagnostics(&self) -> PlanDiagnostics {
        PlanDiagnostics::inspect(self)
    }
}
