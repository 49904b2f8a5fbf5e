// ABOUTME: Periodization selections - model, training goal, and athlete experience level
// ABOUTME: Closed enums with parsing and display used by the planner and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OneCoach Contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Strategy for varying volume and intensity across a mesocycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodizationModel {
    /// Volume falls and intensity rises phase by phase
    #[default]
    Linear,
    /// Roughly equal concentrated blocks
    Block,
    /// Daily or weekly variation inside one phase
    Undulating,
    /// Load driven by session RPE inside one phase
    Autoregulated,
}

impl PeriodizationModel {
    /// All models
    pub const ALL: [Self; 4] = [
        Self::Linear,
        Self::Block,
        Self::Undulating,
        Self::Autoregulated,
    ];

    /// Stable identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Block => "block",
            Self::Undulating => "undulating",
            Self::Autoregulated => "autoregulated",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::Block => "Block",
            Self::Undulating => "Undulating",
            Self::Autoregulated => "Autoregulated",
        }
    }

    /// Short description shown next to the model selector
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Linear => "Progressive overload from high volume to high intensity",
            Self::Block => "Concentrated accumulation, intensification and realization blocks",
            Self::Undulating => "Volume and intensity vary day to day or week to week",
            Self::Autoregulated => "Session load adjusted from perceived exertion",
        }
    }

    /// Whether the plan is split into accumulation/intensification/realization
    #[must_use]
    pub const fn is_sequential(self) -> bool {
        matches!(self, Self::Linear | Self::Block)
    }
}

impl fmt::Display for PeriodizationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodizationModel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "block" => Ok(Self::Block),
            "undulating" | "dup" => Ok(Self::Undulating),
            "autoregulated" | "autoregulation" => Ok(Self::Autoregulated),
            other => Err(AppError::invalid_input(format!(
                "Unknown periodization model: '{other}'. Valid options: linear, block, undulating, autoregulated"
            ))),
        }
    }
}

/// Primary training goal for the mesocycle (informational)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingGoal {
    /// Maximal force production
    Strength,
    /// Muscle growth
    Hypertrophy,
    /// Rate of force development
    Power,
    /// General fitness
    #[default]
    General,
}

impl TrainingGoal {
    /// Stable identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Hypertrophy => "hypertrophy",
            Self::Power => "power",
            Self::General => "general",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Hypertrophy => "Hypertrophy",
            Self::Power => "Power",
            Self::General => "General Fitness",
        }
    }
}

impl fmt::Display for TrainingGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrainingGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strength" => Ok(Self::Strength),
            "hypertrophy" => Ok(Self::Hypertrophy),
            "power" => Ok(Self::Power),
            "general" => Ok(Self::General),
            other => Err(AppError::invalid_input(format!(
                "Unknown training goal: '{other}'. Valid options: strength, hypertrophy, power, general"
            ))),
        }
    }
}

/// Athlete training experience (informational)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// Less than a year of structured training
    Beginner,
    /// One to three years
    #[default]
    Intermediate,
    /// Three or more years
    Advanced,
}

impl ExperienceLevel {
    /// Stable identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(AppError::invalid_input(format!(
                "Unknown experience level: '{other}'. Valid options: beginner, intermediate, advanced"
            ))),
        }
    }
}
