// ABOUTME: Planner configuration - environment-driven defaults for mesocycle selections
// ABOUTME: Loads overrides from ONECOACH_* variables, validates them, and caches a global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OneCoach Contributors

//! Planner Configuration
//!
//! Environment-only configuration: defaults come from constants and each
//! `ONECOACH_*` variable overrides one field.
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `ONECOACH_DEFAULT_TOTAL_WEEKS` | `default_total_weeks` | 8 |
//! | `ONECOACH_DEFAULT_MODEL` | `default_model` | linear |
//! | `ONECOACH_DEFAULT_GOAL` | `default_goal` | general |
//! | `ONECOACH_DEFAULT_EXPERIENCE` | `default_experience` | intermediate |
//! | `ONECOACH_AUTO_DELOAD` | `auto_deload` | true |
//! | `ONECOACH_DELOAD_FREQUENCY` | `deload_frequency` | 4 |

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::warn;

use onecoach_core::constants::mesocycle;
use onecoach_core::models::{ExperienceLevel, PeriodizationModel, TrainingGoal};

/// Environment variable names
pub mod env_keys {
    /// Default mesocycle length
    pub const DEFAULT_TOTAL_WEEKS: &str = "ONECOACH_DEFAULT_TOTAL_WEEKS";
    /// Default periodization model
    pub const DEFAULT_MODEL: &str = "ONECOACH_DEFAULT_MODEL";
    /// Default training goal
    pub const DEFAULT_GOAL: &str = "ONECOACH_DEFAULT_GOAL";
    /// Default experience level
    pub const DEFAULT_EXPERIENCE: &str = "ONECOACH_DEFAULT_EXPERIENCE";
    /// Whether deload is on by default
    pub const AUTO_DELOAD: &str = "ONECOACH_AUTO_DELOAD";
    /// Default advisory deload frequency
    pub const DELOAD_FREQUENCY: &str = "ONECOACH_DELOAD_FREQUENCY";
}

/// Global configuration singleton
static PLANNER_CONFIG: OnceLock<PlannerConfig> = OnceLock::new();

/// Defaults applied to planner selections the user leaves unset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Mesocycle length in weeks
    pub default_total_weeks: u32,
    /// Periodization model
    pub default_model: PeriodizationModel,
    /// Training goal
    pub default_goal: TrainingGoal,
    /// Athlete experience
    pub default_experience: ExperienceLevel,
    /// Append a deload phase
    pub auto_deload: bool,
    /// Advisory weeks between deloads
    pub deload_frequency: u8,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_total_weeks: mesocycle::DEFAULT_TOTAL_WEEKS,
            default_model: PeriodizationModel::default(),
            default_goal: TrainingGoal::default(),
            default_experience: ExperienceLevel::default(),
            auto_deload: true,
            deload_frequency: mesocycle::DEFAULT_DELOAD_FREQUENCY,
        }
    }
}

fn parse_flag(raw: &str) -> Result<bool, String> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("expected a boolean, got '{other}'")),
    }
}

/// Read and parse one variable; `Ok(None)` when unset
fn env_override<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| ConfigError::Parse(format!("{key}='{raw}': {e}"))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}

fn env_flag(key: &str) -> Result<Option<bool>, ConfigError> {
    match env::var(key) {
        Ok(raw) => parse_flag(&raw)
            .map(Some)
            .map_err(|e| ConfigError::Parse(format!("{key}: {e}"))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}

impl PlannerConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PLANNER_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load planner config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from the environment, strictly
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an unparsable value or the
    /// resulting configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(weeks) = env_override(env_keys::DEFAULT_TOTAL_WEEKS)? {
            self.default_total_weeks = weeks;
        }
        if let Some(model) = env_override(env_keys::DEFAULT_MODEL)? {
            self.default_model = model;
        }
        if let Some(goal) = env_override(env_keys::DEFAULT_GOAL)? {
            self.default_goal = goal;
        }
        if let Some(level) = env_override(env_keys::DEFAULT_EXPERIENCE)? {
            self.default_experience = level;
        }
        if let Some(flag) = env_flag(env_keys::AUTO_DELOAD)? {
            self.auto_deload = flag;
        }
        if let Some(frequency) = env_override(env_keys::DELOAD_FREQUENCY)? {
            self.deload_frequency = frequency;
        }
        Ok(self)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if the default length is
    /// outside 2-16 weeks or the deload frequency outside 2-8
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(mesocycle::MIN_TOTAL_WEEKS..=mesocycle::MAX_TOTAL_WEEKS)
            .contains(&self.default_total_weeks)
        {
            return Err(ConfigError::ValueOutOfRange(
                "default_total_weeks must be between 2 and 16",
            ));
        }

        if !(mesocycle::MIN_DELOAD_FREQUENCY..=mesocycle::MAX_DELOAD_FREQUENCY)
            .contains(&self.deload_frequency)
        {
            return Err(ConfigError::ValueOutOfRange(
                "deload_frequency must be between 2 and 8",
            ));
        }

        Ok(())
    }
}
