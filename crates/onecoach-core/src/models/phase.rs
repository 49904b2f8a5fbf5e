// ABOUTME: Training phase model - phase kinds, RPE ranges, and per-phase prescriptions
// ABOUTME: PhaseConfig is the unit a mesocycle plan is built from
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OneCoach Contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{phase_profiles, rpe};
use crate::errors::{AppError, AppResult};

/// Named training phase within a mesocycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingPhase {
    /// Volume-focused work capacity building
    Accumulation,
    /// Heavier loads with reduced volume
    Intensification,
    /// Peaking: expressing accumulated fitness
    Realization,
    /// Planned recovery
    Deload,
}

impl TrainingPhase {
    /// All phases in training order
    pub const ALL: [Self; 4] = [
        Self::Accumulation,
        Self::Intensification,
        Self::Realization,
        Self::Deload,
    ];

    /// Stable identifier used in serialized output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accumulation => "accumulation",
            Self::Intensification => "intensification",
            Self::Realization => "realization",
            Self::Deload => "deload",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Accumulation => "Accumulation",
            Self::Intensification => "Intensification",
            Self::Realization => "Realization",
            Self::Deload => "Deload",
        }
    }

    /// True for the recovery phase
    #[must_use]
    pub const fn is_deload(self) -> bool {
        matches!(self, Self::Deload)
    }
}

impl fmt::Display for TrainingPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrainingPhase {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "accumulation" => Ok(Self::Accumulation),
            "intensification" => Ok(Self::Intensification),
            "realization" => Ok(Self::Realization),
            "deload" => Ok(Self::Deload),
            other => Err(AppError::invalid_input(format!(
                "Unknown training phase: '{other}'. Valid options: accumulation, intensification, realization, deload"
            ))),
        }
    }
}

/// Inclusive rate-of-perceived-exertion bounds, serialized as `[min, max]`
///
/// Deserialization goes through [`RpeRange::new`], so malformed bounds are
/// rejected rather than carried into a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)")]
pub struct RpeRange(u8, u8);

impl RpeRange {
    /// Create a validated range
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `ValueOutOfRange` if either bound lies outside
    /// the 1-10 scale, or `InvalidInput` if `min > max`.
    pub fn new(min: u8, max: u8) -> AppResult<Self> {
        for (field, value) in [("rpe_min", min), ("rpe_max", max)] {
            if !(rpe::MIN..=rpe::MAX).contains(&value) {
                return Err(AppError::value_out_of_range(
                    field,
                    i64::from(value),
                    i64::from(rpe::MIN),
                    i64::from(rpe::MAX),
                ));
            }
        }
        if min > max {
            return Err(AppError::invalid_input(format!(
                "RPE range minimum {min} exceeds maximum {max}"
            )));
        }
        Ok(Self(min, max))
    }

    /// Build from a compile-time profile tuple
    pub(crate) const fn from_profile(bounds: (u8, u8)) -> Self {
        Self(bounds.0, bounds.1)
    }

    /// Lower bound
    #[must_use]
    pub const fn min(self) -> u8 {
        self.0
    }

    /// Upper bound
    #[must_use]
    pub const fn max(self) -> u8 {
        self.1
    }

    /// Whether an RPE rating falls inside the range
    #[must_use]
    pub const fn contains(self, rating: u8) -> bool {
        rating >= self.0 && rating <= self.1
    }

    /// Whether both bounds sit on the 1-10 scale in order
    #[must_use]
    pub const fn is_well_formed(self) -> bool {
        self.0 >= rpe::MIN && self.1 <= rpe::MAX && self.0 <= self.1
    }
}

impl TryFrom<(u8, u8)> for RpeRange {
    type Error = AppError;

    fn try_from((min, max): (u8, u8)) -> AppResult<Self> {
        Self::new(min, max)
    }
}

impl fmt::Display for RpeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.0, self.1)
    }
}

/// One phase of a mesocycle with its prescription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseConfig {
    /// Which phase this is
    pub phase: TrainingPhase,
    /// Length in weeks (at least 1)
    pub duration_weeks: u32,
    /// Training volume relative to baseline, in (0, 1]
    pub volume_multiplier: f64,
    /// Training intensity relative to baseline, in (0, 1]
    pub intensity_multiplier: f64,
    /// Expected effort bounds
    pub rpe_range: RpeRange,
    /// Annotation for undulating and autoregulated plans
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_description: Option<String>,
}

impl PhaseConfig {
    /// Phase with the standard prescription for its kind
    #[must_use]
    pub fn standard(phase: TrainingPhase, duration_weeks: u32) -> Self {
        let (volume, intensity, rpe_bounds) = match phase {
            TrainingPhase::Accumulation => (
                phase_profiles::accumulation::VOLUME,
                phase_profiles::accumulation::INTENSITY,
                phase_profiles::accumulation::RPE,
            ),
            TrainingPhase::Intensification => (
                phase_profiles::intensification::VOLUME,
                phase_profiles::intensification::INTENSITY,
                phase_profiles::intensification::RPE,
            ),
            TrainingPhase::Realization => (
                phase_profiles::realization::VOLUME,
                phase_profiles::realization::INTENSITY,
                phase_profiles::realization::RPE,
            ),
            TrainingPhase::Deload => (
                phase_profiles::deload::VOLUME,
                phase_profiles::deload::INTENSITY,
                phase_profiles::deload::RPE,
            ),
        };

        Self {
            phase,
            duration_weeks,
            volume_multiplier: volume,
            intensity_multiplier: intensity,
            rpe_range: RpeRange::from_profile(rpe_bounds),
            focus_description: None,
        }
    }

    /// Accumulation-labelled mixed phase used by single-phase models
    #[must_use]
    pub fn mixed(duration_weeks: u32, focus: impl Into<String>) -> Self {
        Self {
            phase: TrainingPhase::Accumulation,
            duration_weeks,
            volume_multiplier: phase_profiles::mixed::VOLUME,
            intensity_multiplier: phase_profiles::mixed::INTENSITY,
            rpe_range: RpeRange::from_profile(phase_profiles::mixed::RPE),
            focus_description: Some(focus.into()),
        }
    }

    /// Standard deload phase
    #[must_use]
    pub fn deload(duration_weeks: u32) -> Self {
        Self::standard(TrainingPhase::Deload, duration_weeks)
    }

    /// Both multipliers lie in (0, 1]
    #[must_use]
    pub fn has_valid_multipliers(&self) -> bool {
        let in_range = |m: f64| m > 0.0 && m <= 1.0;
        in_range(self.volume_multiplier) && in_range(self.intensity_multiplier)
    }
}
