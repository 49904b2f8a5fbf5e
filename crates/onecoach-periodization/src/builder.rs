// ABOUTME: Mesocycle plan builder - partitions a mesocycle into ordered training phases
// ABOUTME: Implements linear, block, undulating, and autoregulated periodization splits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OneCoach Contributors

//! # Mesocycle Plan Builder
//!
//! Splits `total_weeks` into phases by proportion of the total. Interior
//! phases take the floor of their share, the last sequential phase takes
//! the remainder, and every phase lasts at least one week.
//!
//! The one-week floor wins over the total: for very short mesocycles
//! (for example two weeks, linear, with a deload) the phases sum to more
//! than the requested length. The builder keeps that behavior and
//! [`PlanDiagnostics`](crate::diagnostics::PlanDiagnostics) reports it.

use onecoach_core::constants::{focus, mesocycle, proportions};
use onecoach_core::models::{PeriodizationModel, PhaseConfig, TrainingPhase};
use tracing::debug;

/// Clamp a requested mesocycle length into the supported 2-16 week window
#[must_use]
pub fn clamp_total_weeks(total_weeks: u32) -> u32 {
    total_weeks.clamp(mesocycle::MIN_TOTAL_WEEKS, mesocycle::MAX_TOTAL_WEEKS)
}

/// Sum of phase durations, saturating at `u32::MAX`
#[must_use]
pub fn planned_weeks(phases: &[PhaseConfig]) -> u32 {
    phases
        .iter()
        .fold(0, |total: u32, p| total.saturating_add(p.duration_weeks))
}

/// Build the ordered phase list for a mesocycle
///
/// Out-of-range lengths are clamped to 2-16 weeks first. Never fails and
/// never returns an empty list.
///
/// # Example
///
/// ```rust
/// use onecoach_core::models::{PeriodizationModel, TrainingPhase};
/// use onecoach_periodization::builder::build_phases;
///
/// let phases = build_phases(8, PeriodizationModel::Linear, true);
/// let weeks: Vec<u32> = phases.iter().map(|p| p.duration_weeks).collect();
/// assert_eq!(weeks, vec![4, 2, 1, 1]);
/// assert_eq!(phases[3].phase, TrainingPhase::Deload);
/// ```
#[must_use]
pub fn build_phases(
    total_weeks: u32,
    model: PeriodizationModel,
    auto_deload_enabled: bool,
) -> Vec<PhaseConfig> {
    let weeks = clamp_total_weeks(total_weeks);
    if weeks != total_weeks {
        debug!(
            requested = total_weeks,
            clamped = weeks,
            "Mesocycle length clamped"
        );
    }

    let phases = match model {
        PeriodizationModel::Linear => linear_phases(weeks, auto_deload_enabled),
        PeriodizationModel::Block => block_phases(weeks, auto_deload_enabled),
        PeriodizationModel::Undulating => {
            single_phase(weeks, auto_deload_enabled, focus::UNDULATING)
        }
        PeriodizationModel::Autoregulated => {
            single_phase(weeks, auto_deload_enabled, focus::AUTOREGULATED)
        }
    };

    debug!(
        model = %model,
        total_weeks = weeks,
        planned_weeks = planned_weeks(&phases),
        phase_count = phases.len(),
        auto_deload = auto_deload_enabled,
        "Built mesocycle phases"
    );

    phases
}

const fn at_least_one(weeks: u32) -> u32 {
    if weeks < mesocycle::MIN_PHASE_WEEKS {
        mesocycle::MIN_PHASE_WEEKS
    } else {
        weeks
    }
}

const fn share(weeks: u32, fraction: (u32, u32)) -> u32 {
    weeks * fraction.0 / fraction.1
}

const fn reserved_deload_weeks(auto_deload_enabled: bool) -> u32 {
    if auto_deload_enabled {
        mesocycle::DELOAD_WEEKS
    } else {
        0
    }
}

fn linear_phases(weeks: u32, auto_deload_enabled: bool) -> Vec<PhaseConfig> {
    let accumulation = at_least_one(share(weeks, proportions::LINEAR_ACCUMULATION));
    let intensification = at_least_one(share(weeks, proportions::LINEAR_INTENSIFICATION));
    let realization = at_least_one(weeks.saturating_sub(
        accumulation + intensification + reserved_deload_weeks(auto_deload_enabled),
    ));

    let mut phases = vec![
        PhaseConfig::standard(TrainingPhase::Accumulation, accumulation),
        PhaseConfig::standard(TrainingPhase::Intensification, intensification),
        PhaseConfig::standard(TrainingPhase::Realization, realization),
    ];

    if auto_deload_enabled {
        // Deload takes whatever is left after the three training phases
        let remaining = weeks.saturating_sub(accumulation + intensification + realization);
        phases.push(PhaseConfig::deload(at_least_one(remaining)));
    }

    phases
}

fn block_phases(weeks: u32, auto_deload_enabled: bool) -> Vec<PhaseConfig> {
    let block = at_least_one(weeks / proportions::BLOCK_COUNT);
    let last_block = at_least_one(
        weeks.saturating_sub(2 * block + reserved_deload_weeks(auto_deload_enabled)),
    );

    let mut phases = vec![
        PhaseConfig::standard(TrainingPhase::Accumulation, block),
        PhaseConfig::standard(TrainingPhase::Intensification, block),
        PhaseConfig::standard(TrainingPhase::Realization, last_block),
    ];

    if auto_deload_enabled {
        phases.push(PhaseConfig::deload(mesocycle::DELOAD_WEEKS));
    }

    phases
}

fn single_phase(weeks: u32, auto_deload_enabled: bool, focus: &str) -> Vec<PhaseConfig> {
    let training_weeks =
        at_least_one(weeks.saturating_sub(reserved_deload_weeks(auto_deload_enabled)));

    let mut phases = vec![PhaseConfig::mixed(training_weeks, focus)];

    if auto_deload_enabled {
        phases.push(PhaseConfig::deload(mesocycle::DELOAD_WEEKS));
    }

    phases
}

#[cfg(test)]
mod tests {
    use super::*;

    fn durations(phases: &[PhaseConfig]) -> Vec<u32> {
        phases.iter().map(|p| p.duration_weeks).collect()
    }

    #[test]
    fn test_share_matches_float_floor() {
        for weeks in mesocycle::MIN_TOTAL_WEEKS..=mesocycle::MAX_TOTAL_WEEKS {
            let float_floor = (0.3 * f64::from(weeks)).floor() as u32;
            assert_eq!(
                share(weeks, proportions::LINEAR_INTENSIFICATION),
                float_floor
            );
        }
    }

    #[test]
    fn test_linear_without_deload_gives_remainder_to_realization() {
        let phases = linear_phases(10, false);
        assert_eq!(durations(&phases), vec![5, 3, 2]);
    }

    #[test]
    fn test_block_remainder_goes_to_last_block() {
        let phases = block_phases(11, false);
        assert_eq!(durations(&phases), vec![3, 3, 5]);
    }
}
