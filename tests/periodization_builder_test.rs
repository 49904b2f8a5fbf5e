// ABOUTME: Integration tests for the mesocycle plan builder
// ABOUTME: Covers phase counts, ordering, durations, prescriptions, and clamping per model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OneCoach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{durations, init_test_logging, kinds};
use onecoach::constants::{focus, mesocycle};
use onecoach::models::{PeriodizationModel, TrainingPhase};
use onecoach::periodization::{build_phases, clamp_total_weeks, planned_weeks};

const SEQUENTIAL: [TrainingPhase; 3] = [
    TrainingPhase::Accumulation,
    TrainingPhase::Intensification,
    TrainingPhase::Realization,
];

fn all_weeks() -> impl Iterator<Item = u32> {
    mesocycle::MIN_TOTAL_WEEKS..=mesocycle::MAX_TOTAL_WEEKS
}

#[test]
fn test_linear_eight_weeks_with_deload() {
    init_test_logging();
    let phases = build_phases(8, PeriodizationModel::Linear, true);

    assert_eq!(durations(&phases), vec![4, 2, 1, 1]);
    assert_eq!(planned_weeks(&phases), 8);
    assert_eq!(phases[3].phase, TrainingPhase::Deload);
}

#[test]
fn test_block_nine_weeks_without_deload() {
    let phases = build_phases(9, PeriodizationModel::Block, false);

    assert_eq!(durations(&phases), vec![3, 3, 3]);
    assert_eq!(kinds(&phases), SEQUENTIAL.to_vec());
}

#[test]
fn test_block_deload_is_one_week_and_shortens_last_block() {
    let phases = build_phases(10, PeriodizationModel::Block, true);

    assert_eq!(durations(&phases), vec![3, 3, 3, 1]);
}

#[test]
fn test_linear_two_weeks_with_deload_overflows() {
    // Every phase is forced to one week, so four phases cover four weeks
    let phases = build_phases(2, PeriodizationModel::Linear, true);

    assert_eq!(durations(&phases), vec![1, 1, 1, 1]);
    assert_eq!(planned_weeks(&phases), 4);
}

#[test]
fn test_phase_count_by_model() {
    for weeks in all_weeks() {
        for model in [PeriodizationModel::Linear, PeriodizationModel::Block] {
            assert_eq!(build_phases(weeks, model, false).len(), 3, "{model} {weeks}");
            assert_eq!(build_phases(weeks, model, true).len(), 4, "{model} {weeks}");
        }
        for model in [
            PeriodizationModel::Undulating,
            PeriodizationModel::Autoregulated,
        ] {
            assert_eq!(build_phases(weeks, model, false).len(), 1, "{model} {weeks}");
            assert_eq!(build_phases(weeks, model, true).len(), 2, "{model} {weeks}");
        }
    }
}

#[test]
fn test_sequential_models_keep_phase_order() {
    for weeks in all_weeks() {
        for model in [PeriodizationModel::Linear, PeriodizationModel::Block] {
            let without = build_phases(weeks, model, false);
            assert_eq!(kinds(&without), SEQUENTIAL.to_vec());

            let with = build_phases(weeks, model, true);
            let mut expected = SEQUENTIAL.to_vec();
            expected.push(TrainingPhase::Deload);
            assert_eq!(kinds(&with), expected);
        }
    }
}

#[test]
fn test_deload_is_always_last() {
    for weeks in all_weeks() {
        for model in PeriodizationModel::ALL {
            let phases = build_phases(weeks, model, true);
            let deload_positions: Vec<usize> = phases
                .iter()
                .enumerate()
                .filter(|(_, p)| p.phase.is_deload())
                .map(|(i, _)| i)
                .collect();
            assert_eq!(deload_positions, vec![phases.len() - 1]);
        }
    }
}

#[test]
fn test_sum_matches_total_once_every_phase_fits() {
    for weeks in 5..=mesocycle::MAX_TOTAL_WEEKS {
        for model in PeriodizationModel::ALL {
            for deload in [false, true] {
                let phases = build_phases(weeks, model, deload);
                assert_eq!(
                    planned_weeks(&phases),
                    weeks,
                    "{model} weeks={weeks} deload={deload}"
                );
            }
        }
    }
}

#[test]
fn test_single_phase_models_sum_for_every_length() {
    for weeks in all_weeks() {
        for model in [
            PeriodizationModel::Undulating,
            PeriodizationModel::Autoregulated,
        ] {
            for deload in [false, true] {
                assert_eq!(planned_weeks(&build_phases(weeks, model, deload)), weeks);
            }
        }
    }
}

#[test]
fn test_every_phase_lasts_at_least_one_week() {
    for weeks in all_weeks() {
        for model in PeriodizationModel::ALL {
            for deload in [false, true] {
                assert!(build_phases(weeks, model, deload)
                    .iter()
                    .all(|p| p.duration_weeks >= 1));
            }
        }
    }
}

#[test]
fn test_linear_prescriptions() {
    let phases = build_phases(12, PeriodizationModel::Linear, true);

    let accumulation = &phases[0];
    assert!((accumulation.volume_multiplier - 1.0).abs() < f64::EPSILON);
    assert!((accumulation.intensity_multiplier - 0.7).abs() < f64::EPSILON);
    assert_eq!(
        (accumulation.rpe_range.min(), accumulation.rpe_range.max()),
        (6, 8)
    );

    let intensification = &phases[1];
    assert!((intensification.volume_multiplier - 0.8).abs() < f64::EPSILON);
    assert!((intensification.intensity_multiplier - 0.85).abs() < f64::EPSILON);
    assert_eq!(
        (intensification.rpe_range.min(), intensification.rpe_range.max()),
        (7, 9)
    );

    let realization = &phases[2];
    assert!((realization.volume_multiplier - 0.6).abs() < f64::EPSILON);
    assert!((realization.intensity_multiplier - 1.0).abs() < f64::EPSILON);
    assert_eq!(
        (realization.rpe_range.min(), realization.rpe_range.max()),
        (8, 10)
    );

    let deload = &phases[3];
    assert!((deload.volume_multiplier - 0.5).abs() < f64::EPSILON);
    assert!((deload.intensity_multiplier - 0.6).abs() < f64::EPSILON);
    assert_eq!((deload.rpe_range.min(), deload.rpe_range.max()), (4, 6));

    assert!(phases.iter().all(|p| p.focus_description.is_none()));
}

#[test]
fn test_block_uses_linear_prescriptions() {
    let linear = build_phases(12, PeriodizationModel::Linear, true);
    let block = build_phases(12, PeriodizationModel::Block, true);

    for (l, b) in linear.iter().zip(&block) {
        assert_eq!(l.phase, b.phase);
        assert!((l.volume_multiplier - b.volume_multiplier).abs() < f64::EPSILON);
        assert!((l.intensity_multiplier - b.intensity_multiplier).abs() < f64::EPSILON);
        assert_eq!(l.rpe_range, b.rpe_range);
    }
}

#[test]
fn test_undulating_single_mixed_phase() {
    let phases = build_phases(10, PeriodizationModel::Undulating, true);

    assert_eq!(durations(&phases), vec![9, 1]);
    let mixed = &phases[0];
    assert_eq!(mixed.phase, TrainingPhase::Accumulation);
    assert!((mixed.volume_multiplier - 0.9).abs() < f64::EPSILON);
    assert!((mixed.intensity_multiplier - 0.8).abs() < f64::EPSILON);
    assert_eq!((mixed.rpe_range.min(), mixed.rpe_range.max()), (6, 9));
    assert_eq!(mixed.focus_description.as_deref(), Some(focus::UNDULATING));
    assert!(phases[1].focus_description.is_none());
}

#[test]
fn test_autoregulated_focus_without_deload() {
    let phases = build_phases(6, PeriodizationModel::Autoregulated, false);

    assert_eq!(durations(&phases), vec![6]);
    assert_eq!(
        phases[0].focus_description.as_deref(),
        Some("RPE-driven auto-adjustment")
    );
}

#[test]
fn test_total_weeks_clamped_before_building() {
    assert_eq!(clamp_total_weeks(0), 2);
    assert_eq!(clamp_total_weeks(1), 2);
    assert_eq!(clamp_total_weeks(9), 9);
    assert_eq!(clamp_total_weeks(40), 16);

    for model in PeriodizationModel::ALL {
        for deload in [false, true] {
            assert_eq!(
                build_phases(0, model, deload),
                build_phases(2, model, deload)
            );
            assert_eq!(
                build_phases(100, model, deload),
                build_phases(16, model, deload)
            );
        }
    }
}

#[test]
fn test_builder_is_deterministic() {
    for model in PeriodizationModel::ALL {
        assert_eq!(build_phases(11, model, true), build_phases(11, model, true));
    }
}
