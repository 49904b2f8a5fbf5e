// ABOUTME: Training domain models shared across the OneCoach planner crates
// ABOUTME: Re-exports phase and periodization selection types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OneCoach Contributors

/// Periodization model, training goal, experience level
pub mod periodization;
/// Training phases, RPE ranges, per-phase prescriptions
pub mod phase;

pub use periodization::{ExperienceLevel, PeriodizationModel, TrainingGoal};
pub use phase::{PhaseConfig, RpeRange, TrainingPhase};
