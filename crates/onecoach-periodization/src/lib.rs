// ABOUTME: Mesocycle periodization engine for the OneCoach planner
// ABOUTME: Phase plan builder, timeline presenter, diagnostics, scheduling, and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OneCoach Contributors

#![deny(unsafe_code)]

//! # OneCoach Periodization
//!
//! Deterministic, allocation-light planning of training mesocycles. Given a
//! length in weeks, a periodization model, and a deload preference, the
//! builder produces an ordered list of phases; the timeline functions place
//! those phases on absolute weeks and find the phase for a given week.
//!
//! Everything here is pure and synchronous.

/// Phase plan builder
pub mod builder;
/// Planner configuration
pub mod config;
/// Structural invariant checks
pub mod diagnostics;
/// Mesocycle request and config assembly
pub mod mesocycle;
/// Calendar scheduling from a start date
pub mod schedule;
/// Week ranges and current-phase lookup
pub mod timeline;

pub use builder::{build_phases, clamp_total_weeks, planned_weeks};
pub use config::{ConfigError, PlannerConfig};
pub use diagnostics::{PlanDiagnostics, PlanIssue};
pub use mesocycle::{MesocycleConfig, MesocycleRequest};
pub use schedule::{schedule, week_of_date, ScheduledPhase};
pub use timeline::{
    current_phase_index, phase_at_week, timeline, week_range_of, PhaseWindow, WeekRange,
};
