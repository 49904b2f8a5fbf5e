// ABOUTME: Plan diagnostics - checks a built mesocycle against its structural invariants
// ABOUTME: Reports duration mismatches, misplaced deloads, and malformed prescriptions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OneCoach Contributors

//! # Plan Diagnostics
//!
//! A plan is consistent when its phase durations add up to the requested
//! length, a deload (if any) comes last, and every prescription is in range.
//! Inconsistencies are reported and logged, never raised as errors: the
//! builder's output for very short mesocycles is kept as-is.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use onecoach_core::models::PhaseConfig;

use crate::builder::planned_weeks;
use crate::mesocycle::MesocycleConfig;

/// A single invariant violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanIssue {
    /// The plan has no phases
    EmptyPlan,
    /// Phase durations do not add up to the requested length
    DurationMismatch {
        /// Requested mesocycle length
        requested: u32,
        /// Sum of phase durations
        planned: u32,
    },
    /// A deload phase is followed by other phases
    DeloadNotLast {
        /// Position of the deload
        index: usize,
    },
    /// A phase lasts zero weeks
    EmptyPhase {
        /// Position of the phase
        index: usize,
    },
    /// A multiplier lies outside (0, 1]
    InvalidMultiplier {
        /// Position of the phase
        index: usize,
    },
    /// RPE bounds off the 1-10 scale or reversed
    InvalidRpeRange {
        /// Position of the phase
        index: usize,
    },
}

impl fmt::Display for PlanIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPlan => f.write_str("plan has no phases"),
            Self::DurationMismatch { requested, planned } => write!(
                f,
                "phases span {planned} weeks but {requested} were requested"
            ),
            Self::DeloadNotLast { index } => {
                write!(f, "deload at position {index} is not the final phase")
            }
            Self::EmptyPhase { index } => write!(f, "phase {index} lasts zero weeks"),
            Self::InvalidMultiplier { index } => {
                write!(f, "phase {index} has a multiplier outside (0, 1]")
            }
            Self::InvalidRpeRange { index } => {
                write!(f, "phase {index} has an RPE range outside 1-10")
            }
        }
    }
}

/// Structural summary of a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDiagnostics {
    /// Length the plan was built for
    pub requested_weeks: u32,
    /// Sum of phase durations
    pub planned_weeks: u32,
    /// Number of phases
    pub phase_count: usize,
    /// Position of the deload phase, if present
    pub deload_index: Option<usize>,
    /// Invariant violations found
    pub issues: Vec<PlanIssue>,
}

impl PlanDiagnostics {
    /// Inspect a mesocycle
    #[must_use]
    pub fn inspect(config: &MesocycleConfig) -> Self {
        let diagnostics = Self::inspect_phases(&config.phases, config.total_weeks);
        if !diagnostics.is_consistent() {
            warn!(
                model = %config.model,
                total_weeks = config.total_weeks,
                auto_deload = config.auto_deload_enabled,
                issues = ?diagnostics.issues,
                "Mesocycle plan violates structural invariants"
            );
        }
        diagnostics
    }

    /// Inspect a bare phase list against a requested length
    #[must_use]
    pub fn inspect_phases(phases: &[PhaseConfig], requested_weeks: u32) -> Self {
        let planned = planned_weeks(phases);
        let deload_index = phases.iter().position(|p| p.phase.is_deload());
        let mut issues = Vec::new();

        if phases.is_empty() {
            issues.push(PlanIssue::EmptyPlan);
        }

        if planned != requested_weeks {
            issues.push(PlanIssue::DurationMismatch {
                requested: requested_weeks,
                planned,
            });
        }

        let last = phases.len().saturating_sub(1);
        for (index, phase) in phases.iter().enumerate() {
            if phase.phase.is_deload() && index != last {
                issues.push(PlanIssue::DeloadNotLast { index });
            }
            if phase.duration_weeks == 0 {
                issues.push(PlanIssue::EmptyPhase { index });
            }
            if !phase.has_valid_multipliers() {
                issues.push(PlanIssue::InvalidMultiplier { index });
            }
            if !phase.rpe_range.is_well_formed() {
                issues.push(PlanIssue::InvalidRpeRange { index });
            }
        }

        Self {
            requested_weeks,
            planned_weeks: planned,
            phase_count: phases.len(),
            deload_index,
            issues,
        }
    }

    /// True when no invariant is violated
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.issues.is_empty()
    }

    /// Weeks planned beyond the requested length (0 when within it)
    #[must_use]
    pub const fn overflow_weeks(&self) -> u32 {
        self.planned_weeks.saturating_sub(self.requested_weeks)
    }
}
