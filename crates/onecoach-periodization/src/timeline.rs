// ABOUTME: Phase timeline presenter - absolute week ranges and current-phase lookup
// ABOUTME: Pure functions consumed by renderers that draw the mesocycle timeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OneCoach Contributors

use serde::{Deserialize, Serialize};

use onecoach_core::models::{PhaseConfig, TrainingPhase};

use crate::builder::planned_weeks;

/// Inclusive 1-based week range of a phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekRange {
    /// First week of the phase
    pub start: u32,
    /// Last week of the phase
    pub end: u32,
}

impl WeekRange {
    /// Whether `week` falls inside the range
    #[must_use]
    pub const fn contains(self, week: u32) -> bool {
        week >= self.start && week <= self.end
    }

    /// Number of weeks covered
    #[must_use]
    pub const fn weeks(self) -> u32 {
        self.end.saturating_add(1).saturating_sub(self.start)
    }
}

/// A phase positioned on the mesocycle timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseWindow {
    /// Position in the plan
    pub index: usize,
    /// Phase kind
    pub phase: TrainingPhase,
    /// Weeks covered
    pub range: WeekRange,
}

fn range_from(start: u32, duration_weeks: u32) -> WeekRange {
    WeekRange {
        start,
        end: start.saturating_add(duration_weeks).saturating_sub(1),
    }
}

/// Week range of the phase at `index`
///
/// `start` is one past the sum of every earlier phase's duration. Returns
/// `None` when `index` is past the end of the plan.
#[must_use]
pub fn week_range_of(phases: &[PhaseConfig], index: usize) -> Option<WeekRange> {
    let phase = phases.get(index)?;
    let preceding = planned_weeks(&phases[..index]);
    Some(range_from(preceding.saturating_add(1), phase.duration_weeks))
}

/// Every phase with its week range, in plan order
#[must_use]
pub fn timeline(phases: &[PhaseConfig]) -> Vec<PhaseWindow> {
    let mut next_start: u32 = 1;
    phases
        .iter()
        .enumerate()
        .map(|(index, phase)| {
            let range = range_from(next_start, phase.duration_weeks);
            next_start = next_start.saturating_add(phase.duration_weeks);
            PhaseWindow {
                index,
                phase: phase.phase,
                range,
            }
        })
        .collect()
}

/// Index of the phase containing `current_week`
///
/// `None` when no week is given or the week lies outside every phase.
#[must_use]
pub fn current_phase_index(phases: &[PhaseConfig], current_week: Option<u32>) -> Option<usize> {
    let week = current_week?;
    timeline(phases)
        .into_iter()
        .find(|window| window.range.contains(week))
        .map(|window| window.index)
}

/// Phase containing `week`, if any
#[must_use]
pub fn phase_at_week(phases: &[PhaseConfig], week: u32) -> Option<&PhaseConfig> {
    current_phase_index(phases, Some(week)).and_then(|index| phases.get(index))
}
