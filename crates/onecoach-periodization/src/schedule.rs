// ABOUTME: Calendar scheduling for mesocycle phases anchored on a start date
// ABOUTME: Maps dates to training weeks and phases to first/last calendar days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OneCoach Contributors

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use onecoach_core::constants::mesocycle::DAYS_PER_WEEK;
use onecoach_core::errors::{AppError, AppResult};
use onecoach_core::models::{PhaseConfig, TrainingPhase};

use crate::timeline::{timeline, WeekRange};

/// A phase placed on the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledPhase {
    /// Phase kind
    pub phase: TrainingPhase,
    /// Training weeks covered
    pub range: WeekRange,
    /// First calendar day
    pub start_date: NaiveDate,
    /// Last calendar day (inclusive)
    pub end_date: NaiveDate,
}

/// 1-based training week containing `date` for a mesocycle starting on `start`
///
/// `None` for dates before the start.
#[must_use]
pub fn week_of_date(start: NaiveDate, date: NaiveDate) -> Option<u32> {
    let elapsed = date.signed_duration_since(start).num_days();
    if elapsed < 0 {
        return None;
    }
    u32::try_from(elapsed / DAYS_PER_WEEK + 1).ok()
}

fn offset_days(start: NaiveDate, days: u64) -> AppResult<NaiveDate> {
    start.checked_add_days(Days::new(days)).ok_or_else(|| {
        AppError::invalid_input(format!(
            "Start date {start} is too late to schedule {days} days ahead"
        ))
    })
}

/// Calendar dates of every phase for a mesocycle starting on `start`
///
/// # Errors
///
/// Returns `AppError` with `InvalidInput` if a phase would end past the
/// last representable date.
pub fn schedule(phases: &[PhaseConfig], start: NaiveDate) -> AppResult<Vec<ScheduledPhase>> {
    let week_days = DAYS_PER_WEEK.unsigned_abs();
    timeline(phases)
        .into_iter()
        .map(|window| {
            let first_day = u64::from(window.range.start - 1) * week_days;
            let last_day = (u64::from(window.range.end) * week_days).saturating_sub(1);
            Ok(ScheduledPhase {
                phase: window.phase,
                range: window.range,
                start_date: offset_days(start, first_day)?,
                end_date: offset_days(start, last_day.max(first_day))?,
            })
        })
        .collect()
}
