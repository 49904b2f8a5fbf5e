// ABOUTME: Integration tests for calendar scheduling of mesocycle phases
// ABOUTME: Tests phase start/end dates and date-to-week mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OneCoach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Days, NaiveDate};
use onecoach::models::{PeriodizationModel, TrainingPhase};
use onecoach::periodization::{
    build_phases, current_phase_index, schedule, week_of_date, WeekRange,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_linear_schedule_dates() {
    let phases = build_phases(8, PeriodizationModel::Linear, true);
    let scheduled = schedule(&phases, date(2025, 3, 3)).unwrap();

    let dates: Vec<(TrainingPhase, NaiveDate, NaiveDate)> = scheduled
        .iter()
        .map(|s| (s.phase, s.start_date, s.end_date))
        .collect();
    assert_eq!(
        dates,
        vec![
            (
                TrainingPhase::Accumulation,
                date(2025, 3, 3),
                date(2025, 3, 30)
            ),
            (
                TrainingPhase::Intensification,
                date(2025, 3, 31),
                date(2025, 4, 13)
            ),
            (
                TrainingPhase::Realization,
                date(2025, 4, 14),
                date(2025, 4, 20)
            ),
            (TrainingPhase::Deload, date(2025, 4, 21), date(2025, 4, 27)),
        ]
    );
    assert_eq!(scheduled[1].range, WeekRange { start: 5, end: 6 });
}

#[test]
fn test_schedule_has_no_gaps() {
    let start = date(2024, 12, 30);
    for model in PeriodizationModel::ALL {
        let phases = build_phases(13, model, true);
        let scheduled = schedule(&phases, start).unwrap();

        assert_eq!(scheduled[0].start_date, start);
        for pair in scheduled.windows(2) {
            assert_eq!(
                pair[1].start_date,
                pair[0].end_date.checked_add_days(Days::new(1)).unwrap()
            );
        }
        let last = scheduled.last().unwrap();
        assert_eq!(last.end_date, start.checked_add_days(Days::new(13 * 7 - 1)).unwrap());
    }
}

#[test]
fn test_week_of_date() {
    let start = date(2025, 3, 3);

    assert_eq!(week_of_date(start, start), Some(1));
    assert_eq!(week_of_date(start, date(2025, 3, 9)), Some(1));
    assert_eq!(week_of_date(start, date(2025, 3, 10)), Some(2));
    assert_eq!(week_of_date(start, date(2025, 4, 27)), Some(8));
    assert_eq!(week_of_date(start, date(2025, 3, 2)), None);
}

#[test]
fn test_week_of_date_feeds_current_phase() {
    let start = date(2025, 3, 3);
    let phases = build_phases(8, PeriodizationModel::Linear, true);

    let today = week_of_date(start, date(2025, 4, 22));
    assert_eq!(current_phase_index(&phases, today), Some(3));

    let after = week_of_date(start, date(2025, 5, 1));
    assert_eq!(current_phase_index(&phases, after), None);
}

#[test]
fn test_schedule_past_calendar_end_fails() {
    let phases = build_phases(16, PeriodizationModel::Block, true);

    assert!(schedule(&phases, NaiveDate::MAX).is_err());
}
