// ABOUTME: Integration tests for plan report rendering
// ABOUTME: Checks the JSON shape consumed by other tools and the text table warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OneCoach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveDate;
use common::plan;
use onecoach::formatters::{OutputFormat, PlanReport};
use onecoach::models::PeriodizationModel;
use serde_json::Value;

#[test]
fn test_output_format_parsing() {
    assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert!("yaml".parse::<OutputFormat>().is_err());
}

#[test]
fn test_json_report_shape() {
    let report = PlanReport::new(plan(PeriodizationModel::Linear, 8, true), Some(8), None).unwrap();
    let json: Value = serde_json::from_str(&report.render(OutputFormat::Json).unwrap()).unwrap();

    assert_eq!(json["currentWeek"], 8);
    assert_eq!(json["currentPhaseIndex"], 3);
    assert!(json.get("schedule").is_none());

    let phases = json["mesocycle"]["phases"].as_array().unwrap();
    assert_eq!(phases.len(), 4);
    assert_eq!(phases[0]["phase"], "accumulation");
    assert_eq!(phases[0]["durationWeeks"], 4);
    assert_eq!(phases[0]["rpeRange"], serde_json::json!([6, 8]));
    assert!(phases[0].get("focusDescription").is_none());
    assert_eq!(phases[3]["phase"], "deload");

    assert_eq!(json["mesocycle"]["model"], "linear");
    assert_eq!(json["mesocycle"]["goal"], "general");
    assert_eq!(json["timeline"][1]["range"]["start"], 5);
    assert_eq!(json["timeline"][1]["range"]["end"], 6);
    assert_eq!(json["diagnostics"]["issues"], serde_json::json!([]));
}

#[test]
fn test_json_report_omits_current_phase_outside_plan() {
    let report = PlanReport::new(plan(PeriodizationModel::Block, 9, false), Some(12), None).unwrap();
    let json: Value = serde_json::from_str(&report.render(OutputFormat::Json).unwrap()).unwrap();

    assert_eq!(json["currentWeek"], 12);
    assert!(json.get("currentPhaseIndex").is_none());
}

#[test]
fn test_json_report_includes_schedule() {
    let start = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
    let report =
        PlanReport::new(plan(PeriodizationModel::Undulating, 6, true), None, Some(start)).unwrap();
    let json: Value = serde_json::from_str(&report.render(OutputFormat::Json).unwrap()).unwrap();

    let schedule = json["schedule"].as_array().unwrap();
    assert_eq!(schedule.len(), 2);
    assert_eq!(schedule[0]["startDate"], "2025-03-03");
    assert_eq!(schedule[0]["endDate"], "2025-04-06");
    assert_eq!(schedule[1]["startDate"], "2025-04-07");
    assert_eq!(
        json["mesocycle"]["phases"][0]["focusDescription"],
        "Daily/weekly variation"
    );
}

#[test]
fn test_text_report_marks_current_phase() {
    let report = PlanReport::new(plan(PeriodizationModel::Linear, 8, true), Some(5), None).unwrap();
    let text = report.render(OutputFormat::Text).unwrap();

    assert!(text.starts_with("Linear mesocycle: 8 weeks"));
    let marked: Vec<&str> = text.lines().filter(|l| l.starts_with('>')).collect();
    assert_eq!(marked.len(), 1);
    assert!(marked[0].contains("Intensification"));
    assert!(marked[0].contains("5-6"));
    assert!(text.contains("Deload frequency (advisory): every 4 weeks"));
    assert!(!text.contains("warning:"));
}

#[test]
fn test_text_report_warns_about_overflow() {
    let report = PlanReport::new(plan(PeriodizationModel::Linear, 2, true), Some(9), None).unwrap();
    let text = report.render(OutputFormat::Text).unwrap();

    assert!(text.contains("warning: phases span 4 weeks but 2 were requested"));
    assert!(text.contains("Week 9 is outside this mesocycle"));
}
