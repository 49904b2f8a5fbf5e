// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OneCoach Contributors
// ABOUTME: Output formatting helpers for onecoach-cli
// ABOUTME: Provides consistent text display for model listings and diagnostics grids

use crate::commands::{check::CheckRow, models::ModelSummary};

/// Display the periodization model listing
pub fn display_model_summaries(summaries: &[ModelSummary]) {
    println!("Periodization models");
    println!("{}", "=".repeat(72));
    for summary in summaries {
        println!("{} ({})", summary.label, summary.model);
        println!("   {}", summary.description);
        println!(
            "   Phases: {} without deload, {} with deload",
            summary.phases_without_deload, summary.phases_with_deload
        );
    }
}

/// Display the diagnostics grid
pub fn display_check_rows(rows: &[CheckRow], inconsistent: usize) {
    println!(
        "{:<14} {:>5} {:>7} {:>8}  STATUS",
        "MODEL", "WEEKS", "DELOAD", "PLANNED"
    );
    println!("{}", "-".repeat(60));
    for row in rows {
        let status = if row.diagnostics.is_consistent() {
            "ok".to_owned()
        } else {
            row.diagnostics
                .issues
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ")
        };
        println!(
            "{:<14} {:>5} {:>7} {:>8}  {}",
            row.model,
            row.total_weeks,
            if row.auto_deload_enabled { "yes" } else { "no" },
            row.diagnostics.planned_weeks,
            status
        );
    }
    println!("{}", "-".repeat(60));
    println!("{inconsistent} inconsistent plan(s)");
}
