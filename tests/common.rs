// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging setup and small plan-building helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OneCoach Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::wildcard_in_or_patterns
)]
//! Shared test utilities for `onecoach`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use std::env;
use std::sync::Once;

use onecoach::models::{PeriodizationModel, PhaseConfig, TrainingPhase};
use onecoach::periodization::{MesocycleConfig, MesocycleRequest};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Phase durations in plan order
pub fn durations(phases: &[PhaseConfig]) -> Vec<u32> {
    phases.iter().map(|p| p.duration_weeks).collect()
}

/// Phase kinds in plan order
pub fn kinds(phases: &[PhaseConfig]) -> Vec<TrainingPhase> {
    phases.iter().map(|p| p.phase).collect()
}

/// Plan a mesocycle with default goal, experience and deload frequency
pub fn plan(
    model: PeriodizationModel,
    total_weeks: u32,
    auto_deload_enabled: bool,
) -> MesocycleConfig {
    MesocycleConfig::plan(&MesocycleRequest {
        model,
        total_weeks,
        auto_deload_enabled,
        ..MesocycleRequest::default()
    })
}
