// ABOUTME: Main library entry point for the OneCoach periodization planner
// ABOUTME: Re-exports the core and engine crates and provides logging and output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OneCoach Contributors

#![deny(unsafe_code)]

//! # OneCoach Planner
//!
//! Mesocycle periodization planning for coaches and athletes: pick a
//! periodization model, a length, and a deload preference, and get back an
//! ordered list of training phases with volume, intensity, and RPE targets.
//!
//! ## Crates
//!
//! - `onecoach-core`: errors, constants, domain models
//! - `onecoach-periodization`: plan builder, timeline, diagnostics, scheduling
//!
//! ## Example
//!
//! ```rust
//! use onecoach::periodization::{MesocycleConfig, MesocycleRequest};
//! use onecoach::models::PeriodizationModel;
//!
//! let request = MesocycleRequest {
//!     model: PeriodizationModel::Block,
//!     total_weeks: 9,
//!     auto_deload_enabled: false,
//!     ..MesocycleRequest::default()
//! };
//! let plan = MesocycleConfig::plan(&request);
//! assert_eq!(plan.planned_weeks(), 9);
//! assert_eq!(plan.current_phase_index(Some(4)), Some(1));
//! ```

/// Error types shared by every crate
pub use onecoach_core::errors;

/// Constants shared by every crate
pub use onecoach_core::constants;

/// Training domain models
pub use onecoach_core::models;

/// Periodization engine
pub use onecoach_periodization as periodization;

/// Output formatting for plan reports
pub mod formatters;

/// Structured logging setup
pub mod logging;
