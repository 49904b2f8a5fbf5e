// ABOUTME: Core types and constants for the OneCoach periodization planner
// ABOUTME: Foundation crate with error handling, constants, and training domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OneCoach Contributors

#![deny(unsafe_code)]

//! # OneCoach Core
//!
//! Foundation crate providing shared types and constants for the OneCoach
//! periodization planner. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Mesocycle bounds and phase prescriptions
//! - **models**: Training phases, periodization models, goals

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core training domain models
pub mod models;
