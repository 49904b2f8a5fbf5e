// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OneCoach Contributors
// ABOUTME: Re-exports command modules for onecoach-cli
// ABOUTME: Provides access to plan, models, and check commands

pub mod check;
pub mod models;
pub mod plan;
