// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OneCoach Contributors
// ABOUTME: Re-exports helper modules for onecoach-cli
// ABOUTME: Provides access to display formatting utilities

pub mod display;
