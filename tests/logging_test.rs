// ABOUTME: Integration tests for logging configuration loaded from the environment
// ABOUTME: Checks LOG_FORMAT selection, level overrides, and subscriber installation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OneCoach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use onecoach::logging::{LogFormat, LoggingConfig};
use serial_test::serial;

#[test]
#[serial]
fn test_log_format_from_env() {
    env::set_var("LOG_FORMAT", "json");
    assert_eq!(LoggingConfig::from_env().format, LogFormat::Json);

    // Anything but "json" uses the terminal format
    env::set_var("LOG_FORMAT", "pretty");
    assert_eq!(LoggingConfig::from_env().format, LogFormat::Compact);

    env::remove_var("LOG_FORMAT");
    assert_eq!(LoggingConfig::from_env().format, LogFormat::Compact);
}

#[test]
#[serial]
fn test_level_defaults_and_override() {
    env::remove_var("RUST_LOG");
    let config = LoggingConfig::from_env();
    assert_eq!(config.level, "warn");
    assert_eq!(config.with_level("debug").level, "debug");
}

#[test]
#[serial]
fn test_init_installs_subscriber_once() {
    env::remove_var("RUST_LOG");
    let config = LoggingConfig::default();

    assert!(config.init().is_ok());
    assert!(config.init().is_err());
}
