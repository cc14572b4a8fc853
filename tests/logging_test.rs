// ABOUTME: Tests for logging configuration built from environment variables
// ABOUTME: Runs serially since every case mutates process environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use bodytrack::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

const LOGGING_VARS: [&str; 6] = [
    "RUST_LOG",
    "LOG_FORMAT",
    "ENVIRONMENT",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_THREAD",
    "SERVICE_NAME",
];

fn clear_logging_env() {
    for var in LOGGING_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_logging_env();
    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.environment, "development");
    assert!(!config.include_location);
    assert_eq!(config.service_name, LoggingConfig::default().service_name);
}

#[test]
#[serial]
fn test_production_enables_location_and_thread() {
    clear_logging_env();
    env::set_var("ENVIRONMENT", "production");
    env::set_var("LOG_FORMAT", "json");

    let config = LoggingConfig::from_env();
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert!(config.include_thread);

    clear_logging_env();
}

#[test]
#[serial]
fn test_cli_config_is_compact_and_quiet() {
    clear_logging_env();

    let quiet = LoggingConfig::for_cli(false);
    assert_eq!(quiet.format, LogFormat::Compact);
    assert_eq!(quiet.level, "warn");

    let verbose = LoggingConfig::for_cli(true);
    assert_eq!(verbose.level, "debug");
}

#[test]
#[serial]
fn test_cli_respects_rust_log() {
    clear_logging_env();
    env::set_var("RUST_LOG", "trace");

    assert_eq!(LoggingConfig::for_cli(false).level, "trace");

    clear_logging_env();
}

#[test]
#[serial]
fn test_rust_log_directive_list_is_kept_verbatim() {
    clear_logging_env();
    env::set_var("RUST_LOG", "warn,bodytrack=trace");

    let filter = LoggingConfig::from_env().env_filter().to_string();
    assert!(filter.contains("bodytrack=trace"), "{filter}");
    assert!(filter.contains("warn"), "{filter}");
    assert!(!filter.contains("info"), "{filter}");

    clear_logging_env();
}

#[test]
#[serial]
fn test_single_level_applies_to_bodytrack_crates() {
    clear_logging_env();

    let filter = LoggingConfig::for_cli(true).env_filter().to_string();
    assert!(filter.contains("bodytrack=debug"), "{filter}");
    assert!(filter.contains("bodytrack_intelligence=debug"), "{filter}");
}
