// ABOUTME: Tests for environment-driven logging configuration
// ABOUTME: Level, format, and production detail flags read from process environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use practice_personalization::logging::{LogFormat, LoggingConfig, SERVICE_NAME};
use serial_test::serial;
use std::env;

const LOGGING_VARS: &[&str] = &[
    "RUST_LOG",
    "LOG_FORMAT",
    "ENVIRONMENT",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_THREAD",
    "SERVICE_NAME",
];

fn clear_logging_env() {
    for name in LOGGING_VARS {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_logging_env();

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.environment, "development");
    assert_eq!(config.service_name, SERVICE_NAME);
    assert!(!config.include_location);
    assert!(!config.include_thread);
}

#[test]
#[serial]
fn test_from_env_reads_overrides() {
    clear_logging_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("LOG_INCLUDE_THREAD", "1");
    env::set_var("SERVICE_NAME", "studio-engine");

    let config = LoggingConfig::from_env();
    clear_logging_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_thread);
    assert!(!config.include_location);
    assert_eq!(config.service_name, "studio-engine");
}

#[test]
#[serial]
fn test_production_enables_location_and_thread() {
    clear_logging_env();
    env::set_var("ENVIRONMENT", "production");

    let config = LoggingConfig::from_env();
    clear_logging_env();

    assert!(config.include_location);
    assert!(config.include_thread);
}
