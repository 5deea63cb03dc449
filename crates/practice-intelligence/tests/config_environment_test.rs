// ABOUTME: Tests for personalization configuration loading and validation
// ABOUTME: Environment overrides, parse failures, and conversion into application errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use practice_core::errors::{AppError, ErrorCode};
use practice_intelligence::config::{ConfigError, PersonalizationConfig};
use serial_test::serial;
use std::env;

const OVERRIDE_VARS: &[&str] = &[
    "PRACTICE_FLOW_WEIGHT",
    "PRACTICE_DIFFICULTY_WEIGHT",
    "PRACTICE_VARIETY_WEIGHT",
    "PRACTICE_GOAL_WEIGHT",
    "PRACTICE_EARLY_SESSION_PROGRESS",
    "PRACTICE_LATE_SESSION_PROGRESS",
    "PRACTICE_DEFAULT_LIMIT",
    "PRACTICE_IMBALANCE_THRESHOLD",
    "PRACTICE_REST_SESSION_THRESHOLD",
    "PRACTICE_REST_MINUTES_THRESHOLD",
];

fn clear_overrides() {
    for name in OVERRIDE_VARS {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    clear_overrides();

    let config = PersonalizationConfig::load().unwrap();

    assert_eq!(config.sequence.weights.flow, 0.35);
    assert_eq!(config.sequence.default_limit, 5);
    assert_eq!(config.body_map.imbalance_threshold_percent, 65.0);
    assert_eq!(config.recovery.rest_triggers.session_count, 6);
    assert_eq!(config.recovery.forced_rest_score, 80);
}

#[test]
#[serial]
fn test_env_overrides_are_applied() {
    clear_overrides();
    env::set_var("PRACTICE_FLOW_WEIGHT", "0.40");
    env::set_var("PRACTICE_GOAL_WEIGHT", " 0.10 ");
    env::set_var("PRACTICE_DEFAULT_LIMIT", "8");
    env::set_var("PRACTICE_REST_MINUTES_THRESHOLD", "240");

    let config = PersonalizationConfig::load();
    clear_overrides();

    let config = config.unwrap();
    assert_eq!(config.sequence.weights.flow, 0.40);
    assert_eq!(config.sequence.weights.goal, 0.10);
    assert_eq!(config.sequence.default_limit, 8);
    assert_eq!(config.recovery.rest_triggers.total_minutes, 240.0);
}

#[test]
#[serial]
fn test_unparseable_override_is_rejected() {
    clear_overrides();
    env::set_var("PRACTICE_REST_SESSION_THRESHOLD", "six");

    let result = PersonalizationConfig::load();
    clear_overrides();

    match result {
        Err(ConfigError::Parse(message)) => {
            assert!(message.contains("PRACTICE_REST_SESSION_THRESHOLD"));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_override_that_breaks_weights_fails_validation() {
    clear_overrides();
    env::set_var("PRACTICE_VARIETY_WEIGHT", "0.6");

    let result = PersonalizationConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::InvalidWeights(_))));
}

#[test]
#[serial]
fn test_inverted_progress_thresholds_fail_validation() {
    clear_overrides();
    env::set_var("PRACTICE_EARLY_SESSION_PROGRESS", "0.8");
    env::set_var("PRACTICE_LATE_SESSION_PROGRESS", "0.4");

    let result = PersonalizationConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_config_error_converts_to_app_error() {
    let error: AppError =
        ConfigError::ValueOutOfRange("upper_lower_ratio must be greater than 1.0").into();

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("upper_lower_ratio"));
}

#[test]
fn test_body_map_thresholds_validated() {
    let mut config = PersonalizationConfig::default();
    config.body_map.upper_lower_ratio = 0.5;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    let mut config = PersonalizationConfig::default();
    config.body_map.neglected_intensity = 90;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
}
