// ABOUTME: Integration tests for environment-driven tracker configuration
// ABOUTME: Policy selection, strict parsing, validation failures and log format parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use pierre_tracker::config::{AnalyticsConfig, ConfigError, TrackerConfig};
use pierre_tracker::logging::{LogFormat, LoggingConfig};
use pierre_tracker::seed;
use serial_test::serial;
use tracker_analytics::algorithms::{BurnAlgorithm, ConsistencyPolicy, DurationPolicy};

const TRACKER_VARS: [&str; 13] = [
    "TRACKER_BURN_MODEL",
    "TRACKER_KCAL_PER_EXERCISE",
    "TRACKER_KCAL_PER_SET",
    "TRACKER_DURATION_POLICY",
    "TRACKER_FIXED_DURATION_MINUTES",
    "TRACKER_SECONDS_PER_SET",
    "TRACKER_CONSISTENCY_POLICY",
    "TRACKER_FIXED_CONSISTENCY",
    "TRACKER_GOAL_CALORIES",
    "TRACKER_SELECTED_DAY",
    "LOG_FORMAT",
    "LOG_INCLUDE_LOCATION",
    "ENVIRONMENT",
];

fn clear_tracker_env() {
    for key in TRACKER_VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_tracker_env();
    let config = TrackerConfig::from_env().unwrap();

    assert_eq!(config.analytics, AnalyticsConfig::default());
    assert_eq!(config.default_selected_day, None);
    assert!(config.summary().contains("Burn model"));
}

#[test]
#[serial]
fn test_policies_selected_from_environment() {
    clear_tracker_env();
    env::set_var("TRACKER_BURN_MODEL", "per_set");
    env::set_var("TRACKER_KCAL_PER_SET", "12");
    env::set_var("TRACKER_DURATION_POLICY", "rest-time");
    env::set_var("TRACKER_CONSISTENCY_POLICY", "Day-Completion");
    env::set_var("TRACKER_GOAL_CALORIES", "2500");

    let config = TrackerConfig::from_env().unwrap();
    clear_tracker_env();

    assert_eq!(
        config.analytics.burn,
        BurnAlgorithm::PerSet { kcal_per_set: 12.0 }
    );
    assert_eq!(
        config.analytics.duration,
        DurationPolicy::RestTime {
            seconds_per_set: 45
        }
    );
    assert_eq!(
        config.analytics.consistency,
        ConsistencyPolicy::DayCompletion
    );
    assert!((config.analytics.goals.calories_burned - 2500.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_unparsable_numeric_override_falls_back() {
    clear_tracker_env();
    env::set_var("TRACKER_FIXED_DURATION_MINUTES", "an hour");

    let config = TrackerConfig::from_env().unwrap();
    clear_tracker_env();

    assert_eq!(config.analytics.duration, DurationPolicy::Fixed { minutes: 65.0 });
}

#[test]
#[serial]
fn test_unknown_policy_name_is_rejected() {
    clear_tracker_env();
    env::set_var("TRACKER_CONSISTENCY_POLICY", "vibes");

    let err = AnalyticsConfig::from_env().unwrap_err();
    clear_tracker_env();

    match err {
        ConfigError::Parse(message) => assert!(message.contains("vibes")),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
#[serial]
fn test_invalid_values_fail_loading() {
    clear_tracker_env();
    env::set_var("TRACKER_DURATION_POLICY", "rest_time");
    env::set_var("TRACKER_SECONDS_PER_SET", "0");
    assert!(TrackerConfig::from_env().is_err());

    clear_tracker_env();
    env::set_var("TRACKER_CONSISTENCY_POLICY", "fixed");
    env::set_var("TRACKER_FIXED_CONSISTENCY", "150");
    assert!(TrackerConfig::from_env().is_err());

    clear_tracker_env();
    env::set_var("TRACKER_SELECTED_DAY", "wednesday");
    let err = TrackerConfig::from_env().unwrap_err();
    clear_tracker_env();
    assert!(err.to_string().contains("TRACKER_SELECTED_DAY"));
}

#[test]
#[serial]
fn test_selected_day_from_environment_reaches_session() {
    clear_tracker_env();
    env::set_var("TRACKER_SELECTED_DAY", "2");

    let config = TrackerConfig::from_env().unwrap();
    clear_tracker_env();
    let session = seed::demo_session(&config).unwrap();

    assert_eq!(session.selected_day(), 2);
    assert_eq!(session.selected_workout_day().unwrap().focus(), "Legs");
}

#[test]
fn test_out_of_range_selected_day_rejected_by_builder() {
    let config = TrackerConfig {
        default_selected_day: Some(9),
        ..TrackerConfig::default()
    };
    assert!(seed::demo_session(&config).is_err());
}

#[test]
#[serial]
fn test_source_location_enabled_for_default_format() {
    clear_tracker_env();
    let plain = LoggingConfig::from_env();
    assert_eq!(plain.format, LogFormat::Compact);
    assert!(!plain.include_location);

    env::set_var("LOG_INCLUDE_LOCATION", "1");
    let requested = LoggingConfig::from_env();
    clear_tracker_env();
    assert_eq!(requested.format, LogFormat::Compact);
    assert!(requested.include_location);

    env::set_var("ENVIRONMENT", "production");
    let production = LoggingConfig::from_env();
    clear_tracker_env();
    assert!(production.include_location);
    assert_eq!(production.environment, "production");
}

#[test]
fn test_log_format_parsing() {
    assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
    assert_eq!(" Pretty ".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
    assert_eq!("COMPACT".parse::<LogFormat>().unwrap(), LogFormat::Compact);
    assert!("xml".parse::<LogFormat>().is_err());
    assert_eq!(LogFormat::Json.to_string(), "json");
}

#[test]
fn test_partial_config_file_uses_defaults() {
    let config: TrackerConfig =
        serde_json::from_str(r#"{"logging": {"level": "debug"}}"#).unwrap();

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LoggingConfig::default().format);
    assert_eq!(config.analytics, AnalyticsConfig::default());
    assert!(config.validate().is_ok());
}
