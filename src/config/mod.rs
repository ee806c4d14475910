// ABOUTME: Configuration module for the tracker session and command-line client
// ABOUTME: Re-exports the environment-driven TrackerConfig and the analytics configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the Pierre tracker
//!
//! - **Environment**: `TrackerConfig` assembled from environment variables
//! - **Analytics**: burn, duration and consistency policies and goal targets, owned by
//!   `tracker-analytics` and re-exported here

/// Environment configuration
pub mod environment;

pub use environment::TrackerConfig;
pub use tracker_analytics::config::{
    AchievementThresholds, AnalyticsConfig, ConfigError, WeeklyGoalTargets,
};
