// ABOUTME: Aggregation engine for the Pierre workout tracker
// ABOUTME: Derives weekly stats, BMI, chart series, muscle volume and achievements on demand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Tracker Analytics
//!
//! Every function here is a pure derivation over the workout plan and progress ledger
//! owned by the session. Nothing is cached at this layer; empty inputs produce empty
//! results (zero counts, empty series, `None` bounds) and never errors.
//!
//! ## Modules
//!
//! - **algorithms**: burn, duration and consistency policies plus BMI
//! - **`weekly_stats`**: the calculator combining plan counts with the policies
//! - **series**: weight trend, display bounds and per-day completion rates
//! - **`muscle_volume`**: sessions per muscle group
//! - **achievements**: badge evaluation
//! - **config**: policy selection and goal targets from the environment

/// Pluggable aggregation policies and BMI
pub mod algorithms;

/// Badge evaluation
pub mod achievements;

/// Analytics configuration
pub mod config;

/// Per-muscle-group training volume
pub mod muscle_volume;

/// Chart series
pub mod series;

/// Weekly stats calculator
pub mod weekly_stats;

pub use achievements::{evaluate_achievements, Achievement, AchievementKind};
pub use config::{AchievementThresholds, AnalyticsConfig, ConfigError, WeeklyGoalTargets};
pub use muscle_volume::{muscle_group_volume, MuscleGroupVolume};
pub use series::{
    completion_series, weight_change, weight_series, DayCompletion, WeightBounds, WeightPoint,
    WeightSeries,
};
pub use weekly_stats::WeeklyStatsCalculator;
