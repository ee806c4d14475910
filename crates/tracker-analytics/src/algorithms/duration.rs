// ABOUTME: Average workout duration policies for weekly statistics
// ABOUTME: Configured fixed duration or an estimate from sets and rest times
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracker_core::constants::duration::{
    DEFAULT_REST_SECONDS, DEFAULT_WORKOUT_MINUTES, DEFAULT_WORK_SECONDS_PER_SET,
    SECONDS_PER_MINUTE_F64,
};
use tracker_core::errors::AppError;
use tracker_core::models::{WorkoutDay, WorkoutPlan};

/// Produces the average workout duration shown in weekly stats
pub trait DurationStrategy: fmt::Debug + Send + Sync {
    /// Average minutes per trained day
    fn average_minutes(&self, plan: &WorkoutPlan) -> f64;

    /// Short name for logging
    fn name(&self) -> &'static str;
}

/// Built-in duration policies
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum DurationPolicy {
    /// Configuration-supplied value, independent of the plan
    Fixed {
        /// Minutes reported for every week
        minutes: f64,
    },
    /// Estimate from completed volume: sets x (work time + rest time) per trained day
    RestTime {
        /// Working seconds assumed for each set
        seconds_per_set: u32,
    },
}

impl Default for DurationPolicy {
    fn default() -> Self {
        Self::Fixed {
            minutes: DEFAULT_WORKOUT_MINUTES,
        }
    }
}

impl DurationPolicy {
    fn day_minutes(day: &WorkoutDay, seconds_per_set: u32) -> Option<f64> {
        let mut seconds = 0.0;
        let mut trained = false;
        for exercise in day.exercises().iter().filter(|e| e.completed) {
            trained = true;
            let rest = exercise.rest_seconds.unwrap_or(DEFAULT_REST_SECONDS);
            seconds += f64::from(exercise.sets) * (f64::from(seconds_per_set) + f64::from(rest));
        }
        trained.then_some(seconds / SECONDS_PER_MINUTE_F64)
    }
}

impl DurationStrategy for DurationPolicy {
    fn average_minutes(&self, plan: &WorkoutPlan) -> f64 {
        match self {
            Self::Fixed { minutes } => *minutes,
            Self::RestTime { seconds_per_set } => {
                let trained: Vec<f64> = plan
                    .days()
                    .iter()
                    .filter_map(|day| Self::day_minutes(day, *seconds_per_set))
                    .collect();
                if trained.is_empty() {
                    0.0
                } else {
                    trained.iter().sum::<f64>() / trained.len() as f64
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Fixed { .. } => "fixed",
            Self::RestTime { .. } => "rest_time",
        }
    }
}

impl FromStr for DurationPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fixed" => Ok(Self::default()),
            "rest_time" | "rest-time" => Ok(Self::RestTime {
                seconds_per_set: DEFAULT_WORK_SECONDS_PER_SET,
            }),
            other => Err(AppError::config(format!(
                "Unknown duration policy: '{other}'. Valid options: fixed, rest_time"
            ))),
        }
    }
}
