// ABOUTME: Consistency score policies for weekly statistics
// ABOUTME: Fixed, exercise-completion, day-completion and historical adherence scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracker_core::constants::consistency::{DEFAULT_SCORE, MAX_SCORE};
use tracker_core::errors::AppError;
use tracker_core::models::WorkoutPlan;

/// Produces the weekly consistency score
pub trait ConsistencyStrategy: fmt::Debug + Send + Sync {
    /// Raw score in percent
    ///
    /// `history` holds the exercise completion ratio (0.0 to 1.0) of each finished week,
    /// oldest first. The caller clamps the result.
    fn raw_score(&self, plan: &WorkoutPlan, history: &[f64]) -> f64;

    /// Short name for logging
    fn name(&self) -> &'static str;

    /// Score clamped to `0..=100`; an empty plan always scores 0
    fn score(&self, plan: &WorkoutPlan, history: &[f64]) -> u8 {
        if plan.is_empty() {
            return 0;
        }
        clamp_score(self.raw_score(plan, history))
    }
}

/// Clamp a percentage into the score range, treating NaN as 0
#[must_use]
pub fn clamp_score(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.round().clamp(0.0, f64::from(MAX_SCORE)) as u8
}

/// Share of completed exercises in the plan, 0.0 to 1.0
#[must_use]
pub fn exercise_completion_ratio(plan: &WorkoutPlan) -> f64 {
    let total = plan.total_exercises();
    if total == 0 {
        0.0
    } else {
        plan.completed_exercises() as f64 / total as f64
    }
}

/// Built-in consistency policies
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum ConsistencyPolicy {
    /// Configuration-supplied score
    Fixed {
        /// Score reported for every non-empty plan
        score: u8,
    },
    /// Completed exercises over planned exercises this week
    ExerciseCompletion,
    /// Completed days over planned days this week
    DayCompletion,
    /// Mean of every finished week's completion ratio and this week's
    Historical,
}

impl Default for ConsistencyPolicy {
    fn default() -> Self {
        Self::Fixed {
            score: DEFAULT_SCORE,
        }
    }
}

impl ConsistencyStrategy for ConsistencyPolicy {
    fn raw_score(&self, plan: &WorkoutPlan, history: &[f64]) -> f64 {
        match self {
            Self::Fixed { score } => f64::from(*score),
            Self::ExerciseCompletion => exercise_completion_ratio(plan) * 100.0,
            Self::DayCompletion => plan.completed_days() as f64 / plan.len() as f64 * 100.0,
            Self::Historical => {
                let current = exercise_completion_ratio(plan);
                let sum: f64 = history.iter().map(|r| r.clamp(0.0, 1.0)).sum::<f64>() + current;
                sum / (history.len() + 1) as f64 * 100.0
            }
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Fixed { .. } => "fixed",
            Self::ExerciseCompletion => "exercise_completion",
            Self::DayCompletion => "day_completion",
            Self::Historical => "historical",
        }
    }
}

impl FromStr for ConsistencyPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "fixed" => Ok(Self::default()),
            "exercise_completion" => Ok(Self::ExerciseCompletion),
            "day_completion" => Ok(Self::DayCompletion),
            "historical" => Ok(Self::Historical),
            other => Err(AppError::config(format!(
                "Unknown consistency policy: '{other}'. Valid options: fixed, \
                 exercise_completion, day_completion, historical"
            ))),
        }
    }
}
