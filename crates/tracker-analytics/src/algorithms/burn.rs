// ABOUTME: Calorie burn heuristics for completed exercises
// ABOUTME: Flat per-exercise and per-set estimates behind the BurnModel trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracker_core::constants::burn_rate::{DEFAULT_KCAL_PER_EXERCISE, DEFAULT_KCAL_PER_SET};
use tracker_core::errors::AppError;
use tracker_core::models::WorkoutPlan;

/// Estimates calories burned by the completed part of a plan
///
/// Implementations are heuristics for motivation display. None of them is a
/// physiological model: body mass, intensity and heart rate are ignored.
pub trait BurnModel: fmt::Debug + Send + Sync {
    /// Estimated kcal for every completed exercise in `plan`
    fn calories_burned(&self, plan: &WorkoutPlan) -> f64;

    /// Short name for logging
    fn name(&self) -> &'static str;
}

/// Built-in burn heuristics
///
/// - `Flat`: a fixed kcal value per completed exercise, regardless of volume
/// - `PerSet`: a fixed kcal value per prescribed set of each completed exercise
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum BurnAlgorithm {
    /// kcal per completed exercise
    Flat {
        /// Estimate applied to each completed exercise
        kcal_per_exercise: f64,
    },
    /// kcal per set of each completed exercise
    PerSet {
        /// Estimate applied to each prescribed set
        kcal_per_set: f64,
    },
}

impl Default for BurnAlgorithm {
    fn default() -> Self {
        Self::Flat {
            kcal_per_exercise: DEFAULT_KCAL_PER_EXERCISE,
        }
    }
}

impl BurnAlgorithm {
    /// The configured rate, whichever unit it is expressed in
    #[must_use]
    pub const fn rate(&self) -> f64 {
        match self {
            Self::Flat { kcal_per_exercise } => *kcal_per_exercise,
            Self::PerSet { kcal_per_set } => *kcal_per_set,
        }
    }
}

impl BurnModel for BurnAlgorithm {
    fn calories_burned(&self, plan: &WorkoutPlan) -> f64 {
        let completed = plan.exercises().filter(|e| e.completed);
        match self {
            Self::Flat { kcal_per_exercise } => completed.count() as f64 * kcal_per_exercise,
            Self::PerSet { kcal_per_set } => {
                completed.map(|e| f64::from(e.sets)).sum::<f64>() * kcal_per_set
            }
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Flat { .. } => "flat",
            Self::PerSet { .. } => "per_set",
        }
    }
}

impl FromStr for BurnAlgorithm {
    type Err = AppError;

    /// Parse the model name; the rate starts at its default
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "flat" => Ok(Self::default()),
            "per_set" | "per-set" => Ok(Self::PerSet {
                kcal_per_set: DEFAULT_KCAL_PER_SET,
            }),
            other => Err(AppError::config(format!(
                "Unknown burn model: '{other}'. Valid options: flat, per_set"
            ))),
        }
    }
}
