// ABOUTME: Weekly statistics aggregate derived from the workout plan
// ABOUTME: Plain data record produced by the analytics calculator, never stored as truth
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Derived weekly aggregates
///
/// Always computed from the current plan. Holders must recompute after any plan mutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklyStats {
    /// Days whose exercises are all completed
    pub workouts_completed: usize,
    /// Exercises across the whole week
    pub total_exercises: usize,
    /// Completed exercises across the whole week
    pub completed_exercises: usize,
    /// Heuristic calorie estimate in kcal
    pub calories_burned: f64,
    /// Average workout duration in minutes
    pub avg_workout_duration: f64,
    /// Consistency score, 0 to 100
    pub consistency_score: u8,
}

impl WeeklyStats {
    /// Share of completed exercises as a percentage, 0 for an empty week
    #[must_use]
    pub fn exercise_completion_percent(&self) -> f64 {
        if self.total_exercises == 0 {
            0.0
        } else {
            self.completed_exercises as f64 / self.total_exercises as f64 * 100.0
        }
    }
}
