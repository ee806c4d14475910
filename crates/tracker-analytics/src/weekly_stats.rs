// ABOUTME: Weekly statistics calculator combining plan counts with pluggable policies
// ABOUTME: Pure derivation of WeeklyStats from the workout plan and completion history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::debug;
use tracker_core::models::{WeeklyStats, WorkoutPlan};

use crate::algorithms::{BurnModel, ConsistencyStrategy, DurationStrategy};
use crate::config::AnalyticsConfig;

/// Derives [`WeeklyStats`] from a plan
///
/// Counts come straight from the plan. Calories, duration and consistency are delegated
/// to the configured strategies.
#[derive(Debug)]
pub struct WeeklyStatsCalculator {
    burn: Box<dyn BurnModel>,
    duration: Box<dyn DurationStrategy>,
    consistency: Box<dyn ConsistencyStrategy>,
}

impl Default for WeeklyStatsCalculator {
    fn default() -> Self {
        Self::from_config(&AnalyticsConfig::default())
    }
}

impl WeeklyStatsCalculator {
    /// Calculator using the policies selected in `config`
    #[must_use]
    pub fn from_config(config: &AnalyticsConfig) -> Self {
        Self {
            burn: Box::new(config.burn),
            duration: Box::new(config.duration),
            consistency: Box::new(config.consistency),
        }
    }

    /// Replace the burn model
    #[must_use]
    pub fn with_burn_model(mut self, model: impl BurnModel + 'static) -> Self {
        self.burn = Box::new(model);
        self
    }

    /// Replace the duration strategy
    #[must_use]
    pub fn with_duration_strategy(mut self, strategy: impl DurationStrategy + 'static) -> Self {
        self.duration = Box::new(strategy);
        self
    }

    /// Replace the consistency strategy
    #[must_use]
    pub fn with_consistency_strategy(
        mut self,
        strategy: impl ConsistencyStrategy + 'static,
    ) -> Self {
        self.consistency = Box::new(strategy);
        self
    }

    /// Compute weekly stats
    ///
    /// `history` is the completion ratio of each finished week, used by historical
    /// consistency policies. An empty plan yields all-zero stats.
    #[must_use]
    pub fn compute(&self, plan: &WorkoutPlan, history: &[f64]) -> WeeklyStats {
        if plan.is_empty() {
            return WeeklyStats::default();
        }

        let stats = WeeklyStats {
            workouts_completed: plan.completed_days(),
            total_exercises: plan.total_exercises(),
            completed_exercises: plan.completed_exercises(),
            calories_burned: self.burn.calories_burned(plan),
            avg_workout_duration: self.duration.average_minutes(plan),
            consistency_score: self.consistency.score(plan, history),
        };

        debug!(
            burn_model = self.burn.name(),
            duration_policy = self.duration.name(),
            consistency_policy = self.consistency.name(),
            completed_exercises = stats.completed_exercises,
            total_exercises = stats.total_exercises,
            workouts_completed = stats.workouts_completed,
            "Computed weekly stats"
        );
        stats
    }
}
