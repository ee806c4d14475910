// ABOUTME: Read-only query surface over a fitness session for the presentation layer
// ABOUTME: Current day, latest entry, goal ratios, BMI, dashboard, weekly goals and macros
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Projections over [`FitnessSession`]. Nothing here mutates canonical state, and every
//! view tolerates an empty plan or ledger.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracker_analytics::algorithms::{compute_bmi, BmiReading};
use tracker_analytics::weight_change;
use tracker_core::errors::AppResult;
use tracker_core::models::{NutritionIntake, ProgressEntry, WorkoutDay};

use crate::session::FitnessSession;

/// How a goal ratio is bounded
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RatioClamp {
    /// Ratios above 1.0 are reported as-is
    Unclamped,
    /// Ratios are capped at the given value
    AtMost(f64),
}

/// `current / target`, or `None` when the ratio is undefined
///
/// Undefined means a target that is not positive and finite, or a non-finite current
/// value. Negative ratios are floored at zero.
#[must_use]
pub fn goal_ratio(current: f64, target: f64, clamp: RatioClamp) -> Option<f64> {
    if !(target.is_finite() && target > 0.0 && current.is_finite()) {
        return None;
    }
    let ratio = (current / target).max(0.0);
    Some(match clamp {
        RatioClamp::Unclamped => ratio,
        RatioClamp::AtMost(limit) => ratio.min(limit),
    })
}

fn percent_of(current: f64, target: f64, clamp: RatioClamp) -> f64 {
    goal_ratio(current, target, clamp).map_or(0.0, |ratio| ratio * 100.0)
}

/// Headline numbers for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Fully completed days
    pub workouts_completed: usize,
    /// Days in the plan
    pub workouts_planned: usize,
    /// Completed days as a rounded percentage
    pub workout_completion_percent: u32,
    /// Completed exercises
    pub exercises_completed: usize,
    /// Exercises in the plan
    pub exercises_total: usize,
    /// Completed exercises as a rounded percentage
    pub exercise_completion_percent: u32,
    /// Latest known body weight
    pub current_weight_kg: Option<f64>,
    /// Latest weighed minus first weighed entry
    pub weight_change_kg: f64,
    /// Date of the most recent ledger entry
    pub latest_entry_date: Option<NaiveDate>,
}

/// Progress against one weekly goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Goal label
    pub name: String,
    /// Display unit
    pub unit: String,
    /// Value achieved this week
    pub current: f64,
    /// Configured target
    pub target: f64,
    /// Percent of target, capped at 100
    pub percent: f64,
    /// Whether the target was reached
    pub achieved: bool,
}

impl GoalProgress {
    fn new(name: &str, unit: &str, current: f64, target: f64) -> Self {
        Self {
            name: name.to_owned(),
            unit: unit.to_owned(),
            current,
            target,
            percent: percent_of(current, target, RatioClamp::AtMost(1.0)),
            achieved: target > 0.0 && current >= target,
        }
    }
}

/// Intake against one nutrition goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroProgress {
    /// Macro name (calories, protein, carbs, fat)
    pub name: String,
    /// Display unit
    pub unit: String,
    /// Amount consumed
    pub current: f64,
    /// Daily goal
    pub goal: f64,
    /// Rounded percent of goal, uncapped
    pub percent: u32,
    /// Whether intake exceeds the goal
    pub over_goal: bool,
}

impl FitnessSession {
    /// The plan day at `index`
    ///
    /// # Errors
    ///
    /// Returns `OutOfRangeIndex` if the index is outside the plan.
    pub fn current_day(&self, index: usize) -> AppResult<&WorkoutDay> {
        self.plan().day(index)
    }

    /// The day the session currently shows
    ///
    /// # Errors
    ///
    /// Returns `OutOfRangeIndex` when the plan is empty.
    pub fn selected_workout_day(&self) -> AppResult<&WorkoutDay> {
        self.current_day(self.selected_day())
    }

    /// Most recent ledger entry, `None` for an empty ledger
    #[must_use]
    pub fn latest_entry(&self) -> Option<&ProgressEntry> {
        self.ledger().latest()
    }

    /// Latest weighed entry, falling back to the profile weight
    #[must_use]
    pub fn current_weight(&self) -> Option<f64> {
        self.ledger()
            .latest_weighed()
            .and_then(|entry| entry.weight_kg)
            .or(self.profile().weight_kg)
    }

    /// BMI from the current weight and profile height
    ///
    /// `None` when either value is unknown or not positive.
    #[must_use]
    pub fn bmi(&self) -> Option<BmiReading> {
        let weight_kg = self.current_weight()?;
        let height_cm = self.profile().height_cm?;
        compute_bmi(weight_kg, height_cm).ok()
    }

    /// Dashboard headline numbers
    #[must_use]
    pub fn dashboard(&self) -> Dashboard {
        let stats = self.weekly_stats();
        let planned = self.plan().len();

        Dashboard {
            workouts_completed: stats.workouts_completed,
            workouts_planned: planned,
            workout_completion_percent: rounded_percent(
                stats.workouts_completed as f64,
                planned as f64,
            ),
            exercises_completed: stats.completed_exercises,
            exercises_total: stats.total_exercises,
            exercise_completion_percent: rounded_percent(
                stats.completed_exercises as f64,
                stats.total_exercises as f64,
            ),
            current_weight_kg: self.current_weight(),
            weight_change_kg: weight_change(self.ledger()),
            latest_entry_date: self.latest_entry().map(|entry| entry.date),
        }
    }

    /// Progress against the configured weekly goals
    #[must_use]
    pub fn weekly_goals(&self) -> Vec<GoalProgress> {
        let stats = self.weekly_stats();
        let targets = &self.analytics_config().goals;

        vec![
            GoalProgress::new(
                "Workout Completion",
                "%",
                stats.exercise_completion_percent().round(),
                targets.completion_percent,
            ),
            GoalProgress::new(
                "Calories Burned",
                "kcal",
                stats.calories_burned,
                targets.calories_burned,
            ),
            GoalProgress::new(
                "Consistency Score",
                "%",
                f64::from(stats.consistency_score),
                targets.consistency_score,
            ),
            GoalProgress::new(
                "Avg Workout Time",
                "min",
                stats.avg_workout_duration,
                targets.workout_minutes,
            ),
        ]
    }

    /// Intake against each nutrition goal
    #[must_use]
    pub fn nutrition_progress(&self, intake: &NutritionIntake) -> Vec<MacroProgress> {
        self.nutrition_goals()
            .fields()
            .into_iter()
            .zip(intake.fields())
            .map(|((name, goal), (_, current))| MacroProgress {
                name: name.to_owned(),
                unit: if name == "calories" { "kcal" } else { "g" }.to_owned(),
                current,
                goal,
                percent: rounded_percent(current, goal),
                over_goal: current > goal,
            })
            .collect()
    }
}

fn rounded_percent(current: f64, total: f64) -> u32 {
    percent_of(current, total, RatioClamp::Unclamped).round() as u32
}
