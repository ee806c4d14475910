// ABOUTME: Weekly workout plan and its days with derived completion state
// ABOUTME: WorkoutDay, WorkoutPlan, and the exercise toggle that keeps day completion consistent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Plan
//!
//! A [`WorkoutPlan`] is the ordered weekly schedule. Each [`WorkoutDay`] owns its exercises
//! and a derived `completed` flag that is true exactly when every exercise is completed.
//! The flag is private: it is recomputed on construction, on deserialization, and after
//! every toggle, so it can never drift from the exercises it summarizes.

use std::collections::HashSet;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::exercise::Exercise;
use crate::errors::{AppError, AppResult};

/// Full English name of a weekday
#[must_use]
pub const fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Serde adapter writing weekdays as full English names and accepting any form chrono parses
mod weekday_serde {
    use chrono::Weekday;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(super::weekday_name(*day))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<Weekday>()
            .map_err(|_| de::Error::custom(format!("unknown weekday '{raw}'")))
    }
}

/// Wire shape of a workout day; the completion flag is never read from input
#[derive(Deserialize)]
struct WorkoutDayRecord {
    #[serde(with = "weekday_serde")]
    day: Weekday,
    focus: String,
    exercises: Vec<Exercise>,
}

impl TryFrom<WorkoutDayRecord> for WorkoutDay {
    type Error = AppError;

    fn try_from(record: WorkoutDayRecord) -> Result<Self, Self::Error> {
        Self::new(record.day, record.focus, record.exercises)
    }
}

/// One scheduled day of training
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WorkoutDayRecord")]
pub struct WorkoutDay {
    #[serde(with = "weekday_serde")]
    day: Weekday,
    focus: String,
    exercises: Vec<Exercise>,
    completed: bool,
}

impl WorkoutDay {
    /// Create a workout day
    ///
    /// # Errors
    ///
    /// Returns `InvalidEntry` if the day has no exercises, an exercise fails validation,
    /// or two exercises share an id.
    pub fn new(day: Weekday, focus: impl Into<String>, exercises: Vec<Exercise>) -> AppResult<Self> {
        if exercises.is_empty() {
            return Err(AppError::invalid_entry(format!(
                "{} must contain at least one exercise",
                weekday_name(day)
            )));
        }

        let mut seen = HashSet::with_capacity(exercises.len());
        for exercise in &exercises {
            exercise.validate()?;
            if !seen.insert(exercise.id.as_str()) {
                return Err(AppError::invalid_entry(format!(
                    "duplicate exercise id '{}' on {}",
                    exercise.id,
                    weekday_name(day)
                ))
                .with_resource_id(exercise.id.clone()));
            }
        }

        let mut workout_day = Self {
            day,
            focus: focus.into(),
            exercises,
            completed: false,
        };
        workout_day.recompute_completion();
        Ok(workout_day)
    }

    /// Scheduled weekday
    #[must_use]
    pub const fn day(&self) -> Weekday {
        self.day
    }

    /// Training focus label
    #[must_use]
    pub fn focus(&self) -> &str {
        &self.focus
    }

    /// Exercises in prescribed order
    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    /// Look up an exercise by id
    #[must_use]
    pub fn exercise(&self, exercise_id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == exercise_id)
    }

    /// Derived completion flag
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Number of exercises on this day
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.exercises.len()
    }

    /// Number of completed exercises on this day
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.exercises.iter().filter(|e| e.completed).count()
    }

    /// Flip an exercise's completion and recompute the day flag
    ///
    /// Returns the exercise's new completion state.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no exercise with that id exists on this day. The day is left
    /// untouched in that case.
    pub fn toggle_exercise(&mut self, exercise_id: &str) -> AppResult<bool> {
        let day = self.day;
        let exercise = self
            .exercises
            .iter_mut()
            .find(|e| e.id == exercise_id)
            .ok_or_else(|| {
                AppError::not_found(format!(
                    "Exercise '{exercise_id}' on {}",
                    weekday_name(day)
                ))
                .with_resource_id(exercise_id.to_owned())
            })?;

        exercise.completed = !exercise.completed;
        let now_completed = exercise.completed;
        self.recompute_completion();
        Ok(now_completed)
    }

    /// Clear every completion flag
    pub fn reset(&mut self) {
        for exercise in &mut self.exercises {
            exercise.completed = false;
        }
        self.recompute_completion();
    }

    fn recompute_completion(&mut self) {
        self.completed = self.exercises.iter().all(|e| e.completed);
    }
}

/// Result of toggling an exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseToggled {
    /// Index of the day in the plan
    pub day_index: usize,
    /// Toggled exercise
    pub exercise_id: String,
    /// Exercise completion after the toggle
    pub exercise_completed: bool,
    /// Day completion after the toggle
    pub day_completed: bool,
    /// Whether the day flag flipped as a consequence
    pub day_completion_changed: bool,
}

/// The weekly schedule, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutPlan {
    days: Vec<WorkoutDay>,
}

impl WorkoutPlan {
    /// Create a plan from already validated days
    #[must_use]
    pub const fn new(days: Vec<WorkoutDay>) -> Self {
        Self { days }
    }

    /// Days in schedule order
    #[must_use]
    pub fn days(&self) -> &[WorkoutDay] {
        &self.days
    }

    /// Number of scheduled days
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the plan has no days
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Bounds-checked day lookup
    ///
    /// # Errors
    ///
    /// Returns `OutOfRangeIndex` when `index` is not a valid day index.
    pub fn day(&self, index: usize) -> AppResult<&WorkoutDay> {
        self.days
            .get(index)
            .ok_or_else(|| AppError::out_of_range("Day", index, self.days.len()))
    }

    /// Index of the first day scheduled on `weekday`
    #[must_use]
    pub fn day_index_for(&self, weekday: Weekday) -> Option<usize> {
        self.days.iter().position(|d| d.day == weekday)
    }

    /// All exercises across the week
    pub fn exercises(&self) -> impl Iterator<Item = &Exercise> + '_ {
        self.days.iter().flat_map(|d| d.exercises.iter())
    }

    /// Total exercises across the week
    #[must_use]
    pub fn total_exercises(&self) -> usize {
        self.days.iter().map(WorkoutDay::total_count).sum()
    }

    /// Completed exercises across the week
    #[must_use]
    pub fn completed_exercises(&self) -> usize {
        self.days.iter().map(WorkoutDay::completed_count).sum()
    }

    /// Number of fully completed days
    #[must_use]
    pub fn completed_days(&self) -> usize {
        self.days.iter().filter(|d| d.completed).count()
    }

    /// Flip an exercise's completion flag and recompute its day
    ///
    /// # Errors
    ///
    /// Returns `OutOfRangeIndex` for a bad day index and `NotFound` for an unknown exercise
    /// id. The plan is unchanged on error.
    pub fn toggle_exercise(&mut self, day_index: usize, exercise_id: &str) -> AppResult<ExerciseToggled> {
        let len = self.days.len();
        let day = self
            .days
            .get_mut(day_index)
            .ok_or_else(|| AppError::out_of_range("Day", day_index, len))?;

        let was_completed = day.completed;
        let exercise_completed = day.toggle_exercise(exercise_id)?;

        Ok(ExerciseToggled {
            day_index,
            exercise_id: exercise_id.to_owned(),
            exercise_completed,
            day_completed: day.completed,
            day_completion_changed: was_completed != day.completed,
        })
    }

    /// Clear every completion flag in the plan
    pub fn reset_completion(&mut self) {
        for day in &mut self.days {
            day.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    fn day(ids: &[&str]) -> WorkoutDay {
        let exercises = ids
            .iter()
            .map(|id| Exercise::new(*id, format!("Exercise {id}"), 3, "10", Difficulty::Beginner, ["Core"]))
            .collect();
        WorkoutDay::new(Weekday::Mon, "Core", exercises).unwrap()
    }

    #[test]
    fn test_day_requires_exercises() {
        assert!(WorkoutDay::new(Weekday::Mon, "Rest", Vec::new()).is_err());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let exercises = vec![
            Exercise::new("1", "A", 3, "10", Difficulty::Beginner, ["Core"]),
            Exercise::new("1", "B", 3, "10", Difficulty::Beginner, ["Core"]),
        ];
        assert!(WorkoutDay::new(Weekday::Tue, "Core", exercises).is_err());
    }

    #[test]
    fn test_completion_recomputed_on_construction() {
        let mut exercise = Exercise::new("1", "A", 3, "10", Difficulty::Beginner, ["Core"]);
        exercise.completed = true;
        let day = WorkoutDay::new(Weekday::Wed, "Core", vec![exercise]).unwrap();
        assert!(day.is_completed());
    }

    #[test]
    fn test_toggle_updates_day_flag() {
        let mut day = day(&["a", "b"]);
        assert!(day.toggle_exercise("a").unwrap());
        assert!(!day.is_completed());
        assert!(day.toggle_exercise("b").unwrap());
        assert!(day.is_completed());
        assert!(!day.toggle_exercise("a").unwrap());
        assert!(!day.is_completed());
    }

    #[test]
    fn test_deserialization_ignores_completed_flag() {
        let json = r#"{
            "day": "Friday",
            "focus": "Cardio",
            "completed": true,
            "exercises": [{
                "id": "1", "name": "Burpees", "sets": 4, "reps": "8-12",
                "difficulty": "Advanced", "muscle_groups": ["Cardio"]
            }]
        }"#;
        let day: WorkoutDay = serde_json::from_str(json).unwrap();
        assert_eq!(day.day(), Weekday::Fri);
        assert!(!day.is_completed());

        let rendered = serde_json::to_value(&day).unwrap();
        assert_eq!(rendered["day"], "Friday");
        assert_eq!(rendered["completed"], false);
    }
}
