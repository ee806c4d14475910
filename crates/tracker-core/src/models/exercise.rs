// ABOUTME: Exercise model with prescription, difficulty, and muscle-group targeting
// ABOUTME: Exercise and Difficulty definitions owned by a WorkoutDay
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Difficulty rating of an exercise
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Difficulty {
    /// Suitable for newcomers
    Beginner,
    /// Requires some training background
    Intermediate,
    /// Demanding movement for trained athletes
    Advanced,
}

impl Difficulty {
    /// Display name of the difficulty
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(AppError::invalid_entry(format!(
                "unknown difficulty '{other}'"
            ))),
        }
    }
}

/// A single prescribed movement inside a workout day
///
/// Reps are free-form (`"8-12"`, `"30s"`, `"10 each side"`) because prescriptions mix
/// counts and durations. The completion flag is only changed through the owning plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Identifier, unique within its day
    pub id: String,
    /// Display name
    pub name: String,
    /// Number of prescribed sets
    pub sets: u32,
    /// Prescribed reps or hold time
    pub reps: String,
    /// Target load in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Free-form duration prescription
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Whether the exercise was done this week
    #[serde(default)]
    pub completed: bool,
    /// Difficulty rating
    pub difficulty: Difficulty,
    /// Muscle groups worked (never empty)
    pub muscle_groups: BTreeSet<String>,
    /// Coaching cues
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// Rest between sets in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_seconds: Option<u32>,
}

impl Exercise {
    /// Create an incomplete exercise with the required prescription fields
    pub fn new<I, S>(
        id: impl Into<String>,
        name: impl Into<String>,
        sets: u32,
        reps: impl Into<String>,
        difficulty: Difficulty,
        muscle_groups: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            sets,
            reps: reps.into(),
            weight_kg: None,
            duration: None,
            completed: false,
            difficulty,
            muscle_groups: muscle_groups.into_iter().map(Into::into).collect(),
            instructions: None,
            rest_seconds: None,
        }
    }

    /// Set the target load
    #[must_use]
    pub fn with_weight(mut self, weight_kg: f64) -> Self {
        self.weight_kg = Some(weight_kg);
        self
    }

    /// Set the rest time between sets
    #[must_use]
    pub fn with_rest(mut self, rest_seconds: u32) -> Self {
        self.rest_seconds = Some(rest_seconds);
        self
    }

    /// Set coaching instructions
    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Set a free-form duration prescription
    #[must_use]
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    /// Check the structural invariants of the exercise
    ///
    /// # Errors
    ///
    /// Returns `InvalidEntry` when the id or name is blank, no sets are prescribed,
    /// the muscle-group set is empty, or the target weight is not a positive number.
    pub fn validate(&self) -> AppResult<()> {
        if self.id.trim().is_empty() {
            return Err(AppError::invalid_entry("exercise id must not be blank"));
        }
        if self.name.trim().is_empty() {
            return Err(
                AppError::invalid_entry("exercise name must not be blank")
                    .with_resource_id(self.id.clone()),
            );
        }
        if self.sets == 0 {
            return Err(AppError::invalid_entry(format!(
                "exercise '{}' must prescribe at least one set",
                self.id
            ))
            .with_resource_id(self.id.clone()));
        }
        if self.muscle_groups.is_empty() || self.muscle_groups.iter().any(|g| g.trim().is_empty())
        {
            return Err(AppError::invalid_entry(format!(
                "exercise '{}' must target at least one named muscle group",
                self.id
            ))
            .with_resource_id(self.id.clone()));
        }
        if let Some(weight) = self.weight_kg {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(AppError::invalid_entry(format!(
                    "exercise '{}' has an invalid target weight",
                    self.id
                ))
                .with_resource_id(self.id.clone()));
            }
        }
        Ok(())
    }

    /// Whether the exercise works the given muscle group (case-insensitive)
    #[must_use]
    pub fn targets(&self, muscle_group: &str) -> bool {
        self.muscle_groups
            .iter()
            .any(|g| g.eq_ignore_ascii_case(muscle_group))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!("beginner".parse::<Difficulty>().unwrap(), Difficulty::Beginner);
        assert_eq!(" Advanced ".parse::<Difficulty>().unwrap(), Difficulty::Advanced);
        assert!("elite".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_muscle_groups() {
        let exercise = Exercise::new(
            "1",
            "Plank",
            3,
            "45s",
            Difficulty::Beginner,
            Vec::<String>::new(),
        );
        assert!(exercise.validate().is_err());
    }

    #[test]
    fn test_muscle_groups_are_a_set() {
        let exercise = Exercise::new(
            "1",
            "Bench Press",
            4,
            "8-12",
            Difficulty::Intermediate,
            ["Chest", "Triceps", "Chest"],
        );
        assert_eq!(exercise.muscle_groups.len(), 2);
        assert!(exercise.targets("chest"));
        assert!(exercise.validate().is_ok());
    }
}
