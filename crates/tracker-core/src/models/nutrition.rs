// ABOUTME: Daily nutrition targets and the intake figures compared against them
// ABOUTME: NutritionGoals configuration record and NutritionIntake input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Daily macro targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionGoals {
    /// Energy target in kcal
    pub calories: f64,
    /// Protein target in grams
    pub protein: f64,
    /// Carbohydrate target in grams
    pub carbs: f64,
    /// Fat target in grams
    pub fat: f64,
}

impl Default for NutritionGoals {
    fn default() -> Self {
        Self {
            calories: 2200.0,
            protein: 150.0,
            carbs: 220.0,
            fat: 80.0,
        }
    }
}

impl NutritionGoals {
    /// Reject negative or non-finite targets
    ///
    /// # Errors
    ///
    /// Returns `InvalidEntry` naming the offending macro.
    pub fn validate(&self) -> AppResult<()> {
        for (field, value) in self.fields() {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::invalid_entry(format!(
                    "{field} goal must be a non-negative number, got {value}"
                ))
                .with_resource_id(field));
            }
        }
        Ok(())
    }

    /// Macro name and target pairs in display order
    #[must_use]
    pub const fn fields(&self) -> [(&'static str, f64); 4] {
        [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
        ]
    }
}

/// What was eaten today, supplied by the diet log
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionIntake {
    /// Energy consumed in kcal
    pub calories: f64,
    /// Protein consumed in grams
    pub protein: f64,
    /// Carbohydrates consumed in grams
    pub carbs: f64,
    /// Fat consumed in grams
    pub fat: f64,
}

impl NutritionIntake {
    /// Macro name and intake pairs in the same order as [`NutritionGoals::fields`]
    #[must_use]
    pub const fn fields(&self) -> [(&'static str, f64); 4] {
        [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
        ]
    }
}
