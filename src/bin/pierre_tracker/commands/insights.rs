// ABOUTME: Derived view commands for pierre-tracker
// ABOUTME: BMI, nutrition goals and progress, dashboard and weekly report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{anyhow, Result};
use pierre_tracker::FitnessSession;
use serde_json::{json, Value};
use tracker_analytics::algorithms::compute_bmi;
use tracker_core::models::{NutritionGoals, NutritionIntake};

/// BMI for explicit values, or for the session's current weight and profile height
pub fn bmi(session: &FitnessSession, explicit: Option<(f64, f64)>) -> Result<Value> {
    let reading = match explicit {
        Some((weight_kg, height_cm)) => compute_bmi(weight_kg, height_cm)?,
        None => session.bmi().ok_or_else(|| {
            anyhow!("No weight or height on record; pass --weight and --height")
        })?,
    };
    Ok(json!({
        "bmi": reading.value,
        "category": reading.category,
    }))
}

/// Replace the nutrition goals
pub fn set_goals(
    session: &mut FitnessSession,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
) -> Result<Value> {
    session.set_nutrition_goals(NutritionGoals {
        calories,
        protein,
        carbs,
        fat,
    })?;
    Ok(json!({ "nutrition_goals": session.nutrition_goals() }))
}

/// Intake against the nutrition goals
pub fn nutrition(
    session: &FitnessSession,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
) -> Value {
    let intake = NutritionIntake {
        calories,
        protein,
        carbs,
        fat,
    };
    json!({ "macros": session.nutrition_progress(&intake) })
}

/// Dashboard headline numbers plus BMI
pub fn dashboard(session: &FitnessSession) -> Value {
    json!({
        "dashboard": session.dashboard(),
        "bmi": session.bmi(),
    })
}

/// Full weekly report
pub fn report(session: &FitnessSession) -> Value {
    json!(session.weekly_report())
}
