// ABOUTME: Workout plan commands for pierre-tracker
// ABOUTME: Weekly stats, day view, exercise toggling and week reset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use pierre_tracker::FitnessSession;
use serde_json::{json, Value};

/// Weekly stats with the completion percentage
pub fn stats(session: &FitnessSession) -> Value {
    let stats = session.weekly_stats();
    json!({
        "stats": stats,
        "exercise_completion_percent": stats.exercise_completion_percent(),
    })
}

/// One plan day, defaulting to the selected day
pub fn day(session: &FitnessSession, index: Option<usize>) -> Result<Value> {
    let index = index.unwrap_or_else(|| session.selected_day());
    let day = session.current_day(index)?;
    Ok(json!({
        "index": index,
        "day": day,
        "completed": day.completed_count(),
        "total": day.total_count(),
    }))
}

/// Flip one exercise and report the new day state
pub fn toggle(session: &mut FitnessSession, day: usize, exercise: &str) -> Result<Value> {
    let toggled = session.toggle_exercise(day, exercise)?;
    Ok(json!({
        "toggled": toggled,
        "stats": session.weekly_stats(),
    }))
}

/// Start a new week
pub fn reset_week(session: &mut FitnessSession) -> Value {
    let completion_ratio = session.reset_week();
    json!({
        "finished_week_completion_ratio": completion_ratio,
        "weeks_recorded": session.completion_history().len(),
    })
}
