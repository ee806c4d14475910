// ABOUTME: Demo state the tracker starts with when no snapshot is supplied
// ABOUTME: Six-day training split, three January weigh-ins, and a demo user profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{NaiveDate, Weekday};
use tracker_core::errors::{AppError, AppResult};
use tracker_core::models::{
    Difficulty, Exercise, Measurements, NewProgressEntry, ProgressLedger, UserProfile,
    WorkoutDay, WorkoutPlan,
};

use crate::config::TrackerConfig;
use crate::session::FitnessSession;

use Difficulty::{Advanced, Beginner, Intermediate};

/// Row of the demo plan: id, name, sets, reps, load, difficulty, muscle groups, rest
type Row = (
    &'static str,
    &'static str,
    u32,
    &'static str,
    Option<f64>,
    Difficulty,
    &'static [&'static str],
    u32,
);

const MONDAY: [Row; 5] = [
    ("1", "Bench Press", 4, "8-12", Some(80.0), Intermediate, &["Chest", "Triceps"], 90),
    ("2", "Incline Dumbbell Press", 3, "10-15", Some(25.0), Intermediate, &["Chest", "Shoulders"], 75),
    ("3", "Chest Flyes", 3, "12-15", Some(15.0), Beginner, &["Chest"], 60),
    ("4", "Tricep Dips", 3, "10-15", None, Intermediate, &["Triceps"], 60),
    ("5", "Overhead Tricep Extension", 3, "12-15", Some(20.0), Beginner, &["Triceps"], 60),
];

const TUESDAY: [Row; 5] = [
    ("6", "Pull-ups", 4, "6-10", None, Advanced, &["Back", "Biceps"], 90),
    ("7", "Bent-over Rows", 4, "8-12", Some(70.0), Intermediate, &["Back", "Biceps"], 75),
    ("8", "Lat Pulldowns", 3, "10-15", Some(60.0), Beginner, &["Back"], 60),
    ("9", "Bicep Curls", 3, "12-15", Some(15.0), Beginner, &["Biceps"], 45),
    ("10", "Hammer Curls", 3, "12-15", Some(12.0), Beginner, &["Biceps"], 45),
];

const WEDNESDAY: [Row; 5] = [
    ("11", "Squats", 4, "8-12", Some(100.0), Intermediate, &["Quadriceps", "Glutes"], 120),
    ("12", "Romanian Deadlifts", 4, "8-12", Some(80.0), Intermediate, &["Hamstrings", "Glutes"], 90),
    ("13", "Leg Press", 3, "15-20", Some(150.0), Beginner, &["Quadriceps", "Glutes"], 75),
    ("14", "Walking Lunges", 3, "12 each leg", None, Intermediate, &["Quadriceps", "Glutes"], 60),
    ("15", "Calf Raises", 4, "15-20", Some(40.0), Beginner, &["Calves"], 45),
];

const THURSDAY: [Row; 6] = [
    ("16", "Overhead Press", 4, "8-12", Some(50.0), Intermediate, &["Shoulders", "Triceps"], 90),
    ("17", "Lateral Raises", 3, "12-15", Some(10.0), Beginner, &["Shoulders"], 60),
    ("18", "Rear Delt Flyes", 3, "12-15", Some(8.0), Beginner, &["Shoulders"], 60),
    ("19", "Plank", 3, "45-60s", None, Intermediate, &["Core"], 60),
    ("20", "Russian Twists", 3, "20-30", Some(10.0), Beginner, &["Core"], 45),
    ("21", "Dead Bug", 3, "10 each side", None, Beginner, &["Core"], 45),
];

const FRIDAY: [Row; 6] = [
    ("22", "Burpees", 4, "8-12", None, Advanced, &["Full Body", "Cardio"], 60),
    ("23", "Mountain Climbers", 4, "30s", None, Intermediate, &["Core", "Cardio"], 45),
    ("24", "Kettlebell Swings", 4, "15-20", Some(16.0), Intermediate, &["Glutes", "Core", "Cardio"], 60),
    ("25", "Jump Squats", 3, "12-15", None, Intermediate, &["Legs", "Cardio"], 60),
    ("26", "High Knees", 3, "30s", None, Beginner, &["Cardio"], 30),
    ("27", "Battle Ropes", 3, "30s", None, Advanced, &["Arms", "Core", "Cardio"], 60),
];

const SATURDAY: [Row; 5] = [
    ("28", "Bulgarian Split Squats", 3, "12 each leg", Some(20.0), Intermediate, &["Quadriceps", "Glutes"], 75),
    ("29", "Hip Thrusts", 4, "12-15", Some(60.0), Intermediate, &["Glutes", "Hamstrings"], 75),
    ("30", "Leg Curls", 3, "12-15", Some(40.0), Beginner, &["Hamstrings"], 60),
    ("31", "Goblet Squats", 3, "15-20", Some(20.0), Beginner, &["Quadriceps", "Glutes"], 60),
    ("32", "Single Leg Glute Bridges", 3, "12 each leg", None, Intermediate, &["Glutes"], 45),
];

/// Coaching cues for the lead lift of each day
const INSTRUCTIONS: [(&str, &str); 6] = [
    ("1", "Keep your back flat and control the weight"),
    ("6", "Full range of motion, control the descent"),
    ("11", "Keep knees aligned with toes, full depth"),
    ("16", "Keep core tight, press straight up"),
    ("22", "Explosive movement, maintain form"),
    ("28", "Keep front knee aligned, control the movement"),
];

fn exercise(row: &Row) -> Exercise {
    let &(id, name, sets, reps, load, difficulty, groups, rest) = row;
    let mut exercise =
        Exercise::new(id, name, sets, reps, difficulty, groups.iter().copied()).with_rest(rest);
    if let Some(load) = load {
        exercise = exercise.with_weight(load);
    }
    if let Some((_, cue)) = INSTRUCTIONS.iter().find(|(cue_id, _)| *cue_id == id) {
        exercise = exercise.with_instructions(*cue);
    }
    exercise
}

/// Six-day split from Monday to Saturday with every exercise incomplete
///
/// # Errors
///
/// Returns `InvalidEntry` if the built-in data violates a plan invariant.
pub fn demo_plan() -> AppResult<WorkoutPlan> {
    let days: [(Weekday, &str, &[Row]); 6] = [
        (Weekday::Mon, "Chest & Triceps", &MONDAY),
        (Weekday::Tue, "Back & Biceps", &TUESDAY),
        (Weekday::Wed, "Legs", &WEDNESDAY),
        (Weekday::Thu, "Shoulders & Abs", &THURSDAY),
        (Weekday::Fri, "Full Body Circuit & Cardio", &FRIDAY),
        (Weekday::Sat, "Legs & Glutes", &SATURDAY),
    ];

    let days = days
        .iter()
        .map(|(weekday, focus, rows)| {
            WorkoutDay::new(*weekday, *focus, rows.iter().map(exercise).collect())
        })
        .collect::<AppResult<Vec<_>>>()?;
    Ok(WorkoutPlan::new(days))
}

/// Three weekly weigh-ins from January 2025
///
/// # Errors
///
/// Returns `InvalidEntry` if the built-in data fails ledger validation.
pub fn demo_ledger() -> AppResult<ProgressLedger> {
    let date = |day| {
        NaiveDate::from_ymd_opt(2025, 1, day)
            .ok_or_else(|| AppError::invalid_entry(format!("invalid demo date 2025-01-{day}")))
    };

    let mut ledger = ProgressLedger::new();
    ledger.record_entry(NewProgressEntry::new(date(1)?, 75.5))?;
    ledger.record_entry(NewProgressEntry::new(date(8)?, 75.2).with_body_fat(18.0))?;
    ledger.record_entry(
        NewProgressEntry::new(date(15)?, 74.8)
            .with_body_fat(17.5)
            .with_measurements(Measurements {
                chest: Some(102.0),
                waist: Some(85.0),
                arms: Some(35.0),
                thighs: Some(60.0),
            }),
    )?;
    Ok(ledger)
}

/// Demo account profile
#[must_use]
pub fn demo_profile() -> UserProfile {
    UserProfile::named("Alex Johnson")
        .with_weight(75.0)
        .with_height(180.0)
}

/// Session built from the demo plan, ledger and profile
///
/// # Errors
///
/// Returns an error if the demo data or `config` fails session validation.
pub fn demo_session(config: &TrackerConfig) -> AppResult<FitnessSession> {
    FitnessSession::builder()
        .config(config)
        .plan(demo_plan()?)
        .ledger(demo_ledger()?)
        .profile(demo_profile())
        .build()
}
