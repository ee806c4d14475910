// ABOUTME: Shared test fixtures for tracker integration tests
// ABOUTME: Plan builders, date helpers, quiet logging and seeded sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `pierre_tracker`

use std::env;
use std::sync::Once;

use chrono::{NaiveDate, Weekday};
use pierre_tracker::config::TrackerConfig;
use pierre_tracker::{seed, FitnessSession};
use tracing::Level;
use tracker_core::models::{Difficulty, Exercise, WorkoutDay, WorkoutPlan};

static INIT_LOGGER: Once = Once::new();

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Exercise `id` on a plain bodyweight prescription
pub fn exercise(id: &str, sets: u32, muscle_group: &str) -> Exercise {
    Exercise::new(
        id,
        format!("Exercise {id}"),
        sets,
        "10",
        Difficulty::Intermediate,
        [muscle_group],
    )
}

/// Plan of `days` consecutive weekdays from Monday with `per_day` three-set exercises each
///
/// Exercise ids are `"{day}-{n}"`.
pub fn uniform_plan(days: usize, per_day: usize) -> WorkoutPlan {
    let days = (0..days)
        .map(|d| {
            let exercises = (0..per_day)
                .map(|n| exercise(&format!("{d}-{n}"), 3, "Full Body"))
                .collect();
            WorkoutDay::new(WEEKDAYS[d % WEEKDAYS.len()], format!("Day {d}"), exercises).unwrap()
        })
        .collect();
    WorkoutPlan::new(days)
}

/// Session over `plan` with default configuration and day 0 selected
pub fn session_with(plan: WorkoutPlan) -> FitnessSession {
    init_test_logging();
    FitnessSession::builder()
        .plan(plan)
        .selected_day(0)
        .build()
        .unwrap()
}

/// Demo session with default configuration
pub fn demo_session() -> FitnessSession {
    init_test_logging();
    seed::demo_session(&TrackerConfig::default()).unwrap()
}

/// Complete the first `count` exercises of the plan, day by day
pub fn complete_first(session: &mut FitnessSession, count: usize) {
    let targets: Vec<(usize, String)> = session
        .plan()
        .days()
        .iter()
        .enumerate()
        .flat_map(|(index, day)| day.exercises().iter().map(move |e| (index, e.id.clone())))
        .take(count)
        .collect();
    for (day, id) in targets {
        session.toggle_exercise(day, &id).unwrap();
    }
}
