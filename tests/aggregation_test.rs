// ABOUTME: Integration tests for the aggregation engine through public interfaces
// ABOUTME: Weekly stats strategies, BMI, weight and completion series, volume and achievements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{complete_first, date, demo_session, session_with, uniform_plan};
use tracker_analytics::algorithms::{
    compute_bmi, BmiCategory, BurnAlgorithm, ConsistencyPolicy, DurationPolicy,
};
use tracker_analytics::{
    completion_series, evaluate_achievements, muscle_group_volume, weight_change, weight_series,
    AchievementKind, AchievementThresholds, WeeklyStatsCalculator,
};
use tracker_core::models::{NewProgressEntry, PhotoRef, ProgressLedger, WorkoutPlan};

// === Weekly stats ===

#[test]
fn test_six_by_five_plan_with_eighteen_completed() {
    let mut session = session_with(uniform_plan(6, 5));
    complete_first(&mut session, 18);

    let stats = session.weekly_stats();
    assert_eq!(stats.completed_exercises, 18);
    assert_eq!(stats.total_exercises, 30);
    assert_eq!(stats.workouts_completed, 3);
    assert!((stats.calories_burned - 18.0 * 45.0).abs() < 1e-9);
    assert!((stats.avg_workout_duration - 65.0).abs() < 1e-9);
    assert_eq!(stats.consistency_score, 85);
    assert!((stats.exercise_completion_percent() - 60.0).abs() < 1e-9);
}

#[test]
fn test_empty_plan_yields_zero_stats() {
    let calculator = WeeklyStatsCalculator::default();
    let stats = calculator.compute(&WorkoutPlan::default(), &[0.5]);
    assert_eq!(stats.total_exercises, 0);
    assert_eq!(stats.consistency_score, 0);
    assert!(stats.calories_burned.abs() < f64::EPSILON);
    assert!(stats.exercise_completion_percent().abs() < f64::EPSILON);
}

#[test]
fn test_pluggable_policies() {
    let mut plan = uniform_plan(2, 2);
    plan.toggle_exercise(0, "0-0").unwrap();
    plan.toggle_exercise(0, "0-1").unwrap();

    let calculator = WeeklyStatsCalculator::default()
        .with_burn_model(BurnAlgorithm::PerSet { kcal_per_set: 10.0 })
        .with_duration_strategy(DurationPolicy::RestTime {
            seconds_per_set: 40,
        })
        .with_consistency_strategy(ConsistencyPolicy::DayCompletion);

    let stats = calculator.compute(&plan, &[]);
    // two completed exercises of three sets each
    assert!((stats.calories_burned - 60.0).abs() < 1e-9);
    // one trained day: 6 sets x (40 s work + 60 s default rest)
    assert!((stats.avg_workout_duration - 10.0).abs() < 1e-9);
    assert_eq!(stats.consistency_score, 50);
}

#[test]
fn test_historical_consistency_uses_finished_weeks() {
    let mut plan = uniform_plan(1, 4);
    plan.toggle_exercise(0, "0-0").unwrap();

    let calculator =
        WeeklyStatsCalculator::default().with_consistency_strategy(ConsistencyPolicy::Historical);

    // mean of 1.0, 0.5 and the current 0.25
    assert_eq!(calculator.compute(&plan, &[1.0, 0.5]).consistency_score, 58);
    assert_eq!(calculator.compute(&plan, &[]).consistency_score, 25);
}

// === BMI ===

#[test]
fn test_bmi_reference_values() {
    let normal = compute_bmi(75.0, 180.0).unwrap();
    assert!((normal.value - 23.1).abs() < 1e-9);
    assert_eq!(normal.category, BmiCategory::Normal);

    let under = compute_bmi(50.0, 180.0).unwrap();
    assert!((under.value - 15.4).abs() < 1e-9);
    assert_eq!(under.category, BmiCategory::Underweight);

    assert_eq!(compute_bmi(100.0, 180.0).unwrap().category, BmiCategory::Obese);
    assert!(compute_bmi(75.0, 0.0).is_err());
    assert!(compute_bmi(f64::NAN, 180.0).is_err());
}

#[test]
fn test_session_bmi_prefers_latest_weigh_in() {
    let session = demo_session();
    let reading = session.bmi().unwrap();
    // 74.8 kg at 180 cm
    assert!((reading.value - 23.1).abs() < 1e-9);
    assert_eq!(session.current_weight(), Some(74.8));
}

// === Weight series ===

#[test]
fn test_weight_series_empty_and_single() {
    let mut ledger = ProgressLedger::new();
    let series = weight_series(&ledger);
    assert!(series.is_empty());
    assert_eq!(series.iter().count(), 0);
    assert!(series.bounds(2.0).is_none());

    ledger
        .record_entry(NewProgressEntry::new(date(2025, 1, 1), 75.5))
        .unwrap();
    let series = weight_series(&ledger);
    assert_eq!(series.len(), 1);

    let bounds = series.bounds(0.0).unwrap();
    assert!(bounds.max > bounds.min);
    assert!((bounds.position(75.5) - 0.5).abs() < 1e-9);
    assert!(weight_change(&ledger).abs() < f64::EPSILON);
}

#[test]
fn test_weight_series_is_restartable_and_skips_unweighed() {
    let session = demo_session();
    let mut ledger = session.ledger().clone();
    ledger.attach_photo(PhotoRef::uri("photo.jpg"), date(2025, 1, 20));

    let series = weight_series(&ledger);
    let first: Vec<_> = series.iter().collect();
    let second: Vec<_> = (&series).into_iter().collect();

    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
    assert!(first.windows(2).all(|pair| pair[0].date < pair[1].date));
    assert!((weight_change(&ledger) + 0.7).abs() < 1e-9);
}

// === Series and volume over the plan ===

#[test]
fn test_completion_series_per_day() {
    let mut session = session_with(uniform_plan(2, 4));
    complete_first(&mut session, 5);

    let series = completion_series(session.plan());
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].completed, 4);
    assert!((series[0].rate_percent - 100.0).abs() < 1e-9);
    assert_eq!(series[1].completed, 1);
    assert!((series[1].rate_percent - 25.0).abs() < 1e-9);
    assert_eq!(series[1].day, "Tuesday");
}

#[test]
fn test_muscle_volume_on_demo_plan() {
    let mut session = demo_session();
    complete_first(&mut session, 5);

    let volume = muscle_group_volume(session.plan());
    let glutes = volume.iter().find(|v| v.muscle_group == "Glutes").unwrap();
    assert_eq!(glutes.days_trained, 3);
    assert_eq!(glutes.days_completed, 0);

    let chest = volume.iter().find(|v| v.muscle_group == "Chest").unwrap();
    assert_eq!(chest.days_trained, 1);
    assert_eq!(chest.days_completed, 1);
    assert_eq!(chest.exercises, 3);

    let names: Vec<_> = volume.iter().map(|v| v.muscle_group.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

// === Achievements ===

#[test]
fn test_achievements_on_fresh_demo_session() {
    let session = demo_session();
    let stats = session.weekly_stats();
    let achievements = evaluate_achievements(
        session.plan(),
        session.ledger(),
        &stats,
        &AchievementThresholds::default(),
    );

    assert_eq!(achievements.len(), AchievementKind::ALL.len());
    assert!(achievements.iter().all(|a| !a.earned));

    let loss = achievements
        .iter()
        .find(|a| a.kind == AchievementKind::WeightLossWarrior)
        .unwrap();
    assert!((loss.progress - 0.7).abs() < 1e-9);
}

#[test]
fn test_first_week_complete_after_all_days() {
    let mut session = session_with(uniform_plan(2, 2));
    complete_first(&mut session, 4);

    let stats = session.weekly_stats();
    let achievements = evaluate_achievements(
        session.plan(),
        session.ledger(),
        &stats,
        &AchievementThresholds::default(),
    );
    let first_week = achievements
        .iter()
        .find(|a| a.kind == AchievementKind::FirstWeekComplete)
        .unwrap();
    assert!(first_week.earned);
}
