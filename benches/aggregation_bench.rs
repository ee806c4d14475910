// ABOUTME: Criterion benchmarks for the aggregation engine
// ABOUTME: Measures weekly stats, weight series and muscle volume over large plans and ledgers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for weekly aggregation.
//!
//! Plans and ledgers are far larger than a real week so that per-item costs dominate.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Duration, NaiveDate, Weekday};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tracker_analytics::algorithms::ConsistencyPolicy;
use tracker_analytics::{muscle_group_volume, weight_series, WeeklyStatsCalculator};
use tracker_core::models::{
    Difficulty, Exercise, NewProgressEntry, ProgressLedger, WorkoutDay, WorkoutPlan,
};

const PLAN_SIZES: [usize; 3] = [10, 100, 1000];
const LEDGER_SIZES: [usize; 3] = [52, 365, 3650];
const MUSCLE_GROUPS: [&str; 6] = ["Chest", "Back", "Legs", "Shoulders", "Core", "Glutes"];

/// Seven-day plan with `per_day` exercises per day, every other exercise completed
fn generate_plan(per_day: usize) -> WorkoutPlan {
    let weekdays = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];
    let days = weekdays
        .iter()
        .enumerate()
        .filter_map(|(d, weekday)| {
            let exercises = (0..per_day)
                .map(|n| {
                    let mut exercise = Exercise::new(
                        format!("{d}-{n}"),
                        format!("Bench Exercise {n}"),
                        3 + (n % 3) as u32,
                        "10",
                        Difficulty::Intermediate,
                        [MUSCLE_GROUPS[n % MUSCLE_GROUPS.len()]],
                    )
                    .with_rest(60);
                    exercise.completed = n % 2 == 0;
                    exercise
                })
                .collect();
            WorkoutDay::new(*weekday, format!("Day {d}"), exercises).ok()
        })
        .collect();
    WorkoutPlan::new(days)
}

/// Daily weigh-ins drifting slowly downwards
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
fn generate_ledger(count: usize) -> ProgressLedger {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default();
    let mut ledger = ProgressLedger::new();
    for i in 0..count {
        let weight = 90.0 - (i as f64) * 0.01 + ((i * 7) % 5) as f64 * 0.1;
        let day = start + Duration::days(i as i64);
        let _ = ledger.record_entry(NewProgressEntry::new(day, weight));
    }
    ledger
}

fn bench_weekly_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("weekly_stats");
    let history: Vec<f64> = (0..52).map(|week| f64::from(week % 10) / 10.0).collect();

    for size in PLAN_SIZES {
        let plan = generate_plan(size);
        group.throughput(Throughput::Elements((size * 7) as u64));

        let fixed = WeeklyStatsCalculator::default();
        group.bench_with_input(BenchmarkId::new("fixed", size), &plan, |b, plan| {
            b.iter(|| fixed.compute(black_box(plan), black_box(&history)));
        });

        let historical =
            WeeklyStatsCalculator::default().with_consistency_strategy(ConsistencyPolicy::Historical);
        group.bench_with_input(BenchmarkId::new("historical", size), &plan, |b, plan| {
            b.iter(|| historical.compute(black_box(plan), black_box(&history)));
        });
    }

    group.finish();
}

fn bench_weight_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("weight_series");

    for size in LEDGER_SIZES {
        let ledger = generate_ledger(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("bounds", size), &ledger, |b, ledger| {
            b.iter(|| weight_series(black_box(ledger)).bounds(2.0));
        });
    }

    group.finish();
}

fn bench_muscle_volume(c: &mut Criterion) {
    let mut group = c.benchmark_group("muscle_volume");

    for size in PLAN_SIZES {
        let plan = generate_plan(size);
        group.throughput(Throughput::Elements((size * 7) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &plan, |b, plan| {
            b.iter(|| muscle_group_volume(black_box(plan)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_weekly_stats,
    bench_weight_series,
    bench_muscle_volume
);
criterion_main!(benches);
