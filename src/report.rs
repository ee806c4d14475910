// ABOUTME: Weekly report snapshot handed to the report rendering collaborator
// ABOUTME: Bundles stats, goals, completion and weight series, muscle volume and badges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;
use tracker_analytics::algorithms::BmiReading;
use tracker_analytics::{
    completion_series, evaluate_achievements, muscle_group_volume, weight_change, weight_series,
    Achievement, DayCompletion, MuscleGroupVolume, WeightBounds, WeightPoint,
};
use tracker_core::constants::chart::DEFAULT_WEIGHT_PADDING_KG;
use tracker_core::models::WeeklyStats;

use crate::queries::GoalProgress;
use crate::session::FitnessSession;

/// Everything a weekly report needs, computed at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyReport {
    /// Local date the report was generated
    pub generated_on: NaiveDate,
    /// Profile display name
    pub user: String,
    /// Weekly aggregates
    pub stats: WeeklyStats,
    /// Progress against weekly goals
    pub goals: Vec<GoalProgress>,
    /// Per-day completion
    pub completion: Vec<DayCompletion>,
    /// Weighed entries in date order
    pub weight_trend: Vec<WeightPoint>,
    /// Padded chart bounds, absent without weigh-ins
    pub weight_bounds: Option<WeightBounds>,
    /// Latest weighed minus first weighed entry
    pub weight_change_kg: f64,
    /// BMI, when weight and height are known
    pub bmi: Option<BmiReading>,
    /// Training volume per muscle group
    pub muscle_volume: Vec<MuscleGroupVolume>,
    /// Badge status
    pub achievements: Vec<Achievement>,
}

impl FitnessSession {
    /// Build the weekly report for today
    #[must_use]
    pub fn weekly_report(&self) -> WeeklyReport {
        self.weekly_report_on(Local::now().date_naive())
    }

    /// Build the weekly report stamped with `generated_on`
    #[must_use]
    pub fn weekly_report_on(&self, generated_on: NaiveDate) -> WeeklyReport {
        let stats = self.weekly_stats();
        let series = weight_series(self.ledger());

        let report = WeeklyReport {
            generated_on,
            user: self.profile().name.clone(),
            stats,
            goals: self.weekly_goals(),
            completion: completion_series(self.plan()),
            weight_trend: series.to_vec(),
            weight_bounds: series.bounds(DEFAULT_WEIGHT_PADDING_KG),
            weight_change_kg: weight_change(self.ledger()),
            bmi: self.bmi(),
            muscle_volume: muscle_group_volume(self.plan()),
            achievements: evaluate_achievements(
                self.plan(),
                self.ledger(),
                &stats,
                &self.analytics_config().achievements,
            ),
        };

        debug!(
            %generated_on,
            weight_points = report.weight_trend.len(),
            earned = report.achievements.iter().filter(|a| a.earned).count(),
            "Weekly report built"
        );
        report
    }
}
