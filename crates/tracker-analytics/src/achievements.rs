// ABOUTME: Achievement badges earned from plan completion, weight loss, photos and consistency
// ABOUTME: Evaluates every badge against the current canonical state on each call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use tracker_core::models::{ProgressLedger, WeeklyStats, WorkoutPlan};

use crate::config::AchievementThresholds;
use crate::series::weight_change;

/// Badge identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementKind {
    /// Every day of a non-empty plan completed
    FirstWeekComplete,
    /// Enough weight lost between first and latest weigh-in
    WeightLossWarrior,
    /// Enough progress photos attached
    ProgressPhotographer,
    /// Weekly consistency score at or above the threshold
    ConsistencyKing,
}

impl AchievementKind {
    /// All badges in display order
    pub const ALL: [Self; 4] = [
        Self::FirstWeekComplete,
        Self::WeightLossWarrior,
        Self::ProgressPhotographer,
        Self::ConsistencyKing,
    ];

    /// Badge title
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::FirstWeekComplete => "First Week Complete",
            Self::WeightLossWarrior => "Weight Loss Warrior",
            Self::ProgressPhotographer => "Progress Photographer",
            Self::ConsistencyKing => "Consistency King",
        }
    }
}

/// One badge with its earned flag and progress towards it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    /// Badge
    pub kind: AchievementKind,
    /// Title for display
    pub title: String,
    /// Human-readable requirement
    pub description: String,
    /// Whether the requirement is met
    pub earned: bool,
    /// Current value measured against the requirement
    pub progress: f64,
    /// Requirement threshold
    pub target: f64,
}

/// Evaluate every badge
///
/// `stats` must be the weekly stats of the same `plan`.
#[must_use]
pub fn evaluate_achievements(
    plan: &WorkoutPlan,
    ledger: &ProgressLedger,
    stats: &WeeklyStats,
    thresholds: &AchievementThresholds,
) -> Vec<Achievement> {
    AchievementKind::ALL
        .iter()
        .map(|&kind| {
            let (progress, target, earned, description) = match kind {
                AchievementKind::FirstWeekComplete => (
                    plan.completed_days() as f64,
                    plan.len() as f64,
                    !plan.is_empty() && plan.completed_days() == plan.len(),
                    "Complete every workout day of the week".to_owned(),
                ),
                AchievementKind::WeightLossWarrior => {
                    let lost = (-weight_change(ledger)).max(0.0);
                    (
                        lost,
                        thresholds.weight_loss_kg,
                        lost >= thresholds.weight_loss_kg,
                        format!("Lose {}kg since your first weigh-in", thresholds.weight_loss_kg),
                    )
                }
                AchievementKind::ProgressPhotographer => (
                    ledger.photo_count() as f64,
                    thresholds.photo_count as f64,
                    ledger.photo_count() >= thresholds.photo_count,
                    format!("Attach {} progress photos", thresholds.photo_count),
                ),
                AchievementKind::ConsistencyKing => (
                    f64::from(stats.consistency_score),
                    f64::from(thresholds.consistency_score),
                    stats.consistency_score >= thresholds.consistency_score,
                    format!(
                        "Reach a consistency score of {}",
                        thresholds.consistency_score
                    ),
                ),
            };
            Achievement {
                kind,
                title: kind.title().to_owned(),
                description,
                earned,
                progress,
                target,
            }
        })
        .collect()
}
