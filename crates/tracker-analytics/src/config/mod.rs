// ABOUTME: Analytics configuration with environment overrides and validation
// ABOUTME: Selects burn, duration and consistency policies plus goal and achievement targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod error;

pub use error::ConfigError;

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracker_core::constants::{achievements, burn_rate, consistency, duration, weekly_goals};
use tracker_core::errors::AppError;

use crate::algorithms::{BurnAlgorithm, ConsistencyPolicy, DurationPolicy};

/// Targets for the four weekly report goals
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeeklyGoalTargets {
    /// Share of exercises completed, in percent
    pub completion_percent: f64,
    /// Calories burned in kcal
    pub calories_burned: f64,
    /// Consistency score
    pub consistency_score: f64,
    /// Average workout duration in minutes
    pub workout_minutes: f64,
}

impl Default for WeeklyGoalTargets {
    fn default() -> Self {
        Self {
            completion_percent: weekly_goals::COMPLETION_PERCENT,
            calories_burned: weekly_goals::CALORIES_BURNED,
            consistency_score: weekly_goals::CONSISTENCY_SCORE,
            workout_minutes: weekly_goals::WORKOUT_MINUTES,
        }
    }
}

impl WeeklyGoalTargets {
    /// Load goal targets from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            completion_percent: env_or("TRACKER_GOAL_COMPLETION_PCT", weekly_goals::COMPLETION_PERCENT),
            calories_burned: env_or("TRACKER_GOAL_CALORIES", weekly_goals::CALORIES_BURNED),
            consistency_score: env_or("TRACKER_GOAL_CONSISTENCY", weekly_goals::CONSISTENCY_SCORE),
            workout_minutes: env_or("TRACKER_GOAL_DURATION_MINUTES", weekly_goals::WORKOUT_MINUTES),
        }
    }
}

/// Thresholds at which achievements are earned
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AchievementThresholds {
    /// Kilograms lost between first and latest weigh-in
    pub weight_loss_kg: f64,
    /// Progress photos attached
    pub photo_count: usize,
    /// Minimum weekly consistency score
    pub consistency_score: u8,
}

impl Default for AchievementThresholds {
    fn default() -> Self {
        Self {
            weight_loss_kg: achievements::WEIGHT_LOSS_KG,
            photo_count: achievements::PHOTO_COUNT,
            consistency_score: achievements::CONSISTENCY_SCORE,
        }
    }
}

/// Analytics configuration
///
/// Missing sections deserialize to their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Calorie burn heuristic
    pub burn: BurnAlgorithm,
    /// Average workout duration policy
    pub duration: DurationPolicy,
    /// Consistency score policy
    pub consistency: ConsistencyPolicy,
    /// Weekly report goal targets
    pub goals: WeeklyGoalTargets,
    /// Achievement thresholds
    pub achievements: AchievementThresholds,
}

impl AnalyticsConfig {
    /// Load analytics configuration from environment
    ///
    /// Policy names are parsed strictly. Unparsable numeric overrides fall back to their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for an unknown policy name.
    pub fn from_env() -> Result<Self, ConfigError> {
        let burn = match parse_policy::<BurnAlgorithm>("TRACKER_BURN_MODEL")? {
            BurnAlgorithm::Flat { .. } => BurnAlgorithm::Flat {
                kcal_per_exercise: env_or(
                    "TRACKER_KCAL_PER_EXERCISE",
                    burn_rate::DEFAULT_KCAL_PER_EXERCISE,
                ),
            },
            BurnAlgorithm::PerSet { .. } => BurnAlgorithm::PerSet {
                kcal_per_set: env_or("TRACKER_KCAL_PER_SET", burn_rate::DEFAULT_KCAL_PER_SET),
            },
        };

        let duration = match parse_policy::<DurationPolicy>("TRACKER_DURATION_POLICY")? {
            DurationPolicy::Fixed { .. } => DurationPolicy::Fixed {
                minutes: env_or(
                    "TRACKER_FIXED_DURATION_MINUTES",
                    duration::DEFAULT_WORKOUT_MINUTES,
                ),
            },
            DurationPolicy::RestTime { .. } => DurationPolicy::RestTime {
                seconds_per_set: env_or(
                    "TRACKER_SECONDS_PER_SET",
                    duration::DEFAULT_WORK_SECONDS_PER_SET,
                ),
            },
        };

        let consistency = match parse_policy::<ConsistencyPolicy>("TRACKER_CONSISTENCY_POLICY")? {
            ConsistencyPolicy::Fixed { .. } => ConsistencyPolicy::Fixed {
                score: env_or("TRACKER_FIXED_CONSISTENCY", consistency::DEFAULT_SCORE),
            },
            other => other,
        };

        Ok(Self {
            burn,
            duration,
            consistency,
            goals: WeeklyGoalTargets::from_env(),
            achievements: AchievementThresholds::default(),
        })
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a rate is negative or non-finite, a fixed score exceeds 100,
    /// or a goal target is not positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rate = self.burn.rate();
        if !rate.is_finite() || rate < 0.0 {
            return Err(ConfigError::InvalidRange(
                "burn rate must be a non-negative finite number",
            ));
        }

        match self.duration {
            DurationPolicy::Fixed { minutes } if !minutes.is_finite() || minutes < 0.0 => {
                return Err(ConfigError::InvalidRange(
                    "fixed workout duration must be a non-negative finite number",
                ));
            }
            DurationPolicy::RestTime { seconds_per_set: 0 } => {
                return Err(ConfigError::ValueOutOfRange(
                    "seconds per set must be greater than zero",
                ));
            }
            _ => {}
        }

        if let ConsistencyPolicy::Fixed { score } = self.consistency {
            if score > consistency::MAX_SCORE {
                return Err(ConfigError::ValueOutOfRange(
                    "fixed consistency score must be between 0 and 100",
                ));
            }
        }

        let goals = &self.goals;
        if [
            goals.completion_percent,
            goals.calories_burned,
            goals.consistency_score,
            goals.workout_minutes,
        ]
        .iter()
        .any(|t| !t.is_finite() || *t <= 0.0)
        {
            return Err(ConfigError::InvalidRange(
                "weekly goal targets must be positive finite numbers",
            ));
        }

        let thresholds = &self.achievements;
        if !thresholds.weight_loss_kg.is_finite() || thresholds.weight_loss_kg <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "weight loss threshold must be a positive number",
            ));
        }
        if thresholds.consistency_score > consistency::MAX_SCORE {
            return Err(ConfigError::ValueOutOfRange(
                "consistency achievement threshold must be between 0 and 100",
            ));
        }

        Ok(())
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

fn parse_policy<T>(key: &str) -> Result<T, ConfigError>
where
    T: FromStr<Err = AppError> + Default,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .parse()
            .map_err(|e: AppError| ConfigError::Parse(e.message)),
        _ => Ok(T::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AnalyticsConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.consistency, ConsistencyPolicy::Fixed { score: 85 });
    }

    #[test]
    fn test_negative_burn_rate_rejected() {
        let config = AnalyticsConfig {
            burn: BurnAlgorithm::Flat {
                kcal_per_exercise: -1.0,
            },
            ..AnalyticsConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
    }

    #[test]
    fn test_zero_goal_target_rejected() {
        let mut config = AnalyticsConfig::default();
        config.goals.calories_burned = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_out_of_range_fixed_score_rejected() {
        let config = AnalyticsConfig {
            consistency: ConsistencyPolicy::Fixed { score: 101 },
            ..AnalyticsConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }
}
