// ABOUTME: Environment-based configuration for the tracker session
// ABOUTME: Combines analytics policies, logging settings and the default selected day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use tracker_analytics::config::AnalyticsConfig;

use crate::logging::LoggingConfig;

/// Top-level tracker configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Aggregation policies and goal targets
    pub analytics: AnalyticsConfig,
    /// Logging setup
    pub logging: LoggingConfig,
    /// Day index selected when a session starts; `None` selects today's weekday
    pub default_selected_day: Option<usize>,
}

impl TrackerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a policy name is unknown, a value fails validation, or
    /// `TRACKER_SELECTED_DAY` is not a day index.
    pub fn from_env() -> Result<Self> {
        debug!("Loading tracker configuration from environment variables");

        let analytics = AnalyticsConfig::from_env()?;

        let default_selected_day = match env::var("TRACKER_SELECTED_DAY") {
            Ok(raw) if !raw.trim().is_empty() => Some(raw.trim().parse().map_err(|_| {
                anyhow!("Invalid TRACKER_SELECTED_DAY value '{raw}': expected a day index")
            })?),
            _ => None,
        };

        let config = Self {
            analytics,
            logging: LoggingConfig::from_env(),
            default_selected_day,
        };

        config.validate()?;
        info!(
            burn_model = ?config.analytics.burn,
            duration_policy = ?config.analytics.duration,
            consistency_policy = ?config.analytics.consistency,
            "Tracker configuration loaded"
        );
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the analytics configuration is invalid
    pub fn validate(&self) -> Result<()> {
        self.analytics.validate()?;
        Ok(())
    }

    /// Human-readable summary for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Pierre Tracker Configuration:\n\
             - Burn model: {:?}\n\
             - Duration policy: {:?}\n\
             - Consistency policy: {:?}\n\
             - Log level: {}\n\
             - Environment: {}",
            self.analytics.burn,
            self.analytics.duration,
            self.analytics.consistency,
            self.logging.level,
            self.logging.environment,
        )
    }
}
