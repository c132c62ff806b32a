// ABOUTME: Insight engine configuration for lookback windows and rule thresholds
// ABOUTME: Configures adherence cut-offs, trend ratios, and streak length
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ConfigError;
use athlete_core::constants::{insight_rules, windows};
use serde::{Deserialize, Serialize};

/// Insight engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InsightConfig {
    /// Lookback windows
    pub windows: InsightWindows,
    /// Rule thresholds
    pub thresholds: InsightThresholds,
}

impl InsightConfig {
    /// Validate window lengths and rule thresholds
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        let windows = &self.windows;
        if windows.recent_samples == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Recent window must hold at least one sample",
            ));
        }
        if windows.recent_samples > windows.baseline_samples {
            return Err(ConfigError::InvalidRange(
                "recent_samples must be <= baseline_samples",
            ));
        }

        let thresholds = &self.thresholds;
        let factor = thresholds.adherence_target_factor;
        if !factor.is_finite() || factor <= 0.0 || factor > 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Adherence target factor must be in (0, 1]",
            ));
        }
        if thresholds.achievement_adherence_pct > 100 {
            return Err(ConfigError::ValueOutOfRange(
                "Achievement adherence must be a percentage",
            ));
        }
        if thresholds.warning_adherence_pct >= thresholds.achievement_adherence_pct {
            return Err(ConfigError::InvalidRange(
                "warning_adherence_pct must be < achievement_adherence_pct",
            ));
        }
        if !thresholds.optimization_ratio.is_finite() || thresholds.optimization_ratio < 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Optimization ratio must be at least 1.0",
            ));
        }
        let ratio = thresholds.recommendation_target_ratio;
        if !ratio.is_finite() || ratio <= 0.0 || ratio > 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Recommendation target ratio must be in (0, 1]",
            ));
        }
        if thresholds.consistency_streak_samples == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Consistency streak must be at least one sample",
            ));
        }
        Ok(())
    }
}

/// Sample counts of the recent and baseline windows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightWindows {
    /// Recent window length
    pub recent_samples: usize,
    /// Baseline window length
    pub baseline_samples: usize,
}

/// Thresholds for each base rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightThresholds {
    /// Fraction of target counted as adherent
    pub adherence_target_factor: f64,
    /// Adherence at or above which the achievement rule fires
    pub achievement_adherence_pct: u8,
    /// Adherence below which the warning rule fires
    pub warning_adherence_pct: u8,
    /// Recent-over-baseline ratio for the optimization rule
    pub optimization_ratio: f64,
    /// Fraction of target under which the recommendation rule fires
    pub recommendation_target_ratio: f64,
    /// Adherent samples in a row that earn a streak achievement
    pub consistency_streak_samples: usize,
}

impl Default for InsightWindows {
    fn default() -> Self {
        Self {
            recent_samples: windows::RECENT_SAMPLES,
            baseline_samples: windows::BASELINE_SAMPLES,
        }
    }
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            adherence_target_factor: insight_rules::ADHERENCE_TARGET_FACTOR,
            achievement_adherence_pct: insight_rules::ACHIEVEMENT_ADHERENCE_PCT,
            warning_adherence_pct: insight_rules::WARNING_ADHERENCE_PCT,
            optimization_ratio: insight_rules::OPTIMIZATION_RATIO,
            recommendation_target_ratio: insight_rules::RECOMMENDATION_TARGET_RATIO,
            consistency_streak_samples: insight_rules::CONSISTENCY_STREAK_SAMPLES,
        }
    }
}
