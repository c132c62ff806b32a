// ABOUTME: Analytics configuration for the scoring, insight, and correlation engines
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and env loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Analytics Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `scoring` - Sub-score weights and normalization anchors
//! - `insights` - Lookback windows and rule thresholds
//! - `correlation` - Strength cut-offs and reported precision
//!
//! Defaults reproduce the reference engine behavior. Environment variables
//! prefixed with `ATHLETE_` may tune individual values; the result is always
//! validated before use.

pub mod correlation;
pub mod error;
pub mod insights;
pub mod scoring;

pub use correlation::CorrelationConfig;
pub use error::ConfigError;
pub use insights::{InsightConfig, InsightThresholds, InsightWindows};
pub use scoring::{LiftMultipliers, NormalizationConfig, ScoreWeights, ScoringConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ANALYTICS_CONFIG: OnceLock<AnalyticsConfig> = OnceLock::new();

/// Main analytics configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Score engine configuration
    pub scoring: ScoringConfig,
    /// Insight engine configuration
    pub insights: InsightConfig,
    /// Correlation analyzer configuration
    pub correlation: CorrelationConfig,
}

impl AnalyticsConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ANALYTICS_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load analytics config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparsable value
    /// or the resulting configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scoring.validate()?;
        self.insights.validate()?;
        self.correlation.validate()
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let weights = &mut self.scoring.weights;
        Self::apply_env_var("ATHLETE_WEIGHT_STRENGTH", &mut weights.strength)?;
        Self::apply_env_var("ATHLETE_WEIGHT_ENDURANCE", &mut weights.endurance)?;
        Self::apply_env_var(
            "ATHLETE_WEIGHT_BODY_COMPOSITION",
            &mut weights.body_composition,
        )?;
        Self::apply_env_var("ATHLETE_WEIGHT_RECOVERY", &mut weights.recovery)?;
        Self::apply_env_var("ATHLETE_WEIGHT_POWER", &mut weights.power)?;

        let windows = &mut self.insights.windows;
        Self::apply_env_var("ATHLETE_INSIGHT_RECENT_SAMPLES", &mut windows.recent_samples)?;
        Self::apply_env_var(
            "ATHLETE_INSIGHT_BASELINE_SAMPLES",
            &mut windows.baseline_samples,
        )?;

        let thresholds = &mut self.insights.thresholds;
        Self::apply_env_var(
            "ATHLETE_INSIGHT_ADHERENCE_FACTOR",
            &mut thresholds.adherence_target_factor,
        )?;
        Self::apply_env_var(
            "ATHLETE_INSIGHT_ACHIEVEMENT_PCT",
            &mut thresholds.achievement_adherence_pct,
        )?;
        Self::apply_env_var(
            "ATHLETE_INSIGHT_WARNING_PCT",
            &mut thresholds.warning_adherence_pct,
        )?;
        Self::apply_env_var(
            "ATHLETE_INSIGHT_OPTIMIZATION_RATIO",
            &mut thresholds.optimization_ratio,
        )?;
        Self::apply_env_var(
            "ATHLETE_INSIGHT_RECOMMENDATION_RATIO",
            &mut thresholds.recommendation_target_ratio,
        )?;
        Self::apply_env_var(
            "ATHLETE_INSIGHT_STREAK_SAMPLES",
            &mut thresholds.consistency_streak_samples,
        )?;

        let corr = &mut self.correlation;
        Self::apply_env_var("ATHLETE_CORRELATION_STRONG", &mut corr.strong_threshold)?;
        Self::apply_env_var("ATHLETE_CORRELATION_MODERATE", &mut corr.moderate_threshold)?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config_is_valid() {
        AnalyticsConfig::default().validate().unwrap();
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let mut config = AnalyticsConfig::default();
        config.scoring.weights.strength = 0.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_warning_must_stay_below_achievement() {
        let mut config = AnalyticsConfig::default();
        config.insights.thresholds.warning_adherence_pct = 95;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
    }

    #[test]
    fn test_recent_window_cannot_exceed_baseline() {
        let mut config = AnalyticsConfig::default();
        config.insights.windows.recent_samples = 40;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_recent_window_rejected() {
        let mut config = AnalyticsConfig::default();
        config.insights.windows.recent_samples = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    #[serial]
    fn test_env_override_applies() {
        env::set_var("ATHLETE_INSIGHT_RECENT_SAMPLES", "5");
        let config = AnalyticsConfig::load();
        env::remove_var("ATHLETE_INSIGHT_RECENT_SAMPLES");

        assert_eq!(config.unwrap().insights.windows.recent_samples, 5);
    }

    #[test]
    #[serial]
    fn test_unparsable_env_override_fails() {
        env::set_var("ATHLETE_CORRELATION_STRONG", "very");
        let result = AnalyticsConfig::load();
        env::remove_var("ATHLETE_CORRELATION_STRONG");

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
