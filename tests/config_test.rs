// ABOUTME: Tests for analytics configuration loading, validation, and engine wiring
// ABOUTME: Environment-mutating tests run serially to avoid cross-test interference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use athlete_analytics::{
    AnalyticsConfig, ConfigError, CorrelationAnalyzer, InsightEngine, InsightType, LabeledSeries,
    RelationshipStrength, ScoreEngine,
};
use common::reference_athlete;
use serial_test::serial;
use std::env;

#[test]
fn test_defaults_validate_and_round_trip_json() {
    common::init_test_logging();
    let config = AnalyticsConfig::default();
    config.validate().unwrap();

    let json = serde_json::to_string(&config).unwrap();
    let parsed: AnalyticsConfig = serde_json::from_str(&json).unwrap();
    parsed.validate().unwrap();
    assert_eq!(parsed.insights.windows.recent_samples, 7);
    assert_eq!(parsed.insights.windows.baseline_samples, 30);
}

#[test]
#[serial]
fn test_weight_override_that_breaks_the_sum_is_rejected() {
    env::set_var("ATHLETE_WEIGHT_POWER", "0.5");
    let result = AnalyticsConfig::load();
    env::remove_var("ATHLETE_WEIGHT_POWER");

    assert!(matches!(result, Err(ConfigError::InvalidWeights(_))));
}

#[test]
#[serial]
fn test_balanced_weight_overrides_are_accepted() {
    env::set_var("ATHLETE_WEIGHT_STRENGTH", "0.35");
    env::set_var("ATHLETE_WEIGHT_POWER", "0.10");
    let result = AnalyticsConfig::load();
    env::remove_var("ATHLETE_WEIGHT_STRENGTH");
    env::remove_var("ATHLETE_WEIGHT_POWER");

    let config = result.unwrap();
    assert!((config.scoring.weights.power - 0.10).abs() < f64::EPSILON);
}

#[test]
fn test_engines_honor_custom_configuration() {
    let mut config = AnalyticsConfig::default();
    config.scoring.normalization.technique_placeholder = 70;
    let score = ScoreEngine::with_config(config.scoring.clone())
        .unwrap()
        .score(&reference_athlete())
        .unwrap();
    assert_eq!(score.technique, 70);

    config.insights.thresholds.achievement_adherence_pct = 101;
    assert!(config.validate().is_err());

    let mut insights = AnalyticsConfig::default().insights;
    insights.thresholds.achievement_adherence_pct = 100;
    insights.thresholds.warning_adherence_pct = 95;
    // 28 of 30 adherent = 93%, an achievement under the default thresholds
    let mut values = vec![5.0; 30];
    values[0] = 0.0;
    values[1] = 0.0;
    let fired = InsightEngine::with_config(insights)
        .unwrap()
        .analyze_values(&values, 5.0, "Creatine")
        .unwrap();
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].insight_type, InsightType::Warning);

    let mut correlation = AnalyticsConfig::default().correlation;
    correlation.strong_threshold = 0.5;
    let driver = [1.0, 2.0, 3.0, 4.0];
    let outcome = [2.0, 1.0, 4.0, 3.0];
    let summary = CorrelationAnalyzer::with_config(correlation)
        .unwrap()
        .analyze(
            LabeledSeries::new("Adherence", &driver),
            &[LabeledSeries::new("Endurance", &outcome)],
        )
        .unwrap();
    assert_eq!(summary.strength, Some(RelationshipStrength::Strong));
}

#[test]
fn test_engines_reject_invalid_configuration() {
    let mut insights = AnalyticsConfig::default().insights;
    insights.windows.recent_samples = 0;
    assert!(matches!(
        InsightEngine::with_config(insights),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    let mut scoring = AnalyticsConfig::default().scoring;
    scoring.weights.recovery = 0.0;
    assert!(matches!(
        ScoreEngine::with_config(scoring),
        Err(ConfigError::InvalidWeights(_))
    ));

    let mut correlation = AnalyticsConfig::default().correlation;
    correlation.strong_threshold = f64::NAN;
    assert!(CorrelationAnalyzer::with_config(correlation).is_err());
}
