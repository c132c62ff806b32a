// ABOUTME: Composite performance scoring from strength, cardio, body composition, and recovery
// ABOUTME: Normalizes raw metrics to 0-100 sub-scores, weights them, and maps the result to a grade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Score Engine
//!
//! The overall score is computed from the unrounded sub-scores and rounded
//! once; each exposed sub-score is rounded on its own. Reordering those two
//! steps changes the overall score by up to one point.

use crate::config::analytics::ScoringConfig;
use crate::config::{AnalyticsConfig, ConfigError};
use crate::statistics::StatsKit;
use athlete_core::constants::{grade_thresholds, label_thresholds, score_bounds};
use athlete_core::errors::{AnalyticsError, AnalyticsResult};
use athlete_core::models::{
    CategoryMetrics, Grade, PerformanceGrade, PerformanceLabel, PerformanceScore,
};
use rayon::prelude::*;
use tracing::debug;

/// Unrounded sub-scores, kept internal so the overall score never sees rounded inputs
#[derive(Debug, Clone, Copy)]
struct SubScores {
    strength: f64,
    endurance: f64,
    body_composition: f64,
    recovery: f64,
    power: f64,
}

/// Composite performance score calculator
#[derive(Debug, Clone, Default)]
pub struct ScoreEngine {
    config: ScoringConfig,
}

impl ScoreEngine {
    /// Engine with the reference weights
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with custom scoring configuration
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when the weights do not sum to 1.0 or an
    /// anchor is out of range
    pub fn with_config(config: ScoringConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Engine using the global analytics configuration
    #[must_use]
    pub fn from_global() -> Self {
        // Global configuration is validated when loaded
        Self {
            config: AnalyticsConfig::global().scoring.clone(),
        }
    }

    /// Score a set of category metrics
    ///
    /// # Errors
    ///
    /// Returns `InvalidMetrics` when bodyweight is not a positive number or
    /// any other metric is not finite
    pub fn score(&self, metrics: &CategoryMetrics) -> AnalyticsResult<PerformanceScore> {
        validate(metrics)?;

        let subs = self.sub_scores(metrics)?;
        let weights = &self.config.weights;
        let overall = subs.power.mul_add(
            weights.power,
            subs.recovery.mul_add(
                weights.recovery,
                subs.body_composition.mul_add(
                    weights.body_composition,
                    subs.strength
                        .mul_add(weights.strength, subs.endurance * weights.endurance),
                ),
            ),
        );

        let score = PerformanceScore {
            overall: to_score(overall),
            strength: to_score(subs.strength),
            endurance: to_score(subs.endurance),
            body_composition: to_score(subs.body_composition),
            recovery: to_score(subs.recovery),
            power_output: to_score(subs.power),
            technique: self.config.normalization.technique_placeholder,
        };

        debug!(
            overall = score.overall,
            strength = score.strength,
            endurance = score.endurance,
            body_composition = score.body_composition,
            recovery = score.recovery,
            power = score.power_output,
            "Computed performance score"
        );

        Ok(score)
    }

    /// Score and grade in one call
    ///
    /// # Errors
    ///
    /// Same as [`ScoreEngine::score`]
    pub fn grade_for(
        &self,
        metrics: &CategoryMetrics,
    ) -> AnalyticsResult<(PerformanceScore, PerformanceGrade)> {
        let score = self.score(metrics)?;
        Ok((score, Self::grade(score.overall)))
    }

    /// Score a roster in parallel; results keep the input order
    #[must_use]
    pub fn score_batch(
        &self,
        roster: &[CategoryMetrics],
    ) -> Vec<AnalyticsResult<PerformanceScore>> {
        roster.par_iter().map(|metrics| self.score(metrics)).collect()
    }

    /// Grade and label for an overall score
    #[must_use]
    pub const fn grade(overall: u8) -> PerformanceGrade {
        PerformanceGrade {
            grade: letter_grade(overall),
            label: category_label(overall),
        }
    }

    fn sub_scores(&self, m: &CategoryMetrics) -> AnalyticsResult<SubScores> {
        let lifts = &self.config.lifts;
        let norm = &self.config.normalization;

        let strength = clamp_score(StatsKit::mean(&[
            m.bench / m.bodyweight * lifts.bench,
            m.squat / m.bodyweight * lifts.squat,
            m.deadlift / m.bodyweight * lifts.deadlift,
        ])?);

        let vo2_score = clamp_score(m.vo2_max / norm.vo2_max_reference * 100.0);
        let hr_score = (score_bounds::MAX_SCORE - (m.resting_hr - norm.resting_hr_floor)).max(0.0);
        let endurance = StatsKit::mean(&[vo2_score, hr_score])?;

        let fat_score = (m.body_fat_pct - norm.body_fat_floor_pct)
            .mul_add(-norm.body_fat_penalty_per_pct, score_bounds::MAX_SCORE)
            .max(0.0);
        let lean_score = clamp_score(m.lean_mass / m.bodyweight * 100.0);
        let body_composition = StatsKit::mean(&[fat_score, lean_score])?;

        let recovery = StatsKit::mean(&[m.readiness, m.hrv])?;

        let power = clamp_score(m.deadlift / m.bodyweight * lifts.power_deadlift);

        Ok(SubScores {
            strength,
            endurance,
            body_composition,
            recovery,
            power,
        })
    }
}

fn validate(metrics: &CategoryMetrics) -> AnalyticsResult<()> {
    if !metrics.bodyweight.is_finite() || metrics.bodyweight <= 0.0 {
        return Err(AnalyticsError::invalid_metrics(format!(
            "bodyweight must be positive, got {}",
            metrics.bodyweight
        )));
    }

    let fields = [
        ("bench", metrics.bench),
        ("squat", metrics.squat),
        ("deadlift", metrics.deadlift),
        ("vo2Max", metrics.vo2_max),
        ("restingHR", metrics.resting_hr),
        ("bodyFatPct", metrics.body_fat_pct),
        ("leanMass", metrics.lean_mass),
        ("readiness", metrics.readiness),
        ("hrv", metrics.hrv),
    ];
    if let Some((name, value)) = fields.iter().find(|(_, value)| !value.is_finite()) {
        return Err(AnalyticsError::invalid_metrics(format!(
            "{name} must be a finite number, got {value}"
        )));
    }
    Ok(())
}

fn clamp_score(value: f64) -> f64 {
    value.clamp(score_bounds::MIN_SCORE, score_bounds::MAX_SCORE)
}

/// Round once and bound to the exposed 0-100 range
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Safe: clamped to 0..=100
fn to_score(value: f64) -> u8 {
    clamp_score(value.round()) as u8
}

const fn letter_grade(overall: u8) -> Grade {
    match overall {
        s if s >= grade_thresholds::A_PLUS => Grade::APlus,
        s if s >= grade_thresholds::A => Grade::A,
        s if s >= grade_thresholds::A_MINUS => Grade::AMinus,
        s if s >= grade_thresholds::B_PLUS => Grade::BPlus,
        s if s >= grade_thresholds::B => Grade::B,
        s if s >= grade_thresholds::B_MINUS => Grade::BMinus,
        s if s >= grade_thresholds::C_PLUS => Grade::CPlus,
        s if s >= grade_thresholds::C => Grade::C,
        _ => Grade::CMinus,
    }
}

const fn category_label(overall: u8) -> PerformanceLabel {
    match overall {
        s if s >= label_thresholds::ELITE => PerformanceLabel::Elite,
        s if s >= label_thresholds::ADVANCED => PerformanceLabel::Advanced,
        s if s >= label_thresholds::INTERMEDIATE => PerformanceLabel::Intermediate,
        s if s >= label_thresholds::DEVELOPING => PerformanceLabel::Developing,
        _ => PerformanceLabel::Beginner,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_athlete() -> CategoryMetrics {
        CategoryMetrics {
            bench: 330.0,
            squat: 460.0,
            deadlift: 520.0,
            bodyweight: 200.0,
            vo2_max: 53.7,
            resting_hr: 52.0,
            body_fat_pct: 13.5,
            lean_mass: 173.0,
            readiness: 79.0,
            hrv: 82.0,
        }
    }

    #[test]
    fn test_reference_athlete_sub_scores() {
        let score = ScoreEngine::new().score(&reference_athlete()).unwrap();

        // (82.5 + 80.5 + 78.0) / 3
        assert_eq!(score.strength, 80);
        // (89.5 + 88.0) / 2
        assert_eq!(score.endurance, 89);
        // (72.5 + 86.5) / 2
        assert_eq!(score.body_composition, 80);
        // (79 + 82) / 2 = 80.5 rounds away from zero
        assert_eq!(score.recovery, 81);
        // 2.6 * 40 clamps to 100
        assert_eq!(score.power_output, 100);
        assert_eq!(score.technique, 85);
        assert_eq!(score.overall, 83);
    }

    #[test]
    fn test_unbalanced_weights_rejected() {
        let mut config = ScoringConfig::default();
        config.weights.strength += 0.25;
        assert!(matches!(
            ScoreEngine::with_config(config),
            Err(ConfigError::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_overall_uses_unrounded_sub_scores() {
        // Sub-scores that each round up but whose weighted sum does not
        let metrics = CategoryMetrics {
            bench: 100.0,
            squat: 100.0,
            deadlift: 100.0,
            bodyweight: 100.0,
            vo2_max: 30.0,
            resting_hr: 90.5,
            body_fat_pct: 18.1,
            lean_mass: 50.5,
            readiness: 50.0,
            hrv: 51.0,
        };
        let score = ScoreEngine::new().score(&metrics).unwrap();

        let rounded_first = f64::from(score.strength).mul_add(
            0.40,
            f64::from(score.endurance).mul_add(
                0.25,
                f64::from(score.body_composition).mul_add(
                    0.20,
                    f64::from(score.recovery)
                        .mul_add(0.10, f64::from(score.power_output) * 0.05),
                ),
            ),
        );
        assert!(score.overall <= 100);
        assert!((f64::from(score.overall) - rounded_first).abs() <= 1.0);
    }

    #[test]
    fn test_zero_bodyweight_is_rejected() {
        let metrics = CategoryMetrics {
            bodyweight: 0.0,
            ..reference_athlete()
        };
        assert!(matches!(
            ScoreEngine::new().score(&metrics),
            Err(AnalyticsError::InvalidMetrics(_))
        ));
    }

    #[test]
    fn test_non_finite_metric_is_rejected() {
        let metrics = CategoryMetrics {
            vo2_max: f64::NAN,
            ..reference_athlete()
        };
        assert!(ScoreEngine::new().score(&metrics).is_err());
    }

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(ScoreEngine::grade(100).grade, Grade::APlus);
        assert_eq!(ScoreEngine::grade(90).grade, Grade::APlus);
        assert_eq!(ScoreEngine::grade(89).grade, Grade::A);
        assert_eq!(ScoreEngine::grade(80).grade, Grade::AMinus);
        assert_eq!(ScoreEngine::grade(55).grade, Grade::C);
        assert_eq!(ScoreEngine::grade(54).grade, Grade::CMinus);
        assert_eq!(ScoreEngine::grade(0).grade, Grade::CMinus);
    }

    #[test]
    fn test_label_boundaries() {
        assert_eq!(ScoreEngine::grade(90).label, PerformanceLabel::Elite);
        assert_eq!(ScoreEngine::grade(80).label, PerformanceLabel::Advanced);
        assert_eq!(ScoreEngine::grade(79).label, PerformanceLabel::Intermediate);
        assert_eq!(ScoreEngine::grade(60).label, PerformanceLabel::Developing);
        assert_eq!(ScoreEngine::grade(59).label, PerformanceLabel::Beginner);
    }

    #[test]
    fn test_batch_preserves_order_and_errors() {
        let bad = CategoryMetrics {
            bodyweight: -1.0,
            ..reference_athlete()
        };
        let results = ScoreEngine::new().score_batch(&[reference_athlete(), bad]);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].as_ref().unwrap().overall, 83);
        assert!(results[1].is_err());
    }
}
