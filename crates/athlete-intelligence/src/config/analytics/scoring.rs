// ABOUTME: Score engine configuration for sub-score weights and normalization anchors
// ABOUTME: Defaults reproduce the reference composite score exactly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Scoring Configuration
//!
//! Weights of each sub-score in the overall score and the anchors used to
//! normalize raw metrics onto a 0-100 scale.

use super::ConfigError;
use athlete_core::constants::{lift_multipliers, normalization, score_weights};
use serde::{Deserialize, Serialize};

/// Tolerance when checking that weights sum to 1.0
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Score engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Sub-score weights in the overall score
    pub weights: ScoreWeights,
    /// Lift-to-bodyweight multipliers
    pub lifts: LiftMultipliers,
    /// Cardio and body composition anchors
    pub normalization: NormalizationConfig,
}

impl ScoringConfig {
    /// Validate weights, multipliers, and normalization anchors
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = &self.weights;
        let all = [
            weights.strength,
            weights.endurance,
            weights.body_composition,
            weights.recovery,
            weights.power,
        ];
        if all.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Score weights must be non-negative numbers",
            ));
        }
        if (weights.total() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights("Score weights must sum to 1.0"));
        }

        let lifts = &self.lifts;
        let multipliers = [
            lifts.bench,
            lifts.squat,
            lifts.deadlift,
            lifts.power_deadlift,
        ];
        if multipliers.iter().any(|m| !m.is_finite() || *m <= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Lift multipliers must be positive",
            ));
        }

        let norm = &self.normalization;
        if !norm.vo2_max_reference.is_finite() || norm.vo2_max_reference <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "VO2max reference must be positive",
            ));
        }
        if !norm.resting_hr_floor.is_finite() || !norm.body_fat_floor_pct.is_finite() {
            return Err(ConfigError::ValueOutOfRange(
                "Normalization floors must be finite",
            ));
        }
        if !norm.body_fat_penalty_per_pct.is_finite() || norm.body_fat_penalty_per_pct < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Body fat penalty must not be negative",
            ));
        }
        if norm.technique_placeholder > 100 {
            return Err(ConfigError::ValueOutOfRange(
                "Technique placeholder must be between 0 and 100",
            ));
        }
        Ok(())
    }
}

/// Weights of each sub-score; must sum to 1.0
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Strength weight
    pub strength: f64,
    /// Endurance weight
    pub endurance: f64,
    /// Body composition weight
    pub body_composition: f64,
    /// Recovery weight
    pub recovery: f64,
    /// Power output weight
    pub power: f64,
}

impl ScoreWeights {
    /// Sum of all weights
    #[must_use]
    pub fn total(&self) -> f64 {
        self.strength + self.endurance + self.body_composition + self.recovery + self.power
    }
}

/// Multipliers applied to each lift-to-bodyweight ratio
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiftMultipliers {
    /// Bench press
    pub bench: f64,
    /// Back squat
    pub squat: f64,
    /// Deadlift (strength sub-score)
    pub deadlift: f64,
    /// Deadlift (power sub-score)
    pub power_deadlift: f64,
}

/// Anchors for cardio and body composition normalization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizationConfig {
    /// `VO2max` that maps to a full score
    pub vo2_max_reference: f64,
    /// Resting heart rate at which points start dropping
    pub resting_hr_floor: f64,
    /// Body fat percentage at which points start dropping
    pub body_fat_floor_pct: f64,
    /// Points lost per body fat percentage point above the floor
    pub body_fat_penalty_per_pct: f64,
    /// Technique placeholder value
    pub technique_placeholder: u8,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            strength: score_weights::STRENGTH,
            endurance: score_weights::ENDURANCE,
            body_composition: score_weights::BODY_COMPOSITION,
            recovery: score_weights::RECOVERY,
            power: score_weights::POWER,
        }
    }
}

impl Default for LiftMultipliers {
    fn default() -> Self {
        Self {
            bench: lift_multipliers::BENCH,
            squat: lift_multipliers::SQUAT,
            deadlift: lift_multipliers::DEADLIFT,
            power_deadlift: lift_multipliers::POWER_DEADLIFT,
        }
    }
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            vo2_max_reference: normalization::VO2_MAX_REFERENCE,
            resting_hr_floor: normalization::RESTING_HR_FLOOR,
            body_fat_floor_pct: normalization::BODY_FAT_FLOOR_PCT,
            body_fat_penalty_per_pct: normalization::BODY_FAT_PENALTY_PER_PCT,
            technique_placeholder: normalization::TECHNIQUE_PLACEHOLDER,
        }
    }
}
