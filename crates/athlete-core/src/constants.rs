// ABOUTME: Analytic constants for scoring, grading, insight rules, and correlation
// ABOUTME: Pure data grouped by domain; configuration defaults are derived from these values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Values here are the reference contract of the engines. Runtime
//! configuration defaults to them and may only tune them within validated
//! ranges.

/// Weights of each sub-score in the overall performance score
pub mod score_weights {
    /// Strength contribution
    pub const STRENGTH: f64 = 0.40;
    /// Endurance contribution
    pub const ENDURANCE: f64 = 0.25;
    /// Body composition contribution
    pub const BODY_COMPOSITION: f64 = 0.20;
    /// Recovery contribution
    pub const RECOVERY: f64 = 0.10;
    /// Power output contribution
    pub const POWER: f64 = 0.05;
}

/// Per-lift multipliers applied to lift-to-bodyweight ratios
pub mod lift_multipliers {
    /// Bench press ratio multiplier
    pub const BENCH: f64 = 50.0;
    /// Back squat ratio multiplier
    pub const SQUAT: f64 = 35.0;
    /// Deadlift ratio multiplier
    pub const DEADLIFT: f64 = 30.0;
    /// Deadlift ratio multiplier for the power sub-score
    pub const POWER_DEADLIFT: f64 = 40.0;
}

/// Normalization anchors for the cardio and body composition sub-scores
pub mod normalization {
    /// `VO2max` (ml/kg/min) mapped to a full score
    pub const VO2_MAX_REFERENCE: f64 = 60.0;
    /// Resting heart rate (bpm) at which the heart-rate score starts losing points
    pub const RESTING_HR_FLOOR: f64 = 40.0;
    /// Body fat percentage at which the fat score starts losing points
    pub const BODY_FAT_FLOOR_PCT: f64 = 8.0;
    /// Points lost per body fat percentage point above the floor
    pub const BODY_FAT_PENALTY_PER_PCT: f64 = 5.0;
    /// Technique placeholder; no technique signal exists yet
    pub const TECHNIQUE_PLACEHOLDER: u8 = 85;
}

/// Score bounds
pub mod score_bounds {
    /// Lowest exposed score
    pub const MIN_SCORE: f64 = 0.0;
    /// Highest exposed score
    pub const MAX_SCORE: f64 = 100.0;
}

/// Overall-score thresholds for letter grades, highest first
pub mod grade_thresholds {
    /// A+
    pub const A_PLUS: u8 = 90;
    /// A
    pub const A: u8 = 85;
    /// A-
    pub const A_MINUS: u8 = 80;
    /// B+
    pub const B_PLUS: u8 = 75;
    /// B
    pub const B: u8 = 70;
    /// B-
    pub const B_MINUS: u8 = 65;
    /// C+
    pub const C_PLUS: u8 = 60;
    /// C
    pub const C: u8 = 55;
}

/// Overall-score thresholds for category labels
pub mod label_thresholds {
    /// Elite
    pub const ELITE: u8 = 90;
    /// Advanced
    pub const ADVANCED: u8 = 80;
    /// Intermediate
    pub const INTERMEDIATE: u8 = 70;
    /// Developing
    pub const DEVELOPING: u8 = 60;
}

/// Insight rule thresholds
pub mod insight_rules {
    /// Fraction of target a sample must reach to count as adherent
    pub const ADHERENCE_TARGET_FACTOR: f64 = 0.8;
    /// Adherence (%) at or above which an achievement is emitted
    pub const ACHIEVEMENT_ADHERENCE_PCT: u8 = 90;
    /// Adherence (%) below which a warning is emitted
    pub const WARNING_ADHERENCE_PCT: u8 = 70;
    /// Recent-over-baseline ratio that triggers an optimization insight
    pub const OPTIMIZATION_RATIO: f64 = 1.1;
    /// Fraction of target below which a recommendation is emitted
    pub const RECOMMENDATION_TARGET_RATIO: f64 = 0.9;
    /// Consecutive adherent samples that earn a streak achievement
    pub const CONSISTENCY_STREAK_SAMPLES: usize = 7;
}

/// Lookback windows, in samples
pub mod windows {
    /// Recent window
    pub const RECENT_SAMPLES: usize = 7;
    /// Baseline window
    pub const BASELINE_SAMPLES: usize = 30;
}

/// Correlation classification
pub mod correlation {
    /// |r| above this is a strong relationship
    pub const STRONG_THRESHOLD: f64 = 0.7;
    /// |r| at or above this (and up to strong) is moderate
    pub const MODERATE_THRESHOLD: f64 = 0.4;
    /// Decimal places reported for r
    pub const REPORTED_DECIMALS: u32 = 2;
}
