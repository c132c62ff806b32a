// ABOUTME: Score engine input record and its derived score and grade records
// ABOUTME: CategoryMetrics groups raw inputs; PerformanceScore and PerformanceGrade are results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw per-category inputs to the score engine
///
/// Lifts, bodyweight and lean mass share one unit (lb or kg).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryMetrics {
    /// Bench press one-rep max
    pub bench: f64,
    /// Back squat one-rep max
    pub squat: f64,
    /// Deadlift one-rep max
    pub deadlift: f64,
    /// Bodyweight; must be positive
    pub bodyweight: f64,
    /// `VO2max` in ml/kg/min
    pub vo2_max: f64,
    /// Resting heart rate in bpm
    #[serde(rename = "restingHR")]
    pub resting_hr: f64,
    /// Body fat percentage
    pub body_fat_pct: f64,
    /// Lean mass
    pub lean_mass: f64,
    /// Readiness score, 0-100
    pub readiness: f64,
    /// Heart rate variability score, 0-100
    pub hrv: f64,
}

/// Normalized sub-scores and the weighted overall score, each 0-100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceScore {
    /// Weighted overall score
    pub overall: u8,
    /// Strength sub-score
    pub strength: u8,
    /// Endurance sub-score
    pub endurance: u8,
    /// Body composition sub-score
    pub body_composition: u8,
    /// Recovery sub-score
    pub recovery: u8,
    /// Power output sub-score
    pub power_output: u8,
    /// Technique placeholder
    pub technique: u8,
}

/// Letter grade for an overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// 90 and above
    #[serde(rename = "A+")]
    APlus,
    /// 85-89
    #[serde(rename = "A")]
    A,
    /// 80-84
    #[serde(rename = "A-")]
    AMinus,
    /// 75-79
    #[serde(rename = "B+")]
    BPlus,
    /// 70-74
    #[serde(rename = "B")]
    B,
    /// 65-69
    #[serde(rename = "B-")]
    BMinus,
    /// 60-64
    #[serde(rename = "C+")]
    CPlus,
    /// 55-59
    #[serde(rename = "C")]
    C,
    /// Below 55
    #[serde(rename = "C-")]
    CMinus,
}

impl Grade {
    /// Display form, e.g. `A-`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Athlete category label for an overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PerformanceLabel {
    /// 90 and above
    Elite,
    /// 80-89
    Advanced,
    /// 70-79
    Intermediate,
    /// 60-69
    Developing,
    /// Below 60
    Beginner,
}

impl PerformanceLabel {
    /// Display name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Elite => "Elite",
            Self::Advanced => "Advanced",
            Self::Intermediate => "Intermediate",
            Self::Developing => "Developing",
            Self::Beginner => "Beginner",
        }
    }
}

impl fmt::Display for PerformanceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grade and label derived from an overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PerformanceGrade {
    /// Letter grade
    pub grade: Grade,
    /// Category label
    pub label: PerformanceLabel,
}
