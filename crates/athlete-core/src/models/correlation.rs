// ABOUTME: Correlation records relating a driver series to labelled outcome series
// ABOUTME: Undefined pairs are reported explicitly instead of being dropped or rendered as NaN
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Pearson correlation for one driver/outcome pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationResult {
    /// `"<driver> vs <outcome>"`
    pub pair_label: String,
    /// Outcome label on its own
    pub outcome: String,
    /// Rounded coefficient; `None` when undefined
    pub r: Option<f64>,
    /// Set when either series had zero variance
    pub undefined: bool,
}

/// Strength classification of a correlation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipStrength {
    /// |r| above the strong threshold
    Strong,
    /// |r| between the moderate and strong thresholds
    Moderate,
    /// |r| below the moderate threshold
    Weak,
}

/// Every pair plus the strongest defined link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationSummary {
    /// Driver series label
    pub driver: String,
    /// One entry per outcome, in input order
    pub results: Vec<CorrelationResult>,
    /// Outcome with the largest |r|, if any pair is defined
    pub strongest: Option<CorrelationResult>,
    /// Classification of the strongest |r|
    pub strength: Option<RelationshipStrength>,
}
