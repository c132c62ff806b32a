// ABOUTME: Insight records emitted by the rule-based insight engine
// ABOUTME: Types, priorities, and trend directions rendered as display hints by the dashboard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Category of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightType {
    /// Target consistently met
    Achievement,
    /// Adherence is too low
    Warning,
    /// Metric is improving beyond its baseline
    Optimization,
    /// Concrete adjustment suggested
    Recommendation,
}

/// Urgency of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightPriority {
    /// Informational
    Low,
    /// Worth acting on
    Medium,
    /// Act now
    High,
}

/// One categorized, prioritized observation about a metric
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiInsight {
    /// Insight category
    #[serde(rename = "type")]
    pub insight_type: InsightType,
    /// Short headline
    pub title: String,
    /// Full sentence shown under the headline
    pub content: String,
    /// Urgency
    pub priority: InsightPriority,
    /// Whether the athlete can act on it directly
    pub actionable: bool,
    /// Metrics the insight refers to
    pub related_metrics: Vec<String>,
}

/// Direction of a recent average relative to its baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Recent above baseline
    Up,
    /// Recent below baseline
    Down,
    /// Within tolerance
    Stable,
}
