// ABOUTME: Athlete analytics engines extracted for reuse by every dashboard surface
// ABOUTME: Statistics, composite scoring, rule-based insights, and correlation analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Athlete Intelligence
//!
//! One shared implementation of the scoring and insight formulas. All engines
//! are pure and synchronous: inputs are borrowed, results are freshly
//! allocated value records, and no state survives between calls.
//!
//! - [`statistics::StatsKit`]: mean, adherence, trend direction, Pearson r
//! - [`scoring::ScoreEngine`]: composite performance score and grade
//! - [`insights::InsightEngine`]: prioritized insights over a metric series
//! - [`correlation::CorrelationAnalyzer`]: driver-vs-outcome correlations

/// Analytics configuration with validation and environment overrides
pub mod config;
/// Driver-versus-outcome correlation analysis
pub mod correlation;
/// Rule-based insight generation
pub mod insights;
/// Composite performance scoring and grading
pub mod scoring;
/// Primitive numeric utilities
pub mod statistics;

pub use config::{AnalyticsConfig, ConfigError};
pub use correlation::{CorrelationAnalyzer, LabeledSeries};
pub use insights::{
    by_priority, ConsistencyStreakRule, InsightContext, InsightEngine, MetricInsights,
    MetricSummary, SpecificInsightRule,
};
pub use scoring::ScoreEngine;
pub use statistics::StatsKit;
