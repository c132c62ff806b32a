// ABOUTME: Main library entry point for the athlete analytics core
// ABOUTME: Re-exports the engines and adds logging, sample data, and the dashboard report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Athlete Analytics
//!
//! Scoring and insight core for an athlete-metrics dashboard. The engines
//! live in the workspace crates and are re-exported here:
//!
//! - [`ScoreEngine`] turns raw lifts, cardio, body composition, and recovery
//!   metrics into a graded 0-100 score
//! - [`InsightEngine`] scans an adherence or intake series and emits
//!   prioritized insights
//! - [`CorrelationAnalyzer`] relates a driver series to labelled outcomes
//! - [`StatsKit`] holds the shared numeric primitives
//!
//! ## Example
//!
//! ```rust
//! use athlete_analytics::{CategoryMetrics, ScoreEngine};
//!
//! let metrics = CategoryMetrics {
//!     bench: 330.0,
//!     squat: 460.0,
//!     deadlift: 520.0,
//!     bodyweight: 200.0,
//!     vo2_max: 53.7,
//!     resting_hr: 52.0,
//!     body_fat_pct: 13.5,
//!     lean_mass: 173.0,
//!     readiness: 79.0,
//!     hrv: 82.0,
//! };
//! let (score, grade) = ScoreEngine::new().grade_for(&metrics)?;
//! assert_eq!(score.overall, 83);
//! assert_eq!(grade.grade.as_str(), "A-");
//! # Ok::<(), athlete_analytics::AnalyticsError>(())
//! ```

/// Logging configuration and subscriber setup for the binaries
pub mod logging;

/// Presentation-facing report with explicit insufficient-data sections
pub mod report;

/// Seedable sample athlete generator and in-memory series provider
pub mod sample_data;

pub use athlete_core::errors::{AnalyticsError, AnalyticsResult, ErrorCode};
pub use athlete_core::models::{
    AiInsight, CategoryMetrics, CorrelationResult, CorrelationSummary, Grade, InsightPriority,
    InsightType, MetricSample, MetricSeries, PerformanceGrade, PerformanceLabel,
    PerformanceScore, RelationshipStrength, TrendDirection,
};
pub use athlete_core::provider::SeriesProvider;
pub use athlete_intelligence::{
    by_priority, AnalyticsConfig, ConfigError, ConsistencyStreakRule, CorrelationAnalyzer,
    InsightContext, InsightEngine, LabeledSeries, MetricInsights, MetricSummary, ScoreEngine,
    SpecificInsightRule, StatsKit,
};
