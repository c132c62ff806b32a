// ABOUTME: Core data models for athlete analytics inputs and results
// ABOUTME: Re-exports series, performance, insight, and correlation records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Inputs (`MetricSample`, `MetricSeries`, `CategoryMetrics`) and the
//! immutable value records the engines produce. Every result type
//! serializes with camelCase field names for the presentation layer.

/// Correlation results and summaries
pub mod correlation;
/// Insight records and trend directions
pub mod insight;
/// Score engine input and output records
pub mod performance;
/// Dated samples and validated series
pub mod series;

pub use correlation::{CorrelationResult, CorrelationSummary, RelationshipStrength};
pub use insight::{AiInsight, InsightPriority, InsightType, TrendDirection};
pub use performance::{CategoryMetrics, Grade, PerformanceGrade, PerformanceLabel, PerformanceScore};
pub use series::{MetricSample, MetricSeries};
