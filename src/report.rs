// ABOUTME: Presentation-facing dashboard report aggregating every engine's output
// ABOUTME: Failed sections become explicit insufficient-data states carrying the error code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Dashboard report
//!
//! A [`DashboardReport`] is one JSON document for the presentation layer.
//! Every section is a [`Section`]: either computed data or
//! `insufficientData { code, reason }`. A failed section never takes down
//! its siblings and is never replaced by a default value.

use athlete_core::errors::{AnalyticsError, AnalyticsResult, ErrorCode};
use athlete_core::models::{
    AiInsight, CategoryMetrics, CorrelationSummary, PerformanceGrade, PerformanceScore,
};
use athlete_core::provider::SeriesProvider;
use athlete_intelligence::{
    by_priority, CorrelationAnalyzer, InsightEngine, LabeledSeries, MetricSummary, ScoreEngine,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{info, warn};

/// Computed data or the reason it could not be computed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section<T> {
    /// Section computed successfully
    Ready(T),
    /// Input did not support a result
    InsufficientData {
        /// Stable error code
        code: ErrorCode,
        /// Human-readable reason
        reason: String,
    },
}

impl<T> Section<T> {
    /// Computed data, if any
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            Self::InsufficientData { .. } => None,
        }
    }

    /// Error code of an insufficient-data section
    #[must_use]
    pub const fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Ready(_) => None,
            Self::InsufficientData { code, .. } => Some(*code),
        }
    }
}

impl<T> From<AnalyticsError> for Section<T> {
    fn from(error: AnalyticsError) -> Self {
        Self::InsufficientData {
            code: error.code(),
            reason: error.to_string(),
        }
    }
}

impl<T> From<AnalyticsResult<T>> for Section<T> {
    fn from(result: AnalyticsResult<T>) -> Self {
        match result {
            Ok(data) => Self::Ready(data),
            Err(error) => error.into(),
        }
    }
}

/// Score plus its grade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSection {
    /// Sub-scores and overall score
    pub score: PerformanceScore,
    /// Letter grade and category label
    pub grade: PerformanceGrade,
}

/// Trend statistics and insights for one tracked metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSection {
    /// Metric name
    pub metric: String,
    /// Window statistics for trend arrows
    pub summary: Section<MetricSummary>,
    /// Insights ordered by priority for display
    pub insights: Section<Vec<AiInsight>>,
}

/// The complete dashboard document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    /// Athlete display name
    pub athlete: String,
    /// Composite performance score
    pub performance: Section<ScoreSection>,
    /// One section per tracked metric, in provider order
    pub metrics: Vec<MetricSection>,
    /// Driver-versus-outcome correlations
    pub correlation: Section<CorrelationSummary>,
}

impl DashboardReport {
    /// Count of sections that could not be computed
    #[must_use]
    pub fn insufficient_sections(&self) -> usize {
        let metric_gaps: usize = self
            .metrics
            .iter()
            .map(|m| {
                usize::from(m.summary.code().is_some()) + usize::from(m.insights.code().is_some())
            })
            .sum();
        usize::from(self.performance.code().is_some())
            + metric_gaps
            + usize::from(self.correlation.code().is_some())
    }
}

/// Everything a report is computed from
#[derive(Clone, Copy)]
pub struct ReportInput<'a> {
    /// Athlete display name
    pub athlete: &'a str,
    /// Raw category metrics
    pub metrics: &'a CategoryMetrics,
    /// Source of tracked metric series
    pub provider: &'a dyn SeriesProvider,
    /// Targets keyed by metric name; metrics without a target are skipped
    pub targets: &'a HashMap<String, f64>,
    /// Correlation driver
    pub driver: LabeledSeries<'a>,
    /// Correlation outcomes
    pub outcomes: &'a [LabeledSeries<'a>],
}

/// Runs every engine and assembles a [`DashboardReport`]
#[derive(Clone, Default)]
pub struct ReportBuilder {
    scores: ScoreEngine,
    insights: InsightEngine,
    correlations: CorrelationAnalyzer,
}

impl ReportBuilder {
    /// Builder with default engines
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder whose engines read the global analytics configuration
    #[must_use]
    pub fn from_global() -> Self {
        Self {
            scores: ScoreEngine::from_global(),
            insights: InsightEngine::from_global(),
            correlations: CorrelationAnalyzer::from_global(),
        }
    }

    /// Replace the insight engine, for example to add specific rules
    #[must_use]
    pub fn with_insight_engine(mut self, engine: InsightEngine) -> Self {
        self.insights = engine;
        self
    }

    /// Compute every section
    #[must_use]
    pub fn build(&self, input: &ReportInput<'_>) -> DashboardReport {
        let performance: Section<ScoreSection> = self
            .scores
            .grade_for(input.metrics)
            .map(|(score, grade)| ScoreSection { score, grade })
            .into();

        let metrics = self.metric_sections(input);

        let correlation: Section<CorrelationSummary> = self
            .correlations
            .analyze(input.driver, input.outcomes)
            .into();

        let report = DashboardReport {
            athlete: input.athlete.to_owned(),
            performance,
            metrics,
            correlation,
        };

        let gaps = report.insufficient_sections();
        if gaps > 0 {
            warn!(athlete = input.athlete, gaps, "Report has insufficient-data sections");
        }
        info!(
            athlete = input.athlete,
            metrics = report.metrics.len(),
            "Built dashboard report"
        );
        report
    }

    fn metric_sections(&self, input: &ReportInput<'_>) -> Vec<MetricSection> {
        self.insights
            .analyze_provider(input.provider, input.targets)
            .into_iter()
            .map(|analysis| {
                let summary: Section<MetricSummary> = analysis.summary.into();
                let insights: Section<Vec<AiInsight>> = analysis
                    .result
                    .map(|list| by_priority(&list))
                    .into();
                MetricSection {
                    metric: analysis.metric,
                    summary,
                    insights,
                }
            })
            .collect()
    }
}
