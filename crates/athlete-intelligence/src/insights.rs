// ABOUTME: Rule-based insight engine over adherence and intake time series
// ABOUTME: Applies achievement, warning, optimization, and recommendation rules plus caller-specific rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Insight generation for tracked metrics
//!
//! The four base rules run in a fixed order and are independent of each
//! other. Specific rules registered on the engine run afterwards and use the
//! same record shape. The returned list keeps insertion order with later
//! duplicates (same type and title) removed.

use crate::config::analytics::InsightConfig;
use crate::config::{AnalyticsConfig, ConfigError};
use crate::statistics::StatsKit;
use athlete_core::errors::{AnalyticsError, AnalyticsResult};
use athlete_core::models::{
    AiInsight, InsightPriority, InsightType, MetricSample, MetricSeries, TrendDirection,
};
use athlete_core::provider::SeriesProvider;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::debug;

/// Window statistics a metric's insights are derived from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSummary {
    /// Metric display name
    pub label: String,
    /// Target the adherence rate was computed against
    pub target: f64,
    /// Adherence over the baseline window (%)
    pub adherence_rate: u8,
    /// Mean of the recent window
    pub recent_average: f64,
    /// Mean of the baseline window
    pub baseline_average: f64,
    /// Recent average relative to the baseline
    pub trend: TrendDirection,
    /// Samples in the recent window
    pub recent_samples: usize,
    /// Samples in the baseline window
    pub baseline_samples: usize,
}

/// Everything a specific rule may inspect
#[derive(Debug, Clone, Copy)]
pub struct InsightContext<'a> {
    /// Metric display name
    pub label: &'a str,
    /// Target value
    pub target: f64,
    /// All values, oldest first
    pub values: &'a [f64],
    /// Dated samples when the caller supplied a series
    pub samples: Option<&'a [MetricSample]>,
    /// Window statistics
    pub summary: &'a MetricSummary,
    /// Fraction of target that counts as adherent
    pub adherence_factor: f64,
}

/// Domain-specific rule appended after the base rules
pub trait SpecificInsightRule: Send + Sync {
    /// Evaluate the rule; `None` when it does not fire
    fn evaluate(&self, context: &InsightContext<'_>) -> Option<AiInsight>;
}

/// Achievement for a run of adherent samples ending at the latest sample
///
/// With dated samples, a gap of more than one day ends the run.
#[derive(Debug, Clone)]
pub struct ConsistencyStreakRule {
    min_streak: usize,
}

impl ConsistencyStreakRule {
    /// Rule that fires once the streak reaches `min_streak` samples
    #[must_use]
    pub const fn new(min_streak: usize) -> Self {
        Self { min_streak }
    }

    /// Length of the adherent run ending at the latest sample
    #[must_use]
    pub fn current_streak(context: &InsightContext<'_>) -> usize {
        let threshold = context.target * context.adherence_factor;
        let mut streak = 0;
        for (index, value) in context.values.iter().enumerate().rev() {
            if *value < threshold {
                break;
            }
            if let Some(samples) = context.samples {
                if let (Some(current), Some(next)) = (samples.get(index), samples.get(index + 1)) {
                    if (next.date - current.date).num_days() > 1 {
                        break;
                    }
                }
            }
            streak += 1;
        }
        streak
    }
}

impl Default for ConsistencyStreakRule {
    fn default() -> Self {
        Self::new(
            AnalyticsConfig::default()
                .insights
                .thresholds
                .consistency_streak_samples,
        )
    }
}

impl SpecificInsightRule for ConsistencyStreakRule {
    fn evaluate(&self, context: &InsightContext<'_>) -> Option<AiInsight> {
        if context.target <= 0.0 {
            return None;
        }
        let streak = Self::current_streak(context);
        (streak >= self.min_streak).then(|| AiInsight {
            insight_type: InsightType::Achievement,
            title: format!("{} Streak", context.label),
            content: format!(
                "You've met your {} target {streak} days in a row. Consistency compounds!",
                context.label
            ),
            priority: InsightPriority::Low,
            actionable: false,
            related_metrics: vec![context.label.to_owned()],
        })
    }
}

/// Insights, or the error that prevented them, for one provider metric
#[derive(Debug, Clone)]
pub struct MetricInsights {
    /// Metric name as reported by the provider
    pub metric: String,
    /// Window statistics the insights were derived from
    pub summary: AnalyticsResult<MetricSummary>,
    /// Analysis outcome
    pub result: AnalyticsResult<Vec<AiInsight>>,
}

/// Rule-based insight generator
#[derive(Clone, Default)]
pub struct InsightEngine {
    config: InsightConfig,
    specific_rules: Vec<Arc<dyn SpecificInsightRule>>,
}

impl InsightEngine {
    /// Engine with the reference thresholds and no specific rules
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with custom configuration
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when a window is empty or a threshold is out
    /// of range
    pub fn with_config(config: InsightConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            specific_rules: Vec::new(),
        })
    }

    /// Engine using the global analytics configuration
    #[must_use]
    pub fn from_global() -> Self {
        // Global configuration is validated when loaded
        Self {
            config: AnalyticsConfig::global().insights.clone(),
            specific_rules: Vec::new(),
        }
    }

    /// Append a specific rule evaluated after the base rules
    #[must_use]
    pub fn with_rule(mut self, rule: impl SpecificInsightRule + 'static) -> Self {
        self.specific_rules.push(Arc::new(rule));
        self
    }

    /// Append the built-in consistency streak rule using the configured length
    #[must_use]
    pub fn with_streak_rule(self) -> Self {
        let min = self.config.thresholds.consistency_streak_samples;
        self.with_rule(ConsistencyStreakRule::new(min))
    }

    /// Analyze a dated series
    ///
    /// # Errors
    ///
    /// Propagates `EmptyInput` from the window statistics
    pub fn analyze(
        &self,
        series: &MetricSeries,
        target: f64,
        label: &str,
    ) -> AnalyticsResult<Vec<AiInsight>> {
        let values = series.values();
        self.run(&values, Some(series.samples()), target, label)
            .map(|(_, insights)| insights)
    }

    /// Analyze raw values, oldest first
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` for an empty slice and `InvalidSeries` for
    /// negative or non-finite values
    pub fn analyze_values(
        &self,
        values: &[f64],
        target: f64,
        label: &str,
    ) -> AnalyticsResult<Vec<AiInsight>> {
        check_values(values, label)?;
        self.run(values, None, target, label)
            .map(|(_, insights)| insights)
    }

    /// Window statistics for raw values
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` for an empty slice
    pub fn summarize(
        &self,
        values: &[f64],
        target: f64,
        label: &str,
    ) -> AnalyticsResult<MetricSummary> {
        let windows = &self.config.windows;
        let recent = StatsKit::trailing(values, windows.recent_samples);
        let baseline = StatsKit::trailing(values, windows.baseline_samples);

        let recent_average = StatsKit::mean(recent)?;
        let baseline_average = StatsKit::mean(baseline)?;
        let adherence_rate = StatsKit::adherence_rate_with_factor(
            baseline,
            target,
            self.config.thresholds.adherence_target_factor,
        )?;

        Ok(MetricSummary {
            label: label.to_owned(),
            target,
            adherence_rate,
            recent_average,
            baseline_average,
            trend: StatsKit::trend_direction(recent_average, baseline_average, 0.0),
            recent_samples: recent.len(),
            baseline_samples: baseline.len(),
        })
    }

    /// Analyze every provider metric that has a target, in provider order
    #[must_use]
    pub fn analyze_provider(
        &self,
        provider: &dyn SeriesProvider,
        targets: &HashMap<String, f64>,
    ) -> Vec<MetricInsights> {
        let jobs: Vec<(String, f64)> = provider
            .metric_names()
            .into_iter()
            .filter_map(|name| targets.get(&name).map(|target| (name, *target)))
            .collect();

        jobs.into_par_iter()
            .map(|(metric, target)| {
                let analysis = provider
                    .series(&metric)
                    .ok_or(AnalyticsError::EmptyInput("provider returned no series"))
                    .and_then(|series| {
                        self.run(&series.values(), Some(series.samples()), target, &metric)
                    });
                let (summary, result) = match analysis {
                    Ok((summary, insights)) => (Ok(summary), Ok(insights)),
                    Err(error) => (Err(error.clone()), Err(error)),
                };
                MetricInsights {
                    metric,
                    summary,
                    result,
                }
            })
            .collect()
    }

    fn run(
        &self,
        values: &[f64],
        samples: Option<&[MetricSample]>,
        target: f64,
        label: &str,
    ) -> AnalyticsResult<(MetricSummary, Vec<AiInsight>)> {
        let summary = self.summarize(values, target, label)?;
        let mut insights = self.base_insights(&summary)?;

        let context = InsightContext {
            label,
            target,
            values,
            samples,
            summary: &summary,
            adherence_factor: self.config.thresholds.adherence_target_factor,
        };
        insights.extend(
            self.specific_rules
                .iter()
                .filter_map(|rule| rule.evaluate(&context)),
        );

        let insights = dedupe(insights);
        debug!(
            metric = label,
            adherence = summary.adherence_rate,
            count = insights.len(),
            "Generated insights"
        );
        Ok((summary, insights))
    }

    fn base_insights(&self, summary: &MetricSummary) -> AnalyticsResult<Vec<AiInsight>> {
        let thresholds = &self.config.thresholds;
        let label = summary.label.as_str();
        let mut insights = Vec::new();

        if summary.adherence_rate >= thresholds.achievement_adherence_pct {
            insights.push(AiInsight {
                insight_type: InsightType::Achievement,
                title: format!("Excellent {label} Consistency"),
                content: format!(
                    "You've reached your {label} target on {}% of the last {} days. Keep it up!",
                    summary.adherence_rate, summary.baseline_samples
                ),
                priority: InsightPriority::Low,
                actionable: false,
                related_metrics: vec![label.to_owned()],
            });
        }

        if summary.adherence_rate < thresholds.warning_adherence_pct {
            insights.push(AiInsight {
                insight_type: InsightType::Warning,
                title: format!("Low {label} Adherence"),
                content: format!(
                    "{label} adherence is {}% over the last {} days. A daily reminder can help you stay on track.",
                    summary.adherence_rate, summary.baseline_samples
                ),
                priority: InsightPriority::High,
                actionable: true,
                related_metrics: vec![format!("{label} adherence")],
            });
        }

        if summary.recent_average > summary.baseline_average * thresholds.optimization_ratio {
            let improvement =
                StatsKit::percent_change(summary.baseline_average, summary.recent_average)?
                    .round();
            insights.push(AiInsight {
                insight_type: InsightType::Optimization,
                title: format!("{label} Trending Up"),
                content: format!(
                    "Your recent {label} average is {improvement:.0}% above your {}-day baseline.",
                    summary.baseline_samples
                ),
                priority: InsightPriority::Medium,
                actionable: false,
                related_metrics: vec![label.to_owned()],
            });
        }

        if summary.recent_average < summary.target * thresholds.recommendation_target_ratio {
            let increase = StatsKit::round_to(summary.target - summary.recent_average, 1);
            insights.push(AiInsight {
                insight_type: InsightType::Recommendation,
                title: format!("Increase {label} Intake"),
                content: format!(
                    "Your recent {label} average of {:.1} is below your target of {}. Consider increasing by {increase:.1} units.",
                    summary.recent_average, summary.target
                ),
                priority: InsightPriority::Medium,
                actionable: true,
                related_metrics: vec![label.to_owned()],
            });
        }

        Ok(insights)
    }
}

/// Stable high-to-low ordering for display; equal priorities keep insertion order
#[must_use]
pub fn by_priority(insights: &[AiInsight]) -> Vec<AiInsight> {
    let mut sorted = insights.to_vec();
    sorted.sort_by(|a, b| b.priority.cmp(&a.priority));
    sorted
}

fn dedupe(insights: Vec<AiInsight>) -> Vec<AiInsight> {
    let mut seen = HashSet::new();
    insights
        .into_iter()
        .filter(|insight| seen.insert((insight.insight_type, insight.title.clone())))
        .collect()
}

fn check_values(values: &[f64], label: &str) -> AnalyticsResult<()> {
    if let Some(bad) = values.iter().find(|v| !v.is_finite() || **v < 0.0) {
        return Err(AnalyticsError::invalid_series(
            label,
            format!("value {bad} is not a non-negative number"),
        ));
    }
    Ok(())
}
