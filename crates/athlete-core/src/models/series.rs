// ABOUTME: Dated metric samples and validated per-metric time series
// ABOUTME: Enforces non-empty, non-negative, strictly chronological series at construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AnalyticsError, AnalyticsResult};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// One dated observation of a metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSample {
    /// Calendar day of the observation
    pub date: NaiveDate,
    /// Observed value
    pub value: f64,
    /// Per-sample target, when the source tracks one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
}

impl MetricSample {
    /// Sample without a per-sample target
    #[must_use]
    pub const fn new(date: NaiveDate, value: f64) -> Self {
        Self {
            date,
            value,
            target: None,
        }
    }

    /// Attach a per-sample target
    #[must_use]
    pub const fn with_target(mut self, target: f64) -> Self {
        self.target = Some(target);
        self
    }
}

/// Chronological samples for one named metric
///
/// Invariants: at least one sample, every value finite and `>= 0`, dates
/// strictly increasing (which also makes them unique).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "SeriesData")]
pub struct MetricSeries {
    metric: String,
    samples: Vec<MetricSample>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeriesData {
    metric: String,
    samples: Vec<MetricSample>,
}

impl TryFrom<SeriesData> for MetricSeries {
    type Error = AnalyticsError;

    fn try_from(data: SeriesData) -> Result<Self, Self::Error> {
        Self::new(data.metric, data.samples)
    }
}

impl MetricSeries {
    /// Build a series, validating its invariants
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` when `samples` is empty and `InvalidSeries` when a
    /// value is negative or non-finite or dates are not strictly increasing.
    pub fn new(metric: impl Into<String>, samples: Vec<MetricSample>) -> AnalyticsResult<Self> {
        let metric = metric.into();
        if samples.is_empty() {
            return Err(AnalyticsError::EmptyInput("metric series has no samples"));
        }

        for sample in &samples {
            if !sample.value.is_finite() || sample.value < 0.0 {
                return Err(AnalyticsError::invalid_series(
                    metric,
                    format!("value {} on {} is not a non-negative number", sample.value, sample.date),
                ));
            }
        }

        if let Some(pair) = samples.windows(2).find(|pair| pair[0].date >= pair[1].date) {
            return Err(AnalyticsError::invalid_series(
                metric,
                format!(
                    "sample dated {} does not follow {}",
                    pair[1].date, pair[0].date
                ),
            ));
        }

        Ok(Self { metric, samples })
    }

    /// Build a daily series whose first sample falls on `start`
    ///
    /// # Errors
    ///
    /// Same as [`MetricSeries::new`].
    pub fn daily(
        metric: impl Into<String>,
        start: NaiveDate,
        values: &[f64],
    ) -> AnalyticsResult<Self> {
        let samples = values
            .iter()
            .zip(0_i64..)
            .map(|(&value, offset)| MetricSample::new(start + Duration::days(offset), value))
            .collect();
        Self::new(metric, samples)
    }

    /// Metric display name
    #[must_use]
    pub fn metric(&self) -> &str {
        &self.metric
    }

    /// All samples, oldest first
    #[must_use]
    pub fn samples(&self) -> &[MetricSample] {
        &self.samples
    }

    /// Sample values, oldest first
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.value).collect()
    }

    /// Number of samples
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always `false` for a constructed series
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Date of the first sample
    #[must_use]
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.samples.first().map(|s| s.date)
    }

    /// Date of the latest sample
    #[must_use]
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.samples.last().map(|s| s.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    #[test]
    fn test_empty_series_is_rejected() {
        let err = MetricSeries::new("Protein", Vec::new()).unwrap_err();
        assert!(matches!(err, AnalyticsError::EmptyInput(_)));
    }

    #[test]
    fn test_negative_value_is_rejected() {
        let err = MetricSeries::new("Protein", vec![MetricSample::new(day(1), -1.0)]).unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidSeries { .. }));
    }

    #[test]
    fn test_duplicate_dates_are_rejected() {
        let samples = vec![MetricSample::new(day(2), 1.0), MetricSample::new(day(2), 2.0)];
        assert!(MetricSeries::new("Creatine", samples).is_err());
    }

    #[test]
    fn test_daily_series_spacing() {
        let series = MetricSeries::daily("Creatine", day(1), &[5.0, 5.0, 4.0]).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.last_date(), Some(day(3)));
        assert_eq!(series.values(), vec![5.0, 5.0, 4.0]);
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"{"metric":"Creatine","samples":[]}"#;
        assert!(serde_json::from_str::<MetricSeries>(json).is_err());
    }
}
