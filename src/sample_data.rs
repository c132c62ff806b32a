// ABOUTME: Seedable sample athlete generator and an in-memory series provider
// ABOUTME: Produces deterministic metrics and intake series for demos, tests, and benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Sample data for the analytics engines
//!
//! The generator draws from an injected [`Rng`]; [`SampleSeriesGenerator::from_seed`]
//! wraps a `ChaCha8Rng` so the same seed always produces the same athlete.
//! Nothing here is used by the engines themselves.

use athlete_core::errors::{AnalyticsError, AnalyticsResult};
use athlete_core::models::{CategoryMetrics, MetricSeries};
use athlete_core::provider::SeriesProvider;
use athlete_intelligence::StatsKit;
use chrono::NaiveDate;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

/// Shape of a generated daily series
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesShape {
    /// Metric name
    pub metric: String,
    /// Date of the first sample
    pub start: NaiveDate,
    /// Number of daily samples
    pub days: usize,
    /// Typical daily value
    pub base: f64,
    /// Maximum deviation from `base` on a logged day
    pub spread: f64,
    /// Probability of a day logged as zero
    pub miss_rate: f64,
}

impl SeriesShape {
    /// Shape with a 10% spread and no missed days
    #[must_use]
    pub fn new(metric: impl Into<String>, start: NaiveDate, days: usize, base: f64) -> Self {
        Self {
            metric: metric.into(),
            start,
            days,
            base,
            spread: base.abs() * 0.1,
            miss_rate: 0.0,
        }
    }

    /// Set the maximum daily deviation
    #[must_use]
    pub const fn spread(mut self, spread: f64) -> Self {
        self.spread = spread;
        self
    }

    /// Set the probability of a missed day
    #[must_use]
    pub const fn miss_rate(mut self, miss_rate: f64) -> Self {
        self.miss_rate = miss_rate;
        self
    }

    /// Check that the shape can be sampled
    ///
    /// # Errors
    ///
    /// Returns `InvalidSeries` when `base` or `spread` is not a finite
    /// number, `base` is negative, or `miss_rate` lies outside [0, 1]
    pub fn check(&self) -> AnalyticsResult<()> {
        if !self.base.is_finite() || self.base < 0.0 {
            return Err(AnalyticsError::invalid_series(
                self.metric.as_str(),
                format!("base must be a finite non-negative number, got {}", self.base),
            ));
        }
        if !self.spread.is_finite() {
            return Err(AnalyticsError::invalid_series(
                self.metric.as_str(),
                format!("spread must be finite, got {}", self.spread),
            ));
        }
        if !(0.0..=1.0).contains(&self.miss_rate) {
            return Err(AnalyticsError::invalid_series(
                self.metric.as_str(),
                format!("miss rate must be between 0 and 1, got {}", self.miss_rate),
            ));
        }
        Ok(())
    }
}

/// A complete generated athlete
#[derive(Debug, Clone)]
pub struct SampleAthlete {
    /// Display name
    pub name: String,
    /// Raw metrics for the score engine
    pub metrics: CategoryMetrics,
    /// Daily intake series
    pub provider: InMemorySeriesProvider,
    /// Targets keyed by metric name
    pub targets: HashMap<String, f64>,
    /// Weekly adherence percentages used as the correlation driver
    pub weekly_adherence: Vec<f64>,
    /// Weekly outcome scores aligned with `weekly_adherence`
    pub weekly_outcomes: Vec<(String, Vec<f64>)>,
}

/// Tracked intakes of a sample athlete: name, target, typical value, miss rate
const SAMPLE_INTAKES: [(&str, f64, f64, f64); 3] = [
    ("Creatine", 5.0, 5.0, 0.05),
    ("Protein", 180.0, 150.0, 0.0),
    ("Water", 3.5, 3.4, 0.2),
];

/// Weeks of driver and outcome history for correlation
const SAMPLE_WEEKS: usize = 12;

/// Deterministic sample generator over an injected RNG
#[derive(Debug, Clone)]
pub struct SampleSeriesGenerator<R: Rng> {
    rng: R,
}

impl SampleSeriesGenerator<ChaCha8Rng> {
    /// Create a generator with a deterministic seed for reproducibility
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> SampleSeriesGenerator<R> {
    /// Wrap an existing RNG
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Raw values for a shape, oldest first, rounded to one decimal
    pub fn values(&mut self, shape: &SeriesShape) -> Vec<f64> {
        // Unsampleable parameters degrade to a flat, fully logged series
        let spread = if shape.spread.is_finite() {
            shape.spread.abs()
        } else {
            0.0
        };
        let miss_rate = if shape.miss_rate.is_nan() {
            0.0
        } else {
            shape.miss_rate.clamp(0.0, 1.0)
        };
        (0..shape.days)
            .map(|_| {
                if self.rng.gen_bool(miss_rate) {
                    0.0
                } else {
                    let jitter = self.rng.gen_range(-spread..=spread);
                    StatsKit::round_to((shape.base + jitter).max(0.0), 1)
                }
            })
            .collect()
    }

    /// A validated daily series for a shape
    ///
    /// # Errors
    ///
    /// Returns `InvalidSeries` when the shape fails [`SeriesShape::check`]
    /// and `EmptyInput` when it has zero days
    pub fn daily_series(&mut self, shape: &SeriesShape) -> AnalyticsResult<MetricSeries> {
        shape.check()?;
        let values = self.values(shape);
        MetricSeries::daily(shape.metric.clone(), shape.start, &values)
    }

    /// Plausible raw metrics for an intermediate-to-advanced lifter
    pub fn category_metrics(&mut self) -> CategoryMetrics {
        let bodyweight = self.one_decimal(150.0, 230.0);
        CategoryMetrics {
            bench: self.one_decimal(1.0, 1.8) * bodyweight,
            squat: self.one_decimal(1.4, 2.5) * bodyweight,
            deadlift: self.one_decimal(1.7, 2.8) * bodyweight,
            bodyweight,
            vo2_max: self.one_decimal(38.0, 60.0),
            resting_hr: self.one_decimal(45.0, 72.0),
            body_fat_pct: self.one_decimal(9.0, 22.0),
            lean_mass: self.one_decimal(0.72, 0.9) * bodyweight,
            readiness: self.one_decimal(55.0, 95.0),
            hrv: self.one_decimal(45.0, 95.0),
        }
    }

    /// A roster of independently drawn athletes
    pub fn roster(&mut self, size: usize) -> Vec<CategoryMetrics> {
        (0..size).map(|_| self.category_metrics()).collect()
    }

    /// Outcome values linearly tied to `driver` plus uniform noise
    pub fn correlated_outcome(
        &mut self,
        driver: &[f64],
        intercept: f64,
        slope: f64,
        noise: f64,
    ) -> Vec<f64> {
        let noise = noise.abs();
        driver
            .iter()
            .map(|x| {
                let jitter = self.rng.gen_range(-noise..=noise);
                StatsKit::round_to(slope.mul_add(*x, intercept + jitter).max(0.0), 1)
            })
            .collect()
    }

    /// A full sample athlete with `days` of intake history starting on `start`
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` when `days` is zero
    pub fn athlete(
        &mut self,
        name: impl Into<String>,
        start: NaiveDate,
        days: usize,
    ) -> AnalyticsResult<SampleAthlete> {
        let metrics = self.category_metrics();

        let mut provider = InMemorySeriesProvider::new();
        let mut targets = HashMap::new();
        for (metric, target, base, miss_rate) in SAMPLE_INTAKES {
            let shape = SeriesShape::new(metric, start, days, base).miss_rate(miss_rate);
            provider.insert(self.daily_series(&shape)?);
            targets.insert(metric.to_owned(), target);
        }

        let weekly_adherence: Vec<f64> = (0..SAMPLE_WEEKS)
            .map(|_| self.one_decimal(55.0, 100.0))
            .collect();
        let weekly_outcomes = vec![
            (
                "Strength".to_owned(),
                self.correlated_outcome(&weekly_adherence, 40.0, 0.45, 2.0),
            ),
            (
                "Endurance".to_owned(),
                self.correlated_outcome(&weekly_adherence, 60.0, 0.15, 6.0),
            ),
            (
                "Recovery".to_owned(),
                self.correlated_outcome(&weekly_adherence, 75.0, 0.0, 8.0),
            ),
        ];

        Ok(SampleAthlete {
            name: name.into(),
            metrics,
            provider,
            targets,
            weekly_adherence,
            weekly_outcomes,
        })
    }

    fn one_decimal(&mut self, low: f64, high: f64) -> f64 {
        StatsKit::round_to(self.rng.gen_range(low..=high), 1)
    }
}

/// Series provider backed by a vector, preserving insertion order
#[derive(Debug, Clone, Default)]
pub struct InMemorySeriesProvider {
    series: Vec<MetricSeries>,
}

impl InMemorySeriesProvider {
    /// Empty provider
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a series, replacing any existing series with the same metric name
    pub fn insert(&mut self, series: MetricSeries) {
        if let Some(existing) = self
            .series
            .iter_mut()
            .find(|s| s.metric() == series.metric())
        {
            *existing = series;
        } else {
            self.series.push(series);
        }
    }

    /// Number of stored series
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether no series are stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl FromIterator<MetricSeries> for InMemorySeriesProvider {
    fn from_iter<I: IntoIterator<Item = MetricSeries>>(iter: I) -> Self {
        let mut provider = Self::new();
        for series in iter {
            provider.insert(series);
        }
        provider
    }
}

impl SeriesProvider for InMemorySeriesProvider {
    fn metric_names(&self) -> Vec<String> {
        self.series.iter().map(|s| s.metric().to_owned()).collect()
    }

    fn series(&self, metric: &str) -> Option<MetricSeries> {
        self.series.iter().find(|s| s.metric() == metric).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    #[test]
    fn test_values_stay_non_negative_and_sized() {
        let mut generator = SampleSeriesGenerator::from_seed(7);
        let shape = SeriesShape::new("Water", start(), 60, 0.5)
            .spread(2.0)
            .miss_rate(0.3);
        let values = generator.values(&shape);
        assert_eq!(values.len(), 60);
        assert!(values.iter().all(|v| *v >= 0.0));
    }

    #[test]
    fn test_zero_days_is_empty_input() {
        let mut generator = SampleSeriesGenerator::from_seed(7);
        let shape = SeriesShape::new("Creatine", start(), 0, 5.0);
        assert!(generator.daily_series(&shape).is_err());
    }

    #[test]
    fn test_non_finite_shape_is_rejected() {
        let mut generator = SampleSeriesGenerator::from_seed(7);
        let infinite_base = SeriesShape::new("Creatine", start(), 10, f64::INFINITY);
        assert!(matches!(
            generator.daily_series(&infinite_base),
            Err(AnalyticsError::InvalidSeries { .. })
        ));

        let nan_spread = SeriesShape::new("Creatine", start(), 10, 5.0).spread(f64::NAN);
        assert!(matches!(
            generator.daily_series(&nan_spread),
            Err(AnalyticsError::InvalidSeries { .. })
        ));

        // Raw sampling never panics on the same shapes
        let values = generator.values(&nan_spread.miss_rate(f64::NAN));
        assert!(values.iter().all(|v| (*v - 5.0).abs() < 1e-12));
    }

    #[test]
    fn test_provider_replaces_same_metric() {
        let mut provider = InMemorySeriesProvider::new();
        provider.insert(MetricSeries::daily("Creatine", start(), &[1.0]).unwrap());
        provider.insert(MetricSeries::daily("Protein", start(), &[2.0]).unwrap());
        provider.insert(MetricSeries::daily("Creatine", start(), &[3.0, 4.0]).unwrap());

        assert_eq!(provider.metric_names(), vec!["Creatine", "Protein"]);
        assert_eq!(provider.series("Creatine").unwrap().len(), 2);
        assert!(provider.series("Water").is_none());
    }
}
