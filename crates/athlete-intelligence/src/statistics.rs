// ABOUTME: Primitive numeric utilities shared by the scoring, insight, and correlation engines
// ABOUTME: Mean, adherence rate, trend direction, and Pearson correlation without silent NaN results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: sample counts are small

//! # Statistics Kit
//!
//! Pure functions over borrowed slices. Every function either returns a
//! finite value or an explicit [`AnalyticsError`]; none of them produce
//! `NaN` or infinities from degenerate input.

use athlete_core::constants::insight_rules::ADHERENCE_TARGET_FACTOR;
use athlete_core::errors::{AnalyticsError, AnalyticsResult};
use athlete_core::models::TrendDirection;

/// Statistical helpers used by every engine
pub struct StatsKit;

impl StatsKit {
    /// Arithmetic mean
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` when `values` is empty
    pub fn mean(values: &[f64]) -> AnalyticsResult<f64> {
        if values.is_empty() {
            return Err(AnalyticsError::EmptyInput("cannot average an empty window"));
        }
        Ok(values.iter().sum::<f64>() / values.len() as f64)
    }

    /// Percentage of values reaching 80% of `target`, rounded to the nearest integer
    ///
    /// A non-positive target is a degenerate goal: adherence is 100 when every
    /// value is zero and 0 otherwise.
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` when `values` is empty
    pub fn adherence_rate(values: &[f64], target: f64) -> AnalyticsResult<u8> {
        Self::adherence_rate_with_factor(values, target, ADHERENCE_TARGET_FACTOR)
    }

    /// [`StatsKit::adherence_rate`] with an explicit fraction of target
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` when `values` is empty
    pub fn adherence_rate_with_factor(
        values: &[f64],
        target: f64,
        factor: f64,
    ) -> AnalyticsResult<u8> {
        if values.is_empty() {
            return Err(AnalyticsError::EmptyInput(
                "cannot compute adherence over an empty window",
            ));
        }

        if target <= 0.0 {
            let all_zero = values.iter().all(|v| v.abs() < f64::EPSILON);
            return Ok(if all_zero { 100 } else { 0 });
        }

        let threshold = target * factor;
        let met = values.iter().filter(|v| **v >= threshold).count();
        let pct = (met as f64 / values.len() as f64 * 100.0).round();
        Ok(to_percent(pct))
    }

    /// Direction of `recent_avg` relative to `baseline_avg`
    ///
    /// Differences within `epsilon` count as stable.
    #[must_use]
    pub fn trend_direction(recent_avg: f64, baseline_avg: f64, epsilon: f64) -> TrendDirection {
        if recent_avg > baseline_avg + epsilon {
            TrendDirection::Up
        } else if recent_avg < baseline_avg - epsilon {
            TrendDirection::Down
        } else {
            TrendDirection::Stable
        }
    }

    /// Pearson correlation coefficient in `[-1, 1]`
    ///
    /// # Errors
    ///
    /// - `LengthMismatch` when the series differ in length
    /// - `EmptyInput` when both are empty
    /// - `DegenerateSeries` when fewer than two samples exist or either series
    ///   has zero variance
    pub fn pearson_correlation(x: &[f64], y: &[f64]) -> AnalyticsResult<f64> {
        if x.len() != y.len() {
            return Err(AnalyticsError::LengthMismatch {
                expected: x.len(),
                actual: y.len(),
            });
        }
        if x.is_empty() {
            return Err(AnalyticsError::EmptyInput("cannot correlate empty series"));
        }
        if x.len() < 2 {
            return Err(AnalyticsError::degenerate(
                "correlation needs at least two paired samples",
            ));
        }

        let mean_x = Self::mean(x)?;
        let mean_y = Self::mean(y)?;

        let mut sxx = 0.0;
        let mut syy = 0.0;
        let mut sxy = 0.0;
        for (&xi, &yi) in x.iter().zip(y) {
            let dx = xi - mean_x;
            let dy = yi - mean_y;
            sxx = dx.mul_add(dx, sxx);
            syy = dy.mul_add(dy, syy);
            sxy = dx.mul_add(dy, sxy);
        }

        if !has_variance(x, sxx) {
            return Err(AnalyticsError::degenerate("first series has zero variance"));
        }
        if !has_variance(y, syy) {
            return Err(AnalyticsError::degenerate("second series has zero variance"));
        }

        Ok((sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0))
    }

    /// Percentage change from `from` to `to`
    ///
    /// # Errors
    ///
    /// Returns `InvalidMetrics` when `from` is not a positive number
    pub fn percent_change(from: f64, to: f64) -> AnalyticsResult<f64> {
        if !from.is_finite() || from <= 0.0 {
            return Err(AnalyticsError::invalid_metrics(format!(
                "percent change needs a positive base, got {from}"
            )));
        }
        Ok((to - from) / from * 100.0)
    }

    /// Round half away from zero to `decimals` places
    #[must_use]
    pub fn round_to(value: f64, decimals: u32) -> f64 {
        let factor = 10_f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
        (value * factor).round() / factor
    }

    /// The last `count` values, or all of them when fewer exist
    #[must_use]
    pub fn trailing(values: &[f64], count: usize) -> &[f64] {
        &values[values.len().saturating_sub(count)..]
    }
}

/// Variance is treated as zero when it vanishes relative to the magnitude of
/// the values, so constant series whose mean picked up rounding error are
/// still degenerate.
fn has_variance(values: &[f64], sum_sq_dev: f64) -> bool {
    let magnitude: f64 = values.iter().map(|v| v * v).sum();
    sum_sq_dev > f64::EPSILON * magnitude.max(f64::MIN_POSITIVE)
}

/// Convert an already-rounded percentage to `u8`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Safe: clamped to 0..=100
fn to_percent(value: f64) -> u8 {
    value.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_of_empty_slice_fails() {
        assert!(matches!(
            StatsKit::mean(&[]),
            Err(AnalyticsError::EmptyInput(_))
        ));
    }

    #[test]
    fn test_mean_basic() {
        let mean = StatsKit::mean(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!((mean - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_adherence_threshold_is_eighty_percent_of_target() {
        // 4.0 == 5.0 * 0.8 counts, 3.9 does not
        let rate = StatsKit::adherence_rate(&[4.0, 3.9, 5.0, 0.0], 5.0).unwrap();
        assert_eq!(rate, 50);
    }

    #[test]
    fn test_adherence_rounds_to_nearest() {
        // 2 of 3 = 66.67%
        let rate = StatsKit::adherence_rate(&[5.0, 5.0, 1.0], 5.0).unwrap();
        assert_eq!(rate, 67);
    }

    #[test]
    fn test_adherence_with_non_positive_target() {
        assert_eq!(StatsKit::adherence_rate(&[0.0, 0.0], 0.0).unwrap(), 100);
        assert_eq!(StatsKit::adherence_rate(&[0.0, 1.0], 0.0).unwrap(), 0);
        assert_eq!(StatsKit::adherence_rate(&[0.0], -2.0).unwrap(), 100);
    }

    #[test]
    fn test_adherence_is_monotonic() {
        let target = 10.0;
        let mut values = vec![0.0; 20];
        let mut previous = StatsKit::adherence_rate(&values, target).unwrap();
        for i in 0..values.len() {
            values[i] = target;
            let current = StatsKit::adherence_rate(&values, target).unwrap();
            assert!(current >= previous);
            previous = current;
        }
        assert_eq!(previous, 100);
    }

    #[test]
    fn test_trend_direction() {
        assert_eq!(StatsKit::trend_direction(5.5, 5.0, 0.0), TrendDirection::Up);
        assert_eq!(StatsKit::trend_direction(4.5, 5.0, 0.0), TrendDirection::Down);
        assert_eq!(StatsKit::trend_direction(5.0, 5.0, 0.0), TrendDirection::Stable);
        assert_eq!(StatsKit::trend_direction(5.2, 5.0, 0.5), TrendDirection::Stable);
    }

    #[test]
    fn test_pearson_perfect_correlations() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let r = StatsKit::pearson_correlation(&x, &x).unwrap();
        assert!((r - 1.0).abs() < 1e-12);

        let r = StatsKit::pearson_correlation(&x, &[4.0, 3.0, 2.0, 1.0]).unwrap();
        assert!((r + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_constant_series_is_degenerate() {
        let err = StatsKit::pearson_correlation(&[1.0, 1.0, 1.0, 1.0], &[1.0, 2.0, 3.0, 4.0])
            .unwrap_err();
        assert!(matches!(err, AnalyticsError::DegenerateSeries(_)));

        // Constant series whose mean is not exactly representable
        let err = StatsKit::pearson_correlation(&[0.1, 0.1, 0.1], &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, AnalyticsError::DegenerateSeries(_)));
    }

    #[test]
    fn test_pearson_length_mismatch() {
        let err = StatsKit::pearson_correlation(&[1.0, 2.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            AnalyticsError::LengthMismatch {
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn test_pearson_single_sample_is_degenerate() {
        assert!(matches!(
            StatsKit::pearson_correlation(&[1.0], &[2.0]),
            Err(AnalyticsError::DegenerateSeries(_))
        ));
    }

    #[test]
    fn test_percent_change_requires_positive_base() {
        assert!(StatsKit::percent_change(0.0, 5.0).is_err());
        let change = StatsKit::percent_change(4.0, 5.0).unwrap();
        assert!((change - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_round_to() {
        assert!((StatsKit::round_to(0.876, 2) - 0.88).abs() < 1e-12);
        assert!((StatsKit::round_to(-0.876, 2) + 0.88).abs() < 1e-12);
        assert!((StatsKit::round_to(2.96, 1) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_trailing_window() {
        let values = [1.0, 2.0, 3.0];
        assert_eq!(StatsKit::trailing(&values, 2), &[2.0, 3.0]);
        assert_eq!(StatsKit::trailing(&values, 7), &values);
    }
}
