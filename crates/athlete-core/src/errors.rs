// ABOUTME: Analytics error taxonomy shared by every engine in the workspace
// ABOUTME: Maps each failure to a stable error code the presentation layer can render
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Analytics Errors
//!
//! Every engine function fails fast with one of these variants instead of
//! substituting `0`, `NaN` or an empty value for invalid input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable error codes exposed to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No samples to aggregate
    EmptyInput,
    /// Non-positive divisor or non-finite metric
    InvalidMetrics,
    /// Zero-variance series passed to correlation
    DegenerateSeries,
    /// Parallel series of unequal length
    LengthMismatch,
    /// Series violates ordering or value invariants
    InvalidSeries,
}

impl ErrorCode {
    /// Code as rendered in JSON payloads
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyInput => "EMPTY_INPUT",
            Self::InvalidMetrics => "INVALID_METRICS",
            Self::DegenerateSeries => "DEGENERATE_SERIES",
            Self::LengthMismatch => "LENGTH_MISMATCH",
            Self::InvalidSeries => "INVALID_SERIES",
        }
    }

    /// User-facing description of the insufficient-data state
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::EmptyInput => "No samples are available for this metric",
            Self::InvalidMetrics => "The supplied metrics cannot be scored",
            Self::DegenerateSeries => "The series does not vary enough to correlate",
            Self::LengthMismatch => "The compared series cover different periods",
            Self::InvalidSeries => "The series contains invalid samples",
        }
    }
}

/// Errors raised by the analytics engines
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    /// No samples to aggregate
    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    /// A divisor or metric is outside its valid domain
    #[error("invalid metrics: {0}")]
    InvalidMetrics(String),

    /// Correlation is undefined for the supplied series
    #[error("degenerate series: {0}")]
    DegenerateSeries(String),

    /// Parallel series do not share a length
    #[error("length mismatch: expected {expected} samples, got {actual}")]
    LengthMismatch {
        /// Length of the reference series
        expected: usize,
        /// Length of the offending series
        actual: usize,
    },

    /// Series violates the `MetricSeries` invariants
    #[error("invalid series '{metric}': {reason}")]
    InvalidSeries {
        /// Metric name of the rejected series
        metric: String,
        /// What was wrong with it
        reason: String,
    },
}

impl AnalyticsError {
    /// Create an invalid-metrics error
    #[must_use]
    pub fn invalid_metrics(message: impl Into<String>) -> Self {
        Self::InvalidMetrics(message.into())
    }

    /// Create a degenerate-series error
    #[must_use]
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateSeries(message.into())
    }

    /// Create an invalid-series error
    #[must_use]
    pub fn invalid_series(metric: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSeries {
            metric: metric.into(),
            reason: reason.into(),
        }
    }

    /// Stable code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::EmptyInput(_) => ErrorCode::EmptyInput,
            Self::InvalidMetrics(_) => ErrorCode::InvalidMetrics,
            Self::DegenerateSeries(_) => ErrorCode::DegenerateSeries,
            Self::LengthMismatch { .. } => ErrorCode::LengthMismatch,
            Self::InvalidSeries { .. } => ErrorCode::InvalidSeries,
        }
    }
}

/// Result alias used throughout the analytics crates
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_serialize_screaming_snake() {
        let json = serde_json::to_string(&ErrorCode::DegenerateSeries).unwrap();
        assert_eq!(json, "\"DEGENERATE_SERIES\"");
        assert_eq!(ErrorCode::DegenerateSeries.as_str(), "DEGENERATE_SERIES");
    }

    #[test]
    fn test_length_mismatch_message() {
        let err = AnalyticsError::LengthMismatch {
            expected: 30,
            actual: 29,
        };
        assert_eq!(err.code(), ErrorCode::LengthMismatch);
        assert_eq!(
            err.to_string(),
            "length mismatch: expected 30 samples, got 29"
        );
    }
}
