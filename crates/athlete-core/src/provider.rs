// ABOUTME: Time-series provider seam between data sources and the analytics engines
// ABOUTME: Engines consume series through this trait and never know where samples come from
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::MetricSeries;

/// Source of dated samples per metric
///
/// Implementations must be cheap to query repeatedly and return series that
/// already satisfy the `MetricSeries` invariants.
pub trait SeriesProvider: Send + Sync {
    /// Metric names this provider can serve, in display order
    fn metric_names(&self) -> Vec<String>;

    /// Series for `metric`, or `None` when the provider has no data for it
    fn series(&self, metric: &str) -> Option<MetricSeries>;
}
