// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging setup and reference athletes and series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `athlete_analytics`

use athlete_analytics::{CategoryMetrics, MetricSeries};
use chrono::NaiveDate;
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; default to WARN for quiet tests
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// First day of every fixture series
pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

/// Daily series starting at [`start_date`]
pub fn daily(metric: &str, values: &[f64]) -> MetricSeries {
    MetricSeries::daily(metric, start_date(), values).unwrap()
}

/// Reference athlete: 200 lb, 1.65/2.3/2.6 bodyweight lift ratios
pub fn reference_athlete() -> CategoryMetrics {
    CategoryMetrics {
        bench: 330.0,
        squat: 460.0,
        deadlift: 520.0,
        bodyweight: 200.0,
        vo2_max: 53.7,
        resting_hr: 52.0,
        body_fat_pct: 13.5,
        lean_mass: 173.0,
        readiness: 79.0,
        hrv: 82.0,
    }
}
