// ABOUTME: Sample series seeder printing deterministic daily metric samples as JSON lines
// ABOUTME: Feeds demos and manual engine runs without a real time-series provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Sample series seeder.
//!
//! Prints one `MetricSample` JSON object per line on stdout; logs go to stderr.
//!
//! ```bash
//! cargo run --bin seed-sample-series -- --metric Protein --days 30 --base 160 --target 180 --seed 42
//! ```

use athlete_analytics::logging::LoggingConfig;
use athlete_analytics::sample_data::{SampleSeriesGenerator, SeriesShape};
use athlete_analytics::{AnalyticsError, MetricSample};
use chrono::NaiveDate;
use clap::Parser;
use std::io::{self, BufWriter, Write};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::info;

/// CLI-specific error type for the seed binary
#[derive(Error, Debug)]
enum SeedError {
    #[error("Analytics error: {0}")]
    Analytics(#[from] AnalyticsError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Output error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Validation(String),
}

type SeedResult<T> = Result<T, SeedError>;

#[derive(Parser)]
#[command(
    name = "seed-sample-series",
    about = "Athlete Analytics Sample Series Seeder",
    long_about = "Print seeded daily samples for one metric as JSON lines"
)]
struct SeedArgs {
    /// Metric name
    #[arg(long, default_value = "Creatine")]
    metric: String,

    /// Number of daily samples
    #[arg(long, default_value = "30")]
    days: usize,

    /// Typical daily value
    #[arg(long, default_value = "5.0")]
    base: f64,

    /// Target attached to every sample (optional)
    #[arg(long)]
    target: Option<f64>,

    /// Maximum daily deviation from the base (default: 10% of base)
    #[arg(long)]
    spread: Option<f64>,

    /// Probability of a missed day logged as zero
    #[arg(long, default_value = "0.0")]
    miss_rate: f64,

    /// Date of the first sample
    #[arg(long, default_value = "2025-01-01")]
    start: NaiveDate,

    /// Random seed for reproducible data (optional)
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> SeedResult<()> {
    let args = SeedArgs::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    LoggingConfig::from_env()
        .with_level(log_level)
        .init()
        .map_err(|e| SeedError::Validation(e.to_string()))?;

    if !(0.0..=1.0).contains(&args.miss_rate) {
        return Err(SeedError::Validation(format!(
            "--miss-rate must be between 0 and 1, got {}",
            args.miss_rate
        )));
    }
    if !args.base.is_finite() || args.base < 0.0 {
        return Err(SeedError::Validation(format!(
            "--base must be a finite non-negative number, got {}",
            args.base
        )));
    }
    if let Some(spread) = args.spread.filter(|s| !s.is_finite()) {
        return Err(SeedError::Validation(format!(
            "--spread must be finite, got {spread}"
        )));
    }

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(12345, |d| d.as_secs())
    });
    info!(metric = %args.metric, days = args.days, seed, "Seeding sample series");

    let mut shape = SeriesShape::new(args.metric.as_str(), args.start, args.days, args.base)
        .miss_rate(args.miss_rate);
    if let Some(spread) = args.spread {
        shape = shape.spread(spread);
    }

    let series = SampleSeriesGenerator::from_seed(seed).daily_series(&shape)?;

    let mut out = BufWriter::new(io::stdout().lock());
    for sample in series.samples() {
        let sample: MetricSample = args
            .target
            .map_or(*sample, |target| sample.with_target(target));
        serde_json::to_writer(&mut out, &sample)?;
        writeln!(out)?;
    }
    out.flush()?;

    info!(samples = series.len(), "Done");
    Ok(())
}
