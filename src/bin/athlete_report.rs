// ABOUTME: Dashboard report generator for a seeded sample athlete
// ABOUTME: Runs the score, insight, and correlation engines and prints the report as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Athlete report binary.
//!
//! ```bash
//! cargo run --bin athlete-report -- --seed 42 --pretty
//! LOG_FORMAT=json RUST_LOG=debug cargo run --bin athlete-report
//! ```

use anyhow::Result;
use athlete_analytics::logging::LoggingConfig;
use athlete_analytics::report::{ReportBuilder, ReportInput};
use athlete_analytics::sample_data::SampleSeriesGenerator;
use athlete_analytics::{InsightEngine, LabeledSeries};
use chrono::NaiveDate;
use clap::Parser;
use std::io::{self, Write};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "athlete-report",
    about = "Athlete Analytics Dashboard Report",
    long_about = "Build a deterministic sample athlete and print the full dashboard report as JSON"
)]
struct Args {
    /// Random seed for the sample athlete
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Athlete display name
    #[arg(long, default_value = "Sample Athlete")]
    name: String,

    /// Days of intake history
    #[arg(long, default_value = "42")]
    days: usize,

    /// Date of the first intake sample
    #[arg(long, default_value = "2025-01-01")]
    start: NaiveDate,

    /// Add the consistency streak rule to the insight engine
    #[arg(long)]
    streaks: bool,

    /// Pretty-print the JSON document
    #[arg(long)]
    pretty: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut logging = LoggingConfig::from_env();
    if args.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    info!(seed = args.seed, days = args.days, "Generating sample athlete");
    let athlete = SampleSeriesGenerator::from_seed(args.seed).athlete(
        args.name.as_str(),
        args.start,
        args.days,
    )?;

    let outcomes: Vec<LabeledSeries<'_>> = athlete
        .weekly_outcomes
        .iter()
        .map(|(label, values)| LabeledSeries::new(label, values))
        .collect();

    let mut builder = ReportBuilder::from_global();
    if args.streaks {
        builder = builder.with_insight_engine(InsightEngine::from_global().with_streak_rule());
    }

    let report = builder.build(&ReportInput {
        athlete: &athlete.name,
        metrics: &athlete.metrics,
        provider: &athlete.provider,
        targets: &athlete.targets,
        driver: LabeledSeries::new("Adherence", &athlete.weekly_adherence),
        outcomes: &outcomes,
    });

    let document = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{document}")?;
    Ok(())
}
