// ABOUTME: Integration tests for driver-versus-outcome correlation analysis
// ABOUTME: Covers perfect, inverse, undefined, and mismatched series plus strength classes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs, clippy::float_cmp)]

mod common;

use athlete_analytics::{AnalyticsError, CorrelationAnalyzer, LabeledSeries, RelationshipStrength};

const DRIVER: [f64; 4] = [1.0, 2.0, 3.0, 4.0];

#[test]
fn test_perfect_and_inverse_pairs() {
    common::init_test_logging();
    let up = [1.0, 2.0, 3.0, 4.0];
    let down = [4.0, 3.0, 2.0, 1.0];
    let summary = CorrelationAnalyzer::new()
        .analyze(
            LabeledSeries::new("Adherence", &DRIVER),
            &[
                LabeledSeries::new("Strength", &up),
                LabeledSeries::new("Body Fat", &down),
            ],
        )
        .unwrap();

    assert_eq!(summary.results.len(), 2);
    assert_eq!(summary.results[0].pair_label, "Adherence vs Strength");
    assert_eq!(summary.results[0].r, Some(1.0));
    assert_eq!(summary.results[1].r, Some(-1.0));
    assert_eq!(summary.strongest.unwrap().outcome, "Strength");
    assert_eq!(summary.strength, Some(RelationshipStrength::Strong));
}

#[test]
fn test_constant_outcome_is_reported_as_undefined() {
    let flat = [1.0, 1.0, 1.0, 1.0];
    let noisy = [2.0, 1.0, 4.0, 3.0];
    let summary = CorrelationAnalyzer::new()
        .analyze(
            LabeledSeries::new("Adherence", &DRIVER),
            &[
                LabeledSeries::new("Recovery", &flat),
                LabeledSeries::new("Endurance", &noisy),
            ],
        )
        .unwrap();

    assert!(summary.results[0].undefined);
    assert_eq!(summary.results[0].r, None);
    // r = 0.6
    assert_eq!(summary.results[1].r, Some(0.6));
    assert_eq!(summary.strongest.unwrap().outcome, "Endurance");
    assert_eq!(summary.strength, Some(RelationshipStrength::Moderate));
}

#[test]
fn test_constant_driver_leaves_no_strongest_link() {
    let summary = CorrelationAnalyzer::new()
        .analyze(
            LabeledSeries::new("Adherence", &[1.0, 1.0, 1.0, 1.0]),
            &[LabeledSeries::new("Strength", &DRIVER)],
        )
        .unwrap();
    assert!(summary.results[0].undefined);
    assert!(summary.strongest.is_none());
    assert!(summary.strength.is_none());
}

#[test]
fn test_length_mismatch_fails_the_whole_call() {
    let err = CorrelationAnalyzer::new()
        .analyze(
            LabeledSeries::new("Adherence", &DRIVER),
            &[
                LabeledSeries::new("Strength", &DRIVER),
                LabeledSeries::new("Power", &[1.0, 2.0, 3.0]),
            ],
        )
        .unwrap_err();
    assert_eq!(
        err,
        AnalyticsError::LengthMismatch {
            expected: 4,
            actual: 3
        }
    );
}

#[test]
fn test_empty_driver_is_rejected() {
    let err = CorrelationAnalyzer::new()
        .analyze(LabeledSeries::new("Adherence", &[]), &[])
        .unwrap_err();
    assert!(matches!(err, AnalyticsError::EmptyInput(_)));
}

#[test]
fn test_weak_relationship_classification() {
    let driver = [1.0, 2.0, 3.0, 4.0, 5.0];
    let scattered = [3.0, 1.0, 4.0, 5.0, 1.0];
    let summary = CorrelationAnalyzer::new()
        .analyze(
            LabeledSeries::new("Adherence", &driver),
            &[LabeledSeries::new("Power", &scattered)],
        )
        .unwrap();
    let r = summary.results[0].r.unwrap();
    assert!(r.abs() < 0.4, "r = {r}");
    assert_eq!(summary.strength, Some(RelationshipStrength::Weak));
}

#[test]
fn test_summary_json_shape() {
    let summary = CorrelationAnalyzer::new()
        .analyze(
            LabeledSeries::new("Adherence", &DRIVER),
            &[LabeledSeries::new("Strength", &DRIVER)],
        )
        .unwrap();
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["results"][0]["pairLabel"], "Adherence vs Strength");
    assert_eq!(json["strength"], "strong");
}
