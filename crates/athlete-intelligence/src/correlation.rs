// ABOUTME: Correlation analysis between a driver series and labelled outcome series
// ABOUTME: Reports every pair, flags undefined ones, and classifies the strongest link
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::analytics::CorrelationConfig;
use crate::config::{AnalyticsConfig, ConfigError};
use crate::statistics::StatsKit;
use athlete_core::errors::{AnalyticsError, AnalyticsResult};
use athlete_core::models::{CorrelationResult, CorrelationSummary, RelationshipStrength};
use tracing::{debug, warn};

/// A named series of values
#[derive(Debug, Clone, Copy)]
pub struct LabeledSeries<'a> {
    /// Display label
    pub label: &'a str,
    /// Values, aligned by index with every other series in the analysis
    pub values: &'a [f64],
}

impl<'a> LabeledSeries<'a> {
    /// Pair a label with its values
    #[must_use]
    pub const fn new(label: &'a str, values: &'a [f64]) -> Self {
        Self { label, values }
    }
}

/// Pairwise Pearson correlation between a driver and its outcomes
#[derive(Debug, Clone, Default)]
pub struct CorrelationAnalyzer {
    config: CorrelationConfig,
}

impl CorrelationAnalyzer {
    /// Analyzer with the reference cut-offs
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer with custom configuration
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when the strength cut-offs are out of order
    /// or outside (0, 1)
    pub fn with_config(config: CorrelationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Analyzer using the global analytics configuration
    #[must_use]
    pub fn from_global() -> Self {
        // Global configuration is validated when loaded
        Self {
            config: AnalyticsConfig::global().correlation.clone(),
        }
    }

    /// Correlate `driver` with each outcome
    ///
    /// Zero-variance pairs are reported with `undefined` set and skipped when
    /// picking the strongest link.
    ///
    /// # Errors
    ///
    /// Returns `LengthMismatch` when any outcome differs in length from the
    /// driver (checked first), and `EmptyInput` when the driver has no values
    pub fn analyze(
        &self,
        driver: LabeledSeries<'_>,
        outcomes: &[LabeledSeries<'_>],
    ) -> AnalyticsResult<CorrelationSummary> {
        if let Some(outcome) = outcomes
            .iter()
            .find(|o| o.values.len() != driver.values.len())
        {
            return Err(AnalyticsError::LengthMismatch {
                expected: driver.values.len(),
                actual: outcome.values.len(),
            });
        }
        if driver.values.is_empty() {
            return Err(AnalyticsError::EmptyInput("driver series has no values"));
        }

        let results = outcomes
            .iter()
            .map(|outcome| self.correlate(driver, *outcome))
            .collect::<AnalyticsResult<Vec<_>>>()?;

        let strongest = results
            .iter()
            .filter_map(|result| result.r.map(|r| (result, r.abs())))
            .fold(None::<(&CorrelationResult, f64)>, |best, (result, magnitude)| {
                match best {
                    Some((_, best_magnitude)) if best_magnitude >= magnitude => best,
                    _ => Some((result, magnitude)),
                }
            });

        let strength = strongest.map(|(_, magnitude)| self.classify(magnitude));
        let strongest = strongest.map(|(result, _)| result.clone());

        debug!(
            driver = driver.label,
            pairs = results.len(),
            strongest = strongest.as_ref().map(|s| s.pair_label.as_str()),
            "Computed correlation summary"
        );

        Ok(CorrelationSummary {
            driver: driver.label.to_owned(),
            results,
            strongest,
            strength,
        })
    }

    /// Strength class of a coefficient magnitude
    #[must_use]
    pub fn classify(&self, r: f64) -> RelationshipStrength {
        let magnitude = r.abs();
        if magnitude > self.config.strong_threshold {
            RelationshipStrength::Strong
        } else if magnitude >= self.config.moderate_threshold {
            RelationshipStrength::Moderate
        } else {
            RelationshipStrength::Weak
        }
    }

    fn correlate(
        &self,
        driver: LabeledSeries<'_>,
        outcome: LabeledSeries<'_>,
    ) -> AnalyticsResult<CorrelationResult> {
        let pair_label = format!("{} vs {}", driver.label, outcome.label);
        match StatsKit::pearson_correlation(driver.values, outcome.values) {
            Ok(r) => Ok(CorrelationResult {
                pair_label,
                outcome: outcome.label.to_owned(),
                r: Some(StatsKit::round_to(r, self.config.reported_decimals)),
                undefined: false,
            }),
            Err(AnalyticsError::DegenerateSeries(reason)) => {
                warn!(pair = %pair_label, %reason, "Correlation undefined for pair");
                Ok(CorrelationResult {
                    pair_label,
                    outcome: outcome.label.to_owned(),
                    r: None,
                    undefined: true,
                })
            }
            Err(other) => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_boundaries() {
        let analyzer = CorrelationAnalyzer::new();
        assert_eq!(analyzer.classify(0.71), RelationshipStrength::Strong);
        assert_eq!(analyzer.classify(0.7), RelationshipStrength::Moderate);
        assert_eq!(analyzer.classify(0.4), RelationshipStrength::Moderate);
        assert_eq!(analyzer.classify(0.39), RelationshipStrength::Weak);
        assert_eq!(analyzer.classify(-0.9), RelationshipStrength::Strong);
    }

    #[test]
    fn test_ties_keep_first_outcome() {
        let driver = [1.0, 2.0, 3.0, 4.0];
        let up = [2.0, 4.0, 6.0, 8.0];
        let down = [8.0, 6.0, 4.0, 2.0];
        let summary = CorrelationAnalyzer::new()
            .analyze(
                LabeledSeries::new("Adherence", &driver),
                &[
                    LabeledSeries::new("Strength", &up),
                    LabeledSeries::new("Endurance", &down),
                ],
            )
            .unwrap();
        assert_eq!(summary.strongest.unwrap().outcome, "Strength");
    }

    #[test]
    fn test_single_sample_pairs_are_undefined() {
        let summary = CorrelationAnalyzer::new()
            .analyze(
                LabeledSeries::new("Adherence", &[80.0]),
                &[LabeledSeries::new("Power", &[70.0])],
            )
            .unwrap();
        assert!(summary.results[0].undefined);
        assert!(summary.strongest.is_none());
    }

    #[test]
    fn test_length_checked_before_empty_driver() {
        let result = CorrelationAnalyzer::new().analyze(
            LabeledSeries::new("Adherence", &[]),
            &[LabeledSeries::new("Strength", &[1.0, 2.0])],
        );
        assert!(matches!(
            result,
            Err(AnalyticsError::LengthMismatch {
                expected: 0,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let config = CorrelationConfig {
            strong_threshold: 0.3,
            moderate_threshold: 0.6,
            ..CorrelationConfig::default()
        };
        assert!(matches!(
            CorrelationAnalyzer::with_config(config),
            Err(ConfigError::InvalidRange(_))
        ));
    }
}
