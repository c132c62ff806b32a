// ABOUTME: Correlation analyzer configuration for strength cut-offs and reported precision
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ConfigError;
use athlete_core::constants::correlation;
use serde::{Deserialize, Serialize};

/// Correlation analyzer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationConfig {
    /// |r| above this is strong
    pub strong_threshold: f64,
    /// |r| at or above this is at least moderate
    pub moderate_threshold: f64,
    /// Decimal places kept in reported coefficients
    pub reported_decimals: u32,
}

impl CorrelationConfig {
    /// Validate strength cut-offs and reported precision
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bounds = [self.moderate_threshold, self.strong_threshold];
        if bounds.iter().any(|t| !t.is_finite() || *t <= 0.0 || *t >= 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Correlation thresholds must lie in (0, 1)",
            ));
        }
        if self.moderate_threshold >= self.strong_threshold {
            return Err(ConfigError::InvalidRange(
                "moderate_threshold must be < strong_threshold",
            ));
        }
        if self.reported_decimals > 6 {
            return Err(ConfigError::ValueOutOfRange(
                "Reported decimals must be at most 6",
            ));
        }
        Ok(())
    }
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            strong_threshold: correlation::STRONG_THRESHOLD,
            moderate_threshold: correlation::MODERATE_THRESHOLD,
            reported_decimals: correlation::REPORTED_DECIMALS,
        }
    }
}
