// ABOUTME: Configuration module for the athlete-intelligence crate
// ABOUTME: Re-exports the validated analytics configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Analytics engine configuration (scoring, insights, correlation)
pub mod analytics;

pub use analytics::{AnalyticsConfig, ConfigError};
