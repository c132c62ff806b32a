// ABOUTME: Core types and constants for the athlete analytics workspace
// ABOUTME: Foundation crate with error handling, data model, constants, and provider seam
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Athlete Core
//!
//! Foundation crate providing shared types and constants for athlete analytics.
//! This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: `AnalyticsError` taxonomy with stable `ErrorCode` values
//! - **constants**: Scoring weights, grade thresholds, and insight rule constants
//! - **models**: Metric samples and series plus the immutable result records
//! - **provider**: The `SeriesProvider` seam for time-series sources

/// Analytics error taxonomy with stable error codes
pub mod errors;

/// Analytic constants organized by domain
pub mod constants;

/// Core data models (series, category metrics, scores, insights, correlations)
pub mod models;

/// Time-series provider abstraction
pub mod provider;

pub use errors::{AnalyticsError, AnalyticsResult, ErrorCode};
pub use provider::SeriesProvider;
