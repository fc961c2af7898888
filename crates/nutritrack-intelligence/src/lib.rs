// ABOUTME: Health metrics engine crate for the NutriTrack platform
// ABOUTME: Exposes the metrics engine, category tables, and engine configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # NutriTrack Intelligence
//!
//! Pure, deterministic derivation of BMI, waist-to-height ratio, body fat,
//! metabolic age, BMR, TDEE and macro targets from a user profile.

/// Ordered range tables for BMI and WHtR classification
pub mod categories;

/// Engine configuration and validation
pub mod config;

/// The metrics pipeline
pub mod metrics_engine;

pub use categories::{CategoryRange, CategoryTable, BMI_CATEGORIES, WHTR_CATEGORIES};
pub use config::{ConfigError, MetricsEngineConfig};
pub use metrics_engine::{compute_metrics, MetricsEngine};
