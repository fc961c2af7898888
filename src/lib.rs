// ABOUTME: Main library entry point for the NutriTrack health metrics application
// ABOUTME: Wires configuration, logging, and the recommendation contract around the metrics engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # NutriTrack
//!
//! Computes standard health metrics from an intake form submission and
//! prepares the payload sent to the recipe recommendation service.
//!
//! ## Architecture
//!
//! - **`nutritrack-core`**: error types, profile and metrics models, constants
//! - **`nutritrack-intelligence`**: the metrics engine and category tables
//! - **this crate**: environment configuration, logging, service contract
//!
//! ## Example Usage
//!
//! ```rust
//! use nutritrack::models::UserProfile;
//! use nutritrack::intelligence::compute_metrics;
//!
//! let metrics = compute_metrics(&UserProfile::default());
//! assert_eq!(metrics.bmi_category, "Normal");
//! assert_eq!(metrics.daily_calories, 2546);
//! ```

/// Environment-driven configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Recommendation service request and response types
pub mod recommendations;

pub use nutritrack_core::{constants, errors, models};
pub use nutritrack_intelligence as intelligence;
