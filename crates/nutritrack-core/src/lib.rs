// ABOUTME: Core types and constants for the NutriTrack health metrics platform
// ABOUTME: Foundation crate with error handling, profile and metrics models, and defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # NutriTrack Core
//!
//! Foundation crate providing shared types and constants. Designed to change
//! infrequently so the engine and application crates compile incrementally.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: `UserProfile`, raw form input, and `HealthMetrics`
//! - **constants**: Form defaults and service names

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (profile input, health metrics)
pub mod models;
