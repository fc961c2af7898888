// ABOUTME: Core data models for profiles and derived health metrics
// ABOUTME: Re-exports profile input types and the HealthMetrics result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Derived health metrics
pub mod metrics;
/// User profile, raw form input, and preferences
pub mod profile;

pub use metrics::{HealthMetrics, Macros};
pub use profile::{
    ActivityLevel, DietaryPreference, ExerciseFrequency, FormValue, Gender, HealthGoal,
    Preferences, ProfileInput, UserProfile,
};
