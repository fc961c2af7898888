// ABOUTME: Application-wide constants for NutriTrack
// ABOUTME: Default form profile values and the cuisines offered on the preferences step
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Values pre-filled on the intake form
pub mod profile_defaults {
    /// Default height (cm)
    pub const HEIGHT_CM: f64 = 170.0;
    /// Default weight (kg)
    pub const WEIGHT_KG: f64 = 70.0;
    /// Default waist circumference (cm)
    pub const WAIST_CM: f64 = 85.0;
    /// Default age (years)
    pub const AGE_YEARS: f64 = 25.0;
    /// Default cuisine
    pub const CUISINE: &str = "Indian";
}

/// Cuisines offered on the preferences step
pub const CUISINES: [&str; 6] = [
    "Indian",
    "South Indian",
    "Vegetarian",
    "Regional",
    "Continental",
    "Mediterranean",
];

/// Service names used in structured logs
pub mod service_names {
    /// Primary service name
    pub const NUTRITRACK: &str = "nutritrack";
    /// Name of the external recommendation service
    pub const RECOMMENDATION_SERVICE: &str = "nutrition-recommendations";
}
