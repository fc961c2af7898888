// ABOUTME: Metrics and recommendation request commands for nutritrack-cli
// ABOUTME: Runs the metrics engine on a profile built from command-line flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use nutritrack::config::NutritrackConfig;
use nutritrack::constants::CUISINES;
use nutritrack::errors::AppError;
use nutritrack::recommendations::RecommendationRequest;
use tracing::{info, warn};

use super::print_json;
use crate::args::{PreferenceArgs, ProfileArgs};

/// Compute and print `HealthMetrics`
pub fn metrics(config: &NutritrackConfig, profile: &ProfileArgs) -> Result<()> {
    let input = profile.to_input();
    let metrics = config.metrics_engine().compute(&input.to_profile());
    if !metrics.is_finite() {
        return Err(AppError::serialization(format!(
            "metrics are not finite (bmi={}, whtr={}), height is too small to encode",
            metrics.bmi, metrics.whtr
        ))
        .into());
    }

    info!(
        gender = %input.gender,
        activity = %input.activity,
        goal = %input.goal,
        bmi.category = %metrics.bmi_category,
        whtr.category = %metrics.whtr_category,
        daily_calories = metrics.daily_calories,
        "Metrics computed"
    );

    print_json(&metrics)
}

/// Build and print the recommendation service payload
pub fn request(
    config: &NutritrackConfig,
    profile: &ProfileArgs,
    preferences: &PreferenceArgs,
) -> Result<()> {
    let mut input = profile.to_input();
    input.preferences = preferences.to_preferences();

    if !CUISINES.contains(&input.preferences.cuisine.as_str()) {
        warn!(
            cuisine = %input.preferences.cuisine,
            "Cuisine is not one of the form options, passing it through"
        );
    }

    let request = RecommendationRequest::build(input, &config.metrics_engine());
    info!(
        daily_calories = request.metrics.daily_calories,
        "Recommendation request prepared"
    );

    println!("{}", request.to_json()?);
    Ok(())
}
