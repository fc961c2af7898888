// ABOUTME: Contract types for the external recipe and meal-plan recommendation service
// ABOUTME: Request payload (form data plus metrics) and the recipe/weekly-plan response shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recommendation Service Contract
//!
//! The intake form posts `{ userData, metrics }` to a serverless function that
//! asks a text-generation model for recipes and a weekly plan. Only the wire
//! shapes live here; prompt construction and transport belong to the service.
//!
//! Response shape:
//!
//! ```json
//! {
//!   "bestForYou": [Recipe x 4],
//!   "readyIn30":  [Recipe x 4],
//!   "weeklyPlan": [MealPlanDay x 7]
//! }
//! ```
//!
//! Failures come back as `{ "error": "message" }`.

use nutritrack_core::constants::service_names;
use nutritrack_core::errors::{AppError, AppResult};
use nutritrack_core::models::{HealthMetrics, ProfileInput};
use nutritrack_intelligence::MetricsEngine;
use serde::{Deserialize, Serialize};

/// Signature recipes built around the user's favourite foods
pub const BEST_FOR_YOU_COUNT: usize = 4;
/// Recipes that take under 30 minutes
pub const READY_IN_30_COUNT: usize = 4;
/// One plan entry per weekday, Monday to Sunday
pub const WEEKLY_PLAN_DAYS: usize = 7;

/// Payload posted to the recommendation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    /// Raw form submission, including preferences
    pub user_data: ProfileInput,
    /// Metrics computed from that submission
    pub metrics: HealthMetrics,
}

impl RecommendationRequest {
    /// Compute metrics for the submission and bundle both into a request
    #[must_use]
    pub fn build(user_data: ProfileInput, engine: &MetricsEngine) -> Self {
        let metrics = engine.compute(&user_data.to_profile());
        Self { user_data, metrics }
    }

    /// Serialize to the JSON body expected by the service
    ///
    /// # Errors
    ///
    /// Returns a serialization error if BMI or WHtR is not finite (serde_json
    /// would write `null` for it) or if the payload cannot be encoded
    pub fn to_json(&self) -> AppResult<String> {
        if !self.metrics.is_finite() {
            return Err(AppError::serialization(format!(
                "metrics are not finite (bmi={}, whtr={}), height is too small to encode",
                self.metrics.bmi, self.metrics.whtr
            )));
        }
        Ok(serde_json::to_string(self)?)
    }
}

/// A single recipe suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Dish name
    pub name: String,
    /// Breakfast, lunch, snack, dinner...
    pub meal_type: String,
    /// Preparation difficulty
    pub difficulty: String,
    /// Cuisine
    pub cuisine: String,
    /// Total preparation time (minutes)
    pub time_in_mins: f64,
    /// Energy per serving (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Fat (g)
    pub fat: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fiber (g)
    pub fiber: f64,
    /// Free-form tags
    pub tags: Vec<String>,
    /// Why the recipe suits this user's BMI/WHtR profile
    pub explanation: String,
}

/// One day of the weekly meal plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanDay {
    /// Weekday name
    pub day_name: String,
    /// Breakfast dish
    pub breakfast: String,
    /// Lunch dish
    pub lunch: String,
    /// Snack
    pub snack: String,
    /// Dinner dish
    pub dinner: String,
    /// Total energy for the day (kcal)
    pub total_calories: f64,
    /// Total protein for the day (g)
    pub protein: f64,
    /// Total fiber for the day (g)
    pub fiber: f64,
}

/// Successful response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSet {
    /// Signature recipes
    pub best_for_you: Vec<Recipe>,
    /// Quick recipes
    #[serde(rename = "readyIn30")]
    pub ready_in_30: Vec<Recipe>,
    /// Seven-day plan
    pub weekly_plan: Vec<MealPlanDay>,
}

/// Error body returned by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationError {
    /// Failure message
    pub error: String,
}

impl From<RecommendationError> for AppError {
    fn from(body: RecommendationError) -> Self {
        Self::external_service(service_names::RECOMMENDATION_SERVICE, body.error)
    }
}

/// Decode a response body, mapping the service's error shape to `AppError`
///
/// # Errors
///
/// Returns `ExternalServiceError` when the body is the `{ "error": ... }`
/// shape, or `SerializationError` when it matches neither shape.
pub fn parse_response(body: &str) -> AppResult<RecommendationSet> {
    if let Ok(set) = serde_json::from_str::<RecommendationSet>(body) {
        return Ok(set);
    }
    match serde_json::from_str::<RecommendationError>(body) {
        Ok(error_body) => Err(error_body.into()),
        Err(_) => Ok(serde_json::from_str::<RecommendationSet>(body)?),
    }
}
