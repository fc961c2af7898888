// ABOUTME: Health metrics result model produced by the metrics engine
// ABOUTME: BMI, WHtR, categories, calorie target, body fat, metabolic age, and macro grams
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Daily macronutrient targets in whole grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macros {
    /// Protein (g)
    #[serde(rename = "protein")]
    pub protein_g: i64,
    /// Carbohydrates (g)
    #[serde(rename = "carbs")]
    pub carbs_g: i64,
    /// Fat (g)
    #[serde(rename = "fat")]
    pub fat_g: i64,
    /// Dietary fiber (g)
    #[serde(rename = "fiber")]
    pub fiber_g: i64,
}

impl Macros {
    /// Energy contained in the protein, carb and fat targets
    #[must_use]
    pub const fn energy_kcal(&self) -> i64 {
        self.protein_g * 4 + self.carbs_g * 4 + self.fat_g * 9
    }
}

/// Derived health metrics for one profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetrics {
    /// Body Mass Index (kg/m²)
    pub bmi: f64,
    /// BMI category label
    pub bmi_category: String,
    /// Waist-to-height ratio
    pub whtr: f64,
    /// WHtR category label
    pub whtr_category: String,
    /// Daily calorie target (kcal)
    pub daily_calories: i64,
    /// Estimated body fat percentage, never below the configured floor
    #[serde(rename = "bodyFat")]
    pub body_fat_percent: i64,
    /// Estimated metabolic age (years)
    #[serde(rename = "metabolicAge")]
    pub metabolic_age_years: i64,
    /// Macro targets
    pub macros: Macros,
}

impl HealthMetrics {
    /// Whether both ratios are finite numbers
    ///
    /// A vanishingly small height can push BMI or WHtR to infinity. JSON has
    /// no representation for that, so callers check before serializing.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.bmi.is_finite() && self.whtr.is_finite()
    }
}
