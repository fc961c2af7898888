// ABOUTME: Metrics engine configuration for health metric formulas
// ABOUTME: Configures input defaults, BMR coefficients, activity factors, goal deltas, and macro split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metrics Engine Configuration
//!
//! Every constant used by the metrics pipeline lives here so each formula can
//! be tested and swapped without touching the arithmetic.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Body fat from BMI: Deurenberg et al. (1991) DOI: 10.1079/BJN19910073

use serde::{Deserialize, Serialize};

/// Fallback values substituted for missing or non-numeric measurements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SanitizationConfig {
    /// Height used when none was entered (cm). A sentinel, not body data.
    pub height_default_cm: f64,
    /// Weight, waist and age used when none was entered
    pub measurement_default: f64,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor constant for every non-male gender (-161)
    pub msj_female_constant: f64,
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary: 1.2
    pub sedentary: f64,
    /// Moderate: 1.55
    pub moderate: f64,
    /// Active: 1.8
    pub active: f64,
}

/// Calorie deltas applied after the activity multiplier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentsConfig {
    /// Weight loss delta (kcal): -500
    pub weight_loss_kcal: f64,
    /// Muscle gain delta (kcal): +300
    pub muscle_gain_kcal: f64,
    /// Maintenance delta (kcal): 0
    pub maintenance_kcal: f64,
}

/// Share of the calorie target assigned to each macronutrient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// Protein share of calories (0.25)
    pub protein_fraction: f64,
    /// Carbohydrate share of calories (0.50)
    pub carbs_fraction: f64,
    /// Fat share of calories (0.25)
    pub fat_fraction: f64,
    /// Energy density of protein (kcal/g)
    pub protein_kcal_per_g: f64,
    /// Energy density of carbohydrate (kcal/g)
    pub carbs_kcal_per_g: f64,
    /// Energy density of fat (kcal/g)
    pub fat_kcal_per_g: f64,
    /// Fiber grams per 1000 kcal (14)
    pub fiber_g_per_1000_kcal: f64,
}

/// Body-fat and metabolic-age estimation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyCompositionConfig {
    /// Body fat BMI coefficient (1.20)
    pub body_fat_bmi_coef: f64,
    /// Body fat age coefficient (0.23)
    pub body_fat_age_coef: f64,
    /// Subtracted for males (16.2)
    pub body_fat_male_offset: f64,
    /// Subtracted for every non-male gender (5.4)
    pub body_fat_female_offset: f64,
    /// Lowest body fat percentage ever reported
    pub min_body_fat_percent: i64,
    /// Years added for a sedentary lifestyle
    pub sedentary_age_adjustment: f64,
    /// Years added for an active lifestyle (negative)
    pub active_age_adjustment: f64,
    /// BMI above which the high-BMI adjustment applies (strict)
    pub high_bmi_threshold: f64,
    /// Years added above the BMI threshold
    pub high_bmi_age_adjustment: f64,
}

impl Default for SanitizationConfig {
    fn default() -> Self {
        Self {
            height_default_cm: 1.0,
            measurement_default: 0.0,
        }
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            moderate: 1.55,
            active: 1.8,
        }
    }
}

impl Default for GoalAdjustmentsConfig {
    fn default() -> Self {
        Self {
            weight_loss_kcal: -500.0,
            muscle_gain_kcal: 300.0,
            maintenance_kcal: 0.0,
        }
    }
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            protein_fraction: 0.25,
            carbs_fraction: 0.50,
            fat_fraction: 0.25,
            protein_kcal_per_g: 4.0,
            carbs_kcal_per_g: 4.0,
            fat_kcal_per_g: 9.0,
            fiber_g_per_1000_kcal: 14.0,
        }
    }
}

impl Default for BodyCompositionConfig {
    fn default() -> Self {
        Self {
            body_fat_bmi_coef: 1.20,
            body_fat_age_coef: 0.23,
            body_fat_male_offset: 16.2,
            body_fat_female_offset: 5.4,
            min_body_fat_percent: 5,
            sedentary_age_adjustment: 3.0,
            active_age_adjustment: -2.0,
            high_bmi_threshold: 25.0,
            high_bmi_age_adjustment: 2.0,
        }
    }
}
