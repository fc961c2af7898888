// ABOUTME: Health metrics engine using closed-form anthropometric and metabolic formulas
// ABOUTME: BMI, WHtR, body fat, metabolic age, BMR, TDEE, goal adjustment, and macro targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metrics Engine
//!
//! Maps a [`UserProfile`] to [`HealthMetrics`]. The computation is pure and
//! total: missing or non-numeric measurements are replaced with configured
//! defaults instead of being rejected, because the intake form calls the engine
//! while the user is still typing.
//!
//! Pipeline, in order:
//!
//! 1. Sanitize measurements (height defaults to a 1 cm sentinel, the rest to 0)
//! 2. BMI from weight and height in meters
//! 3. WHtR from waist and height in centimeters
//! 4. Classify both against their category tables
//! 5. Body fat and metabolic age estimates
//! 6. Mifflin-St Jeor BMR, activity multiplier, goal adjustment
//! 7. Macro split from the rounded calorie target
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Deurenberg, P., Weststrate, J.A., & Seidell, J.C. (1991). Body mass index as a measure
//!   of body fatness. *British Journal of Nutrition*, 65(2), 105-114.
//!   <https://doi.org/10.1079/BJN19910073>
//!
//! - Ashwell, M., Gunn, P., & Gibson, S. (2012). Waist-to-height ratio is a better screening
//!   tool than waist circumference and BMI. *Obesity Reviews*, 13(3), 275-286.
//!   <https://doi.org/10.1111/j.1467-789X.2011.00952.x>

use crate::categories::{CategoryTable, BMI_CATEGORIES, WHTR_CATEGORIES};
use crate::config::{
    ActivityFactorsConfig, BmrConfig, BodyCompositionConfig, GoalAdjustmentsConfig,
    MacroSplitConfig, MetricsEngineConfig, SanitizationConfig,
};
use nutritrack_core::models::{
    ActivityLevel, Gender, HealthGoal, HealthMetrics, Macros, UserProfile,
};
use tracing::{debug, warn};

/// Round to the nearest integer with halves going toward positive infinity
/// (`2.5 -> 3`, `-2.5 -> -2`), the convention used by the intake form
#[must_use]
pub fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    rounded as i64
}

/// Measurements after default substitution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SanitizedMeasurements {
    /// Height (cm), never zero
    pub height_cm: f64,
    /// Weight (kg)
    pub weight_kg: f64,
    /// Waist (cm)
    pub waist_cm: f64,
    /// Age (years)
    pub age_years: f64,
    /// True when the height sentinel replaced the input
    pub height_defaulted: bool,
}

/// A measurement is usable when it is a finite, non-zero number
fn is_usable(value: f64) -> bool {
    value.is_finite() && value != 0.0
}

fn sanitize_measurement(value: f64, default: f64) -> f64 {
    if is_usable(value) {
        value
    } else {
        default
    }
}

/// Replace missing, zero, or non-finite measurements with their defaults
///
/// Height falls back to `height_default_cm`; weight, waist and age fall back to
/// `measurement_default`. Negative finite values pass through unchanged.
#[must_use]
pub fn sanitize_profile(profile: &UserProfile, config: &SanitizationConfig) -> SanitizedMeasurements {
    SanitizedMeasurements {
        height_cm: sanitize_measurement(profile.height_cm, config.height_default_cm),
        weight_kg: sanitize_measurement(profile.weight_kg, config.measurement_default),
        waist_cm: sanitize_measurement(profile.waist_cm, config.measurement_default),
        age_years: sanitize_measurement(profile.age_years, config.measurement_default),
        height_defaulted: !is_usable(profile.height_cm),
    }
}

/// Body Mass Index: weight (kg) / height (m)²
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Waist-to-height ratio, both in centimeters
#[must_use]
pub fn calculate_whtr(waist_cm: f64, height_cm: f64) -> f64 {
    waist_cm / height_cm
}

/// Estimate body fat percentage from BMI and age
///
/// Formula: `1.20 x BMI + 0.23 x age - offset`, with offset 16.2 for males and
/// 5.4 for every other gender. Rounded, then floored at `min_body_fat_percent`.
#[must_use]
#[allow(clippy::suboptimal_flops)] // mul_add would change rounding at .5 boundaries
pub fn estimate_body_fat(
    bmi: f64,
    age_years: f64,
    gender: Gender,
    config: &BodyCompositionConfig,
) -> i64 {
    let offset = if gender.is_male() {
        config.body_fat_male_offset
    } else {
        config.body_fat_female_offset
    };
    let body_fat = config.body_fat_bmi_coef * bmi + config.body_fat_age_coef * age_years - offset;
    round_half_up(body_fat).max(config.min_body_fat_percent)
}

/// Estimate metabolic age
///
/// Starts from chronological age: +3 when sedentary, -2 when active, and +2
/// more when BMI is strictly above 25. Adjustments are additive.
#[must_use]
pub fn estimate_metabolic_age(
    age_years: f64,
    activity_level: ActivityLevel,
    bmi: f64,
    config: &BodyCompositionConfig,
) -> i64 {
    let mut metabolic_age = age_years;
    match activity_level {
        ActivityLevel::Sedentary => metabolic_age += config.sedentary_age_adjustment,
        ActivityLevel::Active => metabolic_age += config.active_age_adjustment,
        ActivityLevel::Moderate => {}
    }
    if bmi > config.high_bmi_threshold {
        metabolic_age += config.high_bmi_age_adjustment;
    }
    round_half_up(metabolic_age)
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Everyone else: -161
///
/// No minimum is enforced; partial form input can produce a negative value.
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age_years: f64,
    gender: Gender,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * age_years;

    let gender_constant = if gender.is_male() {
        config.msj_male_constant
    } else {
        config.msj_female_constant
    };

    weight_component + height_component + age_component + gender_constant
}

/// Activity multiplier for a level
#[must_use]
pub const fn activity_factor(activity_level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    match activity_level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::Moderate => config.moderate,
        ActivityLevel::Active => config.active,
    }
}

/// Total Daily Energy Expenditure: BMR x activity factor
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    bmr * activity_factor(activity_level, config)
}

/// Calorie delta for a goal
#[must_use]
pub const fn goal_adjustment_kcal(goal: HealthGoal, config: &GoalAdjustmentsConfig) -> f64 {
    match goal {
        HealthGoal::WeightLoss => config.weight_loss_kcal,
        HealthGoal::MuscleGain => config.muscle_gain_kcal,
        HealthGoal::Maintenance => config.maintenance_kcal,
    }
}

/// Apply the goal delta to TDEE (after the activity multiplier)
#[must_use]
pub fn apply_goal_adjustment(tdee: f64, goal: HealthGoal, config: &GoalAdjustmentsConfig) -> f64 {
    tdee + goal_adjustment_kcal(goal, config)
}

/// Split a calorie target into macro grams
///
/// Each macro is rounded on its own; the rounded grams are not rebalanced to
/// re-sum to `daily_calories`.
#[must_use]
pub fn calculate_macros(daily_calories: i64, config: &MacroSplitConfig) -> Macros {
    let calories = daily_calories as f64;
    Macros {
        protein_g: round_half_up((calories * config.protein_fraction) / config.protein_kcal_per_g),
        carbs_g: round_half_up((calories * config.carbs_fraction) / config.carbs_kcal_per_g),
        fat_g: round_half_up((calories * config.fat_fraction) / config.fat_kcal_per_g),
        fiber_g: round_half_up((calories / 1000.0) * config.fiber_g_per_1000_kcal),
    }
}

/// Stateless health metrics calculator
///
/// Holds only immutable configuration, so one instance can be shared freely
/// across threads.
#[derive(Debug, Clone)]
pub struct MetricsEngine {
    config: MetricsEngineConfig,
    bmi_table: CategoryTable,
    whtr_table: CategoryTable,
}

impl Default for MetricsEngine {
    fn default() -> Self {
        Self::new(MetricsEngineConfig::default())
    }
}

impl MetricsEngine {
    /// Create an engine with the given configuration and the standard tables
    #[must_use]
    pub const fn new(config: MetricsEngineConfig) -> Self {
        Self {
            config,
            bmi_table: BMI_CATEGORIES,
            whtr_table: WHTR_CATEGORIES,
        }
    }

    /// Compute the full set of health metrics for a profile
    #[must_use]
    pub fn compute(&self, profile: &UserProfile) -> HealthMetrics {
        let config = &self.config;
        let measurements = sanitize_profile(profile, &config.sanitization);
        if measurements.height_defaulted {
            warn!(
                height.input = profile.height_cm,
                height.sentinel = measurements.height_cm,
                "Height missing, BMI and WHtR use the sentinel height"
            );
        }

        let bmi = calculate_bmi(measurements.weight_kg, measurements.height_cm);
        let whtr = calculate_whtr(measurements.waist_cm, measurements.height_cm);
        let bmi_category = self.bmi_table.classify(bmi);
        let whtr_category = self.whtr_table.classify(whtr);

        let body_fat_percent = estimate_body_fat(
            bmi,
            measurements.age_years,
            profile.gender,
            &config.body_composition,
        );
        let metabolic_age_years = estimate_metabolic_age(
            measurements.age_years,
            profile.activity_level,
            bmi,
            &config.body_composition,
        );

        let bmr = calculate_mifflin_st_jeor(
            measurements.weight_kg,
            measurements.height_cm,
            measurements.age_years,
            profile.gender,
            &config.bmr,
        );
        let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors);
        let target = apply_goal_adjustment(tdee, profile.goal, &config.goal_adjustments);
        let daily_calories = round_half_up(target);
        let macros = calculate_macros(daily_calories, &config.macro_split);

        debug!(
            bmi,
            bmi.category = bmi_category,
            whtr,
            whtr.category = whtr_category,
            bmr,
            tdee,
            daily_calories,
            "Computed health metrics"
        );

        HealthMetrics {
            bmi,
            bmi_category: bmi_category.to_owned(),
            whtr,
            whtr_category: whtr_category.to_owned(),
            daily_calories,
            body_fat_percent,
            metabolic_age_years,
            macros,
        }
    }
}

/// Compute metrics with the default configuration
#[must_use]
pub fn compute_metrics(profile: &UserProfile) -> HealthMetrics {
    MetricsEngine::default().compute(profile)
}
