// ABOUTME: Metrics engine configuration container with validation
// ABOUTME: Groups formula constants per domain and checks them before the engine uses them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine Configuration Module
//!
//! - `metrics` - formula constants (defaults, BMR, activity, goals, macros, body composition)
//! - `error` - `ConfigError`

pub mod error;
pub mod metrics;

pub use error::ConfigError;
pub use metrics::{
    ActivityFactorsConfig, BmrConfig, BodyCompositionConfig, GoalAdjustmentsConfig,
    MacroSplitConfig, SanitizationConfig,
};

use serde::{Deserialize, Serialize};

/// Tolerance when checking that macro fractions sum to one
const FRACTION_SUM_TOLERANCE: f64 = 0.001;

/// All constants consumed by the metrics engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsEngineConfig {
    /// Substitutes for missing measurements
    pub sanitization: SanitizationConfig,
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// TDEE multipliers
    pub activity_factors: ActivityFactorsConfig,
    /// Goal calorie deltas
    pub goal_adjustments: GoalAdjustmentsConfig,
    /// Macro distribution
    pub macro_split: MacroSplitConfig,
    /// Body fat and metabolic age parameters
    pub body_composition: BodyCompositionConfig,
}

impl MetricsEngineConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a multiplier or energy density is not positive,
    /// a macro fraction lies outside 0.0-1.0, the fractions don't sum to 1.0,
    /// or the height default is not positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let height_default = self.sanitization.height_default_cm;
        if !height_default.is_finite() || height_default <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "height_default_cm must be > 0 to keep ratio computations finite",
            ));
        }

        let factors = [
            ("sedentary", self.activity_factors.sedentary),
            ("moderate", self.activity_factors.moderate),
            ("active", self.activity_factors.active),
        ];
        for (name, value) in factors {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} activity factor must be positive, got {value}"
                )));
            }
        }

        let split = &self.macro_split;
        let densities = [
            ("protein", split.protein_kcal_per_g),
            ("carbs", split.carbs_kcal_per_g),
            ("fat", split.fat_kcal_per_g),
        ];
        for (name, value) in densities {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} kcal per gram must be positive, got {value}"
                )));
            }
        }

        let fractions = [
            ("protein", split.protein_fraction),
            ("carbs", split.carbs_fraction),
            ("fat", split.fat_fraction),
        ];
        for (name, value) in fractions {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} fraction must be between 0.0 and 1.0, got {value}"
                )));
            }
        }

        let sum = split.protein_fraction + split.carbs_fraction + split.fat_fraction;
        if (sum - 1.0).abs() > FRACTION_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights(format!(
                "macro fractions must sum to 1.0, got {sum}"
            )));
        }

        if split.fiber_g_per_1000_kcal < 0.0 {
            return Err(ConfigError::ValueOutOfRange(format!(
                "fiber_g_per_1000_kcal must not be negative, got {}",
                split.fiber_g_per_1000_kcal
            )));
        }

        if self.body_composition.min_body_fat_percent < 0 {
            return Err(ConfigError::ValueOutOfRange(format!(
                "min_body_fat_percent must not be negative, got {}",
                self.body_composition.min_body_fat_percent
            )));
        }

        Ok(())
    }
}
