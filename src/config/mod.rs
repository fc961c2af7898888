// ABOUTME: Environment-driven configuration for the NutriTrack application
// ABOUTME: Loads metrics engine constants from defaults plus NUTRITRACK_* overrides, then validates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Application configuration
//!
//! Configuration is environment-only: start from the built-in defaults, apply
//! `NUTRITRACK_*` overrides, validate. The validated instance is cached
//! process-wide by [`NutritrackConfig::global`].
//!
//! | Variable | Field |
//! |----------|-------|
//! | `NUTRITRACK_ACTIVITY_SEDENTARY` | sedentary TDEE multiplier |
//! | `NUTRITRACK_ACTIVITY_MODERATE` | moderate TDEE multiplier |
//! | `NUTRITRACK_ACTIVITY_ACTIVE` | active TDEE multiplier |
//! | `NUTRITRACK_GOAL_WEIGHT_LOSS_KCAL` | weight-loss calorie delta |
//! | `NUTRITRACK_GOAL_MUSCLE_GAIN_KCAL` | muscle-gain calorie delta |
//! | `NUTRITRACK_MACRO_PROTEIN_FRACTION` | protein share of calories |
//! | `NUTRITRACK_MACRO_CARBS_FRACTION` | carbohydrate share of calories |
//! | `NUTRITRACK_MACRO_FAT_FRACTION` | fat share of calories |
//! | `NUTRITRACK_FIBER_G_PER_1000_KCAL` | fiber grams per 1000 kcal |
//! | `NUTRITRACK_MIN_BODY_FAT_PERCENT` | body fat floor |

use nutritrack_intelligence::{
    ConfigError, MetricsEngine, MetricsEngineConfig, BMI_CATEGORIES, WHTR_CATEGORIES,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Global configuration singleton
static NUTRITRACK_CONFIG: OnceLock<NutritrackConfig> = OnceLock::new();

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritrackConfig {
    /// Metrics engine constants
    pub engine: MetricsEngineConfig,
}

/// Overwrite `target` with the parsed value of `name` when the variable is set
fn env_override<T: FromStr>(name: &str, target: &mut T) -> Result<(), ConfigError> {
    match env::var(name) {
        Ok(val) => {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {name}: '{val}'")))?;
            debug!(env.var = name, env.value = %val, "Applied configuration override");
            Ok(())
        }
        Err(env::VarError::NotPresent) => Ok(()),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}

impl NutritrackConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        NUTRITRACK_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load configuration: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate engine constants and the category tables
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()?;
        BMI_CATEGORIES.validate()?;
        WHTR_CATEGORIES.validate()?;
        Ok(())
    }

    /// Build a metrics engine from this configuration
    #[must_use]
    pub fn metrics_engine(&self) -> MetricsEngine {
        MetricsEngine::new(self.engine.clone())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let engine = &mut self.engine;

        // Activity multipliers
        env_override(
            "NUTRITRACK_ACTIVITY_SEDENTARY",
            &mut engine.activity_factors.sedentary,
        )?;
        env_override(
            "NUTRITRACK_ACTIVITY_MODERATE",
            &mut engine.activity_factors.moderate,
        )?;
        env_override("NUTRITRACK_ACTIVITY_ACTIVE", &mut engine.activity_factors.active)?;

        // Goal deltas
        env_override(
            "NUTRITRACK_GOAL_WEIGHT_LOSS_KCAL",
            &mut engine.goal_adjustments.weight_loss_kcal,
        )?;
        env_override(
            "NUTRITRACK_GOAL_MUSCLE_GAIN_KCAL",
            &mut engine.goal_adjustments.muscle_gain_kcal,
        )?;

        // Macro split
        env_override(
            "NUTRITRACK_MACRO_PROTEIN_FRACTION",
            &mut engine.macro_split.protein_fraction,
        )?;
        env_override(
            "NUTRITRACK_MACRO_CARBS_FRACTION",
            &mut engine.macro_split.carbs_fraction,
        )?;
        env_override(
            "NUTRITRACK_MACRO_FAT_FRACTION",
            &mut engine.macro_split.fat_fraction,
        )?;
        env_override(
            "NUTRITRACK_FIBER_G_PER_1000_KCAL",
            &mut engine.macro_split.fiber_g_per_1000_kcal,
        )?;

        // Body composition
        env_override(
            "NUTRITRACK_MIN_BODY_FAT_PERCENT",
            &mut engine.body_composition.min_body_fat_percent,
        )?;

        Ok(self)
    }
}
