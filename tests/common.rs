// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet test logging and canonical intake profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `nutritrack`

use nutritrack::models::{ActivityLevel, Gender, HealthGoal, UserProfile};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG raises the level when debugging a failing test
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// The form's pre-filled profile: 170 cm, 70 kg, 85 cm waist, 25 years
pub fn reference_profile() -> UserProfile {
    UserProfile::default()
}

/// Sedentary woman on a deficit
pub fn sedentary_female_profile() -> UserProfile {
    UserProfile {
        height_cm: 165.0,
        weight_kg: 60.0,
        waist_cm: 70.0,
        age_years: 30.0,
        gender: Gender::Female,
        activity_level: ActivityLevel::Sedentary,
        goal: HealthGoal::WeightLoss,
    }
}

/// Active heavy man on a surplus
pub fn active_male_profile() -> UserProfile {
    UserProfile {
        height_cm: 180.0,
        weight_kg: 100.0,
        waist_cm: 100.0,
        age_years: 40.0,
        gender: Gender::Male,
        activity_level: ActivityLevel::Active,
        goal: HealthGoal::MuscleGain,
    }
}
