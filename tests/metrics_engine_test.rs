// ABOUTME: Integration tests for the health metrics engine
// ABOUTME: Covers reference scenarios, category boundaries, goal deltas, macro energy, and degenerate input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Algorithm tests for the metrics engine
//!
//! - Worked scenarios with hand-computed expectations
//! - Category tables at their exact boundaries
//! - Properties that must hold for any profile: labels, body-fat floor,
//!   goal deltas, macro energy, determinism
//! - Missing and malformed form input

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutritrack::intelligence::{
    compute_metrics, MetricsEngine, MetricsEngineConfig, BMI_CATEGORIES, WHTR_CATEGORIES,
};
use nutritrack::models::{
    ActivityLevel, Gender, HealthGoal, HealthMetrics, ProfileInput, UserProfile,
};

mod common;

const GENDERS: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];
const ACTIVITY_LEVELS: [ActivityLevel; 3] = [
    ActivityLevel::Sedentary,
    ActivityLevel::Moderate,
    ActivityLevel::Active,
];

fn macro_energy(metrics: &HealthMetrics) -> i64 {
    metrics.macros.energy_kcal()
}

/// Profiles across the realistic range plus a few degenerate ones
fn profile_grid() -> Vec<UserProfile> {
    let mut profiles = Vec::new();
    for &height_cm in &[100.0, 150.0, 172.5, 195.0, f64::NAN, 0.0] {
        for &weight_kg in &[35.0, 68.3, 120.0, f64::NAN] {
            for &age_years in &[0.0, 18.0, 47.0, 90.0] {
                for gender in GENDERS {
                    for activity_level in ACTIVITY_LEVELS {
                        profiles.push(UserProfile {
                            height_cm,
                            weight_kg,
                            waist_cm: 80.0,
                            age_years,
                            gender,
                            activity_level,
                            goal: HealthGoal::Maintenance,
                        });
                    }
                }
            }
        }
    }
    profiles
}

// ============================================================================
// WORKED SCENARIOS
// ============================================================================

#[test]
fn test_reference_scenario() {
    common::init_test_logging();
    let metrics = compute_metrics(&common::reference_profile());

    // 70 / 1.7^2
    assert!((metrics.bmi - 24.22).abs() < 0.01);
    assert_eq!(metrics.bmi_category, "Normal");
    assert!((metrics.whtr - 0.5).abs() < f64::EPSILON);
    assert_eq!(metrics.whtr_category, "Moderate");

    // BMR 10*70 + 6.25*170 - 5*25 + 5 = 1642.5, x1.55 = 2545.875
    assert_eq!(metrics.daily_calories, 2546);
    assert_eq!(metrics.macros.protein_g, 159);
    assert_eq!(metrics.macros.fat_g, 71);
    assert_eq!(metrics.macros.carbs_g, 318);
    assert_eq!(metrics.macros.fiber_g, 36);
    assert_eq!(metrics.body_fat_percent, 19);
    assert_eq!(metrics.metabolic_age_years, 25);

    assert!((macro_energy(&metrics) - metrics.daily_calories).abs() <= 3);
}

#[test]
fn test_sedentary_female_weight_loss() {
    common::init_test_logging();
    let metrics = compute_metrics(&common::sedentary_female_profile());

    assert_eq!(metrics.bmi_category, "Normal");
    assert_eq!(metrics.whtr_category, "Moderate");

    // BMR 1320.25 x1.2 = 1584.3, -500
    assert_eq!(metrics.daily_calories, 1084);
    assert_eq!(metrics.macros.protein_g, 68);
    // 1084 * 0.5 / 4 = 135.5 rounds up
    assert_eq!(metrics.macros.carbs_g, 136);
    assert_eq!(metrics.macros.fat_g, 30);
    assert_eq!(metrics.macros.fiber_g, 15);
    assert_eq!(metrics.body_fat_percent, 28);
    assert_eq!(metrics.metabolic_age_years, 33);

    assert!((macro_energy(&metrics) - metrics.daily_calories).abs() <= 3);
}

#[test]
fn test_active_male_muscle_gain() {
    common::init_test_logging();
    let metrics = compute_metrics(&common::active_male_profile());

    assert!((metrics.bmi - 30.86).abs() < 0.01);
    assert_eq!(metrics.bmi_category, "Obese");
    assert_eq!(metrics.whtr_category, "High");

    // BMR 1930 x1.8 = 3474, +300
    assert_eq!(metrics.daily_calories, 3774);
    assert_eq!(metrics.macros.protein_g, 236);
    assert_eq!(metrics.macros.carbs_g, 472);
    assert_eq!(metrics.macros.fat_g, 105);
    assert_eq!(metrics.macros.fiber_g, 53);
    assert_eq!(metrics.body_fat_percent, 30);
    // -2 for active, +2 for BMI over 25
    assert_eq!(metrics.metabolic_age_years, 40);
}

#[test]
fn test_other_gender_uses_non_male_constants() {
    let other = compute_metrics(&UserProfile {
        gender: Gender::Other,
        ..UserProfile::default()
    });
    let female = compute_metrics(&UserProfile {
        gender: Gender::Female,
        ..UserProfile::default()
    });

    assert_eq!(other, female);
    // 1642.5 - 166 = 1476.5, x1.55 = 2288.575
    assert_eq!(other.daily_calories, 2289);
}

// ============================================================================
// CATEGORY TABLES
// ============================================================================

#[test]
fn test_bmi_boundaries_resolve_upward() {
    // Height 100 cm makes BMI equal to the weight exactly
    let at = |weight_kg: f64| {
        compute_metrics(&UserProfile {
            height_cm: 100.0,
            weight_kg,
            ..UserProfile::default()
        })
        .bmi_category
    };

    assert_eq!(at(18.4), "Underweight");
    assert_eq!(at(18.5), "Normal");
    assert_eq!(at(24.99), "Normal");
    assert_eq!(at(25.0), "Overweight");
    assert_eq!(at(29.99), "Overweight");
    assert_eq!(at(30.0), "Obese");
}

#[test]
fn test_whtr_boundaries_resolve_upward() {
    assert_eq!(WHTR_CATEGORIES.classify(0.419), "Low");
    assert_eq!(WHTR_CATEGORIES.classify(0.42), "Moderate");
    assert_eq!(WHTR_CATEGORIES.classify(0.519), "Moderate");
    assert_eq!(WHTR_CATEGORIES.classify(0.52), "High");
}

#[test]
fn test_category_rank_is_monotonic() {
    for table in [&BMI_CATEGORIES, &WHTR_CATEGORIES] {
        let mut previous = 0;
        for step in 0..5000 {
            let value = f64::from(step) * 0.01;
            let rank = table.rank(value);
            assert!(rank >= previous, "rank decreased at {value}");
            assert_eq!(table.rank_of_label(table.classify(value)), Some(rank));
            previous = rank;
        }
    }
}

#[test]
fn test_labels_stay_in_fixed_sets() {
    let bmi_labels = ["Underweight", "Normal", "Overweight", "Obese"];
    let whtr_labels = ["Low", "Moderate", "High"];

    for profile in profile_grid() {
        let metrics = compute_metrics(&profile);
        assert!(bmi_labels.contains(&metrics.bmi_category.as_str()));
        assert!(whtr_labels.contains(&metrics.whtr_category.as_str()));
    }
}

// ============================================================================
// PROPERTIES
// ============================================================================

#[test]
fn test_body_fat_never_below_floor() {
    for profile in profile_grid() {
        let metrics = compute_metrics(&profile);
        assert!(
            metrics.body_fat_percent >= 5,
            "body fat {} for {profile:?}",
            metrics.body_fat_percent
        );
    }
}

#[test]
fn test_goal_deltas_are_exact() {
    for base in profile_grid() {
        let calories_for = |goal| compute_metrics(&UserProfile { goal, ..base }).daily_calories;
        let maintenance = calories_for(HealthGoal::Maintenance);

        assert_eq!(calories_for(HealthGoal::WeightLoss), maintenance - 500);
        assert_eq!(calories_for(HealthGoal::MuscleGain), maintenance + 300);
    }
}

#[test]
fn test_macro_energy_within_rounding_bound() {
    // Half a gram each of protein (4 kcal), fat (9 kcal) and carbs (4 kcal)
    let bound = 8;

    for profile in profile_grid() {
        let metrics = compute_metrics(&profile);
        let drift = (macro_energy(&metrics) - metrics.daily_calories).abs();
        assert!(drift <= bound, "macro energy drift {drift} for {profile:?}");
    }
}

#[test]
fn test_identical_profiles_produce_identical_output() {
    let engine = MetricsEngine::default();
    for profile in profile_grid() {
        let first = engine.compute(&profile);
        let second = engine.compute(&profile);

        assert_eq!(first.bmi.to_bits(), second.bmi.to_bits());
        assert_eq!(first.whtr.to_bits(), second.whtr.to_bits());
        assert_eq!(first, second);
    }
}

#[test]
fn test_engine_is_shareable_across_threads() {
    let engine = MetricsEngine::default();
    let expected = engine.compute(&common::reference_profile());

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| engine.compute(&common::reference_profile())))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

// ============================================================================
// MISSING AND MALFORMED INPUT
// ============================================================================

#[test]
fn test_missing_height_and_weight_still_produce_metrics() {
    common::init_test_logging();
    let input = ProfileInput {
        height: None,
        weight: None,
        ..ProfileInput::default()
    };
    let metrics = compute_metrics(&input.to_profile());

    // weight 0 over the 1 cm sentinel height
    assert!(metrics.bmi.abs() < f64::EPSILON);
    assert_eq!(metrics.bmi_category, "Underweight");
    assert!((metrics.whtr - 85.0).abs() < f64::EPSILON);
    assert_eq!(metrics.whtr_category, "High");
    // BMR 6.25 - 125 + 5 = -113.75, x1.55 = -176.3125
    assert_eq!(metrics.daily_calories, -176);
    assert_eq!(metrics.body_fat_percent, 5);
}

#[test]
fn test_missing_height_uses_sentinel() {
    let metrics = compute_metrics(&UserProfile {
        height_cm: f64::NAN,
        ..UserProfile::default()
    });

    // 70 kg over (0.01 m)^2
    assert!(metrics.bmi > 100_000.0);
    assert_eq!(metrics.bmi_category, "Obese");
    assert_eq!(metrics.whtr_category, "High");
}

#[test]
fn test_form_text_is_coerced() {
    let input: ProfileInput = serde_json::from_value(serde_json::json!({
        "height": "0",
        "weight": "72.5",
        "waist": "  ",
        "age": "abc",
        "gender": "Male",
        "activity": "Moderate",
        "goal": "Maintenance",
        "exercise": "2-3x/week",
        "favFood": "",
        "cuisine": "Indian",
        "dietary": "Vegetarian"
    }))
    .unwrap();

    let profile = input.to_profile();
    assert!((profile.weight_kg - 72.5).abs() < f64::EPSILON);
    assert!(profile.age_years.is_nan());

    let metrics = compute_metrics(&profile);
    // "0" height falls back to 1 cm, blank waist to 0
    assert!((metrics.bmi - 725_000.0).abs() < 1e-6);
    assert!(metrics.whtr.abs() < f64::EPSILON);
    assert_eq!(metrics.whtr_category, "Low");
    // "abc" age is 0: no age term in the BMR
    // 725 + 6.25 + 5 = 736.25, x1.55 = 1141.1875
    assert_eq!(metrics.daily_calories, 1141);
}

#[test]
fn test_numeric_and_text_form_values_agree() {
    let numeric: ProfileInput = serde_json::from_value(serde_json::json!({
        "height": 182, "weight": 81.4, "waist": 90, "age": 33,
        "gender": "Female", "activity": "Active", "goal": "Muscle Gain",
        "exercise": "4+/week", "cuisine": "Continental", "dietary": "Non-Vegetarian"
    }))
    .unwrap();
    let text: ProfileInput = serde_json::from_value(serde_json::json!({
        "height": "182", "weight": "81.4", "waist": "90", "age": "33",
        "gender": "Female", "activity": "Active", "goal": "Muscle Gain",
        "exercise": "4+/week", "cuisine": "Continental", "dietary": "Non-Vegetarian"
    }))
    .unwrap();

    assert_eq!(
        compute_metrics(&numeric.to_profile()),
        compute_metrics(&text.to_profile())
    );
}

#[test]
fn test_unknown_activity_level_is_rejected_at_the_boundary() {
    let result = serde_json::from_value::<ProfileInput>(serde_json::json!({
        "height": 170, "weight": 70, "waist": 85, "age": 25,
        "gender": "Male", "activity": "Extreme", "goal": "Maintenance",
        "exercise": "2-3x/week", "cuisine": "Indian", "dietary": "Vegetarian"
    }));
    assert!(result.is_err());
    assert!("Extreme".parse::<ActivityLevel>().is_err());
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[test]
fn test_custom_configuration_changes_results() {
    let mut config = MetricsEngineConfig::default();
    config.activity_factors.moderate = 1.5;
    config.goal_adjustments.weight_loss_kcal = -250.0;
    let engine = MetricsEngine::new(config);

    let metrics = engine.compute(&UserProfile {
        goal: HealthGoal::WeightLoss,
        ..UserProfile::default()
    });
    // 1642.5 x1.5 = 2463.75, -250
    assert_eq!(metrics.daily_calories, 2214);
}
