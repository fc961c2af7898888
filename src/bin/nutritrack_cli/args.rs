// ABOUTME: Command-line arguments mirroring the intake form fields
// ABOUTME: Converts flags into a ProfileInput, treating measurements as raw form text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use clap::Args;
use nutritrack::models::{
    ActivityLevel, DietaryPreference, ExerciseFrequency, FormValue, Gender, HealthGoal,
    Preferences, ProfileInput,
};

/// Body measurements and lifestyle selections
///
/// Measurements are kept as text so they go through the same coercion as a
/// form submission: blank becomes the default, `"abc"` becomes the default.
#[derive(Args, Debug, Clone, Default)]
pub struct ProfileArgs {
    /// Height in centimeters
    #[arg(long)]
    pub height: Option<String>,

    /// Weight in kilograms
    #[arg(long)]
    pub weight: Option<String>,

    /// Waist circumference in centimeters
    #[arg(long)]
    pub waist: Option<String>,

    /// Age in years
    #[arg(long)]
    pub age: Option<String>,

    /// Male, Female or Other
    #[arg(long)]
    pub gender: Option<Gender>,

    /// Sedentary, Moderate or Active
    #[arg(long)]
    pub activity: Option<ActivityLevel>,

    /// "Weight Loss", "Muscle Gain" or Maintenance
    #[arg(long)]
    pub goal: Option<HealthGoal>,
}

/// Preference step of the form
#[derive(Args, Debug, Clone, Default)]
pub struct PreferenceArgs {
    /// 0-1x/week, 2-3x/week or 4+/week
    #[arg(long)]
    pub exercise: Option<ExerciseFrequency>,

    /// Favourite foods, free text
    #[arg(long)]
    pub fav_food: Option<String>,

    /// Preferred cuisine
    #[arg(long)]
    pub cuisine: Option<String>,

    /// Vegetarian or Non-Vegetarian
    #[arg(long)]
    pub dietary: Option<DietaryPreference>,
}

/// Keep the pre-filled value unless the flag was given
fn field(flag: Option<&str>, prefilled: Option<FormValue>) -> Option<FormValue> {
    flag.map_or(prefilled, |text| Some(FormValue::from(text)))
}

impl ProfileArgs {
    /// Build a form submission, starting from the pre-filled defaults
    #[must_use]
    pub fn to_input(&self) -> ProfileInput {
        let defaults = ProfileInput::default();
        ProfileInput {
            height: field(self.height.as_deref(), defaults.height),
            weight: field(self.weight.as_deref(), defaults.weight),
            waist: field(self.waist.as_deref(), defaults.waist),
            age: field(self.age.as_deref(), defaults.age),
            gender: self.gender.unwrap_or(defaults.gender),
            activity: self.activity.unwrap_or(defaults.activity),
            goal: self.goal.unwrap_or(defaults.goal),
            preferences: defaults.preferences,
        }
    }
}

impl PreferenceArgs {
    /// Merge the flags over the default preferences
    #[must_use]
    pub fn to_preferences(&self) -> Preferences {
        let defaults = Preferences::default();
        Preferences {
            exercise: self.exercise.unwrap_or(defaults.exercise),
            fav_food: self.fav_food.clone().unwrap_or(defaults.fav_food),
            cuisine: self.cuisine.clone().unwrap_or(defaults.cuisine),
            dietary: self.dietary.unwrap_or(defaults.dietary),
        }
    }
}
