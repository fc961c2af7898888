// ABOUTME: User profile models collected by the intake form
// ABOUTME: Measurement coercion from raw form values, lifestyle enums, and food preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::profile_defaults;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender as selected on the form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Male (uses the male BMR and body-fat constants)
    Male,
    /// Female
    Female,
    /// Other / not specified (treated like every non-male value)
    Other,
}

impl Gender {
    /// Wire label used by the form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }

    /// Whether the male formula constants apply
    #[must_use]
    pub const fn is_male(&self) -> bool {
        matches!(self, Self::Male)
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(AppError::invalid_input(format!("Unknown gender '{s}'"))),
        }
    }
}

/// Daily activity level, selects the TDEE multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActivityLevel {
    /// Desk job, little or no exercise
    Sedentary,
    /// Regular moderate activity
    Moderate,
    /// Physically active most days
    Active,
}

impl ActivityLevel {
    /// Wire label used by the form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary",
            Self::Moderate => "Moderate",
            Self::Active => "Active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    // No fallback multiplier exists for unknown levels, so they are rejected here
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            _ => Err(AppError::invalid_input(format!(
                "Unknown activity level '{s}' (expected Sedentary, Moderate or Active)"
            ))),
        }
    }
}

/// Health goal, selects the calorie adjustment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HealthGoal {
    /// Caloric deficit
    #[serde(rename = "Weight Loss")]
    WeightLoss,
    /// Caloric surplus
    #[serde(rename = "Muscle Gain")]
    MuscleGain,
    /// Caloric balance
    Maintenance,
}

impl HealthGoal {
    /// Wire label used by the form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WeightLoss => "Weight Loss",
            Self::MuscleGain => "Muscle Gain",
            Self::Maintenance => "Maintenance",
        }
    }
}

impl FromStr for HealthGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "weightloss" => Ok(Self::WeightLoss),
            "musclegain" => Ok(Self::MuscleGain),
            "maintenance" => Ok(Self::Maintenance),
            _ => Err(AppError::invalid_input(format!("Unknown health goal '{s}'"))),
        }
    }
}

/// Weekly exercise frequency reported on the lifestyle step
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ExerciseFrequency {
    /// 0-1 sessions per week
    #[serde(rename = "0-1x/week")]
    Rare,
    /// 2-3 sessions per week
    #[serde(rename = "2-3x/week")]
    Weekly,
    /// 4 or more sessions per week
    #[serde(rename = "4+/week")]
    Regular,
}

impl FromStr for ExerciseFrequency {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rare" | "0-1x/week" => Ok(Self::Rare),
            "weekly" | "2-3x/week" => Ok(Self::Weekly),
            "regular" | "4+/week" => Ok(Self::Regular),
            _ => Err(AppError::invalid_input(format!(
                "Unknown exercise frequency '{s}'"
            ))),
        }
    }
}

/// Dietary preference reported on the preferences step
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DietaryPreference {
    /// Vegetarian
    #[serde(rename = "Vegetarian")]
    Veg,
    /// Non-vegetarian
    #[serde(rename = "Non-Vegetarian")]
    NonVeg,
}

impl FromStr for DietaryPreference {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "veg" | "vegetarian" => Ok(Self::Veg),
            "nonveg" | "non-veg" | "non-vegetarian" => Ok(Self::NonVeg),
            _ => Err(AppError::invalid_input(format!(
                "Unknown dietary preference '{s}'"
            ))),
        }
    }
}

macro_rules! display_via_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_via_as_str!(Gender, ActivityLevel, HealthGoal);

/// A raw numeric form field: the form submits either numbers or the text typed
/// into the input box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    /// Already numeric
    Number(f64),
    /// Text as typed
    Text(String),
}

impl FormValue {
    /// Numeric conversion of the field
    ///
    /// Blank text converts to `0.0`. Unsigned `0x`, `0o` and `0b` literals are
    /// read in their radix, anything else must be a decimal number. Text that
    /// is neither converts to NaN. Callers substitute defaults afterwards.
    #[must_use]
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Number(value) => *value,
            Self::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    0.0
                } else if let Some(value) = parse_radix_literal(trimmed) {
                    value
                } else {
                    trimmed.parse::<f64>().unwrap_or(f64::NAN)
                }
            }
        }
    }
}

/// `Some` when `text` carries a radix prefix; NaN for a prefix with bad digits
fn parse_radix_literal(text: &str) -> Option<f64> {
    let (radix, digits) = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)]
        .into_iter()
        .find_map(|(prefix, radix)| text.strip_prefix(prefix).map(|digits| (radix, digits)))?;
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let value = digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix)
                .map(|digit| acc.mul_add(f64::from(radix), f64::from(digit)))
        })
        .unwrap_or(f64::NAN);
    Some(value)
}

impl From<f64> for FormValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Converts an optional raw field to a number; absent fields are NaN
fn coerce(field: Option<&FormValue>) -> f64 {
    field.map_or(f64::NAN, FormValue::to_number)
}

/// Body measurements and lifestyle inputs consumed by the metrics engine
///
/// Numeric fields may hold any `f64`, including NaN for fields the user never
/// filled in. The engine sanitizes them before use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Height in centimeters
    #[serde(rename = "height")]
    pub height_cm: f64,
    /// Weight in kilograms
    #[serde(rename = "weight")]
    pub weight_kg: f64,
    /// Waist circumference in centimeters
    #[serde(rename = "waist")]
    pub waist_cm: f64,
    /// Age in whole years
    #[serde(rename = "age")]
    pub age_years: f64,
    /// Gender
    pub gender: Gender,
    /// Activity level
    #[serde(rename = "activity")]
    pub activity_level: ActivityLevel,
    /// Health goal
    pub goal: HealthGoal,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            height_cm: profile_defaults::HEIGHT_CM,
            weight_kg: profile_defaults::WEIGHT_KG,
            waist_cm: profile_defaults::WAIST_CM,
            age_years: profile_defaults::AGE_YEARS,
            gender: Gender::Male,
            activity_level: ActivityLevel::Moderate,
            goal: HealthGoal::Maintenance,
        }
    }
}

/// Food and lifestyle preferences that feed the recommendation request only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Weekly exercise frequency
    pub exercise: ExerciseFrequency,
    /// Favourite foods, free text
    #[serde(default)]
    pub fav_food: String,
    /// Preferred cuisine
    pub cuisine: String,
    /// Dietary preference
    pub dietary: DietaryPreference,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            exercise: ExerciseFrequency::Weekly,
            fav_food: String::new(),
            cuisine: profile_defaults::CUISINE.to_owned(),
            dietary: DietaryPreference::Veg,
        }
    }
}

/// Raw form submission as posted by the intake wizard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    /// Height field
    #[serde(default)]
    pub height: Option<FormValue>,
    /// Weight field
    #[serde(default)]
    pub weight: Option<FormValue>,
    /// Waist field
    #[serde(default)]
    pub waist: Option<FormValue>,
    /// Age field
    #[serde(default)]
    pub age: Option<FormValue>,
    /// Gender selection
    pub gender: Gender,
    /// Activity selection
    pub activity: ActivityLevel,
    /// Goal selection
    pub goal: HealthGoal,
    /// Preference fields
    #[serde(flatten)]
    pub preferences: Preferences,
}

impl ProfileInput {
    /// Numeric view of the submission for the metrics engine
    #[must_use]
    pub fn to_profile(&self) -> UserProfile {
        UserProfile {
            height_cm: coerce(self.height.as_ref()),
            weight_kg: coerce(self.weight.as_ref()),
            waist_cm: coerce(self.waist.as_ref()),
            age_years: coerce(self.age.as_ref()),
            gender: self.gender,
            activity_level: self.activity,
            goal: self.goal,
        }
    }
}

impl Default for ProfileInput {
    fn default() -> Self {
        let profile = UserProfile::default();
        Self {
            height: Some(FormValue::Number(profile.height_cm)),
            weight: Some(FormValue::Number(profile.weight_kg)),
            waist: Some(FormValue::Number(profile.waist_cm)),
            age: Some(FormValue::Number(profile.age_years)),
            gender: profile.gender,
            activity: profile.activity_level,
            goal: profile.goal,
            preferences: Preferences::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_value_coercion() {
        assert!((FormValue::from("72.5").to_number() - 72.5).abs() < f64::EPSILON);
        assert!((FormValue::from("  180 ").to_number() - 180.0).abs() < f64::EPSILON);
        assert!(FormValue::from("   ").to_number().abs() < f64::EPSILON);
        assert!(FormValue::from("").to_number().abs() < f64::EPSILON);
        assert!(FormValue::from("abc").to_number().is_nan());
        assert!((FormValue::from(64.0).to_number() - 64.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_radix_prefixed_text() {
        assert!((FormValue::from("0x10").to_number() - 16.0).abs() < f64::EPSILON);
        assert!((FormValue::from(" 0B101 ").to_number() - 5.0).abs() < f64::EPSILON);
        assert!((FormValue::from("0o17").to_number() - 15.0).abs() < f64::EPSILON);
        assert!(FormValue::from("0x").to_number().is_nan());
        assert!(FormValue::from("0b102").to_number().is_nan());
        assert!(FormValue::from("-0x10").to_number().is_nan());
    }

    #[test]
    fn test_display_uses_wire_labels() {
        assert_eq!(HealthGoal::MuscleGain.to_string(), "Muscle Gain");
        assert_eq!(ActivityLevel::Sedentary.to_string(), "Sedentary");
        assert_eq!(Gender::Other.to_string(), "Other");
    }

    #[test]
    fn test_missing_fields_become_nan() {
        let input = ProfileInput {
            height: None,
            weight: None,
            ..ProfileInput::default()
        };
        let profile = input.to_profile();
        assert!(profile.height_cm.is_nan());
        assert!(profile.weight_kg.is_nan());
        assert!((profile.waist_cm - 85.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_wire_labels() {
        assert_eq!(
            serde_json::to_string(&HealthGoal::WeightLoss).unwrap(),
            "\"Weight Loss\""
        );
        assert_eq!(
            serde_json::to_string(&ExerciseFrequency::Regular).unwrap(),
            "\"4+/week\""
        );
        assert_eq!(
            serde_json::to_string(&DietaryPreference::NonVeg).unwrap(),
            "\"Non-Vegetarian\""
        );
    }

    #[test]
    fn test_unknown_activity_level_is_rejected() {
        let err = "Lazy".parse::<ActivityLevel>().unwrap_err();
        assert_eq!(err.code, crate::errors::ErrorCode::InvalidInput);
        assert_eq!("active".parse::<ActivityLevel>().unwrap(), ActivityLevel::Active);
    }

    #[test]
    fn test_goal_parsing_accepts_form_and_cli_spellings() {
        assert_eq!("Weight Loss".parse::<HealthGoal>().unwrap(), HealthGoal::WeightLoss);
        assert_eq!("muscle-gain".parse::<HealthGoal>().unwrap(), HealthGoal::MuscleGain);
        assert_eq!("weight_loss".parse::<HealthGoal>().unwrap(), HealthGoal::WeightLoss);
        assert!("bulk".parse::<HealthGoal>().is_err());
    }

    #[test]
    fn test_profile_input_deserializes_mixed_field_types() {
        let json = r#"{
            "height": "175",
            "weight": 68,
            "waist": "",
            "gender": "Female",
            "activity": "Sedentary",
            "goal": "Maintenance",
            "exercise": "0-1x/week",
            "favFood": "paneer",
            "cuisine": "South Indian",
            "dietary": "Vegetarian"
        }"#;
        let input: ProfileInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.height, Some(FormValue::Text("175".to_owned())));
        assert_eq!(input.weight, Some(FormValue::Number(68.0)));
        assert!(input.age.is_none());
        assert_eq!(input.preferences.fav_food, "paneer");

        let profile = input.to_profile();
        assert!((profile.height_cm - 175.0).abs() < f64::EPSILON);
        assert!(profile.waist_cm.abs() < f64::EPSILON);
        assert_eq!(profile.gender, Gender::Female);
    }
}
