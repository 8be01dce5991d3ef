// ABOUTME: Strongly-typed health, lifestyle, and diet profile consumed by the analyzer
// ABOUTME: Defines the profile sections, their enumerated choices, and the malformed-profile error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Profile model
//!
//! A [`Profile`] is built once per wizard session, usually through
//! [`ProfileForm`](crate::profile_form::ProfileForm), and then handed to the
//! analyzer by reference. Nothing in the engine mutates it.

use hairwise_core::errors::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Malformed or incomplete profile
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    /// Required field absent or blank
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// Numeric field outside its documented range
    #[error("`{field}` must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Dotted field path
        field: &'static str,
        /// Offending value
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },

    /// Numeric field that must be a finite, strictly positive number
    #[error("`{field}` must be a finite positive number, got {value}")]
    NotPositive {
        /// Dotted field path
        field: &'static str,
        /// Offending value
        value: f64,
    },

    /// Value that is not one of the accepted choices
    #[error("`{field}` has unknown value `{value}` (expected one of: {expected})")]
    InvalidChoice {
        /// Dotted field path
        field: &'static str,
        /// Offending raw value
        value: String,
        /// Accepted values, comma separated
        expected: String,
    },
}

impl ProfileError {
    /// Dotted path of the field that caused the error
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingField(field)
            | Self::OutOfRange { field, .. }
            | Self::NotPositive { field, .. }
            | Self::InvalidChoice { field, .. } => field,
        }
    }
}

impl From<ProfileError> for AppError {
    fn from(error: ProfileError) -> Self {
        let code = match &error {
            ProfileError::MissingField(_) => ErrorCode::MissingRequiredField,
            ProfileError::OutOfRange { .. } => ErrorCode::ValueOutOfRange,
            ProfileError::NotPositive { .. } => ErrorCode::InvalidInput,
            ProfileError::InvalidChoice { .. } => ErrorCode::InvalidFormat,
        };
        let details = serde_json::json!({ "field": error.field() });
        Self::new(code, error.to_string()).with_details(details)
    }
}

/// An enumerated wizard choice that can be parsed from its form label
pub trait FormChoice: Sized + Copy + 'static {
    /// Accepted lowercase labels and the values they map to
    const OPTIONS: &'static [(&'static str, Self)];

    /// Parse a raw form label, case-insensitively
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::InvalidChoice` if the label is not accepted
    fn parse_choice(field: &'static str, raw: &str) -> Result<Self, ProfileError> {
        let needle = raw.trim().to_ascii_lowercase();
        Self::OPTIONS
            .iter()
            .find(|(label, _)| *label == needle)
            .map(|(_, value)| *value)
            .ok_or_else(|| ProfileError::InvalidChoice {
                field,
                value: raw.to_owned(),
                expected: Self::OPTIONS
                    .iter()
                    .map(|(label, _)| *label)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Gender as collected by the wizard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male (uses the male Mifflin-St Jeor constant)
    Male,
    /// Female
    Female,
    /// Other / undisclosed (uses the female constant and male iron baseline)
    Other,
}

impl FormChoice for Gender {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("male", Self::Male),
        ("female", Self::Female),
        ("other", Self::Other),
    ];
}

/// Dietary preference; drives every food-source and meal-plan branch
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DietPreference {
    /// Lacto-vegetarian: no meat, fish, or eggs
    Vegetarian,
    /// Omnivorous diet
    NonVegetarian,
}

impl DietPreference {
    /// Whether this is the vegetarian branch
    #[must_use]
    pub const fn is_vegetarian(self) -> bool {
        matches!(self, Self::Vegetarian)
    }
}

impl FormChoice for DietPreference {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("vegetarian", Self::Vegetarian),
        ("non-vegetarian", Self::NonVegetarian),
        ("non_vegetarian", Self::NonVegetarian),
    ];
}

/// Self-reported stress level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StressLevel {
    /// Low stress
    Low,
    /// Medium stress
    Medium,
    /// High stress
    High,
}

impl FormChoice for StressLevel {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("low", Self::Low),
        ("medium", Self::Medium),
        ("high", Self::High),
    ];
}

/// Physical activity level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little to no exercise
    Sedentary,
    /// 1-3 days/week
    Light,
    /// 3-5 days/week
    Moderate,
    /// 6-7 days/week
    Active,
    /// Intense daily exercise
    VeryActive,
}

impl ActivityLevel {
    /// Form label of this level
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
        }
    }
}

impl FormChoice for ActivityLevel {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("sedentary", Self::Sedentary),
        ("light", Self::Light),
        ("moderate", Self::Moderate),
        ("active", Self::Active),
        ("very_active", Self::VeryActive),
    ];
}

/// Alcohol consumption frequency
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlcoholFrequency {
    /// Never drinks
    Never,
    /// Drinks occasionally
    Occasional,
    /// Drinks regularly
    Regular,
}

impl FormChoice for AlcoholFrequency {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("never", Self::Never),
        ("occasional", Self::Occasional),
        ("regular", Self::Regular),
    ];
}

/// Low / moderate / high intake level for a food group
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IntakeLevel {
    /// Low intake
    Low,
    /// Moderate intake
    Moderate,
    /// High intake
    High,
}

impl FormChoice for IntakeLevel {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("low", Self::Low),
        ("moderate", Self::Moderate),
        ("high", Self::High),
    ];
}

/// How often omega-3 sources (fish oil, nuts, seeds) are eaten
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Omega3Frequency {
    /// Regularly
    Yes,
    /// Sometimes
    Sometimes,
    /// Rarely
    Rarely,
}

impl FormChoice for Omega3Frequency {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("yes", Self::Yes),
        ("sometimes", Self::Sometimes),
        ("rarely", Self::Rarely),
    ];
}

/// Vitamin B12 intake (asked of vegetarians only)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum B12Intake {
    /// Supplements or fortified foods regularly
    Yes,
    /// Occasionally
    Sometimes,
    /// Not at all
    No,
}

impl FormChoice for B12Intake {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("yes", Self::Yes),
        ("sometimes", Self::Sometimes),
        ("no", Self::No),
    ];
}

/// Step 1 of the wizard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfo {
    /// Display name; never used in scoring or logs
    pub full_name: String,
    /// Age in years (18-100)
    pub age: u32,
    /// Gender
    pub gender: Gender,
    /// Body weight in kilograms (30-200)
    pub weight_kg: f64,
    /// Height in centimeters (100-250)
    pub height_cm: f64,
    /// Dietary preference
    pub diet_preference: DietPreference,
}

/// Step 2 of the wizard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lifestyle {
    /// Average sleep per night in hours (4-12)
    pub sleep_hours: f64,
    /// Stress level
    pub stress_level: StressLevel,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Current smoker
    pub smoking: bool,
    /// Alcohol frequency
    pub alcohol: AlcoholFrequency,
    /// Daily water intake in liters (0.5-5)
    pub water_intake_liters: f64,
}

/// Step 3 of the wizard
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HealthHistory {
    /// Diagnosed thyroid condition
    pub thyroid: bool,
    /// Diagnosed anemia
    pub anemia: bool,
    /// Diagnosed hormonal imbalance (PCOS etc.)
    pub hormonal_imbalance: bool,
    /// Diagnosed diabetes
    pub diabetes: bool,
    /// Current medications by name
    pub medications: Vec<String>,
    /// Free-text notes
    pub other_conditions: String,
}

/// Step 4 of the wizard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DietInfo {
    /// Meals per day (1-4)
    pub meals_per_day: u8,
    /// Distinct protein sources eaten regularly
    pub protein_sources: BTreeSet<String>,
    /// Vegetable intake
    pub vegetables: IntakeLevel,
    /// Fruit intake
    pub fruits: IntakeLevel,
    /// Processed food intake
    pub processed_foods: IntakeLevel,
    /// Regularly eats iron-rich foods
    pub iron_rich_foods: bool,
    /// Omega-3 source frequency
    pub omega3_sources: Omega3Frequency,
    /// Vitamin B12 intake; `None` when not reported
    pub b12_intake: Option<B12Intake>,
}

/// Opaque reference to an uploaded scalp image
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ScalpImageRef(pub String);

/// Complete, validated wizard profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Basic information
    pub basic_info: BasicInfo,
    /// Lifestyle habits
    pub lifestyle: Lifestyle,
    /// Health history
    pub health: HealthHistory,
    /// Diet information
    pub diet: DietInfo,
    /// Uploaded scalp image references
    #[serde(default)]
    pub scalp_images: Vec<ScalpImageRef>,
}

impl Profile {
    /// Dietary preference shortcut
    #[must_use]
    pub const fn diet_preference(&self) -> DietPreference {
        self.basic_info.diet_preference
    }

    /// Whether the profile follows a vegetarian diet
    #[must_use]
    pub const fn is_vegetarian(&self) -> bool {
        self.basic_info.diet_preference.is_vegetarian()
    }
}
