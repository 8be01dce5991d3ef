// ABOUTME: Nutrition calculation algorithms using peer-reviewed scientific formulas
// ABOUTME: BMI, BMR, TDEE, and the daily protein and iron targets used by the diet plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! Derived-needs pass of the analyzer. All results are rounded to whole units
//! the way they are displayed in the report.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Institute of Medicine (2001). Dietary Reference Intakes for Vitamin A, Vitamin K,
//!   Arsenic, Boron, Chromium, Copper, Iodine, Iron, Manganese, Molybdenum, Nickel,
//!   Silicon, Vanadium, and Zinc.

use crate::config::{
    ActivityFactorsConfig, AnalyzerConfig, BmrConfig, IronConfig, ProteinConfig, ThresholdsConfig,
};
use crate::profile::{ActivityLevel, Gender, Profile, ProfileError};
use serde::{Deserialize, Serialize};

/// BMI band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    /// Below the underweight threshold
    Underweight,
    /// Healthy range
    Normal,
    /// Overweight
    Overweight,
    /// At or above the obese threshold
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value
    #[must_use]
    pub fn from_bmi(bmi: f64, thresholds: &ThresholdsConfig) -> Self {
        if bmi < thresholds.bmi_underweight {
            Self::Underweight
        } else if bmi < thresholds.bmi_overweight {
            Self::Normal
        } else if bmi < thresholds.bmi_obese {
            Self::Overweight
        } else {
            Self::Obese
        }
    }
}

/// Daily targets computed from the profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailyNeeds {
    /// Total daily energy expenditure in kcal
    pub calories: u32,
    /// Protein in grams
    pub protein_g: u32,
    /// Iron in milligrams
    pub iron_mg: u32,
}

fn ensure_positive(field: &'static str, value: f64) -> Result<f64, ProfileError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ProfileError::NotPositive { field, value })
    }
}

/// Round to one decimal place
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Calculate Body Mass Index rounded to one decimal
///
/// Formula: BMI = weight (kg) / height (m)²
///
/// # Errors
///
/// Returns `ProfileError::NotPositive` if weight or height is zero, negative, or not finite
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Result<f64, ProfileError> {
    let weight_kg = ensure_positive("basicInfo.weight", weight_kg)?;
    let height_m = ensure_positive("basicInfo.height", height_cm)? / 100.0;
    Ok(round_tenth(weight_kg / (height_m * height_m)))
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation
///
/// Formula:
/// - Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(years) + 5
/// - Women and other: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(years) - 161
///
/// Ranges are enforced at the wizard boundary, so no clamping happens here.
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female | Gender::Other => config.msj_female_constant,
    };

    weight_component + height_component + age_component + gender_constant
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x Activity Factor
#[must_use]
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> f64 {
    let activity_factor = match activity_level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::Light => config.light,
        ActivityLevel::Moderate => config.moderate,
        ActivityLevel::Active => config.active,
        ActivityLevel::VeryActive => config.very_active,
    };

    bmr * activity_factor
}

/// Calculate daily protein target in grams
///
/// Formula: round(`weight_kg` x (activity multiplier + vegetarian bonus))
#[must_use]
pub fn calculate_protein_target(
    weight_kg: f64,
    activity_level: ActivityLevel,
    vegetarian: bool,
    config: &ProteinConfig,
) -> u32 {
    let mut multiplier = match activity_level {
        ActivityLevel::Sedentary => config.sedentary_g_per_kg,
        ActivityLevel::Light => config.light_g_per_kg,
        ActivityLevel::Moderate => config.moderate_g_per_kg,
        ActivityLevel::Active => config.active_g_per_kg,
        ActivityLevel::VeryActive => config.very_active_g_per_kg,
    };
    if vegetarian {
        multiplier += config.vegetarian_bonus_g_per_kg;
    }

    (weight_kg * multiplier).round() as u32
}

/// Calculate daily iron target in milligrams
///
/// Females under the age limit need 18 mg, everyone else 8 mg. Vegetarians
/// multiply by 1.8 since non-heme iron absorbs poorly.
#[must_use]
pub fn calculate_iron_target(
    age: u32,
    gender: Gender,
    vegetarian: bool,
    config: &IronConfig,
) -> u32 {
    let base = if gender == Gender::Female && age < config.female_age_limit {
        config.premenopausal_female_mg
    } else {
        config.baseline_mg
    };

    if vegetarian {
        (base * config.vegetarian_multiplier).round() as u32
    } else {
        base.round() as u32
    }
}

/// Derive calories, protein, and iron targets for a profile
///
/// # Errors
///
/// Returns `ProfileError::NotPositive` if weight or height is unusable
pub fn calculate_daily_needs(
    profile: &Profile,
    config: &AnalyzerConfig,
) -> Result<DailyNeeds, ProfileError> {
    let basic = &profile.basic_info;
    let weight_kg = ensure_positive("basicInfo.weight", basic.weight_kg)?;
    let height_cm = ensure_positive("basicInfo.height", basic.height_cm)?;
    let activity = profile.lifestyle.activity_level;
    let vegetarian = profile.is_vegetarian();

    let bmr = calculate_mifflin_st_jeor(weight_kg, height_cm, basic.age, basic.gender, &config.bmr);
    let tdee = calculate_tdee(bmr, activity, &config.activity_factors);

    Ok(DailyNeeds {
        calories: tdee.max(0.0).round() as u32,
        protein_g: calculate_protein_target(weight_kg, activity, vegetarian, &config.protein),
        iron_mg: calculate_iron_target(basic.age, basic.gender, vegetarian, &config.iron),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_tenth() {
        assert!((round_tenth(24.221_453) - 24.2).abs() < 1e-9);
        assert!((round_tenth(24.25) - 24.3).abs() < 1e-9);
    }

    #[test]
    fn test_bmi_rejects_zero_height() {
        let err = calculate_bmi(70.0, 0.0).unwrap_err();
        assert_eq!(err.field(), "basicInfo.height");
    }

    #[test]
    fn test_bmi_rejects_nan_weight() {
        assert!(calculate_bmi(f64::NAN, 170.0).is_err());
    }

    #[test]
    fn test_bmi_category_boundaries() {
        let thresholds = ThresholdsConfig::default();
        assert_eq!(BmiCategory::from_bmi(18.4, &thresholds), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5, &thresholds), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0, &thresholds), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0, &thresholds), BmiCategory::Obese);
    }
}
