// ABOUTME: Raw wizard payload and its validated conversion into a Profile
// ABOUTME: Rejects missing, blank, non-finite, out-of-range, and unknown values at the boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Wizard boundary
//!
//! The wizard posts loosely-typed JSON: numbers arrive as strings from text
//! inputs, yes/no questions arrive either as `"yes"`/`"no"` or as booleans,
//! and untouched fields are empty strings. [`ProfileForm`] accepts that shape
//! and `Profile::try_from` turns it into a [`Profile`] or a [`ProfileError`].

use crate::profile::{
    ActivityLevel, AlcoholFrequency, B12Intake, BasicInfo, DietInfo, DietPreference, FormChoice,
    Gender, HealthHistory, IntakeLevel, Lifestyle, Omega3Frequency, Profile, ProfileError,
    ScalpImageRef, StressLevel,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

/// Age bounds in years
pub const AGE_RANGE: RangeInclusive<f64> = 18.0..=100.0;
/// Weight bounds in kilograms
pub const WEIGHT_RANGE: RangeInclusive<f64> = 30.0..=200.0;
/// Height bounds in centimeters
pub const HEIGHT_RANGE: RangeInclusive<f64> = 100.0..=250.0;
/// Sleep bounds in hours
pub const SLEEP_RANGE: RangeInclusive<f64> = 4.0..=12.0;
/// Water bounds in liters
pub const WATER_RANGE: RangeInclusive<f64> = 0.5..=5.0;
/// Meals per day bounds
pub const MEALS_RANGE: RangeInclusive<f64> = 1.0..=4.0;

/// A form value that may arrive as a JSON number, boolean, or string
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FormValue {
    /// Boolean toggle
    Flag(bool),
    /// Numeric input
    Number(f64),
    /// Text input or select value
    Text(String),
}

impl FormValue {
    fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.trim().is_empty())
    }

    fn raw(&self) -> String {
        match self {
            Self::Flag(flag) => flag.to_string(),
            Self::Number(number) => number.to_string(),
            Self::Text(text) => text.clone(),
        }
    }
}

/// Step 1 as posted by the wizard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BasicInfoForm {
    /// Full name
    pub full_name: Option<String>,
    /// Age
    pub age: Option<FormValue>,
    /// Gender
    pub gender: Option<String>,
    /// Contact email; collected by the wizard, not used by the engine
    pub email: Option<String>,
    /// Contact phone; collected by the wizard, not used by the engine
    pub phone: Option<String>,
    /// Weight in kg
    pub weight: Option<FormValue>,
    /// Height in cm
    pub height: Option<FormValue>,
    /// Diet preference
    pub diet_preference: Option<String>,
}

/// Step 2 as posted by the wizard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LifestyleForm {
    /// Sleep hours
    pub sleep_hours: Option<FormValue>,
    /// Stress level
    pub stress_level: Option<String>,
    /// Activity level
    pub activity_level: Option<String>,
    /// Smoking yes/no
    pub smoking: Option<FormValue>,
    /// Alcohol frequency
    pub alcohol: Option<String>,
    /// Water intake in liters
    pub water_intake: Option<FormValue>,
}

/// Step 3 as posted by the wizard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthForm {
    /// Thyroid yes/no
    pub thyroid: Option<FormValue>,
    /// Anemia yes/no
    pub anemia: Option<FormValue>,
    /// Hormonal imbalance yes/no
    pub hormonal: Option<FormValue>,
    /// Diabetes yes/no
    pub diabetes: Option<FormValue>,
    /// Medication names
    pub medications: Vec<String>,
    /// Free text
    pub other_conditions: Option<String>,
}

/// Step 4 as posted by the wizard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DietForm {
    /// Meals per day
    pub meal_frequency: Option<FormValue>,
    /// Protein source labels
    pub protein_sources: Vec<String>,
    /// Vegetable level
    pub vegetables: Option<String>,
    /// Fruit level
    pub fruits: Option<String>,
    /// Processed food level
    pub processed_foods: Option<String>,
    /// Iron-rich foods toggle
    pub iron_rich_foods: Option<FormValue>,
    /// Omega-3 frequency (fish oil or nuts)
    pub fish_oil_or_nuts: Option<String>,
    /// B12 intake for vegetarians
    pub b12_intake: Option<String>,
}

/// Complete wizard payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileForm {
    /// Step 1
    pub basic_info: BasicInfoForm,
    /// Step 2
    pub lifestyle: LifestyleForm,
    /// Step 3
    pub health: HealthForm,
    /// Step 4
    pub diet: DietForm,
    /// Step 5
    pub scalp_images: Vec<String>,
}

fn present<'a>(
    field: &'static str,
    value: Option<&'a FormValue>,
) -> Result<&'a FormValue, ProfileError> {
    value
        .filter(|value| !value.is_blank())
        .ok_or(ProfileError::MissingField(field))
}

fn required_text<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str, ProfileError> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .ok_or(ProfileError::MissingField(field))
}

fn required_number(
    field: &'static str,
    value: Option<&FormValue>,
    range: &RangeInclusive<f64>,
) -> Result<f64, ProfileError> {
    let value = present(field, value)?;
    let number = match value {
        FormValue::Number(number) => *number,
        FormValue::Text(text) => {
            text.trim()
                .parse::<f64>()
                .map_err(|_| ProfileError::InvalidChoice {
                    field,
                    value: text.clone(),
                    expected: "a number".to_owned(),
                })?
        }
        FormValue::Flag(_) => {
            return Err(ProfileError::InvalidChoice {
                field,
                value: value.raw(),
                expected: "a number".to_owned(),
            })
        }
    };

    if !number.is_finite() {
        return Err(ProfileError::NotPositive {
            field,
            value: number,
        });
    }
    if !range.contains(&number) {
        return Err(ProfileError::OutOfRange {
            field,
            value: number,
            min: *range.start(),
            max: *range.end(),
        });
    }
    Ok(number)
}

fn whole_number(
    field: &'static str,
    value: Option<&FormValue>,
    range: &RangeInclusive<f64>,
) -> Result<u32, ProfileError> {
    let number = required_number(field, value, range)?;
    if number.fract() != 0.0 {
        return Err(ProfileError::InvalidChoice {
            field,
            value: number.to_string(),
            expected: "a whole number".to_owned(),
        });
    }
    // Safe: range-checked above, well within u32
    Ok(number as u32)
}

fn parse_flag(field: &'static str, value: &FormValue) -> Result<bool, ProfileError> {
    match value {
        FormValue::Flag(flag) => Ok(*flag),
        FormValue::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "yes" | "true" => Ok(true),
            "no" | "false" => Ok(false),
            _ => Err(ProfileError::InvalidChoice {
                field,
                value: text.clone(),
                expected: "yes, no".to_owned(),
            }),
        },
        FormValue::Number(_) => Err(ProfileError::InvalidChoice {
            field,
            value: value.raw(),
            expected: "yes, no".to_owned(),
        }),
    }
}

fn required_flag(field: &'static str, value: Option<&FormValue>) -> Result<bool, ProfileError> {
    parse_flag(field, present(field, value)?)
}

fn optional_flag(field: &'static str, value: Option<&FormValue>) -> Result<bool, ProfileError> {
    match value.filter(|value| !value.is_blank()) {
        Some(value) => parse_flag(field, value),
        None => Ok(false),
    }
}

fn required_choice<T: FormChoice>(
    field: &'static str,
    value: Option<&str>,
) -> Result<T, ProfileError> {
    T::parse_choice(field, required_text(field, value)?)
}

fn optional_choice<T: FormChoice>(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<T>, ProfileError> {
    match value.map(str::trim).filter(|text| !text.is_empty()) {
        Some(text) => T::parse_choice(field, text).map(Some),
        None => Ok(None),
    }
}

/// Trim labels and drop blanks and case-insensitive duplicates, keeping the first spelling
fn distinct_labels(labels: &[String]) -> BTreeSet<String> {
    let mut seen = BTreeSet::new();
    let mut distinct = BTreeSet::new();
    for label in labels.iter().map(|label| label.trim()).filter(|l| !l.is_empty()) {
        if seen.insert(label.to_lowercase()) {
            distinct.insert(label.to_owned());
        }
    }
    distinct
}

impl TryFrom<&BasicInfoForm> for BasicInfo {
    type Error = ProfileError;

    fn try_from(form: &BasicInfoForm) -> Result<Self, Self::Error> {
        Ok(Self {
            full_name: required_text("basicInfo.fullName", form.full_name.as_deref())?.to_owned(),
            age: whole_number("basicInfo.age", form.age.as_ref(), &AGE_RANGE)?,
            gender: required_choice::<Gender>("basicInfo.gender", form.gender.as_deref())?,
            weight_kg: required_number("basicInfo.weight", form.weight.as_ref(), &WEIGHT_RANGE)?,
            height_cm: required_number("basicInfo.height", form.height.as_ref(), &HEIGHT_RANGE)?,
            diet_preference: required_choice::<DietPreference>(
                "basicInfo.dietPreference",
                form.diet_preference.as_deref(),
            )?,
        })
    }
}

impl TryFrom<&LifestyleForm> for Lifestyle {
    type Error = ProfileError;

    fn try_from(form: &LifestyleForm) -> Result<Self, Self::Error> {
        Ok(Self {
            sleep_hours: required_number(
                "lifestyle.sleepHours",
                form.sleep_hours.as_ref(),
                &SLEEP_RANGE,
            )?,
            stress_level: required_choice::<StressLevel>(
                "lifestyle.stressLevel",
                form.stress_level.as_deref(),
            )?,
            activity_level: required_choice::<ActivityLevel>(
                "lifestyle.activityLevel",
                form.activity_level.as_deref(),
            )?,
            smoking: required_flag("lifestyle.smoking", form.smoking.as_ref())?,
            alcohol: optional_choice::<AlcoholFrequency>(
                "lifestyle.alcohol",
                form.alcohol.as_deref(),
            )?
            .unwrap_or(AlcoholFrequency::Occasional),
            water_intake_liters: required_number(
                "lifestyle.waterIntake",
                form.water_intake.as_ref(),
                &WATER_RANGE,
            )?,
        })
    }
}

impl TryFrom<&HealthForm> for HealthHistory {
    type Error = ProfileError;

    fn try_from(form: &HealthForm) -> Result<Self, Self::Error> {
        Ok(Self {
            thyroid: optional_flag("health.thyroid", form.thyroid.as_ref())?,
            anemia: optional_flag("health.anemia", form.anemia.as_ref())?,
            hormonal_imbalance: optional_flag("health.hormonal", form.hormonal.as_ref())?,
            diabetes: optional_flag("health.diabetes", form.diabetes.as_ref())?,
            medications: form
                .medications
                .iter()
                .map(|name| name.trim())
                .filter(|name| !name.is_empty())
                .map(str::to_owned)
                .collect(),
            other_conditions: form
                .other_conditions
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_owned(),
        })
    }
}

impl TryFrom<&DietForm> for DietInfo {
    type Error = ProfileError;

    fn try_from(form: &DietForm) -> Result<Self, Self::Error> {
        let meals = whole_number(
            "diet.mealFrequency",
            form.meal_frequency.as_ref(),
            &MEALS_RANGE,
        )?;
        Ok(Self {
            // Safe: MEALS_RANGE caps the value at 4
            meals_per_day: meals as u8,
            protein_sources: distinct_labels(&form.protein_sources),
            vegetables: required_choice::<IntakeLevel>(
                "diet.vegetables",
                form.vegetables.as_deref(),
            )?,
            fruits: required_choice::<IntakeLevel>("diet.fruits", form.fruits.as_deref())?,
            processed_foods: required_choice::<IntakeLevel>(
                "diet.processedFoods",
                form.processed_foods.as_deref(),
            )?,
            iron_rich_foods: required_flag("diet.ironRichFoods", form.iron_rich_foods.as_ref())?,
            omega3_sources: required_choice::<Omega3Frequency>(
                "diet.fishOilOrNuts",
                form.fish_oil_or_nuts.as_deref(),
            )?,
            b12_intake: optional_choice::<B12Intake>("diet.b12Intake", form.b12_intake.as_deref())?,
        })
    }
}

impl TryFrom<&ProfileForm> for Profile {
    type Error = ProfileError;

    fn try_from(form: &ProfileForm) -> Result<Self, Self::Error> {
        Ok(Self {
            basic_info: BasicInfo::try_from(&form.basic_info)?,
            lifestyle: Lifestyle::try_from(&form.lifestyle)?,
            health: HealthHistory::try_from(&form.health)?,
            diet: DietInfo::try_from(&form.diet)?,
            scalp_images: form
                .scalp_images
                .iter()
                .filter(|reference| !reference.trim().is_empty())
                .map(|reference| ScalpImageRef(reference.clone()))
                .collect(),
        })
    }
}

impl TryFrom<ProfileForm> for Profile {
    type Error = ProfileError;

    fn try_from(form: ProfileForm) -> Result<Self, Self::Error> {
        Self::try_from(&form)
    }
}
