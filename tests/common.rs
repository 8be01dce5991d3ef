// ABOUTME: Shared test utilities for hairwise integration tests
// ABOUTME: Provides logging setup and reusable wizard profile fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(
    dead_code,
    missing_docs,
    clippy::missing_panics_doc,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Shared test utilities for hairwise tests
//!
//! Fixtures mirror what the wizard posts so tests can tweak one field at a
//! time and observe a single rule change.

use hairwise::intelligence::profile::{
    ActivityLevel, AlcoholFrequency, B12Intake, BasicInfo, DietInfo, DietPreference, Gender,
    HealthHistory, IntakeLevel, Lifestyle, Omega3Frequency, Profile, StressLevel,
};
use serde_json::{json, Value};
use std::collections::BTreeSet;
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests
///
/// Set `TEST_LOG=debug` (or info, trace) to see analyzer pass summaries.
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") | Ok("trace") => Level::TRACE,
            Ok("DEBUG") | Ok("debug") => Level::DEBUG,
            Ok("INFO") | Ok("info") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

fn labels(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

/// Vegetarian woman with short sleep, high stress, low water, and a sedentary day
///
/// Produces protein, iron, and B12 gaps and a risk score of exactly 70.
pub fn vegetarian_profile() -> Profile {
    Profile {
        basic_info: BasicInfo {
            full_name: "Asha Rao".to_owned(),
            age: 30,
            gender: Gender::Female,
            weight_kg: 70.0,
            height_cm: 170.0,
            diet_preference: DietPreference::Vegetarian,
        },
        lifestyle: Lifestyle {
            sleep_hours: 6.0,
            stress_level: StressLevel::High,
            activity_level: ActivityLevel::Sedentary,
            smoking: false,
            alcohol: AlcoholFrequency::Never,
            water_intake_liters: 1.5,
        },
        health: HealthHistory::default(),
        diet: DietInfo {
            meals_per_day: 3,
            protein_sources: labels(&["Tofu"]),
            vegetables: IntakeLevel::Moderate,
            fruits: IntakeLevel::Moderate,
            processed_foods: IntakeLevel::Low,
            iron_rich_foods: false,
            omega3_sources: Omega3Frequency::Yes,
            b12_intake: Some(B12Intake::No),
        },
        scalp_images: Vec::new(),
    }
}

/// Healthy omnivore man with no gaps and no risk factors
pub fn omnivore_profile() -> Profile {
    Profile {
        basic_info: BasicInfo {
            full_name: "Daniel Okafor".to_owned(),
            age: 35,
            gender: Gender::Male,
            weight_kg: 80.0,
            height_cm: 180.0,
            diet_preference: DietPreference::NonVegetarian,
        },
        lifestyle: Lifestyle {
            sleep_hours: 8.0,
            stress_level: StressLevel::Low,
            activity_level: ActivityLevel::Moderate,
            smoking: false,
            alcohol: AlcoholFrequency::Occasional,
            water_intake_liters: 3.0,
        },
        health: HealthHistory::default(),
        diet: DietInfo {
            meals_per_day: 3,
            protein_sources: labels(&["Chicken", "Eggs", "Lentils"]),
            vegetables: IntakeLevel::High,
            fruits: IntakeLevel::Moderate,
            processed_foods: IntakeLevel::Low,
            iron_rich_foods: true,
            omega3_sources: Omega3Frequency::Yes,
            b12_intake: None,
        },
        scalp_images: Vec::new(),
    }
}

/// Wizard payload equivalent to [`vegetarian_profile`], with numbers posted as strings
pub fn vegetarian_wizard_json() -> Value {
    json!({
        "basicInfo": {
            "fullName": "Asha Rao",
            "age": "30",
            "gender": "female",
            "email": "asha@example.com",
            "phone": "+91 98765 43210",
            "weight": "70",
            "height": "170",
            "dietPreference": "vegetarian"
        },
        "lifestyle": {
            "sleepHours": "6",
            "stressLevel": "high",
            "activityLevel": "sedentary",
            "smoking": "no",
            "alcohol": "never",
            "waterIntake": "1.5"
        },
        "health": {
            "thyroid": "no",
            "anemia": "no",
            "hormonal": "no",
            "diabetes": "no",
            "medications": [],
            "otherConditions": ""
        },
        "diet": {
            "mealFrequency": "3",
            "proteinSources": ["Tofu"],
            "vegetables": "moderate",
            "fruits": "moderate",
            "processedFoods": "low",
            "ironRichFoods": "no",
            "fishOilOrNuts": "yes",
            "b12Intake": "no"
        },
        "scalpImages": []
    })
}
