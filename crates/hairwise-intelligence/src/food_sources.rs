// ABOUTME: Diet-aware food source tables for each tracked nutrient
// ABOUTME: Vegetarian lists never contain meat, fish, or eggs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::nutritional_gaps::Nutrient;
use crate::profile::DietPreference;

const VEGETARIAN_PROTEIN: &[&str] = &[
    "tofu",
    "paneer",
    "Greek yogurt",
    "lentils",
    "quinoa",
    "chickpeas",
    "tempeh",
    "edamame",
];
const OMNIVORE_PROTEIN: &[&str] = &[
    "eggs",
    "Greek yogurt",
    "chicken breast",
    "salmon",
    "lean beef",
    "turkey",
    "cottage cheese",
    "tuna",
];

const VEGETARIAN_IRON: &[&str] = &[
    "spinach (with lemon)",
    "pumpkin seeds",
    "fortified cereals",
    "tofu",
    "dark chocolate",
    "quinoa",
    "beans + vitamin C",
];
const OMNIVORE_IRON: &[&str] = &[
    "red meat",
    "liver",
    "oysters",
    "spinach",
    "fortified cereals",
    "dark chocolate",
];

const VEGETARIAN_OMEGA3: &[&str] = &[
    "flaxseeds",
    "chia seeds",
    "walnuts",
    "hemp seeds",
    "algae oil (DHA)",
    "Brussels sprouts",
];
const OMNIVORE_OMEGA3: &[&str] = &[
    "salmon",
    "mackerel",
    "sardines",
    "herring",
    "walnuts",
    "fish oil supplements",
];

const VEGETARIAN_B12: &[&str] = &[
    "fortified plant milk",
    "nutritional yeast",
    "fortified cereals",
    "B12 supplement (MUST)",
    "fortified tofu",
];
const OMNIVORE_B12: &[&str] = &["eggs", "dairy", "fish", "meat", "fortified cereals"];

const VEGETARIAN_BIOTIN: &[&str] = &[
    "almonds",
    "peanuts",
    "sweet potato",
    "mushrooms",
    "avocado",
    "spinach",
];
const OMNIVORE_BIOTIN: &[&str] = &[
    "eggs (especially yolk)",
    "salmon",
    "sweet potato",
    "almonds",
    "nutritional yeast",
];

const VEGETARIAN_ZINC: &[&str] = &[
    "pumpkin seeds",
    "cashews",
    "chickpeas",
    "lentils",
    "oatmeal",
    "fortified cereals",
];
const OMNIVORE_ZINC: &[&str] = &[
    "oysters",
    "beef",
    "crab",
    "pumpkin seeds",
    "cashews",
    "chickpeas",
];

/// Food sources for a nutrient, most recommended first
#[must_use]
pub const fn food_sources(nutrient: Nutrient, diet: DietPreference) -> &'static [&'static str] {
    let vegetarian = diet.is_vegetarian();
    match (nutrient, vegetarian) {
        (Nutrient::Protein, true) => VEGETARIAN_PROTEIN,
        (Nutrient::Protein, false) => OMNIVORE_PROTEIN,
        (Nutrient::Iron, true) => VEGETARIAN_IRON,
        (Nutrient::Iron, false) => OMNIVORE_IRON,
        (Nutrient::Omega3, true) => VEGETARIAN_OMEGA3,
        (Nutrient::Omega3, false) => OMNIVORE_OMEGA3,
        (Nutrient::VitaminB12, true) => VEGETARIAN_B12,
        (Nutrient::VitaminB12, false) => OMNIVORE_B12,
        (Nutrient::Biotin, true) => VEGETARIAN_BIOTIN,
        (Nutrient::Biotin, false) => OMNIVORE_BIOTIN,
        (Nutrient::Zinc, true) => VEGETARIAN_ZINC,
        (Nutrient::Zinc, false) => OMNIVORE_ZINC,
    }
}
