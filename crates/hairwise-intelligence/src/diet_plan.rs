// ABOUTME: Diet plan generation with daily nutrient targets and a four-meal template
// ABOUTME: Vegetarian and non-vegetarian templates; vegetarian plans always carry a B12 target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::nutrition_calculator::DailyNeeds;
use crate::profile::DietPreference;
use serde::{Deserialize, Serialize};

/// Daily nutrient targets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailyTargets {
    /// kcal per day
    pub calories: u32,
    /// Protein, e.g. `63g`
    pub protein: String,
    /// Iron, e.g. `32mg`
    pub iron: String,
    /// Omega-3 target
    pub omega3: String,
    /// Biotin target
    pub biotin: String,
    /// Zinc target
    pub zinc: String,
    /// Water target
    pub water: String,
    /// Vitamin B12 target, vegetarian plans only
    #[serde(
        rename = "vitaminB12",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub vitamin_b12: Option<String>,
}

/// Four-meal sample day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealPlan {
    /// Breakfast items
    pub breakfast: Vec<String>,
    /// Lunch items
    pub lunch: Vec<String>,
    /// Dinner items
    pub dinner: Vec<String>,
    /// Snack items
    pub snacks: Vec<String>,
}

/// Daily targets plus the sample day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DietPlan {
    /// Daily targets
    pub daily_targets: DailyTargets,
    /// Sample meals
    pub meal_plan: MealPlan,
}

impl MealPlan {
    /// Every item of every meal, in meal order
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.breakfast
            .iter()
            .chain(&self.lunch)
            .chain(&self.dinner)
            .chain(&self.snacks)
            .map(String::as_str)
    }

    fn from_template(template: &MealTemplate) -> Self {
        let owned = |items: &[&str]| -> Vec<String> {
            items.iter().map(|item| (*item).to_owned()).collect()
        };
        Self {
            breakfast: owned(template.breakfast),
            lunch: owned(template.lunch),
            dinner: owned(template.dinner),
            snacks: owned(template.snacks),
        }
    }
}

struct MealTemplate {
    breakfast: &'static [&'static str],
    lunch: &'static [&'static str],
    dinner: &'static [&'static str],
    snacks: &'static [&'static str],
}

const VEGETARIAN_MEALS: MealTemplate = MealTemplate {
    breakfast: &[
        "Tofu scramble with turmeric (15g protein, biotin)",
        "1 cup cooked spinach with lemon juice (iron + vitamin C)",
        "2 slices whole grain toast with almond butter",
        "1/4 avocado (healthy fats, biotin)",
    ],
    lunch: &[
        "1.5 cups lentil dal / chickpea curry (18g protein, iron)",
        "1 cup quinoa / brown rice (complete protein)",
        "Mixed vegetable salad with 2 tbsp pumpkin seeds (zinc)",
        "1 cup fortified soy milk (B12, calcium)",
    ],
    dinner: &[
        "150g paneer / tofu stir-fry (20g protein)",
        "1.5 cups mixed vegetables (broccoli, peppers for vitamin C)",
        "1 medium sweet potato (biotin, complex carbs)",
        "1 tbsp flaxseed powder (omega-3)",
    ],
    snacks: &[
        "1/4 cup almonds or walnuts (omega-3, biotin)",
        "1 cup Greek yogurt with chia seeds (protein, omega-3)",
        "Handful of roasted chickpeas (protein, iron)",
        "B12 supplement (1000mcg weekly) - ESSENTIAL",
    ],
};

const OMNIVORE_MEALS: MealTemplate = MealTemplate {
    breakfast: &[
        "2 whole eggs + 2 egg whites (25g protein, biotin)",
        "1 cup spinach omelette (iron)",
        "1 slice whole grain toast",
        "1/4 avocado (healthy fats)",
    ],
    lunch: &[
        "150g grilled chicken/salmon (35g protein, omega-3)",
        "1.5 cups mixed greens salad",
        "1/2 cup quinoa (iron, complete protein)",
        "2 tbsp pumpkin seeds (zinc, iron)",
    ],
    dinner: &[
        "150g lean beef / grilled fish (30g protein, iron, B12)",
        "1 cup broccoli (vitamin C for iron absorption)",
        "1 medium sweet potato (biotin, complex carbs)",
        "1 tbsp olive oil dressing",
    ],
    snacks: &[
        "1/4 cup mixed nuts (biotin, protein)",
        "1 cup Greek yogurt (20g protein, B12)",
        "Sardines on crackers (omega-3, calcium)",
        "Handful of walnuts (omega-3)",
    ],
};

/// Build the diet plan for a diet preference and computed needs
#[must_use]
pub fn generate_diet_plan(diet: DietPreference, needs: &DailyNeeds) -> DietPlan {
    let vegetarian = diet.is_vegetarian();
    let (omega3, zinc, template) = if vegetarian {
        ("2-3 tbsp flax/chia seeds", "10-12mg", &VEGETARIAN_MEALS)
    } else {
        ("250-500mg EPA+DHA", "8-11mg", &OMNIVORE_MEALS)
    };

    DietPlan {
        daily_targets: DailyTargets {
            calories: needs.calories,
            protein: format!("{}g", needs.protein_g),
            iron: format!("{}mg", needs.iron_mg),
            omega3: omega3.to_owned(),
            biotin: "30-100mcg".to_owned(),
            zinc: zinc.to_owned(),
            water: "2.5-3L".to_owned(),
            vitamin_b12: vegetarian.then(|| "2.4mcg (supplement REQUIRED)".to_owned()),
        },
        meal_plan: MealPlan::from_template(template),
    }
}
