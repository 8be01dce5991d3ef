// ABOUTME: Integration tests for the hair health analyzer
// ABOUTME: Covers scoring bounds, ranking, thresholds, diet safety, and full reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use hairwise::intelligence::analyzer::ScalpAssessment;
use hairwise::intelligence::insights::DEFAULT_PRIMARY_ISSUE;
use hairwise::intelligence::nutrition_calculator::BmiCategory;
use hairwise::intelligence::nutritional_gaps::{Nutrient, Severity};
use hairwise::intelligence::profile::{
    ActivityLevel, B12Intake, Gender, IntakeLevel, Omega3Frequency, ScalpImageRef, StressLevel,
};
use hairwise::intelligence::recommendation_engine::RecommendationCategory;
use hairwise::intelligence::root_causes::Priority;
use hairwise::intelligence::timeline::SEVERITY_CAVEAT;
use hairwise::{AnalysisResult, AnalyzerConfig, HairHealthAnalyzer, Profile, ProfileError};

fn analyze(profile: &Profile) -> AnalysisResult {
    common::init_test_logging();
    HairHealthAnalyzer::with_config(AnalyzerConfig::default())
        .analyze(profile)
        .expect("profile should analyze")
}

fn gap_nutrients(result: &AnalysisResult) -> Vec<Nutrient> {
    result
        .nutritional_gaps
        .iter()
        .map(|gap| gap.nutrient)
        .collect()
}

fn cause_names(result: &AnalysisResult) -> Vec<&str> {
    result
        .root_causes
        .iter()
        .map(|cause| cause.cause.as_str())
        .collect()
}

// ============================================================================
// Full Report Tests
// ============================================================================

#[test]
fn test_vegetarian_end_to_end_report() {
    let result = analyze(&common::vegetarian_profile());

    assert!((result.bmi - 24.2).abs() < 1e-9, "BMI was {}", result.bmi);
    assert_eq!(result.bmi_category, BmiCategory::Normal);

    assert_eq!(
        gap_nutrients(&result),
        vec![Nutrient::Protein, Nutrient::Iron, Nutrient::VitaminB12]
    );
    assert_eq!(result.nutritional_gaps[0].severity, Severity::High);
    assert_eq!(
        result.nutritional_gaps[0].recommended,
        "63g per day from plant sources"
    );
    assert_eq!(result.nutritional_gaps[1].severity, Severity::Critical);
    assert_eq!(
        result.nutritional_gaps[1].recommended,
        "32mg per day (with vitamin C for absorption)"
    );

    // Lifestyle 15 + 20 + 10 + 10, plus 5 per gap
    assert_eq!(result.risk_score, 70);

    let confidences: Vec<u8> = result.root_causes.iter().map(|c| c.confidence).collect();
    assert_eq!(confidences, vec![90, 88, 82, 78, 72]);
    assert_eq!(
        cause_names(&result),
        vec![
            "Vitamin B12 Deficiency",
            "Iron Deficiency",
            "Insufficient Protein Diversity",
            "Chronic Stress (Telogen Effluvium)",
            "Sleep Deprivation",
        ]
    );
    assert_eq!(result.root_causes[0].priority, Priority::Critical);

    let categories: Vec<RecommendationCategory> =
        result.recommendations.iter().map(|r| r.category).collect();
    assert_eq!(
        categories,
        vec![
            RecommendationCategory::Nutrition,
            RecommendationCategory::Nutrition,
            RecommendationCategory::Nutrition,
            RecommendationCategory::Sleep,
            RecommendationCategory::StressManagement,
        ]
    );
    assert_eq!(result.recommendations[2].title, "Address Vitamin B12 Deficiency");

    let targets = &result.diet_plan.daily_targets;
    assert_eq!(targets.calories, 1742);
    assert_eq!(targets.protein, "63g");
    assert_eq!(targets.iron, "32mg");
    assert!(targets.vitamin_b12.is_some());

    // Exactly at the extension threshold, so no caveat
    assert_eq!(result.timeline.len(), 5);
    assert!(result
        .timeline
        .iter()
        .all(|phase| !phase.changes.ends_with(SEVERITY_CAVEAT)));

    let insights = &result.insights;
    assert_eq!(insights.primary_issue, "Vitamin B12 Deficiency");
    assert_eq!(
        insights.key_finding,
        "2 critical deficiencies identified - requires immediate attention"
    );
    assert_eq!(insights.confidence, "85-92%");
    assert_eq!(
        insights.success_probability,
        "Moderate (55-70%) - Consider medical consultation"
    );
    assert_eq!(insights.expected_timeframe, "16-20 weeks with medical support");

    assert_eq!(result.scalp_assessment, ScalpAssessment::NoImages);
}

#[test]
fn test_healthy_omnivore_report() {
    let result = analyze(&common::omnivore_profile());

    assert!((result.bmi - 24.7).abs() < 1e-9, "BMI was {}", result.bmi);
    assert_eq!(result.risk_score, 0);
    assert!(result.nutritional_gaps.is_empty());
    assert!(result.root_causes.is_empty());
    assert!(result.recommendations.is_empty());

    let targets = &result.diet_plan.daily_targets;
    assert_eq!(targets.calories, 2720);
    assert_eq!(targets.protein, "80g");
    assert_eq!(targets.iron, "8mg");
    assert!(targets.vitamin_b12.is_none());

    assert_eq!(result.insights.primary_issue, DEFAULT_PRIMARY_ISSUE);
    assert_eq!(
        result.insights.key_finding,
        "0 nutritional gaps affecting hair health"
    );
    assert_eq!(result.insights.success_probability, "Very High (85-90%)");
    assert_eq!(result.insights.expected_timeframe, "10-14 weeks");
}

#[test]
fn test_report_serializes_camel_case() {
    let result = analyze(&common::vegetarian_profile());
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["riskScore"], 70);
    assert_eq!(json["bmiCategory"], "normal");
    assert_eq!(json["nutritionalGaps"][2]["nutrient"], "Vitamin B12");
    assert_eq!(json["nutritionalGaps"][2]["severity"], "critical");
    assert_eq!(json["rootCauses"][0]["priority"], "critical");
    assert_eq!(json["recommendations"][4]["category"], "Stress Management");
    assert!(json["recommendations"][3].get("foodSources").is_none());
    assert_eq!(
        json["dietPlan"]["dailyTargets"]["vitaminB12"],
        "2.4mcg (supplement REQUIRED)"
    );
    assert_eq!(json["scalpAssessment"]["status"], "noImages");
    assert_eq!(json["lifestyleChanges"][0]["current"], "1.5L/day");
}

#[test]
fn test_analysis_is_idempotent() {
    let profile = common::vegetarian_profile();
    let analyzer = HairHealthAnalyzer::with_config(AnalyzerConfig::default());

    let first = analyzer.analyze(&profile).unwrap();
    let second = analyzer.analyze(&profile).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

// ============================================================================
// Risk Score Bounds Tests
// ============================================================================

#[test]
fn test_risk_score_stays_within_bounds() {
    let base = common::vegetarian_profile();
    for sleep in [4.0, 6.99, 7.0, 12.0] {
        for stress in [StressLevel::Low, StressLevel::Medium, StressLevel::High] {
            for smoking in [false, true] {
                for condition in [false, true] {
                    for activity in [ActivityLevel::Sedentary, ActivityLevel::VeryActive] {
                        let mut profile = base.clone();
                        profile.lifestyle.sleep_hours = sleep;
                        profile.lifestyle.stress_level = stress;
                        profile.lifestyle.smoking = smoking;
                        profile.lifestyle.activity_level = activity;
                        profile.health.thyroid = condition;
                        profile.health.anemia = condition;
                        profile.health.hormonal_imbalance = condition;

                        let result = analyze(&profile);
                        assert!(result.risk_score <= 100, "risk {}", result.risk_score);
                        assert!(result.root_causes.len() <= 5);
                        assert!(result
                            .root_causes
                            .windows(2)
                            .all(|pair| pair[0].confidence >= pair[1].confidence));
                    }
                }
            }
        }
    }
}

#[test]
fn test_worst_case_risk_clamps_at_100() {
    let mut profile = common::vegetarian_profile();
    profile.lifestyle.smoking = true;
    profile.health.thyroid = true;
    profile.health.anemia = true;
    profile.health.hormonal_imbalance = true;
    profile.health.medications = vec!["Isotretinoin".to_owned()];
    profile.diet.omega3_sources = Omega3Frequency::Rarely;
    profile.diet.processed_foods = IntakeLevel::High;
    profile.diet.vegetables = IntakeLevel::Low;

    let result = analyze(&profile);
    assert_eq!(result.nutritional_gaps.len(), 6);
    assert_eq!(result.risk_score, 100);
    assert!(result
        .timeline
        .iter()
        .all(|phase| phase.changes.ends_with(SEVERITY_CAVEAT)));
}

#[test]
fn test_health_history_adds_to_risk() {
    let mut profile = common::omnivore_profile();
    profile.health.thyroid = true;
    profile.health.medications = vec!["Levothyroxine".to_owned()];
    assert_eq!(analyze(&profile).risk_score, 30);

    // Diabetes and free-text conditions are recorded but not scored
    let mut profile = common::omnivore_profile();
    profile.health.diabetes = true;
    profile.health.other_conditions = "PCOS".to_owned();
    assert_eq!(analyze(&profile).risk_score, 0);
}

// ============================================================================
// Threshold Boundary Tests
// ============================================================================

#[test]
fn test_sleep_threshold_is_strict() {
    let mut profile = common::omnivore_profile();
    profile.lifestyle.sleep_hours = 7.0;
    let at_threshold = analyze(&profile);
    assert_eq!(at_threshold.risk_score, 0);
    assert!(at_threshold.root_causes.is_empty());

    profile.lifestyle.sleep_hours = 6.99;
    let below = analyze(&profile);
    assert_eq!(below.risk_score, 15);
    assert_eq!(cause_names(&below), vec!["Sleep Deprivation"]);
    assert_eq!(below.recommendations.len(), 1);
    assert_eq!(below.recommendations[0].category, RecommendationCategory::Sleep);
}

#[test]
fn test_protein_variety_threshold() {
    let mut profile = common::omnivore_profile();
    profile.diet.protein_sources = ["Chicken", "Eggs"].iter().map(|s| (*s).to_owned()).collect();
    assert!(!gap_nutrients(&analyze(&profile)).contains(&Nutrient::Protein));

    profile.diet.protein_sources = ["Chicken"].iter().map(|s| (*s).to_owned()).collect();
    let result = analyze(&profile);
    assert_eq!(gap_nutrients(&result), vec![Nutrient::Protein]);
    assert_eq!(
        result.nutritional_gaps[0].recommended,
        "80g per day from diverse sources"
    );
    assert_eq!(result.risk_score, 5);
}

#[test]
fn test_water_threshold_is_strict() {
    let mut profile = common::omnivore_profile();
    profile.lifestyle.water_intake_liters = 2.0;
    assert_eq!(analyze(&profile).risk_score, 0);

    profile.lifestyle.water_intake_liters = 1.9;
    assert_eq!(analyze(&profile).risk_score, 10);
}

// ============================================================================
// Diet-Specific Rule Tests
// ============================================================================

#[test]
fn test_vegetarian_meal_plan_is_meat_free() {
    let result = analyze(&common::vegetarian_profile());
    let forbidden = ["chicken", "salmon", "beef", "fish", "egg", "sardine", "turkey"];

    for item in result.diet_plan.meal_plan.items() {
        let lowered = item.to_lowercase();
        for word in forbidden {
            assert!(
                !lowered.contains(word),
                "vegetarian meal item `{item}` mentions {word}"
            );
        }
    }
}

#[test]
fn test_vegetarian_without_b12_gets_critical_gap() {
    for intake in [Some(B12Intake::No), None] {
        let mut profile = common::vegetarian_profile();
        profile.diet.b12_intake = intake;
        let result = analyze(&profile);
        let gap = result
            .nutritional_gaps
            .iter()
            .find(|gap| gap.nutrient == Nutrient::VitaminB12)
            .expect("B12 gap expected");
        assert_eq!(gap.severity, Severity::Critical);
    }

    let mut profile = common::vegetarian_profile();
    profile.diet.b12_intake = Some(B12Intake::Sometimes);
    assert!(!gap_nutrients(&analyze(&profile)).contains(&Nutrient::VitaminB12));
}

#[test]
fn test_omnivore_b12_answer_is_ignored() {
    let mut profile = common::omnivore_profile();
    profile.diet.b12_intake = Some(B12Intake::No);
    assert!(analyze(&profile).nutritional_gaps.is_empty());
}

#[test]
fn test_omnivore_male_iron_gap_is_high_not_critical() {
    let mut profile = common::omnivore_profile();
    profile.diet.iron_rich_foods = false;
    let result = analyze(&profile);

    assert_eq!(gap_nutrients(&result), vec![Nutrient::Iron]);
    assert_eq!(result.nutritional_gaps[0].severity, Severity::High);
    assert_eq!(result.nutritional_gaps[0].recommended, "8mg per day");
    assert_eq!(result.root_causes[0].cause, "Iron Deficiency");
    assert_eq!(result.root_causes[0].confidence, 75);

    profile.basic_info.gender = Gender::Female;
    let result = analyze(&profile);
    assert_eq!(result.nutritional_gaps[0].severity, Severity::Critical);
    assert_eq!(result.root_causes[0].confidence, 88);
}

#[test]
fn test_remaining_gap_triggers_in_order() {
    let mut profile = common::omnivore_profile();
    profile.diet.omega3_sources = Omega3Frequency::Rarely;
    profile.diet.processed_foods = IntakeLevel::High;
    profile.diet.vegetables = IntakeLevel::Low;

    let result = analyze(&profile);
    assert_eq!(
        gap_nutrients(&result),
        vec![Nutrient::Omega3, Nutrient::Zinc, Nutrient::Biotin]
    );
    assert!(result
        .nutritional_gaps
        .iter()
        .all(|gap| gap.severity == Severity::Medium));
    assert_eq!(
        result.insights.key_finding,
        "3 nutritional gaps affecting hair health"
    );
}

// ============================================================================
// BMI Tests
// ============================================================================

#[test]
fn test_underweight_bmi_is_a_root_cause() {
    let mut profile = common::omnivore_profile();
    profile.basic_info.weight_kg = 45.0;
    let result = analyze(&profile);

    assert_eq!(result.bmi_category, BmiCategory::Underweight);
    assert_eq!(cause_names(&result), vec!["BMI Imbalance"]);
    assert_eq!(result.root_causes[0].confidence, 68);
    assert!(result.root_causes[0].description.starts_with("Underweight status"));
}

#[test]
fn test_only_obese_bmi_is_a_root_cause() {
    let mut profile = common::omnivore_profile();
    profile.basic_info.weight_kg = 95.0;
    let overweight = analyze(&profile);
    assert_eq!(overweight.bmi_category, BmiCategory::Overweight);
    assert!(overweight.root_causes.is_empty());

    profile.basic_info.weight_kg = 110.0;
    let obese = analyze(&profile);
    assert_eq!(obese.bmi_category, BmiCategory::Obese);
    assert_eq!(cause_names(&obese), vec!["BMI Imbalance"]);
    assert!(obese.root_causes[0].description.starts_with("Overweight status"));
}

#[test]
fn test_zero_height_is_rejected() {
    let mut profile = common::omnivore_profile();
    profile.basic_info.height_cm = 0.0;
    let err = HairHealthAnalyzer::with_config(AnalyzerConfig::default())
        .analyze(&profile)
        .unwrap_err();
    assert!(matches!(
        err,
        ProfileError::NotPositive {
            field: "basicInfo.height",
            ..
        }
    ));
}

#[test]
fn test_non_finite_weight_is_rejected() {
    let mut profile = common::omnivore_profile();
    profile.basic_info.weight_kg = f64::NAN;
    let err = HairHealthAnalyzer::with_config(AnalyzerConfig::default())
        .analyze(&profile)
        .unwrap_err();
    assert_eq!(err.field(), "basicInfo.weight");
}

// ============================================================================
// Report Section Tests
// ============================================================================

#[test]
fn test_lifestyle_changes_echo_current_values() {
    let result = analyze(&common::vegetarian_profile());
    let changes = &result.lifestyle_changes;

    assert_eq!(changes.len(), 3);
    assert_eq!(changes[0].area, "Hydration");
    assert_eq!(changes[0].current, "1.5L/day");
    assert_eq!(changes[1].area, "Sleep");
    assert_eq!(changes[1].current, "6 hours");
    assert_eq!(changes[2].area, "Exercise");
    assert_eq!(changes[2].current, "sedentary");
}

#[test]
fn test_scalp_images_are_counted_not_analyzed() {
    let mut profile = common::omnivore_profile();
    profile.scalp_images = vec![
        ScalpImageRef("uploads/crown.jpg".to_owned()),
        ScalpImageRef("uploads/hairline.jpg".to_owned()),
    ];
    let result = analyze(&profile);
    assert_eq!(
        result.scalp_assessment,
        ScalpAssessment::NotAnalyzed { image_count: 2 }
    );
    // Images never change the score
    assert_eq!(result.risk_score, 0);
}

#[test]
fn test_custom_config_changes_thresholds() {
    let mut config = AnalyzerConfig::default();
    config.thresholds.sleep_min_hours = 6.0;
    config.thresholds.timeline_extension_risk = 40;
    let analyzer = HairHealthAnalyzer::with_config(config);

    let result = analyzer.analyze(&common::vegetarian_profile()).unwrap();
    // Six hours no longer counts as short sleep
    assert_eq!(result.risk_score, 55);
    assert!(!cause_names(&result).contains(&"Sleep Deprivation"));
    assert!(result
        .timeline
        .iter()
        .all(|phase| phase.changes.ends_with(SEVERITY_CAVEAT)));
    assert!((analyzer.config().thresholds.sleep_min_hours - 6.0).abs() < f64::EPSILON);
}

#[test]
fn test_root_causes_truncate_to_configured_limit() {
    let mut config = AnalyzerConfig::default();
    config.thresholds.max_root_causes = 2;
    let result = HairHealthAnalyzer::with_config(config)
        .analyze(&common::vegetarian_profile())
        .unwrap();
    assert_eq!(
        cause_names(&result),
        vec!["Vitamin B12 Deficiency", "Iron Deficiency"]
    );
}
