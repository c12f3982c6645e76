// ABOUTME: Tests for meal and training templates
// ABOUTME: Caloric band selection, allergen filtering, and guide content
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitform contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitform::config::EstimationConfig;
use fitform::intelligence::estimation_engine::estimate_with;
use fitform::intelligence::meal_plan::{
    generate_meal_plan, generate_meal_template, template_line, training_suggestion, CaloricBand,
    ALL_ITEMS_FILTERED,
};
use fitform::models::{ActivityLevel, ClientContact, Goal};

mod common;

use common::{profile_with, reference_profile, sample_contact};

#[test]
fn test_template_starts_with_rounded_target() {
    let result = estimate_with(&reference_profile(), &EstimationConfig::default()).unwrap();
    let text = generate_meal_template(&result, Goal::Lose);

    assert!(text.starts_with("Daily target: 2044 kcal / P140g F56g C245g"));
    assert!(text.contains(template_line(Goal::Lose, CaloricBand::Moderate)));
    assert!(text.contains(training_suggestion(Goal::Lose)));
}

#[test]
fn test_template_varies_with_band() {
    let config = EstimationConfig::default();
    let gain = estimate_with(
        &profile_with(Goal::Gain, ActivityLevel::VeryActive),
        &config,
    )
    .unwrap();
    assert_eq!(CaloricBand::from_kcal(gain.target_kcal), CaloricBand::High);
    let text = generate_meal_template(&gain, Goal::Gain);
    assert!(text.contains(template_line(Goal::Gain, CaloricBand::High)));
}

#[test]
fn test_every_goal_and_band_has_a_distinct_line() {
    let mut lines = Vec::new();
    for goal in [Goal::Lose, Goal::Maintain, Goal::Gain] {
        for band in [CaloricBand::Low, CaloricBand::Moderate, CaloricBand::High] {
            lines.push(template_line(goal, band));
        }
    }
    let count = lines.len();
    lines.sort_unstable();
    lines.dedup();
    assert_eq!(lines.len(), count);
}

#[test]
fn test_meal_plan_guide_lines() {
    let profile = reference_profile();
    let result = estimate_with(&profile, &EstimationConfig::default()).unwrap();
    let plan = generate_meal_plan(&profile, &result, &sample_contact("Ken", ""));

    assert_eq!(plan.guide.len(), 5);
    assert!(plan.guide[0].contains("2044 kcal"));
    assert!(plan.guide[1].contains("25%"));
    assert!(plan.guide[2].contains("2100-2450 ml"));
    assert!(plan.guide[4].contains("Avoiding: none"));
    assert_eq!(plan.breakfast.len(), 2);
    assert_eq!(plan.lunch.len(), 2);
    assert_eq!(plan.dinner.len(), 2);
    assert_eq!(plan.snack.len(), 1);
}

#[test]
fn test_allergens_are_filtered_case_insensitively() {
    let profile = reference_profile();
    let result = estimate_with(&profile, &EstimationConfig::default()).unwrap();
    let plan = generate_meal_plan(&profile, &result, &sample_contact("Aiko", "Chicken, nuts"));

    for item in plan.lunch.iter().chain(&plan.dinner) {
        assert!(!item.to_lowercase().contains("chicken"), "{item}");
    }
    assert!(plan.snack.is_empty());
    assert!(plan.guide[4].contains("Avoiding: Chicken, nuts"));
}

#[test]
fn test_placeholder_when_every_item_is_filtered() {
    let profile = reference_profile();
    let result = estimate_with(&profile, &EstimationConfig::default()).unwrap();
    let contact = ClientContact {
        allergies: "e".to_owned(),
        ..ClientContact::default()
    };
    let plan = generate_meal_plan(&profile, &result, &contact);
    assert_eq!(plan.breakfast, vec![ALL_ITEMS_FILTERED.to_owned()]);
    assert!(plan.guide[4].starts_with("Preferences: (not provided)"));
}

#[test]
fn test_render_lists_every_slot() {
    let profile = reference_profile();
    let result = estimate_with(&profile, &EstimationConfig::default()).unwrap();
    let rendered = generate_meal_plan(&profile, &result, &ClientContact::default()).render();

    for label in ["- Breakfast:", "- Lunch:", "- Dinner:", "- Snack:", "- Training:"] {
        assert!(rendered.contains(label), "missing {label}");
    }
}

#[test]
fn test_render_meals_omits_training_line() {
    let profile = reference_profile();
    let result = estimate_with(&profile, &EstimationConfig::default()).unwrap();
    let plan = generate_meal_plan(&profile, &result, &ClientContact::default());

    let meals = plan.render_meals();
    assert!(meals.ends_with(&format!("- Snack: {}", plan.snack.join(", "))));
    assert!(!meals.contains("- Training:"));
    assert!(plan.render().starts_with(&meals));
}
