// ABOUTME: Templated meal and training suggestions keyed by goal and caloric band
// ABOUTME: Allergen-aware one-day meal examples plus weekly training guidance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitform contributors

//! Meal & Training Templates
//!
//! Pure lookup and formatting: nothing here computes nutrition figures, it
//! only selects from fixed text sets and fills in the numbers produced by
//! the estimation engine.

use fitform_core::models::{ClientContact, ClientProfile, EstimationResult, Goal};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Upper bound (exclusive) of the low caloric band, kcal/day
pub const LOW_BAND_MAX_KCAL: f64 = 1800.0;
/// Upper bound (exclusive) of the moderate caloric band, kcal/day
pub const MODERATE_BAND_MAX_KCAL: f64 = 2600.0;

/// Placeholder used when every menu item contains an avoided allergen
pub const ALL_ITEMS_FILTERED: &str = "(choose a substitute that avoids the listed allergens)";

/// Caloric band of a daily target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum CaloricBand {
    /// Below 1800 kcal/day
    Low,
    /// 1800 to 2600 kcal/day
    Moderate,
    /// 2600 kcal/day and above
    High,
}

impl CaloricBand {
    /// Band for a daily target
    #[must_use]
    pub fn from_kcal(target_kcal: f64) -> Self {
        if target_kcal < LOW_BAND_MAX_KCAL {
            Self::Low
        } else if target_kcal < MODERATE_BAND_MAX_KCAL {
            Self::Moderate
        } else {
            Self::High
        }
    }
}

/// Meal split of the daily target
const MEAL_SPLIT: &str = "breakfast 25% / lunch 35% / dinner 30% / snacks 10%";

const BREAKFAST_MENU: [&str; 3] = [
    "Oatmeal with plain yogurt and berries",
    "Scrambled egg (1 whole + 2 whites) with a brown rice ball",
    "Protein shake with a banana",
];

const LUNCH_MENU: [&str; 3] = [
    "Grilled chicken breast 150g, mixed-grain rice 150g, salad",
    "Salted salmon, sweet potato 200g, miso soup",
    "Tofu steak, brown rice 150g, stir-fried vegetables",
];

const DINNER_MENU: [&str; 3] = [
    "Foil-baked white fish, broccoli, potato 150g",
    "Pork fillet 100g, napa cabbage soup, brown rice 120g",
    "Chicken meatball hot pot with a little glass noodle",
];

const SNACK_MENU: [&str; 1] = ["Protein bar / rice ball / edamame / a few mixed nuts"];

/// Fixed template line for a goal and caloric band
#[must_use]
pub const fn template_line(goal: Goal, band: CaloricBand) -> &'static str {
    match (goal, band) {
        (Goal::Lose, CaloricBand::Low) => {
            "Small deficit budget: keep every meal protein-first and fill up on vegetables and soups."
        }
        (Goal::Lose, CaloricBand::Moderate) => {
            "Deficit phase: keep fat low, protein high, and place most carbohydrate around training."
        }
        (Goal::Lose, CaloricBand::High) => {
            "Large deficit budget: spread intake over 4-5 meals and favour whole-food carbohydrate."
        }
        (Goal::Maintain, CaloricBand::Low) => {
            "Maintenance on a small budget: prioritise protein and micronutrient-dense foods."
        }
        (Goal::Maintain, CaloricBand::Moderate) => {
            "Maintenance: balanced plates, carbohydrate before and after training."
        }
        (Goal::Maintain, CaloricBand::High) => {
            "High-output maintenance: add a carbohydrate-rich snack on training days."
        }
        (Goal::Gain, CaloricBand::Low) => {
            "Lean gain on a small budget: add one extra protein-rich snack every day."
        }
        (Goal::Gain, CaloricBand::Moderate) => {
            "Surplus phase: shift carbohydrate before and after training, never skip breakfast."
        }
        (Goal::Gain, CaloricBand::High) => {
            "Large surplus: use liquid calories (shakes, milk) to reach the target comfortably."
        }
    }
}

/// Weekly training suggestion for a goal
#[must_use]
pub const fn training_suggestion(goal: Goal) -> &'static str {
    match goal {
        Goal::Lose => {
            "3-4 full-body sessions per week (squat / hinge / press / row / core) plus 2 brisk 30-minute walks. Film every set to check form."
        }
        Goal::Maintain => {
            "3-4 full-body sessions per week (squat / hinge / press / row / core). Film every set to check form."
        }
        Goal::Gain => {
            "4 sessions per week on an upper/lower split, adding load or reps each week. Film every set to check form."
        }
    }
}

/// Generate the short meal/training template for a result
///
/// Keyed by goal and the caloric band of `result.target_kcal`.
#[must_use]
pub fn generate_meal_template(result: &EstimationResult, goal: Goal) -> String {
    let band = CaloricBand::from_kcal(result.target_kcal);
    format!(
        "Daily target: {:.0} kcal / P{:.0}g F{:.0}g C{:.0}g\n{}\nTraining: {}",
        result.target_kcal,
        result.protein_g,
        result.fat_g,
        result.carb_g,
        template_line(goal, band),
        training_suggestion(goal),
    )
}

/// One-day meal example with guidance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealPlan {
    /// Guidance bullet lines
    pub guide: Vec<String>,
    /// Breakfast options
    pub breakfast: Vec<String>,
    /// Lunch options
    pub lunch: Vec<String>,
    /// Dinner options
    pub dinner: Vec<String>,
    /// Snack options (may be empty)
    pub snack: Vec<String>,
    /// Weekly training suggestion
    pub training: String,
}

impl MealPlan {
    /// Render as a plain-text block
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = self.render_meals();
        let _ = write!(out, "\n- Training: {}", self.training);
        out
    }

    /// Guide lines and meal slots only, without the training line
    #[must_use]
    pub fn render_meals(&self) -> String {
        let mut out = String::new();
        for line in &self.guide {
            let _ = writeln!(out, "- {line}");
        }
        let _ = writeln!(out, "- Breakfast: {}", self.breakfast.join(", "));
        let _ = writeln!(out, "- Lunch: {}", self.lunch.join(", "));
        let _ = writeln!(out, "- Dinner: {}", self.dinner.join(", "));
        let _ = write!(out, "- Snack: {}", self.snack.join(", "));
        out
    }
}

fn avoids_all(item: &str, allergens: &[String]) -> bool {
    let item = item.to_lowercase();
    allergens.iter().all(|a| !item.contains(&a.to_lowercase()))
}

fn pick(menu: &[&str], allergens: &[String], limit: usize, placeholder: bool) -> Vec<String> {
    let picked: Vec<String> = menu
        .iter()
        .filter(|item| avoids_all(item, allergens))
        .take(limit)
        .map(|item| (*item).to_owned())
        .collect();
    if picked.is_empty() && placeholder {
        vec![ALL_ITEMS_FILTERED.to_owned()]
    } else {
        picked
    }
}

/// Generate the allergen-aware one-day meal plan
#[must_use]
pub fn generate_meal_plan(
    profile: &ClientProfile,
    result: &EstimationResult,
    contact: &ClientContact,
) -> MealPlan {
    let allergens = contact.allergen_list();
    let band = CaloricBand::from_kcal(result.target_kcal);

    let prefs = if contact.dietary_prefs.trim().is_empty() {
        "(not provided)".to_owned()
    } else {
        contact.dietary_prefs.trim().to_owned()
    };
    let avoided = if allergens.is_empty() {
        "none".to_owned()
    } else {
        allergens.join(", ")
    };

    let guide = vec![
        format!(
            "Daily target: {:.0} kcal / P{:.0}g F{:.0}g C{:.0}g",
            result.target_kcal, result.protein_g, result.fat_g, result.carb_g
        ),
        format!("Meal split: {MEAL_SPLIT}"),
        format!(
            "Water: about {:.0}-{:.0} ml per day (30-35 ml per kg bodyweight)",
            profile.weight_kg * 30.0,
            profile.weight_kg * 35.0
        ),
        template_line(profile.goal, band).to_owned(),
        format!("Preferences: {prefs} / Avoiding: {avoided}"),
    ];

    MealPlan {
        guide,
        breakfast: pick(&BREAKFAST_MENU, &allergens, 2, true),
        lunch: pick(&LUNCH_MENU, &allergens, 2, true),
        dinner: pick(&DINNER_MENU, &allergens, 2, true),
        snack: pick(&SNACK_MENU, &allergens, 1, false),
        training: training_suggestion(profile.goal).to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(CaloricBand::from_kcal(1799.9), CaloricBand::Low);
        assert_eq!(CaloricBand::from_kcal(1800.0), CaloricBand::Moderate);
        assert_eq!(CaloricBand::from_kcal(2599.9), CaloricBand::Moderate);
        assert_eq!(CaloricBand::from_kcal(2600.0), CaloricBand::High);
    }

    #[test]
    fn test_pick_is_case_insensitive() {
        let allergens = vec!["SALMON".to_owned()];
        let lunch = pick(&LUNCH_MENU, &allergens, 2, true);
        assert_eq!(lunch.len(), 2);
        assert!(lunch.iter().all(|item| !item.contains("salmon")));
    }

    #[test]
    fn test_pick_placeholder_only_for_main_meals() {
        let allergens = vec!["nut".to_owned(), "protein".to_owned()];
        assert!(pick(&SNACK_MENU, &allergens, 1, false).is_empty());
        let allergens = vec!["a".to_owned()];
        assert_eq!(
            pick(&DINNER_MENU, &allergens, 2, true),
            vec![ALL_ITEMS_FILTERED.to_owned()]
        );
    }
}
