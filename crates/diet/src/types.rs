use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Meal slot a recipe belongs to.
///
/// Only `Breakfast`, `Lunch` and `Dinner` participate in daily planning;
/// `Snack` recipes exist in the catalog for browsing but are never scheduled.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

/// Per-serving macro breakdown of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// A catalog recipe.
///
/// The planner only reads `id`, `meal` and `nutrition`; the remaining fields
/// are display content for API clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub meal: MealSlot,
    pub description: String,
    pub benefits: String,
    pub tags: Vec<String>,
    pub time_minutes: u32,
    pub serving: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub nutrition: Nutrition,
}

/// Daily macro targets computed upstream (BMR/TDEE formula is not part of
/// this crate). The planner reads `target_calories` and `protein_g`; the
/// other fields ride along for API clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietTargets {
    pub bmr: f64,
    pub tdee: f64,
    pub target_calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub fiber_g: f64,
    pub water_ml: f64,
}

/// One planned meal: a recipe selected for a slot, portion-scaled toward the
/// slot's share of the daily targets. Recomputed on every planning call,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedMeal {
    pub meal: MealSlot,
    pub target_calories: u32,
    pub target_protein_g: u32,
    pub recipe_id: String,
    pub portion_multiplier: f64,
    pub adjusted_calories: u32,
    pub adjusted_protein_g: u32,
}

/// Aggregated totals over a day's planned meals.
///
/// Gaps are signed: negative means the plan overshoots the daily target.
/// Informational only, never treated as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanTotals {
    pub planned_calories: u32,
    pub planned_protein_g: u32,
    pub target_calories: u32,
    pub target_protein_g: u32,
    pub calorie_gap: i64,
    pub protein_gap: i64,
}

impl PlanTotals {
    /// Reduce a set of planned meals against the daily targets.
    ///
    /// Planned values are exact sums of the per-meal adjusted values, so the
    /// totals carry no rounding drift of their own.
    pub fn aggregate(meals: &[PlannedMeal], targets: &DietTargets) -> Self {
        let planned_calories: u32 = meals.iter().map(|meal| meal.adjusted_calories).sum();
        let planned_protein_g: u32 = meals.iter().map(|meal| meal.adjusted_protein_g).sum();
        let target_calories = targets.target_calories.round() as u32;
        let target_protein_g = targets.protein_g.round() as u32;

        PlanTotals {
            planned_calories,
            planned_protein_g,
            target_calories,
            target_protein_g,
            calorie_gap: i64::from(target_calories) - i64::from(planned_calories),
            protein_gap: i64::from(target_protein_g) - i64::from(planned_protein_g),
        }
    }
}

/// Output of one planning invocation for a calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
    pub date_key: String,
    pub meals: Vec<PlannedMeal>,
    pub totals: PlanTotals,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets() -> DietTargets {
        DietTargets {
            bmr: 1700.0,
            tdee: 2600.0,
            target_calories: 2000.0,
            protein_g: 150.0,
            carbs_g: 210.0,
            fat_g: 65.0,
            fiber_g: 28.0,
            water_ml: 2800.0,
        }
    }

    fn meal(slot: MealSlot, calories: u32, protein: u32) -> PlannedMeal {
        PlannedMeal {
            meal: slot,
            target_calories: 0,
            target_protein_g: 0,
            recipe_id: "test".to_string(),
            portion_multiplier: 1.0,
            adjusted_calories: calories,
            adjusted_protein_g: protein,
        }
    }

    #[test]
    fn totals_are_exact_sums() {
        let meals = vec![
            meal(MealSlot::Breakfast, 600, 38),
            meal(MealSlot::Lunch, 700, 53),
            meal(MealSlot::Dinner, 640, 44),
        ];

        let totals = PlanTotals::aggregate(&meals, &targets());

        assert_eq!(totals.planned_calories, 1940);
        assert_eq!(totals.planned_protein_g, 135);
        assert_eq!(totals.target_calories, 2000);
        assert_eq!(totals.target_protein_g, 150);
        assert_eq!(totals.calorie_gap, 60);
        assert_eq!(totals.protein_gap, 15);
    }

    #[test]
    fn gaps_can_go_negative_when_plan_overshoots() {
        let meals = vec![meal(MealSlot::Dinner, 2500, 200)];

        let totals = PlanTotals::aggregate(&meals, &targets());

        assert_eq!(totals.calorie_gap, -500);
        assert_eq!(totals.protein_gap, -50);
    }

    #[test]
    fn totals_of_empty_plan_are_zero() {
        let totals = PlanTotals::aggregate(&[], &targets());

        assert_eq!(totals.planned_calories, 0);
        assert_eq!(totals.planned_protein_g, 0);
        assert_eq!(totals.calorie_gap, 2000);
    }

    #[test]
    fn meal_slot_display_matches_wire_format() {
        assert_eq!(MealSlot::Breakfast.to_string(), "Breakfast");
        assert_eq!(MealSlot::Lunch.to_string(), "Lunch");
        assert_eq!(MealSlot::Dinner.to_string(), "Dinner");
        assert_eq!(MealSlot::Snack.to_string(), "Snack");
    }

    #[test]
    fn meal_slot_serializes_as_plain_variant_name() {
        let json = serde_json::to_string(&MealSlot::Breakfast).unwrap();
        assert_eq!(json, "\"Breakfast\"");
    }
}
