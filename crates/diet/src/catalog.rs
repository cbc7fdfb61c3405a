//! Built-in recipe catalog.
//!
//! Static content, loaded once at process start and treated as immutable for
//! the life of the process. Catalog order is part of the planner's contract:
//! score ties resolve to the earlier entry.

use crate::types::{MealSlot, Nutrition, Recipe};

/// The immutable recipe catalog.
#[derive(Debug, Clone)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    /// Build the built-in catalog.
    pub fn builtin() -> Self {
        RecipeCatalog {
            recipes: builtin_recipes(),
        }
    }

    /// All recipes in catalog order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Look a recipe up by id.
    pub fn find(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

fn text(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    title: &str,
    meal: MealSlot,
    description: &str,
    benefits: &str,
    tags: &[&str],
    time_minutes: u32,
    serving: &str,
    ingredients: &[&str],
    steps: &[&str],
    nutrition: Nutrition,
) -> Recipe {
    Recipe {
        id: id.to_string(),
        title: title.to_string(),
        meal,
        description: description.to_string(),
        benefits: benefits.to_string(),
        tags: text(tags),
        time_minutes,
        serving: serving.to_string(),
        ingredients: text(ingredients),
        steps: text(steps),
        nutrition,
    }
}

fn builtin_recipes() -> Vec<Recipe> {
    vec![
        entry(
            "peanut-butter-oats",
            "Peanut butter protein oats",
            MealSlot::Breakfast,
            "Creamy overnight oats with a scoop of whey and peanut butter.",
            "Slow carbs and casein-like release keep you full until lunch.",
            &["high-protein", "vegetarian", "meal-prep"],
            10,
            "1 large bowl",
            &[
                "80 g rolled oats",
                "1 scoop vanilla whey",
                "1 tbsp peanut butter",
                "250 ml semi-skimmed milk",
                "1 tsp honey",
            ],
            &[
                "Stir oats, whey and milk in a jar.",
                "Rest in the fridge overnight or at least 20 minutes.",
                "Top with peanut butter and honey before serving.",
            ],
            Nutrition {
                calories: 420.0,
                protein_g: 32.0,
                carbs_g: 45.0,
                fat_g: 14.0,
            },
        ),
        entry(
            "greek-yogurt-bowl",
            "Greek yogurt berry bowl",
            MealSlot::Breakfast,
            "Thick Greek yogurt with mixed berries, granola and chia.",
            "Casein protein plus antioxidants with very little prep.",
            &["high-protein", "vegetarian", "quick"],
            5,
            "1 bowl",
            &[
                "250 g 0% Greek yogurt",
                "100 g mixed berries",
                "30 g granola",
                "1 tsp chia seeds",
            ],
            &[
                "Spoon yogurt into a bowl.",
                "Top with berries, granola and chia.",
            ],
            Nutrition {
                calories: 360.0,
                protein_g: 30.0,
                carbs_g: 38.0,
                fat_g: 9.0,
            },
        ),
        entry(
            "veggie-egg-scramble",
            "Three-egg veggie scramble",
            MealSlot::Breakfast,
            "Soft scrambled eggs with spinach, peppers and feta on toast.",
            "Complete protein and a vegetable serving before 9am.",
            &["high-protein", "vegetarian", "low-carb"],
            15,
            "1 plate",
            &[
                "3 eggs",
                "1 handful spinach",
                "half a red pepper, diced",
                "30 g feta",
                "1 slice wholegrain toast",
            ],
            &[
                "Soften the pepper in a nonstick pan.",
                "Add whisked eggs and spinach, scramble on low heat.",
                "Crumble feta over and serve on toast.",
            ],
            Nutrition {
                calories: 390.0,
                protein_g: 28.0,
                carbs_g: 12.0,
                fat_g: 26.0,
            },
        ),
        entry(
            "banana-protein-pancakes",
            "Banana protein pancakes",
            MealSlot::Breakfast,
            "Blender pancakes from oats, banana and whey.",
            "A weekend-feel breakfast that still hits the protein target.",
            &["high-protein", "vegetarian"],
            20,
            "3 pancakes",
            &[
                "1 ripe banana",
                "60 g rolled oats",
                "1 scoop vanilla whey",
                "2 eggs",
                "butter for the pan",
            ],
            &[
                "Blend banana, oats, whey and eggs into a batter.",
                "Cook three pancakes over medium heat, two minutes a side.",
                "Serve with a few extra banana slices.",
            ],
            Nutrition {
                calories: 450.0,
                protein_g: 35.0,
                carbs_g: 52.0,
                fat_g: 10.0,
            },
        ),
        entry(
            "tofu-scramble-wrap",
            "Smoky tofu scramble wrap",
            MealSlot::Breakfast,
            "Turmeric-spiced tofu scramble folded into a wholegrain wrap.",
            "Plant protein and fibre with no cholesterol.",
            &["vegan", "dairy-free"],
            15,
            "1 wrap",
            &[
                "150 g firm tofu",
                "1 wholegrain tortilla",
                "half tsp turmeric",
                "half tsp smoked paprika",
                "1 handful rocket",
            ],
            &[
                "Crumble tofu into a hot pan with the spices.",
                "Fry until dry and golden, about five minutes.",
                "Fold into the tortilla with the rocket.",
            ],
            Nutrition {
                calories: 410.0,
                protein_g: 24.0,
                carbs_g: 40.0,
                fat_g: 18.0,
            },
        ),
        entry(
            "chicken-rice-bowl",
            "Grilled chicken rice bowl",
            MealSlot::Lunch,
            "Grilled chicken breast over jasmine rice with charred broccoli.",
            "The classic cutting-season staple: lean protein, clean carbs.",
            &["high-protein", "meal-prep", "gluten-free"],
            25,
            "1 bowl",
            &[
                "160 g chicken breast",
                "180 g cooked jasmine rice",
                "100 g broccoli",
                "1 tbsp soy sauce",
                "1 tsp sesame oil",
            ],
            &[
                "Grill the seasoned chicken 5-6 minutes per side.",
                "Char the broccoli in the same pan.",
                "Slice the chicken over rice and dress with soy and sesame.",
            ],
            Nutrition {
                calories: 620.0,
                protein_g: 48.0,
                carbs_g: 62.0,
                fat_g: 16.0,
            },
        ),
        entry(
            "tuna-quinoa-salad",
            "Tuna quinoa salad",
            MealSlot::Lunch,
            "Flaked tuna, quinoa, cucumber and olives with a lemon dressing.",
            "Omega-3s and complete plant protein in one cold box.",
            &["high-protein", "pescatarian", "meal-prep"],
            15,
            "1 box",
            &[
                "1 tin tuna in spring water",
                "150 g cooked quinoa",
                "half a cucumber, diced",
                "8 black olives",
                "juice of half a lemon",
                "1 tbsp olive oil",
            ],
            &[
                "Fluff the quinoa into a bowl.",
                "Fold in tuna, cucumber and olives.",
                "Dress with lemon juice and olive oil.",
            ],
            Nutrition {
                calories: 540.0,
                protein_g: 42.0,
                carbs_g: 48.0,
                fat_g: 18.0,
            },
        ),
        entry(
            "turkey-avocado-sandwich",
            "Turkey avocado sandwich",
            MealSlot::Lunch,
            "Roast turkey, smashed avocado and tomato on seeded sourdough.",
            "Desk-friendly lunch with lean protein and good fats.",
            &["high-protein", "quick"],
            10,
            "1 sandwich",
            &[
                "120 g roast turkey slices",
                "2 slices seeded sourdough",
                "half an avocado",
                "1 tomato, sliced",
                "mustard to taste",
            ],
            &[
                "Smash the avocado onto both slices.",
                "Layer turkey and tomato, season well.",
                "Close, press and halve.",
            ],
            Nutrition {
                calories: 580.0,
                protein_g: 38.0,
                carbs_g: 50.0,
                fat_g: 22.0,
            },
        ),
        entry(
            "lentil-feta-bowl",
            "Warm lentil and feta bowl",
            MealSlot::Lunch,
            "Braised green lentils with roasted peppers, feta and parsley.",
            "Fibre-dense and budget-friendly; iron plus slow carbs.",
            &["vegetarian", "high-fibre", "meal-prep"],
            30,
            "1 bowl",
            &[
                "200 g cooked green lentils",
                "1 roasted red pepper",
                "50 g feta",
                "1 small red onion",
                "flat-leaf parsley",
            ],
            &[
                "Soften the onion, then warm the lentils through.",
                "Fold in the chopped roasted pepper.",
                "Top with feta and parsley off the heat.",
            ],
            Nutrition {
                calories: 560.0,
                protein_g: 30.0,
                carbs_g: 68.0,
                fat_g: 16.0,
            },
        ),
        entry(
            "beef-burrito-bowl",
            "Lean beef burrito bowl",
            MealSlot::Lunch,
            "5% beef mince with rice, black beans, corn and salsa.",
            "Big, satiating macro hitter for heavy training days.",
            &["high-protein", "gluten-free"],
            25,
            "1 bowl",
            &[
                "150 g 5% beef mince",
                "150 g cooked basmati rice",
                "100 g black beans",
                "50 g sweetcorn",
                "3 tbsp salsa",
            ],
            &[
                "Brown the mince with taco seasoning.",
                "Warm the beans and corn.",
                "Assemble over rice and finish with salsa.",
            ],
            Nutrition {
                calories: 680.0,
                protein_g: 45.0,
                carbs_g: 66.0,
                fat_g: 22.0,
            },
        ),
        entry(
            "salmon-sweet-potato",
            "Baked salmon with sweet potato",
            MealSlot::Dinner,
            "Oven-baked salmon fillet, sweet potato wedges and greens.",
            "Omega-3s for recovery, potassium for the next leg day.",
            &["pescatarian", "gluten-free"],
            35,
            "1 plate",
            &[
                "1 salmon fillet (160 g)",
                "1 medium sweet potato",
                "100 g green beans",
                "1 tbsp olive oil",
                "half a lemon",
            ],
            &[
                "Roast sweet potato wedges at 200C for 25 minutes.",
                "Add the salmon for the final 12 minutes.",
                "Steam the beans and finish everything with lemon.",
            ],
            Nutrition {
                calories: 640.0,
                protein_g: 44.0,
                carbs_g: 42.0,
                fat_g: 28.0,
            },
        ),
        entry(
            "chicken-stir-fry",
            "Chicken and broccoli stir-fry",
            MealSlot::Dinner,
            "Wok-fried chicken, broccoli and peppers in a ginger-soy glaze.",
            "Fifteen-minute dinner that keeps fat low on rest days.",
            &["high-protein", "dairy-free", "quick"],
            20,
            "1 plate",
            &[
                "160 g chicken breast, sliced",
                "150 g broccoli florets",
                "1 red pepper",
                "2 tbsp soy sauce",
                "1 tsp grated ginger",
                "120 g cooked noodles",
            ],
            &[
                "Sear the chicken in a very hot wok.",
                "Add vegetables and stir-fry three minutes.",
                "Toss with noodles, soy and ginger.",
            ],
            Nutrition {
                calories: 560.0,
                protein_g: 46.0,
                carbs_g: 44.0,
                fat_g: 20.0,
            },
        ),
        entry(
            "turkey-chili",
            "Slow turkey chili",
            MealSlot::Dinner,
            "Turkey mince simmered with kidney beans, tomatoes and cumin.",
            "Batch-cooks beautifully; protein and fibre by the ladle.",
            &["high-protein", "meal-prep", "dairy-free"],
            45,
            "1 large bowl",
            &[
                "150 g turkey mince",
                "200 g kidney beans",
                "400 g chopped tomatoes",
                "1 onion",
                "1 tsp ground cumin",
                "1 tsp smoked paprika",
            ],
            &[
                "Brown the onion and turkey with the spices.",
                "Add tomatoes and beans and simmer 30 minutes.",
                "Season and serve, or box up for the week.",
            ],
            Nutrition {
                calories: 610.0,
                protein_g: 48.0,
                carbs_g: 52.0,
                fat_g: 20.0,
            },
        ),
        entry(
            "shrimp-pesto-pasta",
            "Shrimp pesto pasta",
            MealSlot::Dinner,
            "King prawns and cherry tomatoes through basil pesto linguine.",
            "Feels indulgent, still lands on the macro split.",
            &["pescatarian"],
            25,
            "1 plate",
            &[
                "150 g king prawns",
                "90 g dry linguine",
                "2 tbsp basil pesto",
                "100 g cherry tomatoes",
                "parmesan to finish",
            ],
            &[
                "Cook the linguine to packet timing.",
                "Sear prawns and blister the tomatoes.",
                "Toss everything with pesto and a little pasta water.",
            ],
            Nutrition {
                calories: 650.0,
                protein_g: 40.0,
                carbs_g: 70.0,
                fat_g: 22.0,
            },
        ),
        entry(
            "cottage-cheese-pot",
            "Cottage cheese and pineapple pot",
            MealSlot::Snack,
            "Cottage cheese with pineapple chunks and a grind of pepper.",
            "Slow-digesting protein; a classic pre-bed snack.",
            &["high-protein", "vegetarian", "quick"],
            3,
            "1 pot",
            &["150 g cottage cheese", "80 g pineapple chunks"],
            &["Spoon the pineapple over the cottage cheese."],
            Nutrition {
                calories: 180.0,
                protein_g: 20.0,
                carbs_g: 14.0,
                fat_g: 5.0,
            },
        ),
        entry(
            "trail-mix-pot",
            "Trail mix pot",
            MealSlot::Snack,
            "Almonds, walnuts, raisins and dark chocolate chips.",
            "Shelf-stable energy for the gym bag.",
            &["vegan", "gluten-free"],
            2,
            "1 small pot (40 g)",
            &[
                "15 g almonds",
                "10 g walnuts",
                "10 g raisins",
                "5 g dark chocolate chips",
            ],
            &["Shake everything together in a pot."],
            Nutrition {
                calories: 240.0,
                protein_g: 8.0,
                carbs_g: 20.0,
                fat_g: 15.0,
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_candidates_for_every_planned_slot() {
        let catalog = RecipeCatalog::builtin();

        for slot in [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner] {
            let count = catalog
                .recipes()
                .iter()
                .filter(|recipe| recipe.meal == slot)
                .count();
            assert!(count >= 2, "{slot} needs at least two candidates, has {count}");
        }
    }

    #[test]
    fn builtin_catalog_ids_are_unique() {
        let catalog = RecipeCatalog::builtin();
        let mut ids: Vec<&str> = catalog
            .recipes()
            .iter()
            .map(|recipe| recipe.id.as_str())
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn builtin_catalog_nutrition_is_well_formed() {
        let catalog = RecipeCatalog::builtin();
        for recipe in catalog.recipes() {
            assert!(recipe.nutrition.calories > 0.0, "{}", recipe.id);
            assert!(recipe.nutrition.protein_g >= 0.0, "{}", recipe.id);
        }
    }

    #[test]
    fn find_resolves_known_and_unknown_ids() {
        let catalog = RecipeCatalog::builtin();
        assert!(catalog.find("chicken-rice-bowl").is_some());
        assert!(catalog.find("no-such-recipe").is_none());
        assert!(!catalog.is_empty());
        assert_eq!(catalog.len(), catalog.recipes().len());
    }
}
