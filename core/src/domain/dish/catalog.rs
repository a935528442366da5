use std::collections::HashMap;

use crate::domain::dish::entities::DishLabel;

const FALLBACK_HEALTH_TIP: &str = "Eat balanced meals and stay hydrated.";

const STANDARD_DISHES: [(DishLabel, &[&str], &str); 6] = [
    (
        DishLabel::Apple,
        &["sugar"],
        "An apple a day keeps the doctor away.",
    ),
    (
        DishLabel::Pizza,
        &["dairy", "gluten", "tomato"],
        "Thin crust plus veggies is healthier.",
    ),
    (
        DishLabel::Avocado,
        &[],
        "Rich in healthy fats, great for your heart.",
    ),
    (DishLabel::Milk, &["dairy"], "Try low-fat or plant-based milk."),
    (
        DishLabel::Burger,
        &["gluten", "dairy", "sugar"],
        "Use whole-grain buns and grilled patties.",
    ),
    (DishLabel::Bread, &["gluten", "sugar"], "Prefer multigrain bread."),
];

#[derive(Debug, Clone)]
struct DishFacts {
    ingredients: Vec<String>,
    health_tip: String,
}

/// Fixed per-dish lookup tables: ingredient tags and health tips.
///
/// Built once and handed to the allergy checker and the result composer by
/// reference; nothing in the catalog changes after construction.
#[derive(Debug, Clone)]
pub struct DishCatalog {
    dishes: HashMap<DishLabel, DishFacts>,
}

impl DishCatalog {
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (DishLabel, Vec<String>, String)>,
    {
        let dishes = entries
            .into_iter()
            .map(|(label, ingredients, health_tip)| {
                (
                    label,
                    DishFacts {
                        ingredients,
                        health_tip,
                    },
                )
            })
            .collect();

        Self { dishes }
    }

    pub fn standard() -> Self {
        Self::new(STANDARD_DISHES.iter().map(|(label, ingredients, tip)| {
            (
                *label,
                ingredients.iter().map(|i| i.to_string()).collect(),
                tip.to_string(),
            )
        }))
    }

    /// Ingredient tags in their defined order; empty for unknown dishes.
    pub fn ingredients(&self, dish: DishLabel) -> &[String] {
        self.dishes
            .get(&dish)
            .map(|facts| facts.ingredients.as_slice())
            .unwrap_or(&[])
    }

    pub fn health_tip(&self, dish: DishLabel) -> &str {
        self.dishes
            .get(&dish)
            .map(|facts| facts.health_tip.as_str())
            .unwrap_or(FALLBACK_HEALTH_TIP)
    }
}

impl Default for DishCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_covers_every_dish() {
        let catalog = DishCatalog::standard();

        for dish in DishLabel::ALL {
            assert_ne!(catalog.health_tip(dish), FALLBACK_HEALTH_TIP);
        }
        assert_eq!(catalog.ingredients(DishLabel::Pizza), ["dairy", "gluten", "tomato"]);
        assert!(catalog.ingredients(DishLabel::Avocado).is_empty());
    }

    #[test]
    fn missing_entries_fall_back() {
        let catalog = DishCatalog::new([(
            DishLabel::Milk,
            vec!["dairy".to_string()],
            "Drink water too.".to_string(),
        )]);

        assert!(catalog.ingredients(DishLabel::Bread).is_empty());
        assert_eq!(catalog.health_tip(DishLabel::Bread), FALLBACK_HEALTH_TIP);
        assert_eq!(catalog.health_tip(DishLabel::Milk), "Drink water too.");
    }
}
