use crate::domain::{
    allergy::value_objects::AllergyProfile,
    dish::{catalog::DishCatalog, entities::DishLabel},
};

/// Ingredient tags of `dish` that appear in the user's allergy list, in the
/// catalog's order.
pub fn check_allergies(catalog: &DishCatalog, dish: DishLabel, user_allergies: &str) -> Vec<String> {
    let profile = AllergyProfile::parse(user_allergies);
    if profile.is_empty() {
        return Vec::new();
    }

    catalog
        .ingredients(dish)
        .iter()
        .filter(|tag| profile.contains(tag))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pizza_with_dairy_and_pollen_matches_dairy_only() {
        let catalog = DishCatalog::standard();

        assert_eq!(
            check_allergies(&catalog, DishLabel::Pizza, "dairy, pollen"),
            vec!["dairy".to_string()]
        );
    }

    #[test]
    fn empty_allergy_list_never_matches() {
        let catalog = DishCatalog::standard();

        for dish in DishLabel::ALL {
            assert!(check_allergies(&catalog, dish, "").is_empty());
        }
    }

    #[test]
    fn matches_follow_ingredient_order_not_user_order() {
        let catalog = DishCatalog::standard();

        assert_eq!(
            check_allergies(&catalog, DishLabel::Burger, "SUGAR, Gluten, dairy"),
            vec![
                "gluten".to_string(),
                "dairy".to_string(),
                "sugar".to_string()
            ]
        );
    }

    #[test]
    fn dish_without_ingredients_never_matches() {
        let catalog = DishCatalog::standard();

        assert!(check_allergies(&catalog, DishLabel::Avocado, "dairy, gluten, sugar").is_empty());
    }

    #[test]
    fn substrings_do_not_match() {
        let catalog = DishCatalog::standard();

        assert!(check_allergies(&catalog, DishLabel::Milk, "dair, lactose-dairy").is_empty());
    }
}
