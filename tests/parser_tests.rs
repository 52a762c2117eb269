#[cfg(test)]
mod tests {
    use ingredient_processor::categorizer::is_known_category;
    use ingredient_processor::ingredient_model::{AlternativeUnit, ParsedIngredient};
    use ingredient_processor::ingredient_parser::{parse_ingredient, parse_ingredients, IngredientParser};
    use ingredient_processor::unit_normalizer::{accepted_units, is_canonical_unit, normalize_unit};

    fn assert_parsed(raw: &str, quantity: &str, unit: &str, ingredient: &str) -> ParsedIngredient {
        let parsed = parse_ingredient(raw);
        assert_eq!(parsed.quantity, quantity, "quantity for '{}'", raw);
        assert_eq!(parsed.unit, unit, "unit for '{}'", raw);
        assert_eq!(parsed.ingredient, ingredient, "ingredient for '{}'", raw);
        parsed
    }

    #[test]
    fn test_canned_tomatoes() {
        let parsed = assert_parsed("2 (15-ounce) cans diced tomatoes", "2", "can", "diced tomatoes");
        assert_eq!(parsed.category, "Produce");
    }

    #[test]
    fn test_mixed_number_flour() {
        let parsed = assert_parsed("1 1/2 cups all-purpose flour", "1 1/2", "cup", "all-purpose flour");
        assert_eq!(parsed.category, "Pantry & Dry Goods");
    }

    #[test]
    fn test_salt_to_taste() {
        let parsed = assert_parsed("salt to taste", "1", "count", "salt to taste");
        assert_eq!(parsed.category, "Spices & Seasonings");
    }

    #[test]
    fn test_range_chicken() {
        let parsed = assert_parsed(
            "3-4 pounds boneless chicken thighs",
            "3-4",
            "pound",
            "boneless chicken thighs",
        );
        assert_eq!(parsed.category, "Meat & Seafood");
    }

    #[test]
    fn test_unicode_cinnamon() {
        let parsed = assert_parsed("½ tsp ground cinnamon", "1/2", "teaspoon", "ground cinnamon");
        assert_eq!(parsed.category, "Spices & Seasonings");
    }

    #[test]
    fn test_fraction_canonicalization() {
        let unicode = parse_ingredient("¼ cup sugar");
        let text = parse_ingredient("1/4 cup sugar");
        assert_eq!(unicode.quantity, "1/4");
        assert_eq!(unicode.quantity, text.quantity);
        assert_eq!(unicode.unit, text.unit);
    }

    #[test]
    fn test_parenthetical_extraction() {
        let parsed = parse_ingredient("1 cup flour (sifted)");
        assert_eq!(parsed.ingredient, "flour");
        assert_eq!(parsed.additional_context, "sifted");
    }

    #[test]
    fn test_only_first_parenthetical_is_context() {
        let parsed = parse_ingredient("2 tbsp butter (softened) for the pan (optional)");
        assert_eq!(parsed.additional_context, "softened");
        assert_eq!(parsed.ingredient, "butter for the pan (optional)");
    }

    #[test]
    fn test_quantity_forms() {
        assert_parsed("about 2 cups water", "2", "cup", "water");
        assert_parsed("2+ cups spinach", "2", "cup", "spinach");
        assert_parsed("~1/2 tsp salt", "1/2", "teaspoon", "salt");
        assert_parsed(".25 oz active dry yeast", "0.25", "ounce", "active dry yeast");
        assert_parsed("1 and 1/3 cups milk", "1 and 1/3", "cup", "milk");
        assert_parsed("1-¼ cups milk", "1 1/4", "cup", "milk");
        assert_parsed("2 ½ cups broth", "2 1/2", "cup", "broth");
        assert_parsed("1/2 to 3/4 cup sugar", "1/2-3/4", "cup", "sugar");
        assert_parsed("2 or 3 cloves garlic", "2-3", "clove", "garlic");
        assert_parsed("3 – 4 lbs. potatoes", "3-4", "pound", "potatoes");
        assert_parsed("300g plain flour", "300", "gram", "plain flour");
        assert_parsed("15 graham crackers", "15", "count", "graham crackers");
        assert_parsed("2 large eggs", "2", "large", "eggs");
    }

    #[test]
    fn test_tilde_quantities_without_unit() {
        let parsed = assert_parsed("~2 eggs", "2", "count", "eggs");
        assert!(!parsed.ingredient.contains('~'));
        assert_parsed("~ salt", "1", "count", "salt");
    }

    #[test]
    fn test_mixed_number_ranges() {
        assert_parsed("1 1/2-2 cups broth", "1 1/2-2", "cup", "broth");
        assert_parsed("1 and ½ cups stock", "1 and 1/2", "cup", "stock");

        let line = IngredientParser::new().parse_ingredient("1½ - 2 tbsp honey");
        assert_eq!(line.ingredient.quantity, "1 1/2-2");
        assert!(line.alternatives.is_empty());
    }

    #[test]
    fn test_leading_bullets_removed() {
        let parsed = assert_parsed("• ☐ 1 cup rice", "1", "cup", "rice");
        assert!(!parsed.ingredient.starts_with('•'));
    }

    #[test]
    fn test_alternative_units() {
        let line = IngredientParser::new().parse_ingredient("400g/14oz canned corn");
        assert_eq!(line.ingredient.quantity, "400");
        assert_eq!(line.ingredient.unit, "gram");
        assert!(!line.alternatives.is_empty());
        assert_eq!(line.alternatives, vec![AlternativeUnit::new("14", "ounce")]);
    }

    #[test]
    fn test_alternatives_never_change_primary() {
        let with = IngredientParser::new().parse_ingredient("1 cup (240 ml) milk");
        assert_eq!(with.ingredient.quantity, "1");
        assert_eq!(with.ingredient.unit, "cup");
        assert_eq!(with.ingredient.additional_context, "240 ml");
        assert_eq!(with.alternatives, vec![AlternativeUnit::new("240", "milliliter")]);
    }

    #[test]
    fn test_total_coverage() {
        let inputs = [
            "",
            "   ",
            "garbage input !!!",
            "!!!",
            "(((",
            "1/",
            "½",
            "12345",
            "()",
            "cups",
            "2 (",
        ];
        for raw in inputs {
            let parsed = parse_ingredient(raw);
            assert!(!parsed.quantity.is_empty(), "empty quantity for '{}'", raw);
            assert!(!parsed.unit.is_empty(), "empty unit for '{}'", raw);
        }
    }

    #[test]
    fn test_unit_is_always_canonical_or_count() {
        let inputs = [
            "2 Tbsp. honey",
            "1 pkg. cream cheese",
            "3 lbs. apples",
            "1 gal. milk",
            "2 c. sugar",
            "5 kgs potatoes",
            "1 bunch cilantro",
            "1 handful basil",
        ];
        for raw in inputs {
            let parsed = parse_ingredient(raw);
            assert!(
                parsed.unit == "count" || is_canonical_unit(&parsed.unit),
                "'{}' produced unit '{}'",
                raw,
                parsed.unit
            );
        }
    }

    #[test]
    fn test_categories_are_known_or_empty() {
        let list = parse_ingredients(&[
            "1 cup milk",
            "2 cloves garlic",
            "1 lb ground beef",
            "mystery powder",
        ]);
        for ingredient in &list.ingredients {
            assert!(ingredient.category.is_empty() || is_known_category(&ingredient.category));
        }
        assert_eq!(list.ingredients[3].category, "");
    }

    #[test]
    fn test_batch_preserves_order_and_sparse_alternatives() {
        let raws = vec![
            "1 cup flour".to_string(),
            "400g/14oz canned corn".to_string(),
            "salt to taste".to_string(),
            "1 cup (240 ml) milk".to_string(),
        ];
        let list = parse_ingredients(&raws);

        assert_eq!(list.len(), 4);
        assert_eq!(list.ingredients[0].ingredient, "flour");
        assert_eq!(list.ingredients[2].ingredient, "salt to taste");
        assert_eq!(list.alternatives.keys().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert!(list.alternatives_for(0).is_empty());
    }

    #[test]
    fn test_unit_normalization_idempotent() {
        for unit in accepted_units() {
            let once = normalize_unit(unit);
            assert_eq!(normalize_unit(&once), once);
        }
    }
}
