#[cfg(test)]
mod tests {
    use grocery_planner::aggregator::combine;
    use grocery_planner::pantry::{is_grocery_item, PantryStaples};
    use grocery_planner::quantity_parser::{parse_ingredient, parse_ingredient_with, ParserOptions};
    use grocery_planner::recipe_model::IngredientLine;
    use grocery_planner::unit_normalizer::{normalize_unit, CANONICAL_UNITS};

    #[test]
    fn test_documented_parse_cases() {
        let flour = parse_ingredient("2 cups flour");
        assert_eq!(
            (flour.quantity, flour.unit.as_str(), flour.name.as_str()),
            (2.0, "cup", "flour")
        );

        let salt = parse_ingredient("salt");
        assert_eq!((salt.quantity, salt.unit.as_str(), salt.name.as_str()), (1.0, "", "salt"));

        let vanilla = parse_ingredient("1/2 tsp vanilla extract");
        assert_eq!(
            (vanilla.quantity, vanilla.unit.as_str(), vanilla.name.as_str()),
            (0.5, "tsp", "vanilla extract")
        );
    }

    #[test]
    fn test_sample_recipe_lines() {
        let cases = [
            ("400g spaghetti", 400.0, "g", "spaghetti"),
            ("200g pancetta", 200.0, "g", "pancetta"),
            ("4 eggs", 4.0, "", "eggs"),
            ("100g parmesan cheese", 100.0, "g", "parmesan cheese"),
            ("Salt and black pepper", 1.0, "", "salt and black pepper"),
            ("800g chicken breast", 800.0, "g", "chicken breast"),
            ("400ml coconut cream", 400.0, "ml", "coconut cream"),
            ("2 tbsp tikka masala paste", 2.0, "tbsp", "tikka masala paste"),
            ("Taco shells", 1.0, "", "taco shells"),
            ("1 kg potatoes", 1.0, "kg", "potatoes"),
            ("2 L stock", 2.0, "l", "stock"),
            ("8 oz cream cheese", 8.0, "oz", "cream cheese"),
            ("3 pounds chicken thighs", 3.0, "lb", "chicken thighs"),
        ];

        for (text, quantity, unit, name) in cases {
            let parsed = parse_ingredient(text);
            assert_eq!(parsed.quantity, quantity, "quantity of {text:?}");
            assert_eq!(parsed.unit, unit, "unit of {text:?}");
            assert_eq!(parsed.name, name, "name of {text:?}");
            assert_eq!(parsed.original_text, text);
        }
    }

    #[test]
    fn test_mixed_numbers_by_option() {
        let fixed = parse_ingredient("2 1/2 cups flour");
        assert_eq!(fixed.quantity, 2.5);
        assert_eq!(fixed.name, "flour");

        let legacy = parse_ingredient_with(
            "2 1/2 cups flour",
            ParserOptions {
                legacy_mixed_numbers: true,
            },
        );
        assert_eq!(legacy.quantity, 2.0);
        assert_eq!(legacy.name, "1/2 cups flour");
    }

    #[test]
    fn test_unit_normalization_is_total() {
        let synonyms = [
            "cup", "cups", "tablespoon", "tablespoons", "tbsp", "teaspoon", "teaspoons", "tsp",
            "oz", "ounce", "ounces", "pound", "pounds", "lb", "lbs", "kg", "g", "ml", "l",
        ];
        for synonym in synonyms {
            let canonical = normalize_unit(synonym);
            assert!(CANONICAL_UNITS.contains(&canonical.as_str()), "{synonym}");
            assert_eq!(normalize_unit(&synonym.to_uppercase()), canonical);
        }

        assert_eq!(normalize_unit("Sprigs"), "sprigs");
    }

    #[test]
    fn test_merge_then_display() {
        let lines: Vec<IngredientLine> = ["1 cup flour", "2 cups flour", "1 1/2 cups flour"]
            .iter()
            .map(|t| IngredientLine::new(t, "Baking", "Bread"))
            .collect();

        let items = combine(&lines);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 4.5);
        assert_eq!(items[0].sources.len(), 3);
        assert_eq!(items[0].display_text, "4.5 cup flour");
    }

    #[test]
    fn test_pantry_word_count_guard() {
        let staples = PantryStaples::from_items(["salt"]);
        assert!(!is_grocery_item("salt", &staples));
        assert!(is_grocery_item("2 tbsp pink himalayan salt for finishing", &staples));
    }
}
