//! # Category Normalizer
//!
//! Recipes arrive with free-form categories ("italian cuisine", "Stir Fry",
//! "Pho Bowl"). This module folds them onto a standard set so grouping the
//! grocery list by category doesn't split "Italian" and "italian" apart.

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

/// Fallback category for blank or meaningless input
pub const OTHER_CATEGORY: &str = "Other";

/// Standard category set
pub const STANDARD_CATEGORIES: [&str; 29] = [
    "Italian",
    "Mexican",
    "Chinese",
    "Japanese",
    "Indian",
    "Thai",
    "Mediterranean",
    "American",
    "French",
    "Korean",
    "Vietnamese",
    "Middle Eastern",
    "Greek",
    "Spanish",
    "Asian",
    "Breakfast",
    "Dessert",
    "Appetizer",
    "Salad",
    "Soup",
    "Pasta",
    "Noodles",
    "Pizza",
    "Burger",
    "Sandwich",
    "BBQ",
    "Vegetarian",
    "Vegan",
    "Seafood",
];

/// Known variations and dish names, in keyword matching order
///
/// `None` marks generic meal types that must not be mapped by exact match.
const CATEGORY_MAPPINGS: &[(&str, Option<&str>)] = &[
    // Cuisine variations
    ("tex-mex", Some("Mexican")),
    ("latin", Some("Mexican")),
    ("latin american", Some("Mexican")),
    ("middle-eastern", Some("Middle Eastern")),
    ("mideast", Some("Middle Eastern")),
    // Meal types
    ("main course", None),
    ("main dish", None),
    ("entree", None),
    ("entrée", None),
    ("dinner", None),
    ("lunch", None),
    ("brunch", Some("Breakfast")),
    ("side dish", Some("Appetizer")),
    ("side", Some("Appetizer")),
    // Pasta shapes
    ("spaghetti", Some("Pasta")),
    ("linguine", Some("Pasta")),
    ("fettuccine", Some("Pasta")),
    ("penne", Some("Pasta")),
    ("ravioli", Some("Pasta")),
    ("lasagna", Some("Pasta")),
    // Asian noodles
    ("ramen", Some("Japanese")),
    ("udon", Some("Japanese")),
    ("soba", Some("Japanese")),
    ("pho", Some("Vietnamese")),
    ("pad thai", Some("Thai")),
    ("lo mein", Some("Chinese")),
    ("chow mein", Some("Chinese")),
    ("rice noodles", Some("Noodles")),
    ("egg noodles", Some("Noodles")),
    // Dishes
    ("stir fry", Some("Chinese")),
    ("stir-fry", Some("Chinese")),
    ("curry", Some("Indian")),
    ("taco", Some("Mexican")),
    ("burrito", Some("Mexican")),
    ("enchilada", Some("Mexican")),
    ("quesadilla", Some("Mexican")),
    ("sushi", Some("Japanese")),
    ("tempura", Some("Japanese")),
    ("teriyaki", Some("Japanese")),
    ("bibimbap", Some("Korean")),
    ("bulgogi", Some("Korean")),
    ("kimchi", Some("Korean")),
    ("kebab", Some("Middle Eastern")),
    ("shawarma", Some("Middle Eastern")),
    ("falafel", Some("Middle Eastern")),
    ("hummus", Some("Middle Eastern")),
    ("gyro", Some("Greek")),
    ("souvlaki", Some("Greek")),
    ("paella", Some("Spanish")),
    ("tapas", Some("Spanish")),
    ("crepe", Some("French")),
    ("croissant", Some("French")),
    ("quiche", Some("French")),
    ("coq au vin", Some("French")),
    ("ratatouille", Some("French")),
    ("risotto", Some("Italian")),
    ("carbonara", Some("Italian")),
    ("bruschetta", Some("Italian")),
    ("tiramisu", Some("Italian")),
    // Seafood
    ("fish", Some("Seafood")),
    ("shrimp", Some("Seafood")),
    ("shellfish", Some("Seafood")),
    ("crab", Some("Seafood")),
    ("lobster", Some("Seafood")),
    ("salmon", Some("Seafood")),
    // Diets
    ("plant-based", Some("Vegetarian")),
    ("meatless", Some("Vegetarian")),
    ("dairy-free", Some("Vegan")),
    // Lowercase cuisines
    ("italian", Some("Italian")),
    ("mexican", Some("Mexican")),
    ("american", Some("American")),
    ("french", Some("French")),
    ("chinese", Some("Chinese")),
    ("japanese", Some("Japanese")),
    ("indian", Some("Indian")),
    ("thai", Some("Thai")),
    ("korean", Some("Korean")),
    ("vietnamese", Some("Vietnamese")),
    ("greek", Some("Greek")),
    ("spanish", Some("Spanish")),
];

lazy_static! {
    static ref FILLER_WORDS: Regex = Regex::new(r"(?i)\b(cuisine|dish|food|style|recipe)\b")
        .expect("Filler pattern should be valid");
}

/// Normalize a free-form category
///
/// Resolution order: standard category (case-insensitive), exact mapping,
/// first mapping keyword contained in the category, one of the user's
/// existing categories, and finally the cleaned-up, title-cased input.
///
/// # Examples
///
/// ```rust
/// use grocery_planner::category::normalize_category;
///
/// assert_eq!(normalize_category("italian cuisine", &[]), "Italian");
/// assert_eq!(normalize_category("Pho Bowl", &[]), "Vietnamese");
/// assert_eq!(normalize_category("Main Course", &[]), "Main Course");
/// assert_eq!(normalize_category("", &[]), "Other");
/// ```
pub fn normalize_category(category: &str, existing: &[String]) -> String {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        return OTHER_CATEGORY.to_string();
    }
    let lower = trimmed.to_lowercase();

    if let Some(standard) = STANDARD_CATEGORIES
        .iter()
        .find(|c| c.to_lowercase() == lower)
    {
        return standard.to_string();
    }

    if let Some((_, Some(mapped))) = CATEGORY_MAPPINGS.iter().find(|(k, _)| *k == lower) {
        return mapped.to_string();
    }

    if let Some((keyword, Some(mapped))) = CATEGORY_MAPPINGS
        .iter()
        .find(|(k, m)| m.is_some() && lower.contains(k))
    {
        trace!("Category '{}' matched keyword '{}'", category, keyword);
        return mapped.to_string();
    }

    if let Some(existing) = existing.iter().find(|c| c.to_lowercase() == lower) {
        return existing.clone();
    }

    let cleaned = FILLER_WORDS.replace_all(trimmed, "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return OTHER_CATEGORY.to_string();
    }
    title_case(cleaned)
}

/// Capitalize each space-separated word and lowercase the rest
fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_EXISTING: &[String] = &[];

    #[test]
    fn test_standard_categories() {
        assert_eq!(normalize_category("italian", NO_EXISTING), "Italian");
        assert_eq!(normalize_category("  NOODLES ", NO_EXISTING), "Noodles");
        assert_eq!(normalize_category("bbq", NO_EXISTING), "BBQ");
        assert_eq!(normalize_category("Asian", NO_EXISTING), "Asian");
    }

    #[test]
    fn test_mapped_categories() {
        assert_eq!(normalize_category("Tex-Mex", NO_EXISTING), "Mexican");
        assert_eq!(normalize_category("Brunch", NO_EXISTING), "Breakfast");
        assert_eq!(normalize_category("Ramen", NO_EXISTING), "Japanese");
        assert_eq!(normalize_category("Lo Mein", NO_EXISTING), "Chinese");
    }

    #[test]
    fn test_keyword_matches() {
        assert_eq!(normalize_category("italian cuisine", NO_EXISTING), "Italian");
        assert_eq!(normalize_category("Stir Fry", NO_EXISTING), "Chinese");
        assert_eq!(normalize_category("pasta dish", NO_EXISTING), "Pasta");
        assert_eq!(normalize_category("Pho Bowl", NO_EXISTING), "Vietnamese");
    }

    #[test]
    fn test_existing_categories() {
        let existing = vec!["Ethiopian".to_string(), "Family Favorites".to_string()];
        assert_eq!(normalize_category("family favorites", &existing), "Family Favorites");
    }

    #[test]
    fn test_new_categories_are_cleaned() {
        assert_eq!(normalize_category("Ethiopian", NO_EXISTING), "Ethiopian");
        assert_eq!(normalize_category("peruvian food", NO_EXISTING), "Peruvian");
        assert_eq!(normalize_category("Main Course", NO_EXISTING), "Main Course");
        assert_eq!(normalize_category("Recipe", NO_EXISTING), "Other");
        assert_eq!(normalize_category("   ", NO_EXISTING), "Other");
    }
}
