//! # Pantry Staples
//!
//! Staples are ingredients the user always has on hand. Short ingredient lines
//! that mention a staple are left off the shopping list.

use log::debug;
use serde::{Deserialize, Serialize};

/// Starter set used until the user customizes their staples
pub const DEFAULT_STAPLES: [&str; 21] = [
    "water",
    "salt",
    "black pepper",
    "olive oil",
    "vegetable oil",
    "canola oil",
    "sugar",
    "flour",
    "baking soda",
    "baking powder",
    "vanilla extract",
    "garlic powder",
    "onion powder",
    "paprika",
    "cumin",
    "oregano",
    "cinnamon",
    "soy sauce",
    "worcestershire sauce",
    "white vinegar",
    "apple cider vinegar",
];

/// Lines with more words than this are never suppressed by a staple match
pub const MAX_STAPLE_LINE_WORDS: usize = 3;

/// Lowercase, de-duplicated staple strings in insertion order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct PantryStaples {
    staples: Vec<String>,
}

impl PantryStaples {
    /// Create an empty staple set
    pub fn empty() -> Self {
        Self {
            staples: Vec::new(),
        }
    }

    /// Build a staple set from arbitrary strings
    ///
    /// Entries are trimmed and lowercased; blanks and duplicates are dropped.
    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut staples = Self::empty();
        for item in items {
            staples.add(item.as_ref());
        }
        staples
    }

    /// Add a staple, returning false when it was blank or already present
    pub fn add(&mut self, staple: &str) -> bool {
        let staple = staple.trim().to_lowercase();
        if staple.is_empty() || self.staples.contains(&staple) {
            return false;
        }
        self.staples.push(staple);
        true
    }

    /// Remove a staple, returning false when it was not present
    pub fn remove(&mut self, staple: &str) -> bool {
        let staple = staple.trim().to_lowercase();
        let before = self.staples.len();
        self.staples.retain(|s| *s != staple);
        self.staples.len() != before
    }

    pub fn contains(&self, staple: &str) -> bool {
        self.staples.contains(&staple.trim().to_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.staples.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.staples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staples.is_empty()
    }
}

impl Default for PantryStaples {
    fn default() -> Self {
        Self::from_items(DEFAULT_STAPLES)
    }
}

impl From<Vec<String>> for PantryStaples {
    fn from(items: Vec<String>) -> Self {
        Self::from_items(items)
    }
}

impl From<PantryStaples> for Vec<String> {
    fn from(staples: PantryStaples) -> Self {
        staples.staples
    }
}

/// Decide whether an ingredient line belongs on the grocery list
///
/// A line is left off when its lowercased text contains a staple and it has
/// at most [`MAX_STAPLE_LINE_WORDS`] words. Longer lines describe something
/// more specific than the staple ("2 tbsp pink himalayan salt for finishing")
/// and are kept.
///
/// # Examples
///
/// ```rust
/// use grocery_planner::pantry::{is_grocery_item, PantryStaples};
///
/// let staples = PantryStaples::from_items(["salt"]);
/// assert!(!is_grocery_item("Salt", &staples));
/// assert!(is_grocery_item("2 tbsp pink himalayan salt for finishing", &staples));
/// ```
pub fn is_grocery_item(text: &str, staples: &PantryStaples) -> bool {
    let lower = text.to_lowercase();
    if lower.split_whitespace().count() > MAX_STAPLE_LINE_WORDS {
        return true;
    }

    match staples.iter().find(|staple| lower.contains(staple)) {
        Some(staple) => {
            debug!("Skipping '{}': matches pantry staple '{}'", text, staple);
            false
        }
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_staple_line_is_suppressed() {
        let staples = PantryStaples::from_items(["salt"]);
        assert!(!is_grocery_item("salt", &staples));
        assert!(!is_grocery_item("1 tsp salt", &staples));
        assert!(!is_grocery_item("Sea Salt", &staples));
    }

    #[test]
    fn test_long_specific_line_is_kept() {
        let staples = PantryStaples::from_items(["salt"]);
        assert!(is_grocery_item(
            "2 tbsp pink himalayan salt for finishing",
            &staples
        ));
        assert!(is_grocery_item("1 tsp flaky sea salt", &staples));
    }

    #[test]
    fn test_non_staple_is_kept() {
        let staples = PantryStaples::default();
        assert!(is_grocery_item("400g spaghetti", &staples));
        assert!(is_grocery_item("4 eggs", &staples));
        assert!(!is_grocery_item("2 cups flour", &staples));
    }

    #[test]
    fn test_fresh_peppers_are_not_staples() {
        let staples = PantryStaples::default();
        assert!(is_grocery_item("2 bell peppers", &staples));
        assert!(is_grocery_item("1 jalapeno pepper", &staples));
        assert!(!is_grocery_item("black pepper", &staples));
    }

    #[test]
    fn test_empty_staples_keep_everything() {
        let staples = PantryStaples::empty();
        assert!(is_grocery_item("salt", &staples));
    }

    #[test]
    fn test_staples_are_normalized() {
        let mut staples = PantryStaples::from_items(["  Salt ", "salt", "", "Olive Oil"]);
        assert_eq!(staples.iter().collect::<Vec<_>>(), vec!["salt", "olive oil"]);

        assert!(!staples.add("SALT"));
        assert!(staples.add("Cumin"));
        assert!(staples.contains("cumin"));
        assert!(staples.remove("olive oil"));
        assert!(!staples.remove("olive oil"));
        assert_eq!(staples.len(), 2);
    }

    #[test]
    fn test_staples_serialize_as_list() {
        let staples = PantryStaples::from_items(["salt", "sugar"]);
        let json = serde_json::to_string(&staples).unwrap();
        assert_eq!(json, r#"["salt","sugar"]"#);

        let back: PantryStaples = serde_json::from_str(r#"["Water", "water"]"#).unwrap();
        assert_eq!(back.len(), 1);
    }

    #[test]
    fn test_default_staples() {
        let staples = PantryStaples::default();
        assert_eq!(staples.len(), DEFAULT_STAPLES.len());
        assert!(staples.contains("baking soda"));
        assert!(staples.contains("worcestershire sauce"));
    }
}
