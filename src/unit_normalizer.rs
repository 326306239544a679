//! # Unit Normalizer
//!
//! Maps every accepted unit synonym to a single canonical token so that
//! "2 cups flour" and "1 cup flour" end up on the same grocery line.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Canonical unit tokens produced by [`normalize_unit`]
pub const CANONICAL_UNITS: [&str; 9] = ["cup", "tbsp", "tsp", "oz", "lb", "kg", "g", "ml", "l"];

/// Unit words recognized after a quantity, in matching order
///
/// Longer spellings come before their prefixes so the tokenizer prefers
/// "tablespoons" over "tablespoon" and "lbs" over "lb".
pub const UNIT_VOCABULARY: [&str; 19] = [
    "tablespoons",
    "tablespoon",
    "teaspoons",
    "teaspoon",
    "ounces",
    "ounce",
    "pounds",
    "pound",
    "cups",
    "cup",
    "tbsp",
    "tsp",
    "lbs",
    "lb",
    "oz",
    "kg",
    "ml",
    "g",
    "l",
];

/// Synonym to canonical unit
static UNIT_MAPPINGS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Volume units
    map.insert("cup", "cup");
    map.insert("cups", "cup");
    map.insert("tablespoon", "tbsp");
    map.insert("tablespoons", "tbsp");
    map.insert("tbsp", "tbsp");
    map.insert("teaspoon", "tsp");
    map.insert("teaspoons", "tsp");
    map.insert("tsp", "tsp");
    map.insert("ml", "ml");
    map.insert("l", "l");

    // Weight units
    map.insert("oz", "oz");
    map.insert("ounce", "oz");
    map.insert("ounces", "oz");
    map.insert("pound", "lb");
    map.insert("pounds", "lb");
    map.insert("lb", "lb");
    map.insert("lbs", "lb");
    map.insert("kg", "kg");
    map.insert("g", "g");

    map
});

/// Normalize a unit to its canonical token
///
/// Unknown units are returned lowercased and otherwise unchanged; an empty
/// unit stays empty.
///
/// # Examples
///
/// ```rust
/// use grocery_planner::unit_normalizer::normalize_unit;
///
/// assert_eq!(normalize_unit("Tablespoons"), "tbsp");
/// assert_eq!(normalize_unit("lbs"), "lb");
/// assert_eq!(normalize_unit("Pinch"), "pinch");
/// ```
pub fn normalize_unit(raw_unit: &str) -> String {
    let lower = raw_unit.to_lowercase();
    match UNIT_MAPPINGS.get(lower.as_str()) {
        Some(canonical) => canonical.to_string(),
        None => lower,
    }
}
