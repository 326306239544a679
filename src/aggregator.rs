//! # Ingredient Aggregator
//!
//! Groups parsed ingredient lines by (name, canonical unit), sums their
//! quantities and keeps track of where each line came from.
//!
//! Output order follows the first time each key is seen, so the same meal plan
//! always produces the same list.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::quantity_parser::{parse_ingredient_with, ParserOptions};
use crate::recipe_model::{item_key, AggregatedItem, IngredientLine};
use crate::unit_normalizer::normalize_unit;

/// Set with deterministic, insertion-ordered iteration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderedSet<T> {
    items: Vec<T>,
}

impl<T: PartialEq> OrderedSet<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Insert a value, returning false if it was already present
    pub fn insert(&mut self, value: T) -> bool {
        if self.items.contains(&value) {
            return false;
        }
        self.items.push(value);
        true
    }

    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: PartialEq> Default for OrderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Combine ingredient lines with the default parser options
pub fn combine(lines: &[IngredientLine]) -> Vec<AggregatedItem> {
    combine_with(lines, ParserOptions::default())
}

/// Combine ingredient lines into one item per (name, unit) key
///
/// Each item's quantity is the sum of the folded quantities, `sources` holds
/// one entry per folded line, and recipe names and categories are tracked as
/// insertion-ordered sets. Every returned item starts unchecked.
pub fn combine_with(lines: &[IngredientLine], options: ParserOptions) -> Vec<AggregatedItem> {
    let mut items: Vec<AggregatedItem> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();

    for line in lines {
        let parsed = parse_ingredient_with(&line.text, options);
        let unit = normalize_unit(&parsed.unit);
        let key = item_key(&parsed.name, &unit);

        match index_by_key.get(&key) {
            Some(&index) => {
                let item = &mut items[index];
                item.quantity += parsed.quantity;
                item.sources.push(parsed.original_text);
                item.recipe_names.insert(line.recipe_name.clone());
                item.categories.insert(line.recipe_category.clone());
                debug!("Merged '{}' into '{}'", line.text, key);
            }
            None => {
                index_by_key.insert(key, items.len());
                items.push(AggregatedItem {
                    quantity: parsed.quantity,
                    unit,
                    name: parsed.name,
                    sources: vec![parsed.original_text],
                    recipe_names: std::iter::once(line.recipe_name.clone()).collect(),
                    categories: std::iter::once(line.recipe_category.clone()).collect(),
                    display_text: String::new(),
                    checked: false,
                });
            }
        }
    }

    for item in &mut items {
        item.display_text = format_display_text(item.quantity, &item.unit, &item.name);
    }

    info!(
        "Combined {} ingredient lines into {} grocery items",
        lines.len(),
        items.len()
    );
    items
}

/// Format an item for display
///
/// The quantity is shown (rounded to two decimals) only when it is positive
/// and not exactly 1; the unit only when non-empty.
///
/// # Examples
///
/// ```rust
/// use grocery_planner::aggregator::format_display_text;
///
/// assert_eq!(format_display_text(2.5, "cup", "flour"), "2.5 cup flour");
/// assert_eq!(format_display_text(1.0, "", "salt"), "salt");
/// ```
pub fn format_display_text(quantity: f64, unit: &str, name: &str) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(3);
    if quantity > 0.0 && quantity != 1.0 {
        parts.push(format_quantity(quantity));
    }
    if !unit.is_empty() {
        parts.push(unit.to_string());
    }
    if !name.is_empty() {
        parts.push(name.to_string());
    }
    parts.join(" ")
}

/// Round to two decimals and drop trailing zeros ("3", "2.5", "0.33")
fn format_quantity(quantity: f64) -> String {
    let rounded = (quantity * 100.0).round() / 100.0;
    format!("{rounded}")
}
