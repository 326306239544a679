//! # Recipe and Grocery Data Model
//!
//! This module defines the records that flow through the grocery list pipeline:
//! recipes as stored by the application, the weekly meal plan, ingredient lines
//! with their provenance, parsed ingredients and the aggregated grocery items.
//!
//! ## Lifecycle
//!
//! - **Recipe / MealPlan**: persisted by the storage layer, read-only here
//! - **IngredientLine / ParsedIngredient**: derived on every recomputation
//! - **AggregatedItem**: transient view object, recomputed on every load

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::aggregator::OrderedSet;

/// A recipe record as stored by the application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Identifier assigned when the recipe was created
    #[serde(default)]
    pub id: u64,

    /// Display name of the recipe (required)
    pub name: String,

    /// Free-form category (e.g., "Italian", "Dessert")
    #[serde(default)]
    pub category: String,

    /// Number of servings, as entered by the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<String>,

    /// Preparation time, as entered by the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,

    /// Cooking time, as entered by the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<String>,

    /// Raw ingredient lines (e.g., "2 cups flour")
    #[serde(default)]
    pub ingredients: Vec<String>,

    /// Preparation steps
    #[serde(default)]
    pub instructions: Vec<String>,

    /// Creation time in milliseconds since the Unix epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

impl Recipe {
    /// Create a recipe with a name, a category and ingredient lines
    pub fn new(name: &str, category: &str, ingredients: &[&str]) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            category: category.to_string(),
            servings: None,
            prep_time: None,
            cook_time: None,
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            instructions: Vec::new(),
            created_at: None,
        }
    }
}

/// Days of the week in plan order
pub const WEEK_DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Lowercase day key used by the meal plan store (e.g., "monday")
pub fn day_key(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Weekly meal plan: day key to the recipes planned that day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealPlan {
    days: HashMap<String, Vec<Recipe>>,
}

impl MealPlan {
    /// Create an empty meal plan
    pub fn new() -> Self {
        Self::default()
    }

    /// Plan a recipe on the given day
    pub fn add_recipe(&mut self, day: Weekday, recipe: Recipe) {
        self.days
            .entry(day_key(day).to_string())
            .or_default()
            .push(recipe);
    }

    /// Builder-style variant of [`MealPlan::add_recipe`]
    pub fn with_recipe(mut self, day: Weekday, recipe: Recipe) -> Self {
        self.add_recipe(day, recipe);
        self
    }

    /// Remove every planned occurrence of the named recipe
    pub fn remove_recipe(&mut self, name: &str) {
        for recipes in self.days.values_mut() {
            recipes.retain(|r| r.name != name);
        }
    }

    /// All planned recipes in a deterministic order
    ///
    /// Weekdays are visited Monday through Sunday, followed by any other day
    /// keys in sorted order.
    pub fn recipes(&self) -> Vec<&Recipe> {
        let mut extra_keys: Vec<&String> = self
            .days
            .keys()
            .filter(|k| !WEEK_DAYS.iter().any(|d| day_key(*d) == k.as_str()))
            .collect();
        extra_keys.sort();

        WEEK_DAYS
            .iter()
            .map(|d| day_key(*d))
            .chain(extra_keys.into_iter().map(String::as_str))
            .filter_map(|k| self.days.get(k))
            .flatten()
            .collect()
    }

    /// Check whether nothing is planned
    pub fn is_empty(&self) -> bool {
        self.days.values().all(Vec::is_empty)
    }
}

/// A raw ingredient line with the recipe it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientLine {
    pub text: String,
    pub recipe_category: String,
    pub recipe_name: String,
}

impl IngredientLine {
    pub fn new(text: &str, recipe_category: &str, recipe_name: &str) -> Self {
        Self {
            text: text.to_string(),
            recipe_category: recipe_category.to_string(),
            recipe_name: recipe_name.to_string(),
        }
    }
}

/// Structured view of one ingredient line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    /// Leading quantity, 1 when the line has none
    pub quantity: f64,
    /// Canonical unit, empty for unit-less counts
    pub unit: String,
    /// Lowercased, trimmed ingredient name
    pub name: String,
    /// The line exactly as it was given
    pub original_text: String,
}

/// All occurrences of one (name, unit) pair merged into a grocery item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedItem {
    /// Sum of every folded quantity
    pub quantity: f64,
    /// Canonical unit, empty for unit-less counts
    pub unit: String,
    pub name: String,
    /// Original text of every folded line, in insertion order
    pub sources: Vec<String>,
    /// Recipes that contributed, in first-encounter order
    pub recipe_names: OrderedSet<String>,
    /// Recipe categories that contributed, in first-encounter order
    pub categories: OrderedSet<String>,
    /// Display-ready text (e.g., "2.5 cup flour")
    pub display_text: String,
    /// Whether the user has ticked this item off
    pub checked: bool,
}

impl AggregatedItem {
    /// Key identifying this item in the checked-state map
    pub fn key(&self) -> String {
        item_key(&self.name, &self.unit)
    }
}

impl fmt::Display for AggregatedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_text)
    }
}

/// Build the aggregation key for a name and canonical unit
pub fn item_key(name: &str, unit: &str) -> String {
    format!("{name}-{unit}")
}

/// Items displayed under one heading
#[derive(Debug, Clone, PartialEq)]
pub struct ItemGroup {
    pub label: String,
    pub items: Vec<AggregatedItem>,
}
