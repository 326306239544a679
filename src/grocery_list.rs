//! # Grocery List Assembler
//!
//! Builds the shopping list for the week:
//!
//! 1. flatten the meal plan into ingredient lines tagged with their recipe
//! 2. drop pantry staples
//! 3. parse, normalize and merge duplicate ingredients
//! 4. apply the persisted checked state
//! 5. optionally group the items by recipe category
//!
//! Only the pantry staples and the checked-state map are durable; the list
//! itself is recomputed from the current meal plan on every load.

use log::{debug, info, warn};
use std::collections::HashMap;

use crate::aggregator::combine_with;
use crate::category::normalize_category;
use crate::config::GroceryConfig;
use crate::pantry::{is_grocery_item, PantryStaples};
use crate::quantity_parser::ParserOptions;
use crate::recipe_model::{AggregatedItem, IngredientLine, ItemGroup, MealPlan};
use crate::storage::{
    load_or_default, load_value, save_value, KeyValueStore, CHECKED_ITEMS_KEY, MEAL_PLAN_KEY,
    PANTRY_STAPLES_KEY,
};

/// Label of the single group produced when grouping is disabled
pub const ALL_ITEMS_LABEL: &str = "All Items";

/// Persisted checked state: item key to checked flag
pub type CheckedState = HashMap<String, bool>;

/// Display-ready grocery list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroceryList {
    pub items: Vec<AggregatedItem>,
}

impl GroceryList {
    /// Look up an item by its key (e.g., "flour-cup")
    pub fn get(&self, key: &str) -> Option<&AggregatedItem> {
        self.items.iter().find(|item| item.key() == key)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    /// Number of listed items that are checked
    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|item| item.checked).count()
    }

    /// Progress line, e.g. "2 of 7 items checked"
    pub fn progress_summary(&self) -> String {
        format!(
            "{} of {} items checked",
            self.checked_count(),
            self.total_count()
        )
    }

    /// Arrange the items for display
    ///
    /// Without grouping there is a single "All Items" group. With grouping
    /// every category an item touches gets a copy of it, and groups appear in
    /// the order their category was first seen.
    pub fn grouped(&self, by_category: bool) -> Vec<ItemGroup> {
        if !by_category {
            return vec![ItemGroup {
                label: ALL_ITEMS_LABEL.to_string(),
                items: self.items.clone(),
            }];
        }

        let mut groups: Vec<ItemGroup> = Vec::new();
        for item in &self.items {
            for category in &item.categories {
                match groups.iter_mut().find(|g| g.label == *category) {
                    Some(group) => group.items.push(item.clone()),
                    None => groups.push(ItemGroup {
                        label: category.clone(),
                        items: vec![item.clone()],
                    }),
                }
            }
        }
        groups
    }
}

/// Flatten a meal plan into ingredient lines in plan order
///
/// With `normalize_categories`, each recipe category is folded onto the
/// standard set, reusing the first spelling seen in the plan for unknown ones.
pub fn flatten_meal_plan(plan: &MealPlan, normalize_categories: bool) -> Vec<IngredientLine> {
    let recipes = plan.recipes();

    let mut known_categories: Vec<String> = Vec::new();
    let mut lines = Vec::new();
    for recipe in recipes {
        let category = if normalize_categories {
            let normalized = normalize_category(&recipe.category, &known_categories);
            if !known_categories.contains(&normalized) {
                known_categories.push(normalized.clone());
            }
            normalized
        } else {
            recipe.category.clone()
        };

        lines.extend(
            recipe
                .ingredients
                .iter()
                .map(|text| IngredientLine::new(text, &category, &recipe.name)),
        );
    }
    lines
}

/// Run the whole pipeline over in-memory inputs
pub fn build_grocery_list(
    plan: &MealPlan,
    staples: &PantryStaples,
    checked: &CheckedState,
    parser: ParserOptions,
    normalize_categories: bool,
) -> GroceryList {
    let all_lines = flatten_meal_plan(plan, normalize_categories);
    let line_count = all_lines.len();

    let grocery_lines: Vec<IngredientLine> = all_lines
        .into_iter()
        .filter(|line| is_grocery_item(&line.text, staples))
        .collect();
    debug!(
        "{} of {} ingredient lines left after pantry filter",
        grocery_lines.len(),
        line_count
    );

    let mut items = combine_with(&grocery_lines, parser);
    for item in &mut items {
        item.checked = checked.get(&item.key()).copied().unwrap_or(false);
    }

    GroceryList { items }
}

/// Grocery list backed by a key-value store
pub struct GroceryListAssembler<S: KeyValueStore> {
    store: S,
    parser: ParserOptions,
    normalize_categories: bool,
    staples: PantryStaples,
    checked: CheckedState,
    list: GroceryList,
}

impl<S: KeyValueStore> GroceryListAssembler<S> {
    /// Create an assembler over `store`; call [`load`](Self::load) to populate it
    pub fn new(store: S, config: &GroceryConfig) -> Self {
        Self {
            store,
            parser: config.parser,
            normalize_categories: config.normalize_categories,
            staples: PantryStaples::default(),
            checked: CheckedState::new(),
            list: GroceryList::default(),
        }
    }

    /// Read the meal plan, staples and checked state, then rebuild the list
    pub fn load(&mut self) -> &GroceryList {
        self.staples = self.load_staples();
        self.checked = load_or_default(&self.store, CHECKED_ITEMS_KEY);
        self.recompute();
        &self.list
    }

    /// The list as of the last load or change
    pub fn grocery_list(&self) -> &GroceryList {
        &self.list
    }

    pub fn staples(&self) -> &PantryStaples {
        &self.staples
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Flip an item's checked flag and persist the whole checked map
    ///
    /// Returns the new state.
    pub fn toggle_item(&mut self, key: &str) -> bool {
        let checked = !self.checked.get(key).copied().unwrap_or(false);
        self.checked.insert(key.to_string(), checked);
        save_value(&mut self.store, CHECKED_ITEMS_KEY, &self.checked);

        match self.list.items.iter_mut().find(|item| item.key() == key) {
            Some(item) => item.checked = checked,
            None => warn!("Toggled '{}' which is not on the current list", key),
        }
        checked
    }

    /// Uncheck everything and persist the empty map
    pub fn clear_checked(&mut self) {
        self.checked.clear();
        save_value(&mut self.store, CHECKED_ITEMS_KEY, &self.checked);
        for item in &mut self.list.items {
            item.checked = false;
        }
        info!("Cleared checked grocery items");
    }

    /// Replace the staples wholesale, persist them and rebuild the list
    pub fn replace_staples(&mut self, staples: PantryStaples) -> &GroceryList {
        self.staples = staples;
        self.save_staples_and_recompute();
        &self.list
    }

    /// Add a staple; returns false when it was already present or blank
    pub fn add_staple(&mut self, staple: &str) -> bool {
        let added = self.staples.add(staple);
        if added {
            self.save_staples_and_recompute();
        }
        added
    }

    /// Remove a staple; returns false when it was not present
    pub fn remove_staple(&mut self, staple: &str) -> bool {
        let removed = self.staples.remove(staple);
        if removed {
            self.save_staples_and_recompute();
        }
        removed
    }

    /// Restore the default staple set
    pub fn reset_staples(&mut self) -> &GroceryList {
        self.replace_staples(PantryStaples::default())
    }

    fn save_staples_and_recompute(&mut self) {
        save_value(&mut self.store, PANTRY_STAPLES_KEY, &self.staples);
        self.recompute();
    }

    /// Staples from the store, seeding the defaults when none are stored yet
    fn load_staples(&mut self) -> PantryStaples {
        match load_value::<PantryStaples, _>(&self.store, PANTRY_STAPLES_KEY) {
            Some(staples) => staples,
            None => {
                info!("Seeding default pantry staples");
                let staples = PantryStaples::default();
                save_value(&mut self.store, PANTRY_STAPLES_KEY, &staples);
                staples
            }
        }
    }

    fn recompute(&mut self) {
        let plan: MealPlan = load_or_default(&self.store, MEAL_PLAN_KEY);
        self.list = build_grocery_list(
            &plan,
            &self.staples,
            &self.checked,
            self.parser,
            self.normalize_categories,
        );
        info!(
            "Grocery list rebuilt: {} items, {}",
            self.list.total_count(),
            self.list.progress_summary()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe_model::Recipe;
    use chrono::Weekday;

    fn sample_plan() -> MealPlan {
        MealPlan::new()
            .with_recipe(
                Weekday::Mon,
                Recipe::new("Lasagna", "Italian", &["2 cups flour", "1 lb ground beef", "salt"]),
            )
            .with_recipe(
                Weekday::Tue,
                Recipe::new("Tacos", "Mexican", &["1 lb ground beef", "8 taco shells"]),
            )
    }

    #[test]
    fn test_flatten_keeps_plan_order_and_provenance() {
        let lines = flatten_meal_plan(&sample_plan(), true);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], IngredientLine::new("2 cups flour", "Italian", "Lasagna"));
        assert_eq!(lines[4], IngredientLine::new("8 taco shells", "Mexican", "Tacos"));
    }

    #[test]
    fn test_flatten_normalizes_categories() {
        let plan = MealPlan::new()
            .with_recipe(Weekday::Mon, Recipe::new("A", "italian cuisine", &["basil"]))
            .with_recipe(Weekday::Tue, Recipe::new("B", "", &["rice"]))
            .with_recipe(Weekday::Wed, Recipe::new("C", "Family Favorites", &["corn"]))
            .with_recipe(Weekday::Thu, Recipe::new("D", "family favorites", &["peas"]));

        let categories: Vec<String> = flatten_meal_plan(&plan, true)
            .into_iter()
            .map(|l| l.recipe_category)
            .collect();
        assert_eq!(categories, vec!["Italian", "Other", "Family Favorites", "Family Favorites"]);

        let raw: Vec<String> = flatten_meal_plan(&plan, false)
            .into_iter()
            .map(|l| l.recipe_category)
            .collect();
        assert_eq!(raw[0], "italian cuisine");
        assert_eq!(raw[1], "");
    }

    #[test]
    fn test_build_filters_merges_and_checks() {
        let staples = PantryStaples::from_items(["salt", "flour"]);
        let checked: CheckedState = [("ground beef-lb".to_string(), true)].into_iter().collect();

        let list = build_grocery_list(
            &sample_plan(),
            &staples,
            &checked,
            ParserOptions::default(),
            true,
        );

        let keys: Vec<String> = list.items.iter().map(|i| i.key()).collect();
        assert_eq!(keys, vec!["ground beef-lb", "taco shells-"]);
        assert_eq!(list.items[0].display_text, "2 lb ground beef");
        assert!(list.items[0].checked);
        assert!(!list.items[1].checked);
        assert_eq!(list.progress_summary(), "1 of 2 items checked");
    }

    #[test]
    fn test_grouping() {
        let list = build_grocery_list(
            &sample_plan(),
            &PantryStaples::empty(),
            &CheckedState::new(),
            ParserOptions::default(),
            true,
        );

        let flat = list.grouped(false);
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].label, ALL_ITEMS_LABEL);
        assert_eq!(flat[0].items.len(), 4);

        let groups = list.grouped(true);
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["Italian", "Mexican"]);
        assert_eq!(groups[0].items.len(), 3);
        assert_eq!(groups[1].items.len(), 2);
        assert_eq!(groups[1].items[0].key(), "ground beef-lb");
    }

    #[test]
    fn test_empty_plan_gives_empty_list() {
        let list = build_grocery_list(
            &MealPlan::new(),
            &PantryStaples::default(),
            &CheckedState::new(),
            ParserOptions::default(),
            true,
        );
        assert!(list.is_empty());
        assert!(list.grouped(true).is_empty());
        assert_eq!(list.progress_summary(), "0 of 0 items checked");
    }
}
