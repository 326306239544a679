//! # Grocery Planner
//!
//! Turns a weekly meal plan into a consolidated grocery list: ingredient lines
//! are parsed, pantry staples are dropped, duplicates are merged by name and
//! unit, and the user's check marks are carried across recomputations.

pub mod aggregator;
pub mod category;
pub mod config;
pub mod grocery_list;
pub mod pantry;
pub mod quantity_parser;
pub mod recipe_model;
pub mod storage;
pub mod unit_normalizer;
