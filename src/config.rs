//! # Configuration Module
//!
//! Runtime settings for the grocery planner, read from the environment
//! (a `.env` file is loaded by the binary before this runs).

use anyhow::{Context, Result};
use log::debug;
use std::env;
use std::path::PathBuf;

use crate::quantity_parser::ParserOptions;

// Defaults
pub const DEFAULT_STORAGE_DIR: &str = "./grocery-data";
pub const DEFAULT_GROUP_BY_CATEGORY: bool = false;
pub const DEFAULT_NORMALIZE_CATEGORIES: bool = false;

// Environment variables
pub const STORAGE_DIR_VAR: &str = "GROCERY_STORAGE_DIR";
pub const GROUP_BY_CATEGORY_VAR: &str = "GROCERY_GROUP_BY_CATEGORY";
pub const LEGACY_MIXED_NUMBERS_VAR: &str = "GROCERY_LEGACY_MIXED_NUMBERS";
pub const NORMALIZE_CATEGORIES_VAR: &str = "GROCERY_NORMALIZE_CATEGORIES";

/// Configuration structure for the grocery planner
#[derive(Debug, Clone, PartialEq)]
pub struct GroceryConfig {
    /// Directory holding the file-backed store
    pub storage_dir: PathBuf,
    /// Group the printed list by recipe category
    pub group_by_category: bool,
    /// Quantity parser options
    pub parser: ParserOptions,
    /// Fold recipe categories onto the standard category set
    pub normalize_categories: bool,
}

impl Default for GroceryConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            group_by_category: DEFAULT_GROUP_BY_CATEGORY,
            parser: ParserOptions::default(),
            normalize_categories: DEFAULT_NORMALIZE_CATEGORIES,
        }
    }
}

impl GroceryConfig {
    /// Build a configuration from environment variables
    ///
    /// Unset variables keep their defaults; a set but unparsable boolean is
    /// an error.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(dir) = env::var(STORAGE_DIR_VAR) {
            config.storage_dir = PathBuf::from(dir);
        }
        if let Some(value) = read_bool(GROUP_BY_CATEGORY_VAR)? {
            config.group_by_category = value;
        }
        if let Some(value) = read_bool(LEGACY_MIXED_NUMBERS_VAR)? {
            config.parser.legacy_mixed_numbers = value;
        }
        if let Some(value) = read_bool(NORMALIZE_CATEGORIES_VAR)? {
            config.normalize_categories = value;
        }

        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }
}

/// Read an optional boolean environment variable
fn read_bool(name: &str) -> Result<Option<bool>> {
    match env::var(name) {
        Ok(raw) => parse_bool(&raw)
            .map(Some)
            .with_context(|| format!("{name} must be a boolean, got '{raw}'")),
        Err(_) => Ok(None),
    }
}

/// Parse the usual spellings of a boolean flag
pub fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(anyhow::anyhow!("unrecognized boolean '{other}'")),
    }
}
