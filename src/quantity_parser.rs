//! # Quantity Parser
//!
//! Turns a free-text ingredient line into a structured quantity, unit and name.
//!
//! The line is read as a sequence of tokens rather than matched by one
//! composite pattern:
//!
//! 1. a leading numeric token: integer, decimal or simple fraction (`a/b`)
//! 2. optionally a second fraction token forming a mixed number (`2 1/2`),
//!    kept only when something follows it
//! 3. an optional unit word from [`UNIT_VOCABULARY`], possibly glued to the
//!    number (`400g`) and tolerating a trailing "s"
//! 4. the remainder, which becomes the ingredient name; a bare count may
//!    carry a glued plural "s" (`2s eggs`)
//!
//! Parsing never fails: a line that does not fit this shape becomes an
//! ingredient named after the whole line with a quantity of 1.
//!
//! ## Usage
//!
//! ```rust
//! use grocery_planner::quantity_parser::parse_ingredient;
//!
//! let parsed = parse_ingredient("1/2 tsp Vanilla Extract");
//! assert_eq!(parsed.quantity, 0.5);
//! assert_eq!(parsed.unit, "tsp");
//! assert_eq!(parsed.name, "vanilla extract");
//! ```

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::recipe_model::ParsedIngredient;
use crate::unit_normalizer::{normalize_unit, UNIT_VOCABULARY};

// Leading quantity: "2", "1.5", "1/2"
const NUMBER_PATTERN: &str = r"^[0-9]+(?:/[0-9]+)?(?:\.[0-9]+)?";

// Fraction completing a mixed number: "1/2" in "2 1/2"
const MIXED_FRACTION_PATTERN: &str = r"^\s+([0-9]+/[0-9]+)(?:\s|$)";

lazy_static! {
    static ref NUMBER_REGEX: Regex =
        Regex::new(NUMBER_PATTERN).expect("Quantity pattern should be valid");
    static ref MIXED_FRACTION_REGEX: Regex =
        Regex::new(MIXED_FRACTION_PATTERN).expect("Mixed fraction pattern should be valid");
}

/// Options controlling how quantities are read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Read only a single numeric token, so "2 1/2 cups flour" yields a
    /// quantity of 2 and the name "1/2 cups flour". Kept for compatibility
    /// with lists produced by earlier releases.
    pub legacy_mixed_numbers: bool,
}

/// Parse an ingredient line with the default options
pub fn parse_ingredient(text: &str) -> ParsedIngredient {
    parse_ingredient_with(text, ParserOptions::default())
}

/// Parse an ingredient line
///
/// # Arguments
///
/// * `text` - Raw ingredient line (e.g., "2 cups flour", "salt")
/// * `options` - Parser options
///
/// # Returns
///
/// A [`ParsedIngredient`] with a canonical unit (or an empty unit), a
/// lowercased name and the untouched original text.
pub fn parse_ingredient_with(text: &str, options: ParserOptions) -> ParsedIngredient {
    let line = text.trim();

    let parsed = match tokenize(line, options) {
        Some((quantity, unit, name)) => ParsedIngredient {
            quantity,
            unit: normalize_unit(unit),
            name: name.to_lowercase().trim().to_string(),
            original_text: text.to_string(),
        },
        None => ParsedIngredient {
            quantity: 1.0,
            unit: String::new(),
            name: line.to_lowercase(),
            original_text: text.to_string(),
        },
    };

    trace!(
        "Parsed '{}' -> quantity={}, unit='{}', name='{}'",
        text,
        parsed.quantity,
        parsed.unit,
        parsed.name
    );
    parsed
}

/// Evaluate a numeric token: "3", "1.5" or "a/b"
///
/// Returns `None` for unparsable tokens and zero denominators.
pub fn parse_fraction(token: &str) -> Option<f64> {
    match token.split_once('/') {
        Some((numerator, denominator)) => {
            let numerator: f64 = numerator.trim().parse().ok()?;
            let denominator: f64 = denominator.trim().parse().ok()?;
            if denominator == 0.0 {
                return None;
            }
            Some(numerator / denominator)
        }
        None => token.trim().parse().ok(),
    }
}

/// Split a trimmed line into (quantity, raw unit, name remainder)
fn tokenize(line: &str, options: ParserOptions) -> Option<(f64, &str, &str)> {
    let number = NUMBER_REGEX.find(line)?;
    let number_token = number.as_str();
    let quantity = parse_fraction(number_token)?;
    let rest = &line[number.end()..];

    // A mixed number only counts when something follows it; "2 1/2" alone
    // reads as 2 of "1/2"
    let is_whole_number = number_token.bytes().all(|b| b.is_ascii_digit());
    if !options.legacy_mixed_numbers && is_whole_number {
        if let Some((fraction, after)) = mixed_fraction(rest) {
            if let Some(parsed) = split_remainder(quantity + fraction, after) {
                return Some(parsed);
            }
        }
    }

    split_remainder(quantity, rest)
}

/// Value of a fraction completing a mixed number, with the text after it
fn mixed_fraction(rest: &str) -> Option<(f64, &str)> {
    let fraction = MIXED_FRACTION_REGEX.captures(rest)?.get(1)?;
    let value = parse_fraction(fraction.as_str())?;
    Some((value, &rest[fraction.end()..]))
}

/// Read the optional unit and the name that follow the quantity
fn split_remainder(quantity: f64, rest: &str) -> Option<(f64, &str, &str)> {
    if let Some((unit, name)) = split_unit(rest) {
        return Some((quantity, unit, name));
    }

    // A plural "s" may be glued to a bare count ("2s eggs")
    let rest = match rest.strip_prefix(['s', 'S']) {
        Some(after) if after.starts_with(char::is_whitespace) => after,
        _ => rest,
    };

    // No unit: the name must be separated from the number by whitespace
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let name = rest.trim();
    if name.is_empty() {
        return None;
    }
    Some((quantity, "", name))
}

/// Match a unit word at the start of `rest`, followed by whitespace and a name
fn split_unit(rest: &str) -> Option<(&str, &str)> {
    let candidate = rest.trim_start();

    for unit in UNIT_VOCABULARY {
        let Some(prefix) = candidate.get(..unit.len()) else {
            continue;
        };
        if !prefix.eq_ignore_ascii_case(unit) {
            continue;
        }

        let mut after = &candidate[unit.len()..];
        if after.starts_with(['s', 'S']) {
            after = &after[1..];
        }
        if !after.starts_with(char::is_whitespace) {
            continue;
        }

        let name = after.trim();
        if !name.is_empty() {
            return Some((prefix, name));
        }
    }

    None
}
