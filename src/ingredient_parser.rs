//! # Ingredient Parser
//!
//! This module turns raw recipe ingredient strings into structured
//! [`ParsedIngredient`] records. It wires the pipeline stages together:
//!
//! 1. Strip leading bullet/checkbox noise
//! 2. Run the ordered measurement rule table (first match wins)
//! 3. Split the remainder into name and parenthetical context
//! 4. Assign a grocery category from the cleaned name
//! 5. Rescan the raw string for alternative units
//!
//! Parsing never fails. Anything the rule table cannot handle becomes the
//! default record (`quantity = "1"`, `unit = "count"`), and a panic while
//! parsing one string is contained to that string.
//!
//! ## Usage
//!
//! ```rust
//! use ingredient_processor::ingredient_parser::parse_ingredients;
//!
//! let parsed = parse_ingredients(&["2 (15-ounce) cans diced tomatoes", "salt to taste"]);
//!
//! assert_eq!(parsed.ingredients[0].quantity, "2");
//! assert_eq!(parsed.ingredients[0].unit, "can");
//! assert_eq!(parsed.ingredients[1].category, "Spices & Seasonings");
//! ```

use crate::alternative_units::detect_alternative_units;
use crate::categorizer::categorize;
use crate::ingredient_model::{AlternativeUnit, ParsedIngredient, ParsedIngredientList};
use crate::measurement_patterns::match_measurement;
use crate::processor_config::ProcessorConfig;
use crate::text_processing::{fallback_name, limit_length, split_name_and_context, strip_leading_noise};
use log::{debug, info, warn};
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Everything produced for one raw ingredient string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// The structured record
    pub ingredient: ParsedIngredient,
    /// Quantity/unit pairs mentioned besides the primary one
    pub alternatives: Vec<AlternativeUnit>,
    /// Name of the measurement rule that matched, `None` for the default record
    pub rule: Option<&'static str>,
}

/// Ingredient parser configured with a [`ProcessorConfig`]
#[derive(Debug, Clone, Default)]
pub struct IngredientParser {
    config: ProcessorConfig,
}

impl IngredientParser {
    /// Create a parser with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with a custom configuration
    pub fn with_config(config: ProcessorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Parse a single raw ingredient string
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ingredient_processor::ingredient_parser::IngredientParser;
    ///
    /// let parser = IngredientParser::new();
    /// let line = parser.parse_ingredient("1 cup flour (sifted)");
    ///
    /// assert_eq!(line.ingredient.ingredient, "flour");
    /// assert_eq!(line.ingredient.additional_context, "sifted");
    /// ```
    pub fn parse_ingredient(&self, raw: &str) -> ParsedLine {
        let cleaned = strip_leading_noise(raw);

        let (mut ingredient, rule) = match match_measurement(&cleaned) {
            Some(found) => {
                let split = split_name_and_context(&found.remainder);
                let context = match (split.context.is_empty(), found.size) {
                    (true, Some(size)) => size,
                    _ => split.context,
                };
                let name = limit_length(&split.name, self.config.max_ingredient_length);

                let record = ParsedIngredient::new(&name, &found.quantity, &found.unit)
                    .with_context(&context);
                (record, Some(found.rule))
            }
            None => {
                debug!("No measurement rule matched '{}', using default record", raw);
                let name = limit_length(&fallback_name(&cleaned), self.config.max_ingredient_length);
                (ParsedIngredient::fallback(&name), None)
            }
        };

        if self.config.enable_categorization {
            ingredient.category = categorize(&ingredient.ingredient);
        }

        let alternatives = if self.config.detect_alternatives {
            detect_alternative_units(raw)
                .into_iter()
                .filter(|alt| !alt.matches_primary(&ingredient))
                .collect()
        } else {
            Vec::new()
        };

        ParsedLine {
            ingredient,
            alternatives,
            rule,
        }
    }

    /// Parse an ordered list of raw ingredient strings
    ///
    /// The result has one record per input in input order. A panic while
    /// parsing one string is caught and that string gets the default record.
    pub fn parse_ingredients<S: AsRef<str>>(&self, raws: &[S]) -> ParsedIngredientList {
        parse_contained(raws, |raw| self.parse_ingredient(raw))
    }

    /// Parse a block of text with one ingredient per line, skipping blank lines
    pub fn parse_ingredient_text(&self, text: &str) -> ParsedIngredientList {
        let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        self.parse_ingredients(&lines)
    }
}

/// Run `parse` over every string, replacing a panicking one with the default record
fn parse_contained<S, F>(raws: &[S], parse: F) -> ParsedIngredientList
where
    S: AsRef<str>,
    F: Fn(&str) -> ParsedLine,
{
    let mut list = ParsedIngredientList::new();

    for (index, raw) in raws.iter().enumerate() {
        let raw = raw.as_ref();
        match catch_unwind(AssertUnwindSafe(|| parse(raw))) {
            Ok(line) => list.push(line.ingredient, line.alternatives),
            Err(_) => {
                warn!(
                    "Parsing ingredient {} ('{}') panicked, using default record",
                    index, raw
                );
                list.push(ParsedIngredient::fallback(&fallback_name(raw)), Vec::new());
            }
        }
    }

    info!(
        "Parsed {} ingredient(s): {} without a unit, {} with alternatives",
        list.len(),
        list.count_unit_total(),
        list.alternatives.len()
    );

    list
}

/// Parse a single ingredient string with the default configuration
pub fn parse_ingredient(raw: &str) -> ParsedIngredient {
    IngredientParser::new().parse_ingredient(raw).ingredient
}

/// Parse an ordered list of ingredient strings with the default configuration
pub fn parse_ingredients<S: AsRef<str>>(raws: &[S]) -> ParsedIngredientList {
    IngredientParser::new().parse_ingredients(raws)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_ingredient() {
        let parsed = parse_ingredient("2 cups flour");
        assert_eq!(parsed.quantity, "2");
        assert_eq!(parsed.unit, "cup");
        assert_eq!(parsed.ingredient, "flour");
        assert_eq!(parsed.category, "Pantry & Dry Goods");
    }

    #[test]
    fn test_can_size_becomes_context() {
        let parsed = parse_ingredient("2 (15-ounce) cans diced tomatoes");
        assert_eq!(parsed.quantity, "2");
        assert_eq!(parsed.unit, "can");
        assert_eq!(parsed.ingredient, "diced tomatoes");
        assert_eq!(parsed.additional_context, "15-ounce");
        assert_eq!(parsed.category, "Produce");
    }

    #[test]
    fn test_own_parenthetical_wins_over_can_size() {
        let parsed = parse_ingredient("1 (14 oz) can coconut milk (full fat)");
        assert_eq!(parsed.unit, "can");
        assert_eq!(parsed.ingredient, "coconut milk");
        assert_eq!(parsed.additional_context, "full fat");
    }

    #[test]
    fn test_leading_noise_is_stripped() {
        let parsed = parse_ingredient("▢ 1 tbsp olive oil");
        assert_eq!(parsed.quantity, "1");
        assert_eq!(parsed.unit, "tablespoon");
        assert_eq!(parsed.ingredient, "olive oil");
    }

    #[test]
    fn test_rule_is_reported() {
        let parser = IngredientParser::new();
        assert_eq!(parser.parse_ingredient("salt to taste").rule, Some("descriptive"));
        assert_eq!(parser.parse_ingredient("").rule, None);
    }

    #[test]
    fn test_alternatives_exclude_primary() {
        let line = IngredientParser::new().parse_ingredient("400g/14oz canned corn");
        assert_eq!(line.ingredient.quantity, "400");
        assert_eq!(line.ingredient.unit, "gram");
        assert_eq!(line.alternatives, vec![AlternativeUnit::new("14", "ounce")]);
    }

    #[test]
    fn test_config_switches() {
        let parser = IngredientParser::with_config(ProcessorConfig {
            detect_alternatives: false,
            enable_categorization: false,
            ..ProcessorConfig::default()
        });
        let line = parser.parse_ingredient("400g/14oz canned corn");
        assert!(line.alternatives.is_empty());
        assert!(line.ingredient.category.is_empty());
    }

    #[test]
    fn test_name_length_limit() {
        let parser = IngredientParser::with_config(ProcessorConfig {
            max_ingredient_length: 12,
            ..ProcessorConfig::default()
        });
        let line = parser.parse_ingredient("1 cup finely chopped fresh parsley");
        assert_eq!(line.ingredient.ingredient, "finely");
    }

    #[test]
    fn test_parse_ingredient_text_skips_blank_lines() {
        let parser = IngredientParser::new();
        let list = parser.parse_ingredient_text("2 cups flour\n\n   \n1 tsp salt\n");
        assert_eq!(list.len(), 2);
        assert_eq!(list.ingredients[1].unit, "teaspoon");
    }

    #[test]
    fn test_panicking_ingredient_gets_default_record() {
        let parser = IngredientParser::new();
        let raws = ["1 cup flour", "2 tbsp butter (softened)", "1 tsp salt"];

        let list = parse_contained(&raws, |raw| {
            if raw.contains("butter") {
                panic!("cannot parse '{}'", raw);
            }
            parser.parse_ingredient(raw)
        });

        assert_eq!(list.len(), 3);
        assert_eq!(list.ingredients[0].ingredient, "flour");
        assert_eq!(list.ingredients[0].unit, "cup");

        let failed = &list.ingredients[1];
        assert_eq!(failed.quantity, "1");
        assert_eq!(failed.unit, "count");
        assert_eq!(failed.ingredient, fallback_name("2 tbsp butter (softened)"));
        assert!(!list.alternatives.contains_key(&1));

        assert_eq!(list.ingredients[2].ingredient, "salt");
        assert_eq!(list.ingredients[2].unit, "teaspoon");
    }

    #[test]
    fn test_tilde_without_unit_keeps_quantity() {
        let parser = IngredientParser::new();

        let line = parser.parse_ingredient("~2 eggs");
        assert_eq!(line.rule, Some("tilde_count"));
        assert_eq!(line.ingredient.quantity, "2");
        assert_eq!(line.ingredient.unit, "count");
        assert_eq!(line.ingredient.ingredient, "eggs");

        let line = parser.parse_ingredient("~ salt");
        assert_eq!(line.ingredient.quantity, "1");
        assert_eq!(line.ingredient.ingredient, "salt");
        assert_eq!(line.ingredient.category, "Spices & Seasonings");
    }

    #[test]
    fn test_empty_and_garbage_inputs() {
        let parsed = parse_ingredient("");
        assert_eq!(parsed.quantity, "1");
        assert_eq!(parsed.unit, "count");
        assert_eq!(parsed.ingredient, "");

        let parsed = parse_ingredient("garbage input !!!");
        assert_eq!(parsed.quantity, "1");
        assert_eq!(parsed.unit, "count");
        assert_eq!(parsed.ingredient, "garbage input !!!");
    }
}
