//! # Parsed Ingredient Data Model
//!
//! This module defines the records produced by the ingredient parser. Quantities
//! stay textual on purpose: ranges ("3-4"), mixed numbers ("2 3/4") and compound
//! forms ("1 and 1/3") must round-trip exactly as the recipe wrote them.
//!
//! ## Core Concepts
//!
//! - **ParsedIngredient**: the structured record for one raw ingredient string
//! - **AlternativeUnit**: a secondary quantity/unit pair mentioned inline
//! - **ParsedIngredientList**: the batch result, one record per input plus a
//!   sparse index of alternative units
//!
//! ## Usage
//!
//! ```rust
//! use ingredient_processor::ingredient_model::ParsedIngredient;
//!
//! let flour = ParsedIngredient::new("all-purpose flour", "1 1/2", "cup")
//!     .with_context("sifted")
//!     .with_category("Pantry & Dry Goods");
//!
//! assert_eq!(flour.to_string(), "1 1/2 cup all-purpose flour (sifted)");
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Unit assigned when no recognized unit follows the quantity
pub const COUNT_UNIT: &str = "count";

/// Quantity assigned when the string carries no leading quantity
pub const DEFAULT_QUANTITY: &str = "1";

/// Structured form of a single recipe ingredient line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    /// Cleaned ingredient name (e.g., "diced tomatoes", "all-purpose flour")
    pub ingredient: String,

    /// Canonical textual quantity ("1", "1/2", "2 3/4", "3-4", "0.25")
    pub quantity: String,

    /// Canonical unit name, or "count" when no unit was recognized
    pub unit: String,

    /// Text that was inside the first parenthetical group, empty if none
    pub additional_context: String,

    /// Grocery category name, empty if no keyword matched
    pub category: String,
}

/// A quantity/unit pair found in the raw text besides the primary one
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlternativeUnit {
    /// Canonical textual quantity
    pub quantity: String,
    /// Canonical unit name
    pub unit: String,
}

/// Result of parsing an ordered list of ingredient strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedIngredientList {
    /// One record per input string, in input order
    pub ingredients: Vec<ParsedIngredient>,

    /// Alternative units keyed by input index; only indices with at least one entry
    pub alternatives: BTreeMap<usize, Vec<AlternativeUnit>>,
}

impl ParsedIngredient {
    /// Create a record with a name, quantity and unit and no context or category
    pub fn new(ingredient: &str, quantity: &str, unit: &str) -> Self {
        Self {
            ingredient: ingredient.to_string(),
            quantity: quantity.to_string(),
            unit: unit.to_string(),
            additional_context: String::new(),
            category: String::new(),
        }
    }

    /// The record used whenever nothing better can be extracted: "1 count"
    pub fn fallback(ingredient: &str) -> Self {
        Self::new(ingredient, DEFAULT_QUANTITY, COUNT_UNIT)
    }

    /// Attach parenthetical context
    pub fn with_context(mut self, context: &str) -> Self {
        self.additional_context = context.to_string();
        self
    }

    /// Attach a grocery category
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    /// Check whether the unit fell back to "count"
    pub fn is_count(&self) -> bool {
        self.unit == COUNT_UNIT
    }

    /// Check whether a category was assigned
    pub fn is_categorized(&self) -> bool {
        !self.category.is_empty()
    }

    /// Check whether the quantity is a range such as "3-4"
    pub fn is_range(&self) -> bool {
        self.quantity.contains('-')
    }
}

impl AlternativeUnit {
    pub fn new(quantity: &str, unit: &str) -> Self {
        Self {
            quantity: quantity.to_string(),
            unit: unit.to_string(),
        }
    }

    /// Check whether this pair is the same measurement as a parsed record's primary one
    pub fn matches_primary(&self, parsed: &ParsedIngredient) -> bool {
        self.quantity == parsed.quantity && self.unit == parsed.unit
    }
}

impl ParsedIngredientList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and its alternatives; empty alternative lists are not indexed
    pub fn push(&mut self, ingredient: ParsedIngredient, alternatives: Vec<AlternativeUnit>) {
        let index = self.ingredients.len();
        self.ingredients.push(ingredient);
        if !alternatives.is_empty() {
            self.alternatives.insert(index, alternatives);
        }
    }

    /// Number of parsed records
    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Alternatives recorded for the ingredient at `index`, empty if none
    pub fn alternatives_for(&self, index: usize) -> &[AlternativeUnit] {
        self.alternatives
            .get(&index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of records that fell back to the "count" unit
    pub fn count_unit_total(&self) -> usize {
        self.ingredients.iter().filter(|i| i.is_count()).count()
    }

    /// Share of records that received a category (1.0 for an empty list)
    pub fn categorized_rate(&self) -> f32 {
        if self.ingredients.is_empty() {
            return 1.0;
        }
        let categorized = self.ingredients.iter().filter(|i| i.is_categorized()).count();
        categorized as f32 / self.ingredients.len() as f32
    }
}

impl fmt::Display for ParsedIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.quantity, self.unit, self.ingredient)?;

        if !self.additional_context.is_empty() {
            write!(f, " ({})", self.additional_context)?;
        }

        Ok(())
    }
}

impl fmt::Display for AlternativeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quantity, self.unit)
    }
}

impl fmt::Display for ParsedIngredientList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Ingredient List ({} parsed, {:.1}% categorized):",
            self.len(),
            self.categorized_rate() * 100.0
        )?;

        for (index, ingredient) in self.ingredients.iter().enumerate() {
            write!(f, "  • {}", ingredient)?;
            let alternatives = self.alternatives_for(index);
            if !alternatives.is_empty() {
                let rendered: Vec<String> = alternatives.iter().map(|a| a.to_string()).collect();
                write!(f, " [also: {}]", rendered.join(", "))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_creation() {
        let ingredient = ParsedIngredient::new("flour", "2", "cup")
            .with_context("packed")
            .with_category("Pantry & Dry Goods");

        assert_eq!(ingredient.ingredient, "flour");
        assert_eq!(ingredient.quantity, "2");
        assert_eq!(ingredient.unit, "cup");
        assert_eq!(ingredient.additional_context, "packed");
        assert!(ingredient.is_categorized());
        assert!(!ingredient.is_count());
    }

    #[test]
    fn test_fallback_record() {
        let ingredient = ParsedIngredient::fallback("salt to taste");
        assert_eq!(ingredient.quantity, "1");
        assert_eq!(ingredient.unit, "count");
        assert!(ingredient.additional_context.is_empty());
        assert!(ingredient.category.is_empty());
        assert!(ingredient.is_count());
    }

    #[test]
    fn test_range_detection() {
        assert!(ParsedIngredient::new("chicken thighs", "3-4", "pound").is_range());
        assert!(!ParsedIngredient::new("flour", "1 1/2", "cup").is_range());
    }

    #[test]
    fn test_list_only_indexes_non_empty_alternatives() {
        let mut list = ParsedIngredientList::new();
        list.push(ParsedIngredient::new("flour", "1", "cup"), vec![]);
        list.push(
            ParsedIngredient::new("canned corn", "400", "gram"),
            vec![AlternativeUnit::new("14", "ounce")],
        );

        assert_eq!(list.len(), 2);
        assert!(!list.alternatives.contains_key(&0));
        assert_eq!(list.alternatives_for(1), &[AlternativeUnit::new("14", "ounce")]);
        assert!(list.alternatives_for(7).is_empty());
    }

    #[test]
    fn test_matches_primary() {
        let parsed = ParsedIngredient::new("canned corn", "400", "gram");
        assert!(AlternativeUnit::new("400", "gram").matches_primary(&parsed));
        assert!(!AlternativeUnit::new("14", "ounce").matches_primary(&parsed));
    }

    #[test]
    fn test_categorized_rate() {
        let mut list = ParsedIngredientList::new();
        assert_eq!(list.categorized_rate(), 1.0);

        list.push(ParsedIngredient::fallback("salt").with_category("Spices & Seasonings"), vec![]);
        list.push(ParsedIngredient::fallback("mystery powder"), vec![]);
        assert_eq!(list.categorized_rate(), 0.5);
        assert_eq!(list.count_unit_total(), 2);
    }

    #[test]
    fn test_display_formatting() {
        let ingredient = ParsedIngredient::new("flour", "1", "cup").with_context("sifted");
        assert_eq!(ingredient.to_string(), "1 cup flour (sifted)");

        let mut list = ParsedIngredientList::new();
        list.push(
            ParsedIngredient::new("canned corn", "400", "gram"),
            vec![AlternativeUnit::new("14", "ounce")],
        );
        let display = list.to_string();
        assert!(display.contains("400 gram canned corn"));
        assert!(display.contains("[also: 14 ounce]"));
    }

    #[test]
    fn test_serde_field_names() {
        let ingredient = ParsedIngredient::new("flour", "1", "cup");
        let json = serde_json::to_value(&ingredient).unwrap();
        assert_eq!(json["ingredient"], "flour");
        assert_eq!(json["additional_context"], "");
        assert_eq!(json["category"], "");
    }
}
