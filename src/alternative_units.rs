//! # Alternative Unit Detection
//!
//! Rescans the raw ingredient string for every quantity/unit pair it mentions,
//! independently of the pattern matcher. Recipes often give a measurement two
//! ways ("400g/14oz", "1 cup (240 ml)"); the matcher commits to one of them and
//! this module preserves the rest as metadata.
//!
//! The detector never feeds back into the primary record.

use crate::ingredient_model::AlternativeUnit;
use crate::quantity_normalizer::{normalize_quantity, UNICODE_FRACTIONS};
use crate::unit_normalizer::normalize_unit;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use std::cmp::Reverse;
use std::collections::HashSet;
use std::ops::Range;

/// A single number: integer, decimal, leading-period decimal, fraction or mixed number
const NUMBER: &str = r"(?:\d+(?:\.\d+)?|\.\d+)(?:(?:\s+and\s+|\s+|-)\d+/\d+|/\d+)?";

/// Unit families scanned for, each as bare spellings (a trailing period is left outside)
const UNIT_FAMILIES: &[(&str, &str)] = &[
    ("cup", r"cups|cup|c"),
    ("tablespoon", r"tablespoons|tablespoon|tbsp|tbs|tb"),
    ("teaspoon", r"teaspoons|teaspoon|tspn|tsp|ts"),
    ("pound", r"pounds|pound|lbs|lb"),
    ("ounce", r"ounces|ounce|oz"),
    ("gram", r"grams|gram|gs|g"),
    ("kilogram", r"kilograms|kilogram|kgs|kg"),
    ("milliliter", r"milliliters|milliliter|millilitres|millilitre|mls|ml"),
    ("liter", r"liters|liter|litres|litre|l"),
];

/// Units that may follow a unicode fraction glyph
const UNICODE_FRACTION_UNITS: &str =
    r"cups|cup|tablespoons|tablespoon|tbsp|teaspoons|teaspoon|tsp|ounces|ounce|oz|pounds|pound|lbs|lb";

/// Units allowed on either side of a compact slash pair
const SLASH_UNITS: &str = r"kilograms|kilogram|grams|gram|ounces|ounce|pounds|pound|kg|g|oz|lbs|lb|ml|l|cups|cup";

lazy_static! {
    /// One scanner per unit family: "<quantity or range> <unit>", also "15-ounce"
    static ref FAMILY_PATTERNS: Vec<(&'static str, Regex)> = UNIT_FAMILIES
        .iter()
        .map(|(family, units)| {
            let quantity = format!(r"{n}(?:\s*(?:[-–]|\bto\b|\bor\b)\s*{n})?", n = NUMBER);
            let pattern = format!(r"(?i)(?P<qty>{})(?:\s*-)?\s*(?P<unit>{})\b", quantity, units);
            let regex = Regex::new(&pattern)
                .unwrap_or_else(|e| panic!("Alternative unit pattern for '{}' should be valid: {}", family, e));
            (*family, regex)
        })
        .collect();

    /// Unicode fraction, optionally with a whole number or a range end:
    /// "½ cup", "1 ¼ cups", "2-½ oz", "1 and ½ cups", "1½ - 2 tbsp"
    static ref UNICODE_FRACTION_PATTERN: Regex = Regex::new(&format!(
        r"(?i)(?P<qty>(?:\d+\s*(?:[-–]|\band\b)?\s*)?[{f}](?:\s*(?:[-–]|\bto\b|\bor\b)\s*{n})?)\s*(?P<unit>{u})\b",
        f = UNICODE_FRACTIONS,
        n = NUMBER,
        u = UNICODE_FRACTION_UNITS
    ))
    .expect("Unicode fraction alternative pattern should be valid");

    /// Two compact measurements separated by a slash: "400g/14oz"
    static ref SLASH_PATTERN: Regex = Regex::new(&format!(
        r"(?i)(?P<q1>\d+(?:\.\d+)?)\s*(?P<u1>{u})\s*/\s*(?P<q2>\d+(?:\.\d+)?)\s*(?P<u2>{u})\b",
        u = SLASH_UNITS
    ))
    .expect("Slash alternative pattern should be valid");
}

fn alternative(quantity: &str, unit: &str) -> AlternativeUnit {
    AlternativeUnit::new(&normalize_quantity(quantity), &normalize_unit(unit))
}

/// Detect every quantity/unit pair in the raw text, deduplicated, in order of appearance
///
/// A mention that lies inside a longer one ("2 tbsp" within "1½ - 2 tbsp")
/// is dropped.
///
/// # Examples
///
/// ```rust
/// use ingredient_processor::alternative_units::detect_alternative_units;
/// use ingredient_processor::ingredient_model::AlternativeUnit;
///
/// let found = detect_alternative_units("400g/14oz canned corn");
/// assert_eq!(
///     found,
///     vec![AlternativeUnit::new("400", "gram"), AlternativeUnit::new("14", "ounce")]
/// );
/// ```
pub fn detect_alternative_units(raw: &str) -> Vec<AlternativeUnit> {
    let mut found: Vec<(Range<usize>, AlternativeUnit)> = Vec::new();

    for (_, regex) in FAMILY_PATTERNS.iter() {
        for caps in regex.captures_iter(raw) {
            if let Some(whole) = caps.get(0) {
                found.push((whole.range(), alternative(&caps["qty"], &caps["unit"])));
            }
        }
    }

    for caps in UNICODE_FRACTION_PATTERN.captures_iter(raw) {
        if let Some(whole) = caps.get(0) {
            found.push((whole.range(), alternative(&caps["qty"], &caps["unit"])));
        }
    }

    for caps in SLASH_PATTERN.captures_iter(raw) {
        if let (Some(q1), Some(u1), Some(q2), Some(u2)) =
            (caps.name("q1"), caps.name("u1"), caps.name("q2"), caps.name("u2"))
        {
            found.push((q1.start()..u1.end(), alternative(q1.as_str(), u1.as_str())));
            found.push((q2.start()..u2.end(), alternative(q2.as_str(), u2.as_str())));
        }
    }

    // Earliest first; at the same start the longest mention wins
    found.sort_by_key(|(span, _)| (span.start, Reverse(span.end)));

    let mut covered_to = 0;
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for (span, alt) in found {
        if span.start < covered_to {
            continue;
        }
        covered_to = span.end;
        if seen.insert(alt.clone()) {
            unique.push(alt);
        }
    }

    if !unique.is_empty() {
        debug!("Detected {} unit mention(s) in '{}'", unique.len(), raw);
    }

    unique
}
