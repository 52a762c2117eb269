//! # Unit Normalizer
//!
//! Maps unit spellings found in recipe text (plurals, abbreviations, period
//! variants) onto one canonical, singular, lowercase unit name per family.
//!
//! Lookup is case-insensitive. Unknown tokens pass through unchanged so the
//! function can be applied to anything, including already-canonical names.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Unit spellings accepted by the pattern matcher, grouped by family.
/// Canonical names are listed first within each family.
const ACCEPTED_UNITS: &[&str] = &[
    // Volume
    "cup", "cups", "c", "c.",
    "tablespoon", "tablespoons", "tbsp", "tbsp.", "tb", "tbs", "tbs.",
    "teaspoon", "teaspoons", "tsp", "tsp.", "ts", "tspn",
    "gallon", "gallons", "gal", "gal.", "gals",
    "pint", "pints", "pt", "pt.", "pts",
    "quart", "quarts", "qt", "qt.", "qts",
    "liter", "liters", "litre", "litres", "l",
    "milliliter", "milliliters", "millilitre", "millilitres", "ml", "ml.", "mls",
    // Weight
    "ounce", "ounces", "oz", "oz.",
    "pound", "pounds", "lbs", "lbs.", "lb", "lb.",
    "gram", "grams", "g", "g.", "gs",
    "kilogram", "kilograms", "kg", "kg.", "kgs",
    // Count
    "can", "cans", "bunch", "bunches", "head", "heads", "clove", "cloves",
    "slice", "slices", "piece", "pieces", "package", "packages", "pkg", "pkg.", "pkgs",
    "jar", "jars", "bottle", "bottles", "bag", "bags", "each",
    // Descriptive size
    "large", "medium", "small",
];

/// Canonical unit names; everything the normalizer can return for a known spelling
const CANONICAL_UNITS: &[&str] = &[
    "cup", "tablespoon", "teaspoon", "gallon", "pint", "quart", "liter", "milliliter",
    "ounce", "pound", "gram", "kilogram",
    "can", "bunch", "head", "clove", "slice", "piece", "package", "jar", "bottle", "bag", "each",
    "large", "medium", "small",
];

/// Synonym table: lowercase spelling -> canonical unit
static UNIT_SYNONYMS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Volume units
    for synonym in ["cups", "c", "c."] {
        map.insert(synonym, "cup");
    }
    for synonym in ["tablespoons", "tbsp", "tbsp.", "tb", "tbs", "tbs."] {
        map.insert(synonym, "tablespoon");
    }
    for synonym in ["teaspoons", "tsp", "tsp.", "ts", "tspn"] {
        map.insert(synonym, "teaspoon");
    }
    for synonym in ["gallons", "gal", "gal.", "gals"] {
        map.insert(synonym, "gallon");
    }
    for synonym in ["pints", "pt", "pt.", "pts"] {
        map.insert(synonym, "pint");
    }
    for synonym in ["quarts", "qt", "qt.", "qts"] {
        map.insert(synonym, "quart");
    }
    for synonym in ["liters", "litre", "litres", "l"] {
        map.insert(synonym, "liter");
    }
    for synonym in ["milliliters", "millilitre", "millilitres", "ml", "ml.", "mls"] {
        map.insert(synonym, "milliliter");
    }

    // Weight units
    for synonym in ["ounces", "oz", "oz."] {
        map.insert(synonym, "ounce");
    }
    for synonym in ["pounds", "lbs", "lbs.", "lb", "lb."] {
        map.insert(synonym, "pound");
    }
    for synonym in ["grams", "g", "g.", "gs"] {
        map.insert(synonym, "gram");
    }
    for synonym in ["kilograms", "kg", "kg.", "kgs"] {
        map.insert(synonym, "kilogram");
    }

    // Count units
    map.insert("cans", "can");
    map.insert("bunches", "bunch");
    map.insert("heads", "head");
    map.insert("cloves", "clove");
    map.insert("slices", "slice");
    map.insert("pieces", "piece");
    for synonym in ["packages", "pkg", "pkg.", "pkgs"] {
        map.insert(synonym, "package");
    }
    map.insert("jars", "jar");
    map.insert("bottles", "bottle");
    map.insert("bags", "bag");

    map
});

static CANONICAL_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| CANONICAL_UNITS.iter().copied().collect());

/// Normalize a unit spelling to its canonical name
///
/// # Examples
///
/// ```rust
/// use ingredient_processor::unit_normalizer::normalize_unit;
///
/// assert_eq!(normalize_unit("Tbsp."), "tablespoon");
/// assert_eq!(normalize_unit("cups"), "cup");
/// assert_eq!(normalize_unit("handful"), "handful");
/// ```
pub fn normalize_unit(unit: &str) -> String {
    let trimmed = unit.trim();
    let lower = trimmed.to_lowercase();

    if let Some(canonical) = UNIT_SYNONYMS.get(lower.as_str()) {
        return (*canonical).to_string();
    }

    if CANONICAL_SET.contains(lower.as_str()) {
        return lower;
    }

    trimmed.to_string()
}

/// Check whether a unit name is one of the canonical names
pub fn is_canonical_unit(unit: &str) -> bool {
    CANONICAL_SET.contains(unit)
}

/// Every spelling the pattern matcher recognizes as a unit
pub fn accepted_units() -> &'static [&'static str] {
    ACCEPTED_UNITS
}

/// The canonical unit names
pub fn canonical_units() -> &'static [&'static str] {
    CANONICAL_UNITS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_synonyms() {
        assert_eq!(normalize_unit("cups"), "cup");
        assert_eq!(normalize_unit("c."), "cup");
        assert_eq!(normalize_unit("tbsp"), "tablespoon");
        assert_eq!(normalize_unit("tbs"), "tablespoon");
        assert_eq!(normalize_unit("tb"), "tablespoon");
        assert_eq!(normalize_unit("tsp."), "teaspoon");
        assert_eq!(normalize_unit("mls"), "milliliter");
        assert_eq!(normalize_unit("litres"), "liter");
    }

    #[test]
    fn test_weight_synonyms() {
        assert_eq!(normalize_unit("oz"), "ounce");
        assert_eq!(normalize_unit("lbs."), "pound");
        assert_eq!(normalize_unit("g"), "gram");
        assert_eq!(normalize_unit("kgs"), "kilogram");
    }

    #[test]
    fn test_case_insensitive_lookup() {
        assert_eq!(normalize_unit("TBSP"), "tablespoon");
        assert_eq!(normalize_unit("Cup"), "cup");
        assert_eq!(normalize_unit("Large"), "large");
    }

    #[test]
    fn test_unknown_passes_through() {
        assert_eq!(normalize_unit("handful"), "handful");
        assert_eq!(normalize_unit("Sprig"), "Sprig");
        assert_eq!(normalize_unit("count"), "count");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        for unit in accepted_units() {
            let once = normalize_unit(unit);
            assert_eq!(normalize_unit(&once), once, "not idempotent for '{}'", unit);
        }
    }

    #[test]
    fn test_every_accepted_unit_maps_to_canonical() {
        for unit in accepted_units() {
            let canonical = normalize_unit(unit);
            assert!(
                is_canonical_unit(&canonical),
                "'{}' normalized to non-canonical '{}'",
                unit,
                canonical
            );
        }
    }
}
