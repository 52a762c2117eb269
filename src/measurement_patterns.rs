//! # Measurement Patterns Module
//!
//! The ordered rule table that pulls a quantity, a unit and the remaining
//! descriptive text off the front of an ingredient string.
//!
//! Rules are tried strictly in table order and the first one that matches wins;
//! there is no scoring between rules. The table runs from the most
//! syntactically specific shapes (can sizes, approximations, ranges) down to
//! the generic ones (plain integer + unit, number without unit, bare text).
//!
//! Every rule that captures a unit requires whitespace after it, so an
//! abbreviation such as "g" or "c" never swallows the start of a word.

use crate::quantity_normalizer::{join_range, normalize_quantity, UNICODE_FRACTIONS};
use crate::unit_normalizer::{accepted_units, normalize_unit};
use crate::ingredient_model::{COUNT_UNIT, DEFAULT_QUANTITY};
use lazy_static::lazy_static;
use log::trace;
use regex::{Captures, Regex};

/// How a rule turns its captures into the canonical quantity string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityForm {
    /// Normalize the `qty` capture
    Captured,
    /// Join the `start` and `end` captures into "start-end"
    Range,
    /// No quantity in the text; use "1"
    Implicit,
}

/// One entry of the ordered rule table
pub struct PatternRule {
    /// Stable rule name, useful in logs and tests
    pub name: &'static str,
    regex: Regex,
    quantity: QuantityForm,
}

/// The extraction produced by the first matching rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    /// Name of the rule that matched
    pub rule: &'static str,
    /// Canonical quantity text
    pub quantity: String,
    /// Canonical unit, or "count" when the rule captures no unit
    pub unit: String,
    /// Descriptive text left after the quantity and unit
    pub remainder: String,
    /// Package size from a can-size parenthetical, e.g. "15-ounce"
    pub size: Option<String>,
}

/// Approximation words accepted before a quantity
const APPROXIMATION: &str = "(?:about|roughly|around|approximately)";

/// Unit alternation with regex-escaped spellings, longest first
fn unit_alternation() -> String {
    let mut units: Vec<&str> = accepted_units().to_vec();
    units.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    units
        .iter()
        .map(|unit| regex::escape(unit))
        .collect::<Vec<_>>()
        .join("|")
}

lazy_static! {
    static ref UNIT_ALTERNATION: String = unit_alternation();

    /// The ordered rule table
    static ref PATTERN_RULES: Vec<PatternRule> = build_rules();
}

/// Expand placeholders and compile one rule.
///
/// `{U}` is the captured unit, `{UNITS}` a non-capturing unit alternation,
/// `{F}` the unicode fraction class, `{APPROX}` the approximation words and
/// `{REST}` the trailing descriptive text.
fn rule(name: &'static str, template: &str, quantity: QuantityForm) -> PatternRule {
    let units: &str = &UNIT_ALTERNATION;
    let pattern = template
        .replace("{U}", &format!("(?P<unit>{})", units))
        .replace("{UNITS}", &format!("(?:{})", units))
        .replace("{F}", &format!("[{}]", UNICODE_FRACTIONS))
        .replace("{APPROX}", APPROXIMATION)
        .replace("{REST}", r"(?P<rest>.+)");

    let regex = Regex::new(&format!("(?is){}", pattern))
        .unwrap_or_else(|e| panic!("Measurement pattern '{}' should be valid: {}", name, e));

    PatternRule {
        name,
        regex,
        quantity,
    }
}

fn build_rules() -> Vec<PatternRule> {
    use QuantityForm::{Captured, Implicit, Range};

    vec![
        // Package sizes: "2 (15-ounce) cans tomatoes", "(28 oz) can tomatoes"
        rule(
            "can_size_with_count",
            r"^(?P<qty>\d+)\s*\((?P<size>\d+(?:\.\d+)?\s*[-–]?\s*{UNITS})\)\s*{U}\s+{REST}$",
            Captured,
        ),
        rule(
            "can_size",
            r"^\((?P<size>\d+(?:\.\d+)?\s*[-–]?\s*{UNITS})\)\s*{U}\s+{REST}$",
            Implicit,
        ),
        // Approximations: "about 1 1/2 cups", "roughly 2.5 cups", "around 2 cups", "about ½ cup"
        rule(
            "approximate_text_fraction",
            r"^{APPROX}\s+(?P<qty>(?:\d+\s+)?\d+/\d+)\s+{U}\s+{REST}$",
            Captured,
        ),
        rule(
            "approximate_decimal",
            r"^{APPROX}\s+(?P<qty>\d+\.\d+)\s+{U}\s+{REST}$",
            Captured,
        ),
        rule(
            "approximate_integer",
            r"^{APPROX}\s+(?P<qty>\d+)\s+{U}\s+{REST}$",
            Captured,
        ),
        rule(
            "approximate_unicode_fraction",
            r"^{APPROX}\s+(?P<qty>(?:\d+\s*)?{F})\s+{U}\s+{REST}$",
            Captured,
        ),
        // Ranges: "1/2 to 3/4 cup", "1 to 1 1/2 cups", "2 or 3 cloves", "1-1/2 cup"
        rule(
            "fraction_to_range",
            r"^(?P<start>\d+/\d+)\s+to\s+(?P<end>\d+/\d+)\s+{U}\s+{REST}$",
            Range,
        ),
        rule(
            "to_range",
            r"^(?P<start>\d+(?:\.\d+)?)\s+to\s+(?P<end>\d+(?:\s+\d+/\d+|\.\d+)?)\s+{U}\s+{REST}$",
            Range,
        ),
        rule(
            "or_range",
            r"^(?P<start>\d+)\s+or\s+(?P<end>\d+)\s+{U}\s+{REST}$",
            Range,
        ),
        rule(
            "hyphenated_mixed_fraction",
            r"^(?P<qty>\d+-\d+/\d+)\s+{U}\s+{REST}$",
            Captured,
        ),
        // Mixed-number start: "1 1/2-2 cups", "1½ - 2 cups"
        rule(
            "mixed_number_range",
            r"^(?P<start>\d+\s+\d+/\d+|\d+\s*{F})\s*[-–]\s*(?P<end>\d+(?:\s+\d+/\d+|\.\d+)?)\s+{U}\s+{REST}$",
            Range,
        ),
        // No space between quantity and unit: "1/2cup", "½cup", "2.5tsp"
        rule(
            "compact_fraction",
            r"^(?P<qty>\d+/\d+){U}\s+{REST}$",
            Captured,
        ),
        rule(
            "compact_unicode_fraction",
            r"^(?P<qty>{F}){U}\s+{REST}$",
            Captured,
        ),
        rule(
            "compact_decimal",
            r"^(?P<qty>\d+\.\d+){U}\s+{REST}$",
            Captured,
        ),
        // Qualifiers: "2+ cups", "~2 cups", "~1/2 cup"
        rule(
            "at_least",
            r"^(?P<qty>\d+(?:\.\d+)?)\+\s*{U}\s+{REST}$",
            Captured,
        ),
        rule(
            "tilde_number",
            r"^~\s*(?P<qty>\d+(?:\.\d+)?)\s+{U}\s+{REST}$",
            Captured,
        ),
        rule(
            "tilde_fraction",
            r"^~\s*(?P<qty>(?:\d+\s+)?\d+/\d+)\s+{U}\s+{REST}$",
            Captured,
        ),
        // Compound mixed numbers: "1 and 1/3 cup", "1 and ½ cups", "1-¼ cups", ".25 oz"
        rule(
            "mixed_with_and",
            r"^(?P<qty>\d+\s+and\s+(?:\d+/\d+|{F}))\s+{U}\s+{REST}$",
            Captured,
        ),
        rule(
            "hyphenated_unicode_fraction",
            r"^(?P<qty>\d+[-–]{F})\s+{U}\s+{REST}$",
            Captured,
        ),
        rule(
            "leading_period_decimal",
            r"^(?P<qty>\.\d+)\s+{U}\s+{REST}$",
            Captured,
        ),
        // "400g/14oz": the first measurement is primary, the second is left to
        // the alternative-unit detector
        rule(
            "dual_measurement",
            r"^(?P<qty>\d+(?:\.\d+)?)\s*{U}\s*/\s*\d+(?:\.\d+)?\s*{UNITS}\s+{REST}$",
            Captured,
        ),
        rule(
            "compact_number",
            r"^(?P<qty>\d+(?:\.\d+)?){U}\s+{REST}$",
            Captured,
        ),
        // Unicode mixed numbers: "1 ½ teaspoons", "2½ounces"
        rule(
            "spaced_unicode_mixed",
            r"^(?P<qty>\d+\s+{F})\s*{U}\s+{REST}$",
            Captured,
        ),
        rule(
            "glued_unicode_mixed",
            r"^(?P<qty>\d+{F})\s*{U}\s+{REST}$",
            Captured,
        ),
        rule(
            "mixed_text_fraction",
            r"^(?P<qty>\d+\s+\d+/\d+)\s+{U}\s+{REST}$",
            Captured,
        ),
        // Pure fractions and numeric ranges: "¼ cup", "1/2 cup", "3-4 pounds"
        rule(
            "unicode_fraction",
            r"^(?P<qty>{F})\s*{U}\s+{REST}$",
            Captured,
        ),
        rule(
            "text_fraction",
            r"^(?P<qty>\d+/\d+)\s+{U}\s+{REST}$",
            Captured,
        ),
        rule(
            "numeric_range",
            r"^(?P<start>\d+(?:\.\d+)?)\s*[-–]\s*(?P<end>\d+(?:\.\d+)?)\s+{U}\s+{REST}$",
            Range,
        ),
        // Plain numbers: "2.5 teaspoon salt", "16 ounce pizza dough"
        rule(
            "decimal",
            r"^(?P<qty>\d+\.\d+)\s+{U}\s+{REST}$",
            Captured,
        ),
        rule(
            "integer",
            r"^(?P<qty>\d+)\s+{U}\s+{REST}$",
            Captured,
        ),
        // Quantity but no recognized unit: "15 graham crackers", "2-3 garlic cloves"
        rule(
            "count_range",
            r"^(?P<start>\d+(?:\.\d+)?)\s*[-–]\s*(?P<end>\d+(?:\.\d+)?)\s+{REST}$",
            Range,
        ),
        rule(
            "count_mixed_fraction",
            r"^(?P<qty>\d+\s+\d+/\d+)\s+{REST}$",
            Captured,
        ),
        rule(
            "count_unicode_fraction",
            r"^(?P<qty>(?:\d+\s*)?{F})\s+{REST}$",
            Captured,
        ),
        rule(
            "count_text_fraction",
            r"^(?P<qty>\d+/\d+)\s+{REST}$",
            Captured,
        ),
        // "~2 eggs", "~ 1/2 lemon"
        rule(
            "tilde_count",
            r"^~\s*(?P<qty>\d+\s+\d+/\d+|\d+/\d+|(?:\d+\s*)?{F}|\d+(?:\.\d+)?)\s+{REST}$",
            Captured,
        ),
        rule(
            "count_number",
            r"^(?P<qty>\d+(?:\.\d+)?)\s+{REST}$",
            Captured,
        ),
        // No leading quantity: "salt to taste", "~ salt"
        rule("tilde_descriptive", r"^~\s*{REST}$", Implicit),
        rule("descriptive", r"^{REST}$", Implicit),
    ]
}

impl PatternRule {
    /// Try this rule against a cleaned ingredient string
    pub fn apply(&self, text: &str) -> Option<RuleMatch> {
        let caps = self.regex.captures(text)?;
        let remainder = capture(&caps, "rest")?.trim().to_string();

        let quantity = match self.quantity {
            QuantityForm::Captured => normalize_quantity(capture(&caps, "qty")?),
            QuantityForm::Range => join_range(capture(&caps, "start")?, capture(&caps, "end")?),
            QuantityForm::Implicit => DEFAULT_QUANTITY.to_string(),
        };

        let unit = match capture(&caps, "unit") {
            Some(unit) => normalize_unit(unit),
            None => COUNT_UNIT.to_string(),
        };

        Some(RuleMatch {
            rule: self.name,
            quantity,
            unit,
            remainder,
            size: capture(&caps, "size").map(|s| s.trim().to_string()),
        })
    }
}

fn capture<'t>(caps: &Captures<'t>, name: &str) -> Option<&'t str> {
    caps.name(name).map(|m| m.as_str())
}

/// The rule table in evaluation order
pub fn pattern_rules() -> &'static [PatternRule] {
    &PATTERN_RULES
}

/// Run the rule table and return the first match
///
/// Returns `None` only when no rule matches at all, which happens for empty
/// input; the caller supplies the default record in that case.
///
/// # Examples
///
/// ```rust
/// use ingredient_processor::measurement_patterns::match_measurement;
///
/// let m = match_measurement("1 1/2 cups all-purpose flour").unwrap();
/// assert_eq!(m.quantity, "1 1/2");
/// assert_eq!(m.unit, "cup");
/// assert_eq!(m.remainder, "all-purpose flour");
/// ```
pub fn match_measurement(text: &str) -> Option<RuleMatch> {
    for rule in pattern_rules() {
        if let Some(found) = rule.apply(text) {
            trace!(
                "Rule '{}' matched '{}': quantity='{}', unit='{}'",
                found.rule,
                text,
                found.quantity,
                found.unit
            );
            return Some(found);
        }
    }
    None
}
