//! # Quantity Normalizer
//!
//! Turns the quantity text captured by a pattern rule into its canonical form:
//!
//! - Unicode vulgar fractions become `N/D` ("½" -> "1/2", "1½" -> "1 1/2")
//! - A leading period gets a zero (".25" -> "0.25")
//! - Ranges are joined with a hyphen ("3 – 4", "1 to 2", "2 or 3" -> "a-b")
//! - Hyphenated mixed numbers become spaced ("1-1/2" -> "1 1/2")
//! - Approximation prefixes ("about", "~") and an at-least "+" are dropped
//!
//! Compound "and" forms ("1 and 1/3") are kept verbatim.

use lazy_static::lazy_static;
use regex::Regex;

/// Unicode fraction glyphs recognized in ingredient text
pub const UNICODE_FRACTIONS: &str = "¼⅓½⅔¾";

lazy_static! {
    static ref APPROXIMATION_PREFIX: Regex =
        Regex::new(r"(?i)^(?:(?:about|roughly|around|approximately)\s+|~\s*)")
            .expect("Approximation prefix pattern should be valid");
    static ref WORD_RANGE: Regex = Regex::new(r"(?i)(\d)\s+(?:to|or)\s+(\d|\.)")
        .expect("Word range pattern should be valid");
    static ref DASH_RANGE: Regex =
        Regex::new(r"\s*[-–—]\s*").expect("Dash range pattern should be valid");
    static ref HYPHEN_MIXED_NUMBER: Regex =
        Regex::new(r"^(\d+)-(\d+/\d+)$").expect("Hyphen mixed number pattern should be valid");
    static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("Whitespace pattern should be valid");
}

/// Text form of a unicode fraction glyph
pub fn unicode_fraction_text(glyph: char) -> Option<&'static str> {
    match glyph {
        '¼' => Some("1/4"),
        '⅓' => Some("1/3"),
        '½' => Some("1/2"),
        '⅔' => Some("2/3"),
        '¾' => Some("3/4"),
        _ => None,
    }
}

/// Replace every fraction glyph with its text form, separating it from a preceding digit
fn expand_unicode_fractions(text: &str) -> String {
    let mut expanded = String::with_capacity(text.len() + 4);
    for c in text.chars() {
        match unicode_fraction_text(c) {
            Some(fraction) => {
                if expanded.ends_with(|p: char| p.is_ascii_digit()) {
                    expanded.push(' ');
                }
                expanded.push_str(fraction);
            }
            None => expanded.push(c),
        }
    }
    expanded
}

fn add_leading_zero(part: &str) -> String {
    if part.starts_with('.') {
        format!("0{}", part)
    } else {
        part.to_string()
    }
}

/// Canonical textual quantity for a raw quantity capture
///
/// # Examples
///
/// ```rust
/// use ingredient_processor::quantity_normalizer::normalize_quantity;
///
/// assert_eq!(normalize_quantity("½"), "1/2");
/// assert_eq!(normalize_quantity("1-¼"), "1 1/4");
/// assert_eq!(normalize_quantity(".25"), "0.25");
/// assert_eq!(normalize_quantity("3 – 4"), "3-4");
/// assert_eq!(normalize_quantity("1 and 1/3"), "1 and 1/3");
/// ```
pub fn normalize_quantity(raw: &str) -> String {
    let text = APPROXIMATION_PREFIX.replace(raw.trim(), "");
    let text = text.trim().trim_end_matches('+').trim_end();
    let text = expand_unicode_fractions(text);
    let text = WHITESPACE.replace_all(&text, " ");
    let text = WORD_RANGE.replace_all(&text, "${1}-${2}");
    let text = DASH_RANGE.replace_all(&text, "-").into_owned();

    let text = match HYPHEN_MIXED_NUMBER.captures(&text) {
        Some(caps) => format!("{} {}", &caps[1], &caps[2]),
        None => text,
    };

    text.split('-')
        .map(add_leading_zero)
        .collect::<Vec<_>>()
        .join("-")
}

/// Join two range endpoints into the canonical "start-end" form
pub fn join_range(start: &str, end: &str) -> String {
    format!("{}-{}", normalize_quantity(start), normalize_quantity(end))
}
