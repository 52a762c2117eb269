//! # Text Processing Module
//!
//! Text clean-up around the pattern matcher: stripping leading bullet and
//! checkbox noise from raw ingredient lines, and splitting the descriptive
//! remainder into an ingredient name and its parenthetical context.
//!
//! ## Features
//!
//! - Leading symbol removal that keeps quantities such as ".25" or "½" intact
//! - First-parenthetical extraction ("flour (sifted)" -> "flour" + "sifted")
//! - Word-boundary truncation of overly long ingredient names

use lazy_static::lazy_static;
use log::{trace, warn};
use regex::Regex;

lazy_static! {
    /// Leading symbols that cannot start a quantity or a word, with the spaces between them.
    /// "(" and "~" are kept since can sizes and approximations start with them.
    static ref LEADING_NOISE: Regex = Regex::new(r"^(?:[^\w\s¼⅓½⅔¾/.,\-(~]+\s*)+")
        .expect("Leading noise pattern should be valid");
    /// The first parenthetical group and the spaces around it
    static ref PARENTHETICAL: Regex = Regex::new(r"\s*\(([^)]+)\)\s*")
        .expect("Parenthetical pattern should be valid");
    /// Any parenthetical group, including empty ones
    static ref ANY_PARENTHETICAL: Regex =
        Regex::new(r"\([^)]*\)").expect("Parenthetical pattern should be valid");
}

/// Name and context split out of a matcher remainder
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NameAndContext {
    /// Cleaned ingredient name
    pub name: String,
    /// Contents of the first parenthetical group, empty if there was none
    pub context: String,
}

/// Remove bullets, checkboxes and similar symbols from the start of a line
///
/// # Examples
///
/// ```rust
/// use ingredient_processor::text_processing::strip_leading_noise;
///
/// assert_eq!(strip_leading_noise("▢ 2 cups flour"), "2 cups flour");
/// assert_eq!(strip_leading_noise("• .25 oz yeast"), ".25 oz yeast");
/// ```
pub fn strip_leading_noise(raw: &str) -> String {
    let cleaned = LEADING_NOISE.replace(raw.trim(), "");
    cleaned.trim().to_string()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<&str>>().join(" ")
}

/// Split the matcher remainder into ingredient name and parenthetical context
///
/// Only the first parenthetical group is moved into the context. Later groups
/// stay in the name.
///
/// # Examples
///
/// ```rust
/// use ingredient_processor::text_processing::split_name_and_context;
///
/// let split = split_name_and_context("flour (sifted)");
/// assert_eq!(split.name, "flour");
/// assert_eq!(split.context, "sifted");
/// ```
pub fn split_name_and_context(remainder: &str) -> NameAndContext {
    let text = remainder.trim();

    let Some(caps) = PARENTHETICAL.captures(text) else {
        return NameAndContext {
            name: clean_name(text),
            context: String::new(),
        };
    };

    let context = caps[1].trim().to_string();
    let without_context = PARENTHETICAL.replace(text, " ");
    let name = clean_name(&without_context);

    trace!(
        "Split '{}' into name '{}' and context '{}'",
        remainder,
        name,
        context
    );

    NameAndContext { name, context }
}

/// Collapse whitespace and drop dangling separators left by context removal
fn clean_name(text: &str) -> String {
    let collapsed = collapse_whitespace(text);
    collapsed
        .trim_matches(|c: char| c == ',' || c == ';' || c == ':' || c.is_whitespace())
        .to_string()
}

/// Ingredient name for the default record: every parenthetical removed
pub fn fallback_name(raw: &str) -> String {
    let stripped = ANY_PARENTHETICAL.replace_all(raw, "");
    collapse_whitespace(&stripped)
}

/// Limit an ingredient name to `max_length` bytes, cutting at a word boundary
pub fn limit_length(name: &str, max_length: usize) -> String {
    if name.len() <= max_length {
        return name.to_string();
    }

    let mut cut = max_length;
    while !name.is_char_boundary(cut) {
        cut -= 1;
    }

    let truncated = &name[..cut];
    let limited = match truncated.rfind(' ') {
        Some(last_space) if last_space > 0 => &truncated[..last_space],
        _ => truncated,
    };
    let limited = limited.trim_end().to_string();

    warn!(
        "Ingredient name truncated due to length limit ({} > {}): '{}' -> '{}'",
        name.len(),
        max_length,
        name,
        limited
    );

    limited
}
