//! # Categorizer
//!
//! Assigns one grocery category to a cleaned ingredient name by walking the
//! static keyword table in order and returning the first category with a
//! whole-word keyword hit. There is no scoring: table order is the only
//! tie-break.

use crate::category_keywords::CATEGORY_KEYWORDS;
use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

/// A keyword and its compiled whole-word matcher
struct KeywordMatcher {
    keyword: &'static str,
    regex: Regex,
}

/// One category with its keywords in evaluation order
struct CategoryMatcher {
    name: &'static str,
    keywords: Vec<KeywordMatcher>,
}

/// Category chosen for an ingredient and the keyword that selected it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryMatch {
    pub category: &'static str,
    pub keyword: &'static str,
}

lazy_static! {
    static ref CATEGORY_MATCHERS: Vec<CategoryMatcher> = CATEGORY_KEYWORDS
        .iter()
        .map(|&(name, keywords)| CategoryMatcher {
            name,
            keywords: keywords
                .iter()
                .map(|&keyword| KeywordMatcher {
                    keyword,
                    regex: Regex::new(&format!(r"(?i)\b{}\b", regex::escape(keyword)))
                        .expect("Escaped keyword pattern should be valid"),
                })
                .collect(),
        })
        .collect();
}

/// Find the first category whose keyword appears as a whole word in `name`
pub fn match_category(name: &str) -> Option<CategoryMatch> {
    let lowered = name.to_lowercase();
    if lowered.trim().is_empty() {
        return None;
    }

    for category in CATEGORY_MATCHERS.iter() {
        if let Some(hit) = category.keywords.iter().find(|k| k.regex.is_match(&lowered)) {
            trace!(
                "Categorized '{}' as '{}' via keyword '{}'",
                name,
                category.name,
                hit.keyword
            );
            return Some(CategoryMatch {
                category: category.name,
                keyword: hit.keyword,
            });
        }
    }

    debug!("No category keyword matched '{}'", name);
    None
}

/// Category name for an ingredient, or an empty string when nothing matches
///
/// # Examples
///
/// ```rust
/// use ingredient_processor::categorizer::categorize;
///
/// assert_eq!(categorize("garlic powder"), "Spices & Seasonings");
/// assert_eq!(categorize("graham crackers"), "Pantry & Dry Goods");
/// assert_eq!(categorize("unobtainium"), "");
/// ```
pub fn categorize(name: &str) -> String {
    match_category(name)
        .map(|m| m.category.to_string())
        .unwrap_or_default()
}

/// Category names in evaluation order
pub fn categories() -> Vec<&'static str> {
    CATEGORY_KEYWORDS.iter().map(|(name, _)| *name).collect()
}

/// Check whether `name` is one of the table's categories
pub fn is_known_category(name: &str) -> bool {
    CATEGORY_KEYWORDS.iter().any(|(category, _)| *category == name)
}
