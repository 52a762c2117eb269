//! # Ingredient Processor
//!
//! Parses free-form recipe ingredient strings ("2 (15-ounce) cans diced
//! tomatoes") into structured quantity/unit/ingredient/category records, with
//! unit normalization, alternative-unit capture and keyword-based grocery
//! categorization. Includes a bounded concurrent batch layer for whole recipes.

pub mod alternative_units;
pub mod categorizer;
pub mod category_keywords;
pub mod cli;
pub mod ingredient_model;
pub mod ingredient_parser;
pub mod measurement_patterns;
pub mod processing_errors;
pub mod processor_config;
pub mod quantity_normalizer;
pub mod recipe_batch;
pub mod shopping_summary;
pub mod text_processing;
pub mod unit_normalizer;
