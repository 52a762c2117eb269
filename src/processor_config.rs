//! # Processor Configuration Module
//!
//! Configuration for ingredient parsing and recipe batch processing, with
//! defaults and environment overrides.

use log::{debug, warn};
use std::env;
use std::str::FromStr;

// Constants for processor configuration
pub const DEFAULT_MAX_CONCURRENT_RECIPES: usize = 4;
pub const DEFAULT_MAX_INGREDIENT_LENGTH: usize = 100;

// Environment variable names
pub const ENV_MAX_CONCURRENCY: &str = "INGREDIENT_MAX_CONCURRENCY";
pub const ENV_MAX_NAME_LENGTH: &str = "INGREDIENT_MAX_NAME_LENGTH";
pub const ENV_DETECT_ALTERNATIVES: &str = "INGREDIENT_DETECT_ALTERNATIVES";
pub const ENV_CATEGORIZE: &str = "INGREDIENT_CATEGORIZE";

/// Configuration structure for ingredient processing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorConfig {
    /// Upper bound on recipes parsed at the same time
    pub max_concurrent_recipes: usize,
    /// Maximum length for ingredient names, longer names are cut at a word boundary
    pub max_ingredient_length: usize,
    /// Whether to rescan raw strings for alternative units
    pub detect_alternatives: bool,
    /// Whether to assign grocery categories
    pub enable_categorization: bool,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            max_concurrent_recipes: DEFAULT_MAX_CONCURRENT_RECIPES,
            max_ingredient_length: DEFAULT_MAX_INGREDIENT_LENGTH,
            detect_alternatives: true,
            enable_categorization: true,
        }
    }
}

impl ProcessorConfig {
    /// Build a configuration from the process environment (after loading `.env`)
    ///
    /// Unset variables keep their defaults; unparseable values log a warning and
    /// keep their defaults as well.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            max_concurrent_recipes: read_value(&lookup, ENV_MAX_CONCURRENCY, defaults.max_concurrent_recipes)
                .max(1),
            max_ingredient_length: read_value(&lookup, ENV_MAX_NAME_LENGTH, defaults.max_ingredient_length)
                .max(1),
            detect_alternatives: read_flag(&lookup, ENV_DETECT_ALTERNATIVES, defaults.detect_alternatives),
            enable_categorization: read_flag(&lookup, ENV_CATEGORIZE, defaults.enable_categorization),
        };

        debug!("Processor configuration: {:?}", config);
        config
    }

    /// Override the recipe concurrency, never below 1
    pub fn with_max_concurrent_recipes(mut self, max_concurrent_recipes: usize) -> Self {
        self.max_concurrent_recipes = max_concurrent_recipes.max(1);
        self
    }

    /// Override the ingredient name length limit, never below 1
    pub fn with_max_ingredient_length(mut self, max_ingredient_length: usize) -> Self {
        self.max_ingredient_length = max_ingredient_length.max(1);
        self
    }
}

fn read_value<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!("Invalid value '{}' for {}, using default {}", raw, key, default);
                default
            }
        },
        None => default,
    }
}

fn read_flag<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => match parse_flag(&raw) {
            Some(value) => value,
            None => {
                warn!("Invalid flag '{}' for {}, using default {}", raw, key, default);
                default
            }
        },
        None => default,
    }
}

/// Parse a boolean environment flag ("1", "true", "yes", "on" and their negatives)
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
