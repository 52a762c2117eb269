//! # Recipe Batch Processing
//!
//! Loads recipes from disk and parses many of them concurrently. Each recipe's
//! full ingredient list is one unit of work on the blocking thread pool; a
//! semaphore bounds how many run at once. Results come back in input order.

use crate::ingredient_model::{AlternativeUnit, ParsedIngredient};
use crate::ingredient_parser::IngredientParser;
use crate::processing_errors::ProcessingError;
use crate::processor_config::ProcessorConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

/// A recipe as read from input: an id, an optional title and raw ingredient strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeInput {
    #[serde(default, alias = "id")]
    pub recipe_id: String,
    #[serde(default, alias = "name")]
    pub title: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// Parsed form of one recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedRecipe {
    pub recipe_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// One record per raw ingredient, in recipe order
    pub ingredients: Vec<ParsedIngredient>,
    /// Alternative units keyed by ingredient index
    pub alternatives: BTreeMap<usize, Vec<AlternativeUnit>>,
    pub processed_at: DateTime<Utc>,
}

impl RecipeInput {
    pub fn new(recipe_id: &str, ingredients: Vec<String>) -> Self {
        Self {
            recipe_id: recipe_id.to_string(),
            title: None,
            ingredients,
        }
    }
}

/// Parse every ingredient of one recipe
pub fn process_recipe(recipe: RecipeInput, parser: &IngredientParser) -> ProcessedRecipe {
    debug!(
        recipe_id = %recipe.recipe_id,
        ingredients = recipe.ingredients.len(),
        "Processing recipe"
    );

    let parsed = parser.parse_ingredients(&recipe.ingredients);

    ProcessedRecipe {
        recipe_id: recipe.recipe_id,
        title: recipe.title,
        ingredients: parsed.ingredients,
        alternatives: parsed.alternatives,
        processed_at: Utc::now(),
    }
}

/// Parse a batch of recipes concurrently, at most `max_concurrent_recipes` at a time
///
/// The output has one entry per input recipe, in input order.
pub async fn process_recipes(
    recipes: Vec<RecipeInput>,
    config: &ProcessorConfig,
) -> Result<Vec<ProcessedRecipe>, ProcessingError> {
    if config.max_concurrent_recipes == 0 {
        return Err(ProcessingError::Config(
            "max_concurrent_recipes must be at least 1".to_string(),
        ));
    }

    info!(
        recipes = recipes.len(),
        concurrency = config.max_concurrent_recipes,
        "Processing recipe batch"
    );

    let semaphore = Arc::new(Semaphore::new(config.max_concurrent_recipes));
    let parser = Arc::new(IngredientParser::with_config(config.clone()));
    let mut handles = Vec::with_capacity(recipes.len());

    for recipe in recipes {
        let permit = Arc::clone(&semaphore).acquire_owned().await?;
        let parser = Arc::clone(&parser);
        handles.push(tokio::task::spawn_blocking(move || {
            let _permit = permit;
            process_recipe(recipe, &parser)
        }));
    }

    let mut processed = Vec::with_capacity(handles.len());
    for handle in handles {
        processed.push(handle.await?);
    }

    info!(recipes = processed.len(), "Recipe batch complete");
    Ok(processed)
}

/// Load recipes from a file
///
/// A `.json` file holds a single recipe object, an array of recipe objects, or
/// an object mapping recipe ids to recipes (or to bare ingredient arrays). Any
/// other file is read as plain text with one ingredient per line.
pub async fn load_recipes(path: &Path) -> Result<Vec<RecipeInput>, ProcessingError> {
    let content = tokio::fs::read_to_string(path).await?;
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "recipe".to_string());

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let recipes = if is_json {
        recipes_from_json(&content, &stem)?
    } else {
        vec![recipe_from_text(&content, &stem)]
    };

    info!(path = %path.display(), recipes = recipes.len(), "Loaded recipes");
    Ok(recipes)
}

/// Plain text recipe: one ingredient per line, blank lines skipped
pub fn recipe_from_text(content: &str, recipe_id: &str) -> RecipeInput {
    let ingredients = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();
    RecipeInput::new(recipe_id, ingredients)
}

/// Decode recipes from JSON, filling missing ids from `default_id`
pub fn recipes_from_json(content: &str, default_id: &str) -> Result<Vec<RecipeInput>, ProcessingError> {
    let value: Value = serde_json::from_str(content)?;

    match value {
        Value::Array(items) => {
            let total = items.len();
            items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    let fallback_id = if total == 1 {
                        default_id.to_string()
                    } else {
                        format!("{}-{}", default_id, index + 1)
                    };
                    recipe_from_value(item, &fallback_id)
                })
                .collect()
        }
        Value::Object(ref map) if map.get("ingredients").map_or(false, is_ingredient_list) => {
            Ok(vec![recipe_from_value(value, default_id)?])
        }
        Value::Object(map) => {
            // serde_json keeps object keys sorted, so ids come out in sorted order
            map.into_iter()
                .map(|(id, item)| recipe_from_value(item, &id))
                .collect()
        }
        other => Err(ProcessingError::InvalidRecipe(format!(
            "expected a recipe object, array or id map, found {}",
            json_kind(&other)
        ))),
    }
}

fn recipe_from_value(value: Value, fallback_id: &str) -> Result<RecipeInput, ProcessingError> {
    let mut recipe = match value {
        Value::Array(_) => RecipeInput {
            ingredients: serde_json::from_value(value)?,
            ..RecipeInput::default()
        },
        Value::Object(_) => serde_json::from_value(value)?,
        other => {
            return Err(ProcessingError::InvalidRecipe(format!(
                "recipe '{}' must be an object or an ingredient array, found {}",
                fallback_id,
                json_kind(&other)
            )))
        }
    };

    if recipe.recipe_id.trim().is_empty() {
        recipe.recipe_id = fallback_id.to_string();
    }
    if recipe.ingredients.is_empty() {
        warn!(recipe_id = %recipe.recipe_id, "Recipe has no ingredients");
    }

    Ok(recipe)
}

/// An array of ingredient strings, as opposed to a recipe keyed "ingredients" in an id map
fn is_ingredient_list(value: &Value) -> bool {
    value
        .as_array()
        .map_or(false, |items| items.iter().all(Value::is_string))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_from_text() {
        let recipe = recipe_from_text("2 cups flour\n\n  1 tsp salt  \n", "bread");
        assert_eq!(recipe.recipe_id, "bread");
        assert_eq!(recipe.ingredients, vec!["2 cups flour", "1 tsp salt"]);
    }

    #[test]
    fn test_single_object() {
        let recipes = recipes_from_json(
            r#"{"id": "chili", "title": "Chili", "ingredients": ["1 lb beef"]}"#,
            "file",
        )
        .unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].recipe_id, "chili");
        assert_eq!(recipes[0].title.as_deref(), Some("Chili"));
    }

    #[test]
    fn test_array_fills_missing_ids() {
        let recipes = recipes_from_json(
            r#"[{"ingredients": ["1 egg"]}, {"recipe_id": "b", "ingredients": []}]"#,
            "batch",
        )
        .unwrap();
        assert_eq!(recipes[0].recipe_id, "batch-1");
        assert_eq!(recipes[1].recipe_id, "b");
    }

    #[test]
    fn test_id_map() {
        let recipes = recipes_from_json(
            r#"{"tacos": ["1 lb ground beef"], "salad": {"title": "Salad", "ingredients": ["1 head lettuce"]}}"#,
            "file",
        )
        .unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].recipe_id, "salad");
        assert_eq!(recipes[1].recipe_id, "tacos");
        assert_eq!(recipes[1].ingredients, vec!["1 lb ground beef"]);
    }

    #[test]
    fn test_id_map_with_ingredients_key() {
        let recipes = recipes_from_json(
            r#"{"ingredients": {"ingredients": ["1 cup sugar"]}, "cookies": ["2 eggs"]}"#,
            "file",
        )
        .unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].recipe_id, "cookies");
        assert_eq!(recipes[1].recipe_id, "ingredients");
        assert_eq!(recipes[1].ingredients, vec!["1 cup sugar"]);
    }

    #[test]
    fn test_invalid_shapes() {
        let err = recipes_from_json("42", "file").unwrap_err();
        assert!(matches!(err, ProcessingError::InvalidRecipe(_)));

        let err = recipes_from_json(r#"{"a": "not a recipe"}"#, "file").unwrap_err();
        assert!(matches!(err, ProcessingError::InvalidRecipe(_)));

        let err = recipes_from_json("{broken", "file").unwrap_err();
        assert!(matches!(err, ProcessingError::Json(_)));
    }

    #[test]
    fn test_process_recipe_keeps_order() {
        let parser = IngredientParser::new();
        let recipe = RecipeInput::new(
            "corn",
            vec!["400g/14oz canned corn".to_string(), "salt to taste".to_string()],
        );
        let processed = process_recipe(recipe, &parser);
        assert_eq!(processed.ingredients.len(), 2);
        assert_eq!(processed.ingredients[1].ingredient, "salt to taste");
        assert_eq!(processed.alternatives[&0], vec![AlternativeUnit::new("14", "ounce")]);
    }

    #[tokio::test]
    async fn test_zero_concurrency_is_rejected() {
        let config = ProcessorConfig {
            max_concurrent_recipes: 0,
            ..ProcessorConfig::default()
        };
        let err = process_recipes(vec![], &config).await.unwrap_err();
        assert!(matches!(err, ProcessingError::Config(_)));
    }
}
