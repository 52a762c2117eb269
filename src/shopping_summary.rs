//! # Shopping Summary
//!
//! Groups parsed ingredients by grocery category for a shopping-list view.
//! Groups follow the category table order; uncategorized items go last under
//! "Other".

use crate::categorizer::categories;
use crate::ingredient_model::ParsedIngredient;
use crate::recipe_batch::ProcessedRecipe;
use std::fmt;

/// Group label for ingredients without a category
pub const OTHER_CATEGORY: &str = "Other";

/// One aisle of the shopping list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: String,
    pub items: Vec<ParsedIngredient>,
}

/// Parsed ingredients grouped by category, non-empty groups only
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingSummary {
    pub groups: Vec<CategoryGroup>,
}

impl ShoppingSummary {
    /// Group ingredients by category, keeping input order within each group
    pub fn from_ingredients<'a, I>(ingredients: I) -> Self
    where
        I: IntoIterator<Item = &'a ParsedIngredient>,
    {
        let mut groups: Vec<CategoryGroup> = categories()
            .into_iter()
            .chain(std::iter::once(OTHER_CATEGORY))
            .map(|category| CategoryGroup {
                category: category.to_string(),
                items: Vec::new(),
            })
            .collect();

        for ingredient in ingredients {
            let label = if ingredient.category.is_empty() {
                OTHER_CATEGORY
            } else {
                ingredient.category.as_str()
            };

            match groups.iter_mut().find(|g| g.category == label) {
                Some(group) => group.items.push(ingredient.clone()),
                // Category outside the table: keep it, just before "Other"
                None => {
                    let other = groups.len() - 1;
                    groups.insert(
                        other,
                        CategoryGroup {
                            category: label.to_string(),
                            items: vec![ingredient.clone()],
                        },
                    );
                }
            }
        }

        groups.retain(|g| !g.items.is_empty());
        Self { groups }
    }

    /// Summary over every ingredient of several processed recipes
    pub fn from_recipes(recipes: &[ProcessedRecipe]) -> Self {
        Self::from_ingredients(recipes.iter().flat_map(|r| r.ingredients.iter()))
    }

    /// Total number of items across all groups
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    /// Items listed under `category`
    pub fn items_in(&self, category: &str) -> &[ParsedIngredient] {
        self.groups
            .iter()
            .find(|g| g.category == category)
            .map(|g| g.items.as_slice())
            .unwrap_or(&[])
    }
}

impl fmt::Display for ShoppingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🛒 Shopping List ({} items)", self.item_count())?;

        for group in &self.groups {
            writeln!(f)?;
            writeln!(f, "{} ({})", group.category, group.items.len())?;
            for item in &group.items {
                writeln!(f, "  • {}", item)?;
            }
        }

        Ok(())
    }
}
