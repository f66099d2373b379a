//! API request types for recipe operations.
//!
//! Pure data types with no I/O, shared by handlers and tests.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::types::{Category, Recipe};

/// Request payload for creating or replacing a recipe.
///
/// `id` is honoured on create so clients can choose their own identifiers,
/// and ignored on replace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub servings: u32,
    #[serde(default)]
    pub ingredients: BTreeSet<String>,
    #[serde(default)]
    pub instructions: String,
    pub category: Category,
}

impl RecipeInput {
    /// Create a new request with the required fields.
    pub fn new(title: impl Into<String>, servings: u32, category: Category) -> Self {
        Self {
            id: None,
            title: title.into(),
            servings,
            ingredients: BTreeSet::new(),
            instructions: String::new(),
            category,
        }
    }

    /// Set a client-chosen id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the ingredient set.
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    /// Set the instructions.
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// Convert into a Recipe, generating an id when none (or a blank one) was given.
    pub fn into_recipe(self) -> Recipe {
        let id = self
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        Recipe {
            id,
            title: self.title,
            servings: self.servings,
            ingredients: self.ingredients,
            instructions: self.instructions,
            category: self.category,
        }
    }

    /// Replace every field of `recipe` except its id.
    pub fn apply_to(self, recipe: &mut Recipe) {
        recipe.title = self.title;
        recipe.servings = self.servings;
        recipe.ingredients = self.ingredients;
        recipe.instructions = self.instructions;
        recipe.category = self.category;
    }
}
