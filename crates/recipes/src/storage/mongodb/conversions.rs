//! Conversions between recipes and their MongoDB representation.
//!
//! Pure functions with no database access.

use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};

use recipes_core::filter::RecipeFilter;
use recipes_core::recipe::{Category, Recipe};
use recipes_core::storage::{RepositoryError, Result};

/// A recipe as stored in the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub servings: i64,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: String,
    pub category: Category,
}

/// Convert a recipe into its stored document.
pub fn recipe_to_document(recipe: &Recipe) -> RecipeDocument {
    RecipeDocument {
        id: recipe.id.clone(),
        title: recipe.title.clone(),
        servings: i64::from(recipe.servings),
        ingredients: recipe.ingredients.iter().cloned().collect(),
        instructions: recipe.instructions.clone(),
        category: recipe.category,
    }
}

/// Convert a stored document back into a recipe.
pub fn document_to_recipe(document: RecipeDocument) -> Result<Recipe> {
    let servings = u32::try_from(document.servings).map_err(|_| {
        RepositoryError::InvalidData(format!(
            "recipe {} has out of range servings: {}",
            document.id, document.servings
        ))
    })?;

    Ok(Recipe {
        id: document.id,
        title: document.title,
        servings,
        ingredients: document.ingredients.into_iter().collect(),
        instructions: document.instructions,
        category: document.category,
    })
}

/// Build the query selecting the recipes that match `filter`.
///
/// An empty filter yields an empty query, which matches every document.
pub fn filter_to_query(filter: &RecipeFilter) -> Document {
    let mut conditions: Vec<Document> = Vec::new();

    if let Some(servings) = filter.servings {
        conditions.push(doc! { "servings": i64::from(servings) });
    }
    if let Some(category) = filter.category {
        conditions.push(doc! { "category": category.as_str() });
    }
    for value in &filter.title_contains {
        conditions.push(contains_ignore_case("title", value));
    }
    for value in &filter.instructions_contains {
        conditions.push(contains_ignore_case("instructions", value));
    }
    for value in &filter.includes {
        conditions.push(doc! { "ingredients": value.as_str() });
    }
    for value in &filter.excludes {
        conditions.push(doc! { "ingredients": { "$ne": value.as_str() } });
    }

    if conditions.is_empty() {
        Document::new()
    } else {
        doc! { "$and": conditions }
    }
}

fn contains_ignore_case(field: &str, value: &str) -> Document {
    doc! { field: { "$regex": escape_regex(value), "$options": "i" } }
}

/// Escape regex metacharacters so the value is matched literally.
fn escape_regex(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(
            c,
            '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
