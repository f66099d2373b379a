use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::RecipeError;

/// Dietary category of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Vegetarian,
    NonVegetarian,
}

impl Category {
    /// Returns the wire spelling of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Vegetarian => "VEGETARIAN",
            Category::NonVegetarian => "NON_VEGETARIAN",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VEGETARIAN" => Ok(Category::Vegetarian),
            "NON_VEGETARIAN" => Ok(Category::NonVegetarian),
            other => Err(RecipeError::UnknownCategory(other.to_string())),
        }
    }
}

/// A stored recipe.
///
/// `ingredients` is a set: duplicates collapse and the serialised order is
/// always sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub servings: u32,
    #[serde(default)]
    pub ingredients: BTreeSet<String>,
    #[serde(default)]
    pub instructions: String,
    pub category: Category,
}

impl Recipe {
    /// Creates a new recipe with a generated id and no ingredients.
    pub fn new(title: impl Into<String>, servings: u32, category: Category) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            servings,
            ingredients: BTreeSet::new(),
            instructions: String::new(),
            category,
        }
    }

    /// Sets a specific ID for this recipe.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Replaces the ingredient set.
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the preparation instructions.
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// Returns true if the ingredient set contains `ingredient` exactly.
    pub fn has_ingredient(&self, ingredient: &str) -> bool {
        self.ingredients.contains(ingredient)
    }

    /// Returns the JSON view of this recipe, as seen by patch documents.
    pub fn to_document(&self) -> Result<serde_json::Value, RecipeError> {
        serde_json::to_value(self).map_err(|e| RecipeError::Malformed(e.to_string()))
    }

    /// Rebuilds a recipe from its JSON view.
    pub fn from_document(document: serde_json::Value) -> Result<Self, RecipeError> {
        serde_json::from_value(document).map_err(|e| RecipeError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_wire_format() {
        assert_eq!(
            serde_json::to_value(Category::NonVegetarian).unwrap(),
            json!("NON_VEGETARIAN")
        );
        let parsed: Category = serde_json::from_value(json!("VEGETARIAN")).unwrap();
        assert_eq!(parsed, Category::Vegetarian);
    }

    #[test]
    fn test_category_from_str_rejects_unknown() {
        assert_eq!("VEGETARIAN".parse::<Category>(), Ok(Category::Vegetarian));
        assert_eq!(
            "vegan".parse::<Category>(),
            Err(RecipeError::UnknownCategory("vegan".to_string()))
        );
        // Parsing is case-sensitive, like the wire format.
        assert!("vegetarian".parse::<Category>().is_err());
    }

    #[test]
    fn test_recipe_ignores_unknown_fields_and_defaults_optional_ones() {
        let recipe: Recipe = serde_json::from_value(json!({
            "id": "7",
            "title": "Toast",
            "servings": 1,
            "category": "VEGETARIAN",
            "rating": 5
        }))
        .unwrap();

        assert_eq!(recipe.id, "7");
        assert!(recipe.ingredients.is_empty());
        assert_eq!(recipe.instructions, "");
    }

    #[test]
    fn test_ingredients_deduplicate_and_sort() {
        let recipe: Recipe = serde_json::from_value(json!({
            "id": "1",
            "title": "Salad",
            "servings": 2,
            "ingredients": ["tomato", "lettuce", "tomato"],
            "category": "VEGETARIAN"
        }))
        .unwrap();

        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(
            recipe.to_document().unwrap()["ingredients"],
            json!(["lettuce", "tomato"])
        );
    }

    #[test]
    fn test_from_document_rejects_wrong_types() {
        let result = Recipe::from_document(json!({
            "id": "1",
            "title": "Salad",
            "servings": "two",
            "category": "VEGETARIAN"
        }));
        assert!(matches!(result, Err(RecipeError::Malformed(_))));
    }

    #[test]
    fn test_builder_helpers() {
        let recipe = Recipe::new("Omelette", 1, Category::Vegetarian)
            .with_id("42")
            .with_ingredients(["egg", "butter"])
            .with_instructions("Whisk and fry.");

        assert_eq!(recipe.id, "42");
        assert!(recipe.has_ingredient("egg"));
        assert!(!recipe.has_ingredient("Egg"));
        assert_eq!(recipe.instructions, "Whisk and fry.");
    }
}
