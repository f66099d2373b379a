use super::error::RecipeError;
use super::types::Recipe;

const MAX_TITLE_LENGTH: usize = 200;

/// Validates a recipe before creation, replacement or after patching.
pub fn validate_recipe(recipe: &Recipe) -> Result<(), RecipeError> {
    if recipe.id.trim().is_empty() {
        return Err(RecipeError::EmptyId);
    }
    if recipe.title.trim().is_empty() {
        return Err(RecipeError::EmptyTitle);
    }
    if recipe.title.chars().count() > MAX_TITLE_LENGTH {
        return Err(RecipeError::TitleTooLong);
    }
    if recipe.servings == 0 {
        return Err(RecipeError::InvalidServings);
    }
    if recipe.ingredients.iter().any(|i| i.trim().is_empty()) {
        return Err(RecipeError::EmptyIngredient);
    }
    Ok(())
}
