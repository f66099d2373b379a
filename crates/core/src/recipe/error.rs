use thiserror::Error;

/// Errors that can occur when validating or converting recipes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecipeError {
    #[error("Recipe id cannot be empty")]
    EmptyId,
    #[error("Recipe title cannot be empty")]
    EmptyTitle,
    #[error("Recipe title too long (max 200 characters)")]
    TitleTooLong,
    #[error("Recipe must serve at least one person")]
    InvalidServings,
    #[error("Ingredient names cannot be empty")]
    EmptyIngredient,
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Malformed recipe document: {0}")]
    Malformed(String),
}
