use thiserror::Error;

use crate::recipe::RecipeError;

/// Errors that can occur while parsing or applying a patch document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// The request body is not a valid patch document.
    #[error("Malformed patch document: {0}")]
    Malformed(String),
    /// The patch library rejected an operation.
    #[error("Patch could not be applied: {0}")]
    Apply(String),
    /// The patched document is not a valid recipe.
    #[error("Patched recipe is invalid: {0}")]
    Invalid(String),
}

impl From<RecipeError> for PatchError {
    fn from(err: RecipeError) -> Self {
        PatchError::Invalid(err.to_string())
    }
}
