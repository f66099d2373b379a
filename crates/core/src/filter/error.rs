use thiserror::Error;

/// Errors that can occur when building a filter from query parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Invalid servings filter: {0:?} is not a non-negative integer")]
    InvalidServings(String),
    #[error("Invalid category filter: {0:?}")]
    InvalidCategory(String),
}
