use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found for this id :: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("{entity_type} already exists for this id :: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// Shorthand for a missing recipe.
    pub fn recipe_not_found(id: impl Into<String>) -> Self {
        RepositoryError::NotFound {
            entity_type: "Recipe",
            id: id.into(),
        }
    }

    /// Shorthand for a recipe id collision.
    pub fn recipe_already_exists(id: impl Into<String>) -> Self {
        RepositoryError::AlreadyExists {
            entity_type: "Recipe",
            id: id.into(),
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
