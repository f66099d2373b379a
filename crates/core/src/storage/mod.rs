//! Storage abstraction for recipes.
//!
//! The [`RecipeRepository`] trait is implemented by each backend in the
//! `recipes` binary. Errors are backend-agnostic [`RepositoryError`]s that
//! handlers map to HTTP status codes with [`repository_error_to_status_code`].

mod error;
mod http_mapping;
mod traits;

pub use error::{RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use traits::RecipeRepository;
