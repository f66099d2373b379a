mod demo;
mod error;
mod operations;
mod requests;
mod types;

pub use demo::demo_recipes;
pub use error::RecipeError;
pub use operations::validate_recipe;
pub use requests::RecipeInput;
pub use types::{Category, Recipe};
