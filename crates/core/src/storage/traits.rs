use async_trait::async_trait;

use crate::filter::RecipeFilter;
use crate::recipe::Recipe;

use super::Result;

/// Repository for recipe operations.
///
/// Listing methods return recipes ordered by id.
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Gets a recipe by its ID.
    async fn get_recipe(&self, id: &str) -> Result<Option<Recipe>>;

    /// Gets every stored recipe.
    async fn list_recipes(&self) -> Result<Vec<Recipe>>;

    /// Gets the recipes matching a filter.
    async fn find_recipes(&self, filter: &RecipeFilter) -> Result<Vec<Recipe>>;

    /// Creates a new recipe. Fails with `AlreadyExists` if the id is taken.
    async fn create_recipe(&self, recipe: &Recipe) -> Result<()>;

    /// Replaces an existing recipe. Fails with `NotFound` if it is absent.
    async fn update_recipe(&self, recipe: &Recipe) -> Result<()>;

    /// Deletes a recipe by its ID. Returns whether anything was removed.
    async fn delete_recipe(&self, id: &str) -> Result<bool>;

    /// Deletes every recipe. Returns how many were removed.
    async fn delete_all_recipes(&self) -> Result<u64>;

    /// Checks that the backend is reachable.
    async fn health_check(&self) -> Result<()>;
}
