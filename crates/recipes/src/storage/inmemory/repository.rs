//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use recipes_core::filter::RecipeFilter;
use recipes_core::recipe::Recipe;
use recipes_core::storage::{RecipeRepository, RepositoryError, Result};

/// In-memory storage backend.
///
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    recipes: Arc<RwLock<HashMap<String, Recipe>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

fn sorted_by_id(mut recipes: Vec<Recipe>) -> Vec<Recipe> {
    recipes.sort_by(|a, b| a.id.cmp(&b.id));
    recipes
}

#[async_trait]
impl RecipeRepository for InMemoryRepository {
    async fn get_recipe(&self, id: &str) -> Result<Option<Recipe>> {
        let recipes = self.recipes.read().await;
        Ok(recipes.get(id).cloned())
    }

    async fn list_recipes(&self) -> Result<Vec<Recipe>> {
        let recipes = self.recipes.read().await;
        Ok(sorted_by_id(recipes.values().cloned().collect()))
    }

    async fn find_recipes(&self, filter: &RecipeFilter) -> Result<Vec<Recipe>> {
        let recipes = self.recipes.read().await;
        Ok(sorted_by_id(
            recipes
                .values()
                .filter(|recipe| filter.matches(recipe))
                .cloned()
                .collect(),
        ))
    }

    async fn create_recipe(&self, recipe: &Recipe) -> Result<()> {
        let mut recipes = self.recipes.write().await;
        if recipes.contains_key(&recipe.id) {
            return Err(RepositoryError::recipe_already_exists(&recipe.id));
        }
        recipes.insert(recipe.id.clone(), recipe.clone());
        Ok(())
    }

    async fn update_recipe(&self, recipe: &Recipe) -> Result<()> {
        let mut recipes = self.recipes.write().await;
        match recipes.get_mut(&recipe.id) {
            Some(stored) => {
                *stored = recipe.clone();
                Ok(())
            }
            None => Err(RepositoryError::recipe_not_found(&recipe.id)),
        }
    }

    async fn delete_recipe(&self, id: &str) -> Result<bool> {
        let mut recipes = self.recipes.write().await;
        Ok(recipes.remove(id).is_some())
    }

    async fn delete_all_recipes(&self) -> Result<u64> {
        let mut recipes = self.recipes.write().await;
        let count = recipes.len() as u64;
        recipes.clear();
        Ok(count)
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
