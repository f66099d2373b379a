//! MongoDB repository implementation.
//!
//! Implements `RecipeRepository` from `recipes_core::storage` on top of a
//! single collection.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection, Database};

use recipes_core::filter::RecipeFilter;
use recipes_core::recipe::Recipe;
use recipes_core::storage::{RecipeRepository, RepositoryError, Result};

use super::conversions::{document_to_recipe, filter_to_query, recipe_to_document, RecipeDocument};
use super::error::{map_connection_error, map_insert_error, map_query_error};

/// MongoDB-based repository implementation.
pub struct MongoRepository {
    database: Database,
    collection: Collection<RecipeDocument>,
}

impl MongoRepository {
    /// Creates a repository over an existing database handle.
    pub fn new(database: Database, collection_name: &str) -> Self {
        let collection = database.collection::<RecipeDocument>(collection_name);
        Self {
            database,
            collection,
        }
    }

    /// Connects to `uri` and verifies the server is reachable.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(map_connection_error)?;
        let repo = Self::new(client.database(database), collection);

        repo.health_check().await?;
        tracing::debug!(database, collection, "Connected to MongoDB");

        Ok(repo)
    }

    async fn find_sorted(&self, query: Document) -> Result<Vec<Recipe>> {
        let documents: Vec<RecipeDocument> = self
            .collection
            .find(query)
            .sort(doc! { "_id": 1 })
            .await
            .map_err(map_query_error)?
            .try_collect()
            .await
            .map_err(map_query_error)?;

        documents.into_iter().map(document_to_recipe).collect()
    }
}

#[async_trait]
impl RecipeRepository for MongoRepository {
    async fn get_recipe(&self, id: &str) -> Result<Option<Recipe>> {
        let document = self
            .collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(map_query_error)?;

        document.map(document_to_recipe).transpose()
    }

    async fn list_recipes(&self) -> Result<Vec<Recipe>> {
        self.find_sorted(Document::new()).await
    }

    async fn find_recipes(&self, filter: &RecipeFilter) -> Result<Vec<Recipe>> {
        self.find_sorted(filter_to_query(filter)).await
    }

    async fn create_recipe(&self, recipe: &Recipe) -> Result<()> {
        self.collection
            .insert_one(recipe_to_document(recipe))
            .await
            .map_err(|e| map_insert_error(e, &recipe.id))?;
        Ok(())
    }

    async fn update_recipe(&self, recipe: &Recipe) -> Result<()> {
        let result = self
            .collection
            .replace_one(doc! { "_id": recipe.id.as_str() }, recipe_to_document(recipe))
            .await
            .map_err(map_query_error)?;

        if result.matched_count == 0 {
            return Err(RepositoryError::recipe_not_found(&recipe.id));
        }
        Ok(())
    }

    async fn delete_recipe(&self, id: &str) -> Result<bool> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(map_query_error)?;

        Ok(result.deleted_count > 0)
    }

    async fn delete_all_recipes(&self) -> Result<u64> {
        let result = self
            .collection
            .delete_many(Document::new())
            .await
            .map_err(map_query_error)?;

        Ok(result.deleted_count)
    }

    async fn health_check(&self) -> Result<()> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(map_connection_error)?;
        Ok(())
    }
}
