//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Storage is a repository trait object; the concrete
//! backend is selected via feature flags.

use std::{sync::Arc, time::Duration};

use recipes_core::recipe::demo_recipes;
use recipes_core::storage::{RecipeRepository, RepositoryError};

use crate::config::Config;

// ============================================================================
// Compile-time feature validation
// ============================================================================

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "inmemory", feature = "mongodb"))]
compile_error!("Cannot enable both 'inmemory' and 'mongodb' storage features");

#[cfg(not(any(feature = "inmemory", feature = "mongodb")))]
compile_error!("Must enable exactly one storage feature: 'inmemory' or 'mongodb'");

/// Shared application state.
///
/// Cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// Recipe repository.
    pub recipe_repo: Arc<dyn RecipeRepository>,
    /// Per-request timeout applied by the router.
    pub request_timeout: Duration,
}

impl AppState {
    /// Creates an AppState around an existing repository.
    pub fn with_repository(recipe_repo: Arc<dyn RecipeRepository>, config: &Config) -> Self {
        Self {
            recipe_repo,
            request_timeout: config.request_timeout(),
        }
    }

    /// Stores the demo recipes, skipping ids that already exist.
    ///
    /// Returns how many recipes were inserted.
    pub async fn seed_demo_data(&self) -> Result<usize, RepositoryError> {
        let mut inserted = 0;

        for recipe in demo_recipes() {
            match self.recipe_repo.create_recipe(&recipe).await {
                Ok(()) => inserted += 1,
                Err(RepositoryError::AlreadyExists { id, .. }) => {
                    tracing::debug!(recipe_id = %id, "Demo recipe already present, skipping");
                }
                Err(err) => return Err(err),
            }
        }

        Ok(inserted)
    }
}

// ============================================================================
// Factory functions for each storage backend
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Data is lost when the process exits.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            tracing::info!("Using in-memory recipe storage");
            Ok(Self::with_repository(
                Arc::new(InMemoryRepository::new()),
                config,
            ))
        }
    }
}

#[cfg(feature = "mongodb")]
mod mongodb {
    use super::*;
    use crate::storage::MongoRepository;

    impl AppState {
        /// Creates AppState with MongoDB storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = MongoRepository::connect(
                &config.mongodb_uri,
                &config.mongodb_database,
                &config.mongodb_collection,
            )
            .await?;

            tracing::info!(
                database = %config.mongodb_database,
                collection = %config.mongodb_collection,
                "Using MongoDB recipe storage"
            );

            Ok(Self::with_repository(Arc::new(repo), config))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================
