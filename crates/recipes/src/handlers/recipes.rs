//! Recipe CRUD handlers.
//!
//! These handlers use the repository trait object for database access.

use axum::{
    body::Bytes,
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use recipes_core::filter::RecipeFilter;
use recipes_core::patch::{PatchKind, RecipePatch};
use recipes_core::recipe::{validate_recipe, Recipe, RecipeInput};
use recipes_core::storage::RepositoryError;

use crate::{
    handlers::{error::RequestError, AppError},
    state::AppState,
};

/// Unwraps a JSON body, mapping extractor rejections to request errors.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(JsonRejection::MissingJsonContentType(rejection)) => {
            Err(RequestError::UnsupportedMediaType(rejection.body_text()).into())
        }
        Err(rejection) => Err(RequestError::InvalidBody(rejection.body_text()).into()),
    }
}

/// Unwraps the `{id}` path segment, mapping extractor rejections to request errors.
fn path_id(path: Result<Path<String>, PathRejection>) -> Result<String, AppError> {
    path.map(|Path(id)| id)
        .map_err(|rejection| RequestError::InvalidPath(rejection.body_text()).into())
}

async fn load_recipe(state: &AppState, id: &str) -> Result<Recipe, AppError> {
    state
        .recipe_repo
        .get_recipe(id)
        .await?
        .ok_or_else(|| RepositoryError::recipe_not_found(id).into())
}

// ============================================================================
// Read
// ============================================================================

/// List recipes (GET /recipes).
///
/// Without query parameters every recipe is returned. With parameters the
/// list is narrowed by a [`RecipeFilter`]. An empty result is a 204.
#[axum::debug_handler]
pub async fn list_recipes(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let recipes = if params.is_empty() {
        state.recipe_repo.list_recipes().await?
    } else {
        let filter = RecipeFilter::from_params(params)?;
        tracing::debug!(?filter, "Filtering recipes");
        state.recipe_repo.find_recipes(&filter).await?
    };

    if recipes.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    Ok(Json(recipes).into_response())
}

/// Get a single recipe (GET /recipes/{id}).
#[axum::debug_handler]
pub async fn get_recipe(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Recipe>, AppError> {
    let id = path_id(path)?;
    Ok(Json(load_recipe(&state, &id).await?))
}

// ============================================================================
// Write
// ============================================================================

/// Create a recipe (POST /recipes).
///
/// A client-supplied id is kept; otherwise one is generated.
#[axum::debug_handler]
pub async fn create_recipe(
    State(state): State<AppState>,
    payload: Result<Json<RecipeInput>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let input = json_body(payload)?;
    tracing::debug!(?input, "Creating recipe");

    let recipe = input.into_recipe();
    validate_recipe(&recipe)?;
    state.recipe_repo.create_recipe(&recipe).await?;

    tracing::info!(recipe_id = %recipe.id, title = %recipe.title, "Created recipe");
    Ok((StatusCode::CREATED, Json(recipe)))
}

/// Replace a recipe (PUT /recipes/{id}).
///
/// Every field except the id is overwritten.
#[axum::debug_handler]
pub async fn update_recipe(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<RecipeInput>, JsonRejection>,
) -> Result<Json<Recipe>, AppError> {
    let id = path_id(path)?;
    let input = json_body(payload)?;
    tracing::debug!(recipe_id = %id, ?input, "Replacing recipe");

    let mut recipe = load_recipe(&state, &id).await?;
    input.apply_to(&mut recipe);
    validate_recipe(&recipe)?;
    state.recipe_repo.update_recipe(&recipe).await?;

    tracing::info!(recipe_id = %recipe.id, "Updated recipe");
    Ok(Json(recipe))
}

/// Patch a recipe (PATCH /recipes/{id}).
///
/// The `Content-Type` selects JSON Patch or JSON Merge Patch; anything else
/// is rejected with 415 before the recipe is looked up.
#[axum::debug_handler]
pub async fn patch_recipe(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let id = path_id(path)?;
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let kind = PatchKind::from_content_type(content_type)
        .ok_or_else(|| RequestError::UnsupportedMediaType(content_type.to_string()))?;
    let patch = RecipePatch::parse(kind, &body)?;

    let recipe = load_recipe(&state, &id).await?;
    let patched = patch.apply(&recipe)?;
    state.recipe_repo.update_recipe(&patched).await?;

    tracing::info!(recipe_id = %id, media_type = kind.media_type(), "Patched recipe");
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Delete
// ============================================================================

/// Delete a recipe (DELETE /recipes/{id}).
///
/// Deleting a missing recipe is not an error.
#[axum::debug_handler]
pub async fn delete_recipe(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = path_id(path)?;
    let removed = state.recipe_repo.delete_recipe(&id).await?;
    tracing::info!(recipe_id = %id, removed, "Deleted recipe");
    Ok(StatusCode::NO_CONTENT)
}

/// Delete every recipe (DELETE /recipes).
#[axum::debug_handler]
pub async fn delete_all_recipes(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    let count = state.recipe_repo.delete_all_recipes().await?;
    tracing::info!(count, "Deleted all recipes");
    Ok(StatusCode::NO_CONTENT)
}
