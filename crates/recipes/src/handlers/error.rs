use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use recipes_core::filter::FilterError;
use recipes_core::patch::PatchError;
use recipes_core::recipe::RecipeError;
use recipes_core::storage::{repository_error_to_status_code, RepositoryError};

/// Errors raised while reading the request itself, before any domain logic.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let code = repository_error_to_status_code(repo_error);
            return StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        }
        if self.0.is::<RecipeError>() || self.0.is::<FilterError>() {
            return StatusCode::BAD_REQUEST;
        }
        if let Some(patch_error) = self.0.downcast_ref::<PatchError>() {
            return match patch_error {
                PatchError::Malformed(_) => StatusCode::BAD_REQUEST,
                PatchError::Apply(_) | PatchError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
            };
        }
        if let Some(request_error) = self.0.downcast_ref::<RequestError>() {
            return match request_error {
                RequestError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
                RequestError::InvalidBody(_) | RequestError::InvalidPath(_) => {
                    StatusCode::BAD_REQUEST
                }
            };
        }
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let message = self.0.to_string();

        if status_code.is_server_error() {
            tracing::error!(status = %status_code, error = %message, "Request failed");
        } else {
            tracing::warn!(status = %status_code, message = %message, "API error");
        }

        (status_code, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
