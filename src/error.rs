use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::docs::lint::LintReport;
use crate::models::ErrorResponse;

/// Failures while building or rendering the OpenAPI document.
#[derive(Error, Debug)]
pub enum DocError {
    #[error("Failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to render document: {0}")]
    Render(String),

    #[error(transparent)]
    Lint(#[from] LintReport),
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Document error: {0}")]
    Document(#[from] DocError),
}

impl ApiError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(resource.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::NotFound(ref resource) => {
                tracing::debug!("Resource not found: {}", resource);
                (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{} not found", resource),
                )
            }
            ApiError::Document(ref err) => {
                tracing::error!("OpenAPI document unavailable: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DOCUMENT_ERROR",
                    "API documentation is unavailable".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse::new(message, error_code))).into_response()
    }
}

// Result type alias for convenience
pub type ApiResult<T> = Result<T, ApiError>;
