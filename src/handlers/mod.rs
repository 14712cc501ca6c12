// Handlers module
// HTTP handlers for health checks and the published API documentation

pub mod docs;

use axum::{
    http::{StatusCode, Uri},
    response::IntoResponse,
};

use crate::error::ApiError;

/// Health check handler
/// Returns "OK" with 200 status for monitoring purposes
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Fallback for unknown routes, answering with the documented `Error` body.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("Route {}", uri.path()))
}
