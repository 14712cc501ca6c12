// Documentation handlers
// Serve the OpenAPI document built at startup

use axum::{extract::State, http::header, response::IntoResponse};
use std::sync::Arc;
use tracing::debug;

use crate::{docs::DocsState, error::ApiResult};

/// Get the OpenAPI document as JSON
/// GET /api-docs/openapi.json
pub async fn openapi_json(State(docs): State<Arc<DocsState>>) -> impl IntoResponse {
    debug!("Serving OpenAPI document as JSON");

    (
        [(header::CONTENT_TYPE, "application/json")],
        docs.json().to_owned(),
    )
}

/// Get the OpenAPI document as YAML
/// GET /api-docs/openapi.yaml
pub async fn openapi_yaml(State(docs): State<Arc<DocsState>>) -> ApiResult<impl IntoResponse> {
    debug!("Serving OpenAPI document as YAML");

    let yaml = docs.yaml()?;
    Ok(([(header::CONTENT_TYPE, "application/yaml")], yaml))
}
