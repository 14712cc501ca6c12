use axum::{routing::get, Router};
use std::sync::Arc;
use utoipa_swagger_ui::{Config as SwaggerConfig, SwaggerUi};

use crate::{
    config::Config,
    docs::DocsState,
    handlers::{
        docs::{openapi_json, openapi_yaml},
        health_check, not_found,
    },
    middleware::create_middleware_stack,
};

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";
pub const OPENAPI_YAML_PATH: &str = "/api-docs/openapi.yaml";
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

/// Create the Axum router with all endpoints and middleware
pub fn create_router(docs: Arc<DocsState>, config: &Config) -> Router {
    let mut router = Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Published document
        .route(OPENAPI_JSON_PATH, get(openapi_json))
        .route(OPENAPI_YAML_PATH, get(openapi_yaml))
        .with_state(docs);

    if config.docs.swagger_ui {
        router = router.merge(
            SwaggerUi::new(SWAGGER_UI_PATH).config(SwaggerConfig::from(OPENAPI_JSON_PATH)),
        );
    }

    router
        .fallback(not_found)
        .layer(create_middleware_stack(&config.http))
}
