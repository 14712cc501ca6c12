//! OpenAPI document for the Users / Authors / Posts API.
//!
//! The document is assembled once at startup from three pieces:
//! the [`ApiDoc`] derive (info, tags and component schemas),
//! [`SecurityAddon`] (the JWT bearer scheme) and [`ApiPaths`]
//! (every documented operation). [`build_openapi`] adds the configured
//! server and [`lint`] checks the result before it is served.

pub mod lint;
pub mod paths;

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::openapi::{OpenApi as OpenApiDocument, ServerBuilder};
use utoipa::{Modify, OpenApi};

use self::paths::ApiPaths;
use crate::error::DocError;
use crate::models::{
    Author, AuthorInput, ErrorResponse, LoginInput, LoginResponse, Post, PostInput, User,
    UserInput,
};

/// Name under which the bearer scheme is registered and referenced.
pub const BEARER_AUTH: &str = "bearerAuth";

pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000/api";
const SERVER_DESCRIPTION: &str = "Servidor de desenvolvimento";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "API - Sistema de Posts e Autores",
        version = "1.0.0",
        description = "API para gerenciamento de usuários, autores e posts com autenticação JWT",
        contact(name = "Suporte da API", email = "suporte@api.com")
    ),
    components(
        schemas(
            User,
            UserInput,
            Author,
            AuthorInput,
            Post,
            PostInput,
            LoginInput,
            LoginResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon, &ApiPaths),
    tags(
        (name = "Auth", description = "Endpoints de autenticação"),
        (name = "Users", description = "Gerenciamento de usuários"),
        (name = "Authors", description = "Gerenciamento de autores"),
        (name = "Posts", description = "Gerenciamento de posts")
    )
)]
pub struct ApiDoc;

/// Registers the JWT bearer scheme used by guarded operations.
pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut OpenApiDocument) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                BEARER_AUTH,
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token JWT para autenticação"))
                        .build(),
                ),
            );
        }
    }
}

/// Builds the document, pointing `servers[0]` at `server_url`.
pub fn build_openapi(server_url: &str) -> OpenApiDocument {
    let mut openapi = ApiDoc::openapi();
    openapi.servers = Some(vec![ServerBuilder::new()
        .url(server_url)
        .description(Some(SERVER_DESCRIPTION))
        .build()]);
    openapi
}

/// The built document plus its JSON rendering, shared by every request.
#[derive(Clone)]
pub struct DocsState {
    openapi: OpenApiDocument,
    json: String,
}

impl DocsState {
    /// Renders `openapi` once and checks it with [`lint::lint`].
    pub fn new(openapi: OpenApiDocument) -> Result<Self, DocError> {
        let value = serde_json::to_value(&openapi)?;
        lint::lint(&value)?;

        let json = serde_json::to_string_pretty(&value)?;
        Ok(Self { openapi, json })
    }

    pub fn json(&self) -> &str {
        &self.json
    }

    /// YAML is requested rarely, so it is rendered on demand.
    pub fn yaml(&self) -> Result<String, DocError> {
        self.openapi
            .to_yaml()
            .map_err(|e| DocError::Render(format!("YAML: {}", e)))
    }

    pub fn openapi(&self) -> &OpenApiDocument {
        &self.openapi
    }
}
