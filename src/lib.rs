// Library root for the Posts & Authors API documentation service

pub mod config;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod router;

// Re-export commonly used types
pub use docs::{build_openapi, ApiDoc, DocsState};
pub use error::{ApiError, DocError};
pub use router::create_router;
