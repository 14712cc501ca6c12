// Models module
// Request/response shapes published as OpenAPI component schemas

pub mod auth;
pub mod author;
pub mod error;
pub mod post;
pub mod user;

// Re-export commonly used types
pub use auth::{LoginInput, LoginResponse};
pub use author::{Author, AuthorInput};
pub use error::ErrorResponse;
pub use post::{Post, PostInput};
pub use user::{User, UserInput};
