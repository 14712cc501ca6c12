use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::user::User;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginInput {
    /// Email do usuário
    #[schema(format = "email", example = "usuario@email.com")]
    pub email: String,
    /// Senha do usuário
    #[schema(example = "senha123")]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    /// Token JWT para autenticação
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = String)]
    pub token: Option<String>,
    /// Dados do usuário autenticado
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = User)]
    pub user: Option<User>,
}
