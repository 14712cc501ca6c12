use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Usuário retornado pela API. A senha nunca faz parte da resposta.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// ID único do usuário
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = String)]
    pub id: Option<String>,
    /// Nome completo do usuário
    pub name: String,
    /// Email único do usuário
    #[schema(format = "email")]
    pub email: String,
    /// Data de criação
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Option<DateTime<Utc>>,
    /// Data da última atualização
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload de cadastro e atualização de usuário.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserInput {
    /// Nome completo do usuário
    #[schema(example = "João Silva")]
    pub name: String,
    /// Email único do usuário
    #[schema(format = "email", example = "joao@email.com")]
    pub email: String,
    /// Senha do usuário
    #[schema(min_length = 6, example = "senha123")]
    pub password: String,
}
