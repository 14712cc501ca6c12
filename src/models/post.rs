use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::author::{Author, AuthorInput};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// ID único do post
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = String)]
    pub id: Option<String>,
    /// Título do post
    pub title: String,
    /// Descrição/conteúdo do post
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = String)]
    pub description: Option<String>,
    /// Dados do autor do post
    pub author: Author,
    /// Data de criação
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Option<DateTime<Utc>>,
    /// Data da última atualização
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostInput {
    /// Título do post
    #[schema(example = "Meu primeiro post")]
    pub title: String,
    /// Descrição/conteúdo do post
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = String, example = "Este é o conteúdo do meu primeiro post...")]
    pub description: Option<String>,
    /// Dados do autor do post
    pub author: AuthorInput,
}
