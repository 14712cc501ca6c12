use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Body of every 4xx/5xx response. Published in the document as `Error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(as = Error)]
pub struct ErrorResponse {
    /// Mensagem de erro
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = String)]
    pub message: Option<String>,
    /// Detalhes do erro
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = String)]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_serialization() {
        let body = ErrorResponse::new("Route /nope not found", "NOT_FOUND");
        let json = serde_json::to_string(&body).expect("Failed to serialize error");

        assert_eq!(json, r#"{"message":"Route /nope not found","error":"NOT_FOUND"}"#);
    }

    #[test]
    fn test_error_schema_is_published_as_error() {
        let (name, schema) = ErrorResponse::schema();
        let schema = serde_json::to_value(schema).unwrap();

        assert_eq!(name, "Error");
        assert!(schema.get("required").is_none());
        assert_eq!(schema["properties"]["message"]["description"], "Mensagem de erro");
    }
}
