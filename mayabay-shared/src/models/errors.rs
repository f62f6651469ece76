use serde::{Deserialize, Serialize};

/// Error body returned by the Maya Bay backend (FastAPI convention).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Human-readable description of the failure.
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_deserialization() {
        let body = r#"{"detail": "Credenciais inválidas"}"#;
        let response: ErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.detail.as_deref(), Some("Credenciais inválidas"));
    }

    #[test]
    fn test_error_response_tolerates_missing_detail() {
        let response: ErrorResponse = serde_json::from_str("{}").unwrap();
        assert!(response.detail.is_none());
    }
}
