//! Tests for the API client
//!
//! Validates URL construction and the mapping from failed responses to
//! user-facing notification text.

#[cfg(test)]
mod tests {
    use crate::api::{ApiError, MayaBayClient};
    use reqwest::StatusCode;

    #[test]
    fn test_api_client_creation() {
        let _client = MayaBayClient::new("http://localhost:8000");
        // Client should be created successfully
    }

    #[test]
    fn test_api_url_joins_paths() {
        let client = MayaBayClient::new("http://localhost:8000/");
        assert_eq!(
            client.api_url("/products"),
            "http://localhost:8000/products"
        );
        assert_eq!(
            client.api_url("products/7"),
            "http://localhost:8000/products/7"
        );
    }

    #[test]
    fn test_user_message_prefers_backend_detail() {
        let err = ApiError::Status {
            status: StatusCode::UNAUTHORIZED,
            detail: Some("bad creds".to_string()),
        };
        assert_eq!(err.user_message(), "bad creds");
    }

    #[test]
    fn test_user_message_falls_back_without_detail() {
        let err = ApiError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: None,
        };
        assert!(err.user_message().contains("500"));
    }

    #[test]
    fn test_admin_message_distinguishes_401_and_403() {
        let expired = ApiError::Status {
            status: StatusCode::UNAUTHORIZED,
            detail: None,
        };
        let forbidden = ApiError::Status {
            status: StatusCode::FORBIDDEN,
            detail: Some("Not authorized".to_string()),
        };

        assert_eq!(expired.admin_message(), "Sessão expirada.");
        assert_eq!(
            forbidden.admin_message(),
            "Apenas administradores podem fazer isso."
        );
    }

    #[test]
    fn test_admin_message_falls_back_to_user_message() {
        let err = ApiError::Status {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            detail: Some("campo obrigatório".to_string()),
        };
        assert_eq!(err.admin_message(), "campo obrigatório");
    }
}
