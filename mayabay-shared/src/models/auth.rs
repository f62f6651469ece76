use serde::{Deserialize, Serialize};

/// Credentials sent to `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The account email address.
    pub email: String,

    /// The account password, sent in the clear over the transport.
    pub password: String,
}

/// Successful response from `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Bearer token for authenticated requests. Also carries the display
    /// claims the client decodes locally.
    pub access_token: String,

    /// Whether the account has admin rights. Mirrors the `is_admin` claim.
    pub is_admin: bool,
}

/// Payload for `POST /register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// The account email address.
    pub email: String,

    /// The chosen password.
    pub password: String,

    /// Optional staff key; a valid one grants the new account admin rights.
    pub admin_key: Option<String>,
}

/// Successful response from `POST /register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterResponse {
    /// Whether the created account was granted admin rights.
    pub is_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_shape() {
        let request = LoginRequest {
            email: "cliente@mayabay.com".to_string(),
            password: "segredo".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["email"], "cliente@mayabay.com");
        assert_eq!(value["password"], "segredo");
    }

    #[test]
    fn test_login_response_deserialization() {
        let body = r#"{"access_token": "abc.def.ghi", "is_admin": true}"#;
        let response: LoginResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.access_token, "abc.def.ghi");
        assert!(response.is_admin);
    }

    #[test]
    fn test_register_request_omits_admin_key_value() {
        let request = RegisterRequest {
            email: "nova@mayabay.com".to_string(),
            password: "segredo".to_string(),
            admin_key: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["admin_key"], serde_json::Value::Null);
    }
}
