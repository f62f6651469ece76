use serde::{Deserialize, Serialize};

/// Response from `POST /checkout`.
///
/// A present `init_point` is the payment gateway URL the browser must be
/// redirected to; no local order state is retained after the redirect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutResponse {
    /// Redirect URL for the external payment flow, when the backend
    /// accepted the order.
    #[serde(default)]
    pub init_point: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_response_with_redirect() {
        let body = r#"{"init_point": "https://pay.example.com/o/123"}"#;
        let response: CheckoutResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            response.init_point.as_deref(),
            Some("https://pay.example.com/o/123")
        );
    }

    #[test]
    fn test_checkout_response_without_redirect() {
        let body = r#"{"init_point": null}"#;
        let response: CheckoutResponse = serde_json::from_str(body).unwrap();
        assert!(response.init_point.is_none());
    }
}
