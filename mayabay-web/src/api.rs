use once_cell::unsync::OnceCell;
use reqwest::{Client, Response, StatusCode};
use shared::cart::CartLine;
use shared::models::{
    CheckoutResponse, ErrorResponse, LoginRequest, LoginResponse, NewProduct, Product,
    RegisterRequest, RegisterResponse,
};
use thiserror::Error;

use crate::config::FrontendConfig;

thread_local! {
    static SHARED_CLIENT: OnceCell<MayaBayClient> = OnceCell::new();
}

/// A failed backend call.
///
/// Transport covers unreachable-network failures, Status covers non-2xx
/// responses with the backend's `detail` body when one was sent. Nothing
/// here retries; callers surface the message and move on.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("falha de transporte: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("status {status}")]
    Status {
        /// The HTTP status code.
        status: StatusCode,
        /// Backend-provided error detail, when the body carried one.
        detail: Option<String>,
    },
}

impl ApiError {
    /// Text for the blocking user notification: the backend's detail when
    /// present, otherwise a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) => "Não foi possível conectar ao servidor.".to_string(),
            Self::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Self::Status { status, .. } => format!("Erro no servidor ({status})."),
        }
    }

    /// Message for admin product calls, where 401 (stale session) and 403
    /// (not an administrator) read differently regardless of the body.
    pub fn admin_message(&self) -> String {
        match self {
            Self::Status { status, .. } if *status == StatusCode::UNAUTHORIZED => {
                "Sessão expirada.".to_string()
            }
            Self::Status { status, .. } if *status == StatusCode::FORBIDDEN => {
                "Apenas administradores podem fazer isso.".to_string()
            }
            other => other.user_message(),
        }
    }
}

/// Lightweight API client for the Maya Bay backend.
#[derive(Clone, Debug)]
pub struct MayaBayClient {
    base_url: String,
    client: Client,
}

impl MayaBayClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Per-page singleton configured from [`FrontendConfig`].
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::default().api_base_url()))
                .clone()
        })
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn accept(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let detail = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .and_then(|body| body.detail);
        Err(ApiError::Status { status, detail })
    }

    /// Fetch the full product catalog.
    pub async fn get_products(&self) -> Result<Vec<Product>, ApiError> {
        let response = self.client.get(self.api_url("products")).send().await?;
        Ok(Self::accept(response).await?.json().await?)
    }

    /// Authenticate with email/password credentials.
    pub async fn login(&self, payload: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = self
            .client
            .post(self.api_url("login"))
            .json(payload)
            .send()
            .await?;
        Ok(Self::accept(response).await?.json().await?)
    }

    /// Create a new account.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let response = self
            .client
            .post(self.api_url("register"))
            .json(payload)
            .send()
            .await?;
        Ok(Self::accept(response).await?.json().await?)
    }

    /// Create a product. Requires an admin bearer token; the backend is the
    /// authority on that, the client only forwards the token.
    pub async fn create_product(
        &self,
        payload: &NewProduct,
        token: &str,
    ) -> Result<Product, ApiError> {
        let response = self
            .client
            .post(self.api_url("products"))
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;
        Ok(Self::accept(response).await?.json().await?)
    }

    /// Delete a product by id. Requires an admin bearer token.
    pub async fn delete_product(&self, id: i64, token: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.api_url(&format!("products/{id}")))
            .bearer_auth(token)
            .send()
            .await?;
        Self::accept(response).await?;
        Ok(())
    }

    /// Submit the cart for payment. A present `init_point` in the response
    /// is the gateway URL to redirect the browser to.
    pub async fn checkout(&self, lines: &[CartLine]) -> Result<CheckoutResponse, ApiError> {
        let response = self
            .client
            .post(self.api_url("checkout"))
            .json(lines)
            .send()
            .await?;
        Ok(Self::accept(response).await?.json().await?)
    }
}
