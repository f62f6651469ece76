//! Client-side session derivation from the stored bearer token.
//!
//! The token payload is decoded without any signature verification: the
//! claims feed display and UI gating only. The backend remains the sole
//! authorization boundary and re-checks the token on every request.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Claims embedded in the token payload segment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    /// Subject, the account email address.
    pub sub: String,

    /// Admin flag. Controls visibility of management UI only.
    #[serde(default)]
    pub is_admin: bool,

    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

/// Why a stored token did not produce a session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The token was not a dot-separated JWT with a decodable JSON payload.
    #[error("token payload could not be decoded")]
    Malformed,

    /// The `exp` claim is not in the future.
    #[error("token expired")]
    Expired,
}

/// An authenticated session derived from token claims.
///
/// Not persisted as such; reconstructed on demand from the stored token.
/// Absence of a `Session` means logged out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Email address from the `sub` claim.
    pub email: String,

    /// Greeting name: local part of the email, first letter uppercased.
    pub display_name: String,

    /// Admin flag from the claims.
    pub is_admin: bool,
}

impl Session {
    /// Derives a session from a bearer token, checking expiry against
    /// `now_secs` (seconds since the Unix epoch).
    ///
    /// # Errors
    ///
    /// [`SessionError::Malformed`] when the payload segment is missing or
    /// not base64url JSON, [`SessionError::Expired`] when `exp` has passed.
    /// Either way the caller must treat the session as logged out and wipe
    /// the stored credentials.
    pub fn from_token(token: &str, now_secs: i64) -> Result<Self, SessionError> {
        let claims = decode_claims(token)?;
        if now_secs >= claims.exp {
            return Err(SessionError::Expired);
        }
        Ok(Self {
            display_name: display_name(&claims.sub),
            email: claims.sub,
            is_admin: claims.is_admin,
        })
    }
}

/// Decodes the middle segment of a JWT as base64url JSON claims.
pub fn decode_claims(token: &str) -> Result<TokenClaims, SessionError> {
    let payload = token.split('.').nth(1).ok_or(SessionError::Malformed)?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| SessionError::Malformed)?;
    serde_json::from_slice(&bytes).map_err(|_| SessionError::Malformed)
}

fn display_name(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    let mut chars = local.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forge_token(claims: &TokenClaims) -> String {
        let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims).unwrap());
        format!("hdr.{payload}.sig")
    }

    #[test]
    fn test_valid_token_yields_logged_in_session() {
        let token = forge_token(&TokenClaims {
            sub: "a@b.com".to_string(),
            is_admin: true,
            exp: 2_000,
        });

        let session = Session::from_token(&token, 1_000).unwrap();
        assert_eq!(session.email, "a@b.com");
        assert_eq!(session.display_name, "A");
        assert!(session.is_admin);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let token = forge_token(&TokenClaims {
            sub: "a@b.com".to_string(),
            is_admin: false,
            exp: 1_000,
        });

        assert_eq!(
            Session::from_token(&token, 2_000),
            Err(SessionError::Expired)
        );
        // Expiry is inclusive: exp == now is already logged out.
        assert_eq!(
            Session::from_token(&token, 1_000),
            Err(SessionError::Expired)
        );
    }

    #[test]
    fn test_malformed_tokens_are_rejected() {
        for token in ["", "no-dots", "a.###.c", "a.bm90IGpzb24.c"] {
            assert_eq!(
                Session::from_token(token, 0),
                Err(SessionError::Malformed),
                "token {token:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_missing_is_admin_claim_defaults_to_false() {
        let payload = URL_SAFE_NO_PAD.encode(br#"{"sub":"c@d.com","exp":9999}"#);
        let token = format!("hdr.{payload}.sig");

        let session = Session::from_token(&token, 0).unwrap();
        assert!(!session.is_admin);
    }

    #[test]
    fn test_display_name_uses_local_part() {
        let token = forge_token(&TokenClaims {
            sub: "maria.silva@mayabay.com".to_string(),
            is_admin: false,
            exp: i64::MAX,
        });

        let session = Session::from_token(&token, 0).unwrap();
        assert_eq!(session.display_name, "Maria.silva");
    }
}
