//! Stored-credential handling and session transitions.
//!
//! The token and admin flag live in `localStorage` under fixed keys. The
//! storage layer enforces no expiry of its own; expiry only surfaces when
//! the token claims are decoded at startup or after a login.

use chrono::Utc;
use gloo_storage::{LocalStorage, Storage};
use shared::session::Session;

const TOKEN_KEY: &str = "mayabay_token";
const ADMIN_KEY: &str = "mayabay_is_admin";

/// Reconstructs the session from the stored token.
///
/// Absent token means logged out. A malformed or expired token also means
/// logged out, and additionally wipes the stored credentials so the stale
/// token is never retried.
pub fn check_auth() -> Option<Session> {
    let token = stored_token()?;
    match Session::from_token(&token, Utc::now().timestamp()) {
        Ok(session) => Some(session),
        Err(err) => {
            log::warn!("sessão descartada: {err}");
            clear_credentials();
            None
        }
    }
}

/// The stored bearer token, for Authorization headers on admin calls.
pub fn stored_token() -> Option<String> {
    LocalStorage::get(TOKEN_KEY).ok()
}

/// Persists the credentials returned by a successful login.
pub fn store_credentials(token: &str, is_admin: bool) {
    if let Err(err) = LocalStorage::set(TOKEN_KEY, token) {
        log::error!("falha ao gravar token: {err}");
    }
    if let Err(err) = LocalStorage::set(ADMIN_KEY, is_admin.to_string()) {
        log::error!("falha ao gravar flag de admin: {err}");
    }
}

/// Removes both stored credential keys.
pub fn clear_credentials() {
    LocalStorage::delete(TOKEN_KEY);
    LocalStorage::delete(ADMIN_KEY);
}

/// Ends the session: wipes credentials and reloads the page so every piece
/// of in-memory state, the cart included, resets.
pub fn logout() {
    clear_credentials();
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().reload() {
            log::error!("falha ao recarregar a página: {err:?}");
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine as _;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn expired_token() -> String {
        let payload = URL_SAFE_NO_PAD.encode(br#"{"sub":"a@b.com","is_admin":true,"exp":1000}"#);
        format!("hdr.{payload}.sig")
    }

    #[wasm_bindgen_test]
    fn test_expired_token_logs_out_and_wipes_storage() {
        store_credentials(&expired_token(), true);
        assert!(stored_token().is_some());
        assert!(LocalStorage::get::<String>(ADMIN_KEY).is_ok());

        assert!(check_auth().is_none());

        assert!(stored_token().is_none());
        assert!(LocalStorage::get::<String>(ADMIN_KEY).is_err());
    }

    #[wasm_bindgen_test]
    fn test_absent_token_is_logged_out() {
        clear_credentials();
        assert!(check_auth().is_none());
    }

    #[wasm_bindgen_test]
    fn test_valid_token_round_trips_through_storage() {
        let far_future = br#"{"sub":"maria@mayabay.com","is_admin":false,"exp":99999999999}"#;
        let payload = URL_SAFE_NO_PAD.encode(far_future);
        store_credentials(&format!("hdr.{payload}.sig"), false);

        let session = check_auth().expect("token should still be valid");
        assert_eq!(session.display_name, "Maria");
        assert!(stored_token().is_some());

        clear_credentials();
    }
}
