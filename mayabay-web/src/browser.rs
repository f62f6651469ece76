//! Blocking browser dialogs and navigation.

/// Blocking user notification, the storefront's only failure surface.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Destructive-action confirmation. Defaults to "no" when the dialog
/// cannot be shown.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Navigates the browser to an external URL (payment gateway redirect).
pub fn redirect(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href(url) {
            log::error!("falha ao redirecionar: {err:?}");
        }
    }
}
