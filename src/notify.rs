//! Browser Dialogs and Navigation
//!
//! Thin wrappers over `window.alert` and `location.href`. Failures are
//! logged, never raised.

use tracing::{error, info};

pub fn alert(message: &str) {
    info!(%message, "notify");
    let Some(window) = web_sys::window() else { return };
    if let Err(e) = window.alert_with_message(message) {
        error!(?e, "alert failed");
    }
}

pub fn navigate(href: &str) {
    let Some(window) = web_sys::window() else { return };
    if let Err(e) = window.location().set_href(href) {
        error!(?e, %href, "navigation failed");
    }
}

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}
