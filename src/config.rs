//! Admin Configuration
//!
//! Runtime settings for the admin UI. The API base comes from the page's
//! origin unless the host page overrides it with
//! `<meta name="admin-api-base" content="...">`.

use crate::pagination::DEFAULT_WINDOW;

const API_BASE_META: &str = "admin-api-base";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    /// Absolute origin the `/api/...` paths are joined to
    pub api_base: String,
    /// Rows requested per list page
    pub page_limit: u32,
    /// Numbered buttons in the pagination bar
    pub page_window: u32,
    /// How long a template save status stays visible
    pub status_clear_ms: u32,
    pub max_upload_bytes: u64,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:8080".to_string(),
            page_limit: 10,
            page_window: DEFAULT_WINDOW,
            status_clear_ms: 3000,
            max_upload_bytes: 5 * 1024 * 1024,
        }
    }
}

impl AdminConfig {
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            ..Default::default()
        }
    }

    /// Build from the current browser window, falling back to defaults.
    pub fn from_window() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };

        let meta_base = window
            .document()
            .and_then(|doc| doc.query_selector(&format!("meta[name=\"{}\"]", API_BASE_META)).ok().flatten())
            .and_then(|el| el.get_attribute("content"))
            .filter(|c| !c.trim().is_empty());

        match meta_base.or_else(|| window.location().origin().ok()) {
            Some(base) => Self::with_api_base(base),
            None => Self::default(),
        }
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AdminConfig::default();
        assert_eq!(config.page_limit, 10);
        assert_eq!(config.page_window, 5);
        assert_eq!(config.status_clear_ms, 3000);
        assert_eq!(config.max_upload_bytes, 5 * 1024 * 1024);
    }

    #[test]
    fn test_api_url_joins_without_double_slash() {
        let config = AdminConfig::with_api_base("https://blog.example.com/");
        assert_eq!(config.api_url("/api/posts"), "https://blog.example.com/api/posts");
    }
}
