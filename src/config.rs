//! Backend Configuration
//!
//! Resolves the task API base URL from the host page, then the build
//! environment, then the local development default.

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Name of the `<meta>` tag that may carry the API base URL
pub const API_URL_META: &str = "todo-api-url";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// First non-blank candidate wins
    pub fn resolve(meta: Option<String>, env: Option<&str>) -> Self {
        meta.as_deref()
            .into_iter()
            .chain(env)
            .map(str::trim)
            .find(|url| !url.is_empty())
            .map(|url| Self::new(url))
            .unwrap_or_default()
    }

    /// Read the browser page and `TODO_API_URL` captured at build time
    pub fn load() -> Self {
        let config = Self::resolve(read_meta(API_URL_META), option_env!("TODO_API_URL"));
        tracing::info!(base_url = config.base_url(), "api config loaded");
        config
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join a resource path onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn read_meta(name: &str) -> Option<String> {
    web_sys::window()?
        .document()?
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??
        .get_attribute("content")
}
