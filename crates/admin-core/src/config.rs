//! Dashboard Configuration
//!
//! Defaults match the hosted API; a build can override the endpoints through
//! compile-time environment variables, a deployment through a JSON document.

use serde::Deserialize;

use crate::domain::{ApiError, ApiResult};

pub const DEFAULT_API_BASE_URL: &str = "https://test-fe.mysellerpintar.com/api";
pub const DEFAULT_PREVIEW_BASE_URL: &str = "https://management-article-ubzd.vercel.app";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Root of the REST API, without trailing slash
    pub api_base_url: String,
    /// Public site used by the "Preview" buttons
    pub preview_base_url: String,
    /// Local storage key holding the bearer token
    pub token_key: String,
    /// Rows per page agreed with the API
    pub page_size: u32,
    /// How many categories to load for select boxes
    pub category_options_limit: u32,
    /// The only role allowed past the session guard
    pub admin_role: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            preview_base_url: DEFAULT_PREVIEW_BASE_URL.to_string(),
            token_key: "tokenAdmin".to_string(),
            page_size: 10,
            category_options_limit: 100,
            admin_role: "Admin".to_string(),
        }
    }
}

impl AdminConfig {
    /// Defaults overridden by `ADMIN_API_BASE_URL` / `ADMIN_PREVIEW_BASE_URL` at build time
    pub fn from_build_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = option_env!("ADMIN_API_BASE_URL") {
            config.api_base_url = url.to_string();
        }
        if let Some(url) = option_env!("ADMIN_PREVIEW_BASE_URL") {
            config.preview_base_url = url.to_string();
        }
        config.normalized()
    }

    /// Parse a JSON document; missing keys keep their defaults
    pub fn from_json(json: &str) -> ApiResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ApiError::Config(e.to_string()))?;
        if config.page_size == 0 {
            return Err(ApiError::Config("page_size must be at least 1".to_string()));
        }
        Ok(config.normalized())
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self.normalized()
    }

    /// Public URL of an article's detail page
    pub fn preview_url(&self, article_id: &str) -> String {
        format!("{}/detailArticles/{}", self.preview_base_url, article_id)
    }

    fn normalized(mut self) -> Self {
        while self.api_base_url.ends_with('/') {
            self.api_base_url.pop();
        }
        while self.preview_base_url.ends_with('/') {
            self.preview_base_url.pop();
        }
        self
    }
}
