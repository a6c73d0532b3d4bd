//! Client settings, read from the environment.

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080/api";

/// How many neighbours the AI search asks for by default.
pub const MAX_INGREDIENTS_SUGGESTIONS: i32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_url: String,
    /// Sent as a bearer token when present.
    pub access_token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            access_token: None,
        }
    }
}

impl ClientConfig {
    /// `CATALOG_API_URL` from the process environment, then from build time
    /// (the browser build has no process environment), then the default.
    pub fn from_env() -> Self {
        let api_url = std::env::var("CATALOG_API_URL")
            .ok()
            .or_else(|| option_env!("CATALOG_API_URL").map(str::to_string))
            .unwrap_or(DEFAULT_API_URL.to_string());
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            access_token: None,
        }
    }
}
