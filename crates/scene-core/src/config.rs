use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_SHARE_BASE_URL: &str = "http://localhost:5173";
pub const DEFAULT_ERROR_ROUTE: &str = "/500";
pub const DEFAULT_COMPOSE_ROUTE: &str = "/message";
pub const DEFAULT_SCENE_ROUTE: &str = "/scene";

/// Settings for the scene viewer.
///
/// Loaded from `config.toml`; every field is optional in the file.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ViewerConfig {
    /// Base URL of the scene API, without trailing slash.
    pub api_base_url: String,
    /// Public origin used to build share links.
    pub share_base_url: String,
    /// Path of the scene page, used for share links.
    pub scene_route: String,
    /// Generic failure destination.
    pub error_route: String,
    /// Message composition destination for guests.
    pub compose_route: String,
    pub request_timeout_secs: u64,
    /// Bearer token attached to API requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            share_base_url: DEFAULT_SHARE_BASE_URL.to_string(),
            scene_route: DEFAULT_SCENE_ROUTE.to_string(),
            error_route: DEFAULT_ERROR_ROUTE.to_string(),
            compose_route: DEFAULT_COMPOSE_ROUTE.to_string(),
            request_timeout_secs: 10,
            access_token: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ViewerConfig = toml::from_str(r#"api_base_url = "https://api.example.com""#).unwrap();
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.error_route, DEFAULT_ERROR_ROUTE);
        assert_eq!(config.request_timeout_secs, 10);
        assert!(config.access_token.is_none());
    }
}
