//! Viewer configuration loading.
//!
//! Resolution order:
//! 1. `config.toml` (explicit path, or `<config dir>/scene-viewer/config.toml`)
//! 2. Environment overrides (`SCENE_VIEWER_API_URL`, `SCENE_VIEWER_SHARE_URL`,
//!    `SCENE_VIEWER_TOKEN`)
//!
//! A missing file is not an error; defaults are used instead. Nothing is
//! ever written.

use scene_core::config::ViewerConfig;
use scene_core::error::{Result, ViewerError};
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_DIR_NAME: &str = "scene-viewer";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const ENV_API_URL: &str = "SCENE_VIEWER_API_URL";
pub const ENV_SHARE_URL: &str = "SCENE_VIEWER_SHARE_URL";
pub const ENV_TOKEN: &str = "SCENE_VIEWER_TOKEN";

/// Default location of the config file, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Reads `path` into a [`ViewerConfig`]. Missing file yields defaults.
pub fn load_from_file(path: &Path) -> Result<ViewerConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(ViewerConfig::default());
    }
    let content = fs::read_to_string(path).map_err(|e| {
        ViewerError::config(format!("failed to read {}: {}", path.display(), e))
    })?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

/// Applies environment overrides using `lookup` (normally `std::env::var`).
pub fn apply_env_overrides<F>(mut config: ViewerConfig, lookup: F) -> ViewerConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(ENV_API_URL) {
        config.api_base_url = url;
    }
    if let Some(url) = lookup(ENV_SHARE_URL) {
        config.share_base_url = url;
    }
    if let Some(token) = lookup(ENV_TOKEN) {
        config.access_token = Some(token);
    }
    config
}

/// Loads the configuration from `path` (or the default location) and the
/// process environment.
pub fn load(path: Option<&Path>) -> Result<ViewerConfig> {
    let config = match path {
        Some(path) => load_from_file(path)?,
        None => match default_config_path() {
            Some(path) => load_from_file(&path)?,
            None => ViewerConfig::default(),
        },
    };
    let config = apply_env_overrides(config, |key| std::env::var(key).ok());
    tracing::info!(api = %config.api_base_url, "viewer config loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_from_file(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn test_reads_toml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            "api_base_url = \"https://api.example.com\"\nerror_route = \"/oops\"\n",
        )
        .unwrap();

        let config = load_from_file(&path).unwrap();
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.error_route, "/oops");
    }

    #[test]
    fn test_invalid_toml_is_serialization_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "api_base_url = [").unwrap();

        let err = load_from_file(&path).unwrap_err();
        assert!(matches!(err, ViewerError::Serialization { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_API_URL, "https://override.example.com"),
            (ENV_TOKEN, "secret"),
        ]
        .into_iter()
        .collect();

        let config = apply_env_overrides(ViewerConfig::default(), |key| {
            env.get(key).map(|v| v.to_string())
        });
        assert_eq!(config.api_base_url, "https://override.example.com");
        assert_eq!(config.access_token.as_deref(), Some("secret"));
        assert_eq!(config.share_base_url, ViewerConfig::default().share_base_url);
    }
}
