//! HTTP implementation of [`SceneApi`].

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use scene_core::config::ViewerConfig;
use scene_core::error::{Result, ViewerError};
use scene_core::scene::{MessageId, SceneApi, SceneIdentifier, SceneRecord, ThemePreset};
use std::time::Duration;

use crate::dto::{ThemeUpdateRequest, decode_scene};

/// Scene API client over HTTP.
///
/// Sends one request per call; there is no retry beyond what the transport
/// does on its own.
#[derive(Clone)]
pub struct HttpSceneApi {
    client: Client,
    base_url: Url,
    access_token: Option<String>,
    timeout: Duration,
}

impl HttpSceneApi {
    /// Creates a client for `base_url` (e.g. `https://host/api`).
    pub fn new(base_url: &str, access_token: Option<String>, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ViewerError::config(format!("invalid api_base_url '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ViewerError::config(format!(
                "api_base_url '{base_url}' cannot be used as a base"
            )));
        }
        Ok(Self {
            client: Client::new(),
            base_url,
            access_token,
            timeout,
        })
    }

    pub fn from_config(config: &ViewerConfig) -> Result<Self> {
        Self::new(
            &config.api_base_url,
            config.access_token.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Builds `<base>/<segments...>`, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ViewerError::internal("api base url cannot be a base"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Attaches the bearer token when one is configured.
    fn auth_request(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.timeout(self.timeout);
        if let Some(token) = &self.access_token {
            request.bearer_auth(token)
        } else {
            request
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = self
            .auth_request(request)
            .send()
            .await
            .map_err(|e| ViewerError::transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(ViewerError::Status {
            code: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl SceneApi for HttpSceneApi {
    async fn fetch_scene(&self, scene: &SceneIdentifier) -> Result<SceneRecord> {
        let url = self.endpoint(&["scenes", scene.as_str()])?;
        tracing::debug!(%url, "fetching scene");

        let body = async {
            let response = self.send(self.client.get(url)).await?;
            response
                .text()
                .await
                .map_err(|e| ViewerError::transport(e.to_string()))
        }
        .await
        .map_err(|e| ViewerError::load_failure(scene.as_str(), e.to_string()))?;

        decode_scene(&body).map_err(|e| ViewerError::load_failure(scene.as_str(), e.to_string()))
    }

    async fn update_theme(&self, scene_id: i64, theme: ThemePreset) -> Result<()> {
        let id = scene_id.to_string();
        let url = self.endpoint(&["scenes", &id, "theme"])?;
        tracing::info!(scene_id, %theme, "updating scene theme");

        self.send(self.client.put(url).json(&ThemeUpdateRequest { theme }))
            .await
            .map(|_| ())
            .map_err(|e| ViewerError::write_failure("update_theme", e.to_string()))
    }

    async fn delete_message(&self, scene: &SceneIdentifier, message_id: MessageId) -> Result<()> {
        let id = message_id.to_string();
        let url = self.endpoint(&["scenes", scene.as_str(), "messages", &id])?;
        tracing::info!(scene = %scene, message_id, "deleting message");

        self.send(self.client.delete(url))
            .await
            .map(|_| ())
            .map_err(|e| ViewerError::write_failure("delete_message", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base: &str) -> HttpSceneApi {
        HttpSceneApi::new(base, None, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let api = api("https://api.example.com/api");
        let url = api.endpoint(&["scenes", "abc123"]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/api/scenes/abc123");
    }

    #[test]
    fn test_endpoint_handles_trailing_slash() {
        let api = api("https://api.example.com/api/");
        let url = api.endpoint(&["scenes", "1", "theme"]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/api/scenes/1/theme");
    }

    #[test]
    fn test_endpoint_encodes_opaque_identifier() {
        let api = api("https://api.example.com");
        let url = api.endpoint(&["scenes", "a/b?c"]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/scenes/a%2Fb%3Fc");
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let err = HttpSceneApi::new("not a url", None, Duration::from_secs(5))
            .err()
            .unwrap();
        assert!(matches!(err, ViewerError::Config(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_load_failure() {
        let api = api("http://127.0.0.1:9");
        let scene = SceneIdentifier::from_route_param(Some("abc123")).unwrap();
        let err = api.fetch_scene(&scene).await.unwrap_err();
        assert!(err.is_load_failure());
    }
}
