//! Wire shapes of the scene API.

use scene_core::scene::{SceneRecord, ThemePreset};
use serde::{Deserialize, Serialize};

/// Every API response wraps its payload in `{ "data": ... }`.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct ThemeUpdateRequest {
    pub theme: ThemePreset,
}

/// Decodes a `GET /scenes/{id}` body.
pub fn decode_scene(body: &str) -> serde_json::Result<SceneRecord> {
    let envelope: ApiEnvelope<SceneRecord> = serde_json::from_str(body)?;
    Ok(envelope.data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_scene_envelope() {
        let body = r#"{"data":{"id":1,"ownerSocialId":"u1","theme":"Sunset","messages":[]}}"#;
        let record = decode_scene(body).unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.owner_social_id, "u1");
        assert_eq!(record.theme, ThemePreset::Sunset);
        assert!(record.extra.contains_key("messages"));
    }

    #[test]
    fn test_decode_rejects_unknown_theme() {
        let body = r#"{"data":{"id":1,"ownerSocialId":"u1","theme":"volcano"}}"#;
        assert!(decode_scene(body).is_err());
    }

    #[test]
    fn test_theme_request_body() {
        let body = serde_json::to_string(&ThemeUpdateRequest {
            theme: ThemePreset::Night,
        })
        .unwrap();
        assert_eq!(body, r#"{"theme":"night"}"#);
    }
}
