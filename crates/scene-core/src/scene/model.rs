//! Scene domain model.
//!
//! Contains the identifier extracted from the route and the read-only copy of
//! the server-owned scene record.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::theme::ThemePreset;

/// Identifier of a single message inside a scene.
pub type MessageId = u64;

/// Opaque encrypted scene token taken from the URL path.
///
/// Never decoded on the client. Used as a cache key and as a path segment.
/// A `SceneIdentifier` is always non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SceneIdentifier(String);

impl SceneIdentifier {
    /// Builds an identifier from a route parameter.
    ///
    /// Returns `None` for a missing or blank parameter, which the page treats
    /// as "render nothing". Any other token is kept byte for byte.
    pub fn from_route_param(param: Option<&str>) -> Option<Self> {
        let raw = param?;
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SceneIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SceneIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SceneIdentifier {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_route_param(Some(&value)).ok_or_else(|| "scene identifier is empty".to_string())
    }
}

impl From<SceneIdentifier> for String {
    fn from(id: SceneIdentifier) -> Self {
        id.0
    }
}

/// Client-side copy of a scene as returned by the scene read.
///
/// Replaced wholesale on every refetch; never mutated locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneRecord {
    /// Internal (non-opaque) scene id, used to key the theme write.
    pub id: i64,
    /// Identity of the owner, compared against the signed-in user's email.
    pub owner_social_id: String,
    /// Authoritative preset as stored on the server.
    pub theme: ThemePreset,
    /// Remaining fields the page does not interpret.
    #[serde(flatten, default)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SceneRecord {
    pub fn new(id: i64, owner_social_id: impl Into<String>, theme: ThemePreset) -> Self {
        Self {
            id,
            owner_social_id: owner_social_id.into(),
            theme,
            extra: serde_json::Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_rejects_blank() {
        assert!(SceneIdentifier::from_route_param(None).is_none());
        assert!(SceneIdentifier::from_route_param(Some("")).is_none());
        assert!(SceneIdentifier::from_route_param(Some("   ")).is_none());
        assert_eq!(
            SceneIdentifier::from_route_param(Some("abc123")).unwrap().as_str(),
            "abc123"
        );
    }

    #[test]
    fn test_identifier_is_kept_verbatim() {
        let id = SceneIdentifier::from_route_param(Some(" abc+/= ")).unwrap();
        assert_eq!(id.as_str(), " abc+/= ");
        assert_ne!(id, SceneIdentifier::from_route_param(Some("abc+/=")).unwrap());
    }

    #[test]
    fn test_record_keeps_unknown_fields() {
        let json = r#"{"id":1,"ownerSocialId":"u1","theme":"Sunset","title":"Birthday"}"#;
        let record: SceneRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.owner_social_id, "u1");
        assert_eq!(record.theme, ThemePreset::Sunset);
        assert_eq!(record.extra.get("title").and_then(|v| v.as_str()), Some("Birthday"));
    }
}
