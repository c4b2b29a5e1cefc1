//! Scene resource operations consumed by the page.

use async_trait::async_trait;

use super::model::{MessageId, SceneIdentifier, SceneRecord};
use super::theme::ThemePreset;
use crate::error::Result;

/// Transport-level access to the scene resources.
///
/// Implementations perform exactly one request per call and never retry.
/// Authorization is enforced by the server; the page's ownership flag is
/// advisory only.
#[async_trait]
pub trait SceneApi: Send + Sync {
    /// `GET /scenes/{encryptedSceneId}`
    async fn fetch_scene(&self, scene: &SceneIdentifier) -> Result<SceneRecord>;

    /// Persists `theme` for the scene with internal id `scene_id`.
    async fn update_theme(&self, scene_id: i64, theme: ThemePreset) -> Result<()>;

    /// Deletes one message of the scene.
    async fn delete_message(&self, scene: &SceneIdentifier, message_id: MessageId) -> Result<()>;
}
