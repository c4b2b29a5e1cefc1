//! Theme writes and the shared active-preset mirror.

use scene_core::error::{Result, ViewerError};
use scene_core::page::{ReadyView, ThemeSeed};
use scene_core::scene::{SceneApi, ThemePreset};
use scene_core::theme_state::SceneThemeStore;
use std::sync::Arc;

use crate::lifecycle::PageToken;

/// Persists the owner's preset choice and mirrors it into [`SceneThemeStore`].
pub struct ThemeSync {
    api: Arc<dyn SceneApi>,
    store: Arc<SceneThemeStore>,
}

impl ThemeSync {
    pub fn new(api: Arc<dyn SceneApi>, store: Arc<SceneThemeStore>) -> Self {
        Self { api, store }
    }

    pub fn store(&self) -> &Arc<SceneThemeStore> {
        &self.store
    }

    /// Mirrors a fetched preset. Each fetch revision is applied once and a
    /// live unsaved edit is kept.
    pub fn seed(&self, seed: ThemeSeed) -> bool {
        let changed = self.store.sync_from_fetch(seed.preset, seed.revision);
        if changed {
            tracing::debug!(preset = %seed.preset, revision = seed.revision, "active preset seeded");
        }
        changed
    }

    /// Unsaved local selection for immediate feedback.
    pub fn preview(&self, view: &ReadyView, preset: ThemePreset) -> Result<()> {
        ensure_owner(view)?;
        self.store.preview(preset);
        Ok(())
    }

    /// Writes `preset` for the loaded scene.
    ///
    /// Refused before any write when the visitor is not the owner. On failure
    /// the error is returned to the caller and neither the store nor the
    /// cached record is touched. A completion arriving after `token` expired
    /// leaves the store alone.
    pub async fn apply_theme(
        &self,
        view: &ReadyView,
        preset: ThemePreset,
        token: &PageToken,
    ) -> Result<()> {
        ensure_owner(view)?;

        if let Err(e) = self.api.update_theme(view.record.id, preset).await {
            tracing::warn!(scene_id = view.record.id, error = %e, "[ThemeSync] theme update failed");
            return Err(if e.is_write_failure() {
                e
            } else {
                ViewerError::write_failure("update_theme", e.to_string())
            });
        }

        if token.is_current() {
            self.store.commit(preset);
            tracing::info!(scene_id = view.record.id, %preset, "theme saved");
        } else {
            tracing::debug!(scene_id = view.record.id, "theme saved after page teardown, ignoring");
        }
        Ok(())
    }
}

fn ensure_owner(view: &ReadyView) -> Result<()> {
    if view.role.is_owner() {
        Ok(())
    } else {
        Err(ViewerError::not_permitted("only the scene owner can change the theme"))
    }
}
