//! Shared active-theme state.
//!
//! The renderer reads the active preset from here. Only theme sync and the
//! page controller write it.

use serde::{Deserialize, Serialize};
use std::sync::RwLock;

use crate::scene::ThemePreset;

/// Where the active preset came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetOrigin {
    #[default]
    Unset,
    /// Taken from a fetched scene record.
    Fetched,
    /// Picked by the user but not saved yet.
    Edited,
    /// Saved to the server by the user.
    Saved,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ThemeSlot {
    active: Option<ThemePreset>,
    origin: PresetOrigin,
    /// Last fetch revision applied (or skipped because of a live edit).
    revision: Option<u64>,
}

/// Page-scoped store for the preset the scene is rendered with.
#[derive(Debug, Default)]
pub struct SceneThemeStore {
    slot: RwLock<ThemeSlot>,
}

impl SceneThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<ThemePreset> {
        self.read().active
    }

    pub fn origin(&self) -> PresetOrigin {
        self.read().origin
    }

    /// Mirrors a fetched preset into the store.
    ///
    /// Each fetch `revision` is applied at most once, so re-evaluating the page
    /// with the same record never overwrites a later change. A live unsaved
    /// edit is never overwritten. Returns whether the active preset changed.
    pub fn sync_from_fetch(&self, preset: ThemePreset, revision: u64) -> bool {
        let mut slot = self.write();
        if slot.revision.is_some_and(|seen| revision <= seen) {
            return false;
        }
        slot.revision = Some(revision);
        if slot.origin == PresetOrigin::Edited {
            tracing::debug!(revision, "keeping unsaved theme edit over fetched preset");
            return false;
        }
        let changed = slot.active != Some(preset);
        slot.active = Some(preset);
        slot.origin = PresetOrigin::Fetched;
        changed
    }

    /// Local, unsaved selection for immediate visual feedback.
    pub fn preview(&self, preset: ThemePreset) {
        let mut slot = self.write();
        slot.active = Some(preset);
        slot.origin = PresetOrigin::Edited;
    }

    /// Records a preset the server accepted.
    pub fn commit(&self, preset: ThemePreset) {
        let mut slot = self.write();
        slot.active = Some(preset);
        slot.origin = PresetOrigin::Saved;
    }

    /// Drops everything; the next fetch seeds again.
    pub fn reset(&self) {
        *self.write() = ThemeSlot::default();
    }

    fn read(&self) -> ThemeSlot {
        *self.slot.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, ThemeSlot> {
        self.slot.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_fetch_seeds() {
        let store = SceneThemeStore::new();
        assert_eq!(store.active(), None);

        assert!(store.sync_from_fetch(ThemePreset::Sunset, 1));
        assert_eq!(store.active(), Some(ThemePreset::Sunset));
        assert_eq!(store.origin(), PresetOrigin::Fetched);
    }

    #[test]
    fn test_same_revision_is_applied_once() {
        let store = SceneThemeStore::new();
        store.sync_from_fetch(ThemePreset::Sunset, 1);
        store.commit(ThemePreset::Night);

        assert!(!store.sync_from_fetch(ThemePreset::Sunset, 1));
        assert_eq!(store.active(), Some(ThemePreset::Night));
    }

    #[test]
    fn test_refetch_never_overwrites_unsaved_edit() {
        let store = SceneThemeStore::new();
        store.sync_from_fetch(ThemePreset::Sunset, 1);
        store.preview(ThemePreset::Forest);

        assert!(!store.sync_from_fetch(ThemePreset::Sunset, 2));
        assert_eq!(store.active(), Some(ThemePreset::Forest));
        assert_eq!(store.origin(), PresetOrigin::Edited);
    }

    #[test]
    fn test_refetch_replaces_saved_preset() {
        let store = SceneThemeStore::new();
        store.sync_from_fetch(ThemePreset::Sunset, 1);
        store.commit(ThemePreset::Night);

        assert!(store.sync_from_fetch(ThemePreset::Dawn, 2));
        assert_eq!(store.active(), Some(ThemePreset::Dawn));
    }

    #[test]
    fn test_reset_allows_seeding_again() {
        let store = SceneThemeStore::new();
        store.sync_from_fetch(ThemePreset::Sunset, 3);
        store.reset();

        assert!(store.sync_from_fetch(ThemePreset::City, 1));
        assert_eq!(store.active(), Some(ThemePreset::City));
    }
}
