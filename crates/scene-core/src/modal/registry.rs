use std::collections::BTreeSet;
use std::sync::RwLock;

/// Open/close access to named modals.
///
/// Several modals may be open at once; stacking order is a rendering concern.
pub trait ModalCoordinator: Send + Sync {
    fn open(&self, name: &str);

    fn close(&self, name: &str);

    fn is_open(&self, name: &str) -> bool;

    /// Closes every modal. Called on page navigation.
    fn reset(&self);
}

/// In-memory registry of open modal names.
///
/// # Example
///
/// ```
/// use scene_core::modal::{ModalCoordinator, ModalKey, ModalRegistry};
///
/// let modals = ModalRegistry::new();
/// modals.open(ModalKey::Theme.as_ref());
/// assert!(modals.is_open("themeModal"));
/// ```
#[derive(Debug, Default)]
pub struct ModalRegistry {
    open: RwLock<BTreeSet<String>>,
}

impl ModalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the currently open modals, sorted.
    pub fn open_modals(&self) -> Vec<String> {
        let open = self.open.read().unwrap_or_else(|e| e.into_inner());
        open.iter().cloned().collect()
    }
}

impl ModalCoordinator for ModalRegistry {
    fn open(&self, name: &str) {
        let mut open = self.open.write().unwrap_or_else(|e| e.into_inner());
        if open.insert(name.to_string()) {
            tracing::debug!(modal = name, "modal opened");
        }
    }

    fn close(&self, name: &str) {
        let mut open = self.open.write().unwrap_or_else(|e| e.into_inner());
        if open.remove(name) {
            tracing::debug!(modal = name, "modal closed");
        }
    }

    fn is_open(&self, name: &str) -> bool {
        let open = self.open.read().unwrap_or_else(|e| e.into_inner());
        open.contains(name)
    }

    fn reset(&self) {
        let mut open = self.open.write().unwrap_or_else(|e| e.into_inner());
        open.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::ModalKey;

    #[test]
    fn test_open_close() {
        let modals = ModalRegistry::new();
        assert!(!modals.is_open(ModalKey::Login.as_ref()));

        modals.open(ModalKey::Login.as_ref());
        assert!(modals.is_open("loginModal"));

        modals.close(ModalKey::Login.as_ref());
        assert!(!modals.is_open("loginModal"));
    }

    #[test]
    fn test_independent_keys_can_be_open_together() {
        let modals = ModalRegistry::new();
        modals.open(ModalKey::ShareIntro.as_ref());
        modals.open(ModalKey::Theme.as_ref());

        assert_eq!(
            modals.open_modals(),
            vec!["shareIntroModal".to_string(), "themeModal".to_string()]
        );

        modals.reset();
        assert!(modals.open_modals().is_empty());
    }

    #[test]
    fn test_close_unknown_is_noop() {
        let modals = ModalRegistry::new();
        modals.close("neverOpened");
        assert!(modals.open_modals().is_empty());
    }
}
