//! In-memory session store.

use scene_core::auth::{AuthState, AuthStore, AuthUser};
use std::sync::{Arc, RwLock};

/// Process-wide auth state held in memory.
///
/// Cloning shares the same underlying state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuthStore {
    state: Arc<RwLock<AuthState>>,
}

impl InMemoryAuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(user: AuthUser) -> Self {
        let store = Self::new();
        store.sign_in(user);
        store
    }

    pub fn sign_in(&self, user: AuthUser) {
        tracing::debug!(user = %user.email, "signed in");
        *self.state.write().unwrap_or_else(|e| e.into_inner()) = AuthState::signed_in(user);
    }

    pub fn sign_out(&self) {
        *self.state.write().unwrap_or_else(|e| e.into_inner()) = AuthState::anonymous();
    }
}

impl AuthStore for InMemoryAuthStore {
    fn snapshot(&self) -> AuthState {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_and_out() {
        let store = InMemoryAuthStore::new();
        assert!(!store.snapshot().is_authenticated);

        store.sign_in(AuthUser::new("u1"));
        assert_eq!(store.snapshot().authenticated_identity(), Some("u1"));

        store.sign_out();
        assert_eq!(store.snapshot(), AuthState::anonymous());
    }

    #[test]
    fn test_clones_share_state() {
        let store = InMemoryAuthStore::new();
        let view = store.clone();
        store.sign_in(AuthUser::new("u1"));
        assert!(view.snapshot().is_authenticated);
    }
}
