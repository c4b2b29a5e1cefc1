//! Authentication state as seen by the scene page.
//!
//! The page only reads this state. Login and session storage belong to an
//! external session store which implements [`AuthStore`].

use serde::{Deserialize, Serialize};

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Identity compared against a scene's `owner_social_id`.
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

impl AuthUser {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            nickname: None,
        }
    }

    pub fn identity(&self) -> &str {
        &self.email
    }
}

/// Snapshot of the process-wide authentication state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub current_user: Option<AuthUser>,
    pub is_authenticated: bool,
}

impl AuthState {
    /// An unauthenticated visitor.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// An authenticated visitor with the given identity.
    pub fn signed_in(user: AuthUser) -> Self {
        Self {
            current_user: Some(user),
            is_authenticated: true,
        }
    }

    /// Identity of the visitor, only when the session is authenticated.
    pub fn authenticated_identity(&self) -> Option<&str> {
        if !self.is_authenticated {
            return None;
        }
        self.current_user.as_ref().map(AuthUser::identity)
    }
}

/// Read access to the session store.
///
/// Implementations must return a consistent snapshot; the page re-reads it on
/// every re-evaluation instead of caching it.
pub trait AuthStore: Send + Sync {
    fn snapshot(&self) -> AuthState;
}

/// Store that always reports an anonymous visitor.
///
/// # Example
///
/// ```
/// use scene_core::auth::{AnonymousAuthStore, AuthStore};
///
/// let store = AnonymousAuthStore;
/// assert!(!store.snapshot().is_authenticated);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnonymousAuthStore;

impl AuthStore for AnonymousAuthStore {
    fn snapshot(&self) -> AuthState {
        AuthState::anonymous()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_requires_authentication() {
        let stale = AuthState {
            current_user: Some(AuthUser::new("u1")),
            is_authenticated: false,
        };
        assert_eq!(stale.authenticated_identity(), None);

        let live = AuthState::signed_in(AuthUser::new("u1"));
        assert_eq!(live.authenticated_identity(), Some("u1"));
    }
}
