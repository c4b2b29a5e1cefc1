//! Owner / guest derivation.
//!
//! Ownership is advisory UI state. It gates which actions are offered; the
//! server authorizes every write independently.

use serde::{Deserialize, Serialize};

use crate::auth::AuthState;
use crate::scene::SceneRecord;

/// How the page treats the current visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Owner,
    #[default]
    Guest,
}

impl Role {
    pub fn is_owner(self) -> bool {
        matches!(self, Role::Owner)
    }
}

/// Returns `true` iff the visitor is authenticated and their identity equals
/// the record's owner identity.
///
/// A record that has not loaded yet always yields `false`. An empty owner id
/// never matches.
pub fn resolve_ownership(auth: &AuthState, record: Option<&SceneRecord>) -> bool {
    let Some(record) = record else {
        return false;
    };
    if record.owner_social_id.is_empty() {
        return false;
    }
    auth.authenticated_identity() == Some(record.owner_social_id.as_str())
}

/// Same derivation, expressed as a [`Role`].
pub fn resolve_role(auth: &AuthState, record: Option<&SceneRecord>) -> Role {
    if resolve_ownership(auth, record) {
        Role::Owner
    } else {
        Role::Guest
    }
}
