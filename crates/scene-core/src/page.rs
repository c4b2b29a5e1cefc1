//! Pure derivation of the scene page from its inputs.
//!
//! The controller calls [`derive_page`] on every input change (route, fetch
//! completion, auth change) with one consistent snapshot of all inputs.

use std::sync::Arc;

use crate::auth::AuthState;
use crate::error::ViewerError;
use crate::ownership::{Role, resolve_role};
use crate::scene::{SceneIdentifier, SceneRecord, ThemePreset};

/// State of the scene read for one identifier.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchStatus {
    /// No identifier: the read is never issued.
    #[default]
    Disabled,
    Pending,
    Success {
        record: Arc<SceneRecord>,
        /// Monotonic counter of completed reads, used to apply each result once.
        revision: u64,
    },
    /// Terminal; not retried automatically.
    Error(ViewerError),
}

impl FetchStatus {
    pub fn record(&self) -> Option<&SceneRecord> {
        match self {
            FetchStatus::Success { record, .. } => Some(record),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchStatus::Success { .. })
    }
}

/// Everything the page derivation depends on.
#[derive(Debug, Clone, Copy)]
pub struct PageInputs<'a> {
    pub scene: Option<&'a SceneIdentifier>,
    pub fetch: &'a FetchStatus,
    pub auth: &'a AuthState,
}

/// What the delegate UI renders.
#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    /// Missing identifier: render nothing, not an error.
    Empty,
    Loading,
    /// Read failed: redirect to the error destination and render nothing.
    Failed,
    Ready(ReadyView),
}

impl PageView {
    pub fn ready(&self) -> Option<&ReadyView> {
        match self {
            PageView::Ready(view) => Some(view),
            _ => None,
        }
    }

    pub fn is_owner(&self) -> bool {
        self.ready().is_some_and(|view| view.role.is_owner())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReadyView {
    pub scene: SceneIdentifier,
    pub record: Arc<SceneRecord>,
    pub role: Role,
}

impl ReadyView {
    /// The theme editor button is only offered to owners.
    pub fn theme_editor_available(&self) -> bool {
        self.role.is_owner()
    }
}

/// A fetched preset to mirror into the theme store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeSeed {
    pub preset: ThemePreset,
    pub revision: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageDerivation {
    pub view: PageView,
    pub seed: Option<ThemeSeed>,
}

pub fn derive_page(inputs: PageInputs<'_>) -> PageDerivation {
    let Some(scene) = inputs.scene else {
        return PageDerivation {
            view: PageView::Empty,
            seed: None,
        };
    };

    match inputs.fetch {
        FetchStatus::Disabled | FetchStatus::Pending => PageDerivation {
            view: PageView::Loading,
            seed: None,
        },
        FetchStatus::Error(_) => PageDerivation {
            view: PageView::Failed,
            seed: None,
        },
        FetchStatus::Success { record, revision } => PageDerivation {
            view: PageView::Ready(ReadyView {
                scene: scene.clone(),
                record: Arc::clone(record),
                role: resolve_role(inputs.auth, Some(record)),
            }),
            seed: Some(ThemeSeed {
                preset: record.theme,
                revision: *revision,
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthUser;

    fn scene() -> SceneIdentifier {
        SceneIdentifier::from_route_param(Some("abc123")).unwrap()
    }

    fn success() -> FetchStatus {
        FetchStatus::Success {
            record: Arc::new(SceneRecord::new(1, "u1", ThemePreset::Sunset)),
            revision: 1,
        }
    }

    #[test]
    fn test_missing_identifier_renders_nothing() {
        let derived = derive_page(PageInputs {
            scene: None,
            fetch: &success(),
            auth: &AuthState::anonymous(),
        });
        assert_eq!(derived.view, PageView::Empty);
        assert_eq!(derived.seed, None);
    }

    #[test]
    fn test_pending_is_loading_and_not_owner() {
        let scene = scene();
        let derived = derive_page(PageInputs {
            scene: Some(&scene),
            fetch: &FetchStatus::Pending,
            auth: &AuthState::signed_in(AuthUser::new("u1")),
        });
        assert_eq!(derived.view, PageView::Loading);
        assert!(!derived.view.is_owner());
    }

    #[test]
    fn test_error_fails_page() {
        let scene = scene();
        let derived = derive_page(PageInputs {
            scene: Some(&scene),
            fetch: &FetchStatus::Error(ViewerError::load_failure("abc123", "boom")),
            auth: &AuthState::anonymous(),
        });
        assert_eq!(derived.view, PageView::Failed);
    }

    #[test]
    fn test_success_owner_and_seed() {
        let scene = scene();
        let derived = derive_page(PageInputs {
            scene: Some(&scene),
            fetch: &success(),
            auth: &AuthState::signed_in(AuthUser::new("u1")),
        });
        let view = derived.view.ready().unwrap();
        assert_eq!(view.role, Role::Owner);
        assert!(view.theme_editor_available());
        assert_eq!(
            derived.seed,
            Some(ThemeSeed {
                preset: ThemePreset::Sunset,
                revision: 1
            })
        );
    }

    #[test]
    fn test_success_guest_has_no_theme_editor() {
        let scene = scene();
        let derived = derive_page(PageInputs {
            scene: Some(&scene),
            fetch: &success(),
            auth: &AuthState::signed_in(AuthUser::new("u2")),
        });
        let view = derived.view.ready().unwrap();
        assert_eq!(view.role, Role::Guest);
        assert!(!view.theme_editor_available());
    }
}
