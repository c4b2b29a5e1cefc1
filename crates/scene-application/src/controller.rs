//! Scene page orchestration.
//!
//! `ScenePageController` reacts to route changes, fetch completion, auth
//! changes and user gestures, and keeps the page-scoped stores (modals,
//! active theme, deletion selection) consistent across them.

use scene_core::auth::AuthStore;
use scene_core::config::ViewerConfig;
use scene_core::deletion::MessageDeletionFlow;
use scene_core::error::{Result, ViewerError};
use scene_core::modal::{ModalCoordinator, ModalKey};
use scene_core::navigation::{Navigator, Route, ShareSheet, share_link};
use scene_core::ownership::Role;
use scene_core::page::{FetchStatus, PageInputs, PageView, ReadyView, derive_page};
use scene_core::query::QueryParams;
use scene_core::scene::{MessageId, SceneApi, SceneIdentifier, ThemePreset};
use scene_core::theme_state::SceneThemeStore;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::RwLock;

use crate::fetch::SceneFetchGateway;
use crate::intake::QueryParamIntakeHandler;
use crate::lifecycle::PageLifecycle;
use crate::theme_sync::ThemeSync;

/// Collaborators injected into the page. Each one lives as long as the page.
#[derive(Clone)]
pub struct PageContext {
    pub config: Arc<ViewerConfig>,
    pub auth: Arc<dyn AuthStore>,
    pub modals: Arc<dyn ModalCoordinator>,
    pub navigator: Arc<dyn Navigator>,
    pub share: Arc<dyn ShareSheet>,
    pub theme: Arc<SceneThemeStore>,
}

/// Result of the primary button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimaryAction {
    /// Owner: the scene link was handed to the share sheet.
    Shared { link: String },
    /// Guest: navigated to the message composer.
    ComposeMessage { route: Route },
}

#[derive(Debug)]
struct PageState {
    scene: Option<SceneIdentifier>,
    query: QueryParams,
    fetch: FetchStatus,
    view: PageView,
    /// The error redirect is issued once per mount.
    redirected: bool,
}

impl PageState {
    fn new(scene: Option<SceneIdentifier>, query: QueryParams) -> Self {
        let fetch = if scene.is_some() {
            FetchStatus::Pending
        } else {
            FetchStatus::Disabled
        };
        Self {
            scene,
            query,
            fetch,
            view: PageView::Empty,
            redirected: false,
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(None, QueryParams::new())
    }
}

pub struct ScenePageController {
    ctx: PageContext,
    api: Arc<dyn SceneApi>,
    fetch_gateway: Arc<SceneFetchGateway>,
    theme_sync: ThemeSync,
    intake: QueryParamIntakeHandler,
    deletion: Mutex<MessageDeletionFlow>,
    state: RwLock<PageState>,
    lifecycle: Arc<PageLifecycle>,
}

impl ScenePageController {
    pub fn new(ctx: PageContext, api: Arc<dyn SceneApi>) -> Self {
        let fetch_gateway = Arc::new(SceneFetchGateway::new(api.clone()));
        Self::with_fetch_gateway(ctx, api, fetch_gateway)
    }

    /// Uses a shared fetch cache, so remounting a scene does not refetch it.
    pub fn with_fetch_gateway(
        ctx: PageContext,
        api: Arc<dyn SceneApi>,
        fetch_gateway: Arc<SceneFetchGateway>,
    ) -> Self {
        let theme_sync = ThemeSync::new(api.clone(), ctx.theme.clone());
        Self {
            ctx,
            api,
            fetch_gateway,
            theme_sync,
            intake: QueryParamIntakeHandler::new(),
            deletion: Mutex::new(MessageDeletionFlow::new()),
            state: RwLock::new(PageState::default()),
            lifecycle: PageLifecycle::new(),
        }
    }

    // ============================================================================
    // Lifecycle
    // ============================================================================

    /// Mounts the page for `route_param` and waits for the scene read.
    ///
    /// Without an identifier the page renders nothing and no read is issued.
    /// Mounting a different identifier than the current one discards the
    /// previous scene's modals, selection and active theme.
    pub async fn mount(&self, route_param: Option<&str>, query: QueryParams) -> PageView {
        let scene = SceneIdentifier::from_route_param(route_param);
        let token = self.lifecycle.begin();
        {
            let mut state = self.state.write().await;
            if state.scene != scene {
                self.clear_transient_state();
            }
            *state = PageState::new(scene.clone(), query);
        }

        if scene.is_none() {
            tracing::debug!("[ScenePage] no scene identifier, rendering nothing");
            return self.reconcile().await;
        }

        let status = self.fetch_gateway.fetch(scene.as_ref()).await;
        if !token.is_current() {
            tracing::debug!("[ScenePage] scene read finished after teardown, ignoring");
            return self.view().await;
        }
        self.state.write().await.fetch = status;
        self.reconcile().await
    }

    /// Handles a navigation event.
    ///
    /// A different identifier discards the page's transient state and mounts
    /// again; the same identifier only re-evaluates the query.
    pub async fn on_route_changed(&self, route_param: Option<&str>, query: QueryParams) -> PageView {
        let next = SceneIdentifier::from_route_param(route_param);
        let same_scene = self.lifecycle.is_mounted() && self.state.read().await.scene == next;
        if same_scene {
            return self.on_query_changed(query).await;
        }

        self.mount(route_param, query).await
    }

    /// Tears the page down. Completions of reads or writes started before
    /// this call no longer mutate page state.
    pub async fn unmount(&self) {
        self.lifecycle.end();
        self.clear_transient_state();
        *self.state.write().await = PageState::default();
        tracing::debug!("[ScenePage] unmounted");
    }

    fn clear_transient_state(&self) {
        self.ctx.modals.reset();
        self.deletion().clear();
        self.ctx.theme.reset();
    }

    // ============================================================================
    // Re-evaluation
    // ============================================================================

    pub async fn on_query_changed(&self, query: QueryParams) -> PageView {
        self.state.write().await.query = query;
        self.reconcile().await
    }

    pub async fn on_auth_changed(&self) -> PageView {
        self.reconcile().await
    }

    /// Reads the current scene again and re-evaluates the page.
    pub async fn refetch(&self) -> PageView {
        let token = self.lifecycle.current();
        let scene = self.state.read().await.scene.clone();
        if scene.is_none() {
            return self.view().await;
        }

        let status = self.fetch_gateway.refetch(scene.as_ref()).await;
        if !token.is_current() {
            return self.view().await;
        }
        self.state.write().await.fetch = status;
        self.reconcile().await
    }

    /// Recomputes the page from one snapshot of {fetch result, auth, query}.
    ///
    /// Seeds the active theme, issues the error redirect, and runs the query
    /// intake. Idempotent for unchanged inputs.
    pub async fn reconcile(&self) -> PageView {
        if !self.lifecycle.is_mounted() {
            return PageView::Empty;
        }

        let auth = self.ctx.auth.snapshot();
        let mut state = self.state.write().await;
        if state.fetch == FetchStatus::Pending {
            state.fetch = self.fetch_gateway.status(state.scene.as_ref()).await;
        }
        let derived = derive_page(PageInputs {
            scene: state.scene.as_ref(),
            fetch: &state.fetch,
            auth: &auth,
        });

        if let Some(seed) = derived.seed {
            self.theme_sync.seed(seed);
        }

        match &derived.view {
            PageView::Failed => {
                if !state.redirected {
                    state.redirected = true;
                    tracing::warn!("[ScenePage] scene read failed, redirecting");
                    self.ctx.navigator.navigate(&Route::ServerError);
                }
            }
            PageView::Ready(view) => {
                self.intake.evaluate(
                    &mut state.query,
                    &auth,
                    self.ctx.navigator.as_ref(),
                    self.ctx.modals.as_ref(),
                );
                if !view.role.is_owner() {
                    self.ctx.modals.close(ModalKey::Theme.as_ref());
                }
            }
            PageView::Empty | PageView::Loading => {}
        }

        if state.view.is_owner() != derived.view.is_owner() {
            tracing::debug!(is_owner = derived.view.is_owner(), "ownership changed");
        }
        state.view = derived.view.clone();
        derived.view
    }

    // ============================================================================
    // Read access
    // ============================================================================

    pub async fn view(&self) -> PageView {
        self.state.read().await.view.clone()
    }

    pub async fn is_owner(&self) -> bool {
        self.state.read().await.view.is_owner()
    }

    pub async fn query(&self) -> QueryParams {
        self.state.read().await.query.clone()
    }

    pub fn active_theme(&self) -> Option<ThemePreset> {
        self.ctx.theme.active()
    }

    pub fn pending_deletion(&self) -> Option<MessageId> {
        self.deletion().pending()
    }

    pub fn fetch_gateway(&self) -> &Arc<SceneFetchGateway> {
        &self.fetch_gateway
    }

    // ============================================================================
    // Gestures
    // ============================================================================

    /// Opens the theme editor. Only available to the owner.
    pub async fn open_theme_editor(&self) -> Result<()> {
        match self.ready_view().await {
            Some(view) if view.theme_editor_available() => {
                self.ctx.modals.open(ModalKey::Theme.as_ref());
                Ok(())
            }
            _ => Err(ViewerError::not_permitted(
                "the theme editor is only available to the scene owner",
            )),
        }
    }

    /// Shows `preset` without saving it.
    pub async fn preview_theme(&self, preset: ThemePreset) -> Result<()> {
        let view = self.require_ready().await?;
        self.theme_sync.preview(&view, preset)
    }

    /// Saves `preset` from the theme editor.
    ///
    /// On success the editor closes. On failure it stays open and the error is
    /// returned for the editor to display.
    pub async fn save_theme(&self, preset: ThemePreset) -> Result<()> {
        let view = self.require_ready().await?;
        let token = self.lifecycle.current();
        self.theme_sync.apply_theme(&view, preset, &token).await?;
        if token.is_current() {
            self.ctx.modals.close(ModalKey::Theme.as_ref());
        }
        Ok(())
    }

    /// Primary button: owners share the scene, guests go leave a message.
    ///
    /// Returns `None` when the page renders nothing.
    pub async fn primary_action(&self) -> Option<PrimaryAction> {
        let (scene, role) = {
            let state = self.state.read().await;
            let role = match &state.view {
                PageView::Ready(view) => view.role,
                PageView::Loading => Role::Guest,
                PageView::Empty | PageView::Failed => return None,
            };
            (state.scene.clone()?, role)
        };

        match role {
            Role::Owner => {
                let link = share_link(&self.ctx.config, &scene);
                self.ctx.share.share(&link);
                Some(PrimaryAction::Shared { link })
            }
            Role::Guest => {
                let route = Route::ComposeMessage { scene };
                self.ctx.navigator.navigate(&route);
                Some(PrimaryAction::ComposeMessage { route })
            }
        }
    }

    /// Selects a message for deletion and opens the confirmation modal.
    pub async fn long_press_message(&self, message_id: MessageId) {
        if self.state.read().await.scene.is_none() {
            return;
        }
        self.deletion()
            .long_press(message_id, self.ctx.modals.as_ref());
    }

    /// Confirms the pending deletion and issues exactly one delete write.
    ///
    /// Returns the deleted id, or `None` when nothing was selected. The write
    /// result is only logged; refreshing the message list is up to the list.
    pub async fn confirm_message_delete(&self) -> Option<MessageId> {
        let message_id = self.deletion().confirm(self.ctx.modals.as_ref())?;
        let scene = self.state.read().await.scene.clone()?;

        if let Err(e) = self.api.delete_message(&scene, message_id).await {
            tracing::warn!(scene = %scene, message_id, error = %e, "[ScenePage] message delete failed");
        }
        Some(message_id)
    }

    pub fn cancel_message_delete(&self) {
        self.deletion().cancel(self.ctx.modals.as_ref());
    }

    /// Onboarding confirmed: hand over to the login modal.
    pub fn confirm_share_intro(&self) {
        self.ctx.modals.close(ModalKey::ShareIntro.as_ref());
        self.ctx.modals.open(ModalKey::Login.as_ref());
    }

    // ============================================================================
    // Helpers
    // ============================================================================

    async fn ready_view(&self) -> Option<ReadyView> {
        self.state.read().await.view.ready().cloned()
    }

    async fn require_ready(&self) -> Result<ReadyView> {
        self.ready_view()
            .await
            .ok_or_else(|| ViewerError::not_permitted("the scene is not loaded"))
    }

    fn deletion(&self) -> MutexGuard<'_, MessageDeletionFlow> {
        self.deletion.lock().unwrap_or_else(|e| e.into_inner())
    }
}
