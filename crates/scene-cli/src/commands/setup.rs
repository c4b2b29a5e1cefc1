use anyhow::{Context, Result};
use scene_application::{PageContext, ScenePageController};
use scene_core::auth::AuthUser;
use scene_core::config::ViewerConfig;
use scene_core::modal::ModalRegistry;
use scene_core::navigation::ShareSheet;
use scene_core::theme_state::SceneThemeStore;
use scene_infrastructure::{BrowserHistory, HttpSceneApi, InMemoryAuthStore, config_loader};
use std::path::Path;
use std::sync::Arc;

/// Prints share links instead of opening a share sheet.
struct ConsoleShareSheet;

impl ShareSheet for ConsoleShareSheet {
    fn share(&self, link: &str) {
        println!("share: {link}");
    }
}

/// Wiring shared by every command.
pub struct PageSetup {
    pub config: Arc<ViewerConfig>,
    pub auth: InMemoryAuthStore,
    pub api: Arc<HttpSceneApi>,
}

impl PageSetup {
    pub fn new(config_path: Option<&Path>, user: Option<String>) -> Result<Self> {
        let config = config_loader::load(config_path).context("Failed to load viewer config")?;
        let api = HttpSceneApi::from_config(&config).context("Failed to create scene API client")?;
        let auth = match user {
            Some(email) => InMemoryAuthStore::with_user(AuthUser::new(email)),
            None => InMemoryAuthStore::new(),
        };
        Ok(Self {
            config: Arc::new(config),
            auth,
            api: Arc::new(api),
        })
    }

    /// Builds a controller whose history starts at the scene page.
    pub fn controller(&self, scene: &str, query: &str) -> (ScenePageController, BrowserHistory, Arc<ModalRegistry>) {
        let location = if query.is_empty() {
            format!("{}/{}", self.config.scene_route, scene)
        } else {
            format!("{}/{}?{}", self.config.scene_route, scene, query)
        };
        let history = BrowserHistory::new(self.config.clone(), &location);
        let modals = Arc::new(ModalRegistry::new());
        let ctx = PageContext {
            config: self.config.clone(),
            auth: Arc::new(self.auth.clone()),
            modals: modals.clone(),
            navigator: Arc::new(history.clone()),
            share: Arc::new(ConsoleShareSheet),
            theme: Arc::new(SceneThemeStore::new()),
        };
        (ScenePageController::new(ctx, self.api.clone()), history, modals)
    }
}
