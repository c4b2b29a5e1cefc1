//! Outbound navigation and share ports.

use crate::config::ViewerConfig;
use crate::query::QueryParams;
use crate::scene::SceneIdentifier;

/// Destinations the scene page can navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Generic failure page, used when the scene read fails.
    ServerError,
    /// Message composition page for guests, carrying the scene id.
    ComposeMessage { scene: SceneIdentifier },
}

impl Route {
    /// Resolves the route to a path using the configured destinations.
    pub fn to_path(&self, config: &ViewerConfig) -> String {
        match self {
            Route::ServerError => config.error_route.clone(),
            Route::ComposeMessage { scene } => {
                let mut query = QueryParams::new();
                query.set("id", scene.as_str());
                format!("{}?{}", config.compose_route, query)
            }
        }
    }
}

/// Public link to a scene page.
pub fn share_link(config: &ViewerConfig, scene: &SceneIdentifier) -> String {
    format!(
        "{}{}/{}",
        config.share_base_url.trim_end_matches('/'),
        config.scene_route,
        scene
    )
}

/// Router port.
pub trait Navigator: Send + Sync {
    /// Pushes a new history entry.
    fn navigate(&self, route: &Route);

    /// Rewrites the current URL's query without adding a history entry.
    fn replace_query(&self, query: &QueryParams);
}

/// Share-sheet / clipboard port used by owners.
pub trait ShareSheet: Send + Sync {
    fn share(&self, link: &str);
}
