//! In-memory browser history.

use scene_core::config::ViewerConfig;
use scene_core::navigation::{Navigator, Route};
use scene_core::query::QueryParams;
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub path: String,
    pub query: String,
}

impl HistoryEntry {
    /// Splits `location` at the first `?`.
    pub fn parse(location: &str) -> Self {
        match location.split_once('?') {
            Some((path, query)) => Self {
                path: path.to_string(),
                query: query.to_string(),
            },
            None => Self {
                path: location.to_string(),
                query: String::new(),
            },
        }
    }

    pub fn location(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query)
        }
    }
}

/// Back stack of visited locations. `navigate` pushes; `replace_query`
/// rewrites the top entry in place.
#[derive(Debug, Clone)]
pub struct BrowserHistory {
    config: Arc<ViewerConfig>,
    entries: Arc<RwLock<Vec<HistoryEntry>>>,
}

impl BrowserHistory {
    pub fn new(config: Arc<ViewerConfig>, initial_location: &str) -> Self {
        Self {
            config,
            entries: Arc::new(RwLock::new(vec![HistoryEntry::parse(initial_location)])),
        }
    }

    pub fn current(&self) -> Option<HistoryEntry> {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }

    pub fn current_query(&self) -> QueryParams {
        self.current()
            .map(|entry| QueryParams::parse(&entry.query))
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Navigator for BrowserHistory {
    fn navigate(&self, route: &Route) {
        let location = route.to_path(&self.config);
        tracing::info!(%location, "navigating");
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(HistoryEntry::parse(&location));
    }

    fn replace_query(&self, query: &QueryParams) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        if let Some(top) = entries.last_mut() {
            top.query = query.to_string();
            tracing::debug!(location = %top.location(), "query replaced");
        }
    }
}
