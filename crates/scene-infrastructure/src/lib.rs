//! Adapters for the scene viewer: HTTP scene API, configuration loading,
//! and in-memory session and history stores.

pub mod config_loader;
pub mod dto;
pub mod history;
pub mod http_scene_api;
pub mod session_store;

pub use crate::history::BrowserHistory;
pub use crate::http_scene_api::HttpSceneApi;
pub use crate::session_store::InMemoryAuthStore;
