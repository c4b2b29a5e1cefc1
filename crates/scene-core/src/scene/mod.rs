//! Scene domain module.
//!
//! # Module Structure
//!
//! - `model`: identifier and record types
//! - `theme`: environment preset catalogue
//! - `api`: resource operations trait

mod api;
mod model;
mod theme;

pub use api::SceneApi;
pub use model::{MessageId, SceneIdentifier, SceneRecord};
pub use theme::ThemePreset;
