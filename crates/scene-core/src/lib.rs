//! Domain layer of the scene viewer.
//!
//! Types, pure derivations and collaborator traits for the scene page. This
//! crate performs no I/O.

pub mod auth;
pub mod config;
pub mod deletion;
pub mod error;
pub mod modal;
pub mod navigation;
pub mod ownership;
pub mod page;
pub mod query;
pub mod scene;
pub mod theme_state;

// Re-export common error type
pub use error::{Result, ViewerError};
