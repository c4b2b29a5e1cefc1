//! Application layer for the scene viewer.
//!
//! Use cases that coordinate the domain types in `scene-core` with injected
//! collaborators: cached scene reads, theme writes, query flag intake, and
//! the page controller that ties them together.

pub mod controller;
pub mod fetch;
pub mod intake;
pub mod lifecycle;
pub mod theme_sync;

pub use controller::{PageContext, PrimaryAction, ScenePageController};
pub use fetch::SceneFetchGateway;
pub use intake::{IntakeOutcome, QueryParamIntakeHandler};
pub use theme_sync::ThemeSync;
