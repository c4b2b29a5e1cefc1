//! Page-scoped modal coordination.
//!
//! # Module Structure
//!
//! - `key`: named modals used by the scene page
//! - `registry`: coordinator trait and the in-memory registry

mod key;
mod registry;

pub use key::ModalKey;
pub use registry::{ModalCoordinator, ModalRegistry};
