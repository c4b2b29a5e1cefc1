//! Long-press message deletion flow.
//!
//! ```text
//! Idle --long_press(id)--> Selected(id) --open modal--> Confirming(id)
//! Confirming(id) --confirm--> Idle   (yields id for exactly one delete write)
//! Confirming(id) --cancel---> Idle   (no write)
//! ```

use serde::{Deserialize, Serialize};

use crate::modal::{ModalCoordinator, ModalKey};
use crate::scene::MessageId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "message_id", rename_all = "snake_case")]
pub enum DeletionState {
    #[default]
    Idle,
    Selected(MessageId),
    Confirming(MessageId),
}

impl DeletionState {
    pub fn pending(self) -> Option<MessageId> {
        match self {
            DeletionState::Idle => None,
            DeletionState::Selected(id) | DeletionState::Confirming(id) => Some(id),
        }
    }
}

/// Holds the message selected for deletion between the long-press and the
/// confirm/cancel of the deletion modal.
///
/// Only the deletion modal's confirm and cancel handlers clear the selection.
#[derive(Debug, Default)]
pub struct MessageDeletionFlow {
    state: DeletionState,
}

impl MessageDeletionFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DeletionState {
        self.state
    }

    pub fn pending(&self) -> Option<MessageId> {
        self.state.pending()
    }

    /// Selects `message_id` without opening the modal.
    ///
    /// A new long-press replaces any earlier selection.
    pub fn select(&mut self, message_id: MessageId) {
        self.state = DeletionState::Selected(message_id);
    }

    /// Selects `message_id` and opens the deletion modal.
    pub fn long_press(&mut self, message_id: MessageId, modals: &dyn ModalCoordinator) {
        self.select(message_id);
        modals.open(ModalKey::MessageDelete.as_ref());
        self.state = DeletionState::Confirming(message_id);
        tracing::debug!(message_id, "message selected for deletion");
    }

    /// Confirms the deletion.
    ///
    /// Returns the id the caller must delete, exactly once. With nothing
    /// selected this is a no-op returning `None`; the modal is left as is.
    pub fn confirm(&mut self, modals: &dyn ModalCoordinator) -> Option<MessageId> {
        let message_id = self.state.pending()?;
        self.state = DeletionState::Idle;
        modals.close(ModalKey::MessageDelete.as_ref());
        Some(message_id)
    }

    /// Cancels or dismisses the deletion modal. Never issues a write.
    pub fn cancel(&mut self, modals: &dyn ModalCoordinator) {
        self.state = DeletionState::Idle;
        modals.close(ModalKey::MessageDelete.as_ref());
    }

    /// Drops the selection without touching modals (page teardown).
    pub fn clear(&mut self) {
        self.state = DeletionState::Idle;
    }
}
