//! Error types for the session layer.

use rolewarden_roles::PlayerId;

/// Errors raised by session-engine capabilities.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// No participant with this id is registered.
    /// Usually the player left between the snapshot and the mutation.
    #[error("participant {0} not found")]
    NotFound(PlayerId),

    /// A participant with this id is already registered.
    #[error("participant {0} already joined")]
    AlreadyJoined(PlayerId),
}
