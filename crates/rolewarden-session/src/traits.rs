//! Capabilities the correction layer needs from the session engine.
//!
//! Rolewarden doesn't own players; the game engine does. These traits
//! are the narrow seams through which the resolver and the validator
//! read and mutate engine state. Each component asks only for the
//! capabilities it uses, so a test double can implement just those.
//!
//! All methods are synchronous: the engine applies them on its own
//! thread and they are expected to complete immediately. `Send + Sync`
//! because delayed corrections run on Tokio worker tasks.

use rolewarden_roles::{PlayerId, RoleId, Vector3};

use crate::{Participant, SessionError};

/// Read access to the participant registry.
pub trait ParticipantRegistry: Send + Sync + 'static {
    /// Snapshot of all participants, in registration (join) order.
    fn participants(&self) -> Vec<Participant>;

    /// Snapshot of a single participant, `None` if they are gone.
    fn participant(&self, id: PlayerId) -> Option<Participant> {
        self.participants().into_iter().find(|p| p.id == id)
    }
}

/// Changes a participant's role.
pub trait RoleAssigner: Send + Sync + 'static {
    fn set_role(&self, id: PlayerId, role: RoleId) -> Result<(), SessionError>;
}

/// Overrides a participant's position and orientation.
pub trait PositionOverride: Send + Sync + 'static {
    fn override_position(
        &self,
        id: PlayerId,
        position: Vector3,
        rotation: Vector3,
    ) -> Result<(), SessionError>;
}

/// Delivers a short on-screen message to a participant.
pub trait HintSink: Send + Sync + 'static {
    fn send_hint(&self, id: PlayerId, message: &str) -> Result<(), SessionError>;
}
