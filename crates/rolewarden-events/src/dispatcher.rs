//! The dispatcher seam consumers attach to.

use std::sync::Arc;

use crate::{DispatchError, RoleChanged, RoundState};

/// Callback for round state changes.
pub type RoundStateHandler = Arc<dyn Fn(RoundState) + Send + Sync>;

/// Callback for role changes.
pub type RoleChangedHandler = Arc<dyn Fn(&RoleChanged) + Send + Sync>;

/// Something that raises session events and lets consumers attach to
/// them by name.
///
/// Handlers are invoked synchronously on the engine's event thread and
/// should return quickly; anything slow or delayed belongs in a task
/// the handler spawns.
pub trait EventDispatcher: Send + Sync {
    /// Attaches a round state handler under `name`.
    ///
    /// # Errors
    /// [`DispatchError::DuplicateHandler`] if `name` is taken,
    /// [`DispatchError::Closed`] if the dispatcher is shutting down.
    fn add_round_state_handler(
        &self,
        name: &str,
        handler: RoundStateHandler,
    ) -> Result<(), DispatchError>;

    /// Detaches the round state handler registered under `name`.
    fn remove_round_state_handler(&self, name: &str) -> Result<(), DispatchError>;

    /// Attaches a role changed handler under `name`.
    fn add_role_changed_handler(
        &self,
        name: &str,
        handler: RoleChangedHandler,
    ) -> Result<(), DispatchError>;

    /// Detaches the role changed handler registered under `name`.
    fn remove_role_changed_handler(&self, name: &str) -> Result<(), DispatchError>;
}
