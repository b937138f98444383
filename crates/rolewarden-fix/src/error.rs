//! Error types for the role spawn fixes.

use rolewarden_events::DispatchError;

/// Errors raised while configuring or attaching the fixes.
///
/// None of these reach the event dispatcher: [`RoleSpawnFix`] logs them
/// and stays inactive.
///
/// [`RoleSpawnFix`]: crate::RoleSpawnFix
#[derive(Debug, thiserror::Error)]
pub enum FixError {
    /// The configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The dispatcher refused to attach or detach a handler.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// Delayed reactions need a Tokio runtime to run on.
    #[error("no Tokio runtime available to schedule delayed fixes")]
    NoRuntime,

    /// `attach` was called twice.
    #[error("role spawn handlers are already attached")]
    AlreadyAttached,

    /// `detach` was called without a prior `attach`.
    #[error("role spawn handlers are not attached")]
    NotAttached,
}
