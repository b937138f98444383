//! Unified error type for Rolewarden.

use rolewarden_events::DispatchError;
use rolewarden_fix::FixError;
use rolewarden_session::SessionError;

/// Top-level error that wraps all crate-specific errors.
///
/// Hosts using the `rolewarden` facade deal with this single type; `?`
/// converts the sub-crate errors through the `#[from]` impls.
#[derive(Debug, thiserror::Error)]
pub enum RolewardenError {
    /// A session-engine capability failed (unknown participant, rejected update).
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Attaching or detaching a handler failed.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// Configuration or lifecycle of the fixes failed.
    #[error(transparent)]
    Fix(#[from] FixError),
}

#[cfg(test)]
mod tests {
    use rolewarden_roles::PlayerId;

    use super::*;

    #[test]
    fn test_from_session_error() {
        let err = SessionError::NotFound(PlayerId(3));
        let top: RolewardenError = err.into();
        assert!(matches!(top, RolewardenError::Session(_)));
        assert!(top.to_string().contains("P-3"));
    }

    #[test]
    fn test_from_dispatch_error() {
        let err = DispatchError::Closed;
        let top: RolewardenError = err.into();
        assert!(matches!(top, RolewardenError::Dispatch(_)));
    }

    #[test]
    fn test_from_fix_error() {
        let err = FixError::NoRuntime;
        let top: RolewardenError = err.into();
        assert!(matches!(top, RolewardenError::Fix(_)));
        assert!(top.to_string().contains("Tokio runtime"));
    }
}
