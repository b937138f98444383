//! Participant snapshots.
//!
//! A [`Participant`] is a *copy* of what the engine knows about a player
//! at one instant. The correction layer never holds on to one across
//! invocations. It re-reads the registry whenever it needs fresh state.

use rolewarden_roles::{PlayerId, Role, RoleId, Vector3};

// ---------------------------------------------------------------------------
// ClientMode
// ---------------------------------------------------------------------------

/// Connection readiness of a participant.
///
/// ```text
///   Unverified ──(handshake done)──→ ReadyClient
/// ```
///
/// `Host` and `Dedicated` are the server's own player objects. They are
/// listed by the engine but are never real players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClientMode {
    /// Connected but not yet verified.
    #[default]
    Unverified,
    /// Fully connected, authenticated client.
    ReadyClient,
    /// The listen-server host.
    Host,
    /// The dedicated server's own placeholder.
    Dedicated,
}

impl ClientMode {
    /// Returns `true` only for fully connected clients.
    pub fn is_ready(self) -> bool {
        matches!(self, Self::ReadyClient)
    }
}

// ---------------------------------------------------------------------------
// Participant
// ---------------------------------------------------------------------------

/// A snapshot of one participant.
#[derive(Debug, Clone)]
pub struct Participant {
    pub id: PlayerId,
    /// The role object currently attached, if any.
    pub role: Option<Role>,
    pub position: Vector3,
    pub rotation: Vector3,
    pub mode: ClientMode,
}

impl Participant {
    /// A ready participant at the origin without a role.
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            role: None,
            position: Vector3::ZERO,
            rotation: Vector3::ZERO,
            mode: ClientMode::ReadyClient,
        }
    }

    /// The current role id, [`RoleId::None`] when no role is attached.
    pub fn role_id(&self) -> RoleId {
        self.role.as_ref().map_or(RoleId::None, Role::id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_ready_client_is_ready() {
        assert!(ClientMode::ReadyClient.is_ready());
        assert!(!ClientMode::Unverified.is_ready());
        assert!(!ClientMode::Host.is_ready());
        assert!(!ClientMode::Dedicated.is_ready());
    }

    #[test]
    fn test_role_id_defaults_to_none() {
        let mut p = Participant::new(PlayerId(1));
        assert_eq!(p.role_id(), RoleId::None);
        p.role = Some(Role::for_id(RoleId::Scp096));
        assert_eq!(p.role_id(), RoleId::Scp096);
    }
}
