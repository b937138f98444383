//! Event payloads delivered by the dispatcher.

use std::fmt;

use rolewarden_roles::{PlayerId, Role, RoleId};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RoundState
// ---------------------------------------------------------------------------

/// The lifecycle state of a round.
///
/// ```text
/// WaitingForPlayers → InProgress → Ended → WaitingForPlayers (next round)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    /// Lobby: players are joining, roles not assigned yet.
    WaitingForPlayers,
    /// Roles have been handed out and the round is running.
    InProgress,
    /// A team won or the round was restarted.
    Ended,
}

impl RoundState {
    /// Returns `true` once the round has started.
    pub fn is_in_progress(self) -> bool {
        matches!(self, Self::InProgress)
    }
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WaitingForPlayers => write!(f, "WaitingForPlayers"),
            Self::InProgress => write!(f, "InProgress"),
            Self::Ended => write!(f, "Ended"),
        }
    }
}

// ---------------------------------------------------------------------------
// RoleChanged
// ---------------------------------------------------------------------------

/// A participant's role object was replaced.
///
/// `previous` and `new` are the role objects as they were when the
/// engine raised the event. Handlers that run later must re-read the
/// registry; the participant may have changed role again since.
#[derive(Debug, Clone)]
pub struct RoleChanged {
    pub player: PlayerId,
    pub previous: Option<Role>,
    pub new: Option<Role>,
}

impl RoleChanged {
    pub fn new(player: PlayerId, previous: Option<Role>, new: Option<Role>) -> Self {
        Self {
            player,
            previous,
            new,
        }
    }

    /// Id of the new role, [`RoleId::None`] if the role was cleared.
    pub fn new_role_id(&self) -> RoleId {
        self.new.as_ref().map_or(RoleId::None, Role::id)
    }
}
