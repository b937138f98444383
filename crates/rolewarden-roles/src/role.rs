//! Role identifiers and the role objects attached to participants.
//!
//! Two levels live here:
//!
//! - [`RoleId`]: the plain identifier ("this player is SCP-173"). Cheap,
//!   `Copy`, serializable. This is what configuration and logs refer to.
//! - [`Role`]: the role *object* the session engine attaches to a
//!   participant when it assigns a role. It knows what kind of body the
//!   role drives and, for first-person roles, can carry a spawnpoint
//!   capability.
//!
//! The "is this role first-person controlled" and "can this role produce
//! a spawnpoint" questions are answered by matching on [`Role`] rather
//! than by runtime type inspection.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::SpawnpointHandler;

// ---------------------------------------------------------------------------
// RoleId
// ---------------------------------------------------------------------------

/// Every role a participant can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleId {
    None,
    Scp173,
    ClassD,
    Spectator,
    Scp106,
    NtfSpecialist,
    Scp049,
    Scientist,
    Scp079,
    ChaosConscript,
    Scp096,
    Scp0492,
    NtfSergeant,
    NtfCaptain,
    NtfPrivate,
    Tutorial,
    FacilityGuard,
    Scp939,
    ChaosRifleman,
    ChaosMarauder,
    ChaosRepressor,
    Overwatch,
    Filmmaker,
    Scp3114,
}

impl RoleId {
    /// SCP roles meant to have at most one holder per round.
    pub const SCP_ROLES: [RoleId; 6] = [
        RoleId::Scp049,
        RoleId::Scp173,
        RoleId::Scp106,
        RoleId::Scp096,
        RoleId::Scp079,
        RoleId::Scp939,
    ];

    /// Roles handed out to players whose SCP role was a duplicate.
    pub const FALLBACK_ROLES: [RoleId; 3] =
        [RoleId::Scientist, RoleId::ClassD, RoleId::FacilityGuard];

    /// Roles whose position is never corrected after a spawn.
    ///
    /// SCP-079 observes through cameras and has no body to move;
    /// SCP-049-2 is raised where its corpse lay, not at a spawnpoint.
    pub const SPAWN_CORRECTION_EXEMPT: [RoleId; 2] = [RoleId::Scp079, RoleId::Scp0492];

    /// Returns `true` if a role with this id drives a first-person body.
    ///
    /// Spectator-like roles and SCP-079 don't.
    pub fn is_first_person(self) -> bool {
        !matches!(
            self,
            Self::None | Self::Spectator | Self::Scp079 | Self::Overwatch | Self::Filmmaker
        )
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// ---------------------------------------------------------------------------
// SpawnFlags
// ---------------------------------------------------------------------------

/// How the engine set a participant up when it assigned their role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpawnFlags {
    /// The participant was placed at one of the role's spawnpoints
    /// (as opposed to a fixed or manual placement).
    pub use_spawnpoint: bool,
}

impl SpawnFlags {
    /// No spawn behaviour: the participant stays where they are.
    pub const NONE: Self = Self {
        use_spawnpoint: false,
    };

    /// Full spawn: placed at one of the role's spawnpoints.
    pub const ALL: Self = Self {
        use_spawnpoint: true,
    };
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// A first-person controlled role.
#[derive(Debug, Clone)]
pub struct FpcRole {
    pub id: RoleId,
    pub spawn_flags: SpawnFlags,
    spawnpoints: Option<Arc<dyn SpawnpointHandler>>,
}

impl FpcRole {
    /// A first-person role without a spawnpoint capability.
    pub fn new(id: RoleId, spawn_flags: SpawnFlags) -> Self {
        Self {
            id,
            spawn_flags,
            spawnpoints: None,
        }
    }

    /// Attaches a spawnpoint capability.
    pub fn with_spawnpoints(mut self, handler: Arc<dyn SpawnpointHandler>) -> Self {
        self.spawnpoints = Some(handler);
        self
    }

    /// The role's spawnpoint capability, if it has one.
    pub fn spawnpoints(&self) -> Option<&dyn SpawnpointHandler> {
        self.spawnpoints.as_deref()
    }
}

/// The role object attached to a participant.
#[derive(Debug, Clone)]
pub enum Role {
    /// A role that drives a first-person body (humans and most SCPs).
    FirstPerson(FpcRole),
    /// Everything else: spectators, overwatch, SCP-079's camera role.
    Other { id: RoleId, spawn_flags: SpawnFlags },
}

impl Role {
    /// Builds the default role object for `id`.
    ///
    /// First-person roles get [`SpawnFlags::ALL`] and no spawnpoint
    /// capability; other roles get [`SpawnFlags::NONE`].
    pub fn for_id(id: RoleId) -> Self {
        if id.is_first_person() {
            Self::FirstPerson(FpcRole::new(id, SpawnFlags::ALL))
        } else {
            Self::Other {
                id,
                spawn_flags: SpawnFlags::NONE,
            }
        }
    }

    pub fn id(&self) -> RoleId {
        match self {
            Self::FirstPerson(fpc) => fpc.id,
            Self::Other { id, .. } => *id,
        }
    }

    pub fn spawn_flags(&self) -> SpawnFlags {
        match self {
            Self::FirstPerson(fpc) => fpc.spawn_flags,
            Self::Other { spawn_flags, .. } => *spawn_flags,
        }
    }

    pub fn as_first_person(&self) -> Option<&FpcRole> {
        match self {
            Self::FirstPerson(fpc) => Some(fpc),
            Self::Other { .. } => None,
        }
    }

    pub fn is_first_person(&self) -> bool {
        self.as_first_person().is_some()
    }

    /// The spawnpoint capability, available only on first-person roles
    /// that carry one.
    pub fn spawnpoints(&self) -> Option<&dyn SpawnpointHandler> {
        self.as_first_person().and_then(FpcRole::spawnpoints)
    }
}

impl From<FpcRole> for Role {
    fn from(fpc: FpcRole) -> Self {
        Self::FirstPerson(fpc)
    }
}
