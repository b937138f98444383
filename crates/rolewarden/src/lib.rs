//! # Rolewarden
//!
//! A correction layer for a multiplayer session's role assignments.
//!
//! After a round starts, Rolewarden makes sure every SCP role has at most
//! one holder. After any role change, it checks that the participant
//! spawned somewhere sensible and moves them to a fresh spawnpoint if not.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use rolewarden::prelude::*;
//!
//! # async fn run() {
//! rolewarden::logging::init();
//!
//! let hub = EventHub::new();
//! let roster = Arc::new(Roster::new());
//! let config = RoleFixConfig::default()
//!     .with_rule(ValidationRule::vertical_bound(RoleId::Scp173, 1000.0));
//!
//! let fix = RoleSpawnFix::with_random_picker(roster, config);
//! fix.attach(&hub);
//! // ... publish round and role events on `hub` ...
//! fix.detach(&hub);
//! # }
//! ```

mod error;
pub mod logging;

pub use error::RolewardenError;
pub use rolewarden_events as events;
pub use rolewarden_fix as fix;
pub use rolewarden_roles as roles;
pub use rolewarden_session as session;

/// Everything a host needs to wire the fixes up.
pub mod prelude {
    pub use crate::RolewardenError;
    pub use rolewarden_events::{
        DispatchError, EventDispatcher, EventHub, RoleChanged, RoundState,
    };
    pub use rolewarden_fix::{
        DuplicateRoleResolver, FallbackPicker, FixError, RandomPicker, Reassignment,
        RoleFixConfig, RoleSpawnFix, SpawnValidator, ValidationOutcome, ValidationRule,
    };
    pub use rolewarden_roles::{
        FpcRole, PlayerId, Role, RoleId, SpawnFlags, SpawnPoint, SpawnpointHandler,
        SpawnpointList, Vector3,
    };
    pub use rolewarden_session::{
        ClientMode, HintSink, Participant, ParticipantRegistry, PositionOverride, RoleAssigner,
        Roster, SessionError,
    };
}
