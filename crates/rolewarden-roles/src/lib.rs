//! Role vocabulary for Rolewarden.
//!
//! This crate defines the values every other layer talks about:
//!
//! - **Identity** ([`PlayerId`]) and geometry ([`Vector3`]).
//! - **Roles** ([`RoleId`], [`Role`], [`FpcRole`], [`SpawnFlags`]): the
//!   closed set of roles a participant can hold, plus the role objects
//!   the session engine attaches to participants.
//! - **Spawnpoints** ([`SpawnPoint`], [`SpawnpointHandler`]): the
//!   capability a first-person role exposes for producing a fresh
//!   spawn position.
//!
//! It has no notion of sessions, events, or corrections. Those live in
//! the crates layered above:
//!
//! ```text
//! rolewarden-fix (resolver, validator)
//!     ↕
//! rolewarden-session / rolewarden-events
//!     ↕
//! rolewarden-roles (this crate)
//! ```

mod role;
mod spawnpoint;
mod types;

pub use role::{FpcRole, Role, RoleId, SpawnFlags};
pub use spawnpoint::{SpawnPoint, SpawnpointHandler, SpawnpointList};
pub use types::{PlayerId, Vector3};
