//! Participant registry and session-engine capabilities for Rolewarden.
//!
//! The session engine owns the participants. This crate describes what
//! the correction layer needs from it:
//!
//! 1. **Snapshots**: reading who is connected, with which role, where
//!    ([`Participant`], [`ParticipantRegistry`])
//! 2. **Mutations**: changing a participant's role or position
//!    ([`RoleAssigner`], [`PositionOverride`])
//! 3. **Notifications**: telling a participant what happened
//!    ([`HintSink`])
//!
//! [`Roster`] is an in-process implementation of all four capabilities,
//! used when hosting the correction layer outside a game engine and in
//! tests.

mod error;
mod participant;
mod roster;
mod traits;

pub use error::SessionError;
pub use participant::{ClientMode, Participant};
pub use roster::Roster;
pub use traits::{HintSink, ParticipantRegistry, PositionOverride, RoleAssigner};
