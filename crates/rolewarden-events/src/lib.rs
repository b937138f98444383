//! Session events and their dispatcher.
//!
//! The game engine raises two notifications the correction layer cares
//! about:
//!
//! - [`RoundState`] changes: the resolver reacts to `InProgress`.
//! - [`RoleChanged`]: the validator reacts to every one.
//!
//! Consumers attach named callbacks through the [`EventDispatcher`]
//! trait instead of a process-wide static registry, so each consumer is
//! handed the dispatcher it should attach to. [`EventHub`] is the
//! in-process implementation.

mod dispatcher;
mod error;
mod event;
mod hub;

pub use dispatcher::{EventDispatcher, RoleChangedHandler, RoundStateHandler};
pub use error::DispatchError;
pub use event::{RoleChanged, RoundState};
pub use hub::EventHub;
