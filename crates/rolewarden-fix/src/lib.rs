//! Role spawn fixes for Rolewarden.
//!
//! Two independent corrections react to session events:
//!
//! - [`DuplicateRoleResolver`]: shortly after a round starts, finds SCP
//!   roles held by more than one participant and moves every holder but
//!   the earliest-registered one to a random fallback role.
//! - [`SpawnValidator`]: shortly after any role change, checks the
//!   participant's spawn position against the role's
//!   [`ValidationRule`]s and moves them to a fresh spawnpoint if the
//!   position is invalid.
//!
//! [`RoleSpawnFix`] owns both and attaches them to an
//! [`EventDispatcher`](rolewarden_events::EventDispatcher), scheduling
//! each reaction after its settle delay on the current Tokio runtime.
//!
//! Neither component keeps state between invocations. Every decision is
//! made from a fresh registry snapshot.

mod config;
mod error;
mod feature;
mod picker;
mod resolver;
mod rules;
mod validator;

pub use config::RoleFixConfig;
pub use error::FixError;
pub use feature::{ROLE_CHANGED_HANDLER, ROUND_STARTED_HANDLER, RoleSpawnFix};
pub use picker::{FallbackPicker, RandomPicker};
pub use resolver::{DuplicateRoleResolver, Reassignment, duplicate_notice};
pub use rules::{RuleKind, ValidationKind, ValidationRule, ValidationRules};
pub use validator::{GuardFailure, SkipReason, SpawnValidator, ValidationOutcome};
