//! Duplicate exclusive-role resolution.
//!
//! When the round starts the engine occasionally hands the same SCP role
//! to several players. One pass of [`DuplicateRoleResolver`] keeps the
//! earliest-registered holder of each exclusive role and moves everyone
//! else holding it to a random fallback role.
//!
//! The pass only reacts. If the engine reassigns roles afterwards, a
//! later pass is needed to catch new duplicates.

use std::sync::Arc;

use rolewarden_roles::{PlayerId, RoleId};
use rolewarden_session::{HintSink, ParticipantRegistry, RoleAssigner, SessionError};
use tracing::{debug, warn};

use crate::{FallbackPicker, RandomPicker, RoleFixConfig};

/// One participant moved off a duplicated exclusive role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reassignment {
    pub player: PlayerId,
    /// The exclusive role they held.
    pub from: RoleId,
    /// The fallback role they hold now.
    pub to: RoleId,
}

/// The hint shown to a reassigned participant.
pub fn duplicate_notice(role: RoleId) -> String {
    format!("Your role was set to {role} to prevent duplicate SCPs.")
}

/// Reassigns excess holders of exclusive roles.
pub struct DuplicateRoleResolver<S, P = RandomPicker> {
    session: Arc<S>,
    picker: P,
    exclusive_roles: Vec<RoleId>,
    fallback_roles: Vec<RoleId>,
}

impl<S, P> DuplicateRoleResolver<S, P>
where
    S: ParticipantRegistry + RoleAssigner + HintSink,
    P: FallbackPicker,
{
    /// Builds a resolver from a copy of `config`, validated first so the
    /// fallback pool never contains an exclusive role.
    pub fn new(session: Arc<S>, picker: P, config: &RoleFixConfig) -> Self {
        Self::from_validated(session, picker, &config.clone().validated())
    }

    pub(crate) fn from_validated(session: Arc<S>, picker: P, config: &RoleFixConfig) -> Self {
        Self {
            session,
            picker,
            exclusive_roles: config.exclusive_roles.clone(),
            fallback_roles: config.fallback_roles.clone(),
        }
    }

    /// Runs one resolution pass over the current participants.
    ///
    /// Returns every reassignment made, in the order they were applied.
    /// An empty result means no exclusive role was duplicated and
    /// nothing was touched.
    ///
    /// # Errors
    /// A failing role or hint primitive aborts the pass and is returned
    /// as-is; reassignments already applied stay applied.
    pub fn resolve_duplicates(&self) -> Result<Vec<Reassignment>, SessionError> {
        let participants = self.session.participants();
        let mut reassigned = Vec::new();

        for &role in &self.exclusive_roles {
            let holders: Vec<PlayerId> = participants
                .iter()
                .filter(|p| p.role_id() == role)
                .map(|p| p.id)
                .collect();
            if holders.len() <= 1 {
                continue;
            }

            // Keep the earliest-registered holder; strip the rest from the tail.
            let to_remove: Vec<PlayerId> = holders[1..].iter().rev().copied().collect();
            debug!(
                %role,
                holders = holders.len(),
                keeping = %holders[0],
                "duplicate exclusive role detected"
            );

            for player in to_remove {
                let Some(fallback) = self.picker.pick(&self.fallback_roles) else {
                    warn!(%player, %role, "no fallback role available; leaving duplicate in place");
                    continue;
                };
                debug!(%player, %role, %fallback, "removing duplicate SCP role");
                self.session.set_role(player, fallback)?;
                self.session.send_hint(player, &duplicate_notice(fallback))?;
                reassigned.push(Reassignment {
                    player,
                    from: role,
                    to: fallback,
                });
            }
        }

        Ok(reassigned)
    }
}
