//! Spawn position validation and correction.
//!
//! After a role change the engine places the participant at one of the
//! role's spawnpoints. Sometimes that placement is wrong (under the map,
//! in the void, at the far side of the facility). [`SpawnValidator`]
//! checks the placement against the role's rule and, if it fails, moves
//! the participant to a freshly requested spawnpoint.
//!
//! Each call is a short pipeline:
//!
//! ```text
//! event → preconditions → rule check → correction guard → spawnpoint → override
//!             │               │              │                │
//!             ▼               ▼              ▼                ▼
//!          Skipped      NoRule / Valid   GuardFailed   SpawnpointUnavailable
//! ```

use std::sync::Arc;

use rolewarden_events::RoleChanged;
use rolewarden_roles::{PlayerId, RoleId, SpawnPoint, Vector3};
use rolewarden_session::{ParticipantRegistry, PositionOverride, SessionError};
use tracing::{debug, trace, warn};

use crate::{RoleFixConfig, ValidationRules};

/// Why an event was not considered for validation at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The event cleared the role.
    RoleCleared,
    /// The new role has no first-person body to move.
    NotFirstPerson,
    /// The engine didn't place the participant at a spawnpoint.
    NotSpawnpointPlaced,
}

/// Why a failed validation was not corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardFailure {
    /// The participant left before validation ran.
    ParticipantGone,
    /// The participant is not a ready client.
    NotReady,
    /// The participant has no role, or no first-person role, anymore.
    RoleMismatch,
    /// The role is exempt from spawn correction.
    Exempt(RoleId),
    /// The role can't produce spawnpoints.
    NoSpawnpointCapability,
}

/// Result of one validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidationOutcome {
    Skipped(SkipReason),
    /// No enabled rule exists for the participant's current role.
    NoRule,
    /// The position satisfies the rule.
    Valid,
    /// The position is invalid but correcting it isn't allowed.
    GuardFailed(GuardFailure),
    /// The position is invalid and no spawnpoint could be retrieved.
    /// Nothing was changed.
    SpawnpointUnavailable,
    /// The participant was moved to this spawnpoint.
    Corrected(SpawnPoint),
}

impl ValidationOutcome {
    /// Returns `true` if the participant was moved.
    pub fn is_corrected(&self) -> bool {
        matches!(self, Self::Corrected(_))
    }
}

/// Validates and corrects spawn positions.
pub struct SpawnValidator<S> {
    session: Arc<S>,
    rules: ValidationRules,
    exempt_roles: Vec<RoleId>,
}

impl<S> SpawnValidator<S>
where
    S: ParticipantRegistry + PositionOverride,
{
    /// Builds a validator from a copy of `config`, validated first so
    /// malformed rules stay disabled.
    pub fn new(session: Arc<S>, config: &RoleFixConfig) -> Self {
        Self::from_validated(session, &config.clone().validated())
    }

    pub(crate) fn from_validated(session: Arc<S>, config: &RoleFixConfig) -> Self {
        Self {
            session,
            rules: ValidationRules::new(config.rules.iter().copied()),
            exempt_roles: config.exempt_roles.clone(),
        }
    }

    /// Validates the participant named by `event` and corrects their
    /// position if needed.
    ///
    /// Only the event's *new* role object is trusted, and only for the
    /// preconditions. Everything else is re-read from the registry, since
    /// the participant may have changed again since the event was raised.
    ///
    /// # Errors
    /// Only the position override can fail; anticipated failures
    /// (departed participant, missing spawnpoint) are outcomes, not errors.
    pub fn validate_and_correct(
        &self,
        event: &RoleChanged,
    ) -> Result<ValidationOutcome, SessionError> {
        let player = event.player;

        let Some(new_role) = &event.new else {
            return Ok(ValidationOutcome::Skipped(SkipReason::RoleCleared));
        };
        if !new_role.is_first_person() {
            return Ok(ValidationOutcome::Skipped(SkipReason::NotFirstPerson));
        }
        if !new_role.spawn_flags().use_spawnpoint {
            return Ok(ValidationOutcome::Skipped(SkipReason::NotSpawnpointPlaced));
        }

        let Some(participant) = self.session.participant(player) else {
            debug!(%player, "participant left before spawn validation");
            return Ok(ValidationOutcome::GuardFailed(GuardFailure::ParticipantGone));
        };
        let role = participant.role_id();

        let Some(rule) = self.rules.select(role) else {
            trace!(%player, %role, "no spawn rule enabled");
            return Ok(ValidationOutcome::NoRule);
        };
        if rule.is_satisfied_by(participant.position) {
            trace!(%player, %role, position = %participant.position, "spawn position valid");
            return Ok(ValidationOutcome::Valid);
        }

        debug!(
            %player,
            %role,
            position = %participant.position,
            rule = ?rule,
            "spawn position failed validation"
        );
        self.correct(player)
    }

    /// Moves `player` to a fresh spawnpoint of their current role,
    /// provided the correction guard passes.
    fn correct(&self, player: PlayerId) -> Result<ValidationOutcome, SessionError> {
        let Some(participant) = self.session.participant(player) else {
            debug!(%player, "participant left before spawn correction");
            return Ok(ValidationOutcome::GuardFailed(GuardFailure::ParticipantGone));
        };
        if !participant.mode.is_ready() {
            debug!(%player, mode = ?participant.mode, "participant not ready; skipping correction");
            return Ok(ValidationOutcome::GuardFailed(GuardFailure::NotReady));
        }
        let Some(role) = participant.role.as_ref().filter(|r| r.is_first_person()) else {
            debug!(%player, "participant has no first-person role; skipping correction");
            return Ok(ValidationOutcome::GuardFailed(GuardFailure::RoleMismatch));
        };
        let role_id = role.id();
        if self.exempt_roles.contains(&role_id) {
            debug!(%player, role = %role_id, "role exempt from spawn correction");
            return Ok(ValidationOutcome::GuardFailed(GuardFailure::Exempt(role_id)));
        }
        let Some(spawnpoints) = role.spawnpoints() else {
            debug!(%player, role = %role_id, "role has no spawnpoints; skipping correction");
            return Ok(ValidationOutcome::GuardFailed(GuardFailure::NoSpawnpointCapability));
        };

        let Some(spawn) = spawnpoints.try_get_spawnpoint() else {
            warn!(%player, role = %role_id, "failed to retrieve a spawnpoint of role {role_id}");
            return Ok(ValidationOutcome::SpawnpointUnavailable);
        };

        // All three axes carry the horizontal rotation, matching how the
        // engine's override primitive has always been fed.
        self.fix_position(player, spawn.position, Vector3::splat(spawn.horizontal_rotation))?;
        debug!(%player, role = %role_id, position = %spawn.position, "spawn position corrected");
        Ok(ValidationOutcome::Corrected(spawn))
    }

    /// Moves a participant directly, bypassing validation.
    pub fn fix_position(
        &self,
        player: PlayerId,
        position: Vector3,
        rotation: Vector3,
    ) -> Result<(), SessionError> {
        self.session.override_position(player, position, rotation)
    }
}
