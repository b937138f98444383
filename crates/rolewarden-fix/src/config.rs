//! Configuration for the role spawn fixes.

use std::time::Duration;

use rolewarden_roles::RoleId;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{FixError, ValidationRule, ValidationRules};

/// Settings for [`RoleSpawnFix`](crate::RoleSpawnFix).
///
/// Every field has a default, so a JSON document only needs the fields
/// it changes:
///
/// ```json
/// {
///   "rules": [
///     { "role": "Scp173", "kind": "VerticalBound", "max_y": 1000.0 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleFixConfig {
    /// How long after the round starts duplicates are resolved.
    /// Lets the engine finish its initial role assignment first.
    pub round_start_delay_ms: u64,

    /// How long after a role change the spawn position is validated.
    /// Lets the engine finish moving the participant first.
    pub role_change_delay_ms: u64,

    /// Roles that should have at most one holder per round.
    pub exclusive_roles: Vec<RoleId>,

    /// Roles handed to the excess holders of an exclusive role.
    pub fallback_roles: Vec<RoleId>,

    /// Roles whose spawn position is never corrected.
    pub exempt_roles: Vec<RoleId>,

    /// Spawn validation rules. At most one per role and kind.
    pub rules: Vec<ValidationRule>,
}

impl Default for RoleFixConfig {
    fn default() -> Self {
        Self {
            round_start_delay_ms: 1_500,
            role_change_delay_ms: 400,
            exclusive_roles: RoleId::SCP_ROLES.to_vec(),
            fallback_roles: RoleId::FALLBACK_ROLES.to_vec(),
            exempt_roles: RoleId::SPAWN_CORRECTION_EXEMPT.to_vec(),
            rules: Vec::new(),
        }
    }
}

impl RoleFixConfig {
    /// Parses a JSON document and validates it.
    pub fn from_json(json: &str) -> Result<Self, FixError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.validated())
    }

    /// Adds a validation rule.
    pub fn with_rule(mut self, rule: ValidationRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Fix up anything that would break the invariants.
    ///
    /// Called automatically by every constructor that takes a config. Rules:
    /// - Repeated entries in the role lists are dropped.
    /// - A fallback role that is also exclusive is removed from the
    ///   fallback pool (reassigning to it could create a new duplicate).
    /// - Rules with non-finite or negative thresholds are disabled.
    /// - Only the first rule per (role, kind) is kept.
    pub fn validated(mut self) -> Self {
        dedup_in_place(&mut self.exclusive_roles);
        dedup_in_place(&mut self.fallback_roles);
        dedup_in_place(&mut self.exempt_roles);

        let exclusive = self.exclusive_roles.clone();
        self.fallback_roles.retain(|role| {
            let keep = !exclusive.contains(role);
            if !keep {
                warn!(%role, "fallback role is also exclusive; removing from fallback pool");
            }
            keep
        });
        if self.fallback_roles.is_empty() && !self.exclusive_roles.is_empty() {
            warn!("fallback pool is empty; duplicate holders will keep their role");
        }

        self.rules = ValidationRules::new(self.rules).into_vec();
        self
    }

    pub fn round_start_delay(&self) -> Duration {
        Duration::from_millis(self.round_start_delay_ms)
    }

    pub fn role_change_delay(&self) -> Duration {
        Duration::from_millis(self.role_change_delay_ms)
    }
}

fn dedup_in_place(roles: &mut Vec<RoleId>) {
    let mut seen = Vec::with_capacity(roles.len());
    roles.retain(|role| {
        if seen.contains(role) {
            false
        } else {
            seen.push(*role);
            true
        }
    });
}
