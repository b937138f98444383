//! Spawn validation rules.
//!
//! A rule says where a role may legitimately spawn. Each role can have
//! at most one rule of each [`ValidationKind`]; when both are enabled,
//! the vertical bound is the one checked.

use rolewarden_roles::{RoleId, Vector3};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// The kinds of check a rule can perform, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationKind {
    VerticalBound,
    DistanceFromReference,
}

/// What a rule checks, with its thresholds.
///
/// Serialized with a `"kind"` tag:
///
/// ```json
/// { "kind": "VerticalBound", "max_y": 1000.0 }
/// { "kind": "DistanceFromReference",
///   "reference": { "x": 0, "y": 0, "z": 0 }, "max_distance": 40.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum RuleKind {
    /// The spawn position must not be above `max_y`.
    VerticalBound { max_y: f32 },
    /// The spawn position must be within `max_distance` of `reference`.
    DistanceFromReference { reference: Vector3, max_distance: f32 },
}

impl RuleKind {
    pub fn kind(&self) -> ValidationKind {
        match self {
            Self::VerticalBound { .. } => ValidationKind::VerticalBound,
            Self::DistanceFromReference { .. } => ValidationKind::DistanceFromReference,
        }
    }

    /// Returns `true` if `position` satisfies this check.
    pub fn is_satisfied_by(&self, position: Vector3) -> bool {
        match self {
            Self::VerticalBound { max_y } => position.y <= *max_y,
            Self::DistanceFromReference {
                reference,
                max_distance,
            } => position.distance(reference) <= *max_distance,
        }
    }

    /// Thresholds must be finite, and distances non-negative.
    pub(crate) fn is_well_formed(&self) -> bool {
        match self {
            Self::VerticalBound { max_y } => max_y.is_finite(),
            Self::DistanceFromReference {
                reference,
                max_distance,
            } => {
                max_distance.is_finite()
                    && *max_distance >= 0.0
                    && reference.x.is_finite()
                    && reference.y.is_finite()
                    && reference.z.is_finite()
            }
        }
    }
}

fn enabled_by_default() -> bool {
    true
}

/// A validation rule for one role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationRule {
    pub role: RoleId,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(flatten)]
    pub kind: RuleKind,
}

impl ValidationRule {
    pub fn vertical_bound(role: RoleId, max_y: f32) -> Self {
        Self {
            role,
            enabled: true,
            kind: RuleKind::VerticalBound { max_y },
        }
    }

    pub fn distance_from(role: RoleId, reference: Vector3, max_distance: f32) -> Self {
        Self {
            role,
            enabled: true,
            kind: RuleKind::DistanceFromReference {
                reference,
                max_distance,
            },
        }
    }

    /// Returns a copy with `enabled` set to `false`.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Read-only rule lookup, built once from configuration.
#[derive(Debug, Clone, Default)]
pub struct ValidationRules {
    rules: Vec<ValidationRule>,
}

impl ValidationRules {
    /// Builds the lookup.
    ///
    /// Only the first rule per (role, kind) is kept, and an enabled rule
    /// with a non-finite or negative threshold is disabled. Both are
    /// logged.
    pub fn new(rules: impl IntoIterator<Item = ValidationRule>) -> Self {
        let mut kept: Vec<ValidationRule> = Vec::new();
        for mut rule in rules {
            let kind = rule.kind.kind();
            if kept.iter().any(|r| r.role == rule.role && r.kind.kind() == kind) {
                warn!(role = %rule.role, ?kind, "duplicate validation rule; ignoring");
                continue;
            }
            if rule.enabled && !rule.kind.is_well_formed() {
                warn!(role = %rule.role, rule = ?rule.kind, "malformed validation rule; disabling");
                rule.enabled = false;
            }
            kept.push(rule);
        }
        Self { rules: kept }
    }

    /// Gives the kept rules back, in configuration order.
    pub fn into_vec(self) -> Vec<ValidationRule> {
        self.rules
    }

    /// The enabled rule of `kind` for `role`, if any.
    pub fn enabled(&self, role: RoleId, kind: ValidationKind) -> Option<&RuleKind> {
        self.rules
            .iter()
            .find(|r| r.role == role && r.enabled && r.kind.kind() == kind)
            .map(|r| &r.kind)
    }

    /// The single rule to evaluate for `role`: an enabled vertical
    /// bound, else an enabled distance bound.
    pub fn select(&self, role: RoleId) -> Option<&RuleKind> {
        self.enabled(role, ValidationKind::VerticalBound)
            .or_else(|| self.enabled(role, ValidationKind::DistanceFromReference))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
