//! Integration tests for spawn validation against the roster.

use std::sync::Arc;

use rolewarden_events::RoleChanged;
use rolewarden_fix::{
    GuardFailure, RoleFixConfig, SpawnValidator, ValidationOutcome, ValidationRule,
};
use rolewarden_roles::{
    FpcRole, PlayerId, Role, RoleId, SpawnFlags, SpawnPoint, SpawnpointList, Vector3,
};
use rolewarden_session::{ParticipantRegistry, Roster};

// =========================================================================
// Helpers
// =========================================================================

const THRESHOLD: f32 = 100.0;
const SPAWN: SpawnPoint = SpawnPoint::new(Vector3::new(1.0, 2.0, 3.0), 45.0);
const START_ROTATION: Vector3 = Vector3::new(0.0, 90.0, 0.0);

fn pid(id: u64) -> PlayerId {
    PlayerId(id)
}

fn fpc(role: RoleId, spawnpoints: SpawnpointList) -> Role {
    FpcRole::new(role, SpawnFlags::ALL)
        .with_spawnpoints(Arc::new(spawnpoints))
        .into()
}

/// One participant holding `role` at `position`; returns the roster and
/// the role-changed event the engine would have raised.
fn spawned(role: Role, position: Vector3) -> (Arc<Roster>, RoleChanged) {
    let roster = Arc::new(Roster::new());
    roster.join(pid(1)).unwrap();
    roster.assign(pid(1), role.clone()).unwrap();
    roster.place(pid(1), position, START_ROTATION).unwrap();
    (roster, RoleChanged::new(pid(1), None, Some(role)))
}

fn validator(roster: &Arc<Roster>, rules: Vec<ValidationRule>) -> SpawnValidator<Roster> {
    let config = RoleFixConfig {
        rules,
        ..RoleFixConfig::default()
    };
    SpawnValidator::new(Arc::clone(roster), &config)
}

fn position_and_rotation(roster: &Roster) -> (Vector3, Vector3) {
    let p = roster.participant(pid(1)).unwrap();
    (p.position, p.rotation)
}

// =========================================================================
// Correction
// =========================================================================

#[test]
fn test_scp173_above_bound_moved_to_spawnpoint() {
    let (roster, event) = spawned(
        fpc(RoleId::Scp173, SpawnpointList::single(SPAWN)),
        Vector3::new(0.0, THRESHOLD + 5.0, 0.0),
    );
    let v = validator(&roster, vec![ValidationRule::vertical_bound(RoleId::Scp173, THRESHOLD)]);

    let outcome = v.validate_and_correct(&event).unwrap();

    assert_eq!(outcome, ValidationOutcome::Corrected(SPAWN));
    assert_eq!(
        position_and_rotation(&roster),
        (Vector3::new(1.0, 2.0, 3.0), Vector3::new(45.0, 45.0, 45.0))
    );
}

#[test]
fn test_non_finite_bound_is_never_applied() {
    let start = Vector3::new(0.0, 5.0, 0.0);
    let (roster, event) = spawned(fpc(RoleId::Scp173, SpawnpointList::single(SPAWN)), start);
    let v = validator(&roster, vec![ValidationRule::vertical_bound(RoleId::Scp173, f32::NAN)]);

    assert_eq!(v.validate_and_correct(&event).unwrap(), ValidationOutcome::NoRule);
    assert_eq!(position_and_rotation(&roster), (start, START_ROTATION));
}

#[test]
fn test_valid_position_untouched() {
    let start = Vector3::new(0.0, THRESHOLD - 1.0, 0.0);
    let (roster, event) = spawned(fpc(RoleId::Scp173, SpawnpointList::single(SPAWN)), start);
    let v = validator(&roster, vec![ValidationRule::vertical_bound(RoleId::Scp173, THRESHOLD)]);

    assert_eq!(v.validate_and_correct(&event).unwrap(), ValidationOutcome::Valid);
    assert_eq!(position_and_rotation(&roster), (start, START_ROTATION));
}

#[test]
fn test_no_rule_means_no_op() {
    let start = Vector3::new(0.0, 10_000.0, 0.0);
    let (roster, event) = spawned(fpc(RoleId::ClassD, SpawnpointList::single(SPAWN)), start);
    let v = validator(&roster, vec![ValidationRule::vertical_bound(RoleId::Scp173, THRESHOLD)]);

    assert_eq!(v.validate_and_correct(&event).unwrap(), ValidationOutcome::NoRule);
    assert_eq!(position_and_rotation(&roster), (start, START_ROTATION));
}

#[test]
fn test_disabled_rule_never_corrects() {
    let start = Vector3::new(0.0, THRESHOLD + 5.0, 0.0);
    let (roster, event) = spawned(fpc(RoleId::Scp173, SpawnpointList::single(SPAWN)), start);
    let v = validator(
        &roster,
        vec![ValidationRule::vertical_bound(RoleId::Scp173, THRESHOLD).disabled()],
    );

    assert_eq!(v.validate_and_correct(&event).unwrap(), ValidationOutcome::NoRule);
    assert_eq!(position_and_rotation(&roster), (start, START_ROTATION));
}

// =========================================================================
// Precedence
// =========================================================================

#[test]
fn test_vertical_bound_shadows_distance_bound() {
    // Satisfies the vertical bound, violates the distance bound by far.
    let start = Vector3::new(5_000.0, 0.0, 0.0);
    let (roster, event) = spawned(fpc(RoleId::Scp106, SpawnpointList::single(SPAWN)), start);
    let v = validator(
        &roster,
        vec![
            ValidationRule::distance_from(RoleId::Scp106, Vector3::ZERO, 10.0),
            ValidationRule::vertical_bound(RoleId::Scp106, THRESHOLD),
        ],
    );

    assert_eq!(v.validate_and_correct(&event).unwrap(), ValidationOutcome::Valid);
    assert_eq!(position_and_rotation(&roster), (start, START_ROTATION));
}

#[test]
fn test_distance_bound_used_when_vertical_disabled() {
    let (roster, event) = spawned(
        fpc(RoleId::Scp106, SpawnpointList::single(SPAWN)),
        Vector3::new(5_000.0, 0.0, 0.0),
    );
    let v = validator(
        &roster,
        vec![
            ValidationRule::vertical_bound(RoleId::Scp106, THRESHOLD).disabled(),
            ValidationRule::distance_from(RoleId::Scp106, Vector3::ZERO, 10.0),
        ],
    );

    assert!(v.validate_and_correct(&event).unwrap().is_corrected());
    assert_eq!(position_and_rotation(&roster).0, SPAWN.position);
}

// =========================================================================
// Guards and failures
// =========================================================================

#[test]
fn test_exempt_roles_never_corrected() {
    for exempt in RoleId::SPAWN_CORRECTION_EXEMPT {
        let start = Vector3::new(0.0, THRESHOLD + 50.0, 0.0);
        let (roster, event) = spawned(fpc(exempt, SpawnpointList::single(SPAWN)), start);
        let v = validator(&roster, vec![ValidationRule::vertical_bound(exempt, THRESHOLD)]);

        let outcome = v.validate_and_correct(&event).unwrap();

        assert_eq!(outcome, ValidationOutcome::GuardFailed(GuardFailure::Exempt(exempt)));
        assert_eq!(position_and_rotation(&roster), (start, START_ROTATION));
    }
}

#[test]
fn test_failed_spawnpoint_lookup_leaves_state() {
    let start = Vector3::new(0.0, THRESHOLD + 5.0, 0.0);
    let (roster, event) = spawned(fpc(RoleId::Scp049, SpawnpointList::default()), start);
    let v = validator(&roster, vec![ValidationRule::vertical_bound(RoleId::Scp049, THRESHOLD)]);

    assert_eq!(
        v.validate_and_correct(&event).unwrap(),
        ValidationOutcome::SpawnpointUnavailable
    );
    assert_eq!(position_and_rotation(&roster), (start, START_ROTATION));
}

#[test]
fn test_participant_who_left_is_noop() {
    let (roster, event) = spawned(
        fpc(RoleId::Scp173, SpawnpointList::single(SPAWN)),
        Vector3::new(0.0, THRESHOLD + 5.0, 0.0),
    );
    let v = validator(&roster, vec![ValidationRule::vertical_bound(RoleId::Scp173, THRESHOLD)]);
    roster.leave(pid(1)).unwrap();

    assert_eq!(
        v.validate_and_correct(&event).unwrap(),
        ValidationOutcome::GuardFailed(GuardFailure::ParticipantGone)
    );
}

#[test]
fn test_role_changed_again_to_observer() {
    let (roster, event) = spawned(
        fpc(RoleId::Scp173, SpawnpointList::single(SPAWN)),
        Vector3::new(0.0, THRESHOLD + 5.0, 0.0),
    );
    // Same rule on the spectator role, to reach the guard.
    let v = validator(&roster, vec![ValidationRule::vertical_bound(RoleId::Spectator, THRESHOLD)]);
    roster.assign(pid(1), Role::for_id(RoleId::Spectator)).unwrap();

    assert_eq!(
        v.validate_and_correct(&event).unwrap(),
        ValidationOutcome::GuardFailed(GuardFailure::RoleMismatch)
    );
}
