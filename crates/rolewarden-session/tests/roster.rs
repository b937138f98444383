//! Integration tests for the in-process roster used as a session engine.

use std::sync::Arc;
use std::thread;

use rolewarden_roles::{FpcRole, PlayerId, Role, RoleId, SpawnFlags, Vector3};
use rolewarden_session::{
    ClientMode, HintSink, ParticipantRegistry, PositionOverride, RoleAssigner, Roster,
    SessionError,
};

fn pid(id: u64) -> PlayerId {
    PlayerId(id)
}

#[test]
fn test_concurrent_overrides_stay_per_participant() {
    let roster = Arc::new(Roster::new());
    for id in 1..=8 {
        roster.join(pid(id)).unwrap();
    }

    let handles: Vec<_> = (1..=8)
        .map(|id| {
            let roster = Arc::clone(&roster);
            thread::spawn(move || {
                let pos = Vector3::new(id as f32, 0.0, 0.0);
                roster
                    .override_position(pid(id), pos, Vector3::splat(id as f32))
                    .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    for p in roster.participants() {
        assert_eq!(p.position.x, p.id.0 as f32);
        assert_eq!(p.rotation, Vector3::splat(p.id.0 as f32));
    }
}

#[test]
fn test_snapshot_is_detached_from_registry() {
    let roster = Roster::new();
    roster.join(pid(1)).unwrap();
    let before = roster.participant(pid(1)).unwrap();

    roster.set_role(pid(1), RoleId::Scp106).unwrap();

    assert_eq!(before.role_id(), RoleId::None);
    assert_eq!(roster.participant(pid(1)).unwrap().role_id(), RoleId::Scp106);
}

#[test]
fn test_assign_keeps_custom_role_object() {
    let roster = Roster::new();
    roster.join(pid(1)).unwrap();
    let role = FpcRole::new(RoleId::Scp173, SpawnFlags::NONE);
    roster.assign(pid(1), Role::from(role)).unwrap();

    let p = roster.participant(pid(1)).unwrap();
    assert_eq!(p.role.unwrap().spawn_flags(), SpawnFlags::NONE);
}

#[test]
fn test_departed_participant_rejects_every_mutation() {
    let roster = Roster::new();
    roster.join(pid(1)).unwrap();
    roster.leave(pid(1)).unwrap();

    assert!(roster.participant(pid(1)).is_none());
    assert!(matches!(roster.set_role(pid(1), RoleId::ClassD), Err(SessionError::NotFound(_))));
    assert!(matches!(
        roster.override_position(pid(1), Vector3::ZERO, Vector3::ZERO),
        Err(SessionError::NotFound(_))
    ));
    assert!(matches!(roster.send_hint(pid(1), "hi"), Err(SessionError::NotFound(_))));
    assert!(matches!(roster.set_mode(pid(1), ClientMode::Host), Err(SessionError::NotFound(_))));
}
