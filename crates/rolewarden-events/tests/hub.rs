//! Integration tests for handler ordering and re-entrancy on the hub.

use std::sync::{Arc, Mutex};

use rolewarden_events::{EventDispatcher, EventHub, RoleChanged, RoundState};
use rolewarden_roles::{PlayerId, Role, RoleId};

#[test]
fn test_handlers_run_in_attach_order() {
    let hub = EventHub::new();
    let log = Arc::new(Mutex::new(Vec::new()));

    for name in ["first", "second", "third"] {
        let log = Arc::clone(&log);
        hub.add_role_changed_handler(
            name,
            Arc::new(move |event: &RoleChanged| {
                log.lock().unwrap().push((name, event.new_role_id()));
            }),
        )
        .unwrap();
    }

    let event = RoleChanged::new(PlayerId(1), None, Some(Role::for_id(RoleId::Scp173)));
    hub.publish_role_changed(&event);

    let log = log.lock().unwrap();
    assert_eq!(
        *log,
        vec![
            ("first", RoleId::Scp173),
            ("second", RoleId::Scp173),
            ("third", RoleId::Scp173),
        ]
    );
}

#[test]
fn test_detached_handler_stops_receiving() {
    let hub = EventHub::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    hub.add_round_state_handler(
        "watch",
        Arc::new(move |s: RoundState| sink.lock().unwrap().push(s)),
    )
    .unwrap();

    hub.publish_round_state(RoundState::InProgress);
    hub.remove_round_state_handler("watch").unwrap();
    hub.publish_round_state(RoundState::Ended);

    assert_eq!(*seen.lock().unwrap(), vec![RoundState::InProgress]);
    assert_eq!(hub.round_state_handler_count(), 0);
}

#[test]
fn test_handler_may_detach_itself_during_publish() {
    let hub = Arc::new(EventHub::new());
    let weak = Arc::downgrade(&hub);
    hub.add_round_state_handler(
        "once",
        Arc::new(move |_: RoundState| {
            if let Some(hub) = weak.upgrade() {
                hub.remove_round_state_handler("once").unwrap();
            }
        }),
    )
    .unwrap();

    hub.publish_round_state(RoundState::InProgress);
    assert_eq!(hub.round_state_handler_count(), 0);
}
