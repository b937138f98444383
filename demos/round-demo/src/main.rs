use std::sync::Arc;
use std::time::Duration;

use rolewarden::prelude::*;

// ---------------------------------------------------------------------------
// Scripted round
// ---------------------------------------------------------------------------

/// Three players all rolled SCP-049, one SCP-173 spawned above the map.
const PLAYERS: [(u64, RoleId); 4] = [
    (1, RoleId::Scp049),
    (2, RoleId::Scp049),
    (3, RoleId::Scp049),
    (4, RoleId::Scp173),
];

fn spawnpoints() -> Arc<SpawnpointList> {
    Arc::new(SpawnpointList::new(vec![
        SpawnPoint::new(Vector3::new(12.0, 1.0, -4.0), 90.0),
        SpawnPoint::new(Vector3::new(-8.0, 1.0, 20.0), 270.0),
    ]))
}

#[tokio::main]
async fn main() -> Result<(), RolewardenError> {
    rolewarden::logging::init();

    let config = RoleFixConfig::default()
        .with_rule(ValidationRule::vertical_bound(RoleId::Scp173, 100.0));
    let hub = EventHub::new();
    let roster = Arc::new(Roster::new());
    let fix = RoleSpawnFix::with_random_picker(Arc::clone(&roster), config.clone());
    if !fix.attach(&hub) {
        return Ok(());
    }

    for (id, role) in PLAYERS {
        let id = PlayerId(id);
        roster.join(id)?;
        let role: Role = FpcRole::new(role, SpawnFlags::ALL)
            .with_spawnpoints(spawnpoints())
            .into();
        roster.assign(id, role.clone())?;
        let height = if role.id() == RoleId::Scp173 { 350.0 } else { 1.0 };
        roster.place(id, Vector3::new(0.0, height, 0.0), Vector3::ZERO)?;
        hub.publish_role_changed(&RoleChanged::new(id, None, Some(role)));
    }
    hub.publish_round_state(RoundState::InProgress);

    let settle = config.round_start_delay().max(config.role_change_delay());
    tokio::time::sleep(settle + Duration::from_millis(100)).await;

    for p in roster.participants() {
        tracing::info!(
            player = %p.id,
            role = %p.role_id(),
            position = %p.position,
            hints = ?roster.hints_for(p.id),
            "final state"
        );
    }

    fix.detach(&hub);
    Ok(())
}
