//! In-process participant registry.
//!
//! `Roster` keeps participants in join order and implements every
//! session capability the correction layer uses. It is what a host
//! without a game engine (the demo, the integration tests) plugs in.
//!
//! # Concurrency note
//!
//! A single `std::sync::Mutex` guards the participant list. Every
//! operation is a short, non-async critical section touching one
//! participant, so there is no need for per-participant locks.

use std::sync::{Mutex, MutexGuard, PoisonError};

use rolewarden_roles::{PlayerId, Role, RoleId, Vector3};

use crate::{
    ClientMode, HintSink, Participant, ParticipantRegistry, PositionOverride, RoleAssigner,
    SessionError,
};

/// A delivered hint, kept so hosts can inspect what players were told.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Hint {
    to: PlayerId,
    message: String,
}

/// Thread-safe, ordered participant registry.
#[derive(Debug, Default)]
pub struct Roster {
    participants: Mutex<Vec<Participant>>,
    hints: Mutex<Vec<Hint>>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a ready participant at the origin without a role.
    ///
    /// # Errors
    /// Returns [`SessionError::AlreadyJoined`] if the id is taken.
    pub fn join(&self, id: PlayerId) -> Result<(), SessionError> {
        let mut participants = self.lock();
        if participants.iter().any(|p| p.id == id) {
            return Err(SessionError::AlreadyJoined(id));
        }
        participants.push(Participant::new(id));
        tracing::info!(%id, count = participants.len(), "participant joined");
        Ok(())
    }

    /// Removes a participant. Order of the remaining ones is preserved.
    pub fn leave(&self, id: PlayerId) -> Result<(), SessionError> {
        let mut participants = self.lock();
        let index = participants
            .iter()
            .position(|p| p.id == id)
            .ok_or(SessionError::NotFound(id))?;
        participants.remove(index);
        tracing::info!(%id, count = participants.len(), "participant left");
        Ok(())
    }

    /// Changes a participant's connection mode.
    pub fn set_mode(&self, id: PlayerId, mode: ClientMode) -> Result<(), SessionError> {
        self.update(id, |p| p.mode = mode)
    }

    /// Attaches a fully built role object (e.g. one carrying a
    /// spawnpoint capability).
    pub fn assign(&self, id: PlayerId, role: Role) -> Result<(), SessionError> {
        self.update(id, |p| p.role = Some(role))
    }

    /// Moves a participant without going through the override path.
    pub fn place(
        &self,
        id: PlayerId,
        position: Vector3,
        rotation: Vector3,
    ) -> Result<(), SessionError> {
        self.update(id, |p| {
            p.position = position;
            p.rotation = rotation;
        })
    }

    /// Hints delivered to `id`, oldest first.
    pub fn hints_for(&self, id: PlayerId) -> Vec<String> {
        self.hints
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|h| h.to == id)
            .map(|h| h.message.clone())
            .collect()
    }

    /// Number of registered participants.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn update(
        &self,
        id: PlayerId,
        apply: impl FnOnce(&mut Participant),
    ) -> Result<(), SessionError> {
        let mut participants = self.lock();
        let participant = participants
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(SessionError::NotFound(id))?;
        apply(participant);
        Ok(())
    }

    /// A panic while holding the lock can't leave a participant half
    /// written, so a poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, Vec<Participant>> {
        self.participants
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl ParticipantRegistry for Roster {
    fn participants(&self) -> Vec<Participant> {
        self.lock().clone()
    }

    fn participant(&self, id: PlayerId) -> Option<Participant> {
        self.lock().iter().find(|p| p.id == id).cloned()
    }
}

impl RoleAssigner for Roster {
    fn set_role(&self, id: PlayerId, role: RoleId) -> Result<(), SessionError> {
        self.update(id, |p| p.role = Some(Role::for_id(role)))?;
        tracing::debug!(%id, %role, "role set");
        Ok(())
    }
}

impl PositionOverride for Roster {
    fn override_position(
        &self,
        id: PlayerId,
        position: Vector3,
        rotation: Vector3,
    ) -> Result<(), SessionError> {
        self.place(id, position, rotation)?;
        tracing::debug!(%id, %position, %rotation, "position overridden");
        Ok(())
    }
}

impl HintSink for Roster {
    fn send_hint(&self, id: PlayerId, message: &str) -> Result<(), SessionError> {
        if self.participant(id).is_none() {
            return Err(SessionError::NotFound(id));
        }
        self.hints
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Hint {
                to: id,
                message: message.to_owned(),
            });
        Ok(())
    }
}
