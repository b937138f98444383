//! In-process event hub.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

use crate::{
    DispatchError, EventDispatcher, RoleChanged, RoleChangedHandler, RoundState, RoundStateHandler,
};

/// Named handlers for one event, in attach order.
struct HandlerTable<H> {
    entries: RwLock<Vec<(String, H)>>,
}

impl<H: Clone> HandlerTable<H> {
    fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    fn add(&self, name: &str, handler: H) -> Result<(), DispatchError> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if entries.iter().any(|(n, _)| n == name) {
            return Err(DispatchError::DuplicateHandler(name.to_owned()));
        }
        entries.push((name.to_owned(), handler));
        Ok(())
    }

    fn remove(&self, name: &str) -> Result<(), DispatchError> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let index = entries
            .iter()
            .position(|(n, _)| n == name)
            .ok_or_else(|| DispatchError::HandlerNotFound(name.to_owned()))?;
        entries.remove(index);
        Ok(())
    }

    /// Clones the handlers out so callbacks run without the lock held
    /// (a callback may attach or detach handlers itself).
    fn snapshot(&self) -> Vec<H> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, h)| h.clone())
            .collect()
    }

    fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

/// An in-process [`EventDispatcher`].
///
/// The host calls [`publish_round_state`](Self::publish_round_state) and
/// [`publish_role_changed`](Self::publish_role_changed) when the session
/// changes; every attached handler for that event runs in attach order.
///
/// After [`close`](Self::close) the hub rejects new handlers. Handlers
/// already attached can still be detached and still receive events.
pub struct EventHub {
    round_state: HandlerTable<RoundStateHandler>,
    role_changed: HandlerTable<RoleChangedHandler>,
    closed: AtomicBool,
}

impl EventHub {
    pub fn new() -> Self {
        Self {
            round_state: HandlerTable::new(),
            role_changed: HandlerTable::new(),
            closed: AtomicBool::new(false),
        }
    }

    /// Delivers a round state change to every round state handler.
    pub fn publish_round_state(&self, state: RoundState) {
        let handlers = self.round_state.snapshot();
        tracing::debug!(%state, handlers = handlers.len(), "round state changed");
        for handler in handlers {
            handler(state);
        }
    }

    /// Delivers a role change to every role changed handler.
    pub fn publish_role_changed(&self, event: &RoleChanged) {
        let handlers = self.role_changed.snapshot();
        tracing::trace!(
            player = %event.player,
            role = %event.new_role_id(),
            handlers = handlers.len(),
            "role changed"
        );
        for handler in handlers {
            handler(event);
        }
    }

    /// Stops accepting new handlers.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Number of attached round state handlers.
    pub fn round_state_handler_count(&self) -> usize {
        self.round_state.len()
    }

    /// Number of attached role changed handlers.
    pub fn role_changed_handler_count(&self) -> usize {
        self.role_changed.len()
    }

    fn ensure_open(&self) -> Result<(), DispatchError> {
        if self.is_closed() {
            Err(DispatchError::Closed)
        } else {
            Ok(())
        }
    }
}

impl Default for EventHub {
    fn default() -> Self {
        Self::new()
    }
}

impl EventDispatcher for EventHub {
    fn add_round_state_handler(
        &self,
        name: &str,
        handler: RoundStateHandler,
    ) -> Result<(), DispatchError> {
        self.ensure_open()?;
        self.round_state.add(name, handler)
    }

    fn remove_round_state_handler(&self, name: &str) -> Result<(), DispatchError> {
        self.round_state.remove(name)
    }

    fn add_role_changed_handler(
        &self,
        name: &str,
        handler: RoleChangedHandler,
    ) -> Result<(), DispatchError> {
        self.ensure_open()?;
        self.role_changed.add(name, handler)
    }

    fn remove_role_changed_handler(&self, name: &str) -> Result<(), DispatchError> {
        self.role_changed.remove(name)
    }
}
