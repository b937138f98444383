//! Attaching the fixes to an event dispatcher.
//!
//! [`RoleSpawnFix`] is the unit a host loads and unloads. `attach`
//! registers two named handlers; each handler does nothing but spawn a
//! Tokio task that sleeps for the settle delay and then runs the
//! resolver or the validator. The engine's event thread is never
//! blocked.
//!
//! Failures to attach or detach are logged and reported as `false`. A
//! fix that failed to attach simply stays inactive.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use rolewarden_events::{EventDispatcher, RoleChanged, RoundState};
use rolewarden_roles::{PlayerId, Vector3};
use rolewarden_session::{
    HintSink, ParticipantRegistry, PositionOverride, RoleAssigner, SessionError,
};
use tokio::runtime::Handle;
use tracing::{info, warn};

use crate::{
    DuplicateRoleResolver, FallbackPicker, FixError, RandomPicker, RoleFixConfig, SpawnValidator,
};

/// Name of the round state handler.
pub const ROUND_STARTED_HANDLER: &str = "role_spawn.round_started";

/// Name of the role changed handler.
pub const ROLE_CHANGED_HANDLER: &str = "role_spawn.role_changed";

/// Duplicate SCP resolution and spawn validation, ready to attach.
pub struct RoleSpawnFix<S, P = RandomPicker> {
    resolver: Arc<DuplicateRoleResolver<S, P>>,
    validator: Arc<SpawnValidator<S>>,
    round_start_delay: Duration,
    role_change_delay: Duration,
    attached: AtomicBool,
}

impl<S> RoleSpawnFix<S, RandomPicker>
where
    S: ParticipantRegistry + RoleAssigner + PositionOverride + HintSink,
{
    /// Builds the fixes with an OS-seeded fallback picker.
    pub fn with_random_picker(session: Arc<S>, config: RoleFixConfig) -> Self {
        Self::new(session, RandomPicker::from_os_rng(), config)
    }
}

impl<S, P> RoleSpawnFix<S, P>
where
    S: ParticipantRegistry + RoleAssigner + PositionOverride + HintSink,
    P: FallbackPicker,
{
    /// Builds the fixes. `config` is validated first.
    pub fn new(session: Arc<S>, picker: P, config: RoleFixConfig) -> Self {
        let config = config.validated();
        Self {
            resolver: Arc::new(DuplicateRoleResolver::from_validated(
                Arc::clone(&session),
                picker,
                &config,
            )),
            validator: Arc::new(SpawnValidator::from_validated(session, &config)),
            round_start_delay: config.round_start_delay(),
            role_change_delay: config.role_change_delay(),
            attached: AtomicBool::new(false),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached.load(Ordering::SeqCst)
    }

    /// Registers both handlers on `dispatcher`.
    ///
    /// Must be called from within a Tokio runtime; the delayed work is
    /// spawned on it. Returns `false` (and logs a warning) if the
    /// handlers could not be registered.
    pub fn attach(&self, dispatcher: &dyn EventDispatcher) -> bool {
        match self.try_attach(dispatcher) {
            Ok(()) => {
                info!("registered role spawn handlers");
                true
            }
            Err(e) => {
                warn!(error = %e, "failed to register role spawn handlers");
                false
            }
        }
    }

    /// Removes both handlers from `dispatcher`.
    ///
    /// Returns `false` (and logs a warning) if either could not be
    /// removed. Tasks already scheduled still run.
    pub fn detach(&self, dispatcher: &dyn EventDispatcher) -> bool {
        match self.try_detach(dispatcher) {
            Ok(()) => {
                info!("removed role spawn handlers");
                true
            }
            Err(e) => {
                warn!(error = %e, "failed to remove role spawn handlers");
                false
            }
        }
    }

    /// Moves a participant directly, bypassing validation.
    pub fn fix_position(
        &self,
        player: PlayerId,
        position: Vector3,
        rotation: Vector3,
    ) -> Result<(), SessionError> {
        self.validator.fix_position(player, position, rotation)
    }

    fn try_attach(&self, dispatcher: &dyn EventDispatcher) -> Result<(), FixError> {
        if self.is_attached() {
            return Err(FixError::AlreadyAttached);
        }
        let runtime = Handle::try_current().map_err(|_| FixError::NoRuntime)?;

        let resolver = Arc::clone(&self.resolver);
        let delay = self.round_start_delay;
        let on_round_state = {
            let runtime = runtime.clone();
            move |state: RoundState| {
                if !state.is_in_progress() {
                    return;
                }
                let resolver = Arc::clone(&resolver);
                schedule(&runtime, delay, async move {
                    match resolver.resolve_duplicates() {
                        Ok(reassigned) if !reassigned.is_empty() => {
                            info!(count = reassigned.len(), "resolved duplicate SCP roles");
                        }
                        Ok(_) => {}
                        Err(e) => warn!(error = %e, "duplicate role resolution failed"),
                    }
                });
            }
        };

        let validator = Arc::clone(&self.validator);
        let delay = self.role_change_delay;
        let on_role_changed = move |event: &RoleChanged| {
            let validator = Arc::clone(&validator);
            let event = event.clone();
            schedule(&runtime, delay, async move {
                if let Err(e) = validator.validate_and_correct(&event) {
                    warn!(player = %event.player, error = %e, "spawn correction failed");
                }
            });
        };

        dispatcher.add_round_state_handler(ROUND_STARTED_HANDLER, Arc::new(on_round_state))?;
        if let Err(e) =
            dispatcher.add_role_changed_handler(ROLE_CHANGED_HANDLER, Arc::new(on_role_changed))
        {
            // Don't leave half the fix attached.
            let _ = dispatcher.remove_round_state_handler(ROUND_STARTED_HANDLER);
            return Err(e.into());
        }

        self.attached.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn try_detach(&self, dispatcher: &dyn EventDispatcher) -> Result<(), FixError> {
        if !self.is_attached() {
            return Err(FixError::NotAttached);
        }
        let round = dispatcher.remove_round_state_handler(ROUND_STARTED_HANDLER);
        let role = dispatcher.remove_role_changed_handler(ROLE_CHANGED_HANDLER);
        self.attached.store(false, Ordering::SeqCst);
        round?;
        role?;
        Ok(())
    }
}

/// Runs `work` on `runtime` once `delay` has elapsed.
fn schedule<F>(runtime: &Handle, delay: Duration, work: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    runtime.spawn(async move {
        tokio::time::sleep(delay).await;
        work.await;
    });
}
