//! Random choice of fallback roles.

use std::sync::{Mutex, PoisonError};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rolewarden_roles::RoleId;

/// Chooses the role a duplicate holder is moved to.
///
/// Injected into the resolver so tests can control the outcome.
pub trait FallbackPicker: Send + Sync + 'static {
    /// Picks one role from `pool`, `None` if the pool is empty.
    fn pick(&self, pool: &[RoleId]) -> Option<RoleId>;
}

/// Uniform random choice backed by a [`StdRng`].
#[derive(Debug)]
pub struct RandomPicker {
    rng: Mutex<StdRng>,
}

impl RandomPicker {
    /// A picker seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// A deterministic picker. The same seed yields the same sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl FallbackPicker for RandomPicker {
    fn pick(&self, pool: &[RoleId]) -> Option<RoleId> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        pool.choose(&mut *rng).copied()
    }
}
