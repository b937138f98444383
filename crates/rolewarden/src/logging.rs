//! Log output setup for hosts.
//!
//! Every Rolewarden crate logs through `tracing`. A host that doesn't
//! install its own subscriber can call [`init`] once at startup. The
//! filter comes from `RUST_LOG` and defaults to `info`, e.g.
//! `RUST_LOG=rolewarden_fix=debug` shows every reassignment and guard.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Installs a formatting subscriber, ignoring an already installed one.
pub fn init() {
    if try_init().is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Installs a formatting subscriber.
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn try_init() -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::util::SubscriberInitExt;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).finish().try_init()
}
