//! Observability and telemetry.
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! binary's concern.

use crate::{Error, Result};
use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static LOGGING_INIT: OnceLock<()> = OnceLock::new();

/// Initializes logging for the current process.
///
/// Installs an fmt layer writing to stderr behind an environment filter.
/// `RUST_LOG` overrides the default level; `verbose` raises the default
/// from `warn` to `debug`.
///
/// # Errors
///
/// Returns [`Error::OperationFailed`] when logging was already initialized
/// or a global subscriber is already installed.
pub fn init(verbose: bool) -> Result<()> {
    if LOGGING_INIT.get().is_some() {
        return Err(Error::OperationFailed {
            operation: "logging_init".to_string(),
            cause: "logging already initialized".to_string(),
        });
    }

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .with(filter)
        .try_init()
        .map_err(|e| Error::OperationFailed {
            operation: "logging_init".to_string(),
            cause: e.to_string(),
        })?;

    let _ = LOGGING_INIT.set(());
    Ok(())
}
