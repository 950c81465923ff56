//! Tracing set-up shared by both starters.

use crate::config::Settings;
use crate::error::{Result, ScaffoldError};
use tracing_subscriber::{EnvFilter, fmt};

/// Build the filter: `RUST_LOG` when set, else the configured level.
pub fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_level))
}

/// Install the global fmt subscriber.
///
/// Fails instead of panicking when a subscriber is already installed.
pub fn init_tracing(settings: &Settings) -> Result<()> {
    fmt()
        .with_env_filter(env_filter(settings))
        .with_target(settings.debug)
        .try_init()
        .map_err(|e| ScaffoldError::Telemetry(e.to_string()))?;

    tracing::debug!(app = %settings.app_name, level = %settings.log_level, "tracing initialised");
    Ok(())
}
