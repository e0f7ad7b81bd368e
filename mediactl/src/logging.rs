//! Structured logging setup

use crate::config::GlobalConfig;
use mediactl_media::{MediaError, MediaResult};
use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber
///
/// `RUST_LOG` takes precedence over the configured filter. Fails if a global
/// subscriber is already installed.
pub fn init_logging(config: &GlobalConfig) -> MediaResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.effective_filter()))
        .map_err(|e| MediaError::InvalidConfiguration {
            message: format!("Invalid log filter: {}", e),
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| MediaError::LoggingInit {
            reason: e.to_string(),
        })
}
