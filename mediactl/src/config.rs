//! Configuration types and defaults

use mediactl_media::{MediaError, MediaResult, PlayerConfig};
use serde::{Deserialize, Serialize};

/// Global configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Enable debug logging
    pub debug_logging: bool,
    /// Filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Defaults for new player controls
    pub player: PlayerConfig,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            debug_logging: false,
            log_filter: "info".to_string(),
            player: PlayerConfig::default(),
        }
    }
}

impl GlobalConfig {
    /// Parse from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> MediaResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| MediaError::InvalidConfiguration {
                message: format!("Failed to parse config: {}", e),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> MediaResult<()> {
        if self.log_filter.trim().is_empty() {
            return Err(MediaError::InvalidConfiguration {
                message: "log filter must not be empty".to_string(),
            });
        }
        self.player.validate()
    }

    /// Filter directive to install
    pub fn effective_filter(&self) -> &str {
        if self.debug_logging {
            "debug"
        } else {
            &self.log_filter
        }
    }
}
