//! # mediactl
//!
//! Camera image-encoder and media-player controls that sit between an
//! application and a platform media service. The service does the decoding,
//! capture and rendering; the controls normalise settings on the way in and
//! turn bursts of service updates into single batches of property events on
//! the way out.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mediactl::{MediaContent, MediaControls, PlayerService};
//! use std::sync::Arc;
//!
//! # async fn example(service: Arc<dyn PlayerService>) -> Result<(), mediactl::MediaError> {
//! let controls = MediaControls::init()?;
//! let mut player = controls.player(service)?;
//! let mut events = controls.events(&mut player);
//!
//! player.set_media(MediaContent::new("file:///movie.mp4"), None);
//! player.play();
//!
//! loop {
//!     tokio::select! {
//!         _ = player.process_next() => {}
//!         batch = events.next_batch() => println!("Player events: {:?}", batch),
//!     }
//! }
//! # }
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

pub use mediactl_media::{
    closest_resolution, decibels_to_volume, volume_to_decibels, AudioOutput, CameraSession,
    ControlHandle, ControlMessage, EncodingQuality, ErrorCategory, ImageEncoderControl,
    ImageEncoderSettings, MediaContent, MediaError, MediaResult, MediaStatus, MediaStream,
    MediaTimeRange, PlaybackState, PlayerConfig, PlayerControl, PlayerError, PlayerEvent,
    PlayerService, PropertyFlags, Resolution, StreamTypes,
};

// Public API modules
pub mod config;
pub mod event;
pub mod logging;

pub use config::GlobalConfig;
pub use event::{EventHandler, EventStream};

use std::sync::Arc;
use tracing::{debug, info};

/// Main entry point
#[derive(Debug, Clone)]
pub struct MediaControls {
    config: Arc<GlobalConfig>,
}

impl MediaControls {
    /// Initialize with default settings
    pub fn init() -> MediaResult<Self> {
        Self::init_with(GlobalConfig::default())
    }

    /// Initialize with custom global configuration
    ///
    /// Installs the global log subscriber unless one is already present.
    pub fn init_with(config: GlobalConfig) -> MediaResult<Self> {
        config.validate()?;

        if let Err(e) = logging::init_logging(&config) {
            if !e.is_recoverable() {
                return Err(e);
            }
            debug!("Keeping existing log subscriber: {}", e);
        }

        info!("Media controls initialized");
        Ok(Self {
            config: Arc::new(config),
        })
    }

    /// Global configuration in use
    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    /// Create a player control over `service` using the configured defaults
    pub fn player(&self, service: Arc<dyn PlayerService>) -> MediaResult<PlayerControl> {
        PlayerControl::with_config(service, self.config.player.clone())
    }

    /// Create an image encoder control over a camera session
    pub fn image_encoder(&self, session: Arc<dyn CameraSession>) -> ImageEncoderControl {
        ImageEncoderControl::new(session)
    }

    /// Subscribe to a player's events as a stream
    pub fn events(&self, player: &mut PlayerControl) -> EventStream {
        EventStream::new(player.subscribe())
    }
}
