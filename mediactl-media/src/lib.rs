//! # mediactl media
//!
//! Image-encoder and media-player controls over pluggable platform media
//! services. The controls own no pipeline of their own: a camera session or
//! player service does the real work, and the controls normalise requests
//! going in and batch property notifications coming out.

#![warn(clippy::all)]

pub mod encoder;
pub mod error;
pub mod notify;
pub mod player;
pub mod resolution;
pub mod volume;

// Re-export main types
pub use encoder::{
    CameraSession, EncodingQuality, ImageEncoderControl, ImageEncoderSettings, DEFAULT_IMAGE_CODEC,
};
pub use error::{ErrorCategory, MediaError, MediaResult};
pub use notify::{DeferredNotifier, PropertyFlags};
pub use player::{
    AudioOutput, ControlHandle, ControlMessage, MediaContent, MediaStatus, MediaStream,
    MediaTimeRange, PlaybackState, PlayerConfig, PlayerControl, PlayerError, PlayerEvent,
    PlayerService, StreamTypes,
};
pub use resolution::{closest_resolution, Resolution};
pub use volume::{decibels_to_volume, volume_to_decibels, MAX_VOLUME_DB, MIN_VOLUME_DB};
