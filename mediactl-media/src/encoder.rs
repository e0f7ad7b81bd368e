//! Still-image encoder control for camera sessions
//!
//! The control itself holds no settings. It forwards reads to the camera
//! session and normalises writes: a missing codec becomes JPEG and the
//! requested resolution is snapped to the closest one the device supports.

use crate::resolution::{closest_resolution, Resolution};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Codec used when the caller does not pick one
pub const DEFAULT_IMAGE_CODEC: &str = "jpeg";

/// Encoding quality presets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncodingQuality {
    VeryLow,
    Low,
    #[default]
    Normal,
    High,
    VeryHigh,
}

/// Still-image encoder settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEncoderSettings {
    /// Codec name, empty when unset
    pub codec: String,
    pub resolution: Resolution,
    pub quality: EncodingQuality,
}

impl ImageEncoderSettings {
    pub fn new(codec: impl Into<String>, resolution: Resolution) -> Self {
        Self {
            codec: codec.into(),
            resolution,
            quality: EncodingQuality::default(),
        }
    }

    pub fn with_quality(mut self, quality: EncodingQuality) -> Self {
        self.quality = quality;
        self
    }
}

/// Camera session backing an [`ImageEncoderControl`]
pub trait CameraSession: Send + Sync {
    /// Resolutions the capture device can produce
    fn supported_resolutions(&self) -> Vec<Resolution>;

    fn image_encoder_settings(&self) -> ImageEncoderSettings;

    fn set_image_encoder_settings(&self, settings: ImageEncoderSettings);
}

/// Image encoder control forwarding to a [`CameraSession`]
pub struct ImageEncoderControl {
    session: Arc<dyn CameraSession>,
}

impl ImageEncoderControl {
    pub fn new(session: Arc<dyn CameraSession>) -> Self {
        Self { session }
    }

    pub fn supported_image_codecs(&self) -> Vec<String> {
        vec![DEFAULT_IMAGE_CODEC.to_string()]
    }

    pub fn image_codec_description(&self, codec: &str) -> Option<String> {
        (codec == DEFAULT_IMAGE_CODEC).then(|| "JPEG image".to_string())
    }

    /// Supported resolutions and whether the range is continuous
    ///
    /// Camera sessions only report discrete sizes, so the flag is always
    /// `false`. The settings argument does not narrow the list.
    pub fn supported_resolutions(&self, _settings: &ImageEncoderSettings) -> (Vec<Resolution>, bool) {
        (self.session.supported_resolutions(), false)
    }

    pub fn image_settings(&self) -> ImageEncoderSettings {
        self.session.image_encoder_settings()
    }

    /// Normalise and apply new settings
    ///
    /// Settings equal to the session's current ones are not forwarded.
    pub fn set_image_settings(&self, settings: ImageEncoderSettings) {
        if self.session.image_encoder_settings() == settings {
            return;
        }

        let mut settings = settings;
        self.apply_defaults(&mut settings);
        self.session.set_image_encoder_settings(settings);
    }

    fn apply_defaults(&self, settings: &mut ImageEncoderSettings) {
        if settings.codec.is_empty() {
            settings.codec = DEFAULT_IMAGE_CODEC.to_string();
        }

        let (resolutions, _) = self.supported_resolutions(settings);
        if let Some(closest) = closest_resolution(settings.resolution, &resolutions) {
            if closest != settings.resolution {
                debug!(
                    "Requested resolution {} unsupported, using {}",
                    settings.resolution, closest
                );
                settings.resolution = closest;
            }
        }
    }
}

impl std::fmt::Debug for ImageEncoderControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageEncoderControl").finish_non_exhaustive()
    }
}
