//! Integration tests for the image encoder control
//!
//! A recording camera session stands in for the platform capture pipeline so
//! the tests can observe exactly which settings reach it.

use mediactl_media::*;
use parking_lot::Mutex;
use std::sync::Arc;

/// Camera session that records every settings write
struct RecordingSession {
    resolutions: Vec<Resolution>,
    current: Mutex<ImageEncoderSettings>,
    writes: Mutex<Vec<ImageEncoderSettings>>,
}

impl RecordingSession {
    fn new(resolutions: Vec<Resolution>) -> Arc<Self> {
        Arc::new(Self {
            resolutions,
            current: Mutex::new(ImageEncoderSettings::default()),
            writes: Mutex::new(Vec::new()),
        })
    }

    fn writes(&self) -> Vec<ImageEncoderSettings> {
        self.writes.lock().clone()
    }
}

impl CameraSession for RecordingSession {
    fn supported_resolutions(&self) -> Vec<Resolution> {
        self.resolutions.clone()
    }

    fn image_encoder_settings(&self) -> ImageEncoderSettings {
        self.current.lock().clone()
    }

    fn set_image_encoder_settings(&self, settings: ImageEncoderSettings) {
        *self.current.lock() = settings.clone();
        self.writes.lock().push(settings);
    }
}

fn common_resolutions() -> Vec<Resolution> {
    vec![Resolution::VGA, Resolution::HD, Resolution::FULL_HD]
}

// ============================================================================
// SETTINGS NORMALISATION
// ============================================================================

#[test]
fn test_supported_resolutions_are_discrete() {
    let session = RecordingSession::new(common_resolutions());
    let control = ImageEncoderControl::new(session);

    let (resolutions, continuous) = control.supported_resolutions(&ImageEncoderSettings::default());
    assert_eq!(resolutions, common_resolutions());
    assert!(!continuous);
}

#[test]
fn test_supported_resolution_kept() {
    let session = RecordingSession::new(common_resolutions());
    let control = ImageEncoderControl::new(session.clone());

    control.set_image_settings(ImageEncoderSettings::new("jpeg", Resolution::FULL_HD));

    let writes = session.writes();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].resolution, Resolution::FULL_HD);
    assert_eq!(writes[0].codec, "jpeg");
}

#[test]
fn test_unsupported_resolution_snapped() {
    let session = RecordingSession::new(vec![Resolution::VGA, Resolution::HD]);
    let control = ImageEncoderControl::new(session.clone());

    control.set_image_settings(ImageEncoderSettings::new("jpeg", Resolution::new(1000, 1000)));

    assert_eq!(control.image_settings().resolution, Resolution::HD);
}

#[test]
fn test_no_candidates_leaves_resolution() {
    let session = RecordingSession::new(Vec::new());
    let control = ImageEncoderControl::new(session.clone());

    control.set_image_settings(ImageEncoderSettings::new("", Resolution::new(1000, 1000)));

    let applied = control.image_settings();
    assert_eq!(applied.resolution, Resolution::new(1000, 1000));
    assert_eq!(applied.codec, DEFAULT_IMAGE_CODEC);
}

#[test]
fn test_quality_passed_through() {
    let session = RecordingSession::new(common_resolutions());
    let control = ImageEncoderControl::new(session.clone());

    control.set_image_settings(
        ImageEncoderSettings::new("jpeg", Resolution::HD).with_quality(EncodingQuality::VeryHigh),
    );

    assert_eq!(control.image_settings().quality, EncodingQuality::VeryHigh);
}

#[test]
fn test_identical_settings_not_forwarded() {
    let session = RecordingSession::new(common_resolutions());
    let control = ImageEncoderControl::new(session.clone());

    let settings = ImageEncoderSettings::new("jpeg", Resolution::HD);
    control.set_image_settings(settings.clone());
    control.set_image_settings(settings);

    assert_eq!(session.writes().len(), 1);
}

#[test]
fn test_settings_serialization() {
    let settings =
        ImageEncoderSettings::new("jpeg", Resolution::VGA).with_quality(EncodingQuality::High);
    let serialized = serde_json::to_string(&settings).unwrap();
    let deserialized: ImageEncoderSettings = serde_json::from_str(&serialized).unwrap();
    assert_eq!(settings, deserialized);
}
