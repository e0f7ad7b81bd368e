//! End-to-end tests through the facade
//!
//! A scripted player service reports back through the control handle from a
//! worker thread, the way a platform service would.

use mediactl::*;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio_test::{assert_err, assert_ok};

/// Service that acknowledges every command via the control handle
#[derive(Default)]
struct ScriptedService {
    handle: Mutex<Option<ControlHandle>>,
}

impl ScriptedService {
    fn report<F>(&self, f: F)
    where
        F: FnOnce(&ControlHandle) + Send + 'static,
    {
        if let Some(handle) = self.handle.lock().clone() {
            std::thread::spawn(move || f(&handle)).join().unwrap();
        }
    }
}

impl PlayerService for ScriptedService {
    fn position(&self) -> i64 {
        0
    }

    fn seek(&self, position: i64) {
        self.report(move |h| h.update_position(position).unwrap());
    }

    fn set_rate(&self, rate: f64) {
        self.report(move |h| h.update_playback_rate(rate).unwrap());
    }

    fn load(&self, _media: &MediaContent, _stream: Option<&MediaStream>) {
        self.report(|h| {
            h.update_status(MediaStatus::Loaded).unwrap();
            h.update_media_info(
                90_000,
                StreamTypes::from_raw(StreamTypes::AUDIO | StreamTypes::VIDEO),
                true,
            )
            .unwrap();
        });
    }

    fn play(&self) {
        self.report(|h| h.update_status(MediaStatus::Buffered).unwrap());
    }

    fn pause(&self) {}

    fn stop(&self) {}

    fn buffer_status(&self) -> i32 {
        100
    }

    fn available_playback_ranges(&self) -> MediaTimeRange {
        MediaTimeRange::from_interval(0, 90_000)
    }
}

fn player(controls: &MediaControls) -> (Arc<ScriptedService>, PlayerControl) {
    let service = Arc::new(ScriptedService::default());
    let player = controls.player(service.clone()).unwrap();
    *service.handle.lock() = Some(player.handle());
    (service, player)
}

#[test]
fn test_init_twice() {
    assert_ok!(MediaControls::init());
    assert_ok!(MediaControls::init());
}

#[test]
fn test_invalid_config_rejected() {
    let mut config = GlobalConfig::default();
    config.player.initial_volume = 101;
    assert_err!(MediaControls::init_with(config));
}

#[test]
fn test_load_and_play_flow() {
    let controls = MediaControls::init().unwrap();
    let (_service, mut player) = player(&controls);
    let mut events = controls.events(&mut player);

    player.set_media(MediaContent::new("file:///movie.mp4"), None);
    player.process_pending();
    player.play();
    player.process_pending();

    let mut received = Vec::new();
    while let Some(event) = events.try_next() {
        received.push(event);
    }

    assert_eq!(
        received,
        vec![
            PlayerEvent::MediaChanged(MediaContent::new("file:///movie.mp4")),
            PlayerEvent::AudioAvailableChanged(true),
            PlayerEvent::VideoAvailableChanged(true),
            PlayerEvent::DurationChanged(90_000),
            PlayerEvent::SeekableChanged(true),
            PlayerEvent::MediaStatusChanged(MediaStatus::Loaded),
            PlayerEvent::StateChanged(PlaybackState::Playing),
            PlayerEvent::MediaStatusChanged(MediaStatus::Buffered),
        ]
    );
    assert_eq!(player.duration(), 90_000);
    assert!(player.is_seekable());
}

#[tokio::test]
async fn test_flush_arrives_as_one_batch() {
    let controls = MediaControls::init().unwrap();
    let (_service, mut player) = player(&controls);
    let mut events = controls
        .events(&mut player)
        .only(PropertyFlags::DURATION | PropertyFlags::STATUS);

    player.set_media(MediaContent::new("file:///movie.mp4"), None);
    assert_eq!(player.process_pending(), 3);

    assert_eq!(
        events.next_batch().await,
        vec![
            PlayerEvent::DurationChanged(90_000),
            PlayerEvent::MediaStatusChanged(MediaStatus::Loaded),
        ]
    );
}

#[test]
fn test_configured_player_defaults() {
    let config = GlobalConfig::from_json(r#"{"player": {"initial_volume": 25}}"#).unwrap();
    let controls = MediaControls::init_with(config).unwrap();
    let (_service, player) = player(&controls);

    assert_eq!(player.volume(), 25);
    assert!(!player.is_muted());
}

#[tokio::test]
async fn test_event_handler_receives_flush() {
    let controls = MediaControls::init().unwrap();
    let (_service, mut player) = player(&controls);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();

    let handler = EventHandler::new(controls.events(&mut player), move |event| {
        sink.lock().push(event.event_type());
    });

    // The service echo carries the rate already set, so only one event
    player.set_playback_rate(2.0);
    player.process_pending();
    player.update_position(1_500);
    player.process_pending();
    drop(player);
    handler.join().await;

    assert_eq!(
        *seen.lock(),
        vec!["playback_rate_changed", "position_changed"]
    );
}

#[test]
fn test_image_encoder_through_facade() {
    struct Session(Mutex<ImageEncoderSettings>);

    impl CameraSession for Session {
        fn supported_resolutions(&self) -> Vec<Resolution> {
            vec![Resolution::new(320, 240), Resolution::VGA]
        }

        fn image_encoder_settings(&self) -> ImageEncoderSettings {
            self.0.lock().clone()
        }

        fn set_image_encoder_settings(&self, settings: ImageEncoderSettings) {
            *self.0.lock() = settings;
        }
    }

    let controls = MediaControls::init().unwrap();
    let encoder = controls.image_encoder(Arc::new(Session(Mutex::default())));

    encoder.set_image_settings(ImageEncoderSettings::new("", Resolution::new(600, 400)));

    let applied = encoder.image_settings();
    assert_eq!(applied.codec, "jpeg");
    assert_eq!(applied.resolution, Resolution::VGA);
}
