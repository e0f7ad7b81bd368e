//! Media player control
//!
//! [`PlayerControl`] fronts a platform [`PlayerService`]. Commands from the
//! application are forwarded to the service straight away, while updates
//! coming back from the service are stored and announced to observers through
//! a [`DeferredNotifier`], so a burst of updates produces one batch of
//! [`PlayerEvent`]s.
//!
//! The control is owned by one task. Services running on their own threads
//! report through a [`ControlHandle`], whose messages are applied when the
//! owner calls [`PlayerControl::process_pending`] or
//! [`PlayerControl::process_next`].

use crate::error::{MediaError, MediaResult};
use crate::notify::{DeferredNotifier, PropertyFlags};
use crate::volume::volume_to_decibels;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, trace, warn};

/// Play/pause/stop state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Progress of the current media through loading and playback
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaStatus {
    Unknown,
    #[default]
    NoMedia,
    Loading,
    Loaded,
    Stalled,
    Buffering,
    Buffered,
    EndOfMedia,
    InvalidMedia,
}

/// Error reported by the player service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerError {
    #[default]
    NoError,
    Resource,
    Format,
    Network,
    AccessDenied,
    ServiceMissing,
}

/// Elementary stream kinds present in the loaded media
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StreamTypes {
    pub audio: bool,
    pub video: bool,
}

impl StreamTypes {
    pub const AUDIO: u32 = 0x01;
    pub const VIDEO: u32 = 0x02;

    /// Parse from raw bitmask value
    pub fn from_raw(bits: u32) -> Self {
        Self {
            audio: bits & Self::AUDIO != 0,
            video: bits & Self::VIDEO != 0,
        }
    }

    pub fn to_raw(&self) -> u32 {
        let mut bits = 0;
        if self.audio {
            bits |= Self::AUDIO;
        }
        if self.video {
            bits |= Self::VIDEO;
        }
        bits
    }
}

/// Reference to the media being played
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MediaContent {
    pub url: Option<String>,
}

impl MediaContent {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }

    pub fn is_null(&self) -> bool {
        self.url.is_none()
    }
}

/// In-memory stream supplied alongside a [`MediaContent`]
pub type MediaStream = Bytes;

/// Ordered, non-overlapping set of playable intervals in milliseconds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaTimeRange {
    intervals: Vec<(i64, i64)>,
}

impl MediaTimeRange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_interval(start: i64, end: i64) -> Self {
        let mut range = Self::new();
        range.add_interval(start, end);
        range
    }

    /// Add `[start, end]`, merging with any interval it touches
    ///
    /// Intervals with `end < start` are ignored.
    pub fn add_interval(&mut self, start: i64, end: i64) {
        if end < start {
            return;
        }

        let mut merged = (start, end);
        let mut result = Vec::with_capacity(self.intervals.len() + 1);
        for &(s, e) in &self.intervals {
            if e.saturating_add(1) < merged.0 || merged.1.saturating_add(1) < s {
                result.push((s, e));
            } else {
                merged = (merged.0.min(s), merged.1.max(e));
            }
        }
        result.push(merged);
        result.sort_unstable();
        self.intervals = result;
    }

    pub fn intervals(&self) -> &[(i64, i64)] {
        &self.intervals
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn contains(&self, time: i64) -> bool {
        self.intervals.iter().any(|&(s, e)| s <= time && time <= e)
    }

    pub fn earliest_time(&self) -> Option<i64> {
        self.intervals.first().map(|&(s, _)| s)
    }

    pub fn latest_time(&self) -> Option<i64> {
        self.intervals.last().map(|&(_, e)| e)
    }
}

/// Platform media service driven by a [`PlayerControl`]
pub trait PlayerService: Send + Sync {
    /// Current playback position in milliseconds
    fn position(&self) -> i64;

    fn seek(&self, position: i64);

    fn set_rate(&self, rate: f64);

    fn load(&self, media: &MediaContent, stream: Option<&MediaStream>);

    fn play(&self);

    fn pause(&self);

    fn stop(&self);

    /// Buffer fill level, 0-100
    fn buffer_status(&self) -> i32;

    fn available_playback_ranges(&self) -> MediaTimeRange;
}

/// Audio renderer gain control
pub trait AudioOutput: Send + Sync {
    /// Set output gain in hundredths of a decibel
    fn put_volume(&self, decibels: i32);
}

/// Notifications emitted by a [`PlayerControl`]
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    Error { error: PlayerError, message: String },
    PlaybackRateChanged(f64),
    AudioAvailableChanged(bool),
    VideoAvailableChanged(bool),
    PositionChanged(i64),
    DurationChanged(i64),
    SeekableChanged(bool),
    MediaStatusChanged(MediaStatus),
    StateChanged(PlaybackState),
    VolumeChanged(i32),
    MutedChanged(bool),
    MediaChanged(MediaContent),
}

impl PlayerEvent {
    /// Get the event type as a string
    pub fn event_type(&self) -> &'static str {
        match self {
            PlayerEvent::Error { .. } => "error",
            PlayerEvent::PlaybackRateChanged(_) => "playback_rate_changed",
            PlayerEvent::AudioAvailableChanged(_) => "audio_available_changed",
            PlayerEvent::VideoAvailableChanged(_) => "video_available_changed",
            PlayerEvent::PositionChanged(_) => "position_changed",
            PlayerEvent::DurationChanged(_) => "duration_changed",
            PlayerEvent::SeekableChanged(_) => "seekable_changed",
            PlayerEvent::MediaStatusChanged(_) => "media_status_changed",
            PlayerEvent::StateChanged(_) => "state_changed",
            PlayerEvent::VolumeChanged(_) => "volume_changed",
            PlayerEvent::MutedChanged(_) => "muted_changed",
            PlayerEvent::MediaChanged(_) => "media_changed",
        }
    }

    /// Check if this is an error event
    pub fn is_error_event(&self) -> bool {
        matches!(self, PlayerEvent::Error { .. })
    }

    /// The deferred property this event reports
    ///
    /// Volume, mute and media changes are emitted directly and map to
    /// [`PropertyFlags::NONE`].
    pub fn property(&self) -> PropertyFlags {
        match self {
            PlayerEvent::Error { .. } => PropertyFlags::ERROR,
            PlayerEvent::PlaybackRateChanged(_) => PropertyFlags::PLAYBACK_RATE,
            PlayerEvent::AudioAvailableChanged(_) | PlayerEvent::VideoAvailableChanged(_) => {
                PropertyFlags::STREAM_TYPES
            }
            PlayerEvent::PositionChanged(_) => PropertyFlags::POSITION,
            PlayerEvent::DurationChanged(_) => PropertyFlags::DURATION,
            PlayerEvent::SeekableChanged(_) => PropertyFlags::SEEKABLE,
            PlayerEvent::MediaStatusChanged(_) => PropertyFlags::STATUS,
            PlayerEvent::StateChanged(_) => PropertyFlags::STATE,
            PlayerEvent::VolumeChanged(_)
            | PlayerEvent::MutedChanged(_)
            | PlayerEvent::MediaChanged(_) => PropertyFlags::NONE,
        }
    }
}

/// Messages queued for the task owning a [`PlayerControl`]
#[derive(Clone)]
pub enum ControlMessage {
    /// Flush pending property notifications
    PropertiesChanged,
    UpdateState(PlaybackState),
    UpdateStatus(MediaStatus),
    UpdateMediaInfo {
        duration: i64,
        stream_types: StreamTypes,
        seekable: bool,
    },
    UpdatePlaybackRate(f64),
    UpdateError {
        error: PlayerError,
        message: String,
    },
    UpdatePosition(i64),
    UpdateAudioOutput(Option<Arc<dyn AudioOutput>>),
}

impl std::fmt::Debug for ControlMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ControlMessage::PropertiesChanged => write!(f, "PropertiesChanged"),
            ControlMessage::UpdateState(state) => write!(f, "UpdateState({:?})", state),
            ControlMessage::UpdateStatus(status) => write!(f, "UpdateStatus({:?})", status),
            ControlMessage::UpdateMediaInfo {
                duration,
                stream_types,
                seekable,
            } => write!(
                f,
                "UpdateMediaInfo({}, {:?}, {})",
                duration, stream_types, seekable
            ),
            ControlMessage::UpdatePlaybackRate(rate) => write!(f, "UpdatePlaybackRate({})", rate),
            ControlMessage::UpdateError { error, message } => {
                write!(f, "UpdateError({:?}, {:?})", error, message)
            }
            ControlMessage::UpdatePosition(position) => write!(f, "UpdatePosition({})", position),
            ControlMessage::UpdateAudioOutput(output) => {
                write!(f, "UpdateAudioOutput({})", output.is_some())
            }
        }
    }
}

/// Player control configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Volume applied before the first `set_volume`, 0-100
    pub initial_volume: i32,
    pub muted: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            initial_volume: 100,
            muted: false,
        }
    }
}

impl PlayerConfig {
    /// Validate configuration
    pub fn validate(&self) -> MediaResult<()> {
        if !(0..=100).contains(&self.initial_volume) {
            return Err(MediaError::InvalidConfiguration {
                message: format!("initial volume {} out of range", self.initial_volume),
            });
        }
        Ok(())
    }
}

/// Cloneable sender used by services to report into a [`PlayerControl`]
#[derive(Debug, Clone)]
pub struct ControlHandle {
    tx: mpsc::UnboundedSender<ControlMessage>,
}

impl ControlHandle {
    /// Queue a raw message for the control
    pub fn post(&self, message: ControlMessage) -> MediaResult<()> {
        self.tx
            .send(message)
            .map_err(|_| MediaError::ControlClosed {
                control: "player".to_string(),
            })
    }

    pub fn update_state(&self, state: PlaybackState) -> MediaResult<()> {
        self.post(ControlMessage::UpdateState(state))
    }

    pub fn update_status(&self, status: MediaStatus) -> MediaResult<()> {
        self.post(ControlMessage::UpdateStatus(status))
    }

    pub fn update_media_info(
        &self,
        duration: i64,
        stream_types: StreamTypes,
        seekable: bool,
    ) -> MediaResult<()> {
        self.post(ControlMessage::UpdateMediaInfo {
            duration,
            stream_types,
            seekable,
        })
    }

    pub fn update_playback_rate(&self, rate: f64) -> MediaResult<()> {
        self.post(ControlMessage::UpdatePlaybackRate(rate))
    }

    pub fn update_error(&self, error: PlayerError, message: impl Into<String>) -> MediaResult<()> {
        self.post(ControlMessage::UpdateError {
            error,
            message: message.into(),
        })
    }

    pub fn update_position(&self, position: i64) -> MediaResult<()> {
        self.post(ControlMessage::UpdatePosition(position))
    }

    pub fn update_audio_output(&self, output: Option<Arc<dyn AudioOutput>>) -> MediaResult<()> {
        self.post(ControlMessage::UpdateAudioOutput(output))
    }
}

/// Media player control over a [`PlayerService`]
pub struct PlayerControl {
    service: Arc<dyn PlayerService>,
    audio: Option<Arc<dyn AudioOutput>>,
    notifier: DeferredNotifier<ControlMessage>,
    queue_tx: mpsc::UnboundedSender<ControlMessage>,
    queue_rx: mpsc::UnboundedReceiver<ControlMessage>,
    observers: Vec<mpsc::UnboundedSender<PlayerEvent>>,
    state: PlaybackState,
    status: MediaStatus,
    error: PlayerError,
    error_string: String,
    stream_types: StreamTypes,
    volume: i32,
    muted: bool,
    position: Cell<i64>,
    pending_position: Option<i64>,
    duration: i64,
    playback_rate: f64,
    seekable: bool,
    media: MediaContent,
    stream: Option<MediaStream>,
}

impl PlayerControl {
    pub fn new(service: Arc<dyn PlayerService>) -> Self {
        let (queue_tx, queue_rx) = mpsc::unbounded_channel();
        let notifier = DeferredNotifier::new(queue_tx.clone(), ControlMessage::PropertiesChanged);
        let config = PlayerConfig::default();

        Self {
            service,
            audio: None,
            notifier,
            queue_tx,
            queue_rx,
            observers: Vec::new(),
            state: PlaybackState::Stopped,
            status: MediaStatus::NoMedia,
            error: PlayerError::NoError,
            error_string: String::new(),
            stream_types: StreamTypes::default(),
            volume: config.initial_volume,
            muted: config.muted,
            position: Cell::new(0),
            pending_position: None,
            duration: 0,
            playback_rate: 0.0,
            seekable: false,
            media: MediaContent::default(),
            stream: None,
        }
    }

    pub fn with_config(service: Arc<dyn PlayerService>, config: PlayerConfig) -> MediaResult<Self> {
        config.validate()?;
        let mut control = Self::new(service);
        control.volume = config.initial_volume;
        control.muted = config.muted;
        Ok(control)
    }

    /// Handle for posting service updates from other threads
    pub fn handle(&self) -> ControlHandle {
        ControlHandle {
            tx: self.queue_tx.clone(),
        }
    }

    /// Register an observer
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<PlayerEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.observers.push(tx);
        rx
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn media_status(&self) -> MediaStatus {
        self.status
    }

    pub fn duration(&self) -> i64 {
        self.duration
    }

    /// Playback position, or the seek target held while stopped
    pub fn position(&self) -> i64 {
        if let Some(pending) = self.pending_position {
            return pending;
        }

        let position = self.service.position();
        self.position.set(position);
        position
    }

    /// Seek, or hold the target until playback starts when stopped
    pub fn set_position(&mut self, position: i64) {
        if self.status == MediaStatus::EndOfMedia {
            self.status = MediaStatus::Loaded;
            self.emit(PlayerEvent::MediaStatusChanged(self.status));
        }

        if self.state == PlaybackState::Stopped && self.pending_position != Some(position) {
            self.pending_position = Some(position);
            self.emit(PlayerEvent::PositionChanged(position));
            return;
        }

        self.service.seek(position);
        self.pending_position = None;
    }

    pub fn volume(&self) -> i32 {
        self.volume
    }

    /// Set volume, clamped to 0-100
    pub fn set_volume(&mut self, volume: i32) {
        let bounded = volume.clamp(0, 100);
        if self.volume == bounded {
            return;
        }

        self.volume = bounded;
        if !self.muted {
            self.apply_volume(self.volume);
        }
        self.emit(PlayerEvent::VolumeChanged(self.volume));
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn set_muted(&mut self, muted: bool) {
        if self.muted == muted {
            return;
        }

        self.muted = muted;
        self.apply_volume(self.effective_volume());
        self.emit(PlayerEvent::MutedChanged(self.muted));
    }

    pub fn buffer_status(&self) -> i32 {
        self.service.buffer_status()
    }

    pub fn is_audio_available(&self) -> bool {
        self.stream_types.audio
    }

    pub fn is_video_available(&self) -> bool {
        self.stream_types.video
    }

    pub fn is_seekable(&self) -> bool {
        self.seekable
    }

    pub fn available_playback_ranges(&self) -> MediaTimeRange {
        self.service.available_playback_ranges()
    }

    pub fn playback_rate(&self) -> f64 {
        self.playback_rate
    }

    pub fn set_playback_rate(&mut self, rate: f64) {
        if self.playback_rate != rate {
            self.service.set_rate(rate);
            self.playback_rate = rate;
            self.emit(PlayerEvent::PlaybackRateChanged(rate));
        }
    }

    pub fn error(&self) -> PlayerError {
        self.error
    }

    pub fn error_string(&self) -> &str {
        &self.error_string
    }

    pub fn media(&self) -> &MediaContent {
        &self.media
    }

    pub fn media_stream(&self) -> Option<&MediaStream> {
        self.stream.as_ref()
    }

    /// Load new media
    ///
    /// Pending notifications other than the playback rate belong to the old
    /// media and are discarded. The rest are flushed immediately.
    pub fn set_media(&mut self, media: MediaContent, stream: Option<MediaStream>) {
        info!("Loading media {:?}", media.url);
        self.pending_position = None;

        self.media = media;
        self.stream = stream;

        self.notifier.retain(PropertyFlags::PLAYBACK_RATE);

        self.service.load(&self.media, self.stream.as_ref());

        self.emit(PlayerEvent::MediaChanged(self.media.clone()));
        let properties = self.notifier.take();
        self.emit_property_changes(properties);
    }

    /// Start playback
    ///
    /// With invalid media the control reloads first and handles queued
    /// messages until the service reports an error, so service updates
    /// already queued are applied inside this call.
    pub fn play(&mut self) {
        self.play_or_pause(PlaybackState::Playing);
    }

    /// Pause playback, reloading invalid media the same way as [`play`](Self::play)
    pub fn pause(&mut self) {
        self.play_or_pause(PlaybackState::Paused);
    }

    fn play_or_pause(&mut self, state: PlaybackState) {
        if self.status == MediaStatus::NoMedia || state == PlaybackState::Stopped {
            return;
        }
        if self.status == MediaStatus::InvalidMedia {
            debug!("Reloading invalid media before {:?}", state);
            let (media, stream) = (self.media.clone(), self.stream.clone());
            self.set_media(media, stream);
            self.process_until_error();
            if self.error != PlayerError::NoError {
                warn!("Reload failed: {:?} {}", self.error, self.error_string);
                return;
            }
        }

        self.state = state;

        if let Some(pending) = self.pending_position {
            self.set_position(pending);
        }

        match state {
            PlaybackState::Paused => self.service.pause(),
            _ => self.service.play(),
        }

        self.emit(PlayerEvent::StateChanged(self.state));
    }

    pub fn stop(&mut self) {
        self.service.stop();
        self.state = PlaybackState::Stopped;
        self.emit(PlayerEvent::StateChanged(self.state));
    }

    pub fn update_state(&mut self, state: PlaybackState) {
        if self.state != state {
            self.state = state;
            self.notifier.mark_dirty(PropertyFlags::STATE);
        }
    }

    pub fn update_status(&mut self, status: MediaStatus) {
        if self.status != status {
            self.status = status;
            self.notifier.mark_dirty(PropertyFlags::STATUS);
        }
    }

    pub fn update_media_info(&mut self, duration: i64, stream_types: StreamTypes, seekable: bool) {
        let mut properties = PropertyFlags::NONE;

        if self.duration != duration {
            self.duration = duration;
            properties |= PropertyFlags::DURATION;
        }
        if self.stream_types != stream_types {
            self.stream_types = stream_types;
            properties |= PropertyFlags::STREAM_TYPES;
        }
        if self.seekable != seekable {
            self.seekable = seekable;
            properties |= PropertyFlags::SEEKABLE;
        }

        self.notifier.mark_dirty(properties);
    }

    pub fn update_playback_rate(&mut self, rate: f64) {
        if self.playback_rate != rate {
            self.playback_rate = rate;
            self.notifier.mark_dirty(PropertyFlags::PLAYBACK_RATE);
        }
    }

    /// Replace the audio output and push the current gain to it
    pub fn update_audio_output(&mut self, output: Option<Arc<dyn AudioOutput>>) {
        self.audio = output;
        self.apply_volume(self.effective_volume());
    }

    /// Record a service error
    ///
    /// The value is always stored. A notification is only scheduled for an
    /// actual error, and only emitted if the error is still set at flush.
    pub fn update_error(&mut self, error: PlayerError, message: impl Into<String>) {
        self.error = error;
        self.error_string = message.into();

        if self.error != PlayerError::NoError {
            self.notifier.mark_dirty(PropertyFlags::ERROR);
        }
    }

    pub fn update_position(&mut self, position: i64) {
        if self.position.get() != position {
            self.position.set(position);
            self.notifier.mark_dirty(PropertyFlags::POSITION);
        }
    }

    /// Apply one queued message
    pub fn handle_message(&mut self, message: ControlMessage) {
        trace!("Handling {:?}", message);
        match message {
            ControlMessage::PropertiesChanged => {
                let properties = self.notifier.take_scheduled();
                self.emit_property_changes(properties);
            }
            ControlMessage::UpdateState(state) => self.update_state(state),
            ControlMessage::UpdateStatus(status) => self.update_status(status),
            ControlMessage::UpdateMediaInfo {
                duration,
                stream_types,
                seekable,
            } => self.update_media_info(duration, stream_types, seekable),
            ControlMessage::UpdatePlaybackRate(rate) => self.update_playback_rate(rate),
            ControlMessage::UpdateError { error, message } => self.update_error(error, message),
            ControlMessage::UpdatePosition(position) => self.update_position(position),
            ControlMessage::UpdateAudioOutput(output) => self.update_audio_output(output),
        }
    }

    /// Handle every queued message without waiting
    ///
    /// Messages queued while draining, such as the flush scheduled by an
    /// update, are handled in the same call.
    pub fn process_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(message) = self.queue_rx.try_recv() {
            self.handle_message(message);
            handled += 1;
        }
        handled
    }

    /// Wait for the next queued message and handle it
    pub async fn process_next(&mut self) {
        // The control keeps its own sender, so the queue never closes
        if let Some(message) = self.queue_rx.recv().await {
            self.handle_message(message);
        }
    }

    /// Handle queued messages up to the first error report
    ///
    /// Services report load failures through the handle. Anything queued
    /// behind the error, including its flush, waits for the event loop.
    fn process_until_error(&mut self) {
        while let Ok(message) = self.queue_rx.try_recv() {
            let reports_error = matches!(message, ControlMessage::UpdateError { .. });
            self.handle_message(message);
            if reports_error && self.error != PlayerError::NoError {
                break;
            }
        }
    }

    fn emit_property_changes(&mut self, properties: PropertyFlags) {
        if properties.is_empty() {
            return;
        }
        trace!("Flushing properties {:#04x}", properties.bits());

        if properties.contains(PropertyFlags::ERROR) && self.error != PlayerError::NoError {
            self.emit(PlayerEvent::Error {
                error: self.error,
                message: self.error_string.clone(),
            });
        }
        if properties.contains(PropertyFlags::PLAYBACK_RATE) {
            self.emit(PlayerEvent::PlaybackRateChanged(self.playback_rate));
        }
        if properties.contains(PropertyFlags::STREAM_TYPES) {
            self.emit(PlayerEvent::AudioAvailableChanged(self.stream_types.audio));
            self.emit(PlayerEvent::VideoAvailableChanged(self.stream_types.video));
        }
        if properties.contains(PropertyFlags::POSITION) {
            self.emit(PlayerEvent::PositionChanged(self.position.get()));
        }
        if properties.contains(PropertyFlags::DURATION) {
            self.emit(PlayerEvent::DurationChanged(self.duration));
        }
        if properties.contains(PropertyFlags::SEEKABLE) {
            self.emit(PlayerEvent::SeekableChanged(self.seekable));
        }
        if properties.contains(PropertyFlags::STATUS) {
            self.emit(PlayerEvent::MediaStatusChanged(self.status));
        }
        if properties.contains(PropertyFlags::STATE) {
            self.emit(PlayerEvent::StateChanged(self.state));
        }
    }

    fn effective_volume(&self) -> i32 {
        if self.muted {
            0
        } else {
            self.volume
        }
    }

    fn apply_volume(&self, volume: i32) {
        if let Some(audio) = &self.audio {
            let decibels = volume_to_decibels(volume);
            debug!("Setting output volume {} ({} dB/100)", volume, decibels);
            audio.put_volume(decibels);
        }
    }

    fn emit(&mut self, event: PlayerEvent) {
        trace!("Emitting {}", event.event_type());
        self.observers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl std::fmt::Debug for PlayerControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerControl")
            .field("state", &self.state)
            .field("status", &self.status)
            .field("error", &self.error)
            .field("volume", &self.volume)
            .field("muted", &self.muted)
            .field("media", &self.media)
            .finish_non_exhaustive()
    }
}
