//! Player event delivery
//!
//! A [`PlayerControl`](mediactl_media::PlayerControl) emits a whole flush of
//! coalesced property changes before it returns to its queue, so the events of
//! one flush reach a subscriber back to back. [`EventStream::next_batch`]
//! hands such a run over in one piece.

use mediactl_media::{PlayerEvent, PropertyFlags};
use tokio::sync::mpsc;
use tracing::debug;

/// Events from one player subscription
#[derive(Debug)]
pub struct EventStream {
    receiver: mpsc::UnboundedReceiver<PlayerEvent>,
    properties: Option<PropertyFlags>,
}

impl EventStream {
    /// Wrap a receiver returned by `PlayerControl::subscribe`
    pub fn new(receiver: mpsc::UnboundedReceiver<PlayerEvent>) -> Self {
        Self {
            receiver,
            properties: None,
        }
    }

    /// Only yield notifications for `properties`
    ///
    /// Volume, mute and media changes carry no property and are skipped.
    pub fn only(mut self, properties: PropertyFlags) -> Self {
        self.properties = Some(properties);
        self
    }

    fn wants(&self, event: &PlayerEvent) -> bool {
        self.properties
            .map_or(true, |properties| properties.contains(event.property()))
    }

    /// Wait for the next event, `None` once the player control is dropped
    pub async fn next(&mut self) -> Option<PlayerEvent> {
        while let Some(event) = self.receiver.recv().await {
            if self.wants(&event) {
                return Some(event);
            }
        }
        None
    }

    /// Take an already delivered event without waiting
    pub fn try_next(&mut self) -> Option<PlayerEvent> {
        while let Ok(event) = self.receiver.try_recv() {
            if self.wants(&event) {
                return Some(event);
            }
        }
        None
    }

    /// Wait for an event, then take every event delivered with it
    ///
    /// Empty once the player control is dropped.
    pub async fn next_batch(&mut self) -> Vec<PlayerEvent> {
        let mut batch = Vec::new();
        if let Some(first) = self.next().await {
            batch.push(first);
            while let Some(event) = self.try_next() {
                batch.push(event);
            }
        }
        batch
    }
}

/// Background task feeding player events to a callback
#[derive(Debug)]
pub struct EventHandler {
    task_handle: tokio::task::JoinHandle<()>,
}

impl EventHandler {
    /// Spawn a task feeding every event from `stream` to `callback`
    ///
    /// The task ends when the player control is dropped.
    pub fn new<F>(mut stream: EventStream, mut callback: F) -> Self
    where
        F: FnMut(PlayerEvent) + Send + 'static,
    {
        let task_handle = tokio::spawn(async move {
            while let Some(event) = stream.next().await {
                debug!("Processing event: {}", event.event_type());
                callback(event);
            }
        });

        Self { task_handle }
    }

    /// Wait for the player control to go away and the task to finish
    pub async fn join(self) {
        let _ = self.task_handle.await;
    }
}
