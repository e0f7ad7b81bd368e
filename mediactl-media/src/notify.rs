//! Deferred property-change notification
//!
//! Service callbacks tend to arrive in bursts: a single state transition can
//! update status, duration, seekability and stream types back to back. The
//! [`DeferredNotifier`] collects the changed properties into a bit set and
//! posts a single wake-up message to the owning control's queue. When the
//! control picks that message up it takes the whole set at once and emits one
//! notification per property, reading the values current at that moment.

use std::ops::{BitOr, BitOrAssign};
use tokio::sync::mpsc;
use tracing::{trace, warn};

/// Set of observable player properties
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PropertyFlags(u32);

impl PropertyFlags {
    pub const NONE: Self = Self(0);
    pub const ERROR: Self = Self(0x01);
    pub const PLAYBACK_RATE: Self = Self(0x02);
    pub const STREAM_TYPES: Self = Self(0x04);
    pub const POSITION: Self = Self(0x08);
    pub const DURATION: Self = Self(0x10);
    pub const SEEKABLE: Self = Self(0x20);
    pub const STATUS: Self = Self(0x40);
    pub const STATE: Self = Self(0x80);

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: Self) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }
}

impl BitOr for PropertyFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for PropertyFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Coalesces property changes into one flush per scheduling turn
///
/// The notifier is Idle until a wake-up is posted and Pending until that
/// wake-up is consumed with [`take_scheduled`](Self::take_scheduled). A
/// synchronous [`take`](Self::take) empties the set but leaves the posted
/// wake-up accounted for, so at most one flush is ever queued.
#[derive(Debug)]
pub struct DeferredNotifier<M> {
    pending: PropertyFlags,
    scheduled: bool,
    queue: mpsc::UnboundedSender<M>,
    wakeup: M,
}

impl<M: Clone> DeferredNotifier<M> {
    /// Create a notifier that posts `wakeup` onto `queue` when a flush is due
    pub fn new(queue: mpsc::UnboundedSender<M>, wakeup: M) -> Self {
        Self {
            pending: PropertyFlags::NONE,
            scheduled: false,
            queue,
            wakeup,
        }
    }

    /// Record changed properties, scheduling a flush if none is queued
    ///
    /// Returns `true` when this call posted the wake-up.
    pub fn mark_dirty(&mut self, properties: PropertyFlags) -> bool {
        if properties.is_empty() {
            return false;
        }

        self.pending |= properties;
        if self.scheduled {
            return false;
        }

        trace!("Scheduling property flush for {:#04x}", self.pending.bits());
        if self.queue.send(self.wakeup.clone()).is_err() {
            warn!("Control queue closed, property flush dropped");
            return false;
        }
        self.scheduled = true;
        true
    }

    /// Take the pending set for a flush outside the queued wake-up
    pub fn take(&mut self) -> PropertyFlags {
        std::mem::take(&mut self.pending)
    }

    /// Consume the queued wake-up and take the pending set
    pub fn take_scheduled(&mut self) -> PropertyFlags {
        self.scheduled = false;
        self.take()
    }

    /// Drop every pending property not in `keep`
    pub fn retain(&mut self, keep: PropertyFlags) {
        self.pending = self.pending.intersection(keep);
    }

    pub fn pending(&self) -> PropertyFlags {
        self.pending
    }

    /// Whether a wake-up is queued and not yet consumed
    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Flush;

    fn notifier() -> (DeferredNotifier<Flush>, mpsc::UnboundedReceiver<Flush>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (DeferredNotifier::new(tx, Flush), rx)
    }

    #[test]
    fn test_first_mark_schedules_once() {
        let (mut notifier, mut rx) = notifier();

        assert!(notifier.mark_dirty(PropertyFlags::POSITION));
        assert!(!notifier.mark_dirty(PropertyFlags::DURATION));
        assert!(!notifier.mark_dirty(PropertyFlags::POSITION));

        assert_eq!(rx.try_recv(), Ok(Flush));
        assert!(rx.try_recv().is_err());
        assert_eq!(
            notifier.pending(),
            PropertyFlags::POSITION | PropertyFlags::DURATION
        );
    }

    #[test]
    fn test_take_scheduled_returns_to_idle() {
        let (mut notifier, mut rx) = notifier();

        notifier.mark_dirty(PropertyFlags::STATE);
        let taken = notifier.take_scheduled();
        assert!(taken.contains(PropertyFlags::STATE));
        assert!(!notifier.is_scheduled());

        assert!(notifier.mark_dirty(PropertyFlags::STATUS));
        assert_eq!(rx.try_recv(), Ok(Flush));
        assert_eq!(rx.try_recv(), Ok(Flush));
    }

    #[test]
    fn test_synchronous_take_keeps_wakeup_accounted() {
        let (mut notifier, mut rx) = notifier();

        notifier.mark_dirty(PropertyFlags::STATUS);
        assert_eq!(notifier.take(), PropertyFlags::STATUS);
        assert!(notifier.is_scheduled());

        assert!(!notifier.mark_dirty(PropertyFlags::POSITION));
        assert_eq!(rx.try_recv(), Ok(Flush));
        assert!(rx.try_recv().is_err());
        assert_eq!(notifier.take_scheduled(), PropertyFlags::POSITION);
    }

    #[test]
    fn test_empty_mask_is_ignored() {
        let (mut notifier, mut rx) = notifier();

        assert!(!notifier.mark_dirty(PropertyFlags::NONE));
        assert!(!notifier.is_scheduled());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_retain() {
        let (mut notifier, _rx) = notifier();

        notifier.mark_dirty(PropertyFlags::PLAYBACK_RATE | PropertyFlags::SEEKABLE);
        notifier.retain(PropertyFlags::PLAYBACK_RATE);
        assert_eq!(notifier.pending(), PropertyFlags::PLAYBACK_RATE);
    }

    #[test]
    fn test_flag_operations() {
        let flags = PropertyFlags::ERROR | PropertyFlags::STATE;
        assert!(flags.contains(PropertyFlags::ERROR));
        assert!(!flags.contains(PropertyFlags::POSITION));
        assert!(!flags.contains(PropertyFlags::NONE));
        assert_eq!(flags.bits(), 0x81);
    }
}
