//! Hand-off queue between producer and consumer
//!
//! A fixed-depth FIFO of line records backed by an `embassy-sync` channel.
//! The channel's critical-section mutex makes enqueue from interrupt
//! context and dequeue from the console task safe to interleave.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{with_timeout, Duration};

use super::{Line, LINE_CAPACITY, QUEUE_DEPTH};

/// The queue had no free slot; the offered line was not stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QueueFull;

/// How long a dequeue may wait for a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Wait {
    /// Return at once if the queue is empty
    Immediate,
    /// Wait until a line arrives
    Forever,
    /// Wait at most this long
    Within(Duration),
}

/// Bounded FIFO of completed lines
///
/// Full means full: a new line is refused rather than evicting an older
/// one.
pub struct LineQueue<const CAP: usize = LINE_CAPACITY, const DEPTH: usize = QUEUE_DEPTH> {
    channel: Channel<CriticalSectionRawMutex, Line<CAP>, DEPTH>,
}

impl<const CAP: usize, const DEPTH: usize> Default for LineQueue<CAP, DEPTH> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CAP: usize, const DEPTH: usize> LineQueue<CAP, DEPTH> {
    pub const fn new() -> Self {
        Self {
            channel: Channel::new(),
        }
    }

    /// Append a line without blocking
    pub fn try_enqueue(&self, line: Line<CAP>) -> Result<(), QueueFull> {
        self.channel.try_send(line).map_err(|_| QueueFull)
    }

    /// Take the oldest line if one is queued
    pub fn try_dequeue(&self) -> Option<Line<CAP>> {
        self.channel.try_receive().ok()
    }

    /// Take the oldest line, waiting according to `wait`
    ///
    /// Returns `None` when the wait expires with the queue still empty.
    pub async fn dequeue(&self, wait: Wait) -> Option<Line<CAP>> {
        match wait {
            Wait::Immediate => self.try_dequeue(),
            Wait::Forever => Some(self.channel.receive().await),
            Wait::Within(timeout) => with_timeout(timeout, self.channel.receive()).await.ok(),
        }
    }

    /// Number of queued lines
    pub fn len(&self) -> usize {
        self.channel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channel.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.channel.is_full()
    }

    /// Maximum number of queued lines
    pub const fn depth(&self) -> usize {
        DEPTH
    }
}
