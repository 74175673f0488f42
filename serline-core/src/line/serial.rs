//! Per-UART line context
//!
//! [`SerialLine`] owns the hand-off queue and the warning latch for one
//! UART. It is created once at startup and split into a producer half
//! ([`LineAssembler`]) and a consumer half ([`LineReceiver`]), so each
//! side can only reach the operations it is allowed to perform.

use super::{Line, LineAssembler, LineQueue, Wait, Warning, WarningLatch, LINE_CAPACITY, QUEUE_DEPTH};

/// Shared state of one serial line
pub struct SerialLine<const CAP: usize = LINE_CAPACITY, const DEPTH: usize = QUEUE_DEPTH> {
    queue: LineQueue<CAP, DEPTH>,
    latch: WarningLatch,
}

impl<const CAP: usize, const DEPTH: usize> Default for SerialLine<CAP, DEPTH> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CAP: usize, const DEPTH: usize> SerialLine<CAP, DEPTH> {
    pub const fn new() -> Self {
        Self {
            queue: LineQueue::new(),
            latch: WarningLatch::new(),
        }
    }

    /// Split into the producer and consumer halves
    ///
    /// Taking `&mut self` guarantees a single pair of halves per line.
    pub fn split(&mut self) -> (LineAssembler<'_, CAP, DEPTH>, LineReceiver<'_, CAP, DEPTH>) {
        let this: &Self = self;
        (
            LineAssembler::new(&this.queue, &this.latch),
            LineReceiver {
                queue: &this.queue,
                latch: &this.latch,
            },
        )
    }
}

/// Consumer half of a [`SerialLine`]
pub struct LineReceiver<'a, const CAP: usize = LINE_CAPACITY, const DEPTH: usize = QUEUE_DEPTH> {
    queue: &'a LineQueue<CAP, DEPTH>,
    latch: &'a WarningLatch,
}

impl<'a, const CAP: usize, const DEPTH: usize> LineReceiver<'a, CAP, DEPTH> {
    /// Take the next completed line, waiting according to `wait`
    pub async fn receive(&mut self, wait: Wait) -> Option<Line<CAP>> {
        self.queue.dequeue(wait).await
    }

    /// Take the next completed line if one is queued
    pub fn try_receive(&mut self) -> Option<Line<CAP>> {
        self.queue.try_dequeue()
    }

    /// Report and clear latched warnings
    pub fn poll_warnings(&mut self, report: impl FnMut(Warning)) -> usize {
        self.latch.poll(report)
    }

    /// Number of completed lines waiting
    pub fn queued(&self) -> usize {
        self.queue.len()
    }
}
