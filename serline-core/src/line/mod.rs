//! Line reception
//!
//! Turns the raw RX byte stream into complete lines and hands them from
//! the producer (interrupt) context to the consumer (console) context.

pub mod assembler;
pub mod latch;
pub mod queue;
pub mod serial;

pub use assembler::{Ingest, LineAssembler};
pub use latch::{Warning, WarningLatch};
pub use queue::{LineQueue, QueueFull, Wait};
pub use serial::{LineReceiver, SerialLine};

use core::str::Utf8Error;

use heapless::Vec;

/// Size of one line record, counting the terminator slot
pub const MAX_LINE: usize = 128;

/// Usable bytes per line (one slot of `MAX_LINE` is reserved for the terminator)
pub const LINE_CAPACITY: usize = MAX_LINE - 1;

/// Number of completed lines the hand-off queue can hold
pub const QUEUE_DEPTH: usize = 8;

/// A completed line, terminator stripped
///
/// Bytes are kept verbatim. NUL and control characters other than CR/LF
/// are ordinary data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line<const CAP: usize = LINE_CAPACITY> {
    bytes: Vec<u8, CAP>,
}

impl<const CAP: usize> Line<CAP> {
    /// Create an empty line
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Build a line from raw bytes
    ///
    /// Returns `None` if `bytes` does not fit in `CAP`.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        Vec::from_slice(bytes).ok().map(|bytes| Self { bytes })
    }

    /// Maximum number of bytes a line can hold
    pub const fn capacity() -> usize {
        CAP
    }

    /// Raw line content
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Line content as text, if it is valid UTF-8
    pub fn as_str(&self) -> Result<&str, Utf8Error> {
        core::str::from_utf8(&self.bytes)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub(crate) fn is_full(&self) -> bool {
        self.bytes.is_full()
    }

    /// Append a byte, handing it back when the line is full
    pub(crate) fn push(&mut self, byte: u8) -> Result<(), u8> {
        self.bytes.push(byte)
    }

    pub(crate) fn clear(&mut self) {
        self.bytes.clear();
    }
}

#[cfg(feature = "defmt")]
impl<const CAP: usize> defmt::Format for Line<CAP> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=[u8]:a}", self.as_bytes())
    }
}
