//! Line assembler
//!
//! Runs in producer (interrupt) context, once per received byte.
//! Accumulates data bytes, detects `\r`/`\n` terminators, collapses
//! `\r\n` and `\n\r` pairs into one end-of-line, and pushes each
//! completed line into the hand-off queue.
//!
//! Nothing here blocks or allocates. Faults never propagate: a line that
//! does not fit the buffer is discarded whole, a line the queue cannot
//! take is dropped, and in both cases a sticky warning is latched for the
//! console to report later.

use super::{Line, LineQueue, Warning, WarningLatch, LINE_CAPACITY, QUEUE_DEPTH};

/// What a single byte did to the assembler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ingest {
    /// Data byte stored, line still open
    Pending,
    /// Terminator closed a line and it was queued
    Completed,
    /// Terminator closed a line but the queue was full
    Dropped,
    /// Buffer exhausted, the open line was discarded
    Overflowed,
    /// Terminator with no open line, or second half of a CR/LF pair
    Ignored,
}

const fn is_terminator(byte: u8) -> bool {
    matches!(byte, b'\r' | b'\n')
}

const fn is_terminator_pair(previous: u8, byte: u8) -> bool {
    matches!((previous, byte), (b'\r', b'\n') | (b'\n', b'\r'))
}

/// Producer half of a [`SerialLine`](super::SerialLine)
///
/// Owns the assembly buffer and the last-byte memory; the console side
/// has no path to either.
pub struct LineAssembler<'a, const CAP: usize = LINE_CAPACITY, const DEPTH: usize = QUEUE_DEPTH>
{
    queue: &'a LineQueue<CAP, DEPTH>,
    latch: &'a WarningLatch,
    buf: Line<CAP>,
    last_char: u8,
}

impl<'a, const CAP: usize, const DEPTH: usize> LineAssembler<'a, CAP, DEPTH> {
    pub(crate) fn new(queue: &'a LineQueue<CAP, DEPTH>, latch: &'a WarningLatch) -> Self {
        Self {
            queue,
            latch,
            buf: Line::new(),
            last_char: 0,
        }
    }

    /// Process one received byte
    pub fn ingest(&mut self, byte: u8) -> Ingest {
        let outcome = if is_terminator(byte) {
            if self.buf.is_empty() || is_terminator_pair(self.last_char, byte) {
                Ingest::Ignored
            } else {
                self.complete()
            }
        } else if self.buf.is_full() {
            // Whole line goes; the byte that overflowed is not kept either
            self.buf.clear();
            self.latch.raise(Warning::LineTooLong);
            Ingest::Overflowed
        } else {
            let _ = self.buf.push(byte);
            Ingest::Pending
        };

        // Must come last: the pair check above reads the previous byte
        self.last_char = byte;
        outcome
    }

    /// Process every byte drained from the peripheral FIFO
    ///
    /// Returns the number of lines completed and queued.
    pub fn ingest_all(&mut self, bytes: &[u8]) -> usize {
        bytes
            .iter()
            .filter(|&&byte| self.ingest(byte) == Ingest::Completed)
            .count()
    }

    /// Bytes of the line currently being assembled
    pub fn pending(&self) -> usize {
        self.buf.len()
    }

    fn complete(&mut self) -> Ingest {
        let line = core::mem::take(&mut self.buf);
        match self.queue.try_enqueue(line) {
            Ok(()) => Ingest::Completed,
            Err(_) => {
                self.latch.raise(Warning::QueueFull);
                Ingest::Dropped
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Queue and latch for one assembler under test
    struct Rig<const CAP: usize, const DEPTH: usize> {
        queue: LineQueue<CAP, DEPTH>,
        latch: WarningLatch,
    }

    impl<const CAP: usize, const DEPTH: usize> Rig<CAP, DEPTH> {
        fn new() -> Self {
            Self {
                queue: LineQueue::new(),
                latch: WarningLatch::new(),
            }
        }

        fn assembler(&self) -> LineAssembler<'_, CAP, DEPTH> {
            LineAssembler::new(&self.queue, &self.latch)
        }

        fn drain(&self) -> std::vec::Vec<std::vec::Vec<u8>> {
            let mut lines = std::vec::Vec::new();
            while let Some(line) = self.queue.try_dequeue() {
                lines.push(line.as_bytes().to_vec());
            }
            lines
        }
    }

    #[test]
    fn test_crlf_yields_two_lines_in_order() {
        let rig = Rig::<16, 4>::new();
        let mut asm = rig.assembler();

        assert_eq!(asm.ingest_all(b"ab\r\ncd\n"), 2);
        assert_eq!(rig.drain(), vec![b"ab".to_vec(), b"cd".to_vec()]);
        assert!(!rig.latch.is_raised(Warning::QueueFull));
        assert!(!rig.latch.is_raised(Warning::LineTooLong));
    }

    #[test]
    fn test_double_cr_yields_one_line() {
        let rig = Rig::<16, 4>::new();
        let mut asm = rig.assembler();

        asm.ingest_all(b"ab\r\r");
        assert_eq!(rig.drain(), vec![b"ab".to_vec()]);
    }

    #[test]
    fn test_lfcr_pair_collapses() {
        let rig = Rig::<16, 4>::new();
        let mut asm = rig.assembler();

        assert_eq!(asm.ingest(b'x'), Ingest::Pending);
        assert_eq!(asm.ingest(b'\n'), Ingest::Completed);
        assert_eq!(asm.ingest(b'\r'), Ingest::Ignored);
        assert_eq!(rig.drain(), vec![b"x".to_vec()]);
    }

    #[test]
    fn test_lone_terminator_is_ignored() {
        let rig = Rig::<16, 4>::new();
        let mut asm = rig.assembler();

        assert_eq!(asm.ingest(b'\n'), Ingest::Ignored);
        assert_eq!(asm.ingest(b'\r'), Ingest::Ignored);
        assert!(rig.queue.is_empty());
        assert_eq!(rig.latch.poll(|_| {}), 0);
    }

    #[test]
    fn test_overflow_discards_whole_line() {
        // MAX_LINE = 8 leaves 7 usable bytes
        let rig = Rig::<7, 4>::new();
        let mut asm = rig.assembler();

        asm.ingest_all(b"abcdefg");
        assert_eq!(asm.pending(), 7);
        assert_eq!(asm.ingest(b'h'), Ingest::Overflowed);
        assert_eq!(asm.pending(), 0);
        assert_eq!(asm.ingest(b'\n'), Ingest::Ignored);

        assert!(rig.queue.is_empty());
        assert!(rig.latch.is_raised(Warning::LineTooLong));
    }

    #[test]
    fn test_line_after_overflow_is_intact() {
        let rig = Rig::<7, 4>::new();
        let mut asm = rig.assembler();

        asm.ingest_all(b"abcdefgh\n");
        asm.ingest_all(b"ok\n");
        assert_eq!(rig.drain(), vec![b"ok".to_vec()]);
    }

    #[test]
    fn test_exactly_full_line_is_delivered() {
        let rig = Rig::<7, 4>::new();
        let mut asm = rig.assembler();

        asm.ingest_all(b"abcdefg\r\n");
        assert_eq!(rig.drain(), vec![b"abcdefg".to_vec()]);
        assert!(!rig.latch.is_raised(Warning::LineTooLong));
    }

    #[test]
    fn test_queue_full_drops_newest() {
        let rig = Rig::<16, 8>::new();
        let mut asm = rig.assembler();

        for digit in b'0'..=b'8' {
            asm.ingest(digit);
            asm.ingest(b'\n');
        }

        let expected: std::vec::Vec<_> = (b'0'..=b'7').map(|d| vec![d]).collect();
        assert_eq!(rig.drain(), expected);
        assert!(rig.latch.is_raised(Warning::QueueFull));
    }

    #[test]
    fn test_dropped_line_resets_buffer() {
        let rig = Rig::<16, 1>::new();
        let mut asm = rig.assembler();

        asm.ingest_all(b"a\n");
        assert_eq!(asm.ingest_all(b"bb\n"), 0);
        assert_eq!(asm.pending(), 0);

        rig.queue.try_dequeue();
        asm.ingest_all(b"c\n");
        assert_eq!(rig.drain(), vec![b"c".to_vec()]);
    }

    #[test]
    fn test_control_bytes_pass_through() {
        let rig = Rig::<16, 4>::new();
        let mut asm = rig.assembler();

        asm.ingest_all(b"a\0\x08\tb\n");
        assert_eq!(rig.drain(), vec![b"a\0\x08\tb".to_vec()]);
    }

    proptest! {
        #[test]
        fn prop_no_line_without_terminator(data in proptest::collection::vec(any::<u8>().prop_filter("no CR/LF", |b| *b != b'\r' && *b != b'\n'), 0..64)) {
            let rig = Rig::<127, 8>::new();
            let mut asm = rig.assembler();
            asm.ingest_all(&data);
            prop_assert!(rig.queue.is_empty());
            prop_assert_eq!(asm.pending(), data.len());
        }

        #[test]
        fn prop_pair_terminators_complete_once(
            text in "[a-z]{1,20}",
            pair in prop_oneof![Just(b"\r\n"), Just(b"\n\r")],
        ) {
            let rig = Rig::<127, 8>::new();
            let mut asm = rig.assembler();
            asm.ingest_all(text.as_bytes());
            let completed = asm.ingest_all(pair);
            prop_assert_eq!(completed, 1);
            prop_assert_eq!(rig.drain(), vec![text.as_bytes().to_vec()]);
        }

        #[test]
        fn prop_delivered_lines_fit_capacity(data in proptest::collection::vec(any::<u8>(), 0..256)) {
            let rig = Rig::<7, 64>::new();
            let mut asm = rig.assembler();
            asm.ingest_all(&data);
            prop_assert!(asm.pending() < 8);
            for line in rig.drain() {
                prop_assert!(!line.is_empty());
                prop_assert!(line.len() <= 7);
                prop_assert!(!line.contains(&b'\r') && !line.contains(&b'\n'));
            }
        }

        #[test]
        fn prop_first_depth_lines_survive(count in 1usize..20) {
            let rig = Rig::<8, 4>::new();
            let mut asm = rig.assembler();
            for i in 0..count {
                asm.ingest(b'a' + i as u8);
                asm.ingest(b'\r');
            }
            let kept = rig.drain();
            prop_assert_eq!(kept.len(), count.min(4));
            for (i, line) in kept.iter().enumerate() {
                prop_assert_eq!(line, &vec![b'a' + i as u8]);
            }
            prop_assert_eq!(rig.latch.is_raised(Warning::QueueFull), count > 4);
        }
    }
}
