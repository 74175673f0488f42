//! Deferred warnings
//!
//! The producer runs in interrupt context and must not write to the
//! console. It raises a sticky flag instead, and the console reports it
//! the next time it polls. Flags do not count: any number of faults
//! between two polls is reported once.

use core::fmt;

use portable_atomic::{AtomicBool, Ordering};

/// Recoverable faults raised by the line assembler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Warning {
    /// A line exceeded the assembly buffer and was discarded
    LineTooLong,
    /// The hand-off queue was full and the newest line was dropped
    QueueFull,
}

impl Warning {
    /// Console text for this warning
    pub const fn message(self) -> &'static str {
        match self {
            Warning::LineTooLong => "\r\n[WARN] Line too long, discarded\r\n",
            Warning::QueueFull => "\r\n[WARN] RX queue full, line dropped\r\n",
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::LineTooLong => f.write_str("line too long"),
            Warning::QueueFull => f.write_str("queue full"),
        }
    }
}

/// Two sticky flags shared between producer and consumer
///
/// Each flag is a single word written `true` by the producer and taken by
/// the consumer. A flag raised while a warning is being reported stays
/// latched and is reported by the next poll.
#[derive(Debug, Default)]
pub struct WarningLatch {
    overflowed: AtomicBool,
    dropped: AtomicBool,
}

impl WarningLatch {
    pub const fn new() -> Self {
        Self {
            overflowed: AtomicBool::new(false),
            dropped: AtomicBool::new(false),
        }
    }

    fn flag(&self, warning: Warning) -> &AtomicBool {
        match warning {
            Warning::LineTooLong => &self.overflowed,
            Warning::QueueFull => &self.dropped,
        }
    }

    /// Latch a warning (producer side)
    pub(crate) fn raise(&self, warning: Warning) {
        self.flag(warning).store(true, Ordering::Release);
    }

    /// Whether a warning is currently latched
    pub fn is_raised(&self, warning: Warning) -> bool {
        self.flag(warning).load(Ordering::Acquire)
    }

    /// Report and clear latched warnings (consumer side)
    ///
    /// Checks the overflow flag first, then the drop flag. Returns how many
    /// warnings were reported.
    pub fn poll(&self, mut report: impl FnMut(Warning)) -> usize {
        let mut reported = 0;
        for warning in [Warning::LineTooLong, Warning::QueueFull] {
            // Taken before reporting; a raise during `report` stays latched
            if self.flag(warning).swap(false, Ordering::AcqRel) {
                report(warning);
                reported += 1;
            }
        }
        reported
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_reports_nothing_when_clear() {
        let latch = WarningLatch::new();
        let mut seen = 0;
        assert_eq!(latch.poll(|_| seen += 1), 0);
        assert_eq!(seen, 0);
    }

    #[test]
    fn test_poll_reports_overflow_before_drop() {
        let latch = WarningLatch::new();
        latch.raise(Warning::QueueFull);
        latch.raise(Warning::LineTooLong);

        let mut seen = heapless::Vec::<Warning, 4>::new();
        latch.poll(|w| seen.push(w).unwrap());
        assert_eq!(seen.as_slice(), &[Warning::LineTooLong, Warning::QueueFull]);
    }

    #[test]
    fn test_poll_clears_flags() {
        let latch = WarningLatch::new();
        latch.raise(Warning::LineTooLong);
        assert_eq!(latch.poll(|_| {}), 1);
        assert!(!latch.is_raised(Warning::LineTooLong));
        assert_eq!(latch.poll(|_| {}), 0);
    }

    #[test]
    fn test_repeated_faults_collapse_into_one_report() {
        let latch = WarningLatch::new();
        for _ in 0..5 {
            latch.raise(Warning::QueueFull);
        }
        let mut count = 0;
        latch.poll(|_| count += 1);
        assert_eq!(count, 1);
    }

    #[test]
    fn test_fault_after_poll_is_reported_next_time() {
        let latch = WarningLatch::new();
        latch.raise(Warning::QueueFull);
        latch.poll(|_| {});
        latch.raise(Warning::QueueFull);
        assert!(latch.is_raised(Warning::QueueFull));
        assert_eq!(latch.poll(|_| {}), 1);
    }

    #[test]
    fn test_messages_carry_warn_marker() {
        for warning in [Warning::LineTooLong, Warning::QueueFull] {
            assert!(warning.message().contains("[WARN]"));
            assert!(warning.message().ends_with("\r\n"));
        }
    }

    #[test]
    fn test_fault_raised_during_report_is_kept() {
        let latch = WarningLatch::new();
        latch.raise(Warning::QueueFull);

        assert_eq!(latch.poll(|w| latch.raise(w)), 1);
        assert!(latch.is_raised(Warning::QueueFull));

        let mut seen = None;
        assert_eq!(latch.poll(|w| seen = Some(w)), 1);
        assert_eq!(seen, Some(Warning::QueueFull));
        assert!(!latch.is_raised(Warning::QueueFull));
    }
}
