//! Console configuration

use embassy_time::Duration;
use serline_hal::UartConfig;

use crate::console::InitError;
use crate::line::Wait;

/// Default delay between queue polls in [`WaitPolicy::Poll`] mode
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1;

/// How the console waits for the next line
///
/// On a virtualized target no interrupt can advance time while the CPU is
/// parked, so [`WaitPolicy::Block`] would freeze the console there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WaitPolicy {
    /// Park until a line arrives (real hardware)
    Block,
    /// Check the queue, then sleep for the poll interval (emulated targets)
    Poll,
    /// Park for at most this long, then run a loop iteration anyway
    Timeout(Duration),
}

impl WaitPolicy {
    /// The per-dequeue wait this policy uses
    pub const fn wait(self) -> Wait {
        match self {
            WaitPolicy::Block => Wait::Forever,
            WaitPolicy::Poll => Wait::Immediate,
            WaitPolicy::Timeout(timeout) => Wait::Within(timeout),
        }
    }
}

/// Console settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConsoleConfig {
    /// Product name shown in the banner
    pub name: &'static str,
    /// Board name shown in the banner
    pub board: &'static str,
    /// Serial settings of the console UART
    pub uart: UartConfig,
    /// How the console waits for input
    pub wait: WaitPolicy,
    /// Sleep between polls when `wait` is [`WaitPolicy::Poll`]
    pub poll_interval: Duration,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            name: "Serline",
            board: "unknown",
            uart: UartConfig::default(),
            wait: WaitPolicy::Block,
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }
}

impl ConsoleConfig {
    /// Adjust the wait policy to the execution environment
    ///
    /// An emulated target cannot block forever; blocking is replaced by
    /// polling. Bounded waits and polling are kept as configured.
    pub fn for_environment(mut self, emulated: bool) -> Self {
        if emulated && self.wait == WaitPolicy::Block {
            self.wait = WaitPolicy::Poll;
        }
        self
    }

    /// Reject settings the console cannot run with
    pub fn validate(&self) -> Result<(), InitError> {
        if self.uart.baudrate == 0 {
            return Err(InitError::InvalidArgument);
        }

        match self.wait {
            WaitPolicy::Poll if self.poll_interval.as_ticks() == 0 => {
                Err(InitError::InvalidArgument)
            }
            WaitPolicy::Timeout(timeout) if timeout.as_ticks() == 0 => {
                Err(InitError::InvalidArgument)
            }
            _ => Ok(()),
        }
    }
}
