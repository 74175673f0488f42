//! Console state machine
//!
//! The console's behavior is a function of the current state and an event.
//! The transition table is pure; the async [`Console`](super::Console)
//! driver performs the I/O belonging to each state and feeds back events.

use core::fmt;

/// Fatal initialization failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitError {
    /// The UART peripheral did not come up
    DeviceNotReady,
    /// A required setting is missing, zero or unsupported
    InvalidArgument,
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::DeviceNotReady => f.write_str("device not ready"),
            InitError::InvalidArgument => f.write_str("invalid argument"),
        }
    }
}

/// Console states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConsoleState {
    /// Peripheral bound, banner not yet sent
    Init,
    /// Waiting for the next completed line
    WaitLine,
    /// A line was received and is about to be dispatched
    HaveLine,
    /// The dispatcher returned; the completion prompt is pending
    Dispatched { ok: bool },
    /// Initialization failed; nothing but the diagnostic runs any more
    FatalHalt(InitError),
}

/// Events driving the console state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConsoleEvent {
    /// Banner sent, console is live
    Started,
    /// Binding the peripheral failed
    InitFailed(InitError),
    /// A line was taken from the queue
    LineReceived,
    /// The wait ended without a line
    Timeout,
    /// The dispatcher finished with this outcome
    DispatchDone(bool),
    /// The completion indicator and prompt were sent
    PromptSent,
}

impl ConsoleState {
    /// Check if the console is waiting for input
    pub fn is_waiting(&self) -> bool {
        matches!(self, ConsoleState::WaitLine)
    }

    /// Check if this is the terminal halt state
    pub fn is_halted(&self) -> bool {
        matches!(self, ConsoleState::FatalHalt(_))
    }

    /// Process an event and return the next state
    pub fn transition(self, event: ConsoleEvent) -> Self {
        use ConsoleEvent::*;
        use ConsoleState::*;

        match (self, event) {
            (Init, Started) => WaitLine,
            (Init, InitFailed(kind)) => FatalHalt(kind),

            (WaitLine, LineReceived) => HaveLine,
            (WaitLine, Timeout) => WaitLine,

            (HaveLine, DispatchDone(ok)) => Dispatched { ok },

            (Dispatched { .. }, PromptSent) => WaitLine,

            // Halt is terminal; anything else leaves the state alone
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_to_wait_line() {
        assert_eq!(
            ConsoleState::Init.transition(ConsoleEvent::Started),
            ConsoleState::WaitLine
        );
    }

    #[test]
    fn test_init_failure_halts() {
        let state = ConsoleState::Init.transition(ConsoleEvent::InitFailed(InitError::DeviceNotReady));
        assert_eq!(state, ConsoleState::FatalHalt(InitError::DeviceNotReady));
        assert!(state.is_halted());
    }

    #[test]
    fn test_line_cycle() {
        let state = ConsoleState::WaitLine;

        let have = state.transition(ConsoleEvent::LineReceived);
        assert_eq!(have, ConsoleState::HaveLine);

        let dispatched = have.transition(ConsoleEvent::DispatchDone(false));
        assert_eq!(dispatched, ConsoleState::Dispatched { ok: false });

        let back = dispatched.transition(ConsoleEvent::PromptSent);
        assert!(back.is_waiting());
    }

    #[test]
    fn test_timeout_keeps_waiting() {
        assert_eq!(
            ConsoleState::WaitLine.transition(ConsoleEvent::Timeout),
            ConsoleState::WaitLine
        );
    }

    #[test]
    fn test_halt_is_terminal() {
        let halted = ConsoleState::FatalHalt(InitError::InvalidArgument);
        let events = [
            ConsoleEvent::Started,
            ConsoleEvent::LineReceived,
            ConsoleEvent::Timeout,
            ConsoleEvent::DispatchDone(true),
            ConsoleEvent::PromptSent,
        ];

        for event in events {
            assert_eq!(halted.transition(event), halted);
        }
    }

    #[test]
    fn test_unexpected_events_are_ignored() {
        assert_eq!(
            ConsoleState::HaveLine.transition(ConsoleEvent::LineReceived),
            ConsoleState::HaveLine
        );
        assert_eq!(
            ConsoleState::WaitLine.transition(ConsoleEvent::PromptSent),
            ConsoleState::WaitLine
        );
    }
}
