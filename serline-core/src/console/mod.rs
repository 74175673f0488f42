//! Serial console (consumer side)
//!
//! A single cooperative loop that waits for completed lines, reports
//! latched warnings, hands each line to the dispatcher and answers with a
//! prompt. All console output goes through one [`Transmitter`].

pub mod dispatch;
pub mod driver;
pub mod prompt;
pub mod state;
pub mod transmit;

pub use dispatch::Dispatcher;
pub use driver::Console;
pub use state::{ConsoleEvent, ConsoleState, InitError};
pub use transmit::Transmitter;
