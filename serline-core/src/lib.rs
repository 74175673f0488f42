//! Board-agnostic core of the serline serial console
//!
//! This crate contains everything between the UART interrupt and the
//! command dispatcher that does not depend on a specific chip:
//!
//! - Line assembly from a raw byte stream (producer side)
//! - Bounded, lossy hand-off queue of completed lines
//! - Sticky warning latch for faults raised in producer context
//! - Console state machine and its async driver (consumer side)
//! - Configuration types
//!
//! # Data flow
//!
//! ```text
//! UART IRQ ──▶ LineAssembler ──▶ LineQueue ──▶ Console ──▶ Dispatcher
//!                   │                            ▲
//!                   └──────── WarningLatch ──────┘
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod console;
pub mod line;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{ConsoleConfig, WaitPolicy};
pub use console::{Console, ConsoleState, Dispatcher, InitError, Transmitter};
pub use line::{
    Line, LineAssembler, LineQueue, LineReceiver, SerialLine, Wait, Warning, WarningLatch,
    LINE_CAPACITY, MAX_LINE, QUEUE_DEPTH,
};
