//! Demo commands for the serline console
//!
//! A table-driven [`Dispatcher`](serline_core::Dispatcher) with a few
//! stateless utilities: integer arithmetic, string transforms and a sorted
//! byte dump. Output goes to the console writer handed in by the caller.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod error;
pub mod handlers;
pub mod parser;
pub mod table;

pub use error::CommandError;
pub use parser::{parse_line, ParsedCommand};
pub use table::{CommandDescriptor, CommandTable, COMMANDS};
