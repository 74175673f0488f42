//! Dispatcher contract
//!
//! The console calls the dispatcher exactly once per completed line, from
//! the console task, with the terminator already stripped.

use core::fmt;

use crate::line::{Line, LINE_CAPACITY};

/// Executes a command line
pub trait Dispatcher<const CAP: usize = LINE_CAPACITY> {
    /// Run `line`, writing any output to `out`
    ///
    /// Returns `true` on success. Failure carries no detail; the console
    /// only answers with an error marker.
    fn dispatch(&mut self, line: &Line<CAP>, out: &mut dyn fmt::Write) -> bool;
}

impl<F, const CAP: usize> Dispatcher<CAP> for F
where
    F: FnMut(&Line<CAP>, &mut dyn fmt::Write) -> bool,
{
    fn dispatch(&mut self, line: &Line<CAP>, out: &mut dyn fmt::Write) -> bool {
        self(line, out)
    }
}
