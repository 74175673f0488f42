//! Command table and dispatcher

use core::fmt::{self, Write};

use serline_core::{Dispatcher, Line};

use crate::error::CommandError;
use crate::handlers::{self, HandlerResult};
use crate::parser::{parse_line, ParsedCommand};

/// Command descriptor
pub struct CommandDescriptor {
    pub name: &'static str,
    pub brief: &'static str,
    pub handler: fn(&ParsedCommand<'_>, &mut dyn Write) -> HandlerResult,
}

/// All available commands
pub static COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor { name: "help", brief: "List commands", handler: handlers::cmd_help },
    CommandDescriptor { name: "add", brief: "add <a> <b>: unsigned sum", handler: handlers::cmd_add },
    CommandDescriptor { name: "div", brief: "div <a> <b>: unsigned quotient", handler: handlers::cmd_div },
    CommandDescriptor { name: "upper", brief: "upper <text>: uppercase", handler: handlers::cmd_upper },
    CommandDescriptor { name: "reverse", brief: "reverse <text>: reverse", handler: handlers::cmd_reverse },
    CommandDescriptor { name: "sort", brief: "sort <text>: sorted hex dump", handler: handlers::cmd_sort },
];

/// Execute a parsed command
pub fn execute(cmd: &ParsedCommand<'_>, out: &mut dyn Write) -> HandlerResult {
    if cmd.command.is_empty() {
        return Ok(());
    }

    let descriptor = COMMANDS
        .iter()
        .find(|c| c.name == cmd.command)
        .ok_or(CommandError::UnknownCommand)?;

    (descriptor.handler)(cmd, out)
}

/// Console dispatcher over [`COMMANDS`]
#[derive(Debug, Default, Clone, Copy)]
pub struct CommandTable;

impl CommandTable {
    pub const fn new() -> Self {
        Self
    }

    /// Run one line of text, printing error text on failure
    pub fn run(&self, text: &str, out: &mut dyn Write) -> HandlerResult {
        let cmd = parse_line(text);
        let result = execute(&cmd, out);
        if let Err(err) = result {
            report(err, &cmd, out);
        }
        result
    }
}

fn report(err: CommandError, cmd: &ParsedCommand<'_>, out: &mut dyn Write) {
    match err {
        CommandError::UnknownCommand => {
            let _ = write!(out, "{}: {}", err, cmd.command);
        }
        _ => {
            let _ = write!(out, "{}", err);
        }
    }
}

impl<const CAP: usize> Dispatcher<CAP> for CommandTable {
    fn dispatch(&mut self, line: &Line<CAP>, out: &mut dyn fmt::Write) -> bool {
        match line.as_str() {
            Ok(text) => self.run(text, out).is_ok(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dispatch(text: &[u8]) -> (bool, String) {
        let line: Line = Line::from_bytes(text).unwrap();
        let mut out = String::new();
        let ok = CommandTable::new().dispatch(&line, &mut out);
        (ok, out)
    }

    #[test]
    fn test_dispatch_success() {
        assert_eq!(dispatch(b"add 3 4"), (true, "Sum: 7".into()));
    }

    #[test]
    fn test_empty_line_succeeds_silently() {
        assert_eq!(dispatch(b""), (true, String::new()));
        assert_eq!(dispatch(b"   "), (true, String::new()));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(dispatch(b"frob 1"), (false, "Unknown command: frob".into()));
    }

    #[test]
    fn test_failure_prints_error_text() {
        assert_eq!(dispatch(b"div 1 0"), (false, "Error: Division by zero".into()));
        assert_eq!(dispatch(b"add 1"), (false, "Error: Missing argument".into()));
        assert_eq!(dispatch(b"sort"), (false, "No data".into()));
    }

    #[test]
    fn test_reverse_empty_fails_silently() {
        assert_eq!(dispatch(b"reverse"), (false, String::new()));
    }

    #[test]
    fn test_non_utf8_line_fails() {
        assert_eq!(dispatch(&[0xFF, 0xFE]), (false, String::new()));
    }

    #[test]
    fn test_command_names_unique() {
        for (i, a) in COMMANDS.iter().enumerate() {
            for b in &COMMANDS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_add_matches_wrapping_sum(a: u32, b: u32) {
            let text = format!("add {} {}", a, b);
            let (ok, out) = dispatch(text.as_bytes());
            prop_assert!(ok);
            prop_assert_eq!(out, format!("Sum: {}", a.wrapping_add(b)));
        }

        #[test]
        fn prop_any_line_dispatches_without_panic(
            bytes in proptest::collection::vec(any::<u8>(), 0..127)
        ) {
            let _ = dispatch(&bytes);
        }
    }
}
