//! Command line parser
//!
//! Simple split on whitespace, max 3 arguments. The untokenized remainder
//! after the command name is kept for text commands.

/// Parsed command with up to 3 arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand<'a> {
    /// The command name (first token)
    pub command: &'a str,
    /// Up to 3 arguments
    pub args: [Option<&'a str>; 3],
    /// Everything after the command name, leading whitespace trimmed
    pub rest: &'a str,
}

impl<'a> ParsedCommand<'a> {
    /// Get argument by index (0-based)
    pub fn arg(&self, idx: usize) -> Option<&'a str> {
        self.args.get(idx).copied().flatten()
    }
}

/// Parse a command line into command and arguments
pub fn parse_line(line: &str) -> ParsedCommand<'_> {
    let trimmed = line.trim_start();
    let (command, rest) = match trimmed.find(char::is_whitespace) {
        Some(idx) => (&trimmed[..idx], trimmed[idx..].trim_start()),
        None => (trimmed, ""),
    };

    let mut args = [None, None, None];
    for (i, arg) in rest.split_whitespace().take(3).enumerate() {
        args[i] = Some(arg);
    }

    ParsedCommand { command, args, rest }
}
