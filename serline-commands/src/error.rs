//! Command error types

use core::fmt;

/// Why a command failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// No command with that name
    UnknownCommand,
    /// A required argument is missing
    MissingArg,
    /// An argument could not be parsed
    InvalidValue,
    /// Divisor was zero
    DivisionByZero,
    /// Text command got no text
    NoInput,
    /// Byte command got no bytes
    NoData,
    /// Empty input, reported by the error marker only
    Empty,
}

impl CommandError {
    /// Console text for this error, `None` when nothing is printed
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::UnknownCommand => Some("Unknown command"),
            Self::MissingArg => Some("Error: Missing argument"),
            Self::InvalidValue => Some("Error: Invalid value"),
            Self::DivisionByZero => Some("Error: Division by zero"),
            Self::NoInput => Some("No input"),
            Self::NoData => Some("No data"),
            Self::Empty => None,
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(msg) => f.write_str(msg),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_errors_have_no_text() {
        assert_eq!(CommandError::Empty.message(), None);
        assert_eq!(
            CommandError::DivisionByZero.to_string(),
            "Error: Division by zero"
        );
    }
}
