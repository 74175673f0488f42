//! Prompt protocol strings
//!
//! Line-oriented and meant for humans, not for parsing.

/// Input prompt
pub const PROMPT: &str = ">> ";

/// Sent before handing a line to the dispatcher
pub const LINE_BREAK: &str = "\r\n";

/// Sent after a successful command
pub const PROMPT_OK: &str = "\r\n>> ";

/// Sent after a failed command
pub const PROMPT_ERR: &str = "\r\nERR\r\n>> ";

/// Completion indicator for a dispatch outcome
pub const fn completion(ok: bool) -> &'static str {
    if ok {
        PROMPT_OK
    } else {
        PROMPT_ERR
    }
}
