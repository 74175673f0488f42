//! Command handlers
//!
//! Each handler writes its result to `out` and leaves line breaks around it
//! to the console. Error text is printed by the table, not here.

use core::fmt::Write;

use heapless::Vec;

use crate::error::CommandError;
use crate::parser::ParsedCommand;
use crate::table::COMMANDS;

/// Largest input `sort` accepts before truncating
pub const SORT_MAX: usize = 128;

/// Bytes per row of the sorted dump
const DUMP_ROW: usize = 16;

pub type HandlerResult = Result<(), CommandError>;

pub fn cmd_help(_cmd: &ParsedCommand<'_>, out: &mut dyn Write) -> HandlerResult {
    for (i, c) in COMMANDS.iter().enumerate() {
        if i > 0 {
            let _ = out.write_str("\r\n");
        }
        let _ = write!(out, "  {:<8} {}", c.name, c.brief);
    }
    Ok(())
}

fn operands(cmd: &ParsedCommand<'_>) -> Result<(u32, u32), CommandError> {
    let parse = |idx| -> Result<u32, CommandError> {
        cmd.arg(idx)
            .ok_or(CommandError::MissingArg)?
            .parse()
            .map_err(|_| CommandError::InvalidValue)
    };
    Ok((parse(0)?, parse(1)?))
}

pub fn cmd_add(cmd: &ParsedCommand<'_>, out: &mut dyn Write) -> HandlerResult {
    let (a, b) = operands(cmd)?;
    let _ = write!(out, "Sum: {}", a.wrapping_add(b));
    Ok(())
}

pub fn cmd_div(cmd: &ParsedCommand<'_>, out: &mut dyn Write) -> HandlerResult {
    let (a, b) = operands(cmd)?;
    let quotient = a.checked_div(b).ok_or(CommandError::DivisionByZero)?;
    let _ = write!(out, "Quotient: {}", quotient);
    Ok(())
}

pub fn cmd_upper(cmd: &ParsedCommand<'_>, out: &mut dyn Write) -> HandlerResult {
    if cmd.rest.is_empty() {
        return Err(CommandError::NoInput);
    }
    for c in cmd.rest.chars() {
        let _ = out.write_char(c.to_ascii_uppercase());
    }
    Ok(())
}

pub fn cmd_reverse(cmd: &ParsedCommand<'_>, out: &mut dyn Write) -> HandlerResult {
    if cmd.rest.is_empty() {
        return Err(CommandError::Empty);
    }
    for c in cmd.rest.chars().rev() {
        let _ = out.write_char(c);
    }
    Ok(())
}

pub fn cmd_sort(cmd: &ParsedCommand<'_>, out: &mut dyn Write) -> HandlerResult {
    dump_sorted(cmd.rest.as_bytes(), out)
}

/// Print `data` sorted ascending as hex, 16 bytes per row
pub fn dump_sorted(data: &[u8], out: &mut dyn Write) -> HandlerResult {
    if data.is_empty() {
        return Err(CommandError::NoData);
    }

    let data = if data.len() > SORT_MAX {
        let _ = out.write_str("[WARN] Input too long, truncating to 128 bytes\r\n");
        &data[..SORT_MAX]
    } else {
        data
    };

    let mut bytes: Vec<u8, SORT_MAX> = Vec::new();
    // Length was clamped above
    let _ = bytes.extend_from_slice(data);
    bytes.sort_unstable();

    for (i, b) in bytes.iter().enumerate() {
        let _ = write!(out, "{:02X} ", b);
        if (i + 1) % DUMP_ROW == 0 {
            let _ = out.write_str("\r\n");
        }
    }
    Ok(())
}
