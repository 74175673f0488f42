//! Producer/consumer plumbing
//!
//! The serial line lives for the whole program; its halves are handed to
//! the receive task and the console task.

use serline_commands::CommandTable;
use serline_core::{Console, LineAssembler, LineReceiver, SerialLine};
use serline_hal_rp2040::Rp2040Tx;
use static_cell::StaticCell;

/// Shared queue and warning latch between the two halves
pub static SERIAL_LINE: StaticCell<SerialLine> = StaticCell::new();

/// Producer half, owned by the receive task
pub type Assembler = LineAssembler<'static>;

/// Consumer half, owned by the console
pub type Receiver = LineReceiver<'static>;

/// The console as run by the console task
pub type ConsoleHandle = Console<'static, Rp2040Tx, CommandTable>;
