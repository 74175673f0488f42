//! Embassy async tasks
//!
//! The receive task runs on the high-priority interrupt executor and
//! preempts the console task on the thread executor.

pub mod console;
pub mod serial_rx;

pub use console::console_task;
pub use serial_rx::serial_rx_task;
