//! Console configuration
//!
//! Values come from `console.toml`, checked and turned into constants by
//! the build script.

use embassy_time::Duration;
use serline_core::ConsoleConfig;
use serline_hal::UartConfig;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/console_config.rs"));
}

/// Console settings for this build
pub fn console_config() -> ConsoleConfig {
    ConsoleConfig {
        name: generated::NAME,
        board: generated::BOARD,
        uart: UartConfig {
            baudrate: generated::BAUDRATE,
            data_bits: generated::DATA_BITS,
            parity: generated::PARITY,
            stop_bits: generated::STOP_BITS,
        },
        wait: generated::WAIT,
        poll_interval: Duration::from_millis(generated::POLL_INTERVAL_MS),
    }
    .for_environment(cfg!(feature = "emulated"))
}
