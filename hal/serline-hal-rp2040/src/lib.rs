//! RP2040 backend for the serline console
//!
//! Implements the `serline-hal` output traits over embassy-rp's
//! interrupt-driven buffered UART and maps the portable [`UartConfig`]
//! onto the peripheral's own configuration.
//!
//! [`UartConfig`]: serline_hal::UartConfig

#![no_std]

pub mod uart;

pub use uart::{to_embassy_config, Rp2040Tx};
