//! Serline Hardware Abstraction Layer
//!
//! This crate defines the few hardware traits the serial console needs, so
//! the board-agnostic core can be driven by any chip-specific HAL.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (serline-firmware)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  serline-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ serline-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`uart::UartTx`] - Blocking byte transmission
//! - [`uart::DeviceReady`] - Peripheral readiness check at bind time

#![no_std]
#![deny(unsafe_code)]

pub mod uart;

pub use uart::{DataBits, DeviceReady, Parity, StopBits, UartConfig, UartTx};
