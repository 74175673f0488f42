//! Configuration types
//!
//! Board-agnostic console settings. The firmware fills these from its
//! build-time validated `console.toml`.

pub mod types;

pub use types::*;
