//! Buffered UART output
//!
//! embassy-rp hands out a `BufferedUartTx` only after the peripheral, pins
//! and interrupt are configured, so holding one is the readiness proof:
//! [`Rp2040Tx`] always reports ready and the console's `DeviceNotReady`
//! path cannot trigger on this chip.

use embassy_rp::uart::{self, BufferedUartTx};
use embedded_io::Write;
use serline_core::InitError;
use serline_hal::{DataBits, DeviceReady, Parity, StopBits, UartConfig, UartTx};

/// Console output over the TX half of a buffered UART
///
/// Each byte is pushed into the TX ring and the call blocks while the ring
/// is full.
pub struct Rp2040Tx {
    tx: BufferedUartTx,
}

impl Rp2040Tx {
    pub fn new(tx: BufferedUartTx) -> Self {
        Self { tx }
    }

    pub fn into_inner(self) -> BufferedUartTx {
        self.tx
    }
}

impl UartTx for Rp2040Tx {
    type Error = uart::Error;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.tx.write_all(&[byte])
    }

    fn write_blocking(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.tx.write_all(bytes)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.tx.blocking_flush()
    }
}

impl DeviceReady for Rp2040Tx {
    fn is_ready(&self) -> bool {
        true
    }
}

/// Translate a portable UART config into embassy-rp's
///
/// The RP2040 UART has no 9-bit frames.
pub fn to_embassy_config(config: &UartConfig) -> Result<uart::Config, InitError> {
    if config.baudrate == 0 {
        return Err(InitError::InvalidArgument);
    }

    let mut cfg = uart::Config::default();
    cfg.baudrate = config.baudrate;
    cfg.data_bits = match config.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
        DataBits::Nine => return Err(InitError::InvalidArgument),
    };
    cfg.parity = match config.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    cfg.stop_bits = match config.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    Ok(cfg)
}
