//! Byte transmitter
//!
//! The single writer for console output. Every byte goes out through the
//! peripheral's blocking single-byte primitive; nothing is buffered.

use core::fmt;

use serline_hal::{DeviceReady, UartTx};

/// Blocking console output over a UART
pub struct Transmitter<T> {
    uart: T,
}

impl<T: UartTx> Transmitter<T> {
    pub fn new(uart: T) -> Self {
        Self { uart }
    }

    /// Send every byte of `text`
    ///
    /// Per-byte errors are dropped; there is no one to report them to.
    pub fn send(&mut self, text: &[u8]) {
        for &byte in text {
            let _ = self.uart.write_byte(byte);
        }
    }

    pub fn send_str(&mut self, text: &str) {
        self.send(text.as_bytes());
    }

    /// The underlying UART
    pub fn uart(&self) -> &T {
        &self.uart
    }

    pub fn uart_mut(&mut self) -> &mut T {
        &mut self.uart
    }

    pub fn into_inner(self) -> T {
        self.uart
    }
}

impl<T: UartTx + DeviceReady> DeviceReady for Transmitter<T> {
    fn is_ready(&self) -> bool {
        self.uart.is_ready()
    }
}

impl<T: UartTx> fmt::Write for Transmitter<T> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.send_str(s);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockUart;
    use core::fmt::Write;

    #[test]
    fn test_send_writes_bytes_in_order() {
        let mut tx = Transmitter::new(MockUart::new());
        tx.send(b"ab");
        tx.send_str("c\r\n");
        assert_eq!(tx.uart().output(), b"abc\r\n");
    }

    #[test]
    fn test_send_continues_past_byte_errors() {
        let mut uart = MockUart::new();
        uart.fail_next(1);
        let mut tx = Transmitter::new(uart);
        tx.send(b"xyz");
        assert_eq!(tx.uart().output(), b"yz");
    }

    #[test]
    fn test_formatted_output() {
        let mut tx = Transmitter::new(MockUart::new());
        write!(tx, "Sum: {}", 42).unwrap();
        assert_eq!(tx.into_inner().output(), b"Sum: 42");
    }
}
