//! Host test doubles

use serline_hal::{DeviceReady, UartTx};

/// UART that records everything written to it
pub struct MockUart {
    output: Vec<u8>,
    fail_remaining: usize,
    ready: bool,
}

impl MockUart {
    pub fn new() -> Self {
        Self {
            output: Vec::new(),
            fail_remaining: 0,
            ready: true,
        }
    }

    pub fn not_ready() -> Self {
        Self {
            ready: false,
            ..Self::new()
        }
    }

    /// Make the next `count` byte writes fail
    pub fn fail_next(&mut self, count: usize) {
        self.fail_remaining = count;
    }

    pub fn output(&self) -> &[u8] {
        &self.output
    }

    pub fn output_str(&self) -> &str {
        core::str::from_utf8(&self.output).unwrap()
    }

    pub fn clear(&mut self) {
        self.output.clear();
    }
}

impl UartTx for MockUart {
    type Error = ();

    fn write_byte(&mut self, byte: u8) -> Result<(), ()> {
        if self.fail_remaining > 0 {
            self.fail_remaining -= 1;
            return Err(());
        }
        self.output.push(byte);
        Ok(())
    }
}

impl DeviceReady for MockUart {
    fn is_ready(&self) -> bool {
        self.ready
    }
}
