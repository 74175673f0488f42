//! Console UART receive task
//!
//! Drains the UART receive ring and feeds every byte to the line assembler.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use crate::channels::Assembler;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 32;

/// Serial RX task - assembles lines from received bytes
#[embassy_executor::task]
pub async fn serial_rx_task(mut rx: BufferedUartRx, mut assembler: Assembler) {
    info!("Serial RX task started");

    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                let completed = assembler.ingest_all(&buf[..n]);
                if completed > 0 {
                    trace!("RX: {} bytes, {} lines", n, completed);
                }
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}
