//! Serline - serial line console firmware
//!
//! Main firmware binary for RP2040-based boards. Bytes from UART0 are
//! assembled into lines on a high-priority executor; a console task on the
//! thread executor dispatches each line as a command and answers with a
//! prompt.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::bind_interrupts;
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use serline_commands::CommandTable;
use serline_core::{Console, ConsoleState, SerialLine, Transmitter};
use serline_hal_rp2040::{to_embassy_config, Rp2040Tx};

mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Runs the receive task above the console's priority
static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Serline firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let console_config = config::console_config();
    info!(
        "Console: {} baud, wait policy {}",
        console_config.uart.baudrate, console_config.wait
    );

    // An unusable config still brings the UART up with defaults so the
    // console can report the failure
    let (uart_config, uart_error) = match to_embassy_config(&console_config.uart) {
        Ok(cfg) => (cfg, None),
        Err(e) => (UartConfig::default(), Some(e)),
    };

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    // UART0: GPIO0 TX, GPIO1 RX
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("UART initialized for console");

    let (assembler, receiver) = channels::SERIAL_LINE.init(SerialLine::new()).split();

    let mut console = Console::bind(
        receiver,
        Transmitter::new(Rp2040Tx::new(tx)),
        CommandTable::new(),
        console_config,
    );
    if let Some(e) = uart_error {
        console.fail(e);
    }
    if let ConsoleState::FatalHalt(e) = console.state() {
        error!("Console init failed: {}", e);
    }

    // High-priority executor for the receive task
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let high_spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    high_spawner
        .spawn(tasks::serial_rx_task(rx, assembler))
        .unwrap();

    spawner.spawn(tasks::console_task(console)).unwrap();

    info!("All tasks spawned, console running");
}
