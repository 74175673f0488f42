//! Console driver
//!
//! Runs the console state machine: one [`Console::step`] performs the work
//! of the current state and applies the resulting event.

use core::fmt::Write;

use embassy_time::{Duration, Timer};
use serline_hal::{DeviceReady, UartTx};

use super::prompt::{completion, LINE_BREAK, PROMPT};
use super::{ConsoleEvent, ConsoleState, Dispatcher, InitError, Transmitter};
use crate::config::{ConsoleConfig, WaitPolicy};
use crate::line::{Line, LineReceiver, LINE_CAPACITY, QUEUE_DEPTH};

/// Period of the halt diagnostic
const HALT_IDLE: Duration = Duration::from_secs(1);

/// Start of the halt diagnostic, followed by the failure reason
const FATAL_PREFIX: &str = "FATAL: UART init failed: ";

/// The consumer loop
pub struct Console<'a, T, D, const CAP: usize = LINE_CAPACITY, const DEPTH: usize = QUEUE_DEPTH> {
    rx: LineReceiver<'a, CAP, DEPTH>,
    tx: Transmitter<T>,
    dispatcher: D,
    config: ConsoleConfig,
    state: ConsoleState,
    pending: Option<Line<CAP>>,
}

impl<'a, T, D, const CAP: usize, const DEPTH: usize> Console<'a, T, D, CAP, DEPTH>
where
    T: UartTx,
    D: Dispatcher<CAP>,
{
    /// Bind the console to its receiver and transmitter
    ///
    /// An unusable configuration or a UART that is not ready leaves the
    /// console in [`ConsoleState::FatalHalt`].
    pub fn bind(
        rx: LineReceiver<'a, CAP, DEPTH>,
        tx: Transmitter<T>,
        dispatcher: D,
        config: ConsoleConfig,
    ) -> Self
    where
        T: DeviceReady,
    {
        let ready = if tx.is_ready() {
            config.validate()
        } else {
            Err(InitError::DeviceNotReady)
        };

        let mut console = Self {
            rx,
            tx,
            dispatcher,
            config,
            state: ConsoleState::Init,
            pending: None,
        };
        if let Err(err) = ready {
            console.fail(err);
        }
        console
    }

    /// Record an init failure found outside the console
    ///
    /// Only takes effect before the banner was sent.
    pub fn fail(&mut self, err: InitError) {
        self.state = self.state.transition(ConsoleEvent::InitFailed(err));
    }

    pub fn state(&self) -> ConsoleState {
        self.state
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn transmitter(&self) -> &Transmitter<T> {
        &self.tx
    }

    pub fn transmitter_mut(&mut self) -> &mut Transmitter<T> {
        &mut self.tx
    }

    /// Perform the current state's work and advance
    pub async fn step(&mut self) -> ConsoleState {
        let event = match self.state {
            ConsoleState::Init => {
                let _ = write!(
                    self.tx,
                    "\r\n{} {} ready\r\n{}",
                    self.config.name, self.config.board, PROMPT
                );
                ConsoleEvent::Started
            }
            ConsoleState::WaitLine => {
                self.report_warnings();

                match self.rx.receive(self.config.wait.wait()).await {
                    Some(line) => {
                        self.pending = Some(line);
                        ConsoleEvent::LineReceived
                    }
                    None => {
                        if self.config.wait == WaitPolicy::Poll {
                            Timer::after(self.config.poll_interval).await;
                        }
                        ConsoleEvent::Timeout
                    }
                }
            }
            ConsoleState::HaveLine => {
                self.tx.send_str(LINE_BREAK);
                let ok = match self.pending.take() {
                    Some(line) => self.dispatcher.dispatch(&line, &mut self.tx),
                    None => false,
                };
                ConsoleEvent::DispatchDone(ok)
            }
            ConsoleState::Dispatched { ok } => {
                self.tx.send_str(completion(ok));
                ConsoleEvent::PromptSent
            }
            ConsoleState::FatalHalt(err) => {
                #[cfg(feature = "defmt")]
                defmt::error!("FATAL: UART init failed: {}", err);
                let _ = write!(self.tx, "{}{}\r\n", FATAL_PREFIX, err);
                Timer::after(HALT_IDLE).await;
                return self.state;
            }
        };

        self.state = self.state.transition(event);
        self.state
    }

    /// Run the console forever
    pub async fn run(&mut self) -> ! {
        loop {
            self.step().await;
        }
    }

    /// Write out and clear any latched warnings
    fn report_warnings(&mut self) -> usize {
        let tx = &mut self.tx;
        self.rx.poll_warnings(|warning| tx.send_str(warning.message()))
    }
}
