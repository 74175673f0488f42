//! Console task

use defmt::*;

use crate::channels::ConsoleHandle;

/// Console task - dispatches completed lines forever
///
/// A console that failed to bind stays in its halt state and repeats the
/// failure once per second.
#[embassy_executor::task]
pub async fn console_task(mut console: ConsoleHandle) {
    info!(
        "Console task started ({} on {})",
        console.config().name,
        console.config().board
    );
    console.run().await
}
