//! Timer-backed pauses used to sequence UI state transitions.

use core::time::Duration;
use std::sync::Arc;

use tracing::trace;

use crate::consts::{SHORT_DELAY_MS, SUCCESS_MESSAGE_DURATION_MS};
use crate::ports::TimePort;

/// Pause for `ms` milliseconds, or [`SHORT_DELAY_MS`] when `None`.
///
/// The returned future is inert until polled and never resolves before the
/// requested duration has elapsed on the runtime clock. `Some(0)` still
/// yields to the scheduler once instead of completing on the first poll.
/// There is no error path and no cancellation surface; dropping the future
/// abandons the timer.
#[cfg(not(target_arch = "wasm32"))]
pub async fn delay(ms: Option<u64>) {
    let ms = ms.unwrap_or(SHORT_DELAY_MS);
    trace!(ms, "delay registered");
    if ms == 0 {
        tokio::task::yield_now().await;
    } else {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}

/// Keep a success notice up for [`SUCCESS_MESSAGE_DURATION_MS`].
#[cfg(not(target_arch = "wasm32"))]
pub async fn hold_success_message() {
    delay(Some(SUCCESS_MESSAGE_DURATION_MS)).await;
}

/// Capability bundle for paced flows: the delay semantics driven through an
/// injected [`TimePort`], so callers can swap the clock.
#[derive(Clone)]
pub struct Pacer {
    time: Arc<dyn TimePort>,
}

impl Pacer {
    pub fn new(time: Arc<dyn TimePort>) -> Self {
        Self { time }
    }

    /// Same contract as [`delay`], on this pacer's clock.
    pub async fn delay(&self, ms: Option<u64>) {
        let ms = ms.unwrap_or(SHORT_DELAY_MS);
        trace!(ms, "delay registered");
        self.time.sleep(Duration::from_millis(ms)).await;
    }

    /// Same contract as [`hold_success_message`], on this pacer's clock.
    pub async fn hold_success_message(&self) {
        self.delay(Some(SUCCESS_MESSAGE_DURATION_MS)).await;
    }

    pub fn now_millis(&self) -> u64 {
        self.time.now_millis()
    }

    pub fn now_secs(&self) -> u64 {
        self.time.now_secs()
    }
}
