use crate::ports::TimePort;
use core::time::Duration;
use std::time::{SystemTime, UNIX_EPOCH};

/// Wall clock plus the tokio timer.
pub struct TokioTimeAdapter;

#[async_trait::async_trait]
impl TimePort for TokioTimeAdapter {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    fn now_secs(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }

    async fn sleep(&self, duration: Duration) {
        // A zero-length pause still defers one scheduling turn.
        if duration.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(duration).await;
        }
    }
}
