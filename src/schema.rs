use serde::{Deserialize, Serialize};

use crate::consts::{MAX_PROGRESS, SHORT_DELAY_MS, SUCCESS_MESSAGE_DURATION_MS};

/// Timing tuning document. Absent fields fall back to the shared constants.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct TimingDoc {
    #[serde(default = "default_short_delay_ms")]
    pub short_delay_ms: u64,
    #[serde(default = "default_success_message_duration_ms")]
    pub success_message_duration_ms: u64,
    #[serde(default = "default_max_progress")]
    pub max_progress: u8,
}

fn default_short_delay_ms() -> u64 {
    SHORT_DELAY_MS
}

fn default_success_message_duration_ms() -> u64 {
    SUCCESS_MESSAGE_DURATION_MS
}

fn default_max_progress() -> u8 {
    MAX_PROGRESS
}

impl Default for TimingDoc {
    fn default() -> Self {
        Self {
            short_delay_ms: SHORT_DELAY_MS,
            success_message_duration_ms: SUCCESS_MESSAGE_DURATION_MS,
            max_progress: MAX_PROGRESS,
        }
    }
}
