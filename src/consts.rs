//! Shared timing constants.
//!
//! Published as named values so flow code references these instead of
//! hardcoding magic numbers.

/// Default pause between UI state transitions (milliseconds).
pub const SHORT_DELAY_MS: u64 = 100;

/// How long a success notice stays on screen (milliseconds).
pub const SUCCESS_MESSAGE_DURATION_MS: u64 = 3000;

/// Upper bound of the progress scale.
pub const MAX_PROGRESS: u8 = 100;
