#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod consts;
pub mod ports;
pub mod progress;
pub mod schema;

#[cfg(feature = "std")]
pub mod adapters;
#[cfg(feature = "std")]
pub mod delay;
#[cfg(all(feature = "std", not(target_arch = "wasm32")))]
pub mod observability;
#[cfg(feature = "std")]
pub mod scope;

pub use consts::{MAX_PROGRESS, SHORT_DELAY_MS, SUCCESS_MESSAGE_DURATION_MS};
#[cfg(all(feature = "std", not(target_arch = "wasm32")))]
pub use delay::{delay, hold_success_message};
#[cfg(feature = "std")]
pub use delay::Pacer;
