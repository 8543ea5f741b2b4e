#[cfg(not(target_arch = "wasm32"))]
pub mod std_adapters;
#[cfg(target_arch = "wasm32")]
pub mod wasm_adapters;

#[cfg(not(target_arch = "wasm32"))]
pub use std_adapters::TokioTimeAdapter;
#[cfg(target_arch = "wasm32")]
pub use wasm_adapters::WasmTimeAdapter;
