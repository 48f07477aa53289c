//! Optional host backends.

#[cfg(feature = "engine-wasmtime")]
pub mod wasmtime_host;
