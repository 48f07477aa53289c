// Smoke-check harness for wasm-bindgen artifacts built for multiple targets.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the verifier.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while smoke-checking one artifact.
#[derive(Debug, Error)]
pub enum Error {
    /// The expected binary does not exist at the computed path.
    #[error("artifact missing: {path}")]
    MissingArtifact { path: PathBuf },
    /// The file exists but could not be fully read.
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file read back as zero bytes.
    #[error("empty artifact: {path}")]
    EmptyArtifact { path: PathBuf },
    /// The host itself could not be constructed.
    #[error("wasm host unavailable: {reason}")]
    Host { reason: String },
    /// The host rejected the bytes as an invalid or unlinkable module.
    #[error("instantiation failed: {reason}")]
    Instantiation { reason: String },
    /// The instance has no export with the expected name and signature.
    #[error("export `{name}` missing or not callable: {reason}")]
    MissingExport { name: String, reason: String },
    /// The export exists but trapped during the call.
    #[error("call to `{export}` trapped: {reason}")]
    Call { export: String, reason: String },
    /// The export returned the wrong value.
    #[error("`{export}`({input}) returned {actual}, expected {expected}")]
    UnexpectedOutput {
        export: String,
        input: i32,
        expected: i32,
        actual: i32,
    },
    /// A verification task aborted before producing an outcome.
    #[error("verification task failed: {reason}")]
    Task { reason: String },
}

/// Host abstraction so the verifier can swap wasmtime for a mock in tests.
pub trait Host {
    /// Instantiated module together with whatever state calls need.
    type Instance;

    /// Compiles and links a module from raw bytes, no imports provided.
    fn instantiate(&self, bytes: &[u8]) -> Result<Self::Instance>;

    /// Invokes an exported `i32 -> i32` function by name.
    fn call_i32(&self, instance: &mut Self::Instance, export: &str, arg: i32) -> Result<i32>;
}

pub mod check;
pub mod hosts;
pub mod variant;

pub use check::{verify_all, verify_variant, Report, SmokeCheck};
pub use variant::{UnknownVariant, Variant};
