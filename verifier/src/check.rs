//! The per-variant verification routine and the run-all orchestration.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::variant::Variant;
use crate::{Error, Host, Result};

/// The expectation checked against each artifact.
#[derive(Debug, Clone)]
pub struct SmokeCheck {
    /// Name of the exported function to call.
    pub export: String,
    /// Argument passed to the export.
    pub input: i32,
    /// Value the export must return.
    pub expected: i32,
}

impl Default for SmokeCheck {
    fn default() -> Self {
        Self {
            export: "double".to_string(),
            input: 2,
            expected: 4,
        }
    }
}

/// Success record for one variant.
#[derive(Debug, Clone)]
pub struct Report {
    pub variant: Variant,
    pub path: PathBuf,
    pub len: usize,
}

/// Smoke-checks a single variant's artifact, failing fast on the first
/// violated expectation: existence, readability, non-emptiness,
/// instantiation, and finally the export's output.
pub async fn verify_variant<H: Host>(
    host: &H,
    dir: &Path,
    variant: Variant,
    check: &SmokeCheck,
) -> Result<Report> {
    let path = variant.artifact_path(dir);
    debug!(%variant, path = %path.display(), "locating artifact");

    match tokio::fs::try_exists(&path).await {
        Ok(true) => {}
        Ok(false) => return Err(Error::MissingArtifact { path }),
        Err(source) => return Err(Error::Read { path, source }),
    }

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|source| Error::Read {
            path: path.clone(),
            source,
        })?;
    if bytes.is_empty() {
        return Err(Error::EmptyArtifact { path });
    }

    debug!(%variant, len = bytes.len(), "instantiating");
    let mut instance = host.instantiate(&bytes)?;

    let actual = host.call_i32(&mut instance, &check.export, check.input)?;
    if actual != check.expected {
        return Err(Error::UnexpectedOutput {
            export: check.export.clone(),
            input: check.input,
            expected: check.expected,
            actual,
        });
    }

    debug!(%variant, "smoke check passed");
    Ok(Report {
        variant,
        path,
        len: bytes.len(),
    })
}

/// Runs [`verify_variant`] for every listed variant as independent eagerly
/// spawned tasks. One variant's failure never stops the others; every
/// outcome is collected and returned in the input order. An empty variant
/// list is a vacuous success.
pub async fn verify_all<H>(
    host: Arc<H>,
    dir: &Path,
    variants: &[Variant],
    check: &SmokeCheck,
) -> Vec<(Variant, Result<Report>)>
where
    H: Host + Send + Sync + 'static,
{
    let mut handles = Vec::with_capacity(variants.len());
    for &variant in variants {
        let host = Arc::clone(&host);
        let dir = dir.to_path_buf();
        let check = check.clone();
        handles.push((
            variant,
            tokio::spawn(async move { verify_variant(host.as_ref(), &dir, variant, &check).await }),
        ));
    }

    let mut results = Vec::with_capacity(handles.len());
    for (variant, handle) in handles {
        let outcome = match handle.await {
            Ok(outcome) => outcome,
            Err(err) => Err(Error::Task {
                reason: err.to_string(),
            }),
        };
        results.push((variant, outcome));
    }
    results
}
