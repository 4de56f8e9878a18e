//! Verification of a produced composition against a precomputed target.
//!
//! Both documents are flattened (objects only, keys joined with `_`) and then
//! diffed structurally. The result is informational: it never changes what
//! is written.

pub mod diff;
pub mod error;
pub mod flatten;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

pub use diff::{DiffKind, Difference, diff_objects, diff_values};
pub use error::{Result, VerifyError};
pub use flatten::flatten;

/// Differences between one composition and its target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationReport {
    pub target: PathBuf,
    pub differences: Vec<Difference>,
}

impl VerificationReport {
    pub fn is_match(&self) -> bool {
        self.differences.is_empty()
    }

    pub fn count(&self, kind: DiffKind) -> usize {
        self.differences
            .iter()
            .filter(|difference| difference.kind == kind)
            .count()
    }

    pub fn added(&self) -> usize {
        self.count(DiffKind::Added)
    }

    pub fn removed(&self) -> usize {
        self.count(DiffKind::Removed)
    }

    pub fn changed(&self) -> usize {
        self.count(DiffKind::Changed)
    }
}

/// Flatten both documents and diff them.
pub fn verify(obtained: &Value, target: &Value, target_path: &Path) -> VerificationReport {
    let differences = diff_objects(&flatten(obtained), &flatten(target));
    debug!(
        target = %target_path.display(),
        differences = differences.len(),
        "verified composition"
    );
    VerificationReport {
        target: target_path.to_path_buf(),
        differences,
    }
}

/// Load `target_path` and verify `obtained` against it.
///
/// # Errors
///
/// [`VerifyError::MissingTargetFile`] when the target does not exist; read
/// and parse failures otherwise.
pub fn verify_against_target(obtained: &Value, target_path: &Path) -> Result<VerificationReport> {
    if !target_path.is_file() {
        return Err(VerifyError::MissingTargetFile {
            path: target_path.to_path_buf(),
        });
    }
    let raw = fs::read_to_string(target_path).map_err(|source| VerifyError::Io {
        path: target_path.to_path_buf(),
        source,
    })?;
    let target: Value = serde_json::from_str(&raw).map_err(|source| VerifyError::InvalidJson {
        path: target_path.to_path_buf(),
        source,
    })?;
    Ok(verify(obtained, &target, target_path))
}
