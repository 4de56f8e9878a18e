use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while checking a composition against its target.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// No `.target` file next to the input. Callers log this and move on.
    #[error("target file not found: {path}")]
    MissingTargetFile { path: PathBuf },

    #[error("failed to read target {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in target {path}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, VerifyError>;
