//! Error types for phenopacket ingestion.

use std::path::PathBuf;

use compo_map::ConvertError;
use compo_model::DocumentVariant;
use thiserror::Error;

use crate::source::AuxiliaryKind;

/// Errors raised while discovering or loading input documents.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Discovery ===
    #[error("failed to read path file {path}")]
    PathFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input root not found: {path}")]
    RootNotFound { path: PathBuf },

    #[error("failed to walk {path}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    // === Loading ===
    #[error("failed to read file {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("missing {kind} file for input: {path}")]
    MissingAuxiliaryFile { path: PathBuf, kind: AuxiliaryKind },

    #[error("invalid JSON in {path}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unrecognized document in {path}: expected an Interpretation or a Cohort")]
    UnrecognizedVariant { path: PathBuf },

    #[error("{path} does not match the {variant} schema")]
    SchemaValidation {
        path: PathBuf,
        variant: DocumentVariant,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid overlay {path}")]
    InvalidOverlay {
        path: PathBuf,
        #[source]
        source: ConvertError,
    },
}

impl IngestError {
    /// Variant the document was classified as, when loading got that far.
    pub fn variant(&self) -> Option<DocumentVariant> {
        match self {
            Self::SchemaValidation { variant, .. } => Some(*variant),
            Self::UnrecognizedVariant { .. } => Some(DocumentVariant::Unrecognized),
            _ => None,
        }
    }

    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::InvalidJson {
            path: path.into(),
            source,
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
