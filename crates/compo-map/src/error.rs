//! Error types for conversion.

use compo_model::ModelError;
use thiserror::Error;

/// Errors raised while remapping a phenopacket into a composition.
///
/// Converters never recover from these; the caller aborts the document.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("{entity} is missing required field '{field}'")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("{name} overlay must be a JSON object, found {found}")]
    InvalidOverlay {
        name: &'static str,
        found: &'static str,
    },

    #[error("failed to encode composition value")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
