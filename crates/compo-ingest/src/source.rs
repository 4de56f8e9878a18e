//! Loading one input document with its sibling overlay files.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use compo_map::Overlays;
use compo_model::phenopacket::{Cohort, Interpretation};
use compo_model::{DocumentVariant, SourceDocument, classify};
use serde_json::Value;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Sibling files that travel with a phenopacket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuxiliaryKind {
    /// Top-level composition overlay.
    Ctxinfo,
    /// Report-level composition overlay.
    Context,
    /// Expected composition, used for verification.
    Target,
}

impl AuxiliaryKind {
    pub fn extension(&self) -> &'static str {
        match self {
            AuxiliaryKind::Ctxinfo => "ctxinfo",
            AuxiliaryKind::Context => "context",
            AuxiliaryKind::Target => "target",
        }
    }
}

impl fmt::Display for AuxiliaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// `<dir>/<stem>.<kind>` next to `input`.
pub fn auxiliary_path(input: &Path, kind: AuxiliaryKind) -> PathBuf {
    input.with_extension(kind.extension())
}

/// A validated input document ready for conversion.
#[derive(Debug, Clone)]
pub struct LoadedInput {
    pub path: PathBuf,
    pub document: SourceDocument,
    pub overlays: Overlays,
}

impl LoadedInput {
    pub fn variant(&self) -> DocumentVariant {
        self.document.variant()
    }
}

/// Load and validate one phenopacket together with its overlays.
///
/// Both overlay files must exist before the document is even parsed.
pub fn load_input(path: &Path) -> Result<LoadedInput> {
    let ctxinfo_path = require_auxiliary(path, AuxiliaryKind::Ctxinfo)?;
    let context_path = require_auxiliary(path, AuxiliaryKind::Context)?;

    let raw = fs::read_to_string(path).map_err(|source| IngestError::read(path, source))?;
    let document = parse_document(path, &raw)?;
    debug!(path = %path.display(), variant = %document.variant(), "document validated");

    let overlays = Overlays::from_values(read_json(&ctxinfo_path)?, read_json(&context_path)?)
        .map_err(|source| IngestError::InvalidOverlay {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(LoadedInput {
        path: path.to_path_buf(),
        document,
        overlays,
    })
}

/// Classify raw JSON text and parse it into the matching typed message.
///
/// The typed parse runs on the raw text rather than an intermediate
/// [`Value`] so that map-valued fields keep their document order.
pub fn parse_document(path: &Path, raw: &str) -> Result<SourceDocument> {
    let value: Value =
        serde_json::from_str(raw).map_err(|source| IngestError::json(path, source))?;
    let variant = classify(&value);
    let schema_error = |source: serde_json::Error| IngestError::SchemaValidation {
        path: path.to_path_buf(),
        variant,
        source,
    };
    match variant {
        DocumentVariant::Interpretation => serde_json::from_str::<Interpretation>(raw)
            .map(|parsed| SourceDocument::Interpretation(Box::new(parsed)))
            .map_err(schema_error),
        DocumentVariant::Cohort => serde_json::from_str::<Cohort>(raw)
            .map(|parsed| SourceDocument::Cohort(Box::new(parsed)))
            .map_err(schema_error),
        DocumentVariant::Unrecognized => Err(IngestError::UnrecognizedVariant {
            path: path.to_path_buf(),
        }),
    }
}

/// Read any JSON file.
pub fn read_json(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path).map_err(|source| IngestError::read(path, source))?;
    serde_json::from_str(&raw).map_err(|source| IngestError::json(path, source))
}

fn require_auxiliary(input: &Path, kind: AuxiliaryKind) -> Result<PathBuf> {
    let path = auxiliary_path(input, kind);
    if path.is_file() {
        Ok(path)
    } else {
        Err(IngestError::MissingAuxiliaryFile { path, kind })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auxiliary_paths_replace_extension() {
        let input = Path::new("/data/run1/sample.json");
        assert_eq!(
            auxiliary_path(input, AuxiliaryKind::Ctxinfo),
            PathBuf::from("/data/run1/sample.ctxinfo")
        );
        assert_eq!(
            auxiliary_path(input, AuxiliaryKind::Target),
            PathBuf::from("/data/run1/sample.target")
        );
    }

    #[test]
    fn unrecognized_shape_is_rejected() {
        let error = parse_document(Path::new("x.json"), r#"{ "id": "P1" }"#).unwrap_err();
        assert!(matches!(error, IngestError::UnrecognizedVariant { .. }));
        let error = parse_document(Path::new("x.json"), "[1, 2]").unwrap_err();
        assert!(matches!(error, IngestError::UnrecognizedVariant { .. }));
    }

    #[test]
    fn unknown_field_fails_schema_validation() {
        let raw = r#"{ "id": "C1", "members": [], "metaData": {}, "colour": "blue" }"#;
        let error = parse_document(Path::new("x.json"), raw).unwrap_err();
        assert!(matches!(
            error,
            IngestError::SchemaValidation {
                variant: DocumentVariant::Cohort,
                ..
            }
        ));
    }

    #[test]
    fn interpretation_marker_selects_interpretation_schema() {
        let raw = r#"{ "id": "I1", "resolutionStatus": "SOLVED", "metaData": {} }"#;
        let document = parse_document(Path::new("x.json"), raw).unwrap();
        assert_eq!(document.variant(), DocumentVariant::Interpretation);
        assert_eq!(document.id(), "I1");
    }

    #[test]
    fn broken_json_is_reported() {
        let error = parse_document(Path::new("x.json"), "{ nope").unwrap_err();
        assert!(matches!(error, IngestError::InvalidJson { .. }));
    }
}
