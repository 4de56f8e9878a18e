//! Top-level document classification.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::phenopacket::{Cohort, Interpretation};

/// Field whose presence marks an Interpretation document.
pub const INTERPRETATION_MARKER: &str = "resolutionStatus";
/// Field whose presence marks a Cohort document.
pub const COHORT_MARKER: &str = "members";
/// File name prefix of every written composition.
pub const OUTPUT_PREFIX: &str = "COMPOSITION_FROM";

/// Which top-level phenopacket message a document holds.
///
/// Family and Phenopacket messages only occur nested inside an
/// Interpretation or Cohort, so they are never dispatched at the top level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentVariant {
    Interpretation,
    Cohort,
    Unrecognized,
}

impl DocumentVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentVariant::Interpretation => "Interpretation",
            DocumentVariant::Cohort => "Cohort",
            DocumentVariant::Unrecognized => "Unrecognized",
        }
    }
}

impl fmt::Display for DocumentVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a raw document by its marker fields.
///
/// `resolutionStatus` wins over `members` when both are present.
pub fn classify(document: &Value) -> DocumentVariant {
    let Some(object) = document.as_object() else {
        return DocumentVariant::Unrecognized;
    };
    if object.contains_key(INTERPRETATION_MARKER) {
        DocumentVariant::Interpretation
    } else if object.contains_key(COHORT_MARKER) {
        DocumentVariant::Cohort
    } else {
        DocumentVariant::Unrecognized
    }
}

/// A document that passed the schema boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceDocument {
    Interpretation(Box<Interpretation>),
    Cohort(Box<Cohort>),
}

impl SourceDocument {
    pub fn variant(&self) -> DocumentVariant {
        match self {
            SourceDocument::Interpretation(_) => DocumentVariant::Interpretation,
            SourceDocument::Cohort(_) => DocumentVariant::Cohort,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            SourceDocument::Interpretation(interpretation) => &interpretation.id,
            SourceDocument::Cohort(cohort) => &cohort.id,
        }
    }
}
