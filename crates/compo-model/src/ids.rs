//! Composition value types for identifiers and coded terms.
//!
//! The composition template addresses leaf attributes with a leading pipe
//! (`|id`, `|code`, ...). These types carry those wire names so converters
//! can build fragments without spelling them out.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::options::FillMode;

/// Placeholder issuer written in fill mode.
pub const PLACEHOLDER_ISSUER: &str = "Issuer";
/// Placeholder assigner written in fill mode.
pub const PLACEHOLDER_ASSIGNER: &str = "Assigner";
/// Placeholder identifier type written in fill mode.
pub const PLACEHOLDER_ID_TYPE: &str = "Prescription";

/// Archetype node code for the interpretation resolution status.
pub const RESOLUTION_STATUS_CODE: &str = "at0007";
/// Archetype node code for the genomic interpretation status.
pub const GENOMIC_INTERPRETATION_STATUS_CODE: &str = "at0005";
/// Archetype node code for pedigree sex.
pub const SEX_CODE: &str = "at0009";

/// Compound identifier (`DV_IDENTIFIER`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    #[serde(rename = "|id")]
    pub id: String,
    #[serde(rename = "|issuer", default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(rename = "|assigner", default, skip_serializing_if = "Option::is_none")]
    pub assigner: Option<String>,
    #[serde(rename = "|type", default, skip_serializing_if = "Option::is_none")]
    pub id_type: Option<String>,
}

impl Identifier {
    /// Wrap a raw id, adding the placeholder issuer/assigner/type in fill mode.
    pub fn new(id: impl Into<String>, fill: FillMode) -> Self {
        let placeholder = |value: &str| fill.is_fill().then(|| value.to_string());
        Self {
            id: id.into(),
            issuer: placeholder(PLACEHOLDER_ISSUER),
            assigner: placeholder(PLACEHOLDER_ASSIGNER),
            id_type: placeholder(PLACEHOLDER_ID_TYPE),
        }
    }
}

/// Coded text split from a `TERMINOLOGY:CODE` compound id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodedValue {
    #[serde(rename = "|code")]
    pub code: String,
    #[serde(rename = "|terminology")]
    pub terminology: String,
    #[serde(rename = "|value")]
    pub value: String,
}

impl CodedValue {
    /// Split `compound_id` on `:` and pair it with `label`.
    ///
    /// Segments after the second are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MalformedIdentifier`] when the id has no `:`.
    pub fn parse(compound_id: &str, label: impl Into<String>) -> Result<Self> {
        let mut segments = compound_id.split(':');
        let terminology = segments.next().unwrap_or_default();
        let Some(code) = segments.next() else {
            return Err(ModelError::MalformedIdentifier {
                value: compound_id.to_string(),
            });
        };
        Ok(Self {
            code: code.to_string(),
            terminology: terminology.to_string(),
            value: label.into(),
        })
    }
}

/// Ordinal-coded value (`DV_ORDINAL`); code and ordinal are template placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdinalValue {
    #[serde(rename = "|value")]
    pub value: String,
    #[serde(rename = "|code", default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(rename = "|ordinal", default, skip_serializing_if = "Option::is_none")]
    pub ordinal: Option<u32>,
}

impl OrdinalValue {
    pub fn new(value: impl Into<String>, node_code: &str, fill: FillMode) -> Self {
        Self {
            value: value.into(),
            code: fill.is_fill().then(|| node_code.to_string()),
            ordinal: fill.is_fill().then_some(0),
        }
    }
}

/// Bare code phrase, used for enumerations copied through by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeOnly {
    #[serde(rename = "|code")]
    pub code: String,
}

impl CodeOnly {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

/// Shorthand for [`Identifier::new`].
pub fn make_identifier(id: &str, fill: FillMode) -> Identifier {
    Identifier::new(id, fill)
}

/// Shorthand for [`CodedValue::parse`].
///
/// # Errors
///
/// Returns [`ModelError::MalformedIdentifier`] when the id has no `:`.
pub fn make_coded_value(compound_id: &str, label: &str) -> Result<CodedValue> {
    CodedValue::parse(compound_id, label)
}
