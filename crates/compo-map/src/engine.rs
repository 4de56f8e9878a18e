//! Document dispatch and report assembly.
//!
//! A report is built in two layers. The ctxinfo overlay is the top-level
//! base and receives the `*_report` key; the context overlay is the report
//! base and receives the `interpretation`/`cohort` entry. Keys produced by
//! the converter overwrite overlay keys of the same name.

use compo_model::phenopacket::{Cohort, Interpretation};
use compo_model::{ConversionOptions, SourceDocument};
use serde_json::{Map, Value};
use tracing::debug;

use crate::aggregate::{convert_cohort, convert_interpretation};
use crate::error::{ConvertError, Result};
use crate::fragment::Fragment;

pub const INTERPRETATION_REPORT_KEY: &str = "interpretation_report";
pub const COHORT_REPORT_KEY: &str = "cohort_report";

/// The two caller-supplied overlay objects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlays {
    pub ctxinfo: Map<String, Value>,
    pub context: Map<String, Value>,
}

impl Overlays {
    pub fn new(ctxinfo: Map<String, Value>, context: Map<String, Value>) -> Self {
        Self { ctxinfo, context }
    }

    /// Build overlays from parsed documents.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidOverlay`] when either value is not an
    /// object.
    pub fn from_values(ctxinfo: Value, context: Value) -> Result<Self> {
        Ok(Self {
            ctxinfo: expect_object("ctxinfo", ctxinfo)?,
            context: expect_object("context", context)?,
        })
    }
}

fn expect_object(name: &'static str, value: Value) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ConvertError::InvalidOverlay {
            name,
            found: json_type_name(&other),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// `{...ctxinfo, interpretation_report: {...context, interpretation: [..]}}`
pub fn convert_interpretation_report(
    source: &Interpretation,
    overlays: &Overlays,
    options: &ConversionOptions,
) -> Result<Value> {
    let interpretation = convert_interpretation(source, options.fill_mode)?;
    assemble(INTERPRETATION_REPORT_KEY, "interpretation", interpretation, overlays)
}

/// `{...ctxinfo, cohort_report: {...context, cohort: [..]}}`
pub fn convert_cohort_report(
    source: &Cohort,
    overlays: &Overlays,
    options: &ConversionOptions,
) -> Result<Value> {
    let cohort = convert_cohort(source, options.fill_mode)?;
    assemble(COHORT_REPORT_KEY, "cohort", cohort, overlays)
}

/// Convert a classified document into its composition.
pub fn convert_document(
    document: &SourceDocument,
    overlays: &Overlays,
    options: &ConversionOptions,
) -> Result<Value> {
    debug!(
        variant = %document.variant(),
        id = document.id(),
        fill = options.fill_mode.is_fill(),
        "converting document"
    );
    match document {
        SourceDocument::Interpretation(interpretation) => {
            convert_interpretation_report(interpretation, overlays, options)
        }
        SourceDocument::Cohort(cohort) => convert_cohort_report(cohort, overlays, options),
    }
}

fn assemble(
    report_key: &str,
    entry_key: &str,
    entry: Fragment,
    overlays: &Overlays,
) -> Result<Value> {
    let mut report = Fragment::from_overlay(overlays.context.clone());
    report.list(entry_key, [entry])?;
    let mut composition = Fragment::from_overlay(overlays.ctxinfo.clone());
    composition.insert(report_key, report.into_value());
    Ok(composition.into_value())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn overlays_must_be_objects() {
        let error = Overlays::from_values(json!({}), json!([1, 2])).unwrap_err();
        assert!(matches!(
            error,
            ConvertError::InvalidOverlay {
                name: "context",
                found: "array"
            }
        ));
        assert!(Overlays::from_values(json!("x"), json!({})).is_err());
    }

    #[test]
    fn converter_keys_win_over_overlay_keys() {
        let overlays = Overlays::from_values(
            json!({ "language": "en", "cohort_report": "stale" }),
            json!({ "category": "event", "cohort": "stale" }),
        )
        .unwrap();
        let cohort: Cohort = serde_json::from_value(json!({
            "id": "C1",
            "members": [],
            "metaData": {}
        }))
        .unwrap();
        let composition =
            convert_cohort_report(&cohort, &overlays, &ConversionOptions::new()).unwrap();
        assert_eq!(composition["language"], "en");
        assert_eq!(composition["cohort_report"]["category"], "event");
        assert!(composition["cohort_report"]["cohort"].is_array());
    }
}
