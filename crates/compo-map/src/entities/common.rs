//! Shared helpers for entity converters.

use compo_model::phenopacket::{Age, OntologyClass};
use compo_model::{CodedValue, FillMode, Identifier};

use crate::error::Result;
use crate::fragment::Fragment;

/// Coded value for an ontology term.
pub(crate) fn coded(term: &OntologyClass) -> Result<CodedValue> {
    Ok(CodedValue::parse(&term.id, term.label.as_str())?)
}

/// Coded values for a list of ontology terms.
pub(crate) fn coded_list(terms: &[OntologyClass]) -> Result<Vec<CodedValue>> {
    terms.iter().map(coded).collect()
}

pub(crate) fn identifier(id: &str, fill: FillMode) -> Identifier {
    Identifier::new(id, fill)
}

/// Age expressed through the template's duration wrapper.
pub(crate) fn duration(age: &Age) -> Result<Fragment> {
    let mut fragment = Fragment::new();
    fragment.single("duration_value", &age.age)?;
    Ok(fragment)
}

/// External reference: identifier plus optional description.
pub(crate) fn external_reference(
    id: &str,
    description: Option<&String>,
    fill: FillMode,
) -> Result<Fragment> {
    let mut fragment = Fragment::new();
    fragment.single("id", identifier(id, fill))?;
    fragment.single_opt("description", description)?;
    Ok(fragment)
}
