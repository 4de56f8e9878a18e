//! Phenotypic feature converter.

use compo_model::FillMode;
use compo_model::phenopacket::{Evidence, PhenotypicFeature};

use super::Convert;
use super::common::{coded, coded_list, external_reference};
use crate::error::Result;
use crate::fragment::Fragment;

impl Convert for PhenotypicFeature {
    const ENTITY: &'static str = "phenotypic feature";

    fn convert(&self, fill: FillMode) -> Result<Fragment> {
        let mut feature = Fragment::new();
        feature.single("type", coded(&self.feature_type)?)?;
        feature.single_opt("description", self.description.as_ref())?;
        feature.single("negated", self.negated.unwrap_or(false))?;
        if let Some(severity) = &self.severity {
            feature.single("severity", coded(severity)?)?;
        }
        if let Some(modifiers) = &self.modifiers {
            feature.list("modifier", coded_list(modifiers)?)?;
        }
        // Only the ontology-class form of onset has a template slot.
        if let Some(onset) = &self.class_of_onset {
            feature.single("onset", coded(onset)?)?;
        }
        if let Some(evidence) = &self.evidence {
            let entries = evidence
                .iter()
                .map(|entry| convert_evidence(entry, fill))
                .collect::<Result<Vec<_>>>()?;
            feature.list("evidence", entries)?;
        }
        Ok(feature)
    }
}

fn convert_evidence(evidence: &Evidence, fill: FillMode) -> Result<Fragment> {
    let mut fragment = Fragment::new();
    fragment.single("evidence_code", coded(&evidence.evidence_code)?)?;
    if let Some(reference) = &evidence.reference {
        fragment.single(
            "external_reference",
            external_reference(&reference.id, reference.description.as_ref(), fill)?,
        )?;
    }
    Ok(fragment)
}
