//! Diagnosis converter.

use compo_model::FillMode;
use compo_model::phenopacket::Diagnosis;

use super::Convert;
use super::genomic_interpretation::merge_genomic_interpretations;
use crate::error::Result;
use crate::fragment::Fragment;

impl Convert for Diagnosis {
    const ENTITY: &'static str = "diagnosis";

    fn convert(&self, fill: FillMode) -> Result<Fragment> {
        let mut diagnosis = Fragment::new();
        diagnosis.list("disease", [self.disease.convert(fill)?])?;
        diagnosis.list(
            "genomic_interpretation",
            [merge_genomic_interpretations(&self.genomic_interpretations, fill)?],
        )?;
        Ok(diagnosis)
    }
}

/// Convert the diagnosis list of an interpretation.
pub fn convert_diagnoses(diagnoses: &[Diagnosis], fill: FillMode) -> Result<Vec<Fragment>> {
    super::convert_all(diagnoses, fill)
}
