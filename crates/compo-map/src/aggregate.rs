//! Aggregate converters.
//!
//! These compose entity fragments into the container messages: phenopacket,
//! family, interpretation and cohort.

use compo_model::ids::RESOLUTION_STATUS_CODE;
use compo_model::phenopacket::{Cohort, Family, Interpretation, Phenopacket};
use compo_model::{FillMode, OrdinalValue};
use tracing::debug;

use crate::entities::common::identifier;
use crate::entities::{
    Convert, convert_all, convert_diagnoses, convert_metadata, convert_pedigree, fold_variants,
};
use crate::error::Result;
use crate::fragment::Fragment;

/// Convert one phenopacket.
///
/// `metadata` is omitted when the source metadata converts to `{}`.
pub fn convert_phenopacket(source: &Phenopacket, fill: FillMode) -> Result<Fragment> {
    let mut phenopacket = Fragment::new();
    phenopacket.single("id", identifier(&source.id, fill))?;
    if let Some(subject) = &source.subject {
        phenopacket.single("subject", &subject.id)?;
    }
    if let Some(features) = &source.phenotypic_features {
        phenopacket.list("phenotypic_feature", convert_all(features, fill)?)?;
    }
    if let Some(biosamples) = &source.biosamples {
        phenopacket.list("biosample", convert_all(biosamples, fill)?)?;
    }
    if let Some(genes) = &source.genes {
        phenopacket.list("gene", convert_all(genes, fill)?)?;
    }
    if let Some(variants) = &source.variants {
        phenopacket.list("variant", [fold_variants(variants, fill)?])?;
    }

    // `diseases` replaces `disease` when both are given.
    if let Some(disease) = &source.disease {
        phenopacket.list("disease", [disease.convert(fill)?])?;
    }
    if let Some(diseases) = &source.diseases {
        if source.disease.is_some() {
            debug!(phenopacket = %source.id, "plural diseases overwrite singular disease");
        }
        phenopacket.list("disease", convert_all(diseases, fill)?)?;
    }

    if let Some(files) = &source.hts_files {
        phenopacket.list("htsfile", convert_all(files, fill)?)?;
    }
    if let Some(meta_data) = &source.meta_data {
        let metadata = convert_metadata(meta_data, fill)?;
        if metadata.is_empty() {
            debug!(phenopacket = %source.id, "dropping empty metadata");
        } else {
            phenopacket.list("metadata", [metadata])?;
        }
    }
    Ok(phenopacket)
}

/// Convert a family: proband, relatives, pedigree and shared files.
pub fn convert_family(source: &Family, fill: FillMode) -> Result<Fragment> {
    let mut family = Fragment::new();
    family.single("id", identifier(&source.id, fill))?;
    family.list("proband", [convert_phenopacket(&source.proband, fill)?])?;
    if let Some(relatives) = &source.relatives {
        family.list("relative", convert_phenopackets(relatives, fill)?)?;
    }
    family.list("pedigree", [convert_pedigree(&source.pedigree, fill)?])?;
    if let Some(files) = &source.hts_files {
        family.list("htsfile", convert_all(files, fill)?)?;
    }
    family.list("metadata", [convert_metadata(&source.meta_data, fill)?])?;
    Ok(family)
}

/// Convert the body of an interpretation report.
pub fn convert_interpretation(source: &Interpretation, fill: FillMode) -> Result<Fragment> {
    let mut interpretation = Fragment::new();
    interpretation.single("id", identifier(&source.id, fill))?;
    interpretation.single(
        "resolution_status",
        OrdinalValue::new(source.resolution_status.as_str(), RESOLUTION_STATUS_CODE, fill),
    )?;
    if let Some(phenopacket) = &source.phenopacket {
        interpretation.list("phenopacket", [convert_phenopacket(phenopacket, fill)?])?;
    } else if let Some(family) = &source.family {
        interpretation.list("family", [convert_family(family, fill)?])?;
    }
    interpretation.list("diagnosis", convert_diagnoses(&source.diagnosis, fill)?)?;
    interpretation.list("metadata", [convert_metadata(&source.meta_data, fill)?])?;
    Ok(interpretation)
}

/// Convert the body of a cohort report; members land under `phenopacket`.
pub fn convert_cohort(source: &Cohort, fill: FillMode) -> Result<Fragment> {
    let mut cohort = Fragment::new();
    cohort.single("id", identifier(&source.id, fill))?;
    cohort.single_opt("description", source.description.as_ref())?;
    cohort.list("phenopacket", convert_phenopackets(&source.members, fill)?)?;
    if let Some(files) = &source.hts_files {
        cohort.list("htsfile", convert_all(files, fill)?)?;
    }
    cohort.list("metadata", [convert_metadata(&source.meta_data, fill)?])?;
    Ok(cohort)
}

fn convert_phenopackets(sources: &[Phenopacket], fill: FillMode) -> Result<Vec<Fragment>> {
    sources
        .iter()
        .map(|source| convert_phenopacket(source, fill))
        .collect()
}
