//! Biosample converter.

use compo_model::FillMode;
use compo_model::phenopacket::{Biosample, Procedure};

use super::common::{coded, coded_list, duration, identifier};
use super::variant::fold_variants;
use super::{Convert, convert_all};
use crate::error::Result;
use crate::fragment::Fragment;

impl Convert for Biosample {
    const ENTITY: &'static str = "biosample";

    fn convert(&self, fill: FillMode) -> Result<Fragment> {
        let mut sample = Fragment::new();
        sample.single("id", identifier(&self.id, fill))?;
        if let Some(individual_id) = &self.individual_id {
            sample.single("individual_id", identifier(individual_id, fill))?;
        }
        sample.single_opt("description", self.description.as_ref())?;
        sample.single("sampled_tissue", coded(&self.sampled_tissue)?)?;
        if let Some(features) = &self.phenotypic_features {
            sample.list("phenotypic_feature", convert_all(features, fill)?)?;
        }
        if let Some(taxonomy) = &self.taxonomy {
            sample.single("taxonomy", coded(taxonomy)?)?;
        }
        if let Some(age) = &self.age_of_individual_at_collection {
            sample.single("individual_age_at_collection", duration(age)?)?;
        }

        // Tumour descriptors
        if let Some(diagnosis) = &self.histological_diagnosis {
            sample.single("histological_diagnosis", coded(diagnosis)?)?;
        }
        if let Some(progression) = &self.tumor_progression {
            sample.single("tumor_progression", coded(progression)?)?;
        }
        if let Some(grade) = &self.tumor_grade {
            sample.single("tumor_grade", coded(grade)?)?;
        }
        if let Some(markers) = &self.diagnostic_markers {
            sample.list("diagnostic_markers", coded_list(markers)?)?;
        }

        if let Some(procedure) = &self.procedure {
            sample.single("procedure", convert_procedure(procedure)?)?;
        }
        if let Some(files) = &self.hts_files {
            sample.list("htsfile", convert_all(files, fill)?)?;
        }
        if let Some(variants) = &self.variants {
            sample.list("variant", [fold_variants(variants, fill)?])?;
        }
        sample.single("is_control_sample", self.is_control_sample.unwrap_or(false))?;
        Ok(sample)
    }
}

fn convert_procedure(procedure: &Procedure) -> Result<Fragment> {
    let mut fragment = Fragment::new();
    fragment.single("code", coded(&procedure.code)?)?;
    if let Some(body_site) = &procedure.body_site {
        fragment.single("body_site", coded(body_site)?)?;
    }
    Ok(fragment)
}
