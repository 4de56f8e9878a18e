//! Disease converter.

use compo_model::FillMode;
use compo_model::phenopacket::Disease;

use super::Convert;
use super::common::{coded, coded_list, duration};
use crate::error::Result;
use crate::fragment::Fragment;

impl Convert for Disease {
    const ENTITY: &'static str = "disease";

    fn convert(&self, _fill: FillMode) -> Result<Fragment> {
        let mut disease = Fragment::new();
        disease.single("term", coded(&self.term)?)?;
        if let Some(age) = &self.age_of_onset {
            disease.single("onset", duration(age)?)?;
        }
        if let Some(stages) = &self.tumor_stage {
            disease.list("tumor_stage", coded_list(stages)?)?;
        }
        Ok(disease)
    }
}
