//! Pedigree converter.

use compo_model::ids::SEX_CODE;
use compo_model::phenopacket::{Pedigree, Person};
use compo_model::{CodeOnly, FillMode, OrdinalValue};

use super::common::identifier;
use crate::error::Result;
use crate::fragment::Fragment;

/// Convert a pedigree into `{person: [...]}`.
pub fn convert_pedigree(pedigree: &Pedigree, fill: FillMode) -> Result<Fragment> {
    let mut fragment = Fragment::new();
    fragment.list(
        "person",
        pedigree
            .persons
            .iter()
            .map(|person| convert_person(person, fill))
            .collect::<Result<Vec<_>>>()?,
    )?;
    Ok(fragment)
}

fn convert_person(person: &Person, fill: FillMode) -> Result<Fragment> {
    let mut fragment = Fragment::new();
    fragment.single("family_id", identifier(&person.family_id, fill))?;
    fragment.single("individual_id", identifier(&person.individual_id, fill))?;
    // Founders carry no parent ids.
    fragment.single_opt(
        "paternal_id",
        person.paternal_id.as_deref().map(|id| identifier(id, fill)),
    )?;
    fragment.single_opt(
        "maternal_id",
        person.maternal_id.as_deref().map(|id| identifier(id, fill)),
    )?;
    fragment.single("sex", OrdinalValue::new(person.sex.as_str(), SEX_CODE, fill))?;
    fragment.single("affected_status", CodeOnly::new(person.affected_status.as_str()))?;
    Ok(fragment)
}
