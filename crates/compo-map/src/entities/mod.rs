//! Per-entity converters.
//!
//! Each phenopacket entity has a converter producing its composition
//! fragment. A target attribute is written only when its source field is
//! present; the two exceptions are `negated` and `is_control_sample`, which
//! default to `false`.
//!
//! Entities that convert one-to-one implement [`Convert`]; the two folding
//! converters ([`fold_variants`] and [`merge_genomic_interpretations`]) take
//! the whole list because they collapse it into a single fragment.

mod biosample;
pub(crate) mod common;
mod diagnosis;
mod disease;
mod gene;
mod genomic_interpretation;
mod hts_file;
mod metadata;
mod pedigree;
mod phenotypic_feature;
mod variant;

use compo_model::FillMode;
use tracing::trace;

use crate::error::Result;
use crate::fragment::Fragment;

pub use diagnosis::convert_diagnoses;
pub use genomic_interpretation::merge_genomic_interpretations;
pub use metadata::convert_metadata;
pub use pedigree::convert_pedigree;
pub use variant::fold_variants;

/// Conversion of one source entity into one composition fragment.
pub trait Convert {
    /// Entity name used in errors and trace events.
    const ENTITY: &'static str;

    fn convert(&self, fill: FillMode) -> Result<Fragment>;
}

/// Convert every entity of a list, keeping order.
pub fn convert_all<T: Convert>(items: &[T], fill: FillMode) -> Result<Vec<Fragment>> {
    trace!(entity = T::ENTITY, count = items.len(), "converting entities");
    items.iter().map(|item| item.convert(fill)).collect()
}
