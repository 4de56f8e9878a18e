//! Gene converter.

use compo_model::phenopacket::Gene;
use compo_model::{CodedValue, FillMode};

use super::Convert;
use crate::error::Result;
use crate::fragment::Fragment;

impl Convert for Gene {
    const ENTITY: &'static str = "gene";

    fn convert(&self, _fill: FillMode) -> Result<Fragment> {
        let mut gene = Fragment::new();
        gene.single("gene_symbol", CodedValue::parse(&self.id, self.symbol.as_str())?)?;
        Ok(gene)
    }
}
