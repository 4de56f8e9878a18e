//! Genomic interpretation converter.
//!
//! All calls of a diagnosis are packed into one fragment:
//! - `genomicinterpretation_status` comes from the first call only
//! - gene fragments are shallow-merged into one running gene (last wins)
//! - variant fragments are shallow-merged into one running variant (last wins)

use compo_model::ids::GENOMIC_INTERPRETATION_STATUS_CODE;
use compo_model::phenopacket::GenomicInterpretation;
use compo_model::{FillMode, OrdinalValue};

use super::Convert;
use super::variant::fold_variants;
use crate::error::Result;
use crate::fragment::Fragment;

pub fn merge_genomic_interpretations(
    calls: &[GenomicInterpretation],
    fill: FillMode,
) -> Result<Fragment> {
    let mut merged = Fragment::new();
    let mut gene: Option<Fragment> = None;
    let mut variant: Option<Fragment> = None;

    if let Some(first) = calls.first() {
        merged.single(
            "genomicinterpretation_status",
            OrdinalValue::new(first.status.as_str(), GENOMIC_INTERPRETATION_STATUS_CODE, fill),
        )?;
    }
    for call in calls {
        if let Some(source) = &call.gene {
            gene.get_or_insert_with(Fragment::new)
                .merge(source.convert(fill)?);
        }
        if let Some(source) = &call.variant {
            variant
                .get_or_insert_with(Fragment::new)
                .merge(fold_variants(std::slice::from_ref(source), fill)?);
        }
    }

    if let Some(gene) = gene {
        merged.list("gene", [gene])?;
    }
    if let Some(variant) = variant {
        merged.list("variant", [variant])?;
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn calls(value: serde_json::Value) -> Vec<GenomicInterpretation> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn status_comes_from_first_call() {
        let source = calls(json!([
            { "status": "CAUSATIVE", "gene": { "id": "HGNC:347", "symbol": "ETF1" } },
            { "status": "REJECTED", "gene": { "id": "HGNC:348", "symbol": "ETF2" } }
        ]));
        let merged = merge_genomic_interpretations(&source, FillMode::Fill).unwrap();
        assert_eq!(
            merged.get("genomicinterpretation_status"),
            Some(&json!([{ "|code": "at0005", "|ordinal": 0, "|value": "CAUSATIVE" }]))
        );
        // Both genes share the gene_symbol key, so the last one wins.
        assert_eq!(
            merged.get("gene"),
            Some(&json!([{
                "gene_symbol": [{ "|code": "348", "|terminology": "HGNC", "|value": "ETF2" }]
            }]))
        );
    }

    #[test]
    fn variants_merge_across_calls() {
        let source = calls(json!([
            { "status": "CANDIDATE", "variant": { "hgvsAllele": { "hgvs": "NM_1:c.1A>G" } } },
            {
                "status": "CANDIDATE",
                "variant": {
                    "spdiAllele": {
                        "seqId": "NC_000010.10",
                        "position": 1,
                        "deletedSequence": "A",
                        "insertedSequence": "G"
                    }
                }
            }
        ]));
        let merged = merge_genomic_interpretations(&source, FillMode::Skip).unwrap();
        let variant = &merged.get("variant").unwrap()[0];
        assert!(variant.get("hgvsallele").is_some());
        assert!(variant.get("spdiallele").is_some());
        assert!(!merged.contains_key("gene"));
    }

    #[test]
    fn default_status_is_unknown() {
        let source = calls(json!([{ "gene": { "id": "HGNC:347", "symbol": "ETF1" } }]));
        let merged = merge_genomic_interpretations(&source, FillMode::Skip).unwrap();
        assert_eq!(
            merged.get("genomicinterpretation_status"),
            Some(&json!([{ "|value": "UNKNOWN" }]))
        );
    }

    #[test]
    fn no_calls_yield_empty_fragment() {
        assert!(
            merge_genomic_interpretations(&[], FillMode::Fill)
                .unwrap()
                .is_empty()
        );
    }
}
