//! Variant converter.
//!
//! A list of allele records folds into a single variant fragment. Each allele
//! kind owns one slot (`hgvsallele`, `vcfallele`, `spdiallele`,
//! `iscnallele`), so a later record of the same kind replaces an earlier one.
//! Zygosity is first-wins. Callers in practice pass one record per call.

use compo_model::FillMode;
use compo_model::phenopacket::{HgvsAllele, IscnAllele, SpdiAllele, Variant, VcfAllele};

use super::common::{coded, identifier};
use crate::error::Result;
use crate::fragment::Fragment;

/// Fold allele records into one variant fragment.
pub fn fold_variants(records: &[Variant], fill: FillMode) -> Result<Fragment> {
    let mut variant = Fragment::new();
    for record in records {
        if let Some(zygosity) = &record.zygosity
            && !variant.contains_key("zygosity")
        {
            variant.single("zygosity", coded(zygosity)?)?;
        }
        if let Some(allele) = &record.hgvs_allele {
            variant.single("hgvsallele", hgvs(allele, fill)?)?;
        }
        if let Some(allele) = &record.vcf_allele {
            variant.single("vcfallele", vcf(allele, fill)?)?;
        }
        if let Some(allele) = &record.spdi_allele {
            variant.single("spdiallele", spdi(allele, fill)?)?;
        }
        if let Some(allele) = &record.iscn_allele {
            variant.single("iscnallele", iscn(allele, fill)?)?;
        }
    }
    Ok(variant)
}

fn allele_id(fragment: &mut Fragment, id: Option<&String>, fill: FillMode) -> Result<()> {
    fragment.single_opt("id", id.map(|id| identifier(id, fill)))
}

fn hgvs(allele: &HgvsAllele, fill: FillMode) -> Result<Fragment> {
    let mut fragment = Fragment::new();
    allele_id(&mut fragment, allele.id.as_ref(), fill)?;
    fragment.single("hgvs", &allele.hgvs)?;
    Ok(fragment)
}

fn vcf(allele: &VcfAllele, fill: FillMode) -> Result<Fragment> {
    let mut fragment = Fragment::new();
    allele_id(&mut fragment, allele.id.as_ref(), fill)?;
    fragment.single("genome_assembly", &allele.genome_assembly)?;
    fragment.single("chr", &allele.chr)?;
    fragment.single("pos", allele.pos)?;
    fragment.single("re", &allele.reference)?;
    fragment.single("alt", &allele.alt)?;
    fragment.single("info", &allele.info)?;
    Ok(fragment)
}

fn spdi(allele: &SpdiAllele, fill: FillMode) -> Result<Fragment> {
    let mut fragment = Fragment::new();
    allele_id(&mut fragment, allele.id.as_ref(), fill)?;
    fragment.single("seq_id", identifier(&allele.seq_id, fill))?;
    fragment.single("position", allele.position)?;
    fragment.single("deleted_sequence", &allele.deleted_sequence)?;
    fragment.single("inserted_sequence", &allele.inserted_sequence)?;
    Ok(fragment)
}

fn iscn(allele: &IscnAllele, fill: FillMode) -> Result<Fragment> {
    let mut fragment = Fragment::new();
    allele_id(&mut fragment, allele.id.as_ref(), fill)?;
    fragment.single("iscn", &allele.iscn)?;
    Ok(fragment)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn records(value: serde_json::Value) -> Vec<Variant> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn first_zygosity_is_kept() {
        let source = records(json!([
            {
                "hgvsAllele": { "hgvs": "NM_000059.3:c.5946delT" },
                "zygosity": { "id": "GENO:1", "label": "het" }
            },
            {
                "iscnAllele": { "iscn": "t(8;9;11)(q12;p24;p12)" },
                "zygosity": { "id": "GENO:0000136", "label": "homozygous" }
            }
        ]));
        let folded = fold_variants(&source, FillMode::Skip).unwrap();
        assert_eq!(
            folded.get("zygosity"),
            Some(&json!([{ "|code": "1", "|terminology": "GENO", "|value": "het" }]))
        );
        assert!(folded.contains_key("hgvsallele"));
        assert!(folded.contains_key("iscnallele"));
    }

    #[test]
    fn same_kind_allele_is_replaced() {
        let source = records(json!([
            { "hgvsAllele": { "hgvs": "first" } },
            { "hgvsAllele": { "hgvs": "second" } }
        ]));
        let folded = fold_variants(&source, FillMode::Skip).unwrap();
        assert_eq!(folded.get("hgvsallele"), Some(&json!([{ "hgvs": ["second"] }])));
    }

    #[test]
    fn vcf_allele_maps_fields() {
        let source = records(json!([{
            "vcfAllele": {
                "vcfVersion": "VCFv4.2",
                "id": "rs6025",
                "genomeAssembly": "GRCh38",
                "chr": "1",
                "pos": 169519049,
                "ref": "T",
                "alt": "C",
                "info": "END=169519049"
            }
        }]));
        let folded = fold_variants(&source, FillMode::Fill).unwrap().into_value();
        assert_eq!(
            folded,
            json!({
                "vcfallele": [{
                    "id": [{
                        "|id": "rs6025",
                        "|issuer": "Issuer",
                        "|assigner": "Assigner",
                        "|type": "Prescription"
                    }],
                    "genome_assembly": ["GRCh38"],
                    "chr": ["1"],
                    "pos": [169519049],
                    "re": ["T"],
                    "alt": ["C"],
                    "info": ["END=169519049"]
                }]
            })
        );
    }

    #[test]
    fn spdi_allele_wraps_sequence_id() {
        let source = records(json!([{
            "spdiAllele": {
                "seqId": "NC_000010.10",
                "position": 123256214,
                "deletedSequence": "T",
                "insertedSequence": "G"
            }
        }]));
        let folded = fold_variants(&source, FillMode::Skip).unwrap();
        assert_eq!(
            folded.get("spdiallele"),
            Some(&json!([{
                "seq_id": [{ "|id": "NC_000010.10" }],
                "position": [123256214],
                "deleted_sequence": ["T"],
                "inserted_sequence": ["G"]
            }]))
        );
    }

    #[test]
    fn empty_list_folds_to_empty_fragment() {
        assert!(fold_variants(&[], FillMode::Fill).unwrap().is_empty());
    }
}
