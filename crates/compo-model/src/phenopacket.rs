//! Phenopacket v1 source schema (protobuf JSON mapping).
//!
//! Deserializing into these types is the schema boundary: unknown fields and
//! mistyped values are rejected. Optional fields are `Option` so converters
//! can tell an absent field from a present default.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::enums::{
    AffectedStatus, GenomicInterpretationStatus, HtsFormat, KaryotypicSex, ResolutionStatus, Sex,
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OntologyClass {
    pub id: String,
    pub label: String,
}

/// ISO 8601 duration such as `P3Y2M`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Age {
    pub age: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AgeRange {
    pub start: Option<Age>,
    pub end: Option<Age>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExternalReference {
    pub id: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Evidence {
    pub evidence_code: OntologyClass,
    pub reference: Option<ExternalReference>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PhenotypicFeature {
    #[serde(rename = "type")]
    pub feature_type: OntologyClass,
    pub description: Option<String>,
    pub negated: Option<bool>,
    pub severity: Option<OntologyClass>,
    pub modifiers: Option<Vec<OntologyClass>>,
    pub age_of_onset: Option<Age>,
    pub age_range_of_onset: Option<AgeRange>,
    pub class_of_onset: Option<OntologyClass>,
    pub evidence: Option<Vec<Evidence>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Individual {
    pub id: String,
    pub alternate_ids: Option<Vec<String>>,
    pub date_of_birth: Option<String>,
    pub age_at_collection: Option<Age>,
    pub age_range_at_collection: Option<AgeRange>,
    pub sex: Option<Sex>,
    pub karyotypic_sex: Option<KaryotypicSex>,
    pub taxonomy: Option<OntologyClass>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Procedure {
    pub code: OntologyClass,
    pub body_site: Option<OntologyClass>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Biosample {
    pub id: String,
    pub individual_id: Option<String>,
    pub description: Option<String>,
    pub sampled_tissue: OntologyClass,
    pub phenotypic_features: Option<Vec<PhenotypicFeature>>,
    pub taxonomy: Option<OntologyClass>,
    pub age_of_individual_at_collection: Option<Age>,
    pub age_range_of_individual_at_collection: Option<AgeRange>,
    pub histological_diagnosis: Option<OntologyClass>,
    pub tumor_progression: Option<OntologyClass>,
    pub tumor_grade: Option<OntologyClass>,
    pub diagnostic_markers: Option<Vec<OntologyClass>>,
    pub procedure: Option<Procedure>,
    pub hts_files: Option<Vec<HtsFile>>,
    pub variants: Option<Vec<Variant>>,
    pub is_control_sample: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Gene {
    pub id: String,
    pub alternate_ids: Option<Vec<String>>,
    pub symbol: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HgvsAllele {
    pub id: Option<String>,
    pub hgvs: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VcfAllele {
    pub vcf_version: Option<String>,
    pub id: Option<String>,
    pub genome_assembly: String,
    pub chr: String,
    pub pos: i64,
    #[serde(rename = "ref")]
    pub reference: String,
    pub alt: String,
    pub info: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SpdiAllele {
    pub id: Option<String>,
    pub seq_id: String,
    pub position: i64,
    pub deleted_sequence: String,
    pub inserted_sequence: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IscnAllele {
    pub id: Option<String>,
    pub iscn: String,
}

/// One allele record. Exactly one allele kind is expected per record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Variant {
    pub hgvs_allele: Option<HgvsAllele>,
    pub vcf_allele: Option<VcfAllele>,
    pub spdi_allele: Option<SpdiAllele>,
    pub iscn_allele: Option<IscnAllele>,
    pub zygosity: Option<OntologyClass>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Disease {
    pub term: OntologyClass,
    pub age_of_onset: Option<Age>,
    pub age_range_of_onset: Option<AgeRange>,
    pub class_of_onset: Option<OntologyClass>,
    pub tumor_stage: Option<Vec<OntologyClass>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HtsFile {
    pub uri: String,
    pub description: Option<String>,
    #[serde(default)]
    pub hts_format: HtsFormat,
    pub genome_assembly: String,
    pub individual_to_sample_identifiers: Option<SampleIdentifiers>,
}

/// Individual-to-sample id map, kept in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleIdentifiers(pub Vec<(String, String)>);

impl SampleIdentifiers {
    pub fn first(&self) -> Option<(&str, &str)> {
        self.0
            .first()
            .map(|(individual, sample)| (individual.as_str(), sample.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for SampleIdentifiers {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PairsVisitor;

        impl<'de> Visitor<'de> for PairsVisitor {
            type Value = SampleIdentifiers;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of individual ids to sample ids")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    pairs.push((key, value));
                }
                Ok(SampleIdentifiers(pairs))
            }
        }

        deserializer.deserialize_map(PairsVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Resource {
    pub id: String,
    pub name: String,
    pub namespace_prefix: String,
    pub url: String,
    pub version: String,
    pub iri_prefix: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Update {
    pub timestamp: String,
    pub updated_by: Option<String>,
    pub comment: String,
}

/// Every field is optional: cohort members are sometimes published with an
/// empty `metaData` object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MetaData {
    pub created: Option<String>,
    pub created_by: Option<String>,
    pub submitted_by: Option<String>,
    pub resources: Option<Vec<Resource>>,
    pub updates: Option<Vec<Update>>,
    pub phenopacket_schema_version: Option<String>,
    pub external_references: Option<Vec<ExternalReference>>,
}

impl MetaData {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Phenopacket {
    pub id: String,
    pub subject: Option<Individual>,
    pub phenotypic_features: Option<Vec<PhenotypicFeature>>,
    pub biosamples: Option<Vec<Biosample>>,
    pub genes: Option<Vec<Gene>>,
    pub variants: Option<Vec<Variant>>,
    /// Non-standard singular form seen in some inputs.
    pub disease: Option<Disease>,
    pub diseases: Option<Vec<Disease>>,
    pub hts_files: Option<Vec<HtsFile>>,
    pub meta_data: Option<MetaData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Person {
    pub family_id: String,
    pub individual_id: String,
    pub paternal_id: Option<String>,
    pub maternal_id: Option<String>,
    #[serde(default)]
    pub sex: Sex,
    #[serde(default)]
    pub affected_status: AffectedStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Pedigree {
    #[serde(default)]
    pub persons: Vec<Person>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Family {
    pub id: String,
    pub proband: Phenopacket,
    pub relatives: Option<Vec<Phenopacket>>,
    pub pedigree: Pedigree,
    pub hts_files: Option<Vec<HtsFile>>,
    pub meta_data: MetaData,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Cohort {
    pub id: String,
    pub description: Option<String>,
    pub members: Vec<Phenopacket>,
    pub hts_files: Option<Vec<HtsFile>>,
    pub meta_data: MetaData,
}

/// A single call within a diagnosis: either a gene or a variant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GenomicInterpretation {
    #[serde(default)]
    pub status: GenomicInterpretationStatus,
    pub gene: Option<Gene>,
    pub variant: Option<Variant>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Diagnosis {
    pub disease: Disease,
    #[serde(default)]
    pub genomic_interpretations: Vec<GenomicInterpretation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Interpretation {
    pub id: String,
    pub resolution_status: ResolutionStatus,
    pub phenopacket: Option<Phenopacket>,
    pub family: Option<Family>,
    #[serde(default)]
    pub diagnosis: Vec<Diagnosis>,
    pub meta_data: MetaData,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn sample_identifiers_keep_document_order() {
        let raw = r#"{
            "uri": "file://data/genomes/P000001C",
            "htsFormat": "VCF",
            "genomeAssembly": "GRCh38",
            "individualToSampleIdentifiers": {
                "zeta": "S2",
                "alpha": "S1"
            }
        }"#;
        let file: HtsFile = serde_json::from_str(raw).unwrap();
        let ids = file.individual_to_sample_identifiers.unwrap();
        assert_eq!(ids.len(), 2);
        assert_eq!(ids.first(), Some(("zeta", "S2")));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<OntologyClass, _> =
            serde_json::from_value(json!({ "id": "HP:1", "label": "x", "extra": 1 }));
        assert!(result.is_err());
    }

    #[test]
    fn empty_metadata_parses_and_reports_empty() {
        let meta: MetaData = serde_json::from_value(json!({})).unwrap();
        assert!(meta.is_empty());
    }

    #[test]
    fn enum_defaults_apply_when_omitted() {
        let person: Person = serde_json::from_value(json!({
            "familyId": "FAM1",
            "individualId": "I1"
        }))
        .unwrap();
        assert_eq!(person.sex, Sex::UnknownSex);
        assert_eq!(person.affected_status, AffectedStatus::Missing);
        assert!(person.paternal_id.is_none());
    }
}
