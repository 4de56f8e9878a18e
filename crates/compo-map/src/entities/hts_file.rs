//! HTS file converter.

use compo_model::phenopacket::HtsFile;
use compo_model::{CodeOnly, FillMode};
use tracing::debug;

use super::Convert;
use super::common::identifier;
use crate::error::Result;
use crate::fragment::Fragment;

impl Convert for HtsFile {
    const ENTITY: &'static str = "htsfile";

    fn convert(&self, fill: FillMode) -> Result<Fragment> {
        let mut file = Fragment::new();
        file.single("uri", &self.uri)?;
        file.single("htsFormat", CodeOnly::new(self.hts_format.as_str()))?;
        file.single("genome_assembly", &self.genome_assembly)?;
        file.single_opt("description", self.description.as_ref())?;

        // The template holds a single individual/sample pair.
        if let Some(samples) = &self.individual_to_sample_identifiers
            && let Some((individual, sample)) = samples.first()
        {
            if samples.len() > 1 {
                debug!(
                    uri = %self.uri,
                    dropped = samples.len() - 1,
                    "keeping first individual-to-sample pair"
                );
            }
            file.single("individual_identifier", identifier(individual, fill))?;
            file.single("sample_identifier", identifier(sample, fill))?;
        }
        Ok(file)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn only_first_sample_pair_is_kept() {
        let file: HtsFile = serde_json::from_str(
            r#"{
                "uri": "file://data/genomes/P000001C",
                "description": "Matched normal germline sample",
                "htsFormat": "VCF",
                "genomeAssembly": "GRCh38",
                "individualToSampleIdentifiers": {
                    "patient1": "NA12345",
                    "another": "NA00001"
                }
            }"#,
        )
        .unwrap();
        assert_eq!(
            file.convert(FillMode::Skip).unwrap().into_value(),
            json!({
                "uri": ["file://data/genomes/P000001C"],
                "htsFormat": [{ "|code": "VCF" }],
                "genome_assembly": ["GRCh38"],
                "description": ["Matched normal germline sample"],
                "individual_identifier": [{ "|id": "patient1" }],
                "sample_identifier": [{ "|id": "NA12345" }]
            })
        );
    }

    #[test]
    fn empty_sample_map_is_skipped() {
        let file: HtsFile = serde_json::from_value(json!({
            "uri": "file://x.bam",
            "htsFormat": "BAM",
            "genomeAssembly": "GRCh37",
            "individualToSampleIdentifiers": {}
        }))
        .unwrap();
        let converted = file.convert(FillMode::Fill).unwrap();
        assert!(!converted.contains_key("individual_identifier"));
        assert!(!converted.contains_key("sample_identifier"));
    }
}
