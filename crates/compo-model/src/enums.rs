//! Phenopacket v1 enumerations.
//!
//! Protobuf JSON writes enums by value name (`IN_PROGRESS`, `MALE`). The
//! composition carries those names through unchanged, so each enum exposes
//! its wire name via `as_str`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Interpretation resolution status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResolutionStatus {
    #[default]
    Unknown,
    Solved,
    Unsolved,
    InProgress,
}

impl ResolutionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionStatus::Unknown => "UNKNOWN",
            ResolutionStatus::Solved => "SOLVED",
            ResolutionStatus::Unsolved => "UNSOLVED",
            ResolutionStatus::InProgress => "IN_PROGRESS",
        }
    }
}

/// Status of a single genomic interpretation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GenomicInterpretationStatus {
    #[default]
    Unknown,
    Rejected,
    Candidate,
    Causative,
}

impl GenomicInterpretationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenomicInterpretationStatus::Unknown => "UNKNOWN",
            GenomicInterpretationStatus::Rejected => "REJECTED",
            GenomicInterpretationStatus::Candidate => "CANDIDATE",
            GenomicInterpretationStatus::Causative => "CAUSATIVE",
        }
    }
}

/// Phenotypic sex of an individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sex {
    #[default]
    UnknownSex,
    Female,
    Male,
    OtherSex,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::UnknownSex => "UNKNOWN_SEX",
            Sex::Female => "FEMALE",
            Sex::Male => "MALE",
            Sex::OtherSex => "OTHER_SEX",
        }
    }
}

/// Chromosomal sex of an individual. Accepted on input, not converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KaryotypicSex {
    #[default]
    UnknownKaryotype,
    Xx,
    Xy,
    Xo,
    Xxy,
    Xxx,
    Xxyy,
    Xxxy,
    Xxxx,
    Xyy,
    OtherKaryotype,
}

/// Pedigree affected status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AffectedStatus {
    #[default]
    Missing,
    Unaffected,
    Affected,
}

impl AffectedStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AffectedStatus::Missing => "MISSING",
            AffectedStatus::Unaffected => "UNAFFECTED",
            AffectedStatus::Affected => "AFFECTED",
        }
    }
}

/// High-throughput sequencing file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HtsFormat {
    #[default]
    Unknown,
    Sam,
    Bam,
    Cram,
    Vcf,
    Bcf,
    Gvcf,
    Fastq,
}

impl HtsFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            HtsFormat::Unknown => "UNKNOWN",
            HtsFormat::Sam => "SAM",
            HtsFormat::Bam => "BAM",
            HtsFormat::Cram => "CRAM",
            HtsFormat::Vcf => "VCF",
            HtsFormat::Bcf => "BCF",
            HtsFormat::Gvcf => "GVCF",
            HtsFormat::Fastq => "FASTQ",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(
    ResolutionStatus,
    GenomicInterpretationStatus,
    Sex,
    AffectedStatus,
    HtsFormat,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_matches_serde_wire_name() {
        let statuses = [
            ResolutionStatus::Unknown,
            ResolutionStatus::Solved,
            ResolutionStatus::Unsolved,
            ResolutionStatus::InProgress,
        ];
        for status in statuses {
            let wire = serde_json::to_value(status).unwrap();
            assert_eq!(wire.as_str(), Some(status.as_str()));
        }
        for format in [HtsFormat::Gvcf, HtsFormat::Fastq, HtsFormat::Cram] {
            let wire = serde_json::to_value(format).unwrap();
            assert_eq!(wire.as_str(), Some(format.as_str()));
        }
        let wire = serde_json::to_value(Sex::OtherSex).unwrap();
        assert_eq!(wire.as_str(), Some("OTHER_SEX"));
    }

    #[test]
    fn karyotype_names_parse() {
        let sex: KaryotypicSex = serde_json::from_str("\"XXYY\"").unwrap();
        assert_eq!(sex, KaryotypicSex::Xxyy);
    }
}
