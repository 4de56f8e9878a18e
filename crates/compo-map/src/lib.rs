//! Field-remapping engine from phenopacket messages to composition JSON.
//!
//! - **entities**: one converter per phenopacket entity
//! - **aggregate**: phenopacket, family, interpretation and cohort bodies
//! - **engine**: overlay assembly and document dispatch
//! - **fragment**: the composition object builder
//!
//! Converters are pure: they take typed source messages and return JSON
//! fragments. All file I/O lives in the ingest and report crates.

pub mod aggregate;
pub mod engine;
pub mod entities;
pub mod error;
pub mod fragment;

pub use aggregate::{convert_cohort, convert_family, convert_interpretation, convert_phenopacket};
pub use engine::{
    COHORT_REPORT_KEY, INTERPRETATION_REPORT_KEY, Overlays, convert_cohort_report,
    convert_document, convert_interpretation_report,
};
pub use entities::{Convert, convert_metadata};
pub use error::{ConvertError, Result};
pub use fragment::Fragment;
