//! Data model for phenopacket-to-composition conversion.
//!
//! - **phenopacket**: typed phenopacket v1 source schema
//! - **enums**: phenopacket enumerations and their wire names
//! - **ids**: composition identifiers and coded values
//! - **document**: top-level variant classification
//! - **options**: conversion options

pub mod document;
pub mod enums;
pub mod error;
pub mod ids;
pub mod options;
pub mod phenopacket;

pub use document::{DocumentVariant, OUTPUT_PREFIX, SourceDocument, classify};
pub use enums::{
    AffectedStatus, GenomicInterpretationStatus, HtsFormat, KaryotypicSex, ResolutionStatus, Sex,
};
pub use error::{ModelError, Result};
pub use ids::{CodeOnly, CodedValue, Identifier, OrdinalValue, make_coded_value, make_identifier};
pub use options::{ConversionOptions, FillMode};
