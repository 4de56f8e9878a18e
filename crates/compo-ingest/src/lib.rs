//! Phenopacket discovery and loading.
//!
//! Walks input roots for `.json` documents, checks that each has its
//! sibling overlay files, and parses it into the typed schema.

pub mod discovery;
pub mod error;
pub mod source;

pub use discovery::{DEFAULT_PATHFILE, discover_phenopackets, read_pathfile};
pub use error::{IngestError, Result};
pub use source::{AuxiliaryKind, LoadedInput, auxiliary_path, load_input, parse_document, read_json};
