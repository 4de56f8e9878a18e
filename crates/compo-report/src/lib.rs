//! Output writing for converted compositions and batch runs.

pub mod batch;
pub mod error;
pub mod output;

pub use batch::{FileOutcome, VerificationOutcome, write_batch_report};
pub use compo_model::OUTPUT_PREFIX;
pub use error::{ReportError, Result};
pub use output::{output_path, render_composition, write_composition};
