//! Batch run report.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use compo_model::DocumentVariant;
use serde::Serialize;

use crate::error::{ReportError, Result};

const REPORT_SCHEMA: &str = "compo.batch-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

/// Verification result recorded for one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VerificationOutcome {
    NotRequested,
    MissingTarget,
    /// The `.target` file exists but could not be read or parsed.
    InvalidTarget,
    Compared {
        added: usize,
        removed: usize,
        changed: usize,
    },
}

impl VerificationOutcome {
    /// Short cell text for summaries.
    pub fn describe(&self) -> String {
        match self {
            VerificationOutcome::NotRequested => "-".to_string(),
            VerificationOutcome::MissingTarget => "no target".to_string(),
            VerificationOutcome::InvalidTarget => "bad target".to_string(),
            VerificationOutcome::Compared {
                added,
                removed,
                changed,
            } => format!("+{added} -{removed} ~{changed}"),
        }
    }
}

/// What happened to one input file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileOutcome {
    pub input: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<DocumentVariant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    pub verification: VerificationOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileOutcome {
    pub fn converted(
        input: PathBuf,
        variant: DocumentVariant,
        output: PathBuf,
        verification: VerificationOutcome,
    ) -> Self {
        Self {
            input,
            variant: Some(variant),
            output: Some(output),
            verification,
            error: None,
        }
    }

    pub fn failed(input: PathBuf, variant: Option<DocumentVariant>, error: String) -> Self {
        Self {
            input,
            variant,
            output: None,
            verification: VerificationOutcome::NotRequested,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Serialize)]
struct BatchReportPayload<'a> {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    converted: usize,
    failed: usize,
    files: &'a [FileOutcome],
}

/// Write the JSON batch report.
pub fn write_batch_report(path: &Path, outcomes: &[FileOutcome]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| ReportError::io(parent, source))?;
    }
    let converted = outcomes.iter().filter(|outcome| outcome.is_success()).count();
    let payload = BatchReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        converted,
        failed: outcomes.len() - converted,
        files: outcomes,
    };
    let json = serde_json::to_string_pretty(&payload)?;
    fs::write(path, format!("{json}\n")).map_err(|source| ReportError::io(path, source))?;
    Ok(())
}
