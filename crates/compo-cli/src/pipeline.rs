//! Batch conversion pipeline with explicit stages.
//!
//! 1. **Discover**: resolve input roots and collect `.json` files
//! 2. **Load**: check overlay files, classify, parse the typed schema
//! 3. **Convert**: remap the document into a composition
//! 4. **Write**: serialize `COMPOSITION_FROM<name>`
//! 5. **Verify**: optionally diff against the sibling `.target`
//!
//! Each file goes through stages 2-5 independently; [`run_batch`] drives
//! them over the discovered files.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{error, info, info_span, warn};

use compo_ingest::{
    AuxiliaryKind, DEFAULT_PATHFILE, auxiliary_path, discover_phenopackets, load_input,
    read_pathfile,
};
use compo_map::convert_document;
use compo_model::{ConversionOptions, DocumentVariant};
use compo_report::{FileOutcome, VerificationOutcome, output_path, write_composition};
use compo_validate::{VerificationReport, VerifyError, verify_against_target};

/// Options for one batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub conversion: ConversionOptions,
    pub output_dir: PathBuf,
    /// Diff each composition against its `.target` file.
    pub verify: bool,
    /// Stop the batch at the first failing file.
    pub fail_fast: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            conversion: ConversionOptions::default(),
            output_dir: PathBuf::from("."),
            verify: false,
            fail_fast: true,
        }
    }
}

// ============================================================================
// Stage 1: Discover
// ============================================================================

/// Resolve input roots and discover every phenopacket under them.
///
/// Roots come from the command line plus the path file; the default path
/// file is read only when neither is given.
pub fn discover(roots: &[PathBuf], pathfile: Option<&Path>) -> Result<Vec<PathBuf>> {
    let mut all_roots = roots.to_vec();
    let pathfile = match pathfile {
        Some(path) => Some(path.to_path_buf()),
        None if roots.is_empty() => Some(PathBuf::from(DEFAULT_PATHFILE)),
        None => None,
    };
    if let Some(pathfile) = pathfile {
        let listed = read_pathfile(&pathfile)
            .with_context(|| format!("read input roots from {}", pathfile.display()))?;
        info!(pathfile = %pathfile.display(), roots = listed.len(), "read path file");
        all_roots.extend(listed);
    }
    let files = discover_phenopackets(&all_roots).context("discover phenopackets")?;
    info!(roots = all_roots.len(), files = files.len(), "discovery complete");
    Ok(files)
}

// ============================================================================
// Stages 2-5: Load, Convert, Write, Verify
// ============================================================================

/// Result of converting one file.
#[derive(Debug, Clone)]
pub struct ConvertedFile {
    pub input: PathBuf,
    pub variant: DocumentVariant,
    pub output: PathBuf,
    pub verification: VerificationOutcome,
}

/// A conversion failure, with the variant when the document was classified.
#[derive(Debug)]
struct FileFailure {
    variant: Option<DocumentVariant>,
    error: anyhow::Error,
}

/// Run one file through load, convert, write and (optionally) verify.
pub fn convert_file(input: &Path, options: &BatchOptions) -> Result<ConvertedFile> {
    process_file(input, options).map_err(|failure| failure.error)
}

fn process_file(
    input: &Path,
    options: &BatchOptions,
) -> std::result::Result<ConvertedFile, FileFailure> {
    let span = info_span!("file", path = %input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let loaded = load_input(input).map_err(|err| FileFailure {
        variant: err.variant(),
        error: anyhow::Error::new(err).context("load input"),
    })?;
    let variant = loaded.variant();
    let failed = |error: anyhow::Error| FileFailure {
        variant: Some(variant),
        error,
    };

    let composition = convert_document(&loaded.document, &loaded.overlays, &options.conversion)
        .with_context(|| format!("convert {variant} document"))
        .map_err(failed)?;
    let output = output_path(&options.output_dir, input)
        .context("resolve output path")
        .map_err(failed)?;
    write_composition(&output, &composition)
        .context("write composition")
        .map_err(failed)?;
    info!(
        variant = %variant,
        output = %output.display(),
        duration_ms = start.elapsed().as_millis(),
        "converted"
    );

    let verification = if options.verify {
        verify_output(input, &composition)
    } else {
        VerificationOutcome::NotRequested
    };

    Ok(ConvertedFile {
        input: input.to_path_buf(),
        variant,
        output,
        verification,
    })
}

/// Diff a composition against the `.target` next to `input`.
///
/// Verification never fails the file: a missing or unusable target is
/// logged and recorded in the outcome.
pub fn verify_output(input: &Path, composition: &serde_json::Value) -> VerificationOutcome {
    let target = auxiliary_path(input, AuxiliaryKind::Target);
    match verify_against_target(composition, &target) {
        Ok(report) => {
            log_verification(&report);
            VerificationOutcome::Compared {
                added: report.added(),
                removed: report.removed(),
                changed: report.changed(),
            }
        }
        Err(VerifyError::MissingTargetFile { path }) => {
            error!(target = %path.display(), "target file missing; verification skipped");
            VerificationOutcome::MissingTarget
        }
        Err(other) => {
            let message = format!("{:#}", anyhow::Error::new(other));
            error!(
                target = %target.display(),
                error = %message,
                "target file unusable; verification skipped"
            );
            VerificationOutcome::InvalidTarget
        }
    }
}

fn log_verification(report: &VerificationReport) {
    info!(
        target = %report.target.display(),
        added = report.added(),
        removed = report.removed(),
        changed = report.changed(),
        "diff between obtained and target compositions"
    );
    match serde_json::to_string_pretty(&report.differences) {
        Ok(rendered) => info!("{rendered}"),
        Err(err) => error!(error = %err, "failed to render differences"),
    }
}

// ============================================================================
// Batch
// ============================================================================

/// Outcomes of a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchRun {
    pub outcomes: Vec<FileOutcome>,
    /// Files not attempted because fail-fast stopped the batch.
    pub skipped: usize,
}

impl BatchRun {
    pub fn has_errors(&self) -> bool {
        self.outcomes.iter().any(|outcome| !outcome.is_success())
    }
}

/// Convert `files` in order, stopping at the first failure when
/// `options.fail_fast` is set.
pub fn run_batch(files: &[PathBuf], options: &BatchOptions) -> BatchRun {
    let mut run = BatchRun::default();
    for (index, input) in files.iter().enumerate() {
        match process_file(input, options) {
            Ok(converted) => run.outcomes.push(FileOutcome::converted(
                converted.input,
                converted.variant,
                converted.output,
                converted.verification,
            )),
            Err(failure) => {
                let message = format!("{:#}", failure.error);
                error!(path = %input.display(), error = %message, "conversion failed");
                run.outcomes
                    .push(FileOutcome::failed(input.clone(), failure.variant, message));
                if options.fail_fast {
                    run.skipped = files.len() - index - 1;
                    if run.skipped > 0 {
                        warn!(skipped = run.skipped, "stopping batch after first failure");
                    }
                    break;
                }
            }
        }
    }
    run
}
