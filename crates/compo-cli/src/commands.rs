use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use compo_cli::pipeline::{BatchOptions, discover, run_batch};
use compo_ingest::read_json;
use compo_model::{ConversionOptions, DocumentVariant, FillMode, classify};
use compo_report::write_batch_report;

use crate::cli::{ClassifyArgs, ConvertArgs};
use crate::types::BatchResult;

pub fn run_convert(args: &ConvertArgs) -> Result<BatchResult> {
    let batch_span = info_span!("batch", output_dir = %args.output_dir.display());
    let _batch_guard = batch_span.enter();

    let fill_mode = if args.no_fill {
        FillMode::Skip
    } else {
        FillMode::Fill
    };
    let options = BatchOptions {
        conversion: ConversionOptions::new().with_fill_mode(fill_mode),
        output_dir: args.output_dir.clone(),
        verify: args.check,
        fail_fast: !args.continue_on_error,
    };

    // =========================================================================
    // Stage 1: Discover inputs
    // =========================================================================
    let files = discover(&args.roots, args.pathfile.as_deref())?;
    if files.is_empty() {
        warn!("no phenopacket files found");
    }

    // =========================================================================
    // Stages 2-5: Convert each file
    // =========================================================================
    let run = run_batch(&files, &options);

    if let Some(path) = &args.report_file {
        write_batch_report(path, &run.outcomes)
            .with_context(|| format!("write batch report {}", path.display()))?;
        info!(path = %path.display(), "wrote batch report");
    }
    let has_errors = run.has_errors();
    Ok(BatchResult {
        output_dir: args.output_dir.clone(),
        outcomes: run.outcomes,
        skipped: run.skipped,
        report_file: args.report_file.clone(),
        has_errors,
    })
}

/// Print the variant of one file. Returns it so callers can map
/// `Unrecognized` to a failing exit status.
pub fn run_classify(args: &ClassifyArgs) -> Result<DocumentVariant> {
    let document = read_json(&args.file).context("read document")?;
    let variant = classify(&document);
    println!("{}: {variant}", args.file.display());
    Ok(variant)
}
