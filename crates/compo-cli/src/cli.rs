//! CLI argument definitions for the composition converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "compo",
    version,
    about = "Convert GA4GH phenopackets into openEHR compositions",
    long_about = "Convert GA4GH phenopacket v1 documents (Interpretation or Cohort) into\n\
                  openEHR composition JSON.\n\n\
                  Each <stem>.json input needs sibling <stem>.ctxinfo and <stem>.context\n\
                  overlay files; <stem>.target is used when --check is given."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Prefix pretty and compact log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert every phenopacket found under the input roots.
    Convert(ConvertArgs),

    /// Print the document variant of a single file.
    Classify(ClassifyArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Directories to search (recursively) or individual .json files.
    #[arg(value_name = "ROOTS")]
    pub roots: Vec<PathBuf>,

    /// File listing one input root per line (default: ./input when no ROOTS are given).
    #[arg(long = "pathfile", value_name = "FILE")]
    pub pathfile: Option<PathBuf>,

    /// Compare each composition against its sibling .target file.
    #[arg(long = "check")]
    pub check: bool,

    /// Directory for COMPOSITION_FROM* files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Omit template placeholders (issuer/assigner/type and ordinal codes).
    #[arg(long = "no-fill")]
    pub no_fill: bool,

    /// Keep converting after a file fails instead of stopping the batch.
    ///
    /// The exit status is still non-zero if any file failed.
    #[arg(long = "continue-on-error")]
    pub continue_on_error: bool,

    /// Write a JSON summary of the run to this path.
    #[arg(long = "report-file", value_name = "FILE")]
    pub report_file: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ClassifyArgs {
    /// Phenopacket JSON file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
