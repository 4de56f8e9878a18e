use std::path::PathBuf;

use compo_report::FileOutcome;

#[derive(Debug)]
pub struct BatchResult {
    pub output_dir: PathBuf,
    pub outcomes: Vec<FileOutcome>,
    /// Files discovered but not attempted after a fail-fast stop.
    pub skipped: usize,
    pub report_file: Option<PathBuf>,
    pub has_errors: bool,
}
