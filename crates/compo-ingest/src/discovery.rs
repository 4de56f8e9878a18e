//! Input discovery.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use compo_model::OUTPUT_PREFIX;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::{IngestError, Result};

/// Path file read when no input roots are given.
pub const DEFAULT_PATHFILE: &str = "input";

/// Read input roots from a path file, one per line.
///
/// Lines are trimmed; blank lines are skipped.
pub fn read_pathfile(path: &Path) -> Result<Vec<PathBuf>> {
    let contents = fs::read_to_string(path).map_err(|source| IngestError::PathFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect())
}

/// Find every `.json` file under the given roots.
///
/// A root may be a directory (walked recursively) or a single file. Files
/// named `COMPOSITION_FROM*` are earlier outputs and are skipped. The result
/// is deduplicated and sorted by path.
pub fn discover_phenopackets(roots: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut found = BTreeSet::new();
    for root in roots {
        if root.is_file() {
            if is_json(root) && !is_composition(root) {
                found.insert(root.clone());
            } else {
                debug!(path = %root.display(), "skipping root that is not a phenopacket");
            }
            continue;
        }
        if !root.is_dir() {
            return Err(IngestError::RootNotFound { path: root.clone() });
        }

        let before = found.len();
        for entry in WalkDir::new(root).follow_links(true) {
            let entry = entry.map_err(|source| IngestError::Walk {
                path: root.clone(),
                source,
            })?;
            if !entry.file_type().is_file() || !is_json(entry.path()) {
                continue;
            }
            if is_composition(entry.path()) {
                debug!(path = %entry.path().display(), "skipping earlier composition output");
                continue;
            }
            found.insert(entry.into_path());
        }
        info!(
            root = %root.display(),
            files = found.len() - before,
            "discovered phenopackets"
        );
    }
    Ok(found.into_iter().collect())
}

/// Case-sensitive `.json` check; `.JSON` files are not picked up.
fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

fn is_composition(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(OUTPUT_PREFIX))
}
