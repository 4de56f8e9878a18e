//! Composition output files.

use std::fs;
use std::path::{Path, PathBuf};

use compo_model::OUTPUT_PREFIX;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::error::{ReportError, Result};

const INDENT: &[u8] = b"    ";

/// `<output_dir>/COMPOSITION_FROM<input file name>`.
pub fn output_path(output_dir: &Path, input: &Path) -> Result<PathBuf> {
    let Some(file_name) = input.file_name() else {
        return Err(ReportError::InvalidInputPath {
            path: input.to_path_buf(),
        });
    };
    let mut name = std::ffi::OsString::from(OUTPUT_PREFIX);
    name.push(file_name);
    Ok(output_dir.join(name))
}

/// Render a composition: keys sorted, four-space indent, no trailing newline.
pub fn render_composition(composition: &Value) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    SortedKeys(composition).serialize(&mut serializer)?;
    Ok(buffer)
}

/// Serializes objects with their keys in byte order, whatever order the
/// underlying `Map` iterates in.
struct SortedKeys<'a>(&'a Value);

impl Serialize for SortedKeys<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.0 {
            Value::Object(map) => {
                let mut entries: Vec<_> = map.iter().collect();
                entries.sort_by(|left, right| left.0.cmp(right.0));
                let mut state = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    state.serialize_entry(key, &SortedKeys(value))?;
                }
                state.end()
            }
            Value::Array(items) => serializer.collect_seq(items.iter().map(SortedKeys)),
            other => other.serialize(serializer),
        }
    }
}

/// Write a composition to `path`, creating parent directories as needed.
pub fn write_composition(path: &Path, composition: &Value) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| ReportError::io(parent, source))?;
    }
    let bytes = render_composition(composition)?;
    fs::write(path, &bytes).map_err(|source| ReportError::io(path, source))?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote composition");
    debug!(composition = %String::from_utf8_lossy(&bytes), "composition content");
    Ok(())
}
