//! Structural diff between an obtained composition and its target.
//!
//! Paths are JSON pointers into the flattened documents. Objects and arrays
//! are compared member by member (arrays by index); anything else is a leaf.

use serde::Serialize;
use serde_json::{Map, Value};

/// What happened to a path going from the obtained document to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffKind {
    /// Present only in the target.
    Added,
    /// Present only in the obtained document.
    Removed,
    /// Present in both with different values.
    Changed,
}

impl DiffKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffKind::Added => "added",
            DiffKind::Removed => "removed",
            DiffKind::Changed => "changed",
        }
    }
}

/// One differing leaf path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Difference {
    pub kind: DiffKind,
    pub path: String,
    /// Value in the obtained document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obtained: Option<Value>,
    /// Value in the target document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Value>,
}

/// Diff two objects.
pub fn diff_objects(
    obtained: &Map<String, Value>,
    target: &Map<String, Value>,
) -> Vec<Difference> {
    let mut differences = Vec::new();
    walk_objects(&mut differences, "", obtained, target);
    differences
}

/// Diff two arbitrary values.
pub fn diff_values(obtained: &Value, target: &Value) -> Vec<Difference> {
    let mut differences = Vec::new();
    walk(&mut differences, String::new(), obtained, target);
    differences
}

fn walk(out: &mut Vec<Difference>, path: String, obtained: &Value, target: &Value) {
    match (obtained, target) {
        (Value::Object(left), Value::Object(right)) => walk_objects(out, &path, left, right),
        (Value::Array(left), Value::Array(right)) => {
            for index in 0..left.len().max(right.len()) {
                let child = format!("{path}/{index}");
                match (left.get(index), right.get(index)) {
                    (Some(left), Some(right)) => walk(out, child, left, right),
                    (Some(left), None) => out.push(removed(child, left)),
                    (None, Some(right)) => out.push(added(child, right)),
                    (None, None) => {}
                }
            }
        }
        (left, right) if left != right => out.push(Difference {
            kind: DiffKind::Changed,
            path,
            obtained: Some(left.clone()),
            target: Some(right.clone()),
        }),
        _ => {}
    }
}

fn walk_objects(
    out: &mut Vec<Difference>,
    path: &str,
    obtained: &Map<String, Value>,
    target: &Map<String, Value>,
) {
    for (key, left) in obtained {
        let child = format!("{path}/{}", escape_pointer(key));
        match target.get(key) {
            Some(right) => walk(out, child, left, right),
            None => out.push(removed(child, left)),
        }
    }
    for (key, right) in target {
        if !obtained.contains_key(key) {
            out.push(added(format!("{path}/{}", escape_pointer(key)), right));
        }
    }
}

fn added(path: String, value: &Value) -> Difference {
    Difference {
        kind: DiffKind::Added,
        path,
        obtained: None,
        target: Some(value.clone()),
    }
}

fn removed(path: String, value: &Value) -> Difference {
    Difference {
        kind: DiffKind::Removed,
        path,
        obtained: Some(value.clone()),
        target: None,
    }
}

/// RFC 6901 escaping of one reference token.
fn escape_pointer(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}
