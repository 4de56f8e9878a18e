//! Object flattening ahead of the structural diff.

use serde_json::{Map, Value};

/// Separator between joined object keys.
pub const KEY_SEPARATOR: char = '_';

/// Flatten nested objects into one level, joining keys with `_`.
///
/// Only objects are descended into; arrays and scalars are leaves. A
/// non-object root is kept whole under the empty key.
///
/// Joined keys can collide (`{"a_b": 1}` and `{"a": {"b": 2}}`); the later
/// key in iteration order wins.
pub fn flatten(value: &Value) -> Map<String, Value> {
    let mut flat = Map::new();
    match value {
        Value::Object(object) => flatten_into(&mut flat, None, object),
        other => {
            flat.insert(String::new(), other.clone());
        }
    }
    flat
}

fn flatten_into(
    flat: &mut Map<String, Value>,
    parent: Option<&str>,
    object: &Map<String, Value>,
) {
    for (key, value) in object {
        let joined = match parent {
            Some(parent) => format!("{parent}{KEY_SEPARATOR}{key}"),
            None => key.clone(),
        };
        match value {
            Value::Object(child) => flatten_into(flat, Some(&joined), child),
            leaf => {
                flat.insert(joined, leaf.clone());
            }
        }
    }
}
