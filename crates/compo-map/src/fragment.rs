//! Composition fragment builder.
//!
//! Every attribute in the composition template is a sequence: single-valued
//! attributes are written as a one-element array, repeated ones as a plain
//! array of fragments.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;

/// One composition object under construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Fragment(Map<String, Value>);

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` wrapped in a one-element array.
    pub fn single<T: Serialize>(&mut self, key: &str, value: T) -> Result<()> {
        let value = serde_json::to_value(value)?;
        self.0.insert(key.to_string(), Value::Array(vec![value]));
        Ok(())
    }

    /// Like [`Fragment::single`], skipping absent values.
    pub fn single_opt<T: Serialize>(&mut self, key: &str, value: Option<T>) -> Result<()> {
        match value {
            Some(value) => self.single(key, value),
            None => Ok(()),
        }
    }

    /// Insert a list of already converted values.
    pub fn list<I, T>(&mut self, key: &str, values: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Serialize,
    {
        let values = values
            .into_iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        self.0.insert(key.to_string(), Value::Array(values));
        Ok(())
    }

    /// Insert a raw value without wrapping it.
    pub fn insert(&mut self, key: &str, value: Value) {
        self.0.insert(key.to_string(), value);
    }

    /// Shallow merge: keys in `other` overwrite keys already present.
    pub fn merge(&mut self, other: Fragment) {
        self.0.extend(other.0);
    }

    /// Overlay a verbatim JSON object, then keep building on top of it.
    pub fn from_overlay(overlay: Map<String, Value>) -> Self {
        Self(overlay)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Fragment> for Value {
    fn from(fragment: Fragment) -> Self {
        fragment.into_value()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn single_wraps_in_one_element_array() {
        let mut fragment = Fragment::new();
        fragment.single("description", "text").unwrap();
        fragment.single_opt::<&str>("missing", None).unwrap();
        assert_eq!(fragment.into_value(), json!({ "description": ["text"] }));
    }

    #[test]
    fn merge_is_last_wins() {
        let mut left = Fragment::new();
        left.single("a", 1).unwrap();
        left.single("b", 1).unwrap();
        let mut right = Fragment::new();
        right.single("b", 2).unwrap();
        left.merge(right);
        assert_eq!(left.into_value(), json!({ "a": [1], "b": [2] }));
    }
}
