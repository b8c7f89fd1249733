//! Field Paths
//!
//! A field path names a possibly nested form field: `email`,
//! `address.city`, `tasks[2].title`. Nested default values are flattened
//! into an ordered mapping keyed by these paths so that every other part of
//! the engine can treat the form as a flat set of named fields.

use indexmap::IndexMap;
use serde_json::Value;

/// Ordered mapping from field path to a scalar value.
pub type FieldValues = IndexMap<String, Value>;

/// One step in a field path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment<'a> {
    /// An object key, joined with `.`.
    Key(&'a str),
    /// A list index, written as `[n]`.
    Index(usize),
}

/// Append a segment to an existing path.
///
/// ```rust
/// use formkit_core::state::{append_segment, PathSegment};
///
/// assert_eq!(append_segment("", PathSegment::Key("tasks")), "tasks");
/// assert_eq!(append_segment("tasks", PathSegment::Index(2)), "tasks[2]");
/// assert_eq!(append_segment("tasks[2]", PathSegment::Key("title")), "tasks[2].title");
/// ```
pub fn append_segment(prefix: &str, segment: PathSegment<'_>) -> String {
    match segment {
        PathSegment::Key(key) if prefix.is_empty() => key.to_string(),
        PathSegment::Key(key) => format!("{prefix}.{key}"),
        PathSegment::Index(index) => format!("{prefix}[{index}]"),
    }
}

/// Flatten a nested JSON value into a mapping from field path to leaf value.
///
/// Objects and lists are walked recursively. Empty objects and empty lists
/// are kept as leaves so that a field holding "no entries yet" still has a
/// default. A scalar at the root has no path and yields an empty mapping.
pub fn flatten(value: &Value) -> FieldValues {
    let mut result = FieldValues::new();
    flatten_into(value, "", &mut result);
    result
}

fn flatten_into(value: &Value, prefix: &str, result: &mut FieldValues) {
    match value {
        Value::Object(entries) if !entries.is_empty() => {
            for (key, entry) in entries {
                flatten_into(entry, &append_segment(prefix, PathSegment::Key(key)), result);
            }
        }
        Value::Array(items) if !items.is_empty() => {
            for (index, item) in items.iter().enumerate() {
                flatten_into(item, &append_segment(prefix, PathSegment::Index(index)), result);
            }
        }
        _ => {
            if !prefix.is_empty() {
                result.insert(prefix.to_string(), value.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flattens_nested_objects_and_lists() {
        let values = flatten(&json!({
            "email": "",
            "address": { "city": "Oslo", "zip": 150 },
            "tasks": [{ "title": "a" }, { "title": "b" }],
        }));

        let keys: Vec<&str> = values.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["email", "address.city", "address.zip", "tasks[0].title", "tasks[1].title"]
        );
        assert_eq!(values["address.zip"], json!(150));
        assert_eq!(values["tasks[1].title"], json!("b"));
    }

    #[test]
    fn empty_containers_are_leaves() {
        let values = flatten(&json!({ "tags": [], "meta": {} }));
        assert_eq!(values["tags"], json!([]));
        assert_eq!(values["meta"], json!({}));
    }

    #[test]
    fn scalar_root_has_no_paths() {
        assert!(flatten(&json!("orphan")).is_empty());
        assert!(flatten(&Value::Null).is_empty());
    }

    #[test]
    fn flat_keys_pass_through() {
        let values = flatten(&json!({ "address.city": "Oslo" }));
        assert_eq!(values["address.city"], json!("Oslo"));
    }
}
