//! Form Context
//!
//! The context is the single source of truth for a form: its metadata, the
//! values fields start from, the errors currently reported and the
//! validation state. A context is never edited in place. The store swaps in
//! a whole new snapshot, which is what makes diffing two snapshots cheap and
//! unambiguous.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::FieldErrorMap;
use super::path::{flatten, FieldValues};

/// Native constraint attributes for one field.
///
/// Carried verbatim so that renderers can mirror them onto inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Constraint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// Mapping from field path to its constraint.
pub type Constraints = IndexMap<String, Constraint>;

/// Per-configuration form metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    /// Flattened default value.
    pub default_value: FieldValues,
    pub constraint: Constraints,
}

impl Metadata {
    /// Compute metadata from a nested default value.
    pub fn new(default_value: &Value, constraint: Constraints) -> Self {
        Self {
            default_value: flatten(default_value),
            constraint,
        }
    }
}

/// Which fields have been validated, and the stable keys of list items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationState {
    pub validated: IndexMap<String, bool>,
    pub list_keys: IndexMap<String, Vec<String>>,
}

impl ValidationState {
    pub fn is_validated(&self, name: &str) -> bool {
        self.validated.get(name).copied().unwrap_or(false)
    }
}

/// An immutable snapshot of a form's state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    pub metadata: Metadata,
    pub initial_value: FieldValues,
    pub error: FieldErrorMap,
    pub state: ValidationState,
}

impl Context {
    /// A pristine context: values at their defaults, no errors, nothing validated.
    pub fn pristine(metadata: Metadata) -> Self {
        Self {
            initial_value: metadata.default_value.clone(),
            metadata,
            error: FieldErrorMap::new(),
            state: ValidationState::default(),
        }
    }

    /// The normalized error text for a field, empty if it has none.
    ///
    /// Pending fields render as empty.
    pub fn error_message(&self, name: &str) -> String {
        self.error.get(name).map(|errors| errors.message()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldErrors;
    use serde_json::json;

    #[test]
    fn pristine_context_starts_from_defaults() {
        let metadata = Metadata::new(&json!({ "email": "", "age": 18 }), Constraints::new());
        let context = Context::pristine(metadata);

        assert_eq!(context.initial_value, context.metadata.default_value);
        assert_eq!(context.initial_value["age"], json!(18));
        assert!(context.error.is_empty());
        assert!(context.state.validated.is_empty());
        assert!(context.state.list_keys.is_empty());
    }

    #[test]
    fn validated_defaults_to_false() {
        let mut state = ValidationState::default();
        assert!(!state.is_validated("email"));

        state.validated.insert("email".into(), true);
        assert!(state.is_validated("email"));
    }

    #[test]
    fn pending_errors_render_empty() {
        let mut context = Context::default();
        context.error.insert("email".into(), FieldErrors::Pending);
        context.error.insert("name".into(), FieldErrors::new(["Required"]));

        assert_eq!(context.error_message("email"), "");
        assert_eq!(context.error_message("name"), "Required");
        assert_eq!(context.error_message("missing"), "");
    }

    #[test]
    fn constraint_uses_camel_case() {
        let constraint: Constraint =
            serde_json::from_value(json!({ "required": true, "minLength": 3 })).unwrap();
        assert_eq!(constraint.required, Some(true));
        assert_eq!(constraint.min_length, Some(3));
        assert_eq!(constraint.pattern, None);
    }
}
