//! Submissions and Results
//!
//! A validation function turns a submitted payload into a [`Submission`].
//! Ready submissions may proceed; rejected ones carry a
//! [`SubmissionResult`] describing what to report back into the form.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::context::ValidationState;
use super::error::{FieldErrorMap, FieldErrors};
use super::path::{flatten, FieldValues};

/// Outcome tag attached to a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Success,
    /// Validation failed; the first invalid field receives focus.
    Failed,
    #[serde(other)]
    Other,
}

/// A result to report into the form context.
///
/// Without an `initial_value` the result means "reset the form".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    #[serde(
        default,
        deserialize_with = "deserialize_values",
        skip_serializing_if = "Option::is_none"
    )]
    pub initial_value: Option<FieldValues>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<FieldErrorMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<ValidationState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SubmissionStatus>,
}

/// Accept either a nested value or an already flattened mapping.
fn deserialize_values<'de, D>(deserializer: D) -> Result<Option<FieldValues>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.filter(|value| !value.is_null()).map(|value| flatten(&value)))
}

impl SubmissionResult {
    /// An empty result. Reporting it resets the form.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_value(mut self, initial_value: FieldValues) -> Self {
        self.initial_value = Some(initial_value);
        self
    }

    /// Add errors for one field.
    pub fn with_error(mut self, name: impl Into<String>, errors: FieldErrors) -> Self {
        self.error
            .get_or_insert_with(FieldErrorMap::new)
            .insert(name.into(), errors);
        self
    }

    pub fn with_state(mut self, state: ValidationState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_status(mut self, status: SubmissionStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Whether any field is still awaiting its verdict.
    pub fn is_pending(&self) -> bool {
        self.error
            .as_ref()
            .is_some_and(|error| error.values().any(FieldErrors::is_pending))
    }

    /// Decode a result sent by a server.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// What a validation function decided about a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// The payload is valid; `value` is the parsed form value.
    Ready { value: Value },

    /// The payload was rejected, or its verdict is incomplete.
    Rejected(SubmissionResult),
}

impl Submission {
    pub fn ready(value: Value) -> Self {
        Self::Ready { value }
    }

    pub fn rejected(result: SubmissionResult) -> Self {
        Self::Rejected(result)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    /// The result to report for a rejected submission.
    pub fn reject(&self) -> Option<SubmissionResult> {
        match self {
            Self::Ready { .. } => None,
            Self::Rejected(result) => Some(result.clone()),
        }
    }

    /// The parsed value of a ready submission.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Ready { value } => Some(value),
            Self::Rejected(_) => None,
        }
    }
}
