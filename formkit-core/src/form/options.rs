//! Form configuration.
//!
//! Everything except the validation function can be loaded from JSON:
//!
//! ```json
//! {
//!   "formId": "signup",
//!   "defaultValue": { "email": "", "age": 18 },
//!   "constraint": { "email": { "required": true } },
//!   "shouldValidate": "onBlur",
//!   "shouldRevalidate": "onInput"
//! }
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dom::{EventKind, Intent, Submitter};
use crate::state::{Constraint, Constraints, Metadata, Submission, SubmissionResult};

/// Error type returned by validation functions.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// When field events request validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Trigger {
    /// Only a full submit validates.
    #[default]
    OnSubmit,
    OnBlur,
    OnInput,
}

impl Trigger {
    /// Whether an event of `kind` should request validation.
    pub fn matches(self, kind: EventKind) -> bool {
        matches!(
            (self, kind),
            (Trigger::OnInput, EventKind::Input) | (Trigger::OnBlur, EventKind::Blur)
        )
    }
}

/// Arguments handed to a validation function.
pub struct ValidateArgs<'a, F> {
    pub form: &'a F,
    pub payload: &'a Value,
    pub submitter: Option<&'a Submitter>,
    /// Set when the submission was synthesized for an intent, e.g. a
    /// single-field validation request.
    pub intent: Option<Intent>,
}

/// A client-side validation function.
pub type ValidateFn<F> =
    Arc<dyn Fn(ValidateArgs<'_, F>) -> Result<Submission, BoxError> + Send + Sync>;

/// Live configuration of a form.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound = "")]
pub struct FormOptions<F> {
    pub form_id: String,
    #[serde(default)]
    pub default_value: Value,
    #[serde(default)]
    pub constraint: Constraints,
    #[serde(default)]
    pub should_validate: Option<Trigger>,
    #[serde(default)]
    pub should_revalidate: Option<Trigger>,
    /// A result from an earlier round trip, used to seed the initial context.
    #[serde(default)]
    pub last_result: Option<SubmissionResult>,
    #[serde(skip)]
    pub on_validate: Option<ValidateFn<F>>,
}

impl<F> FormOptions<F> {
    pub fn new(form_id: impl Into<String>) -> Self {
        Self {
            form_id: form_id.into(),
            default_value: Value::Null,
            constraint: Constraints::new(),
            should_validate: None,
            should_revalidate: None,
            last_result: None,
            on_validate: None,
        }
    }

    /// Load options from JSON. The validation function has to be attached
    /// separately with [`FormOptions::with_validate`].
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_default_value(mut self, default_value: Value) -> Self {
        self.default_value = default_value;
        self
    }

    pub fn with_constraint(mut self, name: impl Into<String>, constraint: Constraint) -> Self {
        self.constraint.insert(name.into(), constraint);
        self
    }

    pub fn with_should_validate(mut self, trigger: Trigger) -> Self {
        self.should_validate = Some(trigger);
        self
    }

    pub fn with_should_revalidate(mut self, trigger: Trigger) -> Self {
        self.should_revalidate = Some(trigger);
        self
    }

    pub fn with_last_result(mut self, result: SubmissionResult) -> Self {
        self.last_result = Some(result);
        self
    }

    pub fn with_validate<V>(mut self, validate: V) -> Self
    where
        V: Fn(ValidateArgs<'_, F>) -> Result<Submission, BoxError> + Send + Sync + 'static,
    {
        self.on_validate = Some(Arc::new(validate));
        self
    }

    /// Trigger for fields that have not been validated yet.
    pub fn validate_trigger(&self) -> Trigger {
        self.should_validate.unwrap_or_default()
    }

    /// Trigger for fields that have been validated before.
    pub fn revalidate_trigger(&self) -> Trigger {
        self.should_revalidate.unwrap_or_else(|| self.validate_trigger())
    }

    /// Metadata derived from the current defaults and constraints.
    pub fn metadata(&self) -> Metadata {
        Metadata::new(&self.default_value, self.constraint.clone())
    }
}

impl<F> Clone for FormOptions<F> {
    fn clone(&self) -> Self {
        Self {
            form_id: self.form_id.clone(),
            default_value: self.default_value.clone(),
            constraint: self.constraint.clone(),
            should_validate: self.should_validate,
            should_revalidate: self.should_revalidate,
            last_result: self.last_result.clone(),
            on_validate: self.on_validate.clone(),
        }
    }
}

impl<F> std::fmt::Debug for FormOptions<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormOptions")
            .field("form_id", &self.form_id)
            .field("default_value", &self.default_value)
            .field("constraint", &self.constraint)
            .field("should_validate", &self.should_validate)
            .field("should_revalidate", &self.should_revalidate)
            .field("last_result", &self.last_result)
            .field("has_on_validate", &self.on_validate.is_some())
            .finish()
    }
}
