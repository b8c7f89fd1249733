//! Host Seams
//!
//! The engine never touches a document directly. The host (a browser
//! binding, a test double, a server-side renderer) implements these traits
//! and hands the engine its events.
//!
//! - [`Host`] finds a form by its identifier.
//! - [`FormElement`] exposes the form's fields, payload, submit attributes,
//!   native reset and intent dispatch.
//! - [`FieldElement`] exposes a field's name, owner and custom validity.

mod event;
mod intent;

#[cfg(test)]
pub(crate) mod mock;

pub use event::{form_action, form_enc_type, form_method, EventKind, EventTarget, FormEvent, Submitter};
pub(crate) use event::owned_field_name;
pub use intent::{Intent, INTENT};

use serde_json::Value;

/// Resolves forms by identifier.
pub trait Host {
    type Form: FormElement;

    /// Find the form with the given identifier, if it exists.
    fn find_form(&self, form_id: &str) -> Option<Self::Form>;
}

/// A form in the host document.
///
/// Equality is identity: two handles are equal when they refer to the same
/// form instance.
pub trait FormElement: Clone + PartialEq {
    type Field: FieldElement<Form = Self>;

    /// All fields of the form, in document order.
    fn fields(&self) -> Vec<Self::Field>;

    /// The structured payload the form would submit.
    fn payload(&self, submitter: Option<&Submitter>) -> Value;

    fn action(&self) -> String;

    fn enc_type(&self) -> String;

    fn method(&self) -> String;

    /// Trigger a native reset. The host then dispatches a reset event.
    fn reset(&self);

    /// Submit the form carrying `value` as its intent.
    ///
    /// With `form_no_validate` the host must skip native constraint
    /// validation for this submission.
    fn request_intent(&self, value: &str, form_no_validate: bool);

    /// Focus the first field, in document order, with a validation message.
    fn focus_first_invalid_field(&self) {
        let invalid = self
            .fields()
            .into_iter()
            .find(|field| field.is_validatable() && !field.validation_message().is_empty());

        if let Some(field) = invalid {
            field.focus();
        }
    }
}

/// A field in the host document.
pub trait FieldElement {
    type Form;

    /// The field's name. Unnamed fields are never validated.
    fn name(&self) -> Option<String>;

    /// The form owning this field.
    fn form(&self) -> Option<Self::Form>;

    /// Whether the field takes part in validation (inputs, selects,
    /// textareas and buttons do; fieldsets and outputs do not).
    fn is_validatable(&self) -> bool {
        true
    }

    /// Set the custom validity message. Empty clears it.
    fn set_custom_validity(&self, message: &str);

    /// The current validation message.
    fn validation_message(&self) -> String;

    fn focus(&self);
}
