//! Form events.
//!
//! The host wraps each native event into a [`FormEvent`] before handing it
//! to the engine. Handlers may cancel the native default action through
//! [`FormEvent::prevent_default`]; the host reads the flag back afterwards.

use super::{FieldElement, FormElement};

/// The native event types the engine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Submit,
    Reset,
    Input,
    Blur,
}

/// What an event was dispatched on.
pub enum EventTarget<F: FormElement> {
    Form(F),
    Field(F::Field),
    /// Anything else (a fieldset, a label, a detached node).
    Other,
}

/// The control that submitted a form, with its overriding attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submitter {
    pub name: Option<String>,
    pub value: Option<String>,
    pub form_action: Option<String>,
    pub form_enc_type: Option<String>,
    pub form_method: Option<String>,
    pub form_no_validate: bool,
}

impl Submitter {
    /// A named submit button carrying `value`.
    pub fn button(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
            ..Self::default()
        }
    }
}

/// A native event as seen by the engine.
pub struct FormEvent<F: FormElement> {
    kind: EventKind,
    target: EventTarget<F>,
    submitter: Option<Submitter>,
    default_prevented: bool,
}

impl<F: FormElement> FormEvent<F> {
    pub fn new(kind: EventKind, target: EventTarget<F>) -> Self {
        Self {
            kind,
            target,
            submitter: None,
            default_prevented: false,
        }
    }

    /// A submit event on `form`.
    pub fn submit(form: F, submitter: Option<Submitter>) -> Self {
        Self {
            submitter,
            ..Self::new(EventKind::Submit, EventTarget::Form(form))
        }
    }

    pub fn reset(form: F) -> Self {
        Self::new(EventKind::Reset, EventTarget::Form(form))
    }

    pub fn input(field: F::Field) -> Self {
        Self::new(EventKind::Input, EventTarget::Field(field))
    }

    pub fn blur(field: F::Field) -> Self {
        Self::new(EventKind::Blur, EventTarget::Field(field))
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn target(&self) -> &EventTarget<F> {
        &self.target
    }

    /// The form this event was dispatched on, if its target is a form.
    pub fn form(&self) -> Option<&F> {
        match &self.target {
            EventTarget::Form(form) => Some(form),
            _ => None,
        }
    }

    /// The field this event was dispatched on, if its target is a field.
    pub fn field(&self) -> Option<&F::Field> {
        match &self.target {
            EventTarget::Field(field) => Some(field),
            _ => None,
        }
    }

    pub fn submitter(&self) -> Option<&Submitter> {
        self.submitter.as_ref()
    }

    /// Cancel the native default action.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// The action a submission targets; the submitter's `formaction` wins.
pub fn form_action<F: FormElement>(form: &F, submitter: Option<&Submitter>) -> String {
    submitter
        .and_then(|submitter| submitter.form_action.clone())
        .unwrap_or_else(|| form.action())
}

/// The content encoding of a submission; the submitter's `formenctype` wins.
pub fn form_enc_type<F: FormElement>(form: &F, submitter: Option<&Submitter>) -> String {
    submitter
        .and_then(|submitter| submitter.form_enc_type.clone())
        .unwrap_or_else(|| form.enc_type())
}

/// The method of a submission; the submitter's `formmethod` wins.
pub fn form_method<F: FormElement>(form: &F, submitter: Option<&Submitter>) -> String {
    submitter
        .and_then(|submitter| submitter.form_method.clone())
        .unwrap_or_else(|| form.method())
}

/// Whether `field` is a validatable, named field owned by `form`.
pub(crate) fn owned_field_name<F: FormElement>(form: &F, field: &F::Field) -> Option<String> {
    if !field.is_validatable() || field.form().as_ref() != Some(form) {
        return None;
    }

    field.name().filter(|name| !name.is_empty())
}
