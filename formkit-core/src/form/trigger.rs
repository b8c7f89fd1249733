//! Field validation triggers.
//!
//! Input and blur events never touch the context. They only decide whether
//! the field should be validated now, and if so ask the host to submit a
//! validation intent that bypasses native constraint validation.

use super::{FormContext, FormError};
use crate::dom::{EventKind, FormElement, FormEvent, Host, Intent};

impl<H: Host> FormContext<H> {
    /// Handle an input event. Returns whether validation was requested.
    pub fn input(&self, event: &FormEvent<H::Form>) -> Result<bool, FormError> {
        self.field_event(event, EventKind::Input)
    }

    /// Handle a blur event. Returns whether validation was requested.
    pub fn blur(&self, event: &FormEvent<H::Form>) -> Result<bool, FormError> {
        self.field_event(event, EventKind::Blur)
    }

    fn field_event(&self, event: &FormEvent<H::Form>, kind: EventKind) -> Result<bool, FormError> {
        if event.kind() != kind || event.default_prevented() {
            return Ok(false);
        }

        let Some(field) = event.field() else {
            return Ok(false);
        };

        let form = self.form_element()?;
        let Some(name) = crate::dom::owned_field_name(&form, field) else {
            return Ok(false);
        };

        let validated = self.store.get_context().state.is_validated(&name);
        let trigger = {
            let options = self.options.read();
            if validated {
                options.revalidate_trigger()
            } else {
                options.validate_trigger()
            }
        };

        if !trigger.matches(kind) {
            tracing::trace!(%name, ?kind, ?trigger, validated, "field event ignored");
            return Ok(false);
        }

        tracing::trace!(%name, ?kind, "requesting field validation");
        form.request_intent(&Intent::validate(name).encode(), true);
        Ok(true)
    }
}
