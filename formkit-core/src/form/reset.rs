//! Reset handling.

use super::{FormContext, FormError};
use crate::dom::{EventKind, FormEvent, Host};
use crate::state::Context;

impl<H: Host> FormContext<H> {
    /// Handle a reset event on this form.
    ///
    /// Metadata is recomputed from the latest options, since defaults may
    /// have changed through [`FormContext::update`]. Values return to the
    /// defaults; errors and validation state are cleared. Returns whether
    /// the context was reset.
    pub fn reset(&self, event: &FormEvent<H::Form>) -> Result<bool, FormError> {
        if event.kind() != EventKind::Reset || event.default_prevented() {
            return Ok(false);
        }

        let form = self.form_element()?;
        if event.form() != Some(&form) {
            return Ok(false);
        }

        let metadata = self.options.read().metadata();
        self.store.replace(Context::pristine(metadata));

        tracing::debug!(form_id = %self.form_id, "form reset");
        Ok(true)
    }
}
