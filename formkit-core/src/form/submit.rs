//! Submission handling.

use serde_json::Value;

use super::{FormContext, FormError, ValidateArgs};
use crate::dom::{
    form_action, form_enc_type, form_method, FormElement, FormEvent, Host, Intent, Submitter,
};
use crate::state::{flatten, Submission, SubmissionStatus};

/// Everything the host needs to carry out a submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitContext {
    pub payload: Value,
    pub action: String,
    pub enc_type: String,
    pub method: String,
    pub submitter: Option<Submitter>,
    /// The validation verdict, when a validation function is configured
    /// and succeeded.
    pub submission: Option<Submission>,
}

impl<H: Host> FormContext<H> {
    /// Handle a submit event.
    ///
    /// The event must come from the form this context owns. When the
    /// validation function rejects the payload with concrete errors, the
    /// errors are reported and the native submission is cancelled. When any
    /// field's verdict is still pending, the native submission proceeds and
    /// the verdict is expected to arrive later through [`FormContext::report`].
    ///
    /// A full submission rejected without a status counts as failed and
    /// focuses the first invalid field. Intent submissions keep the status
    /// the validator gave them.
    pub fn submit(&self, event: &mut FormEvent<H::Form>) -> Result<SubmitContext, FormError> {
        let form = self.form_element()?;
        if event.form() != Some(&form) {
            return Err(FormError::ForeignSubmission {
                form_id: self.form_id.clone(),
            });
        }

        let submitter = event.submitter().cloned();
        let payload = form.payload(submitter.as_ref());
        let action = form_action(&form, submitter.as_ref());
        let enc_type = form_enc_type(&form, submitter.as_ref());
        let method = form_method(&form, submitter.as_ref());

        let intent = submitter.as_ref().and_then(Intent::from_submitter);
        let on_validate = self.options.read().on_validate.clone();
        let submission = on_validate.and_then(|validate| {
            let args = ValidateArgs {
                form: &form,
                payload: &payload,
                submitter: submitter.as_ref(),
                intent: intent.clone(),
            };

            match validate(args) {
                Ok(submission) => Some(submission),
                Err(err) => {
                    tracing::warn!(
                        form_id = %self.form_id,
                        error = %err,
                        "client validation failed, submitting without it"
                    );
                    None
                }
            }
        });

        if let Some(Submission::Rejected(result)) = &submission {
            if result.error.is_none() {
                tracing::debug!(form_id = %self.form_id, "rejected without errors");
            } else if result.is_pending() {
                tracing::debug!(form_id = %self.form_id, "validation pending, deferring verdict");
            } else {
                let mut result = result.clone();
                result.initial_value.get_or_insert_with(|| flatten(&payload));
                // Field-level validation must not steal focus.
                if intent.is_none() {
                    result.status.get_or_insert(SubmissionStatus::Failed);
                }

                self.report(result)?;
                event.prevent_default();
            }
        }

        Ok(SubmitContext {
            payload,
            action,
            enc_type,
            method,
            submitter,
            submission,
        })
    }
}
