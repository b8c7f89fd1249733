//! Form Context
//!
//! [`FormContext`] is the public surface of one form instance. It owns the
//! form's [`ContextStore`] and its live [`FormOptions`], and turns host
//! events into context replaces.
//!
//! # Lifecycle
//!
//! - `input` / `blur` decide whether a single field should be validated and,
//!   if so, ask the host to submit a validation intent.
//! - `submit` runs the validation function and either lets the native
//!   submission through, cancels it and reports errors, or defers the
//!   verdict when part of the validation is still pending.
//! - `report` pushes a result into the context, e.g. once an asynchronous
//!   check completes. The last report wins.
//! - `reset` restores the defaults computed from the latest options.

mod error;
mod options;
mod reset;
mod submit;
mod trigger;

pub use error::FormError;
pub use options::{BoxError, FormOptions, Trigger, ValidateArgs, ValidateFn};
pub use submit::SubmitContext;

use std::sync::Arc;

use parking_lot::RwLock;

use crate::dom::{FieldElement, FormElement, Host};
use crate::state::{Context, SubmissionResult, SubmissionStatus};
use crate::store::ContextStore;
use crate::subscription::{SubjectFn, SubscriptionSubject, Unsubscribe};

/// State engine for one form.
pub struct FormContext<H: Host> {
    form_id: String,
    host: H,
    options: RwLock<FormOptions<H::Form>>,
    store: ContextStore,
}

impl<H: Host> FormContext<H> {
    /// Create the context for the form identified by `options.form_id`.
    ///
    /// The form does not need to exist yet; it is looked up whenever an
    /// operation needs it.
    pub fn new(host: H, options: FormOptions<H::Form>) -> Self {
        let context = initial_context(&options);

        Self {
            form_id: options.form_id.clone(),
            host,
            options: RwLock::new(options),
            store: ContextStore::new(context),
        }
    }

    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    /// A copy of the live configuration.
    pub fn options(&self) -> FormOptions<H::Form> {
        self.options.read().clone()
    }

    /// The current context snapshot.
    pub fn get_context(&self) -> Arc<Context> {
        self.store.get_context()
    }

    /// Register a subscriber.
    ///
    /// `get_subject` is asked for the subscriber's interest on every
    /// replace; without it the subscriber is never notified.
    pub fn subscribe<F>(&self, callback: F, get_subject: Option<SubjectFn>) -> Unsubscribe
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.store.subscribe(callback, get_subject)
    }

    /// Register a subscriber with a fixed subject.
    pub fn subscribe_to<F>(&self, subject: SubscriptionSubject, callback: F) -> Unsubscribe
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.store
            .subscribe(callback, Some(Box::new(move || Some(subject.clone()))))
    }

    /// Replace the live configuration. The context is left untouched; new
    /// defaults take effect on the next reset.
    ///
    /// A form keeps the id it was created with. A different id in `options`
    /// is overwritten.
    pub fn update(&self, mut options: FormOptions<H::Form>) {
        if options.form_id != self.form_id {
            tracing::warn!(
                form_id = %self.form_id,
                requested = %options.form_id,
                "form id cannot change, keeping the original"
            );
            options.form_id = self.form_id.clone();
        }

        tracing::debug!(form_id = %self.form_id, "form options updated");
        *self.options.write() = options;
    }

    /// Push a result into the context.
    ///
    /// A result without an initial value asks for a full reset: the native
    /// form is reset and the resulting reset event rebuilds the context.
    /// Otherwise the context is replaced, every field's custom validity is
    /// synced with its errors, and a failed result focuses the first invalid
    /// field.
    pub fn report(&self, result: SubmissionResult) -> Result<(), FormError> {
        let form = self.form_element()?;

        let SubmissionResult {
            initial_value,
            error,
            state,
            status,
        } = result;

        let Some(initial_value) = initial_value else {
            tracing::debug!(form_id = %self.form_id, "report without initial value, resetting form");
            form.reset();
            return Ok(());
        };

        let metadata = self.store.get_context().metadata.clone();
        self.store.replace(Context {
            metadata,
            initial_value,
            error: error.unwrap_or_default(),
            state: state.unwrap_or_default(),
        });

        let context = self.store.get_context();
        for field in form.fields() {
            if !field.is_validatable() {
                continue;
            }

            let message = field
                .name()
                .map(|name| context.error_message(&name))
                .unwrap_or_default();
            field.set_custom_validity(&message);
        }

        if status == Some(SubmissionStatus::Failed) {
            form.focus_first_invalid_field();
        }

        Ok(())
    }

    /// Look up the form this context belongs to.
    fn form_element(&self) -> Result<H::Form, FormError> {
        self.host
            .find_form(&self.form_id)
            .ok_or_else(|| FormError::FormNotFound {
                form_id: self.form_id.clone(),
            })
    }
}

impl<H: Host> std::fmt::Debug for FormContext<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormContext")
            .field("form_id", &self.form_id)
            .field("subscriber_count", &self.store.subscriber_count())
            .finish()
    }
}

/// The first context of a form: its defaults, or the values of an earlier
/// round trip when one is configured.
fn initial_context<F>(options: &FormOptions<F>) -> Context {
    let metadata = options.metadata();

    match &options.last_result {
        Some(SubmissionResult {
            initial_value: Some(initial_value),
            error,
            state,
            ..
        }) => Context {
            metadata,
            initial_value: initial_value.clone(),
            error: error.clone().unwrap_or_default(),
            state: state.clone().unwrap_or_default(),
        },
        _ => Context::pristine(metadata),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::mock::{MockDocument, MockForm};
    use crate::state::{FieldErrors, FieldValues, ValidationState};
    use crate::subscription::Scope;
    use serde_json::json;
    use std::sync::atomic::{AtomicI32, Ordering};

    fn setup() -> (FormContext<MockDocument>, MockForm) {
        let document = MockDocument::new();
        let form = document.add_form("signup");
        let options = FormOptions::new("signup").with_default_value(json!({ "email": "", "name": "" }));
        (FormContext::new(document, options), form)
    }

    fn values(entries: serde_json::Value) -> FieldValues {
        crate::state::flatten(&entries)
    }

    #[test]
    fn starts_from_flattened_defaults() {
        let (form, _) = setup();
        let context = form.get_context();

        assert_eq!(context.initial_value, values(json!({ "email": "", "name": "" })));
        assert!(context.error.is_empty());
        assert_eq!(form.form_id(), "signup");
    }

    #[test]
    fn last_result_seeds_initial_context() {
        let document = MockDocument::new();
        let options = FormOptions::new("signup")
            .with_default_value(json!({ "email": "" }))
            .with_last_result(
                SubmissionResult::new()
                    .with_initial_value(values(json!({ "email": "taken@x.io" })))
                    .with_error("email", FieldErrors::new(["Taken"])),
            );
        let form = FormContext::new(document, options);
        let context = form.get_context();

        assert_eq!(context.initial_value["email"], json!("taken@x.io"));
        assert_eq!(context.error_message("email"), "Taken");
        assert_eq!(context.metadata.default_value["email"], json!(""));
    }

    #[test]
    fn report_replaces_context_and_syncs_validity() {
        let (form, element) = setup();
        let email = element.field("email");
        let name = element.field("name");
        name.set_custom_validity("stale");

        let mut state = ValidationState::default();
        state.validated.insert("email".into(), true);

        form.report(
            SubmissionResult::new()
                .with_initial_value(values(json!({ "email": "x", "name": "" })))
                .with_error("email", FieldErrors::new(["Invalid"]))
                .with_state(state),
        )
        .unwrap();

        let context = form.get_context();
        assert_eq!(context.initial_value["email"], json!("x"));
        assert!(context.state.is_validated("email"));
        assert_eq!(email.custom_validity(), "Invalid");
        assert_eq!(name.custom_validity(), "");
        // Not failed: no focus.
        assert_eq!(email.focus_count(), 0);
    }

    #[test]
    fn failed_report_focuses_first_invalid_field() {
        let (form, element) = setup();
        let name = element.field("name");
        let email = element.field("email");

        form.report(
            SubmissionResult::new()
                .with_initial_value(FieldValues::new())
                .with_error("email", FieldErrors::new(["Required"]))
                .with_status(SubmissionStatus::Failed),
        )
        .unwrap();

        assert_eq!(name.focus_count(), 0);
        assert_eq!(email.focus_count(), 1);
    }

    #[test]
    fn pending_errors_never_reach_custom_validity() {
        let (form, element) = setup();
        let email = element.field("email");

        form.report(
            SubmissionResult::new()
                .with_initial_value(FieldValues::new())
                .with_error("email", FieldErrors::Pending)
                .with_status(SubmissionStatus::Failed),
        )
        .unwrap();

        assert!(form.get_context().error["email"].is_pending());
        assert_eq!(email.custom_validity(), "");
        assert_eq!(email.focus_count(), 0);
    }

    #[test]
    fn report_without_initial_value_resets_natively() {
        let (form, element) = setup();
        let calls = Arc::new(AtomicI32::new(0));
        let counter = calls.clone();
        let _handle = form.subscribe_to(
            SubscriptionSubject::new()
                .error(Scope::All)
                .default_value(Scope::All)
                .validated(Scope::All)
                .key(Scope::All),
            move || {
                counter.fetch_add(1, Ordering::SeqCst);
            },
        );
        let before = form.get_context();

        form.report(SubmissionResult::new().with_error("email", FieldErrors::new(["x"])))
            .unwrap();

        assert_eq!(element.reset_count(), 1);
        assert!(Arc::ptr_eq(&before, &form.get_context()));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn report_on_missing_form_is_an_error() {
        let form = FormContext::new(MockDocument::new(), FormOptions::new("ghost"));
        let err = form.report(SubmissionResult::new()).unwrap_err();
        assert_eq!(err, FormError::FormNotFound { form_id: "ghost".into() });
        assert_eq!(err.to_string(), "form#ghost does not exist");
    }

    #[test]
    fn update_leaves_context_untouched() {
        let (form, _) = setup();
        let before = form.get_context();

        form.update(
            FormOptions::new("signup")
                .with_default_value(json!({ "email": "new@x.io" }))
                .with_should_validate(Trigger::OnInput),
        );

        assert!(Arc::ptr_eq(&before, &form.get_context()));
        assert_eq!(form.options().validate_trigger(), Trigger::OnInput);
    }

    #[test]
    fn update_keeps_form_id() {
        let (form, element) = setup();
        let email = element.field("email");

        form.update(FormOptions::new("login").with_should_validate(Trigger::OnBlur));

        assert_eq!(form.form_id(), "signup");
        assert_eq!(form.options().form_id, "signup");
        assert_eq!(form.options().validate_trigger(), Trigger::OnBlur);

        // Still bound to the original form.
        form.report(
            SubmissionResult::new()
                .with_initial_value(FieldValues::new())
                .with_error("email", FieldErrors::new(["Required"])),
        )
        .unwrap();
        assert_eq!(email.custom_validity(), "Required");
    }
}
