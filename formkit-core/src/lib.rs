//! Formkit Core
//!
//! This crate provides the state engine behind formkit forms. It implements:
//!
//! - The form context: metadata, initial values, errors and validation state
//! - Fine-grained subscriptions that only wake observers whose slice changed
//! - The submission lifecycle: validation dispatch, pending verdicts,
//!   error reporting and focus on failure
//! - Field-level validation triggers for input and blur events
//!
//! The engine never touches a document itself. Hosts implement the traits
//! in [`dom`] and forward native events.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - `state`: Plain data types (context snapshot, errors, results, paths)
//! - `diff`: Memoized per-name comparison between two snapshots
//! - `subscription`: Subscribers, subjects and the per-form registry
//! - `store`: The atomically replaced context and its notification pass
//! - `dom`: Host traits, events, submitters and intents
//! - `form`: [`FormContext`], the public surface of a form instance
//!
//! # Example
//!
//! ```rust,ignore
//! use formkit_core::{FormContext, FormOptions, Scope, SubscriptionSubject, Trigger};
//!
//! let form = FormContext::new(document, FormOptions::new("signup")
//!     .with_default_value(json!({ "email": "" }))
//!     .with_should_validate(Trigger::OnBlur)
//!     .with_validate(|args| validate_signup(args.payload)));
//!
//! // Re-render the email field only when its errors change
//! let handle = form.subscribe_to(
//!     SubscriptionSubject::new().error(Scope::names(["email"])),
//!     || render_email_errors(),
//! );
//!
//! // Wire native events
//! form.blur(&FormEvent::blur(email_input))?;
//! let outcome = form.submit(&mut FormEvent::submit(form_element, None))?;
//! ```

pub mod diff;
pub mod dom;
pub mod form;
pub mod state;
pub mod store;
pub mod subscription;

pub use dom::{FieldElement, FormElement, FormEvent, Host, Intent, Submitter};
pub use form::{
    BoxError, FormContext, FormError, FormOptions, SubmitContext, Trigger, ValidateArgs,
};
pub use state::{
    Context, FieldErrors, FieldValues, Submission, SubmissionResult, SubmissionStatus,
};
pub use subscription::{Scope, SubscriptionSubject, Unsubscribe};
