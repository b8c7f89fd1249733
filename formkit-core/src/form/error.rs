use thiserror::Error;

/// Integration mistakes surfaced by a form context.
///
/// These are never swallowed: they mean the context was wired to the wrong
/// document or the wrong form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("form#{form_id} does not exist")]
    FormNotFound { form_id: String },

    #[error("submit event was dispatched on a form other than form#{form_id}")]
    ForeignSubmission { form_id: String },
}
