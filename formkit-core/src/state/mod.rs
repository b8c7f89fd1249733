//! Form State Model
//!
//! Plain data types describing a form: field paths and flattened values,
//! per-field errors, metadata, the context snapshot, and the submission
//! values exchanged with validation functions.
//!
//! Nothing in this module is shared or locked. Sharing and change
//! notification live in [`crate::store`].

mod context;
mod error;
mod path;
mod result;

pub use context::{Constraint, Constraints, Context, Metadata, ValidationState};
pub use error::{
    errors_differ, validation_message, FieldErrorMap, FieldErrors, Messages, VALIDATION_UNDEFINED,
};
pub use path::{append_segment, flatten, FieldValues, PathSegment};
pub use result::{Submission, SubmissionResult, SubmissionStatus};
