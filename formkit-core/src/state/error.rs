//! Field Errors
//!
//! Each field carries either a list of error messages or the `Pending`
//! marker, which means "a verdict is coming later" (typically from an
//! asynchronous or server-side check). Pending is never shown to users.
//!
//! On the wire a field's errors are a plain list of strings. Any list that
//! contains the reserved string [`VALIDATION_UNDEFINED`] decodes to
//! [`FieldErrors::Pending`], whatever else it holds. Pending encodes back to
//! the single reserved string.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Reserved wire value for a pending verdict.
pub const VALIDATION_UNDEFINED: &str = "__VALIDATION_UNDEFINED__";

/// Joins entries when normalizing a list into a single message.
const MESSAGE_SEPARATOR: &str = "\u{1f}";

/// Error messages for one field. Most fields have zero or one message.
pub type Messages = SmallVec<[String; 2]>;

/// Ordered mapping from field path to that field's errors.
pub type FieldErrorMap = IndexMap<String, FieldErrors>;

/// The errors reported for a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub enum FieldErrors {
    /// Concrete messages. An empty list means the field is valid.
    Messages(Messages),

    /// The outcome is not known yet.
    Pending,
}

impl FieldErrors {
    /// Build a message list.
    pub fn new<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Messages(messages.into_iter().map(Into::into).collect())
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// The user-visible messages. Pending has none.
    pub fn messages(&self) -> &[String] {
        match self {
            Self::Messages(messages) => messages,
            Self::Pending => &[],
        }
    }

    /// The normalized text used for custom validity and comparisons.
    pub fn message(&self) -> String {
        validation_message(self.messages())
    }
}

impl From<Vec<String>> for FieldErrors {
    fn from(entries: Vec<String>) -> Self {
        if entries.iter().any(|entry| entry == VALIDATION_UNDEFINED) {
            Self::Pending
        } else {
            Self::Messages(entries.into())
        }
    }
}

impl From<FieldErrors> for Vec<String> {
    fn from(errors: FieldErrors) -> Self {
        match errors {
            FieldErrors::Messages(messages) => messages.into_vec(),
            FieldErrors::Pending => vec![VALIDATION_UNDEFINED.to_string()],
        }
    }
}

/// Normalize a list of entries into one string.
///
/// An empty list yields the empty string, so "no entry" and "no messages"
/// compare equal.
pub fn validation_message<S: AsRef<str>>(entries: &[S]) -> String {
    let mut message = String::new();
    for (index, entry) in entries.iter().enumerate() {
        if index > 0 {
            message.push_str(MESSAGE_SEPARATOR);
        }
        message.push_str(entry.as_ref());
    }
    message
}

/// Whether two optional error entries differ.
///
/// Absent and empty are equivalent. A pending entry differs from every
/// message list, including the empty one.
pub fn errors_differ(prev: Option<&FieldErrors>, next: Option<&FieldErrors>) -> bool {
    let pending = |errors: Option<&FieldErrors>| errors.is_some_and(FieldErrors::is_pending);
    if pending(prev) != pending(next) {
        return true;
    }

    let text = |errors: Option<&FieldErrors>| errors.map(FieldErrors::message).unwrap_or_default();
    text(prev) != text(next)
}
