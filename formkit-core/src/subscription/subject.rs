//! Subscription subjects.
//!
//! A subject declares which slices of the context a subscriber reads. Each
//! slice is optional; an unset slice never triggers a notification.

use crate::diff::Scope;

/// A subscriber's declared interest in the context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionSubject {
    /// Error messages, by field path.
    pub error: Option<Scope>,
    /// Default values, by field path.
    pub default_value: Option<Scope>,
    /// Stable keys of list items, by list path.
    pub key: Option<Scope>,
    /// Validated flags, by field path.
    pub validated: Option<Scope>,
}

impl SubscriptionSubject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(mut self, scope: Scope) -> Self {
        self.error = Some(scope);
        self
    }

    pub fn default_value(mut self, scope: Scope) -> Self {
        self.default_value = Some(scope);
        self
    }

    pub fn key(mut self, scope: Scope) -> Self {
        self.key = Some(scope);
        self
    }

    pub fn validated(mut self, scope: Scope) -> Self {
        self.validated = Some(scope);
        self
    }

    /// Whether no slice is requested. The store skips such subjects.
    pub fn is_empty(&self) -> bool {
        self.error.is_none()
            && self.default_value.is_none()
            && self.key.is_none()
            && self.validated.is_none()
    }
}
