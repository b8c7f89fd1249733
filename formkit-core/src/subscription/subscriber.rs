//! Subscriber types for the subscription registry.
//!
//! A Subscriber is an observer of form context changes, typically a piece of
//! rendering code bound to a handful of fields.

use std::sync::atomic::{AtomicU64, Ordering};

use super::subject::SubscriptionSubject;

/// Unique identifier for a subscriber.
///
/// Each subscriber gets a unique ID when registered. The ID is what an
/// unsubscribe handle uses to remove exactly its own subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

impl SubscriberId {
    /// Generate a new unique subscriber ID.
    ///
    /// Uses an atomic counter to ensure uniqueness across threads.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for SubscriberId {
    fn default() -> Self {
        Self::new()
    }
}

/// Lazily computed interest of a subscriber.
pub type SubjectFn = Box<dyn Fn() -> Option<SubscriptionSubject> + Send + Sync>;

/// An observer of context changes.
///
/// The subject is asked for on every replace, so a subscriber can widen or
/// narrow its interest over time (for example as fields mount).
pub struct Subscriber {
    id: SubscriberId,
    /// The callback to invoke when a subject it cares about changed.
    callback: Box<dyn Fn() + Send + Sync>,
    /// Without an accessor the subscriber has no interest at all.
    get_subject: Option<SubjectFn>,
}

impl Subscriber {
    /// Create a new subscriber.
    pub fn new<F>(callback: F, get_subject: Option<SubjectFn>) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            id: SubscriberId::new(),
            callback: Box::new(callback),
            get_subject,
        }
    }

    /// Get the subscriber's unique ID.
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// The subject this subscriber currently cares about, if any.
    pub fn subject(&self) -> Option<SubscriptionSubject> {
        self.get_subject.as_ref().and_then(|get_subject| get_subject())
    }

    /// Notify the subscriber that something it cares about changed.
    pub fn notify(&self) {
        (self.callback)();
    }
}

impl std::fmt::Debug for Subscriber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscriber")
            .field("id", &self.id)
            .field("has_subject", &self.get_subject.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::Scope;
    use std::sync::atomic::{AtomicBool, AtomicI32};
    use std::sync::Arc;

    #[test]
    fn each_subscriber_gets_its_own_id() {
        let first = Subscriber::new(|| {}, None);
        let second = Subscriber::new(|| {}, None);

        assert_ne!(first.id(), second.id());
        assert_eq!(first.id(), first.id());
    }

    #[test]
    fn notify_runs_callback_every_time() {
        let calls = Arc::new(AtomicI32::new(0));
        let counter = calls.clone();
        let subscriber = Subscriber::new(
            move || {
                counter.fetch_add(1, Ordering::SeqCst);
            },
            Some(Box::new(|| Some(SubscriptionSubject::new().error(Scope::All)))),
        );

        subscriber.notify();
        subscriber.notify();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn subject_is_recomputed_on_each_call() {
        let mounted = Arc::new(AtomicBool::new(false));
        let flag = mounted.clone();
        let subscriber = Subscriber::new(
            || {},
            Some(Box::new(move || {
                let names = if flag.load(Ordering::SeqCst) {
                    Scope::names(["email", "name"])
                } else {
                    Scope::names(["email"])
                };
                Some(SubscriptionSubject::new().error(names))
            })),
        );

        assert_eq!(subscriber.subject().unwrap().error, Some(Scope::names(["email"])));

        mounted.store(true, Ordering::SeqCst);
        assert_eq!(
            subscriber.subject().unwrap().error,
            Some(Scope::names(["email", "name"]))
        );
    }

    #[test]
    fn missing_accessor_means_no_subject() {
        let subscriber = Subscriber::new(|| {}, None);
        assert!(subscriber.subject().is_none());
        assert!(format!("{subscriber:?}").contains("has_subject: false"));
    }
}
