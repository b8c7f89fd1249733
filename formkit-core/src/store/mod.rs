//! Context Store
//!
//! Holds the current [`Context`] of a form and the form's subscribers.
//!
//! # How a replace works
//!
//! 1. The new snapshot is installed. From here on `get_context` returns it,
//!    including from inside subscriber callbacks.
//!
//! 2. The previous snapshot is kept aside for comparison until every
//!    subscriber has been evaluated.
//!
//! 3. For each subscriber, its subject is evaluated against four
//!    independent diffs (errors, list keys, default values, validated
//!    flags). The callback runs once if any requested slice changed.
//!
//! No lock is held while callbacks run. A callback that panics leaves the
//! new context installed.

use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

use crate::diff::{should_notify, DiffCache};
use crate::state::{errors_differ, validation_message, Context};
use crate::subscription::{SubjectFn, SubscriptionRegistry, SubscriptionSubject, Unsubscribe};

/// The shared, atomically replaced context of one form.
#[derive(Debug)]
pub struct ContextStore {
    context: RwLock<Arc<Context>>,
    registry: SubscriptionRegistry,
}

impl ContextStore {
    /// Create a store holding `initial`, with no subscribers.
    pub fn new(initial: Context) -> Self {
        Self {
            context: RwLock::new(Arc::new(initial)),
            registry: SubscriptionRegistry::new(),
        }
    }

    /// The current snapshot.
    pub fn get_context(&self) -> Arc<Context> {
        Arc::clone(&self.context.read())
    }

    /// Register a subscriber. See [`SubscriptionRegistry::subscribe`].
    pub fn subscribe<F>(&self, callback: F, get_subject: Option<SubjectFn>) -> Unsubscribe
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.registry.subscribe(callback, get_subject)
    }

    /// Install `next` and notify the subscribers it affects.
    ///
    /// Returns the number of subscribers notified.
    pub fn replace(&self, next: Context) -> usize {
        let next = Arc::new(next);
        let prev = std::mem::replace(&mut *self.context.write(), Arc::clone(&next));

        let subscribers = self.registry.snapshot();
        let mut diff = ContextDiff::new(&prev, &next);
        let mut notified = 0;

        for subscriber in &subscribers {
            let Some(subject) = subscriber.subject().filter(|subject| !subject.is_empty()) else {
                continue;
            };

            if diff.affects(&subject) {
                subscriber.notify();
                notified += 1;
            }
        }

        tracing::debug!(notified, subscribers = subscribers.len(), "context replaced");
        notified
    }

    /// Get the number of subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.registry.len()
    }
}

/// The four per-slice diffs between two snapshots, memoized for the
/// duration of a single replace.
struct ContextDiff<'a> {
    prev: &'a Context,
    next: &'a Context,
    error: DiffCache,
    list_keys: DiffCache,
    default_value: DiffCache,
    validated: DiffCache,
}

impl<'a> ContextDiff<'a> {
    fn new(prev: &'a Context, next: &'a Context) -> Self {
        Self {
            prev,
            next,
            error: DiffCache::new(),
            list_keys: DiffCache::new(),
            default_value: DiffCache::new(),
            validated: DiffCache::new(),
        }
    }

    fn affects(&mut self, subject: &SubscriptionSubject) -> bool {
        let (prev, next) = (self.prev, self.next);

        if let Some(scope) = &subject.error {
            if should_notify(&prev.error, &next.error, errors_differ, &mut self.error, scope) {
                return true;
            }
        }

        if let Some(scope) = &subject.key {
            if should_notify(
                &prev.state.list_keys,
                &next.state.list_keys,
                keys_differ,
                &mut self.list_keys,
                scope,
            ) {
                return true;
            }
        }

        if let Some(scope) = &subject.default_value {
            if should_notify(
                &prev.metadata.default_value,
                &next.metadata.default_value,
                |a: Option<&Value>, b: Option<&Value>| a != b,
                &mut self.default_value,
                scope,
            ) {
                return true;
            }
        }

        if let Some(scope) = &subject.validated {
            if should_notify(
                &prev.state.validated,
                &next.state.validated,
                |a: Option<&bool>, b: Option<&bool>| {
                    a.copied().unwrap_or(false) != b.copied().unwrap_or(false)
                },
                &mut self.validated,
                scope,
            ) {
                return true;
            }
        }

        false
    }
}

fn keys_differ(prev: Option<&Vec<String>>, next: Option<&Vec<String>>) -> bool {
    let text = |keys: Option<&Vec<String>>| keys.map(|keys| validation_message(keys)).unwrap_or_default();
    text(prev) != text(next)
}
