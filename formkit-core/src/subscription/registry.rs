//! Subscription Registry
//!
//! The ordered set of subscribers belonging to one form instance.
//!
//! The registry is owned by its form; there is no process-wide list. An
//! [`Unsubscribe`] handle only holds a weak reference, so handles kept by
//! rendering code never keep a discarded form alive.

use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use super::subscriber::{SubjectFn, Subscriber, SubscriberId};

type Subscribers = RwLock<Vec<Arc<Subscriber>>>;

/// The set of subscribers of one form.
#[derive(Debug, Default)]
pub struct SubscriptionRegistry {
    subscribers: Arc<Subscribers>,
}

impl SubscriptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber.
    ///
    /// Returns a handle that removes exactly this subscriber when
    /// [`Unsubscribe::unsubscribe`] is called. Dropping the handle does not
    /// unsubscribe.
    pub fn subscribe<F>(&self, callback: F, get_subject: Option<SubjectFn>) -> Unsubscribe
    where
        F: Fn() + Send + Sync + 'static,
    {
        let subscriber = Arc::new(Subscriber::new(callback, get_subject));
        let id = subscriber.id();
        self.subscribers.write().push(subscriber);

        tracing::trace!(?id, "subscriber registered");

        Unsubscribe {
            id,
            subscribers: Arc::downgrade(&self.subscribers),
        }
    }

    /// The current subscribers, in registration order.
    ///
    /// Notification iterates over this copy, so callbacks are free to
    /// subscribe or unsubscribe while being notified.
    pub fn snapshot(&self) -> Vec<Arc<Subscriber>> {
        self.subscribers.read().clone()
    }

    /// Get the number of subscribers.
    pub fn len(&self) -> usize {
        self.subscribers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.read().is_empty()
    }
}

/// Handle returned by [`SubscriptionRegistry::subscribe`].
#[derive(Debug, Clone)]
pub struct Unsubscribe {
    id: SubscriberId,
    subscribers: Weak<Subscribers>,
}

impl Unsubscribe {
    /// The ID of the subscriber this handle removes.
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Remove the subscriber. Calling this more than once is a no-op.
    pub fn unsubscribe(&self) {
        let Some(subscribers) = self.subscribers.upgrade() else {
            return;
        };

        let mut subscribers = subscribers.write();
        let before = subscribers.len();
        subscribers.retain(|subscriber| subscriber.id() != self.id);

        if subscribers.len() != before {
            tracing::trace!(id = ?self.id, "subscriber removed");
        }
    }
}
