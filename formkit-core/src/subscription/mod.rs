//! Subscriptions
//!
//! Observers register with a form's [`SubscriptionRegistry`] and declare,
//! through a lazily evaluated [`SubscriptionSubject`], which slices of the
//! context they read. The store consults those subjects on every replace and
//! notifies only the observers whose slices changed.

mod registry;
mod subject;
mod subscriber;

pub use crate::diff::Scope;
pub use registry::{SubscriptionRegistry, Unsubscribe};
pub use subject::SubscriptionSubject;
pub use subscriber::{SubjectFn, Subscriber, SubscriberId};
