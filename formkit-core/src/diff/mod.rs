//! Diff Engine
//!
//! Decides whether any name in a scope changed between two snapshots of a
//! name-keyed mapping.
//!
//! # Memoization
//!
//! A single context replace is checked against every subscriber, and many
//! subscribers ask about the same names. Each name's comparison result is
//! recorded in a [`DiffCache`] so that it is computed at most once per
//! replace. A cache must not outlive the pair of snapshots it was filled
//! from; the store creates fresh caches for every replace.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;

/// Which names a subscriber is interested in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Every name present in either snapshot.
    All,
    /// Only the listed names.
    Names(HashSet<String>),
}

impl Scope {
    /// Restrict interest to the given names.
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Names(names.into_iter().map(Into::into).collect())
    }
}

/// Per-name comparison results for one pair of snapshots.
#[derive(Debug, Default)]
pub struct DiffCache {
    results: HashMap<String, bool>,
}

impl DiffCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of names compared so far.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    fn changed<F>(&mut self, name: &str, compare: F) -> bool
    where
        F: FnOnce() -> bool,
    {
        if let Some(&changed) = self.results.get(name) {
            return changed;
        }

        let changed = compare();
        self.results.insert(name.to_string(), changed);
        changed
    }
}

/// Whether any name in `scope` differs between `prev` and `next`.
///
/// `differs` receives the entry for a name from each snapshot (either may be
/// absent) and returns true when they differ. With [`Scope::All`] the
/// candidates are the union of both key sets, so additions and removals
/// count as changes whenever `differs` says so. Stops at the first change.
pub fn should_notify<V, F>(
    prev: &IndexMap<String, V>,
    next: &IndexMap<String, V>,
    differs: F,
    cache: &mut DiffCache,
    scope: &Scope,
) -> bool
where
    F: Fn(Option<&V>, Option<&V>) -> bool,
{
    let mut check = |name: &str| cache.changed(name, || differs(prev.get(name), next.get(name)));

    match scope {
        Scope::All => prev
            .keys()
            .chain(next.keys().filter(|key| !prev.contains_key(key.as_str())))
            .any(|key| check(key)),
        Scope::Names(names) => names.iter().any(|name| check(name)),
    }
}
