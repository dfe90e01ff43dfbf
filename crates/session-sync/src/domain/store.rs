//! Session Store Trait
//!
//! The injectable boundary between the synchronizer and whatever actually
//! holds the three session keys. Change notification is baked into the
//! store itself: `set` and `remove` notify observers, so in-process writers
//! never need to raise a separate "state changed" signal.
//!
//! The key space is free-form strings. Embedders may keep unrelated data in
//! the same store; the synchronizer filters notifications down to the keys
//! it watches.

use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::StoreResult;

/// Callback invoked by a store after one of its keys changed.
/// Receives the mutated key.
pub type StoreObserver = Arc<dyn Fn(&str) + Send + Sync>;

/// Handle identifying a registered observer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shared key-value store holding the session fields
///
/// Contract for implementations:
/// - `set` / `remove` notify subscribed observers *after* the write is
///   visible to `get`, and only when the stored value actually changed.
/// - Observers must be invoked outside any internal data lock; an observer
///   is allowed to call `get` re-entrantly.
/// - No cross-key atomicity is promised. A writer updating several keys
///   produces one notification per changed key, and a reader may observe
///   the intermediate states.
pub trait SessionStore: Send + Sync {
    /// Read the current value for `key`
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write `value` under `key`
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove `key` if present
    fn remove(&self, key: &str) -> StoreResult<()>;

    /// Register an observer for key mutations
    fn subscribe(&self, observer: StoreObserver) -> SubscriptionId;

    /// Drop a previously registered observer. Unknown ids are ignored.
    fn unsubscribe(&self, id: SubscriptionId);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_ids_are_unique() {
        let a = SubscriptionId::new();
        let b = SubscriptionId::new();
        assert_ne!(a, b);
    }
}
