//! In-Memory Store Implementation

use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::store::{SessionStore, StoreObserver, SubscriptionId};
use crate::error::{StoreError, StoreResult};
use crate::infra::observers::ObserverSet;

/// Process-local store backed by a `HashMap`.
///
/// The implementation of choice for tests and for embedders that keep the
/// session in memory only. All handles cloning an `Arc` of this store see
/// each other's writes immediately through the built-in notification.
#[derive(Default)]
pub struct MemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
    observers: ObserverSet,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let changed = {
            let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
            if entries.get(key).map(String::as_str) == Some(value) {
                false
            } else {
                entries.insert(key.to_string(), value.to_string());
                true
            }
        };

        if changed {
            self.observers.notify(key);
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let existed = {
            let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
            entries.remove(key).is_some()
        };

        if existed {
            self.observers.notify(key);
        }
        Ok(())
    }

    fn subscribe(&self, observer: StoreObserver) -> SubscriptionId {
        self.observers.insert(observer)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.observers.remove(id);
    }
}
