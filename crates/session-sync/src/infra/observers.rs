//! Observer bookkeeping shared by store implementations

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::store::{StoreObserver, SubscriptionId};

/// Registered observers keyed by subscription id.
///
/// Notification clones the observer list out of the lock before invoking
/// anything, so observers may re-enter the store (read, subscribe) without
/// deadlocking.
#[derive(Default)]
pub(crate) struct ObserverSet {
    inner: Mutex<HashMap<SubscriptionId, StoreObserver>>,
}

impl ObserverSet {
    pub(crate) fn insert(&self, observer: StoreObserver) -> SubscriptionId {
        let id = SubscriptionId::new();
        match self.inner.lock() {
            Ok(mut observers) => {
                observers.insert(id, observer);
            }
            Err(_) => {
                tracing::error!("Observer registry poisoned, subscription dropped");
            }
        }
        id
    }

    pub(crate) fn remove(&self, id: SubscriptionId) {
        if let Ok(mut observers) = self.inner.lock() {
            observers.remove(&id);
        }
    }

    pub(crate) fn notify(&self, key: &str) {
        let observers: Vec<StoreObserver> = match self.inner.lock() {
            Ok(observers) => observers.values().cloned().collect(),
            Err(_) => {
                tracing::error!("Observer registry poisoned, notification dropped");
                return;
            }
        };

        for observer in observers {
            observer(key);
        }
    }
}
