//! Session State Synchronizer
//!
//! Maintains a read-only, always-current snapshot of the session derived
//! from three store keys, and publishes it to subscribers through a watch
//! channel. Recomputation is triggered by store notifications, by the
//! fallback poll, or by an explicit `refresh()`.
//!
//! The synchronizer itself never writes to the store; sign-in/sign-out use
//! cases own the write path.
//!
//! Recompute publishes the snapshot and its last-seen raw values as one
//! unit (the watch sender serializes that section across threads). The
//! fallback poll compares the store against the last-seen values, so when
//! two racing recomputes publish out of order, the losing pair diverges
//! from the store and the next poll tick recomputes.

use std::sync::{Arc, Mutex, Weak};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::application::config::SessionConfig;
use crate::domain::entity::snapshot::SessionSnapshot;
use crate::domain::store::{SessionStore, SubscriptionId};
use crate::domain::value_object::role::Role;

/// Raw values of the two security-relevant keys as of the last recompute.
/// The fallback poll compares against these to detect out-of-band writes.
#[derive(Default)]
struct LastSeen {
    token: Option<String>,
    role: Option<String>,
}

struct Inner {
    store: Arc<dyn SessionStore>,
    config: SessionConfig,
    tx: watch::Sender<SessionSnapshot>,
    last_seen: Mutex<LastSeen>,
}

impl Inner {
    /// Absence-safe store read: errors are logged and demoted to "absent",
    /// which downstream normalization turns into a logged-out view.
    fn read_raw(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Store read failed, treating as absent");
                None
            }
        }
    }

    /// Re-read the three keys, recompute the snapshot, publish on change.
    fn recompute(&self) -> SessionSnapshot {
        let token_raw = self.read_raw(&self.config.token_key);
        let role_raw = self.read_raw(&self.config.role_key);
        let username_raw = self.read_raw(&self.config.username_key);

        let snapshot = SessionSnapshot::from_raw(
            token_raw.as_deref(),
            role_raw.as_deref(),
            username_raw.as_deref(),
        );

        // Invariant: last_seen always describes the published snapshot, not
        // the freshest store read. Both are written inside the serialized
        // send closure so a racing recompute can never pair a stale publish
        // with fresh last_seen values, which would blind the poll for good.
        let changed = self.tx.send_if_modified(|current| {
            if let Ok(mut seen) = self.last_seen.lock() {
                seen.token = token_raw.clone();
                seen.role = role_raw.clone();
            }
            if *current == snapshot {
                false
            } else {
                *current = snapshot.clone();
                true
            }
        });

        if changed {
            tracing::debug!(
                authenticated = snapshot.is_authenticated,
                role = ?snapshot.role,
                "Session snapshot updated"
            );
        }

        snapshot
    }

    /// One fallback poll tick: recompute only if token or role changed
    /// underneath us since the last recompute.
    fn poll_once(&self) {
        let token_raw = self.read_raw(&self.config.token_key);
        let role_raw = self.read_raw(&self.config.role_key);

        let stale = match self.last_seen.lock() {
            Ok(seen) => seen.token != token_raw || seen.role != role_raw,
            Err(_) => true,
        };

        if stale {
            tracing::debug!("Out-of-band session change detected by fallback poll");
            self.recompute();
        }
    }
}

/// Reactive view over the session store
///
/// Dropping the synchronizer tears down the store subscription and the poll
/// task as a single unit; further store mutations publish nothing.
pub struct SessionSynchronizer {
    inner: Arc<Inner>,
    subscription: SubscriptionId,
    poll_task: Option<JoinHandle<()>>,
}

impl SessionSynchronizer {
    /// Create a synchronizer over `store` and perform the first read.
    ///
    /// The published value starts as the loading placeholder and flips to a
    /// real snapshot before this constructor returns, so `is_loading` is a
    /// one-tick transition. Requires a tokio runtime when the fallback poll
    /// is enabled.
    pub fn new(store: Arc<dyn SessionStore>, config: SessionConfig) -> Self {
        let (tx, _rx) = watch::channel(SessionSnapshot::loading());
        let inner = Arc::new(Inner {
            store: store.clone(),
            config,
            tx,
            last_seen: Mutex::new(LastSeen::default()),
        });

        // Same-process mutation signal: the store notifies us directly.
        let weak: Weak<Inner> = Arc::downgrade(&inner);
        let subscription = store.subscribe(Arc::new(move |key: &str| {
            if let Some(inner) = weak.upgrade() {
                if inner.config.is_session_key(key) {
                    inner.recompute();
                }
            }
        }));

        inner.recompute();

        // Fallback for backends mutated without an in-process notification.
        if let Some(poll_ms) = inner.config.poll_interval_ms() {
            tracing::debug!(poll_ms, "Fallback poll enabled");
        }
        let poll_task = inner.config.poll_interval.map(|every| {
            let weak = Arc::downgrade(&inner);
            tokio::spawn(async move {
                let mut ticker = tokio::time::interval(every);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    ticker.tick().await;
                    let Some(inner) = weak.upgrade() else { break };
                    inner.poll_once();
                }
            })
        });

        Self {
            inner,
            subscription,
            poll_task,
        }
    }

    /// Synchronous read of the current snapshot
    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.tx.borrow().clone()
    }

    /// Force an immediate re-read of the store.
    ///
    /// Returns the fresh snapshot within the same call; consumers that need
    /// read-your-write semantics after mutating the store use this instead
    /// of waiting for a notification or poll tick.
    pub fn refresh(&self) -> SessionSnapshot {
        self.inner.recompute()
    }

    /// Subscription handle for reactive consumers.
    ///
    /// The receiver observes every published snapshot change and reports
    /// closure once the synchronizer is dropped.
    pub fn watch(&self) -> watch::Receiver<SessionSnapshot> {
        self.inner.tx.subscribe()
    }

    /// True iff the current role equals `required` exactly
    pub fn has_role(&self, required: Role) -> bool {
        self.snapshot().has_role(required)
    }

    pub fn is_admin(&self) -> bool {
        self.snapshot().is_admin()
    }

    pub fn is_agent(&self) -> bool {
        self.snapshot().is_agent()
    }

    pub fn is_client(&self) -> bool {
        self.snapshot().is_client()
    }

    pub fn is_agent_or_admin(&self) -> bool {
        self.snapshot().is_agent_or_admin()
    }
}

impl Drop for SessionSynchronizer {
    fn drop(&mut self) {
        self.inner.store.unsubscribe(self.subscription);
        if let Some(task) = self.poll_task.take() {
            task.abort();
        }
    }
}
