//! File-Backed Store Implementation
//!
//! Persists the key-value map as a JSON object. Writes go through a temp
//! file plus rename so a crash mid-write never leaves a truncated payload.
//!
//! Cross-process visibility: `get` compares the file's modification time
//! against the last load and reloads when another process wrote the file,
//! notifying observers of every key whose value changed. Writers in *this*
//! process are seen immediately through the in-process notification; the
//! mtime check only covers external writers, and its resolution is bounded
//! by the filesystem timestamp granularity.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use std::time::SystemTime;

use crate::domain::store::{SessionStore, StoreObserver, SubscriptionId};
use crate::error::{StoreError, StoreResult};
use crate::infra::observers::ObserverSet;

struct FileState {
    entries: HashMap<String, String>,
    /// Modification time of the file as of the last load or persist
    modified: Option<SystemTime>,
}

/// Persistent store backed by a JSON file
pub struct FileSessionStore {
    path: PathBuf,
    state: RwLock<FileState>,
    observers: ObserverSet,
}

impl FileSessionStore {
    /// Open a store at `path`, loading existing contents if the file exists.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let (entries, modified) = Self::load(&path)?;

        Ok(Self {
            path,
            state: RwLock::new(FileState { entries, modified }),
            observers: ObserverSet::default(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Force a reload from disk, notifying observers of changed keys.
    pub fn reload(&self) -> StoreResult<()> {
        let changed = self.sync_from_disk(true)?;
        for key in &changed {
            self.observers.notify(key);
        }
        Ok(())
    }

    fn load(path: &Path) -> StoreResult<(HashMap<String, String>, Option<SystemTime>)> {
        match fs::metadata(path) {
            Ok(meta) => {
                let text = fs::read_to_string(path)?;
                let entries = serde_json::from_str(&text)?;
                Ok((entries, meta.modified().ok()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok((HashMap::new(), None)),
            Err(e) => Err(e.into()),
        }
    }

    /// Reload from disk if the file changed underneath us.
    /// Returns the keys whose values differ from the cached state.
    fn sync_from_disk(&self, force: bool) -> StoreResult<Vec<String>> {
        let disk_modified = match fs::metadata(&self.path) {
            Ok(meta) => meta.modified().ok(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };

        let mut state = self.state.write().map_err(|_| StoreError::Poisoned)?;
        if !force && disk_modified == state.modified {
            return Ok(Vec::new());
        }

        let (entries, modified) = Self::load(&self.path)?;

        let mut changed: Vec<String> = Vec::new();
        for key in state.entries.keys() {
            if state.entries.get(key) != entries.get(key) {
                changed.push(key.clone());
            }
        }
        for key in entries.keys() {
            if !state.entries.contains_key(key) {
                changed.push(key.clone());
            }
        }

        if !changed.is_empty() {
            tracing::debug!(
                path = %self.path.display(),
                keys = changed.len(),
                "Reloaded session store after external write"
            );
        }

        state.entries = entries;
        state.modified = modified;
        Ok(changed)
    }

    /// Write the full map to disk atomically and return the new mtime.
    fn persist(&self, entries: &HashMap<String, String>) -> StoreResult<Option<SystemTime>> {
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(entries)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(fs::metadata(&self.path)?.modified().ok())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let changed = self.sync_from_disk(false)?;
        for changed_key in &changed {
            self.observers.notify(changed_key);
        }

        let state = self.state.read().map_err(|_| StoreError::Poisoned)?;
        Ok(state.entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        {
            let mut state = self.state.write().map_err(|_| StoreError::Poisoned)?;
            if state.entries.get(key).map(String::as_str) == Some(value) {
                return Ok(());
            }
            state.entries.insert(key.to_string(), value.to_string());
            state.modified = self.persist(&state.entries)?;
        }

        self.observers.notify(key);
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let existed = {
            let mut state = self.state.write().map_err(|_| StoreError::Poisoned)?;
            if state.entries.remove(key).is_none() {
                false
            } else {
                state.modified = self.persist(&state.entries)?;
                true
            }
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
