//! Store Error Types
//!
//! Only store backends can fail (I/O, corrupt persisted payload, poisoned
//! lock). Normalization of stored values never fails: a malformed value is
//! demoted to "absent" by the value objects, and the synchronizer surfaces
//! no error to its callers.

use thiserror::Error;

/// Store-specific result type alias
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by session store backends
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem access failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted payload could not be parsed
    #[error("Malformed store payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A store lock was poisoned by a panicking writer
    #[error("Store lock poisoned")]
    Poisoned,
}
