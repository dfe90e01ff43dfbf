//! Application Configuration
//!
//! Key names and the fallback poll interval for the synchronizer.

use std::time::Duration;

/// Default fallback poll interval (~100ms)
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Session synchronizer configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Store key holding the bearer token
    pub token_key: String,
    /// Store key holding the role code
    pub role_key: String,
    /// Store key holding the display name
    pub username_key: String,
    /// Fallback poll interval, `None` to disable.
    ///
    /// The poll only matters for store backends whose contents can change
    /// without an in-process notification (e.g. a file rewritten by another
    /// process). Stores that fully notify make the poll redundant.
    pub poll_interval: Option<Duration>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: "token".to_string(),
            role_key: "role".to_string(),
            username_key: "username".to_string(),
            poll_interval: Some(DEFAULT_POLL_INTERVAL),
        }
    }
}

impl SessionConfig {
    /// Config with the fallback poll disabled
    pub fn without_poll() -> Self {
        Self {
            poll_interval: None,
            ..Default::default()
        }
    }

    /// Whether `key` is one of the three session keys
    pub fn is_session_key(&self, key: &str) -> bool {
        key == self.token_key || key == self.role_key || key == self.username_key
    }

    /// Poll interval in milliseconds, if enabled
    pub fn poll_interval_ms(&self) -> Option<u64> {
        self.poll_interval.map(|d| d.as_millis() as u64)
    }
}
