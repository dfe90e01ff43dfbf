//! Sign Out Use Case
//!
//! Removes the three session keys.

use std::sync::Arc;

use crate::application::config::SessionConfig;
use crate::domain::store::SessionStore;
use crate::error::StoreResult;

/// Sign out use case
pub struct SignOutUseCase {
    store: Arc<dyn SessionStore>,
    config: Arc<SessionConfig>,
}

impl SignOutUseCase {
    pub fn new(store: Arc<dyn SessionStore>, config: Arc<SessionConfig>) -> Self {
        Self { store, config }
    }

    /// Clear the session.
    ///
    /// The token goes first: if a later removal fails, the partial state is
    /// already unauthenticated.
    pub fn execute(&self) -> StoreResult<()> {
        self.store.remove(&self.config.token_key)?;
        self.store.remove(&self.config.role_key)?;
        self.store.remove(&self.config.username_key)?;

        tracing::info!("Session cleared");
        Ok(())
    }
}
