//! Sign In Use Case
//!
//! Writes the three session keys. The store's own change notification
//! replaces any separate "auth state changed" signal a writer would
//! otherwise have to raise.

use std::sync::Arc;

use crate::application::config::SessionConfig;
use crate::domain::store::SessionStore;
use crate::domain::value_object::role::Role;
use crate::error::StoreResult;

/// Sign in input
#[derive(Debug, Clone)]
pub struct SignInInput {
    pub token: String,
    pub role: Role,
    pub username: String,
}

/// Sign in use case
pub struct SignInUseCase {
    store: Arc<dyn SessionStore>,
    config: Arc<SessionConfig>,
}

impl SignInUseCase {
    pub fn new(store: Arc<dyn SessionStore>, config: Arc<SessionConfig>) -> Self {
        Self { store, config }
    }

    /// Establish the session by writing token, role, and username.
    ///
    /// The store offers no cross-key atomicity, so an error part-way leaves
    /// a partial session behind. That state is tolerated: absence-safe
    /// normalization on the read side demotes whatever is missing.
    pub fn execute(&self, input: &SignInInput) -> StoreResult<()> {
        self.store.set(&self.config.token_key, &input.token)?;
        self.store.set(&self.config.role_key, input.role.code())?;
        self.store.set(&self.config.username_key, &input.username)?;

        tracing::info!(role = %input.role, "Session established");
        Ok(())
    }
}
