//! Session State Synchronizer
//!
//! Clean Architecture structure:
//! - `domain/` - Value objects, session snapshot, store trait
//! - `application/` - Synchronizer, admission guards, sign-in/out use cases
//! - `infra/` - Store implementations (in-memory, file-backed)
//!
//! ## Features
//! - Reactive session snapshots over an injectable key-value store
//! - Role-based admission decisions (Admin / Agent / Client)
//! - Store-driven change notification with a configurable fallback poll
//! - Absence-safe normalization: malformed stored values demote to a
//!   logged-out view instead of erroring
//!
//! ## Consistency Model
//! - The store is a shared mutable resource with last-write-wins semantics
//!   and no cross-key atomicity; a partial sign-in write is tolerated
//! - Updates reach subscribers with the store notification, or within one
//!   poll interval for backends mutated out-of-band
//! - Consumers needing read-your-write semantics call `refresh()`

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::config::{DEFAULT_POLL_INTERVAL, SessionConfig};
pub use application::guard::{
    AccessRequirement, ContentDecision, RouteDecision, admit_content, admit_route,
};
pub use application::sign_in::{SignInInput, SignInUseCase};
pub use application::sign_out::SignOutUseCase;
pub use application::synchronizer::SessionSynchronizer;
pub use domain::entity::snapshot::SessionSnapshot;
pub use domain::store::{SessionStore, StoreObserver, SubscriptionId};
pub use domain::value_object::role::Role;
pub use domain::value_object::token::Token;
pub use domain::value_object::username::Username;
pub use error::{StoreError, StoreResult};
pub use infra::file::FileSessionStore;
pub use infra::memory::MemorySessionStore;
