//! Domain Layer
//!
//! Contains value objects, the session snapshot entity, and the store trait.

pub mod entity;
pub mod store;
pub mod value_object;

// Re-exports
pub use entity::snapshot::SessionSnapshot;
pub use store::{SessionStore, StoreObserver, SubscriptionId};
pub use value_object::{role::Role, token::Token, username::Username};
