//! Application Layer
//!
//! The synchronizer, admission guards, and session write use cases.

pub mod config;
pub mod guard;
pub mod sign_in;
pub mod sign_out;
pub mod synchronizer;

// Re-exports
pub use config::SessionConfig;
pub use guard::{AccessRequirement, ContentDecision, RouteDecision, admit_content, admit_route};
pub use sign_in::{SignInInput, SignInUseCase};
pub use sign_out::SignOutUseCase;
pub use synchronizer::SessionSynchronizer;
