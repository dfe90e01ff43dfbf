//! Entity Module

pub mod snapshot;

pub use snapshot::SessionSnapshot;
