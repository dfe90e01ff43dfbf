//! Infrastructure Layer
//!
//! Store implementations: in-memory for tests and single-process embedders,
//! file-backed for persistence shared across processes.

pub mod file;
pub mod memory;
mod observers;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;
