//! Memory store implementations for clawprompt.

pub mod noop;
pub mod file_backend;

pub use noop::NoopMemory;
pub use file_backend::MemoryStore;
