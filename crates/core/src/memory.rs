//! Memory trait — the long-term memory summary injected into the prompt.
//!
//! The context builder knows nothing about how memory is stored. It asks
//! for a rendered summary and includes it under `# Memory` when non-empty.

use crate::error::MemoryError;

/// Supplies the long-term memory block for the system prompt.
///
/// Implementations: file-backed `MEMORY.md` store, no-op.
pub trait MemoryContext: Send + Sync {
    /// Rendered memory text, or an empty string when there is nothing to show.
    fn memory_context(&self) -> std::result::Result<String, MemoryError>;
}
