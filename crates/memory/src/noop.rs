//! No-op memory — disables the `# Memory` prompt section entirely.

use clawprompt_core::error::MemoryError;
use clawprompt_core::memory::MemoryContext;

/// A memory collaborator that never has anything to say.
pub struct NoopMemory;

impl MemoryContext for NoopMemory {
    fn memory_context(&self) -> Result<String, MemoryError> {
        Ok(String::new())
    }
}
