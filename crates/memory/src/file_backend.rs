//! File-based memory store — `MEMORY.md` and `HISTORY.md` in the workspace.
//!
//! Layout under the workspace root:
//!
//! - `memory/MEMORY.md` — long-term facts, injected into every system prompt
//! - `memory/HISTORY.md` — append-only event log, grep-searchable by the agent
//!
//! Both files are plain markdown so they stay human-editable.

use clawprompt_core::error::MemoryError;
use clawprompt_core::memory::MemoryContext;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory under the workspace holding memory files.
pub const MEMORY_DIR: &str = "memory";
pub const MEMORY_FILE: &str = "MEMORY.md";
pub const HISTORY_FILE: &str = "HISTORY.md";

/// A workspace-backed long-term memory store.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    memory_file: PathBuf,
    history_file: PathBuf,
}

impl MemoryStore {
    /// Create a store rooted at `<workspace>/memory/`.
    ///
    /// Nothing is created on disk until the first write.
    pub fn new(workspace: &Path) -> Self {
        let dir = workspace.join(MEMORY_DIR);
        Self {
            memory_file: dir.join(MEMORY_FILE),
            history_file: dir.join(HISTORY_FILE),
        }
    }

    pub fn memory_file(&self) -> &Path {
        &self.memory_file
    }

    pub fn history_file(&self) -> &Path {
        &self.history_file
    }

    /// Read long-term memory. An absent file reads as empty.
    pub fn read_long_term(&self) -> Result<String, MemoryError> {
        if !self.memory_file.exists() {
            return Ok(String::new());
        }
        std::fs::read_to_string(&self.memory_file).map_err(|e| MemoryError::Read {
            path: self.memory_file.clone(),
            reason: e.to_string(),
        })
    }

    /// Replace long-term memory with `content`.
    pub fn write_long_term(&self, content: &str) -> Result<(), MemoryError> {
        self.ensure_dir(&self.memory_file)?;
        std::fs::write(&self.memory_file, content).map_err(|e| MemoryError::Write {
            path: self.memory_file.clone(),
            reason: e.to_string(),
        })?;
        debug!(path = %self.memory_file.display(), bytes = content.len(), "Long-term memory written");
        Ok(())
    }

    /// Append an entry to the history log, separated by a blank line.
    pub fn append_history(&self, entry: &str) -> Result<(), MemoryError> {
        self.ensure_dir(&self.history_file)?;
        let write_err = |e: std::io::Error| MemoryError::Write {
            path: self.history_file.clone(),
            reason: e.to_string(),
        };

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.history_file)
            .map_err(write_err)?;
        write!(file, "{}\n\n", entry.trim_end()).map_err(write_err)?;
        Ok(())
    }

    fn ensure_dir(&self, file: &Path) -> Result<(), MemoryError> {
        if let Some(parent) = file.parent() {
            std::fs::create_dir_all(parent).map_err(|e| MemoryError::Write {
                path: parent.to_path_buf(),
                reason: format!("Failed to create memory directory: {e}"),
            })?;
        }
        Ok(())
    }
}

impl MemoryContext for MemoryStore {
    fn memory_context(&self) -> Result<String, MemoryError> {
        let long_term = self.read_long_term()?;
        if long_term.is_empty() {
            return Ok(String::new());
        }
        Ok(format!("## Long-term Memory\n{long_term}"))
    }
}
