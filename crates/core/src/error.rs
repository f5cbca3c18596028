//! Error types for clawprompt.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each collaborator has its own error enum; the context builder
//! propagates them unchanged through [`Error`].

use std::path::PathBuf;
use thiserror::Error;

/// The top-level error type for all context assembly operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Collaborator errors ---
    #[error("Memory error: {0}")]
    Memory(#[from] MemoryError),

    #[error("Skill error: {0}")]
    Skill(#[from] SkillError),

    // --- Filesystem faults while reading workspace text ---
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl Error {
    /// Wrap an I/O error with the path that produced it.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

#[derive(Debug, Error)]
pub enum MemoryError {
    #[error("Failed to read memory file {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("Failed to write memory file {path}: {reason}")]
    Write { path: PathBuf, reason: String },
}

#[derive(Debug, Error)]
pub enum SkillError {
    #[error("Failed to read skill file {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("Invalid frontmatter in {path}: {reason}")]
    InvalidFrontmatter { path: PathBuf, reason: String },

    #[error("Failed to scan skills directory {path}: {reason}")]
    Scan { path: PathBuf, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_displays_path() {
        let err = Error::io(
            "/ws/AGENTS.md",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let text = err.to_string();
        assert!(text.contains("/ws/AGENTS.md"));
        assert!(text.contains("denied"));
    }

    #[test]
    fn skill_error_converts_into_top_level() {
        let err: Error = SkillError::InvalidFrontmatter {
            path: PathBuf::from("skills/git/SKILL.md"),
            reason: "unterminated block".into(),
        }
        .into();
        assert!(matches!(err, Error::Skill(_)));
        assert!(err.to_string().contains("unterminated block"));
    }
}
