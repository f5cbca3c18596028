//! # clawprompt core
//!
//! Domain types, collaborator traits, and error definitions for clawprompt.
//! This crate performs **no I/O** — it defines the message model handed to
//! an LLM chat API and the narrow interfaces the context builder consumes.
//!
//! ## Design Philosophy
//!
//! Memory and skills are defined as traits here. Implementations live in
//! their respective crates. This enables:
//! - Swapping the on-disk stores for fakes in tests
//! - Keeping the context builder ignorant of storage formats
//! - Clean dependency graph (all crates depend inward on core)

pub mod error;
pub mod message;
pub mod memory;
pub mod skills;

// Re-export key types at crate root for ergonomics
pub use error::{Error, MemoryError, Result, SkillError};
pub use message::{ContentBlock, FunctionCall, ImageUrl, Message, MessageContent, Role, ToolCall};
pub use memory::MemoryContext;
pub use skills::{SkillCatalog, SkillEntry, SkillSource};
