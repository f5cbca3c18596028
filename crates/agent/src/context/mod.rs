//! Prompt section builders and the orchestrating [`ContextBuilder`].
//!
//! # Sections (fixed order)
//!
//! | Section | Source | Omitted when |
//! |---------|--------|--------------|
//! | Identity | time, runtime, workspace paths | never |
//! | Bootstrap | `AGENTS.md`, `SOUL.md`, `USER.md` | no file exists |
//! | `# Memory` | memory collaborator | summary is empty |
//! | Skills | skills collaborator | nothing to disclose |
//!
//! Sections are joined with [`SECTION_SEPARATOR`].

pub mod bootstrap;
pub mod builder;
pub mod identity;
pub mod media;
pub mod turns;

pub use bootstrap::{BOOTSTRAP_FILES, load_bootstrap};
pub use builder::{ContextBuilder, ContextOptions, FILE_READ_TOOL, SECTION_SEPARATOR, TurnInput};
pub use identity::{Clock, build_identity};
pub use media::{encode_user_content, guess_mime};
pub use turns::{append_assistant_turn, append_tool_result};
