//! Skill discovery and rendering for clawprompt.
//!
//! Skills live in `<workspace>/skills/<name>/SKILL.md`, optionally backed by
//! a builtin directory with the same layout. Each file may start with a YAML
//! frontmatter block declaring a description, an `always` flag, and runtime
//! requirements (binaries on `PATH`, environment variables).

pub mod document;
pub mod loader;
pub mod requirements;

pub use document::{RuntimeMeta, SkillDocument, SkillFrontmatter};
pub use loader::{SKILL_FILE, SKILLS_DIR, SkillsLoader};
pub use requirements::{Requirements, has_binary};
