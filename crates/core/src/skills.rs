//! Skills trait — the catalog the context builder discloses to the model.
//!
//! A skill is a named, file-backed capability description. "Always-load"
//! skills are inlined in full; every other skill is disclosed by name and
//! summary only, and the model reads its definition file on demand.

use crate::error::SkillError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where a skill definition was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillSource {
    /// `<workspace>/skills/<name>/SKILL.md`
    Workspace,
    /// Skills shipped alongside the binary
    Builtin,
}

/// A skill known to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub path: PathBuf,
    pub source: SkillSource,
}

/// The skills collaborator consumed by the context builder.
///
/// Implementations: `SkillsLoader` (filesystem), test fakes.
pub trait SkillCatalog: Send + Sync {
    /// Skills offered to the model, in catalog order.
    fn list_skills(&self) -> std::result::Result<Vec<SkillEntry>, SkillError>;

    /// Names of skills whose full content is always injected.
    fn always_load_skills(&self) -> std::result::Result<Vec<String>, SkillError>;

    /// Rendered full content of the named skills. Empty when `names` is empty.
    fn load_skills_for_context(&self, names: &[String]) -> std::result::Result<String, SkillError>;

    /// Human-readable summary of all skills. Empty when there are none.
    fn skills_summary(&self) -> std::result::Result<String, SkillError>;
}
