//! Filesystem skills loader.
//!
//! Discovery order:
//!
//! 1. **Workspace skills** — `<workspace>/skills/<name>/SKILL.md`
//! 2. **Builtin skills** — `<builtin>/<name>/SKILL.md`, hidden when a
//!    workspace skill has the same name
//!
//! Within each source, skills are sorted by directory name so listings and
//! summaries are deterministic.

use crate::document::SkillDocument;
use clawprompt_core::error::SkillError;
use clawprompt_core::skills::{SkillCatalog, SkillEntry, SkillSource};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Skills directory name under the workspace root.
pub const SKILLS_DIR: &str = "skills";

/// Definition file inside each skill directory.
pub const SKILL_FILE: &str = "SKILL.md";

/// Loads skill definitions from the workspace and an optional builtin dir.
#[derive(Debug, Clone)]
pub struct SkillsLoader {
    workspace_skills: PathBuf,
    builtin_skills: Option<PathBuf>,
}

impl SkillsLoader {
    pub fn new(workspace: &Path, builtin_skills: Option<PathBuf>) -> Self {
        Self {
            workspace_skills: workspace.join(SKILLS_DIR),
            builtin_skills,
        }
    }

    /// List skills, workspace first. With `filter_unavailable`, skills whose
    /// requirements are not met on this host are left out.
    pub fn list_skills(&self, filter_unavailable: bool) -> Result<Vec<SkillEntry>, SkillError> {
        let mut entries = Vec::new();
        let mut seen = HashSet::new();

        scan_dir(&self.workspace_skills, SkillSource::Workspace, &mut entries, &mut seen)?;
        if let Some(builtin) = &self.builtin_skills {
            scan_dir(builtin, SkillSource::Builtin, &mut entries, &mut seen)?;
        }

        if !filter_unavailable {
            return Ok(entries);
        }

        let mut available = Vec::with_capacity(entries.len());
        for entry in entries {
            if self.document_at(&entry.path)?.runtime.requires.is_satisfied() {
                available.push(entry);
            } else {
                debug!(skill = %entry.name, "Skipping skill with unmet requirements");
            }
        }
        Ok(available)
    }

    /// Raw text of a skill file, or `None` if no skill has that name.
    pub fn load_skill(&self, name: &str) -> Result<Option<String>, SkillError> {
        match self.skill_path(name) {
            Some(path) => read_skill(&path).map(Some),
            None => Ok(None),
        }
    }

    /// Parsed skill, or `None` if no skill has that name.
    pub fn document(&self, name: &str) -> Result<Option<SkillDocument>, SkillError> {
        match self.skill_path(name) {
            Some(path) => self.document_at(&path).map(Some),
            None => Ok(None),
        }
    }

    /// Render full skill bodies for inclusion in the prompt.
    ///
    /// Unknown names are skipped. Each skill becomes a `### Skill: <name>`
    /// section; sections are separated by `---` rules.
    pub fn load_skills_for_context(&self, names: &[String]) -> Result<String, SkillError> {
        let mut parts = Vec::new();
        for name in names {
            if let Some(doc) = self.document(name)? {
                parts.push(format!("### Skill: {name}\n\n{}", doc.body));
            }
        }
        Ok(parts.join("\n\n---\n\n"))
    }

    /// Names of available skills flagged `always`.
    pub fn always_skills(&self) -> Result<Vec<String>, SkillError> {
        let mut names = Vec::new();
        for entry in self.list_skills(true)? {
            if self.document_at(&entry.path)?.is_always() {
                names.push(entry.name);
            }
        }
        Ok(names)
    }

    /// XML summary of every skill, available or not.
    ///
    /// ```text
    /// <skills>
    ///   <skill available="false">
    ///     <name>github</name>
    ///     <description>Use the gh CLI</description>
    ///     <location>/ws/skills/github/SKILL.md</location>
    ///     <requires>CLI: gh</requires>
    ///   </skill>
    /// </skills>
    /// ```
    pub fn build_skills_summary(&self) -> Result<String, SkillError> {
        let entries = self.list_skills(false)?;
        if entries.is_empty() {
            return Ok(String::new());
        }

        let mut lines = vec!["<skills>".to_string()];
        for entry in &entries {
            let doc = self.document_at(&entry.path)?;
            let missing = doc.runtime.requires.missing();
            let description = doc.description().unwrap_or(&entry.name);

            lines.push(format!("  <skill available=\"{}\">", missing.is_empty()));
            lines.push(format!("    <name>{}</name>", escape_xml(&entry.name)));
            lines.push(format!("    <description>{}</description>", escape_xml(description)));
            lines.push(format!(
                "    <location>{}</location>",
                escape_xml(&entry.path.display().to_string())
            ));
            if !missing.is_empty() {
                lines.push(format!("    <requires>{}</requires>", escape_xml(&missing.join(", "))));
            }
            lines.push("  </skill>".to_string());
        }
        lines.push("</skills>".to_string());

        Ok(lines.join("\n"))
    }

    fn skill_path(&self, name: &str) -> Option<PathBuf> {
        std::iter::once(&self.workspace_skills)
            .chain(self.builtin_skills.as_ref())
            .map(|dir| dir.join(name).join(SKILL_FILE))
            .find(|path| path.is_file())
    }

    /// Parse a skill file, tolerating malformed frontmatter.
    fn document_at(&self, path: &Path) -> Result<SkillDocument, SkillError> {
        let content = read_skill(path)?;
        match SkillDocument::parse(path, &content) {
            Ok(doc) => Ok(doc),
            Err(e @ SkillError::InvalidFrontmatter { .. }) => {
                warn!(error = %e, "Ignoring skill frontmatter");
                Ok(SkillDocument::without_metadata(&content))
            }
            Err(e) => Err(e),
        }
    }
}

impl SkillCatalog for SkillsLoader {
    fn list_skills(&self) -> Result<Vec<SkillEntry>, SkillError> {
        SkillsLoader::list_skills(self, true)
    }

    fn always_load_skills(&self) -> Result<Vec<String>, SkillError> {
        self.always_skills()
    }

    fn load_skills_for_context(&self, names: &[String]) -> Result<String, SkillError> {
        SkillsLoader::load_skills_for_context(self, names)
    }

    fn skills_summary(&self) -> Result<String, SkillError> {
        self.build_skills_summary()
    }
}

fn scan_dir(
    dir: &Path,
    source: SkillSource,
    entries: &mut Vec<SkillEntry>,
    seen: &mut HashSet<String>,
) -> Result<(), SkillError> {
    if !dir.is_dir() {
        return Ok(());
    }

    let scan_err = |e: std::io::Error| SkillError::Scan {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    };

    let mut found: Vec<(String, PathBuf)> = Vec::new();
    for item in std::fs::read_dir(dir).map_err(scan_err)? {
        let skill_dir = item.map_err(scan_err)?.path();
        let skill_file = skill_dir.join(SKILL_FILE);
        if !skill_dir.is_dir() || !skill_file.is_file() {
            continue;
        }
        if let Some(name) = skill_dir.file_name().and_then(|n| n.to_str()) {
            found.push((name.to_string(), skill_file));
        }
    }

    // Sort for deterministic ordering
    found.sort();

    for (name, path) in found {
        if seen.insert(name.clone()) {
            entries.push(SkillEntry { name, path, source });
        }
    }
    Ok(())
}

fn read_skill(path: &Path) -> Result<String, SkillError> {
    std::fs::read_to_string(path).map_err(|e| SkillError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
