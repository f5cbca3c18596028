//! `SKILL.md` parsing: frontmatter split, YAML fields, runtime metadata.
//!
//! ```text
//! ---
//! name: github
//! description: Interact with GitHub using the gh CLI
//! metadata: {"clawprompt": {"requires": {"bins": ["gh"]}}}
//! ---
//! # GitHub
//! ...
//! ```
//!
//! `metadata` may be a YAML mapping or a JSON string. The runtime block is
//! read from the `clawprompt` key, with `nanobot` accepted as an alias.

use crate::requirements::Requirements;
use clawprompt_core::error::SkillError;
use serde::Deserialize;
use std::path::Path;

/// Top-level frontmatter fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillFrontmatter {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Accepts `true` or the string `"true"`
    #[serde(default)]
    pub always: Option<serde_yaml::Value>,

    #[serde(default)]
    pub metadata: Option<serde_yaml::Value>,
}

/// Runtime block nested under `metadata`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RuntimeMeta {
    #[serde(default)]
    pub always: bool,

    #[serde(default)]
    pub requires: Requirements,
}

#[derive(Debug, Default, Deserialize)]
struct MetadataEnvelope {
    #[serde(default, alias = "nanobot")]
    clawprompt: Option<RuntimeMeta>,
}

/// A parsed skill file.
#[derive(Debug, Clone, Default)]
pub struct SkillDocument {
    pub frontmatter: SkillFrontmatter,
    pub runtime: RuntimeMeta,
    /// Markdown body with the frontmatter removed and surrounding whitespace trimmed
    pub body: String,
}

impl SkillDocument {
    /// Parse a skill file. `path` is only used for error reporting.
    pub fn parse(path: &Path, content: &str) -> Result<Self, SkillError> {
        let Some((yaml, body)) = split_frontmatter(content) else {
            return Ok(Self::without_metadata(content));
        };

        let invalid = |reason: String| SkillError::InvalidFrontmatter {
            path: path.to_path_buf(),
            reason,
        };

        let frontmatter: SkillFrontmatter = if yaml.trim().is_empty() {
            SkillFrontmatter::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| invalid(e.to_string()))?
        };

        let runtime = match &frontmatter.metadata {
            None => RuntimeMeta::default(),
            Some(value) => parse_runtime(value).map_err(invalid)?,
        };

        Ok(Self {
            frontmatter,
            runtime,
            body: body.trim().to_string(),
        })
    }

    /// Treat the whole file as body, with no metadata.
    pub fn without_metadata(content: &str) -> Self {
        Self {
            body: content.trim().to_string(),
            ..Self::default()
        }
    }

    /// Whether the skill asks to be inlined in every prompt.
    pub fn is_always(&self) -> bool {
        self.runtime.always || self.frontmatter.always.as_ref().is_some_and(is_truthy)
    }

    pub fn description(&self) -> Option<&str> {
        self.frontmatter
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}

fn parse_runtime(value: &serde_yaml::Value) -> Result<RuntimeMeta, String> {
    let envelope: MetadataEnvelope = match value {
        serde_yaml::Value::String(raw) if raw.trim().is_empty() => MetadataEnvelope::default(),
        serde_yaml::Value::String(raw) => {
            serde_json::from_str(raw).map_err(|e| format!("metadata is not valid JSON: {e}"))?
        }
        serde_yaml::Value::Null => MetadataEnvelope::default(),
        other => serde_yaml::from_value(other.clone())
            .map_err(|e| format!("metadata has unexpected shape: {e}"))?,
    };
    Ok(envelope.clawprompt.unwrap_or_default())
}

fn is_truthy(value: &serde_yaml::Value) -> bool {
    match value {
        serde_yaml::Value::Bool(b) => *b,
        serde_yaml::Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    }
}

/// Split a leading `---` frontmatter block from the body.
///
/// Returns `None` when the file does not start with `---` or the block is
/// never closed; such files are treated as body only.
pub fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let rest = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<SkillDocument, SkillError> {
        SkillDocument::parse(Path::new("skills/test/SKILL.md"), content)
    }

    #[test]
    fn plain_file_has_no_metadata() {
        let doc = parse("# Weather\n\nUse curl wttr.in\n").unwrap();
        assert_eq!(doc.body, "# Weather\n\nUse curl wttr.in");
        assert!(doc.description().is_none());
        assert!(!doc.is_always());
    }

    #[test]
    fn frontmatter_fields_are_read() {
        let doc = parse(
            "---\nname: github\ndescription: Use the gh CLI\nalways: true\n---\n\n# GitHub\n",
        )
        .unwrap();
        assert_eq!(doc.frontmatter.name.as_deref(), Some("github"));
        assert_eq!(doc.description(), Some("Use the gh CLI"));
        assert!(doc.is_always());
        assert_eq!(doc.body, "# GitHub");
    }

    #[test]
    fn string_always_flag_is_accepted() {
        let doc = parse("---\nalways: \"true\"\n---\nbody").unwrap();
        assert!(doc.is_always());
    }

    #[test]
    fn json_string_metadata_is_parsed() {
        let doc = parse(
            "---\nmetadata: '{\"nanobot\": {\"always\": true, \"requires\": {\"bins\": [\"gh\"], \"env\": [\"GH_TOKEN\"]}}}'\n---\nbody",
        )
        .unwrap();
        assert!(doc.runtime.always);
        assert_eq!(doc.runtime.requires.bins, vec!["gh"]);
        assert_eq!(doc.runtime.requires.env, vec!["GH_TOKEN"]);
    }

    #[test]
    fn flow_mapping_metadata_is_parsed() {
        let doc = parse(
            "---\nmetadata: {\"clawprompt\": {\"requires\": {\"bins\": [\"tmux\"]}}}\n---\nbody",
        )
        .unwrap();
        assert_eq!(doc.runtime.requires.bins, vec!["tmux"]);
        assert!(!doc.runtime.always);
    }

    #[test]
    fn bad_yaml_is_invalid_frontmatter() {
        let err = parse("---\ndescription: [unclosed\n---\nbody").unwrap_err();
        assert!(matches!(err, SkillError::InvalidFrontmatter { .. }));
    }

    #[test]
    fn bad_metadata_json_is_invalid_frontmatter() {
        let err = parse("---\nmetadata: '{not json'\n---\nbody").unwrap_err();
        assert!(err.to_string().contains("metadata is not valid JSON"));
    }

    #[test]
    fn unterminated_frontmatter_is_body() {
        assert!(split_frontmatter("---\nname: x\nno end").is_none());
        let doc = parse("---\nname: x\nno end").unwrap();
        assert!(doc.body.starts_with("---"));
    }

    #[test]
    fn empty_frontmatter_block() {
        let (yaml, body) = split_frontmatter("---\n---\nbody\n").unwrap();
        assert_eq!(yaml, "");
        assert_eq!(body, "body\n");
        assert_eq!(parse("---\n---\nbody\n").unwrap().body, "body");
    }
}
