//! Configuration loading, validation, and management for clawprompt.
//!
//! Loads configuration from `~/.clawprompt/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the workspace root.
pub const ENV_WORKSPACE: &str = "CLAWPROMPT_WORKSPACE";

/// Environment variable toggling compact skill disclosure.
pub const ENV_COMPACT_SKILLS: &str = "CLAWPROMPT_COMPACT_SKILLS";

/// The root configuration structure.
///
/// Maps directly to `~/.clawprompt/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Workspace root holding bootstrap files, `memory/` and `skills/`
    #[serde(default = "default_workspace")]
    pub workspace: String,

    /// Prompt assembly settings
    #[serde(default)]
    pub context: ContextConfig,

    /// Skill discovery settings
    #[serde(default)]
    pub skills: SkillsConfig,
}

fn default_workspace() -> String {
    "~/.clawprompt/workspace".into()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContextConfig {
    /// List skill names with load pointers instead of the full summary.
    /// Used when the transport already carries skill definitions.
    #[serde(default)]
    pub compact_skills: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillsConfig {
    /// Directory of builtin skills, shadowed by workspace skills of the same name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builtin_dir: Option<String>,
}

impl AppConfig {
    /// Load configuration from the default path (~/.clawprompt/config.toml).
    ///
    /// Environment variables take precedence over the file:
    /// - `CLAWPROMPT_WORKSPACE`
    /// - `CLAWPROMPT_COMPACT_SKILLS`
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_env(&Self::config_dir().join("config.toml"))
    }

    /// Load configuration from `path`, then apply environment overrides.
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load_from(path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides using the given variable lookup.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(workspace) = lookup(ENV_WORKSPACE).filter(|w| !w.trim().is_empty()) {
            self.workspace = workspace;
        }

        if let Some(raw) = lookup(ENV_COMPACT_SKILLS) {
            match parse_flag(&raw) {
                Some(flag) => self.context.compact_skills = flag,
                None => tracing::warn!(
                    var = ENV_COMPACT_SKILLS,
                    value = %raw,
                    "Ignoring unrecognized boolean value"
                ),
            }
        }
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".clawprompt")
    }

    /// The workspace root with `~` expanded.
    pub fn workspace_dir(&self) -> PathBuf {
        expand_home(&self.workspace)
    }

    /// The builtin skills directory with `~` expanded, if configured.
    pub fn builtin_skills_dir(&self) -> Option<PathBuf> {
        self.skills.builtin_dir.as_deref().map(expand_home)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.workspace.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "workspace must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Generate a default config TOML string.
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workspace: default_workspace(),
            context: ContextConfig::default(),
            skills: SkillsConfig::default(),
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if path == "~" {
        return dirs_home();
    }
    match path.strip_prefix("~/") {
        Some(rest) => dirs_home().join(rest),
        None => PathBuf::from(path),
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
