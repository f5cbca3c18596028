//! CLI subcommand implementations.

pub mod messages;
pub mod prompt;
pub mod skills;
pub mod status;

use clawprompt_agent::{ContextBuilder, ContextOptions};
use clawprompt_config::AppConfig;
use std::path::{Path, PathBuf};

/// Load configuration, letting `--workspace` win over file and environment.
pub fn load_config(
    config_path: Option<&Path>,
    workspace: Option<PathBuf>,
) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let mut config = match config_path {
        Some(path) => AppConfig::load_with_env(path),
        None => AppConfig::load(),
    }
    .map_err(|e| clawprompt_core::Error::Config {
        message: e.to_string(),
    })?;

    if let Some(workspace) = workspace {
        config.workspace = workspace.display().to_string();
    }
    Ok(config)
}

/// Build a context builder for the configured workspace.
pub fn context_builder(config: &AppConfig, force_compact: bool) -> ContextBuilder {
    let mut options = ContextOptions::from(&config.context);
    options.compact_skills |= force_compact;
    ContextBuilder::for_workspace(&config.workspace_dir(), config.builtin_skills_dir(), options)
}
