//! `clawprompt messages` — Print the message list for one user turn as JSON.

use clawprompt_agent::TurnInput;
use clawprompt_config::AppConfig;
use clawprompt_core::Message;
use std::path::{Path, PathBuf};

/// Arguments for a single rendered turn.
pub struct MessagesArgs {
    pub message: String,
    pub media: Vec<PathBuf>,
    pub history: Option<PathBuf>,
    pub channel: Option<String>,
    pub chat_id: Option<String>,
    pub skills: Vec<String>,
    pub compact: bool,
}

pub fn run(config: &AppConfig, args: MessagesArgs) -> Result<(), Box<dyn std::error::Error>> {
    let history = match &args.history {
        Some(path) => read_history(path)?,
        None => Vec::new(),
    };

    let builder = super::context_builder(config, args.compact);
    let input = TurnInput {
        history: &history,
        current_message: &args.message,
        skill_names: (!args.skills.is_empty()).then_some(args.skills.as_slice()),
        media: &args.media,
        channel: args.channel.as_deref(),
        chat_id: args.chat_id.as_deref(),
    };
    let messages = builder.build_messages(&input)?;

    println!("{}", serde_json::to_string_pretty(&messages)?);
    Ok(())
}

/// Read prior messages from a JSON array file.
pub fn read_history(path: &Path) -> Result<Vec<Message>, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read history {}: {e}", path.display()))?;
    let history: Vec<Message> = serde_json::from_str(&raw)
        .map_err(|e| format!("Invalid history JSON in {}: {e}", path.display()))?;
    tracing::debug!(path = %path.display(), messages = history.len(), "History loaded");
    Ok(history)
}
