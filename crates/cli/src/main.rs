//! clawprompt CLI — the main entry point.
//!
//! Commands:
//! - `prompt`   — Print the system prompt for the workspace
//! - `messages` — Print the full message list for one user turn as JSON
//! - `skills`   — List discovered skills, or print one skill file
//! - `status`   — Show workspace and configuration status

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(
    name = "clawprompt",
    about = "clawprompt — LLM context assembly for agent workspaces",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Workspace root (overrides config and CLAWPROMPT_WORKSPACE)
    #[arg(short, long, global = true)]
    workspace: Option<PathBuf>,

    /// Config file (defaults to ~/.clawprompt/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the system prompt
    Prompt {
        /// Skills to list in compact mode (repeatable)
        #[arg(short, long = "skill")]
        skills: Vec<String>,

        /// Force compact skill disclosure
        #[arg(long)]
        compact: bool,
    },

    /// Print the message list for a user turn as JSON
    Messages {
        /// The user message
        #[arg(short, long)]
        message: String,

        /// Image or file paths to attach (repeatable)
        #[arg(long)]
        media: Vec<PathBuf>,

        /// JSON file holding prior messages
        #[arg(long)]
        history: Option<PathBuf>,

        /// Channel the message arrived on
        #[arg(long)]
        channel: Option<String>,

        /// Chat ID on that channel
        #[arg(long)]
        chat_id: Option<String>,

        /// Skills to list in compact mode (repeatable)
        #[arg(short, long = "skill")]
        skills: Vec<String>,

        /// Force compact skill disclosure
        #[arg(long)]
        compact: bool,
    },

    /// List skills, or print one skill file
    Skills {
        /// Include skills whose requirements are not met
        #[arg(short, long)]
        all: bool,

        /// Print the SKILL.md of the named skill instead of the listing
        #[arg(long, value_name = "NAME")]
        show: Option<String>,
    },

    /// Show workspace status
    Status,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the rendered output
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = commands::load_config(cli.config.as_deref(), cli.workspace)?;

    match cli.command {
        Commands::Prompt { skills, compact } => commands::prompt::run(&config, &skills, compact)?,
        Commands::Messages {
            message,
            media,
            history,
            channel,
            chat_id,
            skills,
            compact,
        } => commands::messages::run(
            &config,
            commands::messages::MessagesArgs {
                message,
                media,
                history,
                channel,
                chat_id,
                skills,
                compact,
            },
        )?,
        Commands::Skills { all, show } => match show {
            Some(name) => commands::skills::show(&config, &name)?,
            None => commands::skills::run(&config, all)?,
        },
        Commands::Status => commands::status::run(&config)?,
    }

    Ok(())
}
