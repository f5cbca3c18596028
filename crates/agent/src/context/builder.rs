//! Context builder — system prompt and message list for one LLM turn.
//!
//! # Skill disclosure
//!
//! Two mutually exclusive modes, fixed at construction:
//!
//! - **Progressive** (default): always-load skills are inlined in full under
//!   `# Active Skills`; every skill is summarized under `# Skills` and the
//!   model reads a definition file when it needs one.
//! - **Compact**: only skill names plus one `read_file` pointer per skill.
//!   Used when the transport already carries skill definitions.
//!
//! # Determinism
//!
//! Nothing is cached. Identical workspace state, collaborator responses, and
//! clock produce byte-identical output.

use crate::context::bootstrap::{BOOTSTRAP_FILES, load_bootstrap};
use crate::context::identity::{Clock, build_identity, resolve_workspace};
use crate::context::media::encode_user_content;
use clawprompt_config::ContextConfig;
use clawprompt_core::error::Result;
use clawprompt_core::memory::MemoryContext;
use clawprompt_core::message::Message;
use clawprompt_core::skills::SkillCatalog;
use clawprompt_memory::MemoryStore;
use clawprompt_skills::{SKILL_FILE, SKILLS_DIR, SkillsLoader};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Separator between prompt sections.
pub const SECTION_SEPARATOR: &str = "\n\n---\n\n";

/// Name of the file-read tool the model uses to load skill definitions.
pub const FILE_READ_TOOL: &str = "read_file";

// ── Types ─────────────────────────────────────────────────────────────────

/// Construction-time options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContextOptions {
    /// Use compact skill disclosure instead of progressive.
    pub compact_skills: bool,
}

impl From<&ContextConfig> for ContextOptions {
    fn from(config: &ContextConfig) -> Self {
        Self {
            compact_skills: config.compact_skills,
        }
    }
}

/// Inputs for [`ContextBuilder::build_messages`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TurnInput<'a> {
    /// Prior conversation, appended verbatim.
    pub history: &'a [Message],
    /// The new user message.
    pub current_message: &'a str,
    /// Skills to disclose in compact mode; defaults to the full catalog.
    pub skill_names: Option<&'a [String]>,
    /// Local file paths attached to the user message.
    pub media: &'a [PathBuf],
    /// Channel the message arrived on (e.g. `telegram`).
    pub channel: Option<&'a str>,
    /// Chat or user ID on that channel.
    pub chat_id: Option<&'a str>,
}

impl<'a> TurnInput<'a> {
    pub fn new(current_message: &'a str) -> Self {
        Self {
            current_message,
            ..Self::default()
        }
    }
}

// ── Builder ───────────────────────────────────────────────────────────────

/// Assembles system prompts and message lists for a workspace.
pub struct ContextBuilder {
    workspace: PathBuf,
    memory: Arc<dyn MemoryContext>,
    skills: Arc<dyn SkillCatalog>,
    options: ContextOptions,
    clock: Clock,
}

impl ContextBuilder {
    /// Create a builder over explicit collaborators.
    pub fn new(
        workspace: impl Into<PathBuf>,
        memory: Arc<dyn MemoryContext>,
        skills: Arc<dyn SkillCatalog>,
        options: ContextOptions,
    ) -> Self {
        Self {
            workspace: workspace.into(),
            memory,
            skills,
            options,
            clock: Clock::System,
        }
    }

    /// Create a builder backed by the workspace's own memory and skills files.
    pub fn for_workspace(
        workspace: &Path,
        builtin_skills: Option<PathBuf>,
        options: ContextOptions,
    ) -> Self {
        Self::new(
            workspace,
            Arc::new(MemoryStore::new(workspace)),
            Arc::new(SkillsLoader::new(workspace, builtin_skills)),
            options,
        )
    }

    /// Replace the clock used for the identity timestamp.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn workspace(&self) -> &Path {
        &self.workspace
    }

    pub fn options(&self) -> ContextOptions {
        self.options
    }

    /// Build the system prompt: identity, bootstrap, memory, skills.
    ///
    /// `skill_names` narrows the compact-mode listing; progressive mode
    /// always discloses the full catalog.
    pub fn build_system_prompt(&self, skill_names: Option<&[String]>) -> Result<String> {
        let mut parts = vec![build_identity(&self.workspace, &self.clock)];

        let bootstrap = load_bootstrap(&self.workspace, &BOOTSTRAP_FILES)?;
        if !bootstrap.is_empty() {
            parts.push(bootstrap);
        }

        let memory = self.memory.memory_context()?;
        if !memory.is_empty() {
            parts.push(format!("# Memory\n\n{memory}"));
        }

        if self.options.compact_skills {
            parts.extend(self.compact_skills_section(skill_names)?);
        } else {
            parts.extend(self.progressive_skills_sections()?);
        }

        let prompt = parts.join(SECTION_SEPARATOR);
        debug!(
            sections = parts.len(),
            prompt_len = prompt.len(),
            compact_skills = self.options.compact_skills,
            "System prompt assembled"
        );
        Ok(prompt)
    }

    /// Build the full message list: system, history, current user turn.
    pub fn build_messages(&self, input: &TurnInput<'_>) -> Result<Vec<Message>> {
        let mut system_prompt = self.build_system_prompt(input.skill_names)?;
        let channel = input.channel.filter(|c| !c.is_empty());
        let chat_id = input.chat_id.filter(|c| !c.is_empty());
        if let (Some(channel), Some(chat_id)) = (channel, chat_id) {
            system_prompt.push_str(&format!(
                "\n\n## Current Session\nChannel: {channel}\nChat ID: {chat_id}"
            ));
        }

        let mut messages = Vec::with_capacity(input.history.len() + 2);
        messages.push(Message::system(system_prompt));
        messages.extend_from_slice(input.history);
        messages.push(Message::user(encode_user_content(
            input.current_message,
            input.media,
        )));

        debug!(
            history = input.history.len(),
            media = input.media.len(),
            total = messages.len(),
            "Message list assembled"
        );
        Ok(messages)
    }

    // ── Skill sections ────────────────────────────────────────────────────

    /// Names plus load pointers. Availability metadata is not consulted.
    fn compact_skills_section(&self, skill_names: Option<&[String]>) -> Result<Option<String>> {
        let names: BTreeSet<String> = match skill_names {
            Some(names) if !names.is_empty() => names.iter().cloned().collect(),
            _ => self
                .skills
                .list_skills()?
                .into_iter()
                .map(|entry| entry.name)
                .collect(),
        };
        if names.is_empty() {
            return Ok(None);
        }

        let ws = resolve_workspace(&self.workspace);
        let listing = names.iter().map(String::as_str).collect::<Vec<_>>().join(", ");
        let pointers = names
            .iter()
            .map(|name| {
                format!(
                    "Load details with {FILE_READ_TOOL}: {}/{SKILLS_DIR}/{name}/{SKILL_FILE}",
                    ws.display()
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        Ok(Some(format!(
            "# Skills\n\nAvailable skills: {listing}\n\n{pointers}"
        )))
    }

    /// `# Active Skills` for always-load skills, then the `# Skills` summary.
    fn progressive_skills_sections(&self) -> Result<Vec<String>> {
        let mut sections = Vec::new();

        let always = self.skills.always_load_skills()?;
        if !always.is_empty() {
            let content = self.skills.load_skills_for_context(&always)?;
            if !content.is_empty() {
                sections.push(format!("# Active Skills\n\n{content}"));
            }
        }

        let summary = self.skills.skills_summary()?;
        if !summary.is_empty() {
            sections.push(format!(
                "# Skills\n\n\
                 The following skills extend your capabilities. \
                 To use a skill, read its {SKILL_FILE} file using the {FILE_READ_TOOL} tool.\n\
                 Skills with available=\"false\" need dependencies installed first \
                 - you can try installing them with apt/brew.\n\n\
                 {summary}"
            ));
        }

        Ok(sections)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
