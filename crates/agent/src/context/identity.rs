//! Identity section — who the agent is, when and where it runs.
//!
//! Always the first section of the system prompt. The wording is for the
//! model only; nothing parses it back.

use chrono::{DateTime, FixedOffset, Local, Utc};
use chrono_tz::Tz;
use clawprompt_memory::file_backend::{HISTORY_FILE, MEMORY_DIR, MEMORY_FILE};
use clawprompt_skills::{SKILL_FILE, SKILLS_DIR};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Version of the compiler that built this crate.
pub const RUSTC_VERSION: &str = env!("RUSTC_VERSION");

/// Source of the current time for the identity block.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    /// Local wall-clock time in the detected system timezone
    #[default]
    System,
    /// A pinned instant in a named timezone
    Zoned(DateTime<Tz>),
    /// A pinned instant at a bare offset
    Fixed(DateTime<FixedOffset>),
}

impl Clock {
    /// The current time and the label of its timezone.
    ///
    /// Named zones yield their abbreviation (`CET`, `GMT`). A system whose
    /// zone cannot be detected is labelled `UTC`.
    pub fn reading(&self) -> (DateTime<FixedOffset>, String) {
        match self {
            Self::System => match system_timezone() {
                Some(tz) => zoned_reading(&Utc::now().with_timezone(&tz)),
                None => (Local::now().fixed_offset(), "UTC".into()),
            },
            Self::Zoned(instant) => zoned_reading(instant),
            Self::Fixed(instant) => (*instant, offset_label(instant.offset())),
        }
    }
}

fn zoned_reading(instant: &DateTime<Tz>) -> (DateTime<FixedOffset>, String) {
    (instant.fixed_offset(), instant.format("%Z").to_string())
}

/// The IANA timezone of the host, if the platform reports a known one.
pub fn system_timezone() -> Option<Tz> {
    let name = match iana_time_zone::get_timezone() {
        Ok(name) => name,
        Err(e) => {
            debug!(error = %e, "System timezone unavailable");
            return None;
        }
    };
    match name.parse::<Tz>() {
        Ok(tz) => Some(tz),
        Err(e) => {
            debug!(timezone = %name, error = %e, "Unrecognized system timezone");
            None
        }
    }
}

/// Render the identity block for `workspace` at the clock's current time.
pub fn build_identity(workspace: &Path, clock: &Clock) -> String {
    let (now, tz) = clock.reading();
    let stamp = now.format("%Y-%m-%d %H:%M (%A)");
    let runtime = runtime_descriptor();
    let ws = resolve_workspace(workspace).display().to_string();
    let memory = format!("{ws}/{MEMORY_DIR}/{MEMORY_FILE}");
    let history = format!("{ws}/{MEMORY_DIR}/{HISTORY_FILE}");

    format!(
        "# Assistant

You are a helpful AI assistant. You can read and write files in your workspace, \
run commands, and reply to users on chat channels.

## Current Time
{stamp} ({tz})

## Runtime
{runtime}

## Workspace
Your workspace is at: {ws}
- Long-term memory: {memory}
- History log: {history} (grep-searchable)
- Custom skills: {ws}/{SKILLS_DIR}/{{skill-name}}/{SKILL_FILE}
When remembering something important, write to {memory}
To recall past events, grep {history}"
    )
}

/// Absolute form of the workspace path, following symlinks when it exists.
pub fn resolve_workspace(workspace: &Path) -> PathBuf {
    workspace
        .canonicalize()
        .or_else(|_| std::path::absolute(workspace))
        .unwrap_or_else(|_| workspace.to_path_buf())
}

/// `UTC` for a zero offset, otherwise `UTC+HH:MM` / `UTC-HH:MM`.
fn offset_label(offset: &FixedOffset) -> String {
    if offset.local_minus_utc() == 0 {
        "UTC".into()
    } else {
        format!("UTC{offset}")
    }
}

/// Host OS, architecture, and compiler, e.g. `macOS aarch64, Rust 1.95.0`.
pub fn runtime_descriptor() -> String {
    format!(
        "{} {}, Rust {RUSTC_VERSION}",
        os_name(std::env::consts::OS),
        std::env::consts::ARCH,
    )
}

fn os_name(os: &str) -> &str {
    match os {
        "macos" | "darwin" => "macOS",
        "linux" => "Linux",
        "windows" => "Windows",
        "freebsd" => "FreeBSD",
        "openbsd" => "OpenBSD",
        "netbsd" => "NetBSD",
        "ios" => "iOS",
        "android" => "Android",
        other => other,
    }
}
