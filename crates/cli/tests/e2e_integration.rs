//! End-to-end tests for prompt assembly over a real workspace directory.
//!
//! These exercise the full pipeline: bootstrap files, file-backed memory,
//! skill discovery, identity, and message list rendering.

use chrono::DateTime;
use clawprompt_agent::{
    Clock, ContextBuilder, ContextOptions, TurnInput, append_assistant_turn, append_tool_result,
};
use clawprompt_core::message::{ContentBlock, Message, MessageContent, Role, ToolCall};
use clawprompt_memory::{MemoryStore, NoopMemory};
use clawprompt_skills::SkillsLoader;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

// ── Helpers ──────────────────────────────────────────────────────────────

fn fixed_clock() -> Clock {
    Clock::Fixed(DateTime::parse_from_rfc3339("2026-03-14T15:09:00+01:00").unwrap())
}

/// Write `<skills_dir>/<name>/SKILL.md`.
fn write_skill_in(skills_dir: &Path, name: &str, content: &str) -> PathBuf {
    let dir = skills_dir.join(name);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("SKILL.md");
    fs::write(&path, content).unwrap();
    path
}

fn write_skill(workspace: &Path, name: &str, content: &str) {
    write_skill_in(&workspace.join("skills"), name, content);
}

/// A workspace with bootstrap files, memory, and three skills.
fn seeded_workspace() -> tempfile::TempDir {
    let tmp = tempfile::tempdir().unwrap();
    let ws = tmp.path();

    fs::write(ws.join("AGENTS.md"), "Be concise.").unwrap();
    fs::write(ws.join("USER.md"), "The user prefers metric units.").unwrap();

    MemoryStore::new(ws)
        .write_long_term("Project codename is Heron.")
        .unwrap();

    write_skill(
        ws,
        "notes",
        "---\nname: notes\ndescription: Keep running notes\nalways: true\n---\n# Notes\n\nAppend to notes.md.\n",
    );
    write_skill(
        ws,
        "weather",
        "---\nname: weather\ndescription: Look up the forecast\n---\n# Weather\n\nUse wttr.in.\n",
    );
    write_skill(
        ws,
        "deploy",
        "---\nname: deploy\ndescription: Ship a release\nmetadata: {\"clawprompt\": {\"requires\": {\"bins\": [\"definitely-not-installed-xyz\"]}}}\n---\n# Deploy\n",
    );

    tmp
}

fn builder(ws: &Path, compact: bool) -> ContextBuilder {
    ContextBuilder::for_workspace(ws, None, ContextOptions { compact_skills: compact })
        .with_clock(fixed_clock())
}

fn canonical(ws: &Path) -> String {
    ws.canonicalize().unwrap().display().to_string()
}

// ── System prompt ────────────────────────────────────────────────────────

#[test]
fn e2e_progressive_prompt_has_sections_in_order() {
    let tmp = seeded_workspace();
    let prompt = builder(tmp.path(), false).build_system_prompt(None).unwrap();

    let identity = prompt.find("# Assistant").unwrap();
    let agents = prompt.find("## AGENTS.md\n\nBe concise.").unwrap();
    let user = prompt.find("## USER.md\n\nThe user prefers metric units.").unwrap();
    let memory = prompt
        .find("# Memory\n\n## Long-term Memory\nProject codename is Heron.")
        .unwrap();
    let active = prompt.find("# Active Skills").unwrap();
    let summary = prompt.find("<skills>").unwrap();

    assert_eq!(identity, 0);
    assert!(identity < agents && agents < user && user < memory);
    assert!(memory < active && active < summary);
    assert!(!prompt.contains("SOUL.md"));
    assert!(prompt.contains("2026-03-14 15:09 (Saturday) (UTC+01:00)"));
}

#[test]
fn e2e_progressive_prompt_inlines_always_skills_and_summarizes_all() {
    let tmp = seeded_workspace();
    let prompt = builder(tmp.path(), false).build_system_prompt(None).unwrap();

    assert!(prompt.contains("# Active Skills\n\n### Skill: notes\n\n# Notes\n\nAppend to notes.md."));
    assert!(!prompt.contains("### Skill: weather"));

    // Unavailable skills are still summarized, with what they need
    assert!(prompt.contains("<skill available=\"false\">\n    <name>deploy</name>"));
    assert!(prompt.contains("<requires>CLI: definitely-not-installed-xyz</requires>"));
    assert!(prompt.contains("<skill available=\"true\">\n    <name>weather</name>"));
}

#[test]
fn e2e_compact_prompt_lists_names_with_pointers() {
    let tmp = seeded_workspace();
    let ws = canonical(tmp.path());
    let prompt = builder(tmp.path(), true).build_system_prompt(None).unwrap();

    assert!(prompt.contains("Available skills: notes, weather"));
    assert!(prompt.contains(&format!(
        "Load details with read_file: {ws}/skills/weather/SKILL.md"
    )));
    assert!(!prompt.contains("# Active Skills"));
    assert!(!prompt.contains("<skills>"));
}

#[test]
fn e2e_compact_prompt_honours_requested_names() {
    let tmp = seeded_workspace();
    let requested = vec!["weather".to_string(), "calendar".to_string()];
    let prompt = builder(tmp.path(), true)
        .build_system_prompt(Some(requested.as_slice()))
        .unwrap();

    assert!(prompt.contains("Available skills: calendar, weather"));
    assert!(!prompt.contains("skills/notes/SKILL.md"));
}

#[test]
fn e2e_empty_workspace_is_identity_only() {
    let tmp = tempfile::tempdir().unwrap();
    let prompt = builder(tmp.path(), false).build_system_prompt(None).unwrap();

    assert!(prompt.starts_with("# Assistant"));
    assert!(!prompt.contains("\n\n---\n\n"));
    assert!(!prompt.contains("# Memory"));
    assert!(!prompt.contains("# Skills"));
}

#[test]
fn e2e_prompt_is_deterministic() {
    let tmp = seeded_workspace();
    let builder = builder(tmp.path(), false);
    assert_eq!(
        builder.build_system_prompt(None).unwrap(),
        builder.build_system_prompt(None).unwrap()
    );
}

#[test]
fn e2e_workspace_skill_shadows_builtin() {
    let tmp = seeded_workspace();
    let builtin = tempfile::tempdir().unwrap();
    let shadowed = write_skill_in(
        builtin.path(),
        "weather",
        "---\ndescription: Builtin forecast\n---\nbuiltin",
    );
    let clock = write_skill_in(
        builtin.path(),
        "clock",
        "---\ndescription: Tell the time\n---\nclock",
    );

    let prompt = ContextBuilder::for_workspace(
        tmp.path(),
        Some(builtin.path().to_path_buf()),
        ContextOptions::default(),
    )
    .with_clock(fixed_clock())
    .build_system_prompt(None)
    .unwrap();

    assert!(prompt.contains("<description>Look up the forecast</description>"));
    assert!(!prompt.contains("Builtin forecast"));
    assert!(!prompt.contains(&shadowed.display().to_string()));

    assert!(prompt.contains("<name>clock</name>\n    <description>Tell the time</description>"));
    assert!(prompt.contains(&format!("<location>{}</location>", clock.display())));
    assert_eq!(prompt.matches("<name>weather</name>").count(), 1);
}

// ── Message list ─────────────────────────────────────────────────────────

#[test]
fn e2e_messages_with_media_and_session() {
    let tmp = seeded_workspace();
    let shot = tmp.path().join("shot.png");
    fs::write(&shot, [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]).unwrap();
    let media = vec![shot, tmp.path().join("missing.jpg")];

    let history = vec![Message::user("hi"), Message::assistant("hello")];
    let input = TurnInput {
        history: &history,
        media: &media,
        channel: Some("telegram"),
        chat_id: Some("42"),
        ..TurnInput::new("what is in this picture?")
    };
    let messages = builder(tmp.path(), false).build_messages(&input).unwrap();

    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0].role, Role::System);
    let system = messages[0].text().unwrap();
    assert!(system.ends_with("\n\n## Current Session\nChannel: telegram\nChat ID: 42"));
    assert_eq!(&messages[1..3], history.as_slice());

    let blocks = messages[3].content.as_blocks().unwrap();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].mime(), Some("image/png"));
    assert_eq!(blocks[0].base64_payload(), Some("iVBORw0KGgo="));
    assert_eq!(blocks[1], ContentBlock::text("what is in this picture?"));
}

#[test]
fn e2e_session_footer_needs_both_channel_and_chat() {
    let tmp = seeded_workspace();
    let input = TurnInput {
        channel: Some("cli"),
        ..TurnInput::new("ping")
    };
    let messages = builder(tmp.path(), false).build_messages(&input).unwrap();

    assert!(!messages[0].text().unwrap().contains("## Current Session"));
    assert_eq!(messages[1].content, MessageContent::Text("ping".into()));
}

#[test]
fn e2e_tool_loop_round_trips_through_json() {
    let tmp = seeded_workspace();
    let builder = builder(tmp.path(), false);

    let mut messages = builder
        .build_messages(&TurnInput::new("list the workspace"))
        .unwrap();
    append_assistant_turn(
        &mut messages,
        None,
        vec![ToolCall::function("call_1", "exec", r#"{"cmd":"ls"}"#)],
        Some("I should look first."),
    );
    append_tool_result(&mut messages, "call_1", "exec", "AGENTS.md\nUSER.md");
    append_assistant_turn(&mut messages, Some("Two bootstrap files."), Vec::new(), None);

    let wire = serde_json::to_string(&messages).unwrap();
    let parsed: Vec<Message> = serde_json::from_str(&wire).unwrap();
    assert_eq!(parsed, messages);

    let json: serde_json::Value = serde_json::from_str(&wire).unwrap();
    assert_eq!(json[2]["tool_calls"][0]["type"], "function");
    assert_eq!(json[2]["reasoning_content"], "I should look first.");
    assert_eq!(json[3]["role"], "tool");
    assert_eq!(json[3]["tool_call_id"], "call_1");
    assert!(json[4].get("tool_calls").is_none());

    // Prior turns feed the next prompt unchanged
    let history: Vec<Message> = parsed[1..].to_vec();
    let next = builder
        .build_messages(&TurnInput {
            history: &history,
            ..TurnInput::new("thanks")
        })
        .unwrap();
    assert_eq!(next.len(), history.len() + 2);
    assert_eq!(next[0], messages[0]);
}

#[test]
fn e2e_memory_updates_show_up_on_next_build() {
    let tmp = seeded_workspace();
    let builder = builder(tmp.path(), false);
    let store = MemoryStore::new(tmp.path());

    store.write_long_term("Codename changed to Egret.").unwrap();
    store.append_history("[2026-03-14 15:10] renamed project").unwrap();

    let prompt = builder.build_system_prompt(None).unwrap();
    assert!(prompt.contains("Codename changed to Egret."));
    assert!(!prompt.contains("Heron"));
    assert!(!prompt.contains("renamed project"));
}

#[test]
fn e2e_noop_memory_drops_memory_section() {
    let tmp = seeded_workspace();
    let prompt = ContextBuilder::new(
        tmp.path(),
        Arc::new(NoopMemory),
        Arc::new(SkillsLoader::new(tmp.path(), None)),
        ContextOptions::default(),
    )
    .with_clock(fixed_clock())
    .build_system_prompt(None)
    .unwrap();

    assert!(!prompt.contains("# Memory"));
    assert!(!prompt.contains("Heron"));
    assert!(prompt.contains("# Active Skills"));
}

#[test]
fn e2e_unreadable_bootstrap_fails_the_build() {
    let tmp = tempfile::tempdir().unwrap();
    // A directory named like a bootstrap file exists but cannot be read as text
    fs::create_dir(tmp.path().join("SOUL.md")).unwrap();

    let media: Vec<PathBuf> = Vec::new();
    let input = TurnInput {
        media: &media,
        ..TurnInput::new("hi")
    };
    assert!(builder(tmp.path(), false).build_messages(&input).is_err());
}
