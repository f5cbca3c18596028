//! Context assembly for an LLM turn — the heart of clawprompt.
//!
//! Every model call receives:
//!
//! 1. **System prompt**: identity → bootstrap files → memory → skills
//! 2. **History**: prior messages, passed through untouched
//! 3. **Current turn**: the user message, with inline images when attached
//!
//! Tool-calling loops extend the list with assistant turns and tool results
//! via [`append_assistant_turn`] and [`append_tool_result`].

pub mod context;

pub use context::{
    BOOTSTRAP_FILES, Clock, ContextBuilder, ContextOptions, FILE_READ_TOOL, SECTION_SEPARATOR,
    TurnInput, append_assistant_turn, append_tool_result, build_identity, encode_user_content,
    guess_mime, load_bootstrap,
};
