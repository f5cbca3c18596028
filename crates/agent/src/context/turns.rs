//! Appending model and tool turns to a message list.

use clawprompt_core::message::{Message, ToolCall};

/// Append an assistant turn.
///
/// `content` defaults to `""`. `tool_calls` is attached only when non-empty.
/// `reasoning_content` is attached only when non-empty; thinking models
/// reject history that drops the reasoning they produced.
pub fn append_assistant_turn(
    messages: &mut Vec<Message>,
    content: Option<&str>,
    tool_calls: Vec<ToolCall>,
    reasoning_content: Option<&str>,
) {
    messages.push(Message::assistant_turn(content, tool_calls, reasoning_content));
}

/// Append the result of a tool call.
pub fn append_tool_result(
    messages: &mut Vec<Message>,
    tool_call_id: &str,
    tool_name: &str,
    result: &str,
) {
    messages.push(Message::tool_result(tool_call_id, tool_name, result));
}
