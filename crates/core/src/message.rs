//! Message domain types.
//!
//! These are the value objects handed to an LLM chat-completion API:
//! system prompt → conversation history → current user turn.
//!
//! Field presence is part of the wire contract. Every optional field is an
//! `Option` that is skipped when `None`, so an absent `reasoning_content`
//! never serializes as an empty string.

use serde::{Deserialize, Serialize};

/// The role of a message sender in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instructions (identity, memory, skills)
    System,
    /// The end user
    User,
    /// The AI assistant
    Assistant,
    /// Tool execution result
    Tool,
}

/// Message content: either plain text or an ordered list of typed blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
}

impl MessageContent {
    /// The plain text, if this is the `Text` variant.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Blocks(_) => None,
        }
    }

    /// The content blocks, if this is the `Blocks` variant.
    pub fn as_blocks(&self) -> Option<&[ContentBlock]> {
        match self {
            Self::Text(_) => None,
            Self::Blocks(blocks) => Some(blocks),
        }
    }
}

impl From<String> for MessageContent {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for MessageContent {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// A single typed block inside multimodal content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

/// Reference to an image, here always an inline `data:` URI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageUrl {
    pub url: String,
}

impl ContentBlock {
    /// Create a text block.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Create an inline image block from a MIME type and base64 payload.
    pub fn image(mime: &str, base64_payload: &str) -> Self {
        Self::ImageUrl {
            image_url: ImageUrl {
                url: format!("data:{mime};base64,{base64_payload}"),
            },
        }
    }

    /// MIME type of an inline image block.
    pub fn mime(&self) -> Option<&str> {
        self.data_uri_parts().map(|(mime, _)| mime)
    }

    /// Base64 payload of an inline image block.
    pub fn base64_payload(&self) -> Option<&str> {
        self.data_uri_parts().map(|(_, payload)| payload)
    }

    fn data_uri_parts(&self) -> Option<(&str, &str)> {
        match self {
            Self::ImageUrl { image_url } => image_url
                .url
                .strip_prefix("data:")
                .and_then(|rest| rest.split_once(";base64,")),
            Self::Text { .. } => None,
        }
    }
}

/// A tool invocation requested by the assistant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Unique ID for this tool call
    pub id: String,

    /// Always `"function"` for chat-completion APIs
    #[serde(rename = "type", default = "default_tool_call_kind")]
    pub kind: String,

    pub function: FunctionCall,
}

fn default_tool_call_kind() -> String {
    "function".into()
}

/// Name and JSON-encoded arguments of a function tool call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,

    /// Arguments as JSON string
    pub arguments: String,
}

impl ToolCall {
    /// Create a function tool call.
    pub fn function(
        id: impl Into<String>,
        name: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: default_tool_call_kind(),
            function: FunctionCall {
                name: name.into(),
                arguments: arguments.into(),
            },
        }
    }
}

/// A single message in the list sent to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Who sent this message
    pub role: Role,

    /// Text or multimodal content
    pub content: MessageContent,

    /// Tool calls requested by the assistant (never an empty list)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,

    /// Intermediate reasoning emitted by thinking models
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning_content: Option<String>,

    /// If this is a tool result, which tool call it responds to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,

    /// If this is a tool result, the name of the tool
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Message {
    fn bare(role: Role, content: MessageContent) -> Self {
        Self {
            role,
            content,
            tool_calls: None,
            reasoning_content: None,
            tool_call_id: None,
            name: None,
        }
    }

    /// Create a system message. System content is always plain text.
    pub fn system(content: impl Into<String>) -> Self {
        Self::bare(Role::System, MessageContent::Text(content.into()))
    }

    /// Create a user message with text or multimodal content.
    pub fn user(content: impl Into<MessageContent>) -> Self {
        Self::bare(Role::User, content.into())
    }

    /// Create a plain assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::bare(Role::Assistant, MessageContent::Text(content.into()))
    }

    /// Create an assistant turn.
    ///
    /// Missing content becomes an empty string. Empty tool-call lists and
    /// empty reasoning are dropped so the fields are omitted on the wire.
    pub fn assistant_turn(
        content: Option<&str>,
        tool_calls: Vec<ToolCall>,
        reasoning_content: Option<&str>,
    ) -> Self {
        Self {
            tool_calls: (!tool_calls.is_empty()).then_some(tool_calls),
            reasoning_content: reasoning_content
                .filter(|r| !r.is_empty())
                .map(str::to_string),
            ..Self::assistant(content.unwrap_or_default())
        }
    }

    /// Create a tool result message.
    pub fn tool_result(
        tool_call_id: impl Into<String>,
        tool_name: impl Into<String>,
        result: impl Into<String>,
    ) -> Self {
        Self {
            tool_call_id: Some(tool_call_id.into()),
            name: Some(tool_name.into()),
            ..Self::bare(Role::Tool, MessageContent::Text(result.into()))
        }
    }

    /// The content as plain text, if it is not multimodal.
    pub fn text(&self) -> Option<&str> {
        self.content.as_text()
    }
}
