use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::types::chunk::ChunkKind;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MessageRoleError {
    #[error("Unknown message role: {0}")]
    Unknown(String),
}

/// Speaker of a conversational message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
    System,
    Tool,
}

impl MessageRole {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
            MessageRole::System => "system",
            MessageRole::Tool => "tool",
        }
    }

    /// Assistant output is AI-authored content; everything else is a note.
    pub fn chunk_kind(self) -> ChunkKind {
        match self {
            MessageRole::Assistant => ChunkKind::Ai,
            _ => ChunkKind::Note,
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageRole {
    type Err = MessageRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            "system" => Ok(MessageRole::System),
            "tool" => Ok(MessageRole::Tool),
            other => Err(MessageRoleError::Unknown(other.to_string())),
        }
    }
}

/// One message of a recorded conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub step: u32,
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn new(step: u32, role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            step,
            role,
            content: content.into(),
        }
    }
}
