use serde::{Deserialize, Serialize};

use super::message::MessageRole;

/// Where a message-derived chunk came from.
///
/// Serializes as the flat object external stores already index:
/// `{"session_id": 1, "message_step": 2, "message_role": "assistant", "sub_chunk": 0}`.
/// `sub_chunk` is only present when the message was split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageProvenance {
    pub session_id: i64,
    pub message_step: u32,
    pub message_role: MessageRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_chunk: Option<usize>,
}

/// Provenance attached to a chunk, one variant per producer.
///
/// Document splitters attach nothing; the message splitter attaches
/// [`MessageProvenance`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChunkMetadata {
    Message(MessageProvenance),
    #[default]
    None,
}

impl ChunkMetadata {
    pub fn is_none(&self) -> bool {
        matches!(self, ChunkMetadata::None)
    }

    pub fn message(&self) -> Option<&MessageProvenance> {
        match self {
            ChunkMetadata::Message(provenance) => Some(provenance),
            ChunkMetadata::None => None,
        }
    }

    /// JSON text for the store's metadata column, `None` when there is nothing to store.
    pub fn to_json(&self) -> Result<Option<String>, serde_json::Error> {
        match self {
            ChunkMetadata::None => Ok(None),
            ChunkMetadata::Message(provenance) => serde_json::to_string(provenance).map(Some),
        }
    }
}
