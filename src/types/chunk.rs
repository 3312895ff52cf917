use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::document::metadata::ChunkMetadata;
use crate::types::identifiers::ContentHash;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChunkKindError {
    #[error("Unknown chunk kind: {0}")]
    Unknown(String),
}

/// Provenance class of a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkKind {
    Doc,
    Ai,
    Note,
    Code,
    Example,
}

impl ChunkKind {
    pub const ALL: [ChunkKind; 5] = [
        ChunkKind::Doc,
        ChunkKind::Ai,
        ChunkKind::Note,
        ChunkKind::Code,
        ChunkKind::Example,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ChunkKind::Doc => "doc",
            ChunkKind::Ai => "ai",
            ChunkKind::Note => "note",
            ChunkKind::Code => "code",
            ChunkKind::Example => "example",
        }
    }
}

impl fmt::Display for ChunkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChunkKind {
    type Err = ChunkKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChunkKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ChunkKindError::Unknown(s.to_string()))
    }
}

/// The unit of retrieval.
///
/// Created once by a splitter and never mutated afterwards by this crate.
/// `token_est` and `hash` are derived from `text` alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub heading: Option<String>,
    pub text: String,
    pub ord: usize,
    pub kind: ChunkKind,
    pub token_est: usize,
    pub hash: Option<ContentHash>,
    #[serde(default)]
    pub metadata: ChunkMetadata,
}

/// Flat row form of a [`Chunk`] for bulk insertion.
///
/// The store assigns the owning document; metadata travels as JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkRecord {
    pub ord: usize,
    pub heading: Option<String>,
    pub text: String,
    pub token_est: usize,
    pub kind: ChunkKind,
    pub hash: Option<String>,
    pub metadata: Option<String>,
}

impl ChunkRecord {
    pub fn from_chunk(chunk: &Chunk) -> Result<Self, serde_json::Error> {
        Ok(ChunkRecord {
            ord: chunk.ord,
            heading: chunk.heading.clone(),
            text: chunk.text.clone(),
            token_est: chunk.token_est,
            kind: chunk.kind,
            hash: chunk.hash.as_ref().map(|h| h.as_str().to_string()),
            metadata: chunk.metadata.to_json()?,
        })
    }
}
