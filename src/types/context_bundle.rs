use serde::{Deserialize, Serialize};

use crate::types::identifiers::ChunkId;

/// A previously persisted chunk offered by the ranking side, best match first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextCandidate {
    pub id: ChunkId,
    pub heading: Option<String>,
    pub text: String,
    /// Stored estimate; recomputed from `text` when the store has none.
    pub token_est: Option<usize>,
    pub doc_title: String,
    pub module: Option<String>,
    pub source: Option<String>,
}

/// Provenance of one chunk included in a built context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextSource {
    pub chunk_id: ChunkId,
    pub doc_title: String,
    pub module: Option<String>,
    pub heading: Option<String>,
    pub source: Option<String>,
}

/// Metadata describing the outcome of context assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextMetadata {
    pub budget: usize,
    pub tokens_used: usize,

    pub candidates_considered: usize,
    pub chunks_selected: usize,
    pub candidates_excluded_by_budget: usize,
}

/// A bounded prompt context plus the chunks it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextResult {
    pub context: String,
    pub sources: Vec<ContextSource>,
    pub selection: ContextMetadata,
}

impl ContextResult {
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// One `- {doc_title} > {heading} ({module})` line per source, for display.
    pub fn source_lines(&self) -> Vec<String> {
        self.sources
            .iter()
            .map(|src| {
                format!(
                    "- {} > {} ({})",
                    src.doc_title,
                    src.heading.as_deref().unwrap_or("(no heading)"),
                    src.module.as_deref().unwrap_or("-"),
                )
            })
            .collect()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Invalid budget: {0}")]
    InvalidBudget(usize),
}
