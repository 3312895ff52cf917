//! Deterministic chunking and context budgeting for retrieval-augmented generation.
//!
//! `chunk-core` splits markdown, plain text and recorded conversations into
//! bounded, content-addressed chunks, and greedily assembles token-bounded
//! prompt contexts from ranked chunks. All operations are pure and
//! deterministic: identical inputs always produce identical chunks, `ord`
//! values, hashes and contexts.
//!
//! Persistence, fetching, HTML conversion and ranking live outside this crate.

pub mod chunking;
pub mod config;
pub mod document;
pub mod selection;
pub mod types;

pub use chunking::{ChunkSplitter, OrdCounter, TokenEstimator, WordTokenEstimator};
pub use config::{ConfigError, SplitterConfig};
pub use selection::ContextBuilder;
pub use types::{Chunk, ChunkKind, ContentHash};
