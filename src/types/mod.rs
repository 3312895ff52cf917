pub mod chunk;
pub mod context_bundle;
pub mod identifiers;

pub use chunk::{Chunk, ChunkKind, ChunkKindError, ChunkRecord};
pub use context_bundle::{
    ContextCandidate, ContextMetadata, ContextResult, ContextSource, SelectionError,
};
pub use identifiers::{ChunkId, ContentHash};
