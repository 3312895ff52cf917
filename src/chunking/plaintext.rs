use tracing::debug;

use crate::document::metadata::ChunkMetadata;
use crate::types::chunk::{Chunk, ChunkKind};

use super::accumulator::split_paragraphs;
use super::tokens::TokenEstimator;
use super::{ChunkSplitter, OrdCounter};

impl<E: TokenEstimator> ChunkSplitter<E> {
    /// Split unstructured text on blank lines and pack the paragraphs.
    ///
    /// Chunks carry no heading and are numbered from 0.
    pub fn split_plaintext(&self, text: &str, kind: ChunkKind) -> Vec<Chunk> {
        self.split_plaintext_from(text, kind, OrdCounter::new()).0
    }

    /// Like [`split_plaintext`](Self::split_plaintext), numbering from `ords`.
    pub fn split_plaintext_from(
        &self,
        text: &str,
        kind: ChunkKind,
        mut ords: OrdCounter,
    ) -> (Vec<Chunk>, OrdCounter) {
        let first = ords.value();

        let chunks: Vec<Chunk> = self
            .plaintext_texts(text)
            .into_iter()
            .map(|body| self.make_chunk(&mut ords, None, body, kind, ChunkMetadata::None))
            .collect();

        debug!(
            kind = %kind,
            chunks = chunks.len(),
            first_ord = first,
            "split plain text"
        );

        (chunks, ords)
    }

    pub(crate) fn plaintext_texts(&self, text: &str) -> Vec<String> {
        let paragraphs = split_paragraphs(text);
        self.accumulator().accumulate(&paragraphs, None)
    }
}
