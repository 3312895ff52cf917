pub mod accumulator;
pub mod markdown;
pub mod messages;
pub mod plaintext;
pub mod tokens;

use crate::config::{ConfigError, SplitterConfig};
use crate::document::metadata::ChunkMetadata;
use crate::document::SourceFormat;
use crate::types::chunk::{Chunk, ChunkKind};
use crate::types::identifiers::ContentHash;

pub use accumulator::{split_paragraphs, ParagraphAccumulator};
pub use tokens::{estimate_tokens, TokenEstimator, WordTokenEstimator};

/// Next `ord` to hand out within one logical document.
///
/// Owned by a single splitting call and passed along explicitly, never shared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrdCounter(usize);

impl OrdCounter {
    pub fn new() -> Self {
        OrdCounter(0)
    }

    pub fn starting_at(ord: usize) -> Self {
        OrdCounter(ord)
    }

    /// Number of ords handed out so far, i.e. the next ord.
    pub fn value(self) -> usize {
        self.0
    }

    fn advance(&mut self) -> usize {
        let ord = self.0;
        self.0 += 1;
        ord
    }
}

/// Splits documents, plain text and conversations into [`Chunk`]s.
///
/// Stateless between calls: every split owns its buffers and its
/// [`OrdCounter`], so one splitter can serve many threads.
#[derive(Debug, Clone)]
pub struct ChunkSplitter<E = WordTokenEstimator> {
    config: SplitterConfig,
    estimator: E,
    hash_chunks: bool,
}

impl Default for ChunkSplitter<WordTokenEstimator> {
    fn default() -> Self {
        Self {
            config: SplitterConfig::default(),
            estimator: WordTokenEstimator,
            hash_chunks: true,
        }
    }
}

impl ChunkSplitter<WordTokenEstimator> {
    pub fn new(config: SplitterConfig) -> Result<Self, ConfigError> {
        Self::with_estimator(config, WordTokenEstimator)
    }
}

impl<E: TokenEstimator> ChunkSplitter<E> {
    pub fn with_estimator(config: SplitterConfig, estimator: E) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            estimator,
            hash_chunks: true,
        })
    }

    /// Leave `hash` empty on every produced chunk.
    pub fn without_hashes(mut self) -> Self {
        self.hash_chunks = false;
        self
    }

    pub fn config(&self) -> &SplitterConfig {
        &self.config
    }

    pub fn estimator(&self) -> &E {
        &self.estimator
    }

    /// Route `content` to the splitter matching its format.
    ///
    /// HTML must already be converted to text; it is split like plain text.
    pub fn split_document(&self, content: &str, format: SourceFormat) -> Vec<Chunk> {
        match format {
            SourceFormat::Markdown => self.split_markdown(content),
            SourceFormat::Text | SourceFormat::Html => self.split_plaintext(content, ChunkKind::Doc),
        }
    }

    fn fits(&self, text: &str) -> bool {
        self.estimator.estimate(text) <= self.config.max_chunk_tokens
    }

    fn accumulator(&self) -> ParagraphAccumulator<'_, E> {
        ParagraphAccumulator::new(&self.estimator, &self.config)
    }

    fn make_chunk(
        &self,
        ords: &mut OrdCounter,
        heading: Option<&str>,
        text: String,
        kind: ChunkKind,
        metadata: ChunkMetadata,
    ) -> Chunk {
        let token_est = self.estimator.estimate(&text);
        let hash = self.hash_chunks.then(|| ContentHash::from_text(&text));

        Chunk {
            heading: heading.map(str::to_string),
            text,
            ord: ords.advance(),
            kind,
            token_est,
            hash,
            metadata,
        }
    }
}
