use tracing::debug;

use crate::document::metadata::ChunkMetadata;
use crate::types::chunk::{Chunk, ChunkKind};

use super::accumulator::split_paragraphs;
use super::tokens::TokenEstimator;
use super::{ChunkSplitter, OrdCounter};

/// A level-2 or level-3 section: `marker` is `##` or `###`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    pub marker: &'a str,
    pub heading: &'a str,
    pub body: String,
}

impl Section<'_> {
    fn header_line(&self) -> String {
        format!("{} {}", self.marker, self.heading)
    }
}

/// Parse a section header: two or three `#`, whitespace, then a title.
/// Level-1 and level-4+ headers are ordinary body text.
pub fn parse_header(line: &str) -> Option<(&str, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if !(2..=3).contains(&hashes) {
        return None;
    }

    let rest = &line[hashes..];
    if !rest.starts_with(|c: char| c == ' ' || c == '\t') {
        return None;
    }

    let title = rest.trim();
    if title.is_empty() {
        None
    } else {
        Some((&line[..hashes], title))
    }
}

/// Split markdown into the text before the first header and its sections.
/// Both prologue and bodies are trimmed.
pub fn parse_sections(markdown: &str) -> (String, Vec<Section<'_>>) {
    let mut prologue: Vec<&str> = Vec::new();
    let mut sections: Vec<(&str, &str, Vec<&str>)> = Vec::new();

    for line in markdown.lines() {
        if let Some((marker, heading)) = parse_header(line) {
            sections.push((marker, heading, Vec::new()));
        } else if let Some((_, _, body)) = sections.last_mut() {
            body.push(line);
        } else {
            prologue.push(line);
        }
    }

    let sections = sections
        .into_iter()
        .map(|(marker, heading, body)| Section {
            marker,
            heading,
            body: body.join("\n").trim().to_string(),
        })
        .collect();

    (prologue.join("\n").trim().to_string(), sections)
}

impl<E: TokenEstimator> ChunkSplitter<E> {
    /// Split markdown into one chunk per `##`/`###` section.
    ///
    /// Text before the first header becomes one chunk with no heading, so a
    /// document without headers yields exactly one chunk. Oversized sections are packed by paragraph; every continuation chunk
    /// repeats the section heading. All chunks are `doc`.
    pub fn split_markdown(&self, markdown: &str) -> Vec<Chunk> {
        self.split_markdown_from(markdown, OrdCounter::new()).0
    }

    /// Like [`split_markdown`](Self::split_markdown), numbering from `ords`.
    pub fn split_markdown_from(
        &self,
        markdown: &str,
        mut ords: OrdCounter,
    ) -> (Vec<Chunk>, OrdCounter) {
        let first = ords.value();
        let (prologue, sections) = parse_sections(markdown);
        let mut chunks = Vec::new();

        // The prologue is always a single chunk, whatever its size.
        if !prologue.is_empty() {
            chunks.push(self.doc_chunk(&mut ords, None, prologue));
        }

        let section_count = sections.len();
        for section in sections {
            let header = section.header_line();
            let full_text = if section.body.is_empty() {
                header.clone()
            } else {
                format!("{header}\n\n{}", section.body)
            };

            if self.fits(&full_text) {
                chunks.push(self.doc_chunk(&mut ords, Some(section.heading), full_text));
                continue;
            }

            let prefix = format!("{header}\n\n");
            let paragraphs = split_paragraphs(&section.body);
            for text in self.accumulator().accumulate(&paragraphs, Some(prefix.as_str())) {
                chunks.push(self.doc_chunk(&mut ords, Some(section.heading), text));
            }
        }

        debug!(
            sections = section_count,
            chunks = chunks.len(),
            first_ord = first,
            "split markdown"
        );

        (chunks, ords)
    }

    fn doc_chunk(&self, ords: &mut OrdCounter, heading: Option<&str>, text: String) -> Chunk {
        self.make_chunk(ords, heading, text, ChunkKind::Doc, ChunkMetadata::None)
    }
}
