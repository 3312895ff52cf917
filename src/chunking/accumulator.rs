//! Greedy paragraph packing shared by the text splitters.
//!
//! Paragraphs are atomic: a paragraph estimated above the budget becomes a
//! chunk on its own and is never cut. Packing runs in three passes:
//!
//! 1. greedy first-fit into groups under `max_chunk_tokens`,
//! 2. groups below `min_chunk_tokens` merge into their predecessor, or borrow
//!    its trailing paragraphs when a full merge would not fit,
//! 3. each group after the first is seeded with the trailing words of its
//!    predecessor, up to `overlap_tokens` and only as far as the budget allows.

use tracing::trace;

use crate::config::SplitterConfig;

use super::tokens::TokenEstimator;

/// Split text into paragraphs on blank-line boundaries.
///
/// A line holding only whitespace counts as blank. Blank paragraphs are dropped.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join("\n"));
    }

    paragraphs
}

#[derive(Debug, Clone)]
struct Group<'p> {
    prefix: Option<&'p str>,
    overlap: Option<String>,
    paragraphs: Vec<&'p str>,
}

impl<'p> Group<'p> {
    fn seeded(prefix: Option<&'p str>) -> Self {
        Group {
            prefix,
            overlap: None,
            paragraphs: Vec::new(),
        }
    }

    fn starting_with(paragraph: &'p str) -> Self {
        Group {
            prefix: None,
            overlap: None,
            paragraphs: vec![paragraph],
        }
    }

    fn render(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(self.paragraphs.len() + 2);
        if let Some(prefix) = self.prefix {
            let prefix = prefix.trim();
            if !prefix.is_empty() {
                parts.push(prefix);
            }
        }
        if let Some(overlap) = &self.overlap {
            parts.push(overlap);
        }
        parts.extend(self.paragraphs.iter().copied());
        parts.join("\n\n").trim().to_string()
    }

    fn body(&self) -> String {
        self.paragraphs.join("\n\n")
    }
}

pub struct ParagraphAccumulator<'a, E> {
    estimator: &'a E,
    config: &'a SplitterConfig,
}

impl<'a, E: TokenEstimator> ParagraphAccumulator<'a, E> {
    pub fn new(estimator: &'a E, config: &'a SplitterConfig) -> Self {
        Self { estimator, config }
    }

    /// Pack `paragraphs` into chunk texts. `prefix` opens the first chunk only.
    ///
    /// Returned texts are trimmed and never empty.
    pub fn accumulate<S: AsRef<str>>(&self, paragraphs: &[S], prefix: Option<&str>) -> Vec<String> {
        let paragraphs: Vec<&str> = paragraphs.iter().map(|p| p.as_ref()).collect();

        let groups = self.pack(&paragraphs, prefix);
        let groups = self.merge_small(groups);
        let groups = self.apply_overlap(groups);

        groups
            .iter()
            .map(Group::render)
            .filter(|text| !text.is_empty())
            .collect()
    }

    fn tokens(&self, group: &Group<'_>) -> usize {
        self.estimator.estimate(&group.render())
    }

    fn pack<'p>(&self, paragraphs: &[&'p str], prefix: Option<&'p str>) -> Vec<Group<'p>> {
        let max = self.config.max_chunk_tokens;
        let mut groups = Vec::new();
        let mut current = Group::seeded(prefix);

        for &paragraph in paragraphs {
            current.paragraphs.push(paragraph);

            // Only flush a buffer that already holds content beyond its seed.
            if current.paragraphs.len() > 1 && self.tokens(&current) > max {
                current.paragraphs.pop();
                let flushed = std::mem::replace(&mut current, Group::starting_with(paragraph));
                trace!(paragraphs = flushed.paragraphs.len(), "flushed paragraph buffer");
                groups.push(flushed);
            }
        }

        if !current.paragraphs.is_empty() || current.prefix.is_some() {
            groups.push(current);
        }

        groups
    }

    /// Only predecessors absorb: a small first group is left as it is.
    fn merge_small<'p>(&self, mut groups: Vec<Group<'p>>) -> Vec<Group<'p>> {
        let min = self.config.min_chunk_tokens;
        let max = self.config.max_chunk_tokens;
        if min == 0 {
            return groups;
        }

        let mut i = 1;
        while i < groups.len() {
            if self.tokens(&groups[i]) >= min {
                i += 1;
                continue;
            }

            let mut merged = groups[i - 1].clone();
            merged.paragraphs.extend(groups[i].paragraphs.iter().copied());
            if self.tokens(&merged) <= max {
                groups[i - 1] = merged;
                groups.remove(i);
                continue;
            }

            self.borrow_from_predecessor(&mut groups, i);
            i += 1;
        }

        groups
    }

    /// Move trailing paragraphs of `groups[i - 1]` to the front of `groups[i]`
    /// until the latter reaches the minimum. Neither side may leave the budget
    /// and the predecessor keeps at least one paragraph at or above the minimum.
    fn borrow_from_predecessor(&self, groups: &mut [Group<'_>], i: usize) {
        let min = self.config.min_chunk_tokens;
        let max = self.config.max_chunk_tokens;

        while self.tokens(&groups[i]) < min && groups[i - 1].paragraphs.len() > 1 {
            let mut donor = groups[i - 1].clone();
            let mut receiver = groups[i].clone();

            let Some(moved) = donor.paragraphs.pop() else {
                break;
            };
            receiver.paragraphs.insert(0, moved);

            if self.tokens(&receiver) > max || self.tokens(&donor) < min {
                break;
            }

            groups[i - 1] = donor;
            groups[i] = receiver;
        }
    }

    fn apply_overlap<'p>(&self, mut groups: Vec<Group<'p>>) -> Vec<Group<'p>> {
        if self.config.overlap_tokens == 0 {
            return groups;
        }

        for i in 1..groups.len() {
            let body = groups[i - 1].body();
            let overlap = self.overlap_tail(&body, &groups[i]);
            groups[i].overlap = overlap;
        }

        groups
    }

    /// Longest run of trailing words from `previous` that stays within
    /// `overlap_tokens` and keeps `next` within the budget once prepended.
    fn overlap_tail(&self, previous: &str, next: &Group<'_>) -> Option<String> {
        let words: Vec<&str> = previous.split_whitespace().collect();
        let mut best = None;

        for take in 1..=words.len() {
            let tail = words[words.len() - take..].join(" ");
            if self.estimator.estimate(&tail) > self.config.overlap_tokens {
                break;
            }

            let mut seeded = next.clone();
            seeded.overlap = Some(tail.clone());
            if self.tokens(&seeded) > self.config.max_chunk_tokens {
                break;
            }

            best = Some(tail);
        }

        best
    }
}
