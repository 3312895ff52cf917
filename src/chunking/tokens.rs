pub trait TokenEstimator {
    fn estimate(&self, text: &str) -> usize;
}

/// v0: word-count heuristic
/// tokens(text) := trunc(words(text) * 1.3)
///
/// Words are whitespace-delimited. Integer arithmetic keeps the result exact
/// for every word count.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordTokenEstimator;

impl TokenEstimator for WordTokenEstimator {
    fn estimate(&self, text: &str) -> usize {
        estimate_tokens(text)
    }
}

pub fn estimate_tokens(text: &str) -> usize {
    let words = text.split_whitespace().count();
    words * 13 / 10
}
