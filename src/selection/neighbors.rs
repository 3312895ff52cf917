use crate::types::chunk::Chunk;

/// Chunks around `ord`: those with `ord` in `[ord - before, ord + after]`,
/// sorted by `ord`.
///
/// Empty when no chunk carries `ord`.
pub fn surrounding(chunks: &[Chunk], ord: usize, before: usize, after: usize) -> Vec<&Chunk> {
    if !chunks.iter().any(|chunk| chunk.ord == ord) {
        return Vec::new();
    }

    let low = ord.saturating_sub(before);
    let high = ord.saturating_add(after);

    let mut window: Vec<&Chunk> = chunks
        .iter()
        .filter(|chunk| (low..=high).contains(&chunk.ord))
        .collect();
    window.sort_by_key(|chunk| chunk.ord);
    window
}
