use chunk_core::chunking::ChunkSplitter;
use chunk_core::config::SplitterConfig;
use chunk_core::selection::{format_block, surrounding, ContextBuilder};
use chunk_core::types::{ChunkId, ContextCandidate};

#[test]
fn invariant_context_is_whole_blocks_within_budget() {
    let splitter = ChunkSplitter::new(SplitterConfig::greedy(30)).unwrap();
    let text = (0..12)
        .map(|p| (0..(3 + p * 2)).map(|w| format!("p{p}w{w}")).collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n\n");
    let chunks = splitter.split_plaintext(&text, chunk_core::ChunkKind::Doc);

    let candidates: Vec<ContextCandidate> = chunks
        .iter()
        .map(|chunk| ContextCandidate {
            id: ChunkId::new(chunk.ord as i64 + 1),
            heading: chunk.heading.clone(),
            text: chunk.text.clone(),
            token_est: Some(chunk.token_est),
            doc_title: "Generated".to_string(),
            module: None,
            source: None,
        })
        .collect();

    for budget in [1, 10, 30, 45, 80, 1000] {
        let result = ContextBuilder::default().build(&candidates, budget).unwrap();

        let tokens_sum: usize = candidates[..result.sources.len()]
            .iter()
            .filter_map(|c| c.token_est)
            .sum();
        assert_eq!(tokens_sum, result.selection.tokens_used, "tokens_used must equal sum of included chunks");
        assert!(result.selection.tokens_used <= budget, "token usage must never exceed budget");

        let expected: String = candidates[..result.sources.len()].iter().map(format_block).collect();
        assert_eq!(result.context, expected, "context must be a prefix of whole chunk blocks");
        assert_eq!(
            result.selection.chunks_selected + result.selection.candidates_excluded_by_budget,
            candidates.len()
        );
    }
}

#[test]
fn invariant_surrounding_window() {
    let splitter = ChunkSplitter::new(SplitterConfig::greedy(2)).unwrap();
    // Every paragraph estimates to 2 tokens, so each becomes its own chunk.
    let chunks = splitter.split_plaintext(
        "a0 b0\n\na1 b1\n\na2 b2\n\na3 b3\n\na4 b4",
        chunk_core::ChunkKind::Note,
    );
    assert_eq!(chunks.len(), 5);

    let ords = |window: Vec<&chunk_core::Chunk>| window.iter().map(|c| c.ord).collect::<Vec<_>>();

    assert_eq!(ords(surrounding(&chunks, 2, 1, 1)), vec![1, 2, 3]);
    assert_eq!(ords(surrounding(&chunks, 0, 2, 1)), vec![0, 1]);
    assert_eq!(ords(surrounding(&chunks, 4, 0, 5)), vec![4]);
    assert!(surrounding(&chunks, 99, 1, 1).is_empty());
}
