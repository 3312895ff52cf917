use chunk_core::chunking::{ChunkSplitter, OrdCounter};
use chunk_core::config::SplitterConfig;
use chunk_core::types::ChunkKind;

fn paragraph(k: usize, n: usize) -> String {
    (0..n).map(|i| format!("w{k}_{i}")).collect::<Vec<_>>().join(" ")
}

#[test]
fn blank_text_yields_no_chunks() {
    let splitter = ChunkSplitter::default();

    assert!(splitter.split_plaintext("", ChunkKind::Doc).is_empty());
    assert!(splitter.split_plaintext("  \n\n \t\n", ChunkKind::Doc).is_empty());
}

#[test]
fn paragraphs_are_packed_greedily() {
    let splitter = ChunkSplitter::new(SplitterConfig::greedy(10)).unwrap();

    let chunks = splitter.split_plaintext("a b c\n\nd e f\n\n\n\ng h i j k", ChunkKind::Code);

    let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, vec!["a b c\n\nd e f", "g h i j k"]);
    assert!(chunks.iter().all(|c| c.kind == ChunkKind::Code && c.heading.is_none()));
    assert_eq!(chunks[0].token_est, 7);
    assert_eq!(chunks[1].token_est, 6);
}

#[test]
fn budget_respected_except_atomic_paragraph() {
    let splitter = ChunkSplitter::new(SplitterConfig {
        max_chunk_tokens: 40,
        min_chunk_tokens: 10,
        overlap_tokens: 8,
    })
    .unwrap();

    let sizes = [5, 12, 20, 3, 46, 8, 15, 2];
    let paragraphs: Vec<String> = sizes.iter().enumerate().map(|(k, &n)| paragraph(k, n)).collect();
    let text = paragraphs.join("\n\n");

    let chunks = splitter.split_plaintext(&text, ChunkKind::Doc);
    let over: Vec<_> = chunks.iter().filter(|c| c.token_est > 40).collect();

    assert_eq!(over.len(), 1, "only the atomic paragraph may exceed the budget");
    assert_eq!(over[0].text, paragraphs[4]);
    assert_eq!(chunks.iter().map(|c| c.ord).collect::<Vec<_>>(), (0..chunks.len()).collect::<Vec<_>>());
}

#[test]
fn overlap_carries_trailing_words() {
    let splitter = ChunkSplitter::new(SplitterConfig {
        max_chunk_tokens: 40,
        min_chunk_tokens: 0,
        overlap_tokens: 8,
    })
    .unwrap();

    // 28 words (36 tokens) cannot take another 12 words.
    let first = paragraph(0, 28);
    let second = paragraph(1, 12);
    let chunks = splitter.split_plaintext(&format!("{first}\n\n{second}"), ChunkKind::Doc);

    assert_eq!(chunks.len(), 2);
    // 8 tokens allow 6 trailing words (6 * 1.3 = 7.8).
    let tail = (22..28).map(|i| format!("w0_{i}")).collect::<Vec<_>>().join(" ");
    assert_eq!(chunks[1].text, format!("{tail}\n\n{second}"));
    assert!(chunks[1].token_est <= 40);
}

#[test]
fn ords_continue_from_counter() {
    let splitter = ChunkSplitter::new(SplitterConfig::greedy(2)).unwrap();

    let (chunks, next) = splitter.split_plaintext_from("a b\n\nc d", ChunkKind::Note, OrdCounter::starting_at(3));

    assert_eq!(chunks.iter().map(|c| c.ord).collect::<Vec<_>>(), vec![3, 4]);
    assert_eq!(next.value(), 5);
}
