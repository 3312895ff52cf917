use chunk_core::chunking::markdown::parse_header;
use chunk_core::chunking::{ChunkSplitter, OrdCounter};
use chunk_core::config::SplitterConfig;

fn words(prefix: &str, n: usize) -> String {
    (0..n).map(|i| format!("{prefix}{i}")).collect::<Vec<_>>().join(" ")
}

fn headings(chunks: &[chunk_core::Chunk]) -> Vec<Option<&str>> {
    chunks.iter().map(|c| c.heading.as_deref()).collect()
}

#[test]
fn header_detection() {
    assert_eq!(parse_header("## Title  "), Some(("##", "Title")));
    assert_eq!(parse_header("### Sub section"), Some(("###", "Sub section")));
    assert_eq!(parse_header("##\tTabbed"), Some(("##", "Tabbed")));
    assert_eq!(parse_header("# Top"), None);
    assert_eq!(parse_header("#### Deep"), None);
    assert_eq!(parse_header("##NoSpace"), None);
    assert_eq!(parse_header("##   "), None);
    assert_eq!(parse_header("text ## not a header"), None);
}

#[test]
fn level_one_header_is_prologue_text() {
    let chunks = ChunkSplitter::default().split_markdown("# Title\n\nintro\n\n## A\n\nbody");

    assert_eq!(headings(&chunks), vec![None, Some("A")]);
    assert_eq!(chunks[0].text, "# Title\n\nintro");
    assert_eq!(chunks[1].text, "## A\n\nbody");
    assert_eq!(chunks[1].ord, 1);
}

#[test]
fn deeper_headers_stay_in_body() {
    let chunks = ChunkSplitter::default().split_markdown("### Sub\n\n#### deep\n\n##NoSpace");

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].heading.as_deref(), Some("Sub"));
    assert_eq!(chunks[0].text, "### Sub\n\n#### deep\n\n##NoSpace");
}

#[test]
fn empty_section_keeps_its_header() {
    let chunks = ChunkSplitter::default().split_markdown("## Empty\n\n## Next\n\ntext");

    let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, vec!["## Empty", "## Next\n\ntext"]);
}

#[test]
fn oversized_section_repeats_heading() {
    let splitter = ChunkSplitter::new(SplitterConfig::greedy(20)).unwrap();
    let p1 = words("x", 10);
    let p2 = words("y", 10);
    let markdown = format!("## Big\n\n{p1}\n\n{p2}\n\n## Small\n\nok");

    let chunks = splitter.split_markdown(&markdown);

    assert_eq!(headings(&chunks), vec![Some("Big"), Some("Big"), Some("Small")]);
    assert_eq!(chunks[0].text, format!("## Big\n\n{p1}"));
    assert_eq!(chunks[1].text, p2);
    assert_eq!(chunks[2].text, "## Small\n\nok");
    assert_eq!(chunks.iter().map(|c| c.ord).collect::<Vec<_>>(), vec![0, 1, 2]);
    assert!(chunks.iter().all(|c| c.token_est <= 20));
}

#[test]
fn oversized_prologue_stays_one_chunk() {
    let splitter = ChunkSplitter::new(SplitterConfig::greedy(20)).unwrap();
    let prologue = format!("{}\n\n{}", words("p", 10), words("q", 10));
    let markdown = format!("{prologue}\n\n## S\n\nz");

    let chunks = splitter.split_markdown(&markdown);

    assert_eq!(headings(&chunks), vec![None, Some("S")]);
    assert_eq!(chunks[0].text, prologue);
    assert_eq!(chunks[0].token_est, 26);
    assert_eq!(chunks[1].ord, 1);
}

#[test]
fn headerless_document_is_one_chunk() {
    let splitter = ChunkSplitter::new(SplitterConfig::greedy(20)).unwrap();
    let markdown = format!("\n{}\n\n{}\n\n", words("p", 10), words("q", 10));

    let chunks = splitter.split_markdown(&markdown);

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].heading, None);
    assert_eq!(chunks[0].text, markdown.trim());
    assert_eq!(chunks[0].ord, 0);
}

#[test]
fn atomic_paragraph_may_exceed_budget() {
    let splitter = ChunkSplitter::new(SplitterConfig::greedy(20)).unwrap();
    let huge = words("h", 30);
    let markdown = format!("## Long\n\nshort intro\n\n{huge}\n\nshort outro");

    let chunks = splitter.split_markdown(&markdown);
    let over: Vec<&chunk_core::Chunk> = chunks.iter().filter(|c| c.token_est > 20).collect();

    assert_eq!(over.len(), 1);
    assert_eq!(over[0].text, huge);
    assert!(chunks.iter().all(|c| c.heading.as_deref() == Some("Long")));
}

#[test]
fn ords_continue_from_counter() {
    let splitter = ChunkSplitter::default();
    let (chunks, next) = splitter.split_markdown_from("## A\n\na\n\n## B\n\nb", OrdCounter::starting_at(5));

    assert_eq!(chunks.iter().map(|c| c.ord).collect::<Vec<_>>(), vec![5, 6]);
    assert_eq!(next.value(), 7);
}
