//! End-to-end tests for the sentence-window pipeline.

use pagesmith::{
    ChunkDocumentRequest, ChunkingConfig, ChunkingService, LineSegmenter, PageText,
    SentenceRecord, assemble_chunks,
};

fn service() -> ChunkingService {
    ChunkingService::builder()
        .with_segmenter(LineSegmenter)
        .build()
}

/// Builds a sentence of exactly `len` characters with a recognizable prefix.
fn sentence(i: usize, len: usize) -> String {
    let mut s = format!("s{i:02} ");
    while s.len() < len - 1 {
        s.push('w');
    }
    s.push('.');
    s
}

#[test]
fn single_page_three_sentences_yield_one_chunk() {
    let response = service()
        .chunk_document(ChunkDocumentRequest::new(vec![PageText::new(
            1,
            "Sentence one.\nSentence two.\nSentence three.",
        )]))
        .unwrap();

    let chunks = &response.outcome.chunks;
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].content, "Sentence one. Sentence two. Sentence three.");
    assert_eq!(chunks[0].pages_label(), "1");
}

#[test]
fn two_pages_split_into_two_overlapping_chunks() {
    // Two ~600-char pages of five 120-char sentences each against a 1000-char
    // budget: the window seals after eight sentences, and the second chunk
    // must open with the two sentences that closed the first.
    let page_one: Vec<String> = (0..5).map(|i| sentence(i, 120)).collect();
    let page_two: Vec<String> = (5..10).map(|i| sentence(i, 120)).collect();

    let response = service()
        .chunk_document(ChunkDocumentRequest::new(vec![
            PageText::new(1, page_one.join("\n")),
            PageText::new(2, page_two.join("\n")),
        ]))
        .unwrap();

    let chunks = &response.outcome.chunks;
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].pages_label(), "1, 2");

    let overlap = format!("{} {}", sentence(6, 120), sentence(7, 120));
    assert!(chunks[1].content.starts_with(&overlap));
    assert_eq!(chunks[1].pages_label(), "2");
}

#[test]
fn empty_input_produces_empty_chunk_sequence() {
    let response = service()
        .chunk_document(ChunkDocumentRequest::new(Vec::new()))
        .unwrap();
    assert!(response.outcome.chunks.is_empty());
    assert_eq!(response.outcome.total_pages, 0);
}

#[test]
fn overlap_prefix_matches_the_previous_window_verbatim() {
    let stream: Vec<SentenceRecord> = (0..12)
        .map(|i| SentenceRecord::new(sentence(i, 40), 1 + (i as u32) / 4))
        .collect();
    let overlap = 2;
    let chunks = assemble_chunks(&stream, 150, overlap);
    assert!(chunks.len() > 1);

    for pair in chunks.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        // The previous chunk ends with the exact text the next one begins
        // with (the opening seed never exceeds `overlap` sentences, each 40
        // chars plus one separator).
        let seed_len = (40 + 1) * overlap - 1;
        let prefix = &b.content[..seed_len.min(b.content.len())];
        assert!(
            a.content.ends_with(prefix),
            "chunk did not end with its successor's seed: {prefix:?}"
        );
    }
}

#[test]
fn removing_overlap_prefixes_reconstructs_the_sentence_stream() {
    let stream: Vec<SentenceRecord> = (0..9)
        .map(|i| SentenceRecord::new(sentence(i, 30), 1))
        .collect();
    let overlap = 2;
    let chunks = assemble_chunks(&stream, 100, overlap);
    assert!(chunks.len() > 1);

    let mut rebuilt = chunks[0].content.clone();
    for pair in chunks.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let seed_len = (30 + 1) * overlap - 1;
        let prefix = &b.content[..seed_len.min(b.content.len())];
        assert!(a.content.ends_with(prefix));
        rebuilt.push(' ');
        rebuilt.push_str(b.content[prefix.len()..].trim_start());
    }

    let original = stream
        .iter()
        .map(|record| record.sentence.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    assert_eq!(rebuilt, original);
}

#[test]
fn page_coverage_equals_contributing_pages() {
    let pages = vec![
        PageText::new(1, "page one sentence."),
        PageText::new(2, "\n \n"), // extractor let a blank page through
        PageText::new(3, "page three sentence A.\npage three sentence B."),
        PageText::new(7, "page seven sentence."),
    ];
    let response = service()
        .chunk_document(
            ChunkDocumentRequest::new(pages).with_config(
                ChunkingConfig::default()
                    .with_target_chunk_size(40)
                    .with_overlap_sentences(1),
            ),
        )
        .unwrap();

    let mut covered: Vec<u32> = response
        .outcome
        .chunks
        .iter()
        .flat_map(|chunk| chunk.pages.iter().copied())
        .collect();
    covered.sort_unstable();
    covered.dedup();

    // Page 2 contributed no sentences and must not appear anywhere.
    assert_eq!(covered, vec![1, 3, 7]);
}

#[test]
fn determinism_byte_identical_across_runs() {
    let pages = vec![
        PageText::new(1, "alpha beta gamma.\ndelta epsilon zeta.\neta theta iota."),
        PageText::new(2, "kappa lambda mu.\nnu xi omicron."),
    ];
    let config = ChunkingConfig::default()
        .with_target_chunk_size(30)
        .with_overlap_sentences(2);

    let first = service()
        .chunk_document(ChunkDocumentRequest::new(pages.clone()).with_config(config.clone()))
        .unwrap();
    let second = service()
        .chunk_document(ChunkDocumentRequest::new(pages).with_config(config))
        .unwrap();

    assert_eq!(first.outcome, second.outcome);
}

#[test]
fn oversized_sentence_is_emitted_not_looped_on() {
    let giant = "g".repeat(5000);
    let response = service()
        .chunk_document(ChunkDocumentRequest::new(vec![PageText::new(1, giant.clone())]))
        .unwrap();

    assert_eq!(response.outcome.chunks.len(), 1);
    assert_eq!(response.outcome.chunks[0].content, giant);
}

#[test]
fn records_match_the_output_contract() {
    let response = service()
        .chunk_document(ChunkDocumentRequest::new(vec![
            PageText::new(2, "on page two."),
            PageText::new(10, "on page ten."),
        ]))
        .unwrap();

    let records = response.outcome.into_records();
    assert_eq!(records.len(), 1);
    let json = serde_json::to_value(&records[0]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "chunk_index": 0,
            "content": "on page two. on page ten.",
            "metadata": {"pages": "2, 10"}
        })
    );
}
