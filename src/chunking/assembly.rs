//! Sentence-window chunk assembly.
//!
//! The core of the crate: a single forward pass that folds an ordered,
//! page-tagged sentence stream into size-bounded chunks, each seeded with the
//! trailing sentences of its predecessor for context continuity and labeled
//! with the pages it was drawn from.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::chunking::ChunkingStrategy;
use crate::chunking::config::ChunkingConfig;
use crate::chunking::segmenter::{SentenceSegmenter, build_sentence_stream};
use crate::chunking::types::{Chunk, ChunkingOutcome, PageText, SentenceRecord};
use crate::types::ChunkError;

/// Folds a sentence stream into overlapping, size-bounded chunks.
///
/// One forward pass over `sentences` with an accumulator, a page set, and a
/// cursor:
///
/// * While the accumulator plus the next sentence stays within
///   `target_chunk_size` characters, the sentence is appended (space
///   separated) and its page recorded.
/// * On overflow the accumulator is sealed (trimmed, pages rendered sorted
///   ascending and deduplicated) and reseeded with the last
///   `overlap_sentences` sentences before the cursor, clamped at the start of
///   the stream, so the next chunk opens with the text that closed this one.
///   The cursor does not advance on a seal; the overflowing sentence is
///   re-evaluated against the reseeded, shorter accumulator.
/// * When the stream is exhausted, a non-empty accumulator is sealed as the
///   final chunk.
///
/// Forward-progress guard: a sentence is appended unconditionally, regardless
/// of size, whenever nothing has been appended since the last seal. Every
/// seal is therefore followed by at least one append and the pass terminates
/// on every input, including a single sentence larger than the whole budget
/// or an overlap seed that leaves no room for the pending sentence.
///
/// Chunks are emitted strictly in document reading order. An empty stream
/// yields an empty sequence; this function never fails.
pub fn assemble_chunks(
    sentences: &[SentenceRecord],
    target_chunk_size: usize,
    overlap_sentences: usize,
) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut pages: BTreeSet<u32> = BTreeSet::new();
    let mut appended_since_seal = false;

    let mut i = 0;
    while i < sentences.len() {
        let record = &sentences[i];
        // The joining space is not counted against the budget; sealed
        // content may exceed it by the separators.
        let fits = current.len() + record.sentence.len() <= target_chunk_size;

        if fits || !appended_since_seal {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&record.sentence);
            pages.insert(record.page);
            appended_since_seal = true;
            i += 1;
        } else {
            chunks.push(Chunk::seal(&current, &pages));
            let seed_start = i.saturating_sub(overlap_sentences);
            let seed = &sentences[seed_start..i];
            current = join_sentences(seed);
            pages = seed.iter().map(|record| record.page).collect();
            appended_since_seal = false;
        }
    }

    if !current.is_empty() {
        chunks.push(Chunk::seal(&current, &pages));
    }

    chunks
}

fn join_sentences(records: &[SentenceRecord]) -> String {
    let parts: Vec<&str> = records.iter().map(|r| r.sentence.as_str()).collect();
    parts.join(" ")
}

/// The sentence-window chunking strategy: an external segmentation capability
/// feeding [`assemble_chunks`].
pub struct SentenceWindowStrategy {
    segmenter: Arc<dyn SentenceSegmenter>,
    config: ChunkingConfig,
}

impl SentenceWindowStrategy {
    pub fn new(
        segmenter: Arc<dyn SentenceSegmenter>,
        config: ChunkingConfig,
    ) -> Result<Self, ChunkError> {
        config.validate()?;
        Ok(Self { segmenter, config })
    }

    pub fn config(&self) -> &ChunkingConfig {
        &self.config
    }
}

impl ChunkingStrategy for SentenceWindowStrategy {
    fn name(&self) -> &'static str {
        "sentence_window"
    }

    fn chunk(&self, pages: &[PageText]) -> Result<ChunkingOutcome, ChunkError> {
        let sentences = build_sentence_stream(pages, self.segmenter.as_ref())?;
        let chunks = assemble_chunks(
            &sentences,
            self.config.target_chunk_size,
            self.config.overlap_sentences,
        );
        Ok(ChunkingOutcome::new(chunks, pages, sentences.len()))
    }
}
