//! Data types shared across chunking strategies.
//!
//! The flow is `PageText` (input contract) → `SentenceRecord` (internal
//! stream) → `Chunk` (strategy output) → `ChunkRecord` (persistence-facing
//! hand-off shape for the embedding/storage collaborator).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Extracted text for a single page, as delivered by the extraction
/// collaborator.
///
/// Pages are 1-based and arrive in reading order; pages whose extracted text
/// is empty or whitespace-only are filtered out upstream and never reach the
/// chunker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    pub page: u32,
    pub text: String,
}

impl PageText {
    pub fn new(page: u32, text: impl Into<String>) -> Self {
        Self {
            page,
            text: text.into(),
        }
    }
}

/// One sentence unit in document reading order, tagged with its source page.
///
/// Page numbers are non-decreasing across a stream; a single page may
/// contribute zero or more sentences.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceRecord {
    pub sentence: String,
    pub page: u32,
}

impl SentenceRecord {
    pub fn new(sentence: impl Into<String>, page: u32) -> Self {
        Self {
            sentence: sentence.into(),
            page,
        }
    }
}

/// A sealed span of concatenated text with the set of source pages that
/// contributed to it. Immutable once emitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub content: String,
    /// Distinct source pages, sorted ascending.
    pub pages: Vec<u32>,
}

impl Chunk {
    /// Seals an accumulator into a chunk: content is trimmed, pages are
    /// deduplicated and sorted ascending (numeric order, not lexicographic).
    pub(crate) fn seal(content: &str, pages: &BTreeSet<u32>) -> Self {
        Self {
            content: content.trim().to_string(),
            pages: pages.iter().copied().collect(),
        }
    }

    /// Renders the provenance label in the output-contract form, e.g.
    /// `"1, 2, 5"`.
    pub fn pages_label(&self) -> String {
        let rendered: Vec<String> = self.pages.iter().map(u32::to_string).collect();
        rendered.join(", ")
    }

    /// Metadata for the persistence-facing contract.
    pub fn metadata(&self) -> ChunkMetadata {
        ChunkMetadata {
            pages: self.pages_label(),
        }
    }
}

/// Metadata attached to a chunk in the output contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    /// Sorted, comma-space-separated list of distinct page numbers.
    pub pages: String,
}

/// Persistence-facing shape of a chunk.
///
/// `chunk_index` reflects emission order and is assigned by the conversion
/// ([`ChunkingOutcome::into_records`]), never by the assembler itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkRecord {
    pub chunk_index: usize,
    pub content: String,
    pub metadata: ChunkMetadata,
}

/// Full result of chunking one document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChunkingOutcome {
    /// Chunks in emission order, which is document reading order.
    pub chunks: Vec<Chunk>,
    /// Number of distinct pages in the input. Carried explicitly so callers
    /// never recover a page count by parsing a chunk's metadata label.
    pub total_pages: usize,
    pub stats: ChunkingStats,
}

impl ChunkingOutcome {
    pub(crate) fn new(chunks: Vec<Chunk>, pages: &[PageText], total_segments: usize) -> Self {
        let total_pages = pages
            .iter()
            .map(|page| page.page)
            .collect::<BTreeSet<_>>()
            .len();
        let total_chunks = chunks.len();
        let average_chunk_chars = if total_chunks == 0 {
            0.0
        } else {
            let total_chars: usize = chunks.iter().map(|chunk| chunk.content.len()).sum();
            total_chars as f64 / total_chunks as f64
        };
        Self {
            chunks,
            total_pages,
            stats: ChunkingStats {
                total_segments,
                total_chunks,
                average_chunk_chars,
            },
        }
    }

    /// `true` when no chunks were produced. Classifying a zero-chunk outcome
    /// as a document-processing failure is the caller's responsibility.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Consumes the outcome and yields hand-off records, with `chunk_index`
    /// derived from emission order.
    pub fn into_records(self) -> Vec<ChunkRecord> {
        self.chunks
            .into_iter()
            .enumerate()
            .map(|(chunk_index, chunk)| ChunkRecord {
                chunk_index,
                metadata: chunk.metadata(),
                content: chunk.content,
            })
            .collect()
    }
}

/// Summary counters for one chunking run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChunkingStats {
    /// Units consumed by the strategy: sentences for the sentence-window
    /// strategy, layout blocks for the layout strategy.
    pub total_segments: usize,
    pub total_chunks: usize,
    pub average_chunk_chars: f64,
}
