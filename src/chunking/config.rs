//! Chunking configuration.

use serde::{Deserialize, Serialize};

use crate::types::ChunkError;

/// Default character budget per chunk.
pub const DEFAULT_TARGET_CHUNK_SIZE: usize = 1000;

/// Default number of trailing sentences copied into the next chunk.
pub const DEFAULT_OVERLAP_SENTENCES: usize = 2;

/// Which chunking strategy a service should run.
///
/// Both variants honor the same output contract (content + page provenance);
/// they differ only in how boundaries are chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Greedy sentence windowing with sentence-count overlap.
    #[default]
    SentenceWindow,
    /// Structure-aware packing of paragraph blocks and headings.
    Layout,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::SentenceWindow => "sentence_window",
            StrategyKind::Layout => "layout",
        }
    }
}

/// Tunables for chunk assembly.
///
/// All fields are public; construct with [`Default`] and adjust via the
/// `with_*` setters or struct update syntax.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Character budget per chunk. A sentence is appended while the
    /// accumulator stays at or below this size; a single unit larger than the
    /// budget still occupies a chunk of its own.
    pub target_chunk_size: usize,
    /// Trailing sentences copied into the next chunk for context continuity.
    /// Measured in sentences, not characters; clamped at the start of the
    /// document. Only used by the sentence-window strategy.
    pub overlap_sentences: usize,
    /// Strategy selection.
    pub strategy: StrategyKind,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            target_chunk_size: DEFAULT_TARGET_CHUNK_SIZE,
            overlap_sentences: DEFAULT_OVERLAP_SENTENCES,
            strategy: StrategyKind::default(),
        }
    }
}

impl ChunkingConfig {
    #[must_use]
    pub fn with_target_chunk_size(mut self, target_chunk_size: usize) -> Self {
        self.target_chunk_size = target_chunk_size;
        self
    }

    #[must_use]
    pub fn with_overlap_sentences(mut self, overlap_sentences: usize) -> Self {
        self.overlap_sentences = overlap_sentences;
        self
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Rejects configurations that cannot produce meaningful chunks.
    pub fn validate(&self) -> Result<(), ChunkError> {
        if self.target_chunk_size == 0 {
            return Err(ChunkError::InvalidConfig(
                "target_chunk_size must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
