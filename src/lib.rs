//! Page-provenance document chunking for retrieval pipelines.
//!
//! ```text
//! PageText stream ──► segmenter::build_sentence_stream ──► SentenceRecord stream
//!        │                                                        │
//!        │                                assembly::assemble_chunks (sentence window)
//!        │                                                        │
//!        └─► layout::LayoutStrategy ─────────────┐                │
//!                                                ▼                ▼
//!                                       ChunkingOutcome (chunks + explicit page count)
//!                                                         │
//!                service::ChunkingService ──► ChunkRecord hand-off to
//!                                             embedding / persistence collaborators
//! ```
//!
//! Pages arrive from an extraction collaborator as ordered [`PageText`]
//! values; a [`SentenceSegmenter`] (an injected external capability) turns
//! each page into sentence units, and the assembler folds the resulting
//! stream into size-bounded chunks that overlap by a configurable number of
//! trailing sentences. Every chunk carries the sorted set of pages it was
//! drawn from.
//!
//! # Example
//!
//! ```
//! use pagesmith::{ChunkDocumentRequest, ChunkingService, LineSegmenter, PageText};
//!
//! let service = ChunkingService::builder()
//!     .with_segmenter(LineSegmenter)
//!     .build();
//!
//! let response = service
//!     .chunk_document(ChunkDocumentRequest::new(vec![
//!         PageText::new(1, "Sentence one.\nSentence two."),
//!         PageText::new(2, "Sentence three."),
//!     ]))
//!     .unwrap();
//!
//! let records = response.outcome.into_records();
//! assert_eq!(records[0].metadata.pages, "1, 2");
//! ```

pub mod chunking;
pub mod types;

pub use chunking::ChunkingStrategy;
pub use chunking::assembly::{SentenceWindowStrategy, assemble_chunks};
pub use chunking::config::{
    ChunkingConfig, DEFAULT_OVERLAP_SENTENCES, DEFAULT_TARGET_CHUNK_SIZE, StrategyKind,
};
pub use chunking::layout::LayoutStrategy;
pub use chunking::segmenter::{LineSegmenter, SentenceSegmenter, build_sentence_stream};
pub use chunking::service::{
    ChunkDocumentRequest, ChunkDocumentResponse, ChunkTelemetry, ChunkingService,
    ChunkingServiceBuilder,
};
pub use chunking::types::{
    Chunk, ChunkMetadata, ChunkRecord, ChunkingOutcome, ChunkingStats, PageText, SentenceRecord,
};
pub use types::ChunkError;

#[cfg(feature = "segtok")]
pub use chunking::segmenter::SegtokSegmenter;
