//! Document chunking: strategies that turn per-page extracted text into
//! ordered, size-bounded chunks with page provenance.
//!
//! Two strategies honor the same contract and are interchangeable behind
//! [`ChunkingStrategy`]:
//!
//! * [`assembly::SentenceWindowStrategy`] — greedy sentence windowing with
//!   sentence-count overlap (the default).
//! * [`layout::LayoutStrategy`] — paragraph/heading packing driven by layout
//!   signals.
//!
//! [`service::ChunkingService`] selects between them from configuration and
//! wraps a run with telemetry.

pub mod assembly;
pub mod config;
pub mod layout;
pub mod segmenter;
pub mod service;
pub mod types;

use crate::types::ChunkError;
use types::{ChunkingOutcome, PageText};

/// A chunking strategy consumes one document's ordered pages and produces an
/// ordered chunk sequence honoring the shared output contract.
///
/// Implementations are synchronous, deterministic for a fixed configuration,
/// and hold no mutable state across calls.
pub trait ChunkingStrategy: Send + Sync {
    /// Strategy name used in telemetry and logs.
    fn name(&self) -> &'static str;

    /// Turns ordered page text into an ordered chunk sequence.
    ///
    /// An empty or sentence-free input yields an empty outcome without error;
    /// classifying that as a document-processing failure is the caller's
    /// responsibility.
    fn chunk(&self, pages: &[PageText]) -> Result<ChunkingOutcome, ChunkError>;
}
