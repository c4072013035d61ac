//! Crate-level error types.

use thiserror::Error;

/// Errors surfaced by the chunking pipeline.
///
/// The assembler itself never fails on structurally valid input; an empty
/// document simply yields an empty chunk sequence. Errors originate either
/// from the external sentence segmentation capability or from configuration
/// validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChunkError {
    /// The sentence segmentation capability failed on a page's text.
    ///
    /// Propagated unmodified from the segmenter; no retry, no partial
    /// recovery.
    #[error("sentence segmentation failed: {0}")]
    Segmentation(String),

    /// A configuration value was rejected during validation.
    #[error("invalid chunking configuration: {0}")]
    InvalidConfig(String),
}
