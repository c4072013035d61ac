//! Sentence segmentation seam and the sentence stream builder.
//!
//! Sentence boundary detection is an external capability: this crate never
//! computes boundaries itself. [`SentenceSegmenter`] is the trait seam;
//! [`build_sentence_stream`] flattens per-page text into one ordered stream
//! of page-tagged sentences by invoking the segmenter once per page.
//!
//! The `segtok` feature enables [`SegtokSegmenter`], a rule-based backend.
//! [`LineSegmenter`] is a deterministic double for tests and demos.

use crate::chunking::types::{PageText, SentenceRecord};
use crate::types::ChunkError;

/// External sentence segmentation capability.
///
/// Implementations must be deterministic for a fixed language configuration
/// and side-effect free. The stream builder invokes [`segment`](Self::segment)
/// on each page's text in isolation; sentences never span pages.
pub trait SentenceSegmenter: Send + Sync {
    /// Splits `text` into ordered sentence-like units.
    fn segment(&self, text: &str) -> Result<Vec<String>, ChunkError>;

    /// Backend name used in telemetry and logs.
    fn name(&self) -> &'static str {
        "custom"
    }
}

/// Flattens ordered per-page text into one ordered sentence stream.
///
/// Each returned unit is tagged with the page it came from, so page numbers
/// are non-decreasing across the stream. Units are passed through at the
/// segmenter's own granularity: nothing is trimmed, merged, or filtered.
/// Concatenating all sentences in order reconstructs the document's reading
/// order.
///
/// Fails only by propagating the segmenter's own error.
pub fn build_sentence_stream(
    pages: &[PageText],
    segmenter: &dyn SentenceSegmenter,
) -> Result<Vec<SentenceRecord>, ChunkError> {
    let mut records = Vec::new();
    for page in pages {
        for sentence in segmenter.segment(&page.text)? {
            records.push(SentenceRecord {
                sentence,
                page: page.page,
            });
        }
    }
    Ok(records)
}

/// Deterministic segmenter for tests and demos: every non-blank line of the
/// input is one sentence unit.
///
/// Not a real boundary detector; it exists so pipelines can be exercised
/// without a segmentation backend, the same way a mock embedding provider
/// stands in for a model.
#[derive(Clone, Copy, Debug, Default)]
pub struct LineSegmenter;

impl SentenceSegmenter for LineSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>, ChunkError> {
        Ok(text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }

    fn name(&self) -> &'static str {
        "lines"
    }
}

#[cfg(feature = "segtok")]
mod segtok_backend {
    use super::SentenceSegmenter;
    use crate::types::ChunkError;

    /// [`SentenceSegmenter`] backed by the `segtok` rule-based splitter.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct SegtokSegmenter;

    impl SentenceSegmenter for SegtokSegmenter {
        fn segment(&self, text: &str) -> Result<Vec<String>, ChunkError> {
            use segtok::segmenter::{SegmentConfig, split_multi};
            Ok(split_multi(text, SegmentConfig::default()))
        }

        fn name(&self) -> &'static str {
            "segtok"
        }
    }
}

#[cfg(feature = "segtok")]
pub use segtok_backend::SegtokSegmenter;
