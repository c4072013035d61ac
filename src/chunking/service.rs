//! Document chunking service.
//!
//! One explicitly constructed, injectable handle: build it once with a
//! segmenter and a configuration, then hand it to whatever processes
//! documents. Each call owns its own accumulators, so a shared service needs
//! no locking.

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::ChunkingStrategy;
use super::assembly::SentenceWindowStrategy;
use super::config::{ChunkingConfig, StrategyKind};
use super::layout::LayoutStrategy;
use super::segmenter::SentenceSegmenter;
use super::types::{ChunkingOutcome, PageText};
use crate::types::ChunkError;

/// Request to chunk one document's worth of page text.
#[derive(Clone, Debug)]
pub struct ChunkDocumentRequest {
    pub pages: Vec<PageText>,
    /// Per-request override of the service configuration.
    pub config: Option<ChunkingConfig>,
}

impl ChunkDocumentRequest {
    pub fn new(pages: Vec<PageText>) -> Self {
        Self {
            pages,
            config: None,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: ChunkingConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Chunking outcome paired with run telemetry.
#[derive(Clone, Debug, Serialize)]
pub struct ChunkDocumentResponse {
    pub outcome: ChunkingOutcome,
    pub telemetry: ChunkTelemetry,
}

/// Summary of a single chunking run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChunkTelemetry {
    pub strategy: String,
    pub duration_ms: u64,
    pub page_count: usize,
    pub segment_count: usize,
    pub chunk_count: usize,
    pub average_chunk_chars: f64,
}

/// Synchronous chunking service.
pub struct ChunkingService {
    segmenter: Option<Arc<dyn SentenceSegmenter>>,
    config: ChunkingConfig,
}

impl ChunkingService {
    pub fn builder() -> ChunkingServiceBuilder {
        ChunkingServiceBuilder::default()
    }

    /// Chunks one document synchronously.
    ///
    /// Returns a zero-chunk outcome for sentence-free input; deciding whether
    /// that marks the document as failed is up to the caller.
    pub fn chunk_document(
        &self,
        request: ChunkDocumentRequest,
    ) -> Result<ChunkDocumentResponse, ChunkError> {
        let ChunkDocumentRequest { pages, config } = request;
        let config = config.unwrap_or_else(|| self.config.clone());
        let strategy = self.strategy_for(&config)?;

        debug!(
            strategy = strategy.name(),
            pages = pages.len(),
            target_chunk_size = config.target_chunk_size,
            "chunking document"
        );

        let started = Instant::now();
        let outcome = strategy.chunk(&pages)?;
        let telemetry = ChunkTelemetry {
            strategy: strategy.name().to_string(),
            duration_ms: started.elapsed().as_millis() as u64,
            page_count: pages.len(),
            segment_count: outcome.stats.total_segments,
            chunk_count: outcome.stats.total_chunks,
            average_chunk_chars: outcome.stats.average_chunk_chars,
        };

        info!(
            strategy = %telemetry.strategy,
            chunks = telemetry.chunk_count,
            pages = telemetry.page_count,
            segments = telemetry.segment_count,
            "document chunked"
        );

        Ok(ChunkDocumentResponse { outcome, telemetry })
    }

    fn strategy_for(&self, config: &ChunkingConfig) -> Result<Box<dyn ChunkingStrategy>, ChunkError> {
        match config.strategy {
            StrategyKind::SentenceWindow => {
                let segmenter = self.segmenter.clone().ok_or_else(|| {
                    ChunkError::InvalidConfig(
                        "sentence window strategy requires a segmenter".into(),
                    )
                })?;
                Ok(Box::new(SentenceWindowStrategy::new(
                    segmenter,
                    config.clone(),
                )?))
            }
            StrategyKind::Layout => Ok(Box::new(LayoutStrategy::new(config.clone())?)),
        }
    }
}

/// Builder for [`ChunkingService`] instances.
#[derive(Default)]
pub struct ChunkingServiceBuilder {
    segmenter: Option<Arc<dyn SentenceSegmenter>>,
    config: Option<ChunkingConfig>,
}

impl ChunkingServiceBuilder {
    /// Injects the sentence segmentation capability.
    ///
    /// Required for the sentence-window strategy; the layout strategy runs
    /// without one.
    #[must_use]
    pub fn with_segmenter(mut self, segmenter: impl SentenceSegmenter + 'static) -> Self {
        self.segmenter = Some(Arc::new(segmenter));
        self
    }

    /// Injects a shared segmenter handle.
    #[must_use]
    pub fn with_segmenter_arc(mut self, segmenter: Arc<dyn SentenceSegmenter>) -> Self {
        self.segmenter = Some(segmenter);
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: ChunkingConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn build(self) -> ChunkingService {
        ChunkingService {
            segmenter: self.segmenter,
            config: self.config.unwrap_or_default(),
        }
    }
}
