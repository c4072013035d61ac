//! Layout-aware chunking strategy.
//!
//! Alternative to the sentence-window strategy that leans on document layout
//! signals instead of sentence boundaries: each page is split into paragraph
//! blocks on blank lines, heading-like lines are glued to the block that
//! follows them, and blocks are packed into chunks under the same character
//! budget. The output contract (content + page provenance) is identical, so
//! the two strategies are interchangeable behind [`ChunkingStrategy`].

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::chunking::ChunkingStrategy;
use crate::chunking::config::ChunkingConfig;
use crate::chunking::types::{Chunk, ChunkingOutcome, PageText};
use crate::types::ChunkError;

/// A short single line without terminal punctuation, optionally carrying a
/// section number prefix.
static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d+(?:\.\d+)*\.?\s+)?[A-Z][^.!?]{0,79}$").expect("heading pattern is valid")
});

/// One packable unit: a paragraph block, possibly prefixed by the heading
/// that introduced it.
struct LayoutUnit {
    text: String,
    pages: BTreeSet<u32>,
}

impl LayoutUnit {
    fn len(&self) -> usize {
        self.text.len()
    }
}

/// Structure-aware chunking over paragraph blocks and headings.
pub struct LayoutStrategy {
    config: ChunkingConfig,
}

impl LayoutStrategy {
    pub fn new(config: ChunkingConfig) -> Result<Self, ChunkError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ChunkingConfig {
        &self.config
    }
}

impl ChunkingStrategy for LayoutStrategy {
    fn name(&self) -> &'static str {
        "layout"
    }

    fn chunk(&self, pages: &[PageText]) -> Result<ChunkingOutcome, ChunkError> {
        let units = collect_units(pages);
        let chunks = pack_units(&units, self.config.target_chunk_size);
        Ok(ChunkingOutcome::new(chunks, pages, units.len()))
    }
}

/// Splits every page into paragraph blocks on blank lines, collapsing
/// hard-wrapped lines within a block to single spaces, and glues each
/// heading-like block onto the block that follows it.
fn collect_units(pages: &[PageText]) -> Vec<LayoutUnit> {
    let mut units = Vec::new();
    let mut pending_heading: Option<LayoutUnit> = None;

    for page in pages {
        for block in page_blocks(&page.text) {
            let is_heading = !block.contains('\n') && HEADING.is_match(&block);
            let mut unit = LayoutUnit {
                text: block,
                pages: BTreeSet::from([page.page]),
            };

            if let Some(heading) = pending_heading.take() {
                unit.pages.extend(heading.pages.iter().copied());
                unit.text = format!("{}\n{}", heading.text, unit.text);
            }

            if is_heading {
                pending_heading = Some(unit);
            } else {
                units.push(unit);
            }
        }
    }

    // A trailing heading with nothing after it still carries provenance.
    if let Some(heading) = pending_heading {
        units.push(heading);
    }

    units
}

fn page_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut lines: Vec<&str> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !lines.is_empty() {
                blocks.push(lines.join(" "));
                lines.clear();
            }
        } else {
            lines.push(line);
        }
    }
    if !lines.is_empty() {
        blocks.push(lines.join(" "));
    }

    blocks
}

/// Greedy packing of units under the character budget. A unit larger than the
/// budget occupies a chunk of its own; the loop consumes one unit per
/// iteration, so it always terminates.
fn pack_units(units: &[LayoutUnit], target_chunk_size: usize) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut pages: BTreeSet<u32> = BTreeSet::new();

    for unit in units {
        if !current.is_empty() && current.len() + 2 + unit.len() > target_chunk_size {
            chunks.push(Chunk::seal(&current, &pages));
            current.clear();
            pages.clear();
        }
        if !current.is_empty() {
            current.push_str("\n\n");
        }
        current.push_str(&unit.text);
        pages.extend(unit.pages.iter().copied());
    }

    if !current.is_empty() {
        chunks.push(Chunk::seal(&current, &pages));
    }

    chunks
}
