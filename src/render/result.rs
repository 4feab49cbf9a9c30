//! Rendering result with statistics.

use crate::model::{Block, BlockKind};
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including the markup and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered LaTeX source
    pub content: String,

    /// Block statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: RenderStats) -> Self {
        Self { content, stats }
    }
}

/// Statistics collected while rendering blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of body blocks
    pub body_count: u32,

    /// Number of prompt blocks
    pub prompt_count: u32,

    /// Number of title blocks
    pub title_count: u32,

    /// Number of addendum blocks
    pub addendum_count: u32,

    /// Number of separators
    pub separator_count: u32,

    /// Approximate word count of all payloads (whitespace-separated tokens)
    pub word_count: u32,

    /// Whether a watermark directive was emitted
    pub watermarked: bool,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one rendered block.
    pub fn add_block(&mut self, block: &Block) {
        match block.kind() {
            BlockKind::Body => self.body_count += 1,
            BlockKind::Prompt => self.prompt_count += 1,
            BlockKind::Title => self.title_count += 1,
            BlockKind::Addendum => self.addendum_count += 1,
            BlockKind::Separator => self.separator_count += 1,
        }
        if let Some(text) = block.payload() {
            self.word_count += text.split_whitespace().count() as u32;
        }
    }

    /// Total number of blocks rendered.
    pub fn block_count(&self) -> u32 {
        self.body_count
            + self.prompt_count
            + self.title_count
            + self.addendum_count
            + self.separator_count
    }
}
