//! Document-level types.

use super::{Block, BlockKind, RawBlock};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// An ordered sequence of blocks.
///
/// Serializes as a bare JSON array of `{"tag": ..., "payload": ...}` objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    /// Blocks in rendering order
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from a list of blocks.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Validate caller-supplied raw blocks and build a document.
    ///
    /// Fails on the first unknown tag or missing payload; nothing is kept
    /// from a partially valid list.
    pub fn from_raw_blocks<I>(raw: I) -> Result<Self>
    where
        I: IntoIterator<Item = RawBlock>,
    {
        let blocks = raw
            .into_iter()
            .map(RawBlock::into_block)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { blocks })
    }

    /// Parse a JSON array of raw blocks.
    ///
    /// # Example
    ///
    /// ```
    /// use txtex::Document;
    ///
    /// let doc = Document::from_json(r#"[{"tag":"title","payload":"One"},{"tag":"separator"}]"#)?;
    /// assert_eq!(doc.len(), 2);
    /// # Ok::<(), txtex::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Vec<RawBlock> = serde_json::from_str(json)?;
        Self::from_raw_blocks(raw)
    }

    /// Append a block.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over blocks in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Count blocks of a given kind.
    pub fn count(&self, kind: BlockKind) -> usize {
        self.blocks.iter().filter(|b| b.kind() == kind).count()
    }

    /// Get the payload text of all blocks, separated by blank lines.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .filter_map(Block::payload)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl From<Vec<Block>> for Document {
    fn from(blocks: Vec<Block>) -> Self {
        Self::from_blocks(blocks)
    }
}

impl FromIterator<Block> for Document {
    fn from_iter<T: IntoIterator<Item = Block>>(iter: T) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
