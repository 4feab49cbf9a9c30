//! Block-level types.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single tagged unit of document content.
///
/// Blocks are immutable values; the order they appear in a
/// [`Document`](super::Document) is the order they are rendered in.
///
/// Serde goes through [`RawBlock`], so decoding a block reports unknown tags
/// and missing payloads the same way [`RawBlock::into_block`] does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBlock", into = "RawBlock")]
pub enum Block {
    /// Plain document text
    Body(String),

    /// Short emphasized heading in the heading typeface, prompt scale
    Prompt(String),

    /// Emphasized heading in the heading typeface, title scale
    Title(String),

    /// Editorial note rendered inside a boxed region
    Addendum(String),

    /// Fixed decorative divider
    Separator,
}

impl Block {
    /// Create a body block.
    pub fn body(text: impl Into<String>) -> Self {
        Block::Body(text.into())
    }

    /// Create a prompt block.
    pub fn prompt(text: impl Into<String>) -> Self {
        Block::Prompt(text.into())
    }

    /// Create a title block.
    pub fn title(text: impl Into<String>) -> Self {
        Block::Title(text.into())
    }

    /// Create an addendum block.
    pub fn addendum(text: impl Into<String>) -> Self {
        Block::Addendum(text.into())
    }

    /// Get the kind of this block.
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Body(_) => BlockKind::Body,
            Block::Prompt(_) => BlockKind::Prompt,
            Block::Title(_) => BlockKind::Title,
            Block::Addendum(_) => BlockKind::Addendum,
            Block::Separator => BlockKind::Separator,
        }
    }

    /// Get the text payload, if the block carries one.
    pub fn payload(&self) -> Option<&str> {
        match self {
            Block::Body(text)
            | Block::Prompt(text)
            | Block::Title(text)
            | Block::Addendum(text) => Some(text),
            Block::Separator => None,
        }
    }

    /// Check if this is a separator.
    pub fn is_separator(&self) -> bool {
        matches!(self, Block::Separator)
    }
}

/// Tag of a block, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// `body`
    Body,
    /// `prompt`
    Prompt,
    /// `title`
    Title,
    /// `addendum`
    Addendum,
    /// `separator`
    Separator,
}

impl BlockKind {
    /// All kinds, in declaration order.
    pub const ALL: [BlockKind; 5] = [
        BlockKind::Body,
        BlockKind::Prompt,
        BlockKind::Title,
        BlockKind::Addendum,
        BlockKind::Separator,
    ];

    /// The wire name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Body => "body",
            BlockKind::Prompt => "prompt",
            BlockKind::Title => "title",
            BlockKind::Addendum => "addendum",
            BlockKind::Separator => "separator",
        }
    }

    /// Whether blocks of this kind must carry a payload.
    pub fn requires_payload(self) -> bool {
        !matches!(self, BlockKind::Separator)
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        BlockKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnsupportedBlock(s.to_string()))
    }
}

/// An unvalidated `(tag, payload?)` pair as supplied by a caller.
///
/// Convert with [`RawBlock::into_block`] (or `Block::try_from`) before
/// rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBlock {
    /// Block tag (e.g., "body", "separator")
    pub tag: String,

    /// Text payload; required for every tag except `separator`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
}

impl RawBlock {
    /// Create a raw block with a payload.
    pub fn new(tag: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            payload: Some(payload.into()),
        }
    }

    /// Create a raw block without a payload.
    pub fn bare(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            payload: None,
        }
    }

    /// Validate the tag and payload and produce a typed block.
    ///
    /// # Errors
    ///
    /// * `Error::UnsupportedBlock` if the tag is unknown
    /// * `Error::MalformedBlock` if the tag requires a payload and none was given
    pub fn into_block(self) -> Result<Block> {
        let kind: BlockKind = self.tag.parse()?;

        // A payload on a separator is ignored.
        if !kind.requires_payload() {
            return Ok(Block::Separator);
        }

        let text = self
            .payload
            .ok_or_else(|| Error::MalformedBlock(format!("'{}' block requires a payload", kind)))?;

        Ok(match kind {
            BlockKind::Body => Block::Body(text),
            BlockKind::Prompt => Block::Prompt(text),
            BlockKind::Title => Block::Title(text),
            BlockKind::Addendum => Block::Addendum(text),
            BlockKind::Separator => Block::Separator,
        })
    }
}

impl TryFrom<RawBlock> for Block {
    type Error = Error;

    fn try_from(raw: RawBlock) -> Result<Self> {
        raw.into_block()
    }
}

impl From<Block> for RawBlock {
    fn from(block: Block) -> Self {
        let tag = block.kind().as_str().to_string();
        let payload = match block {
            Block::Body(text)
            | Block::Prompt(text)
            | Block::Title(text)
            | Block::Addendum(text) => Some(text),
            Block::Separator => None,
        };
        Self { tag, payload }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_kind_parse() {
        assert_eq!("prompt".parse::<BlockKind>().unwrap(), BlockKind::Prompt);
        assert_eq!(
            "separator".parse::<BlockKind>().unwrap(),
            BlockKind::Separator
        );

        let err = "footnote".parse::<BlockKind>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedBlock(ref tag) if tag == "footnote"));
    }

    #[test]
    fn test_block_kind_is_case_sensitive() {
        assert!("Body".parse::<BlockKind>().is_err());
    }

    #[test]
    fn test_raw_block_into_block() {
        let block = RawBlock::new("title", "Chapter One").into_block().unwrap();
        assert_eq!(block, Block::title("Chapter One"));
        assert_eq!(block.payload(), Some("Chapter One"));
    }

    #[test]
    fn test_raw_block_missing_payload() {
        let err = RawBlock::bare("addendum").into_block().unwrap_err();
        assert!(matches!(err, Error::MalformedBlock(_)));
        assert!(err.to_string().contains("addendum"));
    }

    #[test]
    fn test_raw_separator_ignores_payload() {
        let block = RawBlock::new("separator", "ignored").into_block().unwrap();
        assert!(block.is_separator());
        assert_eq!(block.payload(), None);
    }

    #[test]
    fn test_block_serde_shape() {
        let json = serde_json::to_string(&Block::prompt("Go on")).unwrap();
        assert_eq!(json, r#"{"tag":"prompt","payload":"Go on"}"#);

        let json = serde_json::to_string(&Block::Separator).unwrap();
        assert_eq!(json, r#"{"tag":"separator"}"#);
    }

    #[test]
    fn test_serde_decode_matches_into_block() {
        let block: Block = serde_json::from_str(r#"{"tag":"separator","payload":"x"}"#).unwrap();
        assert_eq!(block, Block::Separator);

        let err = serde_json::from_str::<Block>(r#"{"tag":"aside","payload":"x"}"#).unwrap_err();
        assert!(err.to_string().contains("Unsupported block tag: aside"));

        let err = serde_json::from_str::<Block>(r#"{"tag":"title"}"#).unwrap_err();
        assert!(err.to_string().contains("Malformed block"));
    }

    #[test]
    fn test_raw_block_from_block() {
        let raw = RawBlock::from(Block::Separator);
        assert_eq!(raw, RawBlock::bare("separator"));

        let raw = RawBlock::from(Block::body("text"));
        assert_eq!(raw, RawBlock::new("body", "text"));
    }
}
