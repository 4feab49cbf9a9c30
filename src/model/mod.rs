//! Document model types.
//!
//! This module defines the block representation that sits between the
//! plain-text parser (or any other caller) and the LaTeX renderer.

mod block;
mod document;

pub use block::{Block, BlockKind, RawBlock};
pub use document::Document;
