//! Block-level parser for Markdown.
//!
//! A document is split on blank lines into blocks, each block is classified
//! by its structure alone, then parsed into one element:
//! - Headings
//! - Fenced code blocks
//! - Blockquotes
//! - Unordered and ordered lists
//! - Paragraphs

mod kind;
mod parser;

pub use kind::{BlockKind, classify};
pub use parser::BlockParser;

use crate::limits::BLOCK_SEPARATOR;

/// Split a document into trimmed, non-empty blocks, in order.
///
/// Runs of more than one blank line collapse; whitespace-only pieces are
/// dropped.
pub fn split_blocks(document: &str) -> Vec<&str> {
    document
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}
