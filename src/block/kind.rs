//! Block classification.

use crate::limits::{CODE_FENCE, MAX_HEADING_LEVEL, ORDERED_SEPARATOR, UNORDERED_MARKER};

/// Structural kind of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Plain paragraph (fallback).
    Paragraph,
    /// ATX heading.
    Heading {
        /// Heading level (1-6).
        level: u8,
    },
    /// Fenced code block.
    Code,
    /// Blockquote; every line starts with `>`.
    Quote,
    /// Unordered list; every line starts with `- `.
    UnorderedList,
    /// Ordered list numbered 1, 2, 3... without gaps.
    OrderedList,
}

impl BlockKind {
    /// Short name, used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Heading { .. } => "heading",
            Self::Code => "code",
            Self::Quote => "quote",
            Self::UnorderedList => "unordered_list",
            Self::OrderedList => "ordered_list",
        }
    }
}

/// Classify a block by its structure. First match wins:
/// heading, code, quote, unordered list, ordered list, paragraph.
pub fn classify(block: &str) -> BlockKind {
    if let Some(level) = heading_level(block) {
        return BlockKind::Heading { level };
    }
    if block.starts_with(CODE_FENCE) && block.ends_with(CODE_FENCE) {
        return BlockKind::Code;
    }
    if block.split('\n').all(|line| line.starts_with('>')) {
        return BlockKind::Quote;
    }
    if block.split('\n').all(|line| line.starts_with(UNORDERED_MARKER)) {
        return BlockKind::UnorderedList;
    }
    if is_ordered_list(block) {
        return BlockKind::OrderedList;
    }
    BlockKind::Paragraph
}

/// 1-6 leading `#` followed by a space.
fn heading_level(block: &str) -> Option<u8> {
    let hashes = block.bytes().take_while(|&b| b == b'#').count();
    if !(1..=MAX_HEADING_LEVEL).contains(&hashes) {
        return None;
    }
    if block.as_bytes().get(hashes) != Some(&b' ') {
        return None;
    }
    u8::try_from(hashes).ok()
}

/// Line i must start with `{i+1}. `.
fn is_ordered_list(block: &str) -> bool {
    block.split('\n').enumerate().all(|(i, line)| {
        line.strip_prefix((i + 1).to_string().as_str())
            .is_some_and(|rest| rest.starts_with(ORDERED_SEPARATOR))
    })
}
