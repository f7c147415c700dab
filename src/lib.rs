//! mdsite: Markdown to HTML element tree, and a small static site generator
//! built on it.
//!
//! The conversion pipeline is:
//! document → blocks → block kind → element per block (inline spans as
//! leaves) → one `div` root → HTML string.
//!
//! # Design Principles
//! - Every stage is a pure function over its input string
//! - Any structural violation aborts the whole document; no partial output
//! - No HTML escaping: text and attribute values are written verbatim
//! - Emphasis is not nested: a tagged span is never re-scanned

pub mod block;
pub mod config;
pub mod cursor;
mod error;
pub mod inline;
pub mod limits;
pub mod node;
pub mod render;
pub mod site;
mod title;

// Re-export primary types
pub use block::{BlockKind, BlockParser, classify, split_blocks};
pub use config::Config;
pub use error::{Error, Result};
pub use inline::{InlineSpan, InlineTokenizer, tokenize};
pub use node::{ElementNode, Node, TextNode};
pub use render::{HtmlWriter, render};
pub use title::extract_title;

/// Convert a Markdown document into its element tree: a `div` with one
/// child per block.
pub fn markdown_to_node(markdown: &str) -> Result<Node> {
    BlockParser::new().parse_document(markdown)
}

/// Convert Markdown to HTML.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let html = mdsite::to_html("# Hello\n\nWorld").unwrap();
/// assert_eq!(html, "<div><h1>Hello</h1><p>World</p></div>");
/// ```
pub fn to_html(markdown: &str) -> Result<String> {
    let tree = markdown_to_node(markdown)?;
    let mut writer = HtmlWriter::with_capacity_for(markdown.len());
    writer.write_node(&tree)?;
    Ok(writer.into_string())
}
