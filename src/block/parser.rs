//! Block parser implementation.

use crate::Result;
use crate::inline::InlineTokenizer;
use crate::limits::{CODE_FENCE, ORDERED_SEPARATOR, UNORDERED_MARKER};
use crate::node::Node;

use super::kind::{BlockKind, classify};
use super::split_blocks;

/// Converts classified blocks into element-tree nodes.
#[derive(Debug, Clone, Default)]
pub struct BlockParser {
    tokenizer: InlineTokenizer,
}

impl BlockParser {
    /// Create a new block parser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser that tokenizes inline text with `tokenizer`.
    pub fn with_tokenizer(tokenizer: InlineTokenizer) -> Self {
        Self { tokenizer }
    }

    /// Parse a whole document into a `div` holding one node per block.
    pub fn parse_document(&self, document: &str) -> Result<Node> {
        let blocks = split_blocks(document);
        tracing::trace!(blocks = blocks.len(), "Parsing document");

        let children = blocks
            .into_iter()
            .map(|block| {
                let kind = classify(block);
                tracing::trace!(kind = kind.name(), bytes = block.len(), "Parsing block");
                self.parse(block, kind)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Node::element("div", children))
    }

    /// Parse one block of a known kind.
    pub fn parse(&self, block: &str, kind: BlockKind) -> Result<Node> {
        match kind {
            BlockKind::Paragraph => self.paragraph(block),
            BlockKind::Heading { level } => self.heading(block, level),
            BlockKind::Code => Ok(code(block)),
            BlockKind::Quote => self.quote(block),
            BlockKind::UnorderedList => self.unordered_list(block),
            BlockKind::OrderedList => self.ordered_list(block),
        }
    }

    fn inline(&self, tag: &str, text: &str) -> Result<Node> {
        Ok(Node::element(tag, self.tokenizer.tokenize_to_nodes(text)?))
    }

    fn paragraph(&self, block: &str) -> Result<Node> {
        let text = block.split('\n').collect::<Vec<_>>().join(" ");
        self.inline("p", &text)
    }

    fn heading(&self, block: &str, level: u8) -> Result<Node> {
        // Classification guarantees `level` hashes and a space.
        let text = block.get(usize::from(level) + 1..).unwrap_or_default();
        self.inline(&format!("h{level}"), text)
    }

    fn quote(&self, block: &str) -> Result<Node> {
        let text = block
            .split('\n')
            .map(|line| {
                line.strip_prefix("> ")
                    .or_else(|| line.strip_prefix('>'))
                    .unwrap_or(line)
            })
            .collect::<Vec<_>>()
            .join(" ");
        self.inline("blockquote", &text)
    }

    fn unordered_list(&self, block: &str) -> Result<Node> {
        let items = block
            .split('\n')
            .map(|line| {
                let text = line.strip_prefix(UNORDERED_MARKER).unwrap_or(line);
                self.inline("li", text)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Node::element("ul", items))
    }

    fn ordered_list(&self, block: &str) -> Result<Node> {
        let items = block
            .split('\n')
            .map(|line| {
                let text = line
                    .split_once(ORDERED_SEPARATOR)
                    .map_or(line, |(_, rest)| rest);
                self.inline("li", text)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Node::element("ol", items))
    }
}

/// Code content is kept verbatim: no inline tokenization.
fn code(block: &str) -> Node {
    let fence = CODE_FENCE.len();
    let text = block
        .get(fence..block.len().saturating_sub(fence))
        .unwrap_or_default();
    Node::element("pre", vec![Node::leaf("code", text)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inline::PASSES;
    use crate::render::render;

    fn html(block: &str) -> String {
        let parser = BlockParser::new();
        render(&parser.parse(block, classify(block)).unwrap()).unwrap()
    }

    #[test]
    fn test_paragraph_joins_lines() {
        assert_eq!(html("one\ntwo *three*"), "<p>one two <i>three</i></p>");
    }

    #[test]
    fn test_heading() {
        assert_eq!(html("### Deep `code`"), "<h3>Deep <code>code</code></h3>");
    }

    #[test]
    fn test_code_verbatim() {
        assert_eq!(
            html("```\nlet x = *y*;\n```"),
            "<pre><code>\nlet x = *y*;\n</code></pre>"
        );
    }

    #[test]
    fn test_code_bare_fence() {
        assert_eq!(html("```"), "<pre><code></code></pre>");
        assert_eq!(html("````"), "<pre><code></code></pre>");
    }

    #[test]
    fn test_quote_strips_markers() {
        assert_eq!(
            html("> one\n>two\n>  three"),
            "<blockquote>one two  three</blockquote>"
        );
    }

    #[test]
    fn test_unordered_list() {
        assert_eq!(html("- a\n- **b**"), "<ul><li>a</li><li><b>b</b></li></ul>");
    }

    #[test]
    fn test_heading_strips_one_space() {
        assert_eq!(html("#  two"), "<h1> two</h1>");
        assert_eq!(html("## \tx"), "<h2>\tx</h2>");
    }

    #[test]
    fn test_ordered_list() {
        assert_eq!(html("1. a\n2. b"), "<ol><li>a</li><li>b</li></ol>");
    }

    #[test]
    fn test_ordered_list_cuts_at_first_separator() {
        assert_eq!(html("1. a. b\n2. c"), "<ol><li>a. b</li><li>c</li></ol>");
        assert_eq!(html("1. 2. x"), "<ol><li>2. x</li></ol>");
    }

    #[test]
    fn test_custom_tokenizer() {
        let bold_only = InlineTokenizer::with_passes([PASSES[0]]);
        let parser = BlockParser::with_tokenizer(bold_only);
        let node = parser.parse("**a** *b*", BlockKind::Paragraph).unwrap();
        assert_eq!(render(&node).unwrap(), "<p><b>a</b> *b*</p>");
    }

    #[test]
    fn test_forced_kind_is_respected() {
        let parser = BlockParser::new();
        let node = parser.parse("plain", BlockKind::Heading { level: 2 }).unwrap();
        assert_eq!(render(&node).unwrap(), "<h2>in</h2>");
    }

    #[test]
    fn test_document_wraps_in_div() {
        let parser = BlockParser::new();
        let node = parser.parse_document("# T\n\ntext").unwrap();
        assert_eq!(render(&node).unwrap(), "<div><h1>T</h1><p>text</p></div>");
    }

    #[test]
    fn test_empty_document() {
        let node = BlockParser::new().parse_document("\n\n  \n").unwrap();
        assert_eq!(render(&node).unwrap(), "<div></div>");
    }

    #[test]
    fn test_error_aborts_document() {
        let result = BlockParser::new().parse_document("fine\n\nbroken `code");
        assert!(result.is_err());
    }
}
