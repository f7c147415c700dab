//! Inline span types.

use crate::node::{ElementNode, Node};

/// One run of inline content carrying a single formatting role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSpan {
    /// Plain text, still eligible for later passes.
    Plain(String),

    /// Strong text (`**bold**`).
    Bold(String),

    /// Emphasized text (`*italic*` or `_italic_`).
    Italic(String),

    /// Inline code (`` `code` ``), never re-scanned.
    Code(String),

    /// Image `![alt](url)`.
    Image {
        /// Alt text (bracket contents).
        alt: String,
        /// Image source (paren contents).
        url: String,
    },

    /// Link `[text](url)`.
    Link {
        /// Anchor text (bracket contents).
        text: String,
        /// Link destination (paren contents).
        url: String,
    },
}

impl InlineSpan {
    /// Create a plain span.
    #[inline]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(text.into())
    }

    /// Whether later passes may still split this span.
    #[inline]
    pub fn is_plain(&self) -> bool {
        matches!(self, Self::Plain(_))
    }

    /// Convert this span into its element-tree form.
    pub fn into_node(self) -> Node {
        match self {
            Self::Plain(text) => Node::text(text),
            Self::Bold(text) => Node::leaf("b", text),
            Self::Italic(text) => Node::leaf("i", text),
            Self::Code(text) => Node::leaf("code", text),
            Self::Link { text, url } => Node::Element(
                ElementNode::new("a")
                    .with_attr("href", url)
                    .with_children(vec![Node::text(text)]),
            ),
            Self::Image { alt, url } => Node::Element(
                ElementNode::new("img")
                    .with_attr("src", url)
                    .with_attr("alt", alt)
                    .with_children(vec![Node::text("")]),
            ),
        }
    }
}

/// Target role of a delimiter pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Bold,
    Italic,
    Code,
}

impl Style {
    /// Wrap text in a span of this style.
    #[inline]
    pub fn wrap(self, text: &str) -> InlineSpan {
        let text = text.to_owned();
        match self {
            Self::Bold => InlineSpan::Bold(text),
            Self::Italic => InlineSpan::Italic(text),
            Self::Code => InlineSpan::Code(text),
        }
    }
}
