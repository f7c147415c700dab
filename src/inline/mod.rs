//! Inline tokenizer for Markdown.
//!
//! Runs a fixed sequence of passes over a span list. Each pass only splits
//! spans that are still plain:
//! 1. `**` → bold
//! 2. `*` → italic
//! 3. `_` → italic
//! 4. backtick → code
//! 5. `![alt](url)` → image
//! 6. `[text](url)` → link
//!
//! Spans tagged by an earlier pass are never re-scanned, so `**a *b* c**`
//! yields one bold span containing the literal asterisks.

mod emphasis;
mod links;
pub mod span;

pub use emphasis::split_delimiter;
pub use links::{extract_images, extract_links, split_images, split_links};
pub use span::{InlineSpan, Style};

use crate::Result;
use crate::node::Node;

/// One step of the tokenizer pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Split plain spans on a literal delimiter.
    Delimiter {
        delimiter: &'static str,
        style: Style,
    },
    /// Extract `![alt](url)`.
    Images,
    /// Extract `[text](url)`.
    Links,
}

impl Pass {
    fn apply(self, spans: Vec<InlineSpan>) -> Result<Vec<InlineSpan>> {
        match self {
            Self::Delimiter { delimiter, style } => split_delimiter(spans, delimiter, style),
            Self::Images => Ok(split_images(spans)),
            Self::Links => Ok(split_links(spans)),
        }
    }
}

/// Pass order. Longer delimiters go first so `**` is never read as two `*`.
pub const PASSES: [Pass; 6] = [
    Pass::Delimiter {
        delimiter: "**",
        style: Style::Bold,
    },
    Pass::Delimiter {
        delimiter: "*",
        style: Style::Italic,
    },
    Pass::Delimiter {
        delimiter: "_",
        style: Style::Italic,
    },
    Pass::Delimiter {
        delimiter: "`",
        style: Style::Code,
    },
    Pass::Images,
    Pass::Links,
];

/// Inline tokenizer: an owned, ordered list of passes.
#[derive(Debug, Clone)]
pub struct InlineTokenizer {
    passes: Vec<Pass>,
}

impl Default for InlineTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl InlineTokenizer {
    /// Create a tokenizer with the standard pass order.
    pub fn new() -> Self {
        Self {
            passes: PASSES.to_vec(),
        }
    }

    /// Create a tokenizer that runs `passes` in the given order.
    pub fn with_passes(passes: impl Into<Vec<Pass>>) -> Self {
        Self {
            passes: passes.into(),
        }
    }

    /// Passes in the order they run.
    pub fn passes(&self) -> &[Pass] {
        &self.passes
    }

    /// Tokenize one text run into spans.
    pub fn tokenize(&self, text: &str) -> Result<Vec<InlineSpan>> {
        self.passes
            .iter()
            .try_fold(vec![InlineSpan::plain(text)], |spans, pass| pass.apply(spans))
    }

    /// Tokenize and convert straight to element-tree nodes.
    pub fn tokenize_to_nodes(&self, text: &str) -> Result<Vec<Node>> {
        Ok(self
            .tokenize(text)?
            .into_iter()
            .map(InlineSpan::into_node)
            .collect())
    }
}

/// Tokenize one text run with the standard pass order.
///
/// # Example
/// ```
/// use mdsite::inline::{InlineSpan, tokenize};
///
/// let spans = tokenize("Hello **world**").unwrap();
/// assert_eq!(spans, vec![InlineSpan::plain("Hello "), InlineSpan::Bold("world".into())]);
/// ```
pub fn tokenize(text: &str) -> Result<Vec<InlineSpan>> {
    InlineTokenizer::new().tokenize(text)
}

/// Tokenize and convert to element-tree nodes.
pub fn text_to_children(text: &str) -> Result<Vec<Node>> {
    InlineTokenizer::new().tokenize_to_nodes(text)
}
