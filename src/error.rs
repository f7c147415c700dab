//! Error types for Markdown conversion and rendering.
//!
//! Every error is terminal for the document being converted: there is no
//! partial output and no recovery.

/// Error raised while tokenizing, rendering, or extracting a title.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A delimiter pass found an opening delimiter without a closing one.
    #[error("invalid markdown: unmatched delimiter '{delimiter}'")]
    UnmatchedDelimiter {
        /// The literal delimiter (`**`, `*`, `_` or a backtick).
        delimiter: &'static str,
    },

    /// An element cannot be rendered without a tag name.
    #[error("invalid element: missing tag")]
    MissingTag,

    /// An element's children collection was never set.
    #[error("invalid element <{tag}>: missing children")]
    MissingChildren {
        /// Tag of the offending element (empty for tagless groups).
        tag: String,
    },

    /// A text node reached the renderer without a value.
    #[error("invalid text node: missing value")]
    MissingValue,

    /// The document has no `# ` heading line to use as a title.
    #[error("no h1 heading found in document")]
    NoHeadingFound,
}

/// Result alias used throughout the conversion core.
pub type Result<T> = std::result::Result<T, Error>;
