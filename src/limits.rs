//! Syntax constants shared by the block and inline passes.

/// Deepest heading level (`######`).
pub const MAX_HEADING_LEVEL: usize = 6;

/// Code block fence, required at both ends of a code block.
pub const CODE_FENCE: &str = "```";

/// Separator between blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Unordered list item marker.
pub const UNORDERED_MARKER: &str = "- ";

/// Separator between an ordered list number and its text.
pub const ORDERED_SEPARATOR: &str = ". ";

/// Prefix of the title line (h1 only).
pub const TITLE_PREFIX: &str = "# ";
