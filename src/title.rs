//! Page title extraction.

use crate::limits::TITLE_PREFIX;
use crate::{Error, Result};

/// Return the text of the first `# ` line (h1 only), trimmed.
///
/// # Example
/// ```
/// assert_eq!(mdsite::extract_title("intro\n# Hello  \n## Sub").unwrap(), "Hello");
/// ```
pub fn extract_title(document: &str) -> Result<String> {
    document
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix(TITLE_PREFIX))
        .map(|title| title.trim().to_owned())
        .ok_or(Error::NoHeadingFound)
}
