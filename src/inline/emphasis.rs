//! Delimiter splitting for bold, italic and code spans.
//!
//! Each pass splits plain spans on one literal delimiter. Parts alternate
//! outside/inside/outside, so a well-formed text always splits into an odd
//! number of parts; an even count means a delimiter was left open.

use memchr::memmem;

use super::span::{InlineSpan, Style};
use crate::{Error, Result};

/// Split every plain span on `delimiter`, tagging inside parts with `style`.
///
/// Non-plain spans pass through untouched, so emphasis inside an already
/// tagged span is never recognized. Empty parts are dropped.
pub fn split_delimiter(
    spans: Vec<InlineSpan>,
    delimiter: &'static str,
    style: Style,
) -> Result<Vec<InlineSpan>> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let InlineSpan::Plain(text) = span else {
            out.push(span);
            continue;
        };

        let parts = split_parts(&text, delimiter);
        if parts.len() % 2 == 0 {
            return Err(Error::UnmatchedDelimiter { delimiter });
        }

        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(InlineSpan::plain(part));
            } else {
                out.push(style.wrap(part));
            }
        }
    }

    Ok(out)
}

/// Split on non-overlapping occurrences of `delimiter`, left to right.
fn split_parts<'a>(text: &'a str, delimiter: &str) -> Vec<&'a str> {
    let mut parts = Vec::new();
    let mut start = 0;
    for pos in memmem::find_iter(text.as_bytes(), delimiter.as_bytes()) {
        parts.push(&text[start..pos]);
        start = pos + delimiter.len();
    }
    parts.push(&text[start..]);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> Vec<InlineSpan> {
        vec![InlineSpan::plain(text)]
    }

    #[test]
    fn test_split_parts_non_overlapping() {
        assert_eq!(split_parts("a***b", "**"), ["a", "*b"]);
        assert_eq!(split_parts("**", "**"), ["", ""]);
        assert_eq!(split_parts("abc", "`"), ["abc"]);
    }

    #[test]
    fn test_split_code_single() {
        let text = plain("This is text with a `code block` word");
        let spans = split_delimiter(text, "`", Style::Code).unwrap();
        assert_eq!(
            spans,
            vec![
                InlineSpan::plain("This is text with a "),
                InlineSpan::Code("code block".into()),
                InlineSpan::plain(" word"),
            ]
        );
    }

    #[test]
    fn test_split_delimiter_at_edges() {
        let spans = split_delimiter(plain("**all bold**"), "**", Style::Bold).unwrap();
        assert_eq!(spans, vec![InlineSpan::Bold("all bold".into())]);
    }

    #[test]
    fn test_non_plain_passes_through() {
        let spans = vec![InlineSpan::Bold("x*y".into())];
        let out = split_delimiter(spans.clone(), "*", Style::Italic).unwrap();
        assert_eq!(out, spans);
    }

    #[test]
    fn test_unmatched() {
        let text = plain("This has `unmatched delimiter");
        let err = split_delimiter(text, "`", Style::Code).unwrap_err();
        assert_eq!(err, Error::UnmatchedDelimiter { delimiter: "`" });
    }

    #[test]
    fn test_empty_pair_dropped() {
        let spans = split_delimiter(plain("a `` b"), "`", Style::Code).unwrap();
        assert_eq!(spans, vec![InlineSpan::plain("a "), InlineSpan::plain(" b")]);
    }
}
