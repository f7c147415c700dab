//! Image and link extraction.
//!
//! Handles:
//! - Images: `![alt](url)`
//! - Inline links: `[text](url)`
//!
//! Bracket contents may not contain `[` or `]`, paren contents may not
//! contain `(` or `)`. A `[` directly after `!` never opens a link.
//! Matches are found left to right and never overlap.

use super::span::InlineSpan;
use crate::cursor::Cursor;

/// Which bracket pattern a scan is looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkKind {
    Image,
    Link,
}

impl LinkKind {
    fn opener(self) -> &'static [u8] {
        match self {
            Self::Image => b"![",
            Self::Link => b"[",
        }
    }

    fn literal(self, text: &str, url: &str) -> String {
        match self {
            Self::Image => format!("![{text}]({url})"),
            Self::Link => format!("[{text}]({url})"),
        }
    }

    fn span(self, text: &str, url: &str) -> InlineSpan {
        match self {
            Self::Image => InlineSpan::Image {
                alt: text.to_owned(),
                url: url.to_owned(),
            },
            Self::Link => InlineSpan::Link {
                text: text.to_owned(),
                url: url.to_owned(),
            },
        }
    }
}

/// Extract `(alt, url)` pairs for every image in `text`.
pub fn extract_images(text: &str) -> Vec<(&str, &str)> {
    scan(text, LinkKind::Image)
}

/// Extract `(text, url)` pairs for every link in `text`, skipping images.
pub fn extract_links(text: &str) -> Vec<(&str, &str)> {
    scan(text, LinkKind::Link)
}

/// Replace image syntax in plain spans with image spans.
pub fn split_images(spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
    split_with(spans, LinkKind::Image)
}

/// Replace link syntax in plain spans with link spans.
pub fn split_links(spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
    split_with(spans, LinkKind::Link)
}

fn scan(text: &str, kind: LinkKind) -> Vec<(&str, &str)> {
    let bytes = text.as_bytes();
    let mut cursor = Cursor::new(bytes);
    let mut found = Vec::new();

    while cursor.seek(kind.opener()) {
        let start = cursor.offset();
        if kind == LinkKind::Link && cursor.peek_back() == Some(b'!') {
            cursor.bump();
            continue;
        }
        match match_at(cursor, kind) {
            Some(m) => {
                found.push((&text[m.label.0..m.label.1], &text[m.url.0..m.url.1]));
                cursor = Cursor::new_at(bytes, m.end);
            }
            None => cursor = Cursor::new_at(bytes, start + 1),
        }
    }

    found
}

/// Byte ranges of one matched pattern. Delimiters are ASCII, so every
/// boundary is a char boundary.
struct Match {
    label: (usize, usize),
    url: (usize, usize),
    /// Offset just past the closing paren.
    end: usize,
}

/// Try the full pattern at the cursor.
fn match_at(mut cursor: Cursor<'_>, kind: LinkKind) -> Option<Match> {
    if !cursor.eat_bytes(kind.opener()) {
        return None;
    }
    let label_start = cursor.offset();
    let label = cursor.eat_until(b']', b"[]")?;
    let label_end = label_start + label.len();
    if !cursor.eat_bytes(b"](") {
        return None;
    }
    let url_start = cursor.offset();
    let url = cursor.eat_until(b')', b"()")?;
    let url_end = url_start + url.len();
    cursor.bump();
    Some(Match {
        label: (label_start, label_end),
        url: (url_start, url_end),
        end: cursor.offset(),
    })
}

fn split_with(spans: Vec<InlineSpan>, kind: LinkKind) -> Vec<InlineSpan> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let InlineSpan::Plain(text) = span else {
            out.push(span);
            continue;
        };

        let mut rest = text.as_str();
        for (label, url) in scan(&text, kind) {
            let literal = kind.literal(label, url);
            let Some((before, after)) = rest.split_once(literal.as_str()) else {
                break;
            };
            if !before.is_empty() {
                out.push(InlineSpan::plain(before));
            }
            out.push(kind.span(label, url));
            rest = after;
        }
        if !rest.is_empty() {
            out.push(InlineSpan::plain(rest));
        }
    }

    out
}
