//! Byte cursor for bracket scanning.
//!
//! Tracks an explicit position into the input so image and link scans can
//! try a pattern at one offset, give up, and resume at the next one without
//! any backtracking state of their own.

/// A cursor over a byte slice.
///
/// # Example
/// ```
/// use mdsite::cursor::Cursor;
///
/// let mut cursor = Cursor::new(b"see [docs](url)");
///
/// assert!(cursor.seek(b"["));
/// assert_eq!(cursor.offset(), 4);
/// cursor.bump();
/// assert_eq!(cursor.eat_until(b']', b"[]"), Some(&b"docs"[..]));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor over a byte slice.
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Create a cursor starting at an offset.
    #[inline]
    pub fn new_at(input: &'a [u8], offset: usize) -> Self {
        debug_assert!(offset <= input.len());
        Self {
            input,
            pos: offset.min(input.len()),
        }
    }

    /// Current offset from the start of input.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Byte immediately before the cursor, if any.
    #[inline]
    pub fn peek_back(&self) -> Option<u8> {
        self.pos.checked_sub(1).and_then(|i| self.input.get(i).copied())
    }

    /// Advance by n bytes, clamped to the end of input.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.input.len());
    }

    /// Advance by 1 byte.
    #[inline]
    pub fn bump(&mut self) {
        self.advance(1);
    }

    /// Consume a specific byte sequence if present.
    #[inline]
    pub fn eat_bytes(&mut self, bytes: &[u8]) -> bool {
        if self.remaining_slice().starts_with(bytes) {
            self.advance(bytes.len());
            true
        } else {
            false
        }
    }

    /// Consume bytes up to (not including) `close`.
    ///
    /// Fails without moving if either `forbidden` byte appears first, or if
    /// `close` never appears. On success returns the consumed run, which may
    /// be empty.
    pub fn eat_until(&mut self, close: u8, forbidden: &[u8; 2]) -> Option<&'a [u8]> {
        let rest = self.remaining_slice();
        let end = memchr::memchr3(close, forbidden[0], forbidden[1], rest)?;
        if rest[end] != close {
            return None;
        }
        self.advance(end);
        Some(&rest[..end])
    }

    /// Get the remaining bytes as a slice.
    #[inline]
    pub fn remaining_slice(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    /// Move to the next occurrence of `needle`, returning whether one was found.
    ///
    /// When the needle is absent the cursor moves to end of input.
    #[inline]
    pub fn seek(&mut self, needle: &[u8]) -> bool {
        match memchr::memmem::find(self.remaining_slice(), needle) {
            Some(i) => {
                self.advance(i);
                true
            }
            None => {
                self.pos = self.input.len();
                false
            }
        }
    }
}
