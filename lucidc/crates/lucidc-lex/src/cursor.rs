//! Character cursor for traversing source code.
//!
//! The [`Cursor`] is the only part of the lexer that touches raw input. It
//! hands out one Unicode scalar value at a time, always lets the caller look
//! at the next scalar before consuming it, and keeps the line/column counters
//! the lexer reads token locations from.
//!
//! Line accounting is split on purpose: [`Cursor::advance`] only moves the
//! column, and the lexer calls [`Cursor::start_line`] when it has recognised
//! a complete line terminator (`\n` or `\r\n`).

use crate::error::LexErrorKind;

/// A cursor over source text with one-scalar lookahead.
///
/// # Example
///
/// ```
/// use lucidc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("ab");
/// assert_eq!(cursor.peek(), Some('a'));
/// assert_eq!(cursor.advance(), Some('a'));
/// assert_eq!(cursor.peek(), Some('b'));
/// assert_eq!(cursor.column(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column (0-based, in scalar values).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 0,
        }
    }

    /// Returns the next scalar value without consuming it.
    ///
    /// Returns `None` at end of input.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        let rest = self.source.as_bytes().get(self.position..)?;
        match rest.first() {
            None => None,
            // Fast path for ASCII (most common case)
            Some(&b) if b < 128 => Some(b as char),
            Some(_) => self.source[self.position..].chars().next(),
        }
    }

    /// Returns the scalar value `n` positions ahead without consuming
    /// anything. `peek_nth(0)` is the same as [`Cursor::peek`].
    ///
    /// # Example
    ///
    /// ```
    /// use lucidc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("aβc");
    /// assert_eq!(cursor.peek_nth(1), Some('β'));
    /// assert_eq!(cursor.peek_nth(2), Some('c'));
    /// assert_eq!(cursor.peek_nth(3), None);
    /// ```
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.source[self.position..].chars().nth(n)
    }

    /// Consumes one scalar value and moves the column forward.
    ///
    /// Returns `None`, consuming nothing, at end of input.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        self.column += 1;
        Some(c)
    }

    /// Consumes one scalar value and checks that it is `wanted`.
    ///
    /// # Errors
    ///
    /// [`LexErrorKind::Expected`] with the scalar actually found, or
    /// `found: None` at end of input.
    ///
    /// # Example
    ///
    /// ```
    /// use lucidc_lex::cursor::Cursor;
    /// use lucidc_lex::LexErrorKind;
    ///
    /// let mut cursor = Cursor::new("\r\n\rx");
    /// cursor.advance();
    /// assert!(cursor.expect('\n').is_ok());
    /// cursor.advance();
    /// assert_eq!(
    ///     cursor.expect('\n'),
    ///     Err(LexErrorKind::Expected { wanted: '\n', found: Some('x') })
    /// );
    /// ```
    pub fn expect(&mut self, wanted: char) -> Result<(), LexErrorKind> {
        match self.advance() {
            Some(c) if c == wanted => Ok(()),
            found => Err(LexErrorKind::Expected { wanted, found }),
        }
    }

    /// Consumes `expected` if it is the next scalar value.
    ///
    /// Returns true if it was consumed.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes scalar values while `predicate` holds.
    ///
    /// Returns how many were consumed. The first scalar that fails the
    /// predicate is left in place.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.advance();
            count += 1;
        }
        count
    }

    /// Records that a line terminator was consumed: the line moves on and
    /// the column goes back to 0.
    #[inline]
    pub fn start_line(&mut self) {
        self.line += 1;
        self.column = 0;
    }

    /// Skips a leading byte order mark without counting it as a column.
    ///
    /// Returns true if one was skipped. Only has an effect at position 0.
    pub fn skip_bom(&mut self) -> bool {
        if self.position == 0 && self.source.starts_with('\u{FEFF}') {
            self.position = '\u{FEFF}'.len_utf8();
            true
        } else {
            false
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column (0-based, in scalar values).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source from byte `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }
}
