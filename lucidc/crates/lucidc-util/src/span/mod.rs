//! Span module - Source location tracking.
//!
//! This module provides [`Location`], the start/end line and column of a
//! token, together with the byte range of the full lexeme, and
//! [`SourceFile`], a named piece of source text.
//!
//! # Examples
//!
//! ```
//! use lucidc_util::span::Location;
//!
//! let loc = Location::new(1, 1, 0, 4, 0, 4);
//! assert!(loc.is_well_formed());
//! assert_eq!(loc.span_text("puts x"), "puts");
//! ```

mod source_file;

use std::fmt;

pub use source_file::SourceFile;

/// Start/end position of a token.
///
/// Lines are 1-based. Columns are 0-based and counted in Unicode scalar
/// values from the start of the line, not in bytes. `byte_start..byte_end`
/// always covers the complete lexeme in the source text (string quotes
/// included), even where the column range does not.
///
/// # Invariants
///
/// - `line_start >= 1` and `line_end >= line_start`
/// - `col_end >= col_start` when `line_end == line_start`
/// - `byte_start <= byte_end`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Location {
    /// Line the token starts on (1-based)
    pub line_start: u32,
    /// Line the token ends on (1-based)
    pub line_end: u32,
    /// Column the token starts at (0-based, in scalar values)
    pub col_start: u32,
    /// Column just past the token's last scalar value
    pub col_end: u32,
    /// Byte offset of the first byte of the lexeme
    pub byte_start: usize,
    /// Byte offset one past the last byte of the lexeme
    pub byte_end: usize,
}

impl Location {
    /// Create a new location
    ///
    /// # Examples
    ///
    /// ```
    /// use lucidc_util::span::Location;
    ///
    /// let loc = Location::new(2, 3, 4, 0, 10, 15);
    /// assert_eq!(loc.line_start, 2);
    /// assert_eq!(loc.line_end, 3);
    /// ```
    #[inline]
    pub const fn new(
        line_start: u32,
        line_end: u32,
        col_start: u32,
        col_end: u32,
        byte_start: usize,
        byte_end: usize,
    ) -> Self {
        Self {
            line_start,
            line_end,
            col_start,
            col_end,
            byte_start,
            byte_end,
        }
    }

    /// Create an empty location at a single point
    ///
    /// # Examples
    ///
    /// ```
    /// use lucidc_util::span::Location;
    ///
    /// let point = Location::point(3, 7, 42);
    /// assert!(point.is_empty());
    /// assert_eq!(point.line_start, point.line_end);
    /// ```
    #[inline]
    pub const fn point(line: u32, column: u32, byte: usize) -> Self {
        Self::new(line, line, column, column, byte, byte)
    }

    /// Returns true if the location covers no bytes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.byte_start == self.byte_end
    }

    /// Returns the length of the lexeme in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.byte_end - self.byte_start
    }

    /// Returns true if the token spans more than one line
    #[inline]
    pub fn is_multiline(&self) -> bool {
        self.line_end > self.line_start
    }

    /// Check the location invariants
    ///
    /// # Examples
    ///
    /// ```
    /// use lucidc_util::span::Location;
    ///
    /// assert!(Location::new(1, 2, 5, 0, 5, 6).is_well_formed());
    /// assert!(!Location::new(1, 1, 5, 2, 5, 6).is_well_formed());
    /// assert!(!Location::new(0, 0, 0, 0, 0, 0).is_well_formed());
    /// ```
    pub fn is_well_formed(&self) -> bool {
        self.line_start >= 1
            && self.line_end >= self.line_start
            && (self.line_end != self.line_start || self.col_end >= self.col_start)
            && self.byte_start <= self.byte_end
    }

    /// Returns the lexeme this location covers in `source`
    ///
    /// Returns an empty string if the byte range does not fit `source`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lucidc_util::span::Location;
    ///
    /// let loc = Location::new(1, 1, 1, 7, 0, 7);
    /// assert_eq!(loc.span_text("\"hello\" x"), "\"hello\"");
    /// ```
    pub fn span_text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.byte_start..self.byte_end).unwrap_or("")
    }

    /// Create a location covering both `self` and `other`
    ///
    /// `self` is expected to come first in the source.
    pub fn to(self, other: Location) -> Location {
        Location {
            line_start: self.line_start,
            line_end: other.line_end.max(self.line_end),
            col_start: self.col_start,
            col_end: other.col_end,
            byte_start: self.byte_start.min(other.byte_start),
            byte_end: self.byte_end.max(other.byte_end),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{}:{}",
            self.line_start, self.col_start, self.line_end, self.col_end
        )
    }
}
