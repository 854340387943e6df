//! Lexical error types.
//!
//! Every lexical error is fatal to the current lex call. A [`LexError`]
//! carries the file name it was raised for, the best-known [`Location`]
//! (from the start of the failing token to the point where scanning
//! stopped) and a [`LexErrorKind`] saying what went wrong.

use lucidc_util::Location;
use thiserror::Error;

use crate::token::TokenKind;

/// A fatal lexical error.
///
/// Displays as `file:line:column: message` with a 1-based column, the form
/// editors jump to. The stored [`Location`] keeps 0-based columns.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{filename}:{}:{}: {kind}", .location.line_start, .location.col_start + 1)]
pub struct LexError {
    /// What went wrong.
    pub kind: LexErrorKind,
    /// Extent of the failing token, as far as it was scanned.
    pub location: Location,
    /// Name of the file being lexed.
    pub filename: String,
}

/// The closed set of lexical error kinds.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// A specific character was required but something else was found.
    #[error("expected {wanted:?}, found {}", describe_found(.found))]
    Expected {
        /// The character that was required.
        wanted: char,
        /// What was there instead; `None` at end of input.
        found: Option<char>,
    },

    /// A character that starts no token.
    #[error("unexpected character {found:?}")]
    Unexpected {
        /// The offending character.
        found: char,
    },

    /// Input ended while a token was still open.
    #[error("unterminated {kind}")]
    UnterminatedToken {
        /// Kind of the token left open.
        kind: TokenKind,
    },

    /// A numeric literal broke the number grammar.
    #[error("malformed number literal `{slice}`: {fault}")]
    MalformedNumber {
        /// The literal as scanned up to the fault.
        slice: String,
        /// Which rule was broken.
        fault: NumberFault,
    },

    /// An unknown or malformed `\` escape.
    #[error("invalid escape sequence `\\{escape}`")]
    InvalidEscape {
        /// The character after the backslash.
        escape: char,
    },

    /// `''` with nothing between the quotes.
    #[error("empty character literal")]
    EmptyChar,
}

/// The rule a malformed number literal broke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum NumberFault {
    /// `1.` or `1._5`
    #[error("expected a digit after the decimal point")]
    MissingFractionDigits,
    /// `1e` or `1e+`
    #[error("expected a digit in the exponent")]
    MissingExponentDigits,
    /// `1_`, `1__0` or `1e_5`
    #[error("`_` must sit between two digits")]
    MisplacedUnderscore,
    /// `0x` or `0b2`
    #[error("expected a digit after the base prefix")]
    MissingRadixDigits,
    /// `1e5e3`
    #[error("a number can have only one exponent")]
    RepeatedExponent,
    /// `1.5.3` or `1e5.5`
    #[error("a number can have only one decimal point")]
    RepeatedDecimalPoint,
    /// `0x1.5`
    #[error("a `0x`, `0b` or `0o` literal cannot have a fraction")]
    FractionalRadix,
    /// `123abc`
    #[error("a number cannot run into a letter")]
    TrailingAlphanumeric,
}

fn describe_found(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("{c:?}"),
        None => "end of input".to_string(),
    }
}

/// Result type alias for lexing operations.
pub type LexResult<T> = std::result::Result<T, LexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_display() {
        let kind = LexErrorKind::Expected {
            wanted: '\n',
            found: Some('x'),
        };
        assert_eq!(kind.to_string(), "expected '\\n', found 'x'");

        let kind = LexErrorKind::Expected {
            wanted: '\n',
            found: None,
        };
        assert_eq!(kind.to_string(), "expected '\\n', found end of input");
    }

    #[test]
    fn test_unterminated_display() {
        let kind = LexErrorKind::UnterminatedToken {
            kind: TokenKind::StringLiteral,
        };
        assert_eq!(kind.to_string(), "unterminated string literal");
    }

    #[test]
    fn test_malformed_display() {
        let kind = LexErrorKind::MalformedNumber {
            slice: "1.".to_string(),
            fault: NumberFault::MissingFractionDigits,
        };
        assert_eq!(
            kind.to_string(),
            "malformed number literal `1.`: expected a digit after the decimal point"
        );
    }

    #[test]
    fn test_invalid_escape_display() {
        let kind = LexErrorKind::InvalidEscape { escape: 'q' };
        assert_eq!(kind.to_string(), "invalid escape sequence `\\q`");
    }

    #[test]
    fn test_error_display_has_file_and_position() {
        let err = LexError {
            kind: LexErrorKind::Unexpected { found: '\t' },
            location: Location::new(3, 3, 7, 8, 20, 21),
            filename: "main.cr".to_string(),
        };
        assert_eq!(err.to_string(), "main.cr:3:8: unexpected character '\\t'");
    }

    #[test]
    fn test_error_display_column_is_one_based() {
        let err = LexError {
            kind: LexErrorKind::EmptyChar,
            location: Location::new(1, 1, 0, 2, 0, 2),
            filename: "main.cr".to_string(),
        };
        assert_eq!(err.to_string(), "main.cr:1:1: empty character literal");
        assert_eq!(err.location.col_start, 0);
    }

    #[test]
    fn test_fractional_radix_display() {
        let kind = LexErrorKind::MalformedNumber {
            slice: "0x1.".to_string(),
            fault: NumberFault::FractionalRadix,
        };
        assert_eq!(
            kind.to_string(),
            "malformed number literal `0x1.`: a `0x`, `0b` or `0o` literal cannot have a fraction"
        );
    }
}
