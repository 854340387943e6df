//! lucidc-lex - Lexical Analyzer for the Lucid Programming Language
//!
//! This crate turns Lucid source text into a flat, ordered sequence of
//! classified tokens. Every token carries its exact [`Location`]: the lines
//! and columns it spans and the byte range of its lexeme.
//!
//! # Example Usage
//!
//! ```
//! use lucidc_lex::{lex, TokenKind};
//!
//! let tokens = lex("hello.cr", "puts \"hello world\"").unwrap();
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].kind, TokenKind::Identifier);
//! assert_eq!(tokens[0].value, "puts");
//! assert_eq!(tokens[1].kind, TokenKind::Space);
//! assert_eq!(tokens[2].kind, TokenKind::StringLiteral);
//! assert_eq!(tokens[2].value, "hello world");
//! ```
//!
//! # Error Handling
//!
//! Lexing is **fail-fast**. The first lexical error ends the scan and is
//! returned as a [`LexError`]; no partial token sequence is produced. Callers
//! that want the tokens before an error can drive [`Lexer::next_token`]
//! themselves.
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`error`] - Lexical error types
//! - [`unicode`] - Character-class helpers
//!
//! # Token Categories
//!
//! - **Trivia**: runs of spaces, runs of line terminators (`\n`, `\r\n`),
//!   and `#` line comments. Trivia is kept, so the lexemes of all tokens
//!   concatenate back to the source.
//! - **Identifiers**: a letter, then letters, digits or `_`, with an optional
//!   trailing `?` or `!`. Keywords are identifiers at this level.
//! - **Literals**: strings (`"a\tb"`), characters (`'a'`) and numbers
//!   (`42`, `1_000`, `0xFF`, `3.14`, `2.5e-3`).
//! - **Operators**: see [`OPERATORS`], matched longest first.
//! - **Punctuation**: see [`PUNCTUATION`].
//!
//! Tabs are not whitespace in Lucid and are rejected.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexError, LexErrorKind, LexResult, NumberFault};
pub use lexer::{Lexer, OPERATORS, PUNCTUATION};
pub use lucidc_util::Location;
pub use token::{Token, TokenKind};

/// Lexes a whole source text.
///
/// `filename` only appears in errors. The returned tokens are in source
/// order and do not include an end-of-input marker.
///
/// # Errors
///
/// The first [`LexError`] met.
pub fn lex(filename: &str, source: &str) -> LexResult<Vec<Token>> {
    Lexer::new(filename, source).tokenize()
}
