//! Operator and punctuation lexing.
//!
//! Operators are matched by maximal munch against a fixed table, so `<=>`
//! wins over `<=` and `<`. The lexer only classifies; which operator a
//! token is stays in its value for the parser to resolve.

use crate::error::LexResult;
use crate::token::{Token, TokenKind};
use crate::Lexer;

/// Every operator, longest first.
///
/// The order matters: the first entry that prefixes the input wins.
pub const OPERATORS: &[&str] = &[
    // three characters
    "...", "**=", "<<=", ">>=", "<=>", "===", "&&=", "||=",
    // two characters
    "==", "!=", "<=", ">=", "&&", "||", "<<", ">>", "**", "->", "=>", "+=", "-=", "*=", "/=", "%=", "&=",
    "|=", "^=", "..", "::", "=~",
    // one character
    "+", "-", "*", "/", "%", "=", "<", ">", "!", "&", "|", "^", "~", ".", ":", "?", "@", "$",
];

/// Single-character delimiters, lexed as [`TokenKind::Punctuation`].
pub const PUNCTUATION: &[char] = &['(', ')', '[', ']', '{', '}', ',', ';'];

/// Returns true if `c` can start an operator or punctuation token.
pub(crate) fn is_operator_start(c: char) -> bool {
    PUNCTUATION.contains(&c) || OPERATORS.iter().any(|op| op.starts_with(c))
}

impl<'a> Lexer<'a> {
    /// Lexes one operator or punctuation token.
    ///
    /// The dispatch loop has checked [`is_operator_start`], so at least the
    /// single-character entry matches.
    pub(crate) fn lex_operator(&mut self) -> LexResult<Token> {
        if self.cursor.peek().is_some_and(|c| PUNCTUATION.contains(&c)) {
            self.cursor.advance();
            return Ok(self.finish_with_slice(TokenKind::Punctuation));
        }

        let rest = self.cursor.remaining();
        let length = OPERATORS
            .iter()
            .find(|op| rest.starts_with(**op))
            .map_or(1, |op| op.chars().count());
        for _ in 0..length {
            self.cursor.advance();
        }

        Ok(self.finish_with_slice(TokenKind::Operator))
    }
}
