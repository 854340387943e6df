//! Identifier lexing.
//!
//! Keywords are not recognised here; `def` and `puts` are both plain
//! identifiers to the lexer.

use crate::error::LexResult;
use crate::token::{Token, TokenKind};
use crate::unicode::is_ident_continue;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier.
    ///
    /// The dispatch loop has checked that the first scalar is a letter. The
    /// run continues over letters, digits and `_`, and may end in a single
    /// `?` or `!` as in `empty?` or `save!`, unless that is the start of
    /// `!=` / `?=`-style operators.
    pub(crate) fn lex_identifier(&mut self) -> LexResult<Token> {
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);

        if matches!(self.cursor.peek(), Some('?' | '!')) && self.cursor.peek_nth(1) != Some('=') {
            self.cursor.advance();
        }

        Ok(self.finish_with_slice(TokenKind::Identifier))
    }
}
