//! Space and newline runs.
//!
//! Only `' '` counts as a space; a tab is not whitespace in Lucid and is
//! reported as an unexpected character by the dispatch loop. A line
//! terminator is `\n` or `\r\n`; a `\r` on its own is an error.

use crate::error::LexResult;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a maximal run of spaces.
    pub(crate) fn lex_space(&mut self) -> LexResult<Token> {
        self.cursor.eat_while(|c| c == ' ');
        Ok(self.finish(TokenKind::Space, String::new()))
    }

    /// Lexes a maximal run of line terminators.
    ///
    /// Every terminator starts a new line, so the token ends on the line
    /// after the last terminator, at column 0.
    pub(crate) fn lex_newline(&mut self) -> LexResult<Token> {
        loop {
            match self.cursor.peek() {
                Some('\n') => {
                    self.cursor.advance();
                },
                Some('\r') => {
                    self.cursor.advance();
                    self.cursor.expect('\n').map_err(|kind| self.error(kind))?;
                },
                _ => break,
            }
            self.cursor.start_line();
        }
        Ok(self.finish(TokenKind::Newline, String::new()))
    }
}
