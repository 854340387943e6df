//! String and character literal lexing.
//!
//! Both literals store their decoded contents as the token value. The
//! token's `col_start` is the column just inside the opening quote, while
//! the byte range still covers both quotes so the lexeme can be recovered
//! from the source.

use crate::error::{LexErrorKind, LexResult};
use crate::token::{Token, TokenKind};
use crate::unicode::parse_hex_scalar;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal.
    ///
    /// Line terminators inside the string are kept in the value and move the
    /// line counter, so a string may span several lines.
    ///
    /// # Example
    ///
    /// ```
    /// use lucidc_lex::{Lexer, TokenKind};
    ///
    /// let mut lexer = Lexer::new("main.cr", r#""tab\tand \u{1F600}""#);
    /// let token = lexer.next_token().unwrap();
    /// assert_eq!(token.kind, TokenKind::StringLiteral);
    /// assert_eq!(token.value, "tab\tand 😀");
    /// ```
    pub(crate) fn lex_string(&mut self) -> LexResult<Token> {
        self.cursor.advance();
        self.token_start_column = self.cursor.column();

        let mut value = String::new();
        loop {
            match self.cursor.peek() {
                None => return Err(self.unterminated(TokenKind::StringLiteral)),
                Some('"') => {
                    self.cursor.advance();
                    break;
                },
                Some('\\') => {
                    self.cursor.advance();
                    value.push(self.lex_escape(TokenKind::StringLiteral)?);
                },
                Some('\n') => {
                    self.cursor.advance();
                    self.cursor.start_line();
                    value.push('\n');
                },
                Some(c) => {
                    self.cursor.advance();
                    value.push(c);
                },
            }
        }

        Ok(self.finish(TokenKind::StringLiteral, value))
    }

    /// Lexes a character literal such as `'a'` or `'\n'`.
    pub(crate) fn lex_char(&mut self) -> LexResult<Token> {
        self.cursor.advance();
        self.token_start_column = self.cursor.column();

        let value = match self.cursor.peek() {
            None | Some('\r' | '\n') => return Err(self.unterminated(TokenKind::CharLiteral)),
            Some('\'') => {
                self.cursor.advance();
                return Err(self.error(LexErrorKind::EmptyChar));
            },
            Some('\\') => {
                self.cursor.advance();
                self.lex_escape(TokenKind::CharLiteral)?
            },
            Some(c) => {
                self.cursor.advance();
                c
            },
        };

        if self.cursor.is_at_end() {
            return Err(self.unterminated(TokenKind::CharLiteral));
        }
        self.cursor.expect('\'').map_err(|kind| self.error(kind))?;

        Ok(self.finish(TokenKind::CharLiteral, value.to_string()))
    }

    /// Decodes the escape after a backslash, which has been consumed.
    fn lex_escape(&mut self, literal: TokenKind) -> LexResult<char> {
        let Some(escape) = self.cursor.advance() else {
            return Err(self.unterminated(literal));
        };

        let decoded = match escape {
            '"' => '"',
            '\\' => '\\',
            '\'' => '\'',
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            '0' => '\0',
            'u' => return self.lex_unicode_escape(literal),
            other => return Err(self.error(LexErrorKind::InvalidEscape { escape: other })),
        };
        Ok(decoded)
    }

    /// Decodes the `{H..H}` part of a `\u{H..H}` escape.
    fn lex_unicode_escape(&mut self, literal: TokenKind) -> LexResult<char> {
        let invalid = LexErrorKind::InvalidEscape { escape: 'u' };

        match self.cursor.peek() {
            None => return Err(self.unterminated(literal)),
            Some('{') => {
                self.cursor.advance();
            },
            Some(_) => return Err(self.error(invalid)),
        }

        let start = self.cursor.position();
        self.cursor.eat_while(|c| c.is_ascii_hexdigit());
        let digits = self.cursor.slice_from(start);

        match self.cursor.peek() {
            None => return Err(self.unterminated(literal)),
            Some('}') => {
                self.cursor.advance();
            },
            Some(_) => return Err(self.error(invalid)),
        }

        parse_hex_scalar(digits).ok_or_else(|| self.error(invalid))
    }
}
