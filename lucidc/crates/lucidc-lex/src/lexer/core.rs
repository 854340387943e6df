//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the dispatch loop and the
//! token bookkeeping shared by every sub-scanner.

use lucidc_util::Location;
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::error::{LexError, LexErrorKind, LexResult};
use crate::token::{Token, TokenKind};
use crate::unicode::is_ident_start;

use super::operator::is_operator_start;

/// Lexer for Lucid source text.
///
/// The lexer is a per-call value: it borrows the source, owns its cursor and
/// shares nothing with other lexers, so independent lexers may run on
/// different threads.
///
/// Lexing is fail-fast. The first lexical error ends the scan and no partial
/// token sequence is returned.
///
/// # Example
///
/// ```
/// use lucidc_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("main.cr", "puts x");
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Space);
/// assert_eq!(lexer.next_token().unwrap().value, "x");
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndOfInput);
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// File name used in errors.
    filename: &'a str,

    /// Starting byte offset of the current token.
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    pub(crate) token_start_line: u32,

    /// Column where the current token starts (0-based).
    pub(crate) token_start_column: u32,

    /// Set once end of input or an error has been returned by the iterator.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for `source`. `filename` is only used in errors.
    ///
    /// A leading byte order mark is skipped and belongs to no token.
    pub fn new(filename: &'a str, source: &'a str) -> Self {
        let mut cursor = Cursor::new(source);
        cursor.skip_bom();
        Self {
            token_start: cursor.position(),
            cursor,
            filename,
            token_start_line: 1,
            token_start_column: 0,
            finished: false,
        }
    }

    /// Scans and returns the next token.
    ///
    /// At end of input this returns a [`TokenKind::EndOfInput`] token, and
    /// keeps returning one on further calls. Callers that need to interleave
    /// cancellation checks can drive the lexer one token at a time with this.
    ///
    /// # Errors
    ///
    /// Any [`LexError`]; the lexer should not be used after an error.
    pub fn next_token(&mut self) -> LexResult<Token> {
        self.begin_token();

        let Some(c) = self.cursor.peek() else {
            return Ok(self.finish(TokenKind::EndOfInput, String::new()));
        };

        let token = match c {
            ' ' => self.lex_space(),
            '\r' | '\n' => self.lex_newline(),
            '"' => self.lex_string(),
            '\'' => self.lex_char(),
            '#' => self.lex_comment(),
            c if is_ident_start(c) => self.lex_identifier(),
            c if c.is_ascii_digit() => self.lex_number(),
            c if is_operator_start(c) => self.lex_operator(),
            c => {
                self.cursor.advance();
                Err(self.error(LexErrorKind::Unexpected { found: c }))
            },
        };

        match &token {
            Ok(token) => trace!(kind = %token.kind, location = %token.location, "token"),
            Err(err) => debug!(file = self.filename, error = %err.kind, location = %err.location, "lexical error"),
        }
        token
    }

    /// Scans the whole input.
    ///
    /// Returns every token in source order. The final
    /// [`TokenKind::EndOfInput`] marker is not included.
    ///
    /// # Errors
    ///
    /// The first [`LexError`] met; no tokens are returned in that case.
    pub fn tokenize(mut self) -> LexResult<Vec<Token>> {
        debug!(
            file = self.filename,
            bytes = self.cursor.remaining().len(),
            "lexing"
        );

        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            if token.kind == TokenKind::EndOfInput {
                break;
            }
            tokens.push(token);
        }

        debug!(file = self.filename, tokens = tokens.len(), "lexed");
        Ok(tokens)
    }

    /// Returns the file name this lexer reports errors against.
    pub fn filename(&self) -> &'a str {
        self.filename
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column (0-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Records the start of a new token at the cursor.
    fn begin_token(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Extent of the current token so far.
    fn token_location(&self) -> Location {
        Location::new(
            self.token_start_line,
            self.cursor.line(),
            self.token_start_column,
            self.cursor.column(),
            self.token_start,
            self.cursor.position(),
        )
    }

    /// Completes the current token, ending it at the cursor.
    pub(crate) fn finish(&self, kind: TokenKind, value: String) -> Token {
        Token::new(kind, value, self.token_location())
    }

    /// Completes the current token with its exact source slice as value.
    pub(crate) fn finish_with_slice(&self, kind: TokenKind) -> Token {
        let text = self.cursor.slice_from(self.token_start);
        self.finish(kind, text.to_owned())
    }

    /// Builds an error located at the current token.
    pub(crate) fn error(&self, kind: LexErrorKind) -> LexError {
        LexError {
            kind,
            location: self.token_location(),
            filename: self.filename.to_owned(),
        }
    }

    /// Builds the error for input ending inside a token of `kind`.
    pub(crate) fn unterminated(&self, kind: TokenKind) -> LexError {
        self.error(LexErrorKind::UnterminatedToken { kind })
    }
}

impl Iterator for Lexer<'_> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.kind == TokenKind::EndOfInput => {
                self.finished = true;
                None
            },
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            },
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new("test.cr", source)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_end_of_input_repeats() {
        let mut lexer = Lexer::new("test.cr", "");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndOfInput);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndOfInput);
    }

    #[test]
    fn test_dispatch_every_category() {
        assert_eq!(
            kinds("x 1 \"s\" 'c' + ( # note\n"),
            vec![
                TokenKind::Identifier,
                TokenKind::Space,
                TokenKind::NumberLiteral,
                TokenKind::Space,
                TokenKind::StringLiteral,
                TokenKind::Space,
                TokenKind::CharLiteral,
                TokenKind::Space,
                TokenKind::Operator,
                TokenKind::Space,
                TokenKind::Punctuation,
                TokenKind::Space,
                TokenKind::Comment,
                TokenKind::Newline,
            ]
        );
    }

    #[test]
    fn test_unexpected_character_location() {
        let err = Lexer::new("test.cr", "ab\t").tokenize().unwrap_err();
        assert_eq!(err.kind, LexErrorKind::Unexpected { found: '\t' });
        assert_eq!(err.location, Location::new(1, 1, 2, 3, 2, 3));
        assert_eq!(err.filename, "test.cr");
    }

    #[test]
    fn test_unexpected_multibyte_character() {
        let err = Lexer::new("test.cr", "€").tokenize().unwrap_err();
        assert_eq!(err.kind, LexErrorKind::Unexpected { found: '€' });
        assert_eq!(err.location.byte_end, 3);
        assert_eq!(err.location.col_end, 1);
    }

    #[test]
    fn test_iterator_stops_after_error() {
        let mut lexer = Lexer::new("test.cr", "a \t b");
        assert!(matches!(lexer.next(), Some(Ok(_))));
        assert!(matches!(lexer.next(), Some(Ok(_))));
        assert!(matches!(lexer.next(), Some(Err(_))));
        assert!(lexer.next().is_none());
    }

    #[test]
    fn test_iterator_skips_end_marker() {
        let tokens: Vec<_> = Lexer::new("test.cr", "a b").collect();
        assert_eq!(tokens.len(), 3);
        assert!(tokens.iter().all(|t| t.is_ok()));
    }

    #[test]
    fn test_bom_is_skipped() {
        let tokens = Lexer::new("test.cr", "\u{FEFF}puts").tokenize().unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].value, "puts");
        assert_eq!(tokens[0].location.col_start, 0);
        assert_eq!(tokens[0].location.byte_start, 3);
    }

    #[test]
    fn test_position_accessors() {
        let mut lexer = Lexer::new("test.cr", "ab\ncd");
        lexer.next_token().unwrap();
        assert_eq!((lexer.line(), lexer.column(), lexer.position()), (1, 2, 2));
        lexer.next_token().unwrap();
        assert_eq!((lexer.line(), lexer.column(), lexer.position()), (2, 0, 3));
        assert_eq!(lexer.filename(), "test.cr");
    }
}
