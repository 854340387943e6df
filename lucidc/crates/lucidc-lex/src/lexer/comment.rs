//! Comment lexing.
//!
//! Lucid only has `#` line comments. Comments are kept as tokens so that
//! tools working on the token stream can see them.

use crate::error::LexResult;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a line comment.
    ///
    /// The comment stops before the line terminator, which is left for the
    /// newline scanner.
    pub(crate) fn lex_comment(&mut self) -> LexResult<Token> {
        self.cursor.advance();
        let body_start = self.cursor.position();
        self.cursor.eat_while(|c| c != '\n' && c != '\r');
        let body = self.cursor.slice_from(body_start);
        Ok(self.finish(TokenKind::Comment, body.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::LexErrorKind;
    use crate::token::TokenKind;
    use crate::Lexer;
    use lucidc_util::Location;

    #[test]
    fn test_comment_to_end_of_input() {
        let token = Lexer::new("test.cr", "# hello").next_token().unwrap();
        assert_eq!(token.kind, TokenKind::Comment);
        assert_eq!(token.value, " hello");
        assert_eq!(token.location, Location::new(1, 1, 0, 7, 0, 7));
    }

    #[test]
    fn test_comment_stops_before_newline() {
        let tokens = Lexer::new("test.cr", "x # note\ny").tokenize().unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Space,
                TokenKind::Comment,
                TokenKind::Newline,
                TokenKind::Identifier,
            ]
        );
        assert_eq!(tokens[2].value, " note");
        assert_eq!(tokens[4].location.line_start, 2);
    }

    #[test]
    fn test_empty_comment() {
        let token = Lexer::new("test.cr", "#\n").next_token().unwrap();
        assert_eq!(token.value, "");
        assert_eq!(token.location.col_end, 1);
    }

    #[test]
    fn test_comment_keeps_other_characters() {
        let token = Lexer::new("test.cr", "#\t\"unclosed 'é").next_token().unwrap();
        assert_eq!(token.value, "\t\"unclosed 'é");
    }

    #[test]
    fn test_carriage_return_ends_comment() {
        let tokens = Lexer::new("test.cr", "# a\r\nb").tokenize().unwrap();
        assert_eq!(tokens[0].value, " a");
        assert_eq!(tokens[1].kind, TokenKind::Newline);

        let err = Lexer::new("test.cr", "# a\rb").tokenize().unwrap_err();
        assert!(matches!(err.kind, LexErrorKind::Expected { wanted: '\n', .. }));
    }
}
