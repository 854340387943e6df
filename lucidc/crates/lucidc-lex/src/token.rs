//! Token type definitions.
//!
//! A [`Token`] is a classified, located span of source text. Classification
//! is deliberately coarse: the lexer says *that* something is an operator,
//! not *which* operator it is. Resolving keywords and operators is left to
//! the parser.

use std::fmt;

use lucidc_util::Location;

/// The lexical category of a token.
///
/// Each variant has a stable name, returned by [`TokenKind::name`], that is
/// used in diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// End of input. Only produced by [`crate::Lexer::next_token`].
    EndOfInput,
    /// A run of `' '` characters.
    Space,
    /// A run of `\n` / `\r\n` line terminators.
    Newline,
    /// A name: a letter followed by letters, digits or `_`.
    Identifier,
    /// A double-quoted string, value decoded.
    StringLiteral,
    /// An integer or floating-point literal, value as written.
    NumberLiteral,
    /// A single-quoted character, value decoded.
    CharLiteral,
    /// A `#` line comment, value excludes the `#`.
    Comment,
    /// An operator such as `+`, `==` or `<=>`.
    Operator,
    /// One of `( ) [ ] { } , ;`.
    Punctuation,
}

impl TokenKind {
    /// Every token kind, in declaration order.
    pub const ALL: [TokenKind; 10] = [
        TokenKind::EndOfInput,
        TokenKind::Space,
        TokenKind::Newline,
        TokenKind::Identifier,
        TokenKind::StringLiteral,
        TokenKind::NumberLiteral,
        TokenKind::CharLiteral,
        TokenKind::Comment,
        TokenKind::Operator,
        TokenKind::Punctuation,
    ];

    /// Returns the diagnostic name of this kind.
    ///
    /// # Example
    ///
    /// ```
    /// use lucidc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::StringLiteral.name(), "string literal");
    /// ```
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::EndOfInput => "end of input",
            TokenKind::Space => "space",
            TokenKind::Newline => "newline",
            TokenKind::Identifier => "identifier",
            TokenKind::StringLiteral => "string literal",
            TokenKind::NumberLiteral => "number literal",
            TokenKind::CharLiteral => "character literal",
            TokenKind::Comment => "comment",
            TokenKind::Operator => "operator",
            TokenKind::Punctuation => "punctuation",
        }
    }

    /// Returns true for tokens a parser normally skips.
    pub const fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Space | TokenKind::Newline | TokenKind::Comment)
    }

    /// Returns true for literal tokens.
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::StringLiteral | TokenKind::NumberLiteral | TokenKind::CharLiteral
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified token with its value and location.
///
/// `value` holds:
/// - nothing for [`TokenKind::Space`], [`TokenKind::Newline`] and
///   [`TokenKind::EndOfInput`]
/// - the exact source slice for identifiers, numbers, operators and
///   punctuation
/// - the decoded interior for string and character literals
/// - the text after `#` for comments
///
/// Use [`Token::lexeme`] to recover the raw source text of any token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// Lexical category.
    pub kind: TokenKind,
    /// Token value, see the type documentation.
    pub value: String,
    /// Where the token is in the source.
    pub location: Location,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, value: impl Into<String>, location: Location) -> Self {
        Self {
            kind,
            value: value.into(),
            location,
        }
    }

    /// Returns the raw source text this token was scanned from.
    ///
    /// # Example
    ///
    /// ```
    /// let source = "puts \"hello world\"";
    /// let tokens = lucidc_lex::lex("main.cr", source).unwrap();
    /// assert_eq!(tokens[2].value, "hello world");
    /// assert_eq!(tokens[2].lexeme(source), "\"hello world\"");
    /// ```
    pub fn lexeme<'s>(&self, source: &'s str) -> &'s str {
        self.location.span_text(source)
    }

    /// Returns true for tokens a parser normally skips.
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            write!(f, "{} at {}", self.kind, self.location)
        } else {
            write!(f, "{} {:?} at {}", self.kind, self.value, self.location)
        }
    }
}
