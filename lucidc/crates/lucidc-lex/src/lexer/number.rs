//! Number literal lexing.
//!
//! This module checks the shape of integer and floating-point literals. The
//! value of a number token is the literal exactly as written; converting it
//! to a machine number is left to later phases.

use crate::error::{LexError, LexErrorKind, LexResult, NumberFault};
use crate::token::{Token, TokenKind};
use crate::unicode::{is_digit_in_base, is_ident_continue, is_ident_start};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// # Number Formats
    ///
    /// - Decimal: `42`, `1_000`
    /// - Hexadecimal: `0xFF`, `0xAB_CD`
    /// - Binary: `0b1010`
    /// - Octal: `0o777`
    /// - Float: `3.14`, `1e10`, `2.5e-3`
    ///
    /// A `.` followed by another `.` or by a letter ends the literal, so
    /// `1..5` is a range between two numbers and `1.abs` is a call on `1`.
    pub(crate) fn lex_number(&mut self) -> LexResult<Token> {
        if self.cursor.peek() == Some('0') {
            let base = match self.cursor.peek_nth(1) {
                Some('x' | 'X') => Some(16),
                Some('b' | 'B') => Some(2),
                Some('o' | 'O') => Some(8),
                _ => None,
            };
            if let Some(base) = base {
                self.cursor.advance();
                self.cursor.advance();
                return self.lex_radix_integer(base);
            }
        }

        self.digit_group(10)?;

        let ends_literal = |c: char| c == '.' || is_ident_start(c);
        if self.cursor.peek() == Some('.') && !self.cursor.peek_nth(1).is_some_and(ends_literal) {
            self.cursor.advance();
            if !self.cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
                return Err(self.malformed(NumberFault::MissingFractionDigits));
            }
            self.digit_group(10)?;
            self.reject_decimal_point(NumberFault::RepeatedDecimalPoint)?;
        }

        if matches!(self.cursor.peek(), Some('e' | 'E')) {
            self.cursor.advance();
            if matches!(self.cursor.peek(), Some('+' | '-')) {
                self.cursor.advance();
            }
            match self.cursor.peek() {
                Some(c) if c.is_ascii_digit() => self.digit_group(10)?,
                Some('_') => {
                    self.cursor.advance();
                    return Err(self.malformed(NumberFault::MisplacedUnderscore));
                },
                _ => return Err(self.malformed(NumberFault::MissingExponentDigits)),
            }

            if matches!(self.cursor.peek(), Some('e' | 'E')) {
                self.cursor.advance();
                return Err(self.malformed(NumberFault::RepeatedExponent));
            }
            self.reject_decimal_point(NumberFault::RepeatedDecimalPoint)?;
        }

        self.finish_number()
    }

    /// Lexes the digits of a `0x`, `0b` or `0o` literal. The prefix has been
    /// consumed.
    fn lex_radix_integer(&mut self, base: u32) -> LexResult<Token> {
        match self.cursor.peek() {
            Some(c) if is_digit_in_base(c, base) => {},
            Some('_') => {
                self.cursor.advance();
                return Err(self.malformed(NumberFault::MisplacedUnderscore));
            },
            Some(c) if c.is_alphanumeric() => {
                self.cursor.advance();
                return Err(self.malformed(NumberFault::MissingRadixDigits));
            },
            _ => return Err(self.malformed(NumberFault::MissingRadixDigits)),
        }

        self.digit_group(base)?;
        self.reject_decimal_point(NumberFault::FractionalRadix)?;
        self.finish_number()
    }

    /// Fails with `fault` if a `.` and a digit follow, consuming the `.`.
    fn reject_decimal_point(&mut self, fault: NumberFault) -> LexResult<()> {
        if self.cursor.peek() == Some('.') && self.cursor.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) {
            self.cursor.advance();
            return Err(self.malformed(fault));
        }
        Ok(())
    }

    /// Consumes `D+ ('_' D+)*` for digits `D` of `base`.
    ///
    /// The caller has checked that a digit comes first.
    fn digit_group(&mut self, base: u32) -> LexResult<()> {
        loop {
            self.cursor.eat_while(|c| is_digit_in_base(c, base));
            if !self.cursor.eat('_') {
                return Ok(());
            }
            if !self.cursor.peek().is_some_and(|c| is_digit_in_base(c, base)) {
                return Err(self.malformed(NumberFault::MisplacedUnderscore));
            }
        }
    }

    /// Completes a number token, rejecting a literal glued to a name.
    fn finish_number(&mut self) -> LexResult<Token> {
        if self.cursor.peek().is_some_and(is_ident_continue) {
            self.cursor.advance();
            return Err(self.malformed(NumberFault::TrailingAlphanumeric));
        }
        Ok(self.finish_with_slice(TokenKind::NumberLiteral))
    }

    fn malformed(&self, fault: NumberFault) -> LexError {
        let slice = self.cursor.slice_from(self.token_start).to_owned();
        self.error(LexErrorKind::MalformedNumber { slice, fault })
    }
}
