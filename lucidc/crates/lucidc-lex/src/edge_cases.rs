//! Edge case tests for lucidc-lex

#[cfg(test)]
mod tests {
    use crate::{lex, LexErrorKind, Lexer, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        lex("edge.cr", source).unwrap()
    }

    fn lex_err(source: &str) -> LexErrorKind {
        lex("edge.cr", source).unwrap_err().kind
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_bom_only() {
        assert!(lex_all("\u{FEFF}").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t[0].kind, TokenKind::Identifier);
        assert_eq!(t[0].location.col_end, 1);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("{name} = 1"));
        assert_eq!(t[0].value, name);
        assert_eq!(t[0].location.col_end, 10000);
    }

    #[test]
    fn test_edge_keywords_are_identifiers() {
        let t = lex_all("def end if");
        assert!(t.iter().filter(|t| !t.is_trivia()).all(|t| t.kind == TokenKind::Identifier));
    }

    #[test]
    fn test_edge_only_spaces() {
        let t = lex_all("     ");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::Space);
        assert_eq!(t[0].location.col_end, 5);
    }

    #[test]
    fn test_edge_only_newlines() {
        let t = lex_all("\n\n\n");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].location.line_start, 1);
        assert_eq!(t[0].location.line_end, 4);
    }

    #[test]
    fn test_edge_trailing_newline_without_content() {
        let t = lex_all("x\n");
        assert_eq!(t.len(), 2);
        assert_eq!(t[1].kind, TokenKind::Newline);
    }

    #[test]
    fn test_edge_columns_count_scalars_not_bytes() {
        let t = lex_all("日本 x");
        assert_eq!(t[0].location.col_end, 2);
        assert_eq!(t[0].location.byte_end, 6);
        assert_eq!(t[2].location.col_start, 3);
        assert_eq!(t[2].location.byte_start, 7);
    }

    #[test]
    fn test_edge_column_resets_after_newline() {
        let t = lex_all("abc\n  d");
        let d = t.last().unwrap();
        assert_eq!((d.location.line_start, d.location.col_start), (2, 2));
    }

    #[test]
    fn test_edge_string_with_hash() {
        let t = lex_all("\"# not a comment\"");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::StringLiteral);
    }

    #[test]
    fn test_edge_string_with_tab() {
        let t = lex_all("\"a\tb\"");
        assert_eq!(t[0].value, "a\tb");
    }

    #[test]
    fn test_edge_nested_punctuation() {
        let t = lex_all("((()))");
        assert_eq!(t.iter().filter(|x| x.value == "(").count(), 3);
    }

    #[test]
    fn test_edge_case_sensitivity() {
        let t = lex_all("Def def");
        assert_eq!(t[0].value, "Def");
        assert_eq!(t[2].value, "def");
    }

    #[test]
    fn test_edge_instance_variable() {
        let t = lex_all("@name");
        assert_eq!(t[0].value, "@");
        assert_eq!(t[1].value, "name");
    }

    #[test]
    fn test_edge_numbers_separated_by_operators() {
        let t = lex_all("1+2-3");
        let values: Vec<_> = t.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(values, vec!["1", "+", "2", "-", "3"]);
    }

    #[test]
    fn test_edge_number_then_punctuation() {
        let t = lex_all("f(1,2)");
        assert_eq!(t.len(), 6);
    }

    #[test]
    fn test_edge_step_function_after_end() {
        let mut lexer = Lexer::new("edge.cr", "x");
        lexer.next_token().unwrap();
        for _ in 0..3 {
            assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndOfInput);
        }
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_err_tab() {
        assert_eq!(lex_err("\t"), LexErrorKind::Unexpected { found: '\t' });
    }

    #[test]
    fn test_err_leading_underscore() {
        assert_eq!(lex_err("_x"), LexErrorKind::Unexpected { found: '_' });
    }

    #[test]
    fn test_err_backtick() {
        assert_eq!(lex_err("`ls`"), LexErrorKind::Unexpected { found: '`' });
    }

    #[test]
    fn test_err_symbol_after_identifier() {
        let err = lex("edge.cr", "a€").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::Unexpected { found: '€' });
        assert_eq!(err.location.col_start, 1);
    }

    #[test]
    fn test_err_unterminated_string() {
        assert_eq!(
            lex_err("\"unterminated"),
            LexErrorKind::UnterminatedToken {
                kind: TokenKind::StringLiteral
            }
        );
    }

    #[test]
    fn test_err_empty_char() {
        assert_eq!(lex_err("''"), LexErrorKind::EmptyChar);
    }

    #[test]
    fn test_err_unterminated_char() {
        assert_eq!(
            lex_err("'x"),
            LexErrorKind::UnterminatedToken {
                kind: TokenKind::CharLiteral
            }
        );
    }

    #[test]
    fn test_err_invalid_hex() {
        assert!(matches!(lex_err("0x"), LexErrorKind::MalformedNumber { .. }));
    }

    #[test]
    fn test_err_fails_fast() {
        let err = lex("edge.cr", "ok\t\"unterminated").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::Unexpected { found: '\t' });
        assert_eq!(err.location.col_start, 2);
    }

    #[test]
    fn test_err_location_on_later_line() {
        let err = lex("edge.cr", "a\nb\n  \t").unwrap_err();
        assert_eq!(err.location.line_start, 3);
        assert_eq!(err.location.col_start, 2);
        assert_eq!(err.to_string(), "edge.cr:3:3: unexpected character '\\t'");
    }
}
