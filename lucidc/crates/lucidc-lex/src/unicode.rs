//! Character classes used by the Lucid lexer.
//!
//! Input is a sequence of Unicode scalar values. Letters are recognised
//! with the Unicode `Alphabetic` property, digits inside identifiers with
//! the `Numeric` property. Number literals are ASCII only.
//!
//! `Alphabetic` is wider than the letter categories (`L*`): it also covers
//! letter numerals (`Nl`, e.g. `Ⅻ`) and `Other_Alphabetic` combining marks,
//! so these may start an identifier too.

/// Checks if a character can start an identifier.
///
/// Only Unicode letters qualify; `_` and digits may appear later but not
/// first.
///
/// # Example
///
/// ```
/// use lucidc_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('p'));
/// assert!(is_ident_start('α'));
/// assert!(!is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_alphabetic()
}

/// Checks if a character can continue an identifier.
///
/// # Example
///
/// ```
/// use lucidc_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue('a'));
/// assert!(is_ident_continue('_'));
/// assert!(is_ident_continue('7'));
/// assert!(is_ident_continue('٣')); // Arabic-Indic three
/// assert!(!is_ident_continue('?'));
/// assert!(!is_ident_continue(' '));
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Checks if a character is a valid digit in the given numeric base.
///
/// # Example
///
/// ```
/// use lucidc_lex::unicode::is_digit_in_base;
///
/// assert!(is_digit_in_base('9', 10));
/// assert!(!is_digit_in_base('a', 10));
/// assert!(is_digit_in_base('F', 16));
/// assert!(is_digit_in_base('7', 8));
/// assert!(!is_digit_in_base('8', 8));
/// assert!(!is_digit_in_base('2', 2));
/// ```
#[inline]
pub fn is_digit_in_base(c: char, base: u32) -> bool {
    match base {
        2 => matches!(c, '0' | '1'),
        8 => matches!(c, '0'..='7'),
        10 => c.is_ascii_digit(),
        16 => c.is_ascii_hexdigit(),
        _ => false,
    }
}

/// Converts a hex character to its numeric value.
///
/// # Example
///
/// ```
/// use lucidc_lex::unicode::hex_digit_to_value;
///
/// assert_eq!(hex_digit_to_value('a'), Some(10));
/// assert_eq!(hex_digit_to_value('F'), Some(15));
/// assert_eq!(hex_digit_to_value('g'), None);
/// ```
pub fn hex_digit_to_value(c: char) -> Option<u32> {
    c.to_digit(16)
}

/// Parses the digits of a `\u{...}` escape into a scalar value.
///
/// Accepts one to six hex digits. Surrogates and values above
/// `0x10FFFF` are rejected.
///
/// # Example
///
/// ```
/// use lucidc_lex::unicode::parse_hex_scalar;
///
/// assert_eq!(parse_hex_scalar("41"), Some('A'));
/// assert_eq!(parse_hex_scalar("1F600"), Some('😀'));
/// assert_eq!(parse_hex_scalar("D800"), None);
/// assert_eq!(parse_hex_scalar("110000"), None);
/// assert_eq!(parse_hex_scalar("0000041"), None);
/// assert_eq!(parse_hex_scalar(""), None);
/// ```
pub fn parse_hex_scalar(hex: &str) -> Option<char> {
    if hex.is_empty() || hex.len() > 6 {
        return None;
    }
    let mut value = 0u32;
    for c in hex.chars() {
        value = value * 16 + hex_digit_to_value(c)?;
    }
    char::from_u32(value)
}
