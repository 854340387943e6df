//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch
//! - `whitespace` - Space and newline runs
//! - `identifier` - Identifier lexing
//! - `number` - Number literal lexing
//! - `string` - String and character literal lexing
//! - `operator` - Operator and punctuation lexing
//! - `comment` - Line comments

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;
mod whitespace;

pub use core::Lexer;
pub use operator::{OPERATORS, PUNCTUATION};
