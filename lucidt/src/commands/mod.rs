//! Command modules for the lucidt CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand is implemented in its own file.

pub mod common;

pub mod lex;

// Re-export command types and functions
pub use lex::{run_lex, LexArgs};
