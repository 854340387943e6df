//! Common types and utilities for lucidt commands.
//!
//! This module provides the output format selection and the serializable
//! token record shared by the command implementations.

use clap::ValueEnum;
use lucidc_lex::Token;
use serde::{Deserialize, Serialize};

// ============================================================================
// Output Format
// ============================================================================

/// How token dumps are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per token
    #[default]
    Text,
    /// One JSON array of token objects per file
    Json,
}

// ============================================================================
// Token Records
// ============================================================================

/// The JSON shape of one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRecord<'a> {
    /// Diagnostic name of the token kind.
    pub kind: &'static str,
    /// Token value.
    pub value: &'a str,
    /// First line (1-based).
    pub line_start: u32,
    /// Last line (1-based).
    pub line_end: u32,
    /// Start column (0-based).
    pub col_start: u32,
    /// End column (0-based).
    pub col_end: u32,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        Self {
            kind: token.kind.name(),
            value: &token.value,
            line_start: token.location.line_start,
            line_end: token.location.line_end,
            col_start: token.location.col_start,
            col_end: token.location.col_end,
        }
    }
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "no input files specified";

    /// Error when the job count is zero.
    pub const ZERO_JOBS: &str = "the number of jobs must be at least 1";
}
