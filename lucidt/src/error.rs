//! Error handling module for the lucidt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use lucidc_lex::LexError;
use lucidc_util::SourceError;
use thiserror::Error;

/// Main error type for the lucidt CLI application.
#[derive(Error, Debug)]
pub enum LucidtError {
    /// The configuration file is missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid command-line input.
    #[error("validation error: {0}")]
    Validation(String),

    /// A source file could not be loaded.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// A source file failed to lex.
    ///
    /// `snippet` holds the offending source line and a caret under the
    /// error column.
    #[error("{error}\n{snippet}")]
    Lex {
        /// The lexical error.
        #[source]
        error: LexError,
        /// Rendered source excerpt.
        snippet: String,
    },

    /// Some input files failed; each failure has already been reported.
    #[error("{failed} of {total} file(s) failed to lex")]
    FilesFailed {
        /// Number of files that failed.
        failed: usize,
        /// Number of files given.
        total: usize,
    },

    /// The worker pool could not be started.
    #[error("failed to start worker threads: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using LucidtError.
pub type Result<T> = std::result::Result<T, LucidtError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use lucidc_lex::{LexErrorKind, Location};

    #[test]
    fn test_config_error_display() {
        let err = LucidtError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "configuration error: missing field");
    }

    #[test]
    fn test_validation_error_display() {
        let err = LucidtError::Validation("no input files".to_string());
        assert_eq!(err.to_string(), "validation error: no input files");
    }

    #[test]
    fn test_files_failed_display() {
        let err = LucidtError::FilesFailed { failed: 1, total: 3 };
        assert_eq!(err.to_string(), "1 of 3 file(s) failed to lex");
    }

    #[test]
    fn test_lex_error_display_includes_snippet() {
        let err = LucidtError::Lex {
            error: LexError {
                kind: LexErrorKind::Unexpected { found: '\t' },
                location: Location::new(1, 1, 1, 2, 1, 2),
                filename: "a.cr".to_string(),
            },
            snippet: "  |\ta\n  | ^".to_string(),
        };
        assert_eq!(err.to_string(), "a.cr:1:2: unexpected character '\\t'\n  |\ta\n  | ^");
    }

    #[test]
    fn test_source_error_conversion() {
        let source = SourceError::InvalidUtf8 {
            path: PathBuf::from("bad.cr"),
            offset: 0,
        };
        let err: LucidtError = source.into();
        assert!(matches!(err, LucidtError::Source(_)));
        assert!(err.to_string().starts_with("bad.cr is not valid UTF-8"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LucidtError = io_err.into();
        assert!(matches!(err, LucidtError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: LucidtError = json_err.into();
        assert!(matches!(err, LucidtError::Json(_)));
    }
}
