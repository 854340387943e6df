//! Core error types for lucidc-util crate
//!
//! This module defines error types used throughout the util crate.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for obtaining source text
#[derive(Debug, Error)]
pub enum SourceError {
    /// The file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid UTF-8
    #[error("{} is not valid UTF-8 (first invalid byte at offset {offset})", path.display())]
    InvalidUtf8 {
        /// Path that was being decoded
        path: PathBuf,
        /// Byte offset of the first invalid sequence
        offset: usize,
    },
}

/// Result type alias for source loading operations
pub type SourceResult<T> = std::result::Result<T, SourceError>;
