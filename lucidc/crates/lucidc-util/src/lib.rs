//! lucidc-util - Core Utilities and Foundation Types
//!
//! Shared value types for the lucidc compiler crates. Nothing in here knows
//! about tokens or syntax; it only describes *where* things are in a source
//! file and how a source file is obtained.
//!
//! # Module Structure
//!
//! - [`span`] - [`Location`] (line/column/byte extent) and [`SourceFile`]
//! - [`error`] - error types for loading sources

#![warn(missing_docs)]

pub mod error;
pub mod span;

pub use error::{SourceError, SourceResult};
pub use span::{Location, SourceFile};
