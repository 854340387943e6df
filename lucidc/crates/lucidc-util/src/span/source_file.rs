//! Named source text and line lookup.

use std::path::Path;
use std::sync::Arc;

use crate::error::{SourceError, SourceResult};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use lucidc_util::span::SourceFile;
///
/// let file = SourceFile::new("main.cr", "puts \"hello world\"");
/// assert_eq!(file.name(), "main.cr");
/// assert_eq!(file.line_count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Byte offsets at which each line starts
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file from text already in memory
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Read and decode a file from disk
    ///
    /// The file name recorded is the path as given.
    pub fn load(path: &Path) -> SourceResult<Self> {
        let bytes = std::fs::read(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|e| SourceError::InvalidUtf8 {
            path: path.to_path_buf(),
            offset: e.utf8_error().valid_up_to(),
        })?;
        Ok(Self::new(path.display().to_string(), text))
    }

    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Text of a 1-based line, without its line terminator
    ///
    /// # Examples
    ///
    /// ```
    /// use lucidc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.cr", "first\r\nsecond\n");
    /// assert_eq!(file.line_text(1), Some("first"));
    /// assert_eq!(file.line_text(2), Some("second"));
    /// assert_eq!(file.line_text(3), Some(""));
    /// assert_eq!(file.line_text(4), None);
    /// ```
    pub fn line_text(&self, line: u32) -> Option<&str> {
        let index = (line as usize).checked_sub(1)?;
        let start = *self.line_starts.get(index)?;
        let end = self
            .line_starts
            .get(index + 1)
            .map_or(self.content.len(), |&next| next - 1);
        let text = &self.content[start..end];
        Some(text.strip_suffix('\r').unwrap_or(text))
    }
}
