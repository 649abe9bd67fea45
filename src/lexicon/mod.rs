//! Lexicon sources
//!
//! A lexicon source produces the raw, ordered word list backing a
//! dictionary. Sources are invoked lazily: a dictionary calls `load` once,
//! on first query, and caches the outcome. Raw words are not validated
//! here; the owning dictionary normalizes and filters them against its
//! alphabet and word length.

use std::fmt;
use std::fs;
use std::path::PathBuf;

/// A provider of raw candidate words
///
/// Implementations must be cheap to construct; the expensive part, if any,
/// happens inside `load`.
pub trait LexiconSource: Send + Sync {
    /// Produce the raw candidate words, in order
    ///
    /// # Errors
    /// Returns `LexiconError` when the backing data cannot be read.
    fn load(&self) -> Result<Vec<String>, LexiconError>;
}

/// Error type for unusable lexicon sources
///
/// Cloneable so a dictionary can cache the failure and re-surface it on
/// every subsequent query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconError {
    Unreadable { path: String, message: String },
}

impl fmt::Display for LexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable { path, message } => {
                write!(f, "Cannot read word list '{path}': {message}")
            }
        }
    }
}

impl std::error::Error for LexiconError {}

/// A static in-memory word list
pub struct MemorySource {
    words: Vec<String>,
}

impl MemorySource {
    /// Create a source from any sequence of words
    ///
    /// # Examples
    /// ```
    /// use wordle_lexicon::lexicon::{LexiconSource, MemorySource};
    ///
    /// let source = MemorySource::new(["crane", "slate"]);
    /// assert_eq!(source.load().unwrap().len(), 2);
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl LexiconSource for MemorySource {
    fn load(&self) -> Result<Vec<String>, LexiconError> {
        Ok(self.words.clone())
    }
}

/// A line-delimited word list file, one candidate word per line
///
/// Blank lines are dropped at read time. Lines that do not conform to the
/// owning dictionary's alphabet are dropped later, during normalization,
/// so a malformed data file degrades instead of failing the whole load.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source backed by the given file path
    ///
    /// The file is not touched until the owning dictionary first loads.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LexiconSource for FileSource {
    fn load(&self) -> Result<Vec<String>, LexiconError> {
        let content = fs::read_to_string(&self.path).map_err(|e| LexiconError::Unreadable {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_source_preserves_order() {
        let source = MemorySource::new(["crane", "slate", "irate"]);
        let words = source.load().unwrap();
        assert_eq!(words, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn memory_source_empty_is_legal() {
        let source = MemorySource::new(std::iter::empty::<String>());
        assert_eq!(source.load().unwrap().len(), 0);
    }

    #[test]
    fn file_source_missing_file_errors() {
        let source = FileSource::new("/nonexistent/word-list.txt");
        let result = source.load();

        assert!(matches!(result, Err(LexiconError::Unreadable { .. })));
    }

    #[test]
    fn file_source_drops_blank_lines() {
        let path = std::env::temp_dir().join("wordle_lexicon_blank_lines_test.txt");
        fs::write(&path, "crane\n\n  \nslate\n").unwrap();

        let source = FileSource::new(&path);
        let words = source.load().unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(words, vec!["crane", "slate"]);
    }

    #[test]
    fn file_source_trims_whitespace() {
        let path = std::env::temp_dir().join("wordle_lexicon_trim_test.txt");
        fs::write(&path, "  crane  \nslate\r\n").unwrap();

        let source = FileSource::new(&path);
        let words = source.load().unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(words, vec!["crane", "slate"]);
    }

    #[test]
    fn lexicon_error_mentions_path() {
        let source = FileSource::new("/nonexistent/word-list.txt");
        let message = source.load().unwrap_err().to_string();
        assert!(message.contains("/nonexistent/word-list.txt"));
    }
}
