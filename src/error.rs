//! Error types for the spell corrector.
//!
//! Every fallible operation in the crate returns [`Result`], whose error side is
//! [`SpellError`]. Loading a corpus or a test set is the only place where things
//! can go wrong; correcting a word never fails.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The main error type for spell corrector operations.
#[derive(Error, Debug)]
pub enum SpellError {
    /// A corpus, dictionary or test-set file could not be read.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A test-set line that is not of the form `correct: wrong1 wrong2 ...`.
    #[error("Malformed test-set line {line}: {content:?}")]
    MalformedTestLine { line: usize, content: String },

    /// A frequency-list line without a term and a positive count.
    #[error("Malformed frequency entry on line {line}: {content:?}")]
    MalformedFrequencyEntry { line: usize, content: String },

    /// A lookup asked for more edits than the index was built for.
    #[error("Edit distance {requested} exceeds the dictionary maximum of {max}")]
    InvalidEditDistance { requested: usize, max: usize },
}

/// Result type alias for operations that may fail with [`SpellError`].
pub type Result<T> = std::result::Result<T, SpellError>;

impl SpellError {
    /// Wrap an I/O error together with the path that caused it.
    pub fn io<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        SpellError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a malformed test-line error. `line` is 1-based.
    pub fn malformed_test_line<S: Into<String>>(line: usize, content: S) -> Self {
        SpellError::MalformedTestLine {
            line,
            content: content.into(),
        }
    }

    /// Create a malformed frequency-entry error. `line` is 1-based.
    pub fn malformed_frequency_entry<S: Into<String>>(line: usize, content: S) -> Self {
        SpellError::MalformedFrequencyEntry {
            line,
            content: content.into(),
        }
    }
}

/// Read a whole file into a string, attaching the path on failure.
pub(crate) fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| SpellError::io(path, e))
}
