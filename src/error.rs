//! Error types for resumark library.

use std::io;
use thiserror::Error;

/// Result type alias for resumark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around resume segmentation.
///
/// Segmentation itself never fails; these cover reading input and
/// building a parser from caller-supplied patterns.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input bytes are not valid UTF-8 text.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// A configured pattern could not be compiled.
    #[error("Invalid pattern '{name}': {source}")]
    InvalidPattern {
        /// Which configured pattern failed
        name: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// Error during rendering (Markdown, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    pub(crate) fn invalid_pattern(name: impl Into<String>, source: regex::Error) -> Self {
        Error::InvalidPattern {
            name: name.into(),
            source,
        }
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Encoding(err.to_string())
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::Encoding(err.to_string())
    }
}
