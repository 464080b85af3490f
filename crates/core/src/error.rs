//! Error types for textsearch
//!
//! This module defines the error types surfaced to the driver.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Query evaluation has no error cases: unknown terms and empty results are
//! normal outcomes. Usage errors are reported by the argument parser.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for textsearch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for indexing and configuration
#[derive(Debug, Error)]
pub enum Error {
    /// The directory to index does not exist
    #[error("Directory \"{}\" does not exist.", .0.display())]
    DirectoryNotFound(PathBuf),

    /// A file or directory could not be opened or read
    #[error("I/O error reading {path}: {source}")]
    Io {
        /// Path of the offending file or directory
        path: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration file could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Wrap an I/O error with the path it occurred on
    pub fn io(path: impl Into<String>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}
