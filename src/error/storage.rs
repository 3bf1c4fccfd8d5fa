//! Storage error module.
//!
//! Errors raised while reading or writing the persisted Bloom filter and
//! blacklist files.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during persistence operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing a persistence file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// The persisted bit array does not match the configured filter size.
    #[error("Persisted bit count {actual} does not match filter size {expected}")]
    SizeMismatch {
        /// Configured filter size in bits
        expected: usize,
        /// Number of records found on disk
        actual: usize,
    },

    /// The data directory could not be created.
    #[error("Failed to create data directory {path}: {source}")]
    CreateDir {
        /// Directory being created
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true if the error is a missing file, which loaders treat as empty state.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}
