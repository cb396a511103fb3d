//! Storage error types for movies-storage.

use movies_core::MovieId;
use thiserror::Error;

/// Errors produced by store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    /// No record with the given id exists.
    #[error("movie not found: {0}")]
    MovieNotFound(MovieId),

    /// An id strategy name did not match any known strategy.
    #[error("unknown id strategy: '{0}' (expected 'count' or 'monotonic')")]
    UnknownIdStrategy(String),
}
