//! Core error types for movies-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering
//! the failure modes of decoding movie documents.

use thiserror::Error;

/// Core errors produced by the movies-core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The request body held no JSON value at all.
    #[error("empty movie body")]
    EmptyBody,

    /// The body was not valid JSON or did not have the shape of a movie.
    #[error("invalid movie body: {0}")]
    InvalidBody(#[from] serde_json::Error),
}
