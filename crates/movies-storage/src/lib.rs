//! Record store for movie records.
//!
//! Provides the [`MovieStore`] trait defining the storage contract, plus
//! [`InMemoryStore`], the ordered in-process backend the server runs on.
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`strategy`]: IdStrategy, how new records get their ids
//! - [`traits`]: MovieStore trait definition
//! - [`memory`]: InMemoryStore implementation

pub mod error;
pub mod memory;
pub mod strategy;
pub mod traits;

// Re-export key types for ergonomic use.
pub use error::StorageError;
pub use memory::InMemoryStore;
pub use strategy::IdStrategy;
pub use traits::{MovieEntry, MovieStore};
