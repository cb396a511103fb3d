//! The [`MovieStore`] trait defining the record store contract.
//!
//! The store is an ordered sequence: `list` returns records in insertion
//! order, removal shifts later records forward, and every lookup is a linear
//! scan where the first match wins.

use movies_core::{Movie, MovieId};

use crate::error::StorageError;

/// The storage contract for movie records.
///
/// The trait is synchronous. Callers that share a store across tasks wrap it
/// in a lock.
pub trait MovieStore {
    /// Returns all records in current order.
    fn list(&self) -> Vec<Movie>;

    /// Returns the first record whose id equals `id`.
    fn find_by_id(&self, id: &MovieId) -> Result<Movie, StorageError>;

    /// Appends a record, discarding whatever id it carried.
    ///
    /// Returns the id the store assigned.
    fn append(&mut self, movie: Movie) -> MovieId;

    /// Locates the record matching `id` for an in-place replace.
    fn entry(&mut self, id: &MovieId) -> Result<MovieEntry<'_>, StorageError>;

    /// Replaces the whole record matching `id`. The stored record keeps `id`
    /// regardless of the id inside `movie`.
    fn replace_by_id(&mut self, id: &MovieId, movie: Movie) -> Result<(), StorageError> {
        self.entry(id)?.replace(movie);
        Ok(())
    }

    /// Removes the record matching `id` and returns it.
    fn remove_by_id(&mut self, id: &MovieId) -> Result<Movie, StorageError>;

    /// Number of stored records.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A located record, held across work that has to happen between finding
/// it and overwriting it.
#[derive(Debug)]
pub struct MovieEntry<'a> {
    slot: &'a mut Movie,
}

impl<'a> MovieEntry<'a> {
    pub fn new(slot: &'a mut Movie) -> Self {
        MovieEntry { slot }
    }

    /// Overwrites the record with `movie`, keeping the stored id.
    pub fn replace(self, movie: Movie) {
        let id = std::mem::take(&mut self.slot.id);
        *self.slot = movie.with_id(id);
    }
}
