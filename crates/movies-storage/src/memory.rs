//! In-memory implementation of [`MovieStore`].
//!
//! [`InMemoryStore`] keeps records in a `Vec` in insertion order. Nothing is
//! persisted; a fresh store is built on every process start.

use movies_core::{seed_movies, Movie, MovieId};

use crate::error::StorageError;
use crate::strategy::IdStrategy;
use crate::traits::{MovieEntry, MovieStore};

/// Ordered in-memory record store.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    movies: Vec<Movie>,
    strategy: IdStrategy,
    /// Next id handed out under [`IdStrategy::Monotonic`].
    next_id: u64,
}

impl InMemoryStore {
    /// Creates an empty store with count-based ids.
    pub fn new() -> Self {
        Self::with_strategy(IdStrategy::CountBased)
    }

    /// Creates an empty store with the given id strategy.
    pub fn with_strategy(strategy: IdStrategy) -> Self {
        Self::from_movies(Vec::new(), strategy)
    }

    /// Creates a store holding the three seed records, with count-based ids.
    pub fn seeded() -> Self {
        Self::seeded_with(IdStrategy::CountBased)
    }

    /// Creates a store holding the three seed records.
    pub fn seeded_with(strategy: IdStrategy) -> Self {
        Self::from_movies(seed_movies(), strategy)
    }

    /// Creates a store over existing records, kept as given (ids included).
    pub fn from_movies(movies: Vec<Movie>, strategy: IdStrategy) -> Self {
        let next_id = movies
            .iter()
            .filter_map(|m| m.id.as_number())
            .max()
            .map_or(1, |max| max.saturating_add(1));
        InMemoryStore {
            movies,
            strategy,
            next_id,
        }
    }

    fn position(&self, id: &MovieId) -> Result<usize, StorageError> {
        self.movies
            .iter()
            .position(|m| &m.id == id)
            .ok_or_else(|| StorageError::MovieNotFound(id.clone()))
    }

    fn next_id(&mut self) -> MovieId {
        match self.strategy {
            IdStrategy::CountBased => MovieId::from(self.movies.len() as u64 + 1),
            IdStrategy::Monotonic => {
                let id = self.next_id;
                self.next_id = self.next_id.saturating_add(1);
                MovieId::from(id)
            }
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MovieStore for InMemoryStore {
    fn list(&self) -> Vec<Movie> {
        self.movies.clone()
    }

    fn find_by_id(&self, id: &MovieId) -> Result<Movie, StorageError> {
        let idx = self.position(id)?;
        Ok(self.movies[idx].clone())
    }

    fn append(&mut self, movie: Movie) -> MovieId {
        let id = self.next_id();
        self.movies.push(movie.with_id(id.clone()));
        id
    }

    fn entry(&mut self, id: &MovieId) -> Result<MovieEntry<'_>, StorageError> {
        let idx = self.position(id)?;
        Ok(MovieEntry::new(&mut self.movies[idx]))
    }

    fn remove_by_id(&mut self, id: &MovieId) -> Result<Movie, StorageError> {
        let idx = self.position(id)?;
        Ok(self.movies.remove(idx))
    }

    fn len(&self) -> usize {
        self.movies.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use movies_core::Director;
    use proptest::prelude::*;

    fn movie(title: &str) -> Movie {
        Movie::new("", "999", title, Some(Director::new("A", "B")))
    }

    fn ids(store: &InMemoryStore) -> Vec<String> {
        store.list().into_iter().map(|m| m.id.0).collect()
    }

    #[test]
    fn seeded_store_has_three_records() {
        let store = InMemoryStore::seeded();
        assert_eq!(store.len(), 3);
        assert_eq!(ids(&store), ["1", "2", "3"]);
    }

    #[test]
    fn append_assigns_next_count_and_discards_client_id() {
        let mut store = InMemoryStore::seeded();
        let mut incoming = movie("New Movie");
        incoming.id = MovieId::from("client-chosen");

        let id = store.append(incoming);
        assert_eq!(id.as_str(), "4");

        let stored = store.find_by_id(&id).unwrap();
        assert_eq!(stored.title, "New Movie");
        assert!(store.find_by_id(&MovieId::from("client-chosen")).is_err());
    }

    #[test]
    fn find_missing_is_not_found() {
        let store = InMemoryStore::seeded();
        let missing = MovieId::from("4");
        assert_eq!(
            store.find_by_id(&missing),
            Err(StorageError::MovieNotFound(missing))
        );
    }

    #[test]
    fn find_returns_first_match() {
        let store = InMemoryStore::from_movies(
            vec![
                Movie::new("1", "a", "First", None),
                Movie::new("1", "b", "Second", None),
            ],
            IdStrategy::CountBased,
        );
        assert_eq!(store.find_by_id(&MovieId::from("1")).unwrap().title, "First");
    }

    #[test]
    fn replace_keeps_matched_id_and_position() {
        let mut store = InMemoryStore::seeded();
        let mut replacement = movie("Renamed");
        replacement.id = MovieId::from("77");

        store
            .replace_by_id(&MovieId::from("2"), replacement)
            .unwrap();

        let list = store.list();
        assert_eq!(list[1].id.as_str(), "2");
        assert_eq!(list[1].title, "Renamed");
        assert_eq!(ids(&store), ["1", "2", "3"]);
    }

    #[test]
    fn replace_missing_leaves_store_untouched() {
        let mut store = InMemoryStore::seeded();
        let before = store.list();
        let result = store.replace_by_id(&MovieId::from("9"), movie("X"));
        assert!(matches!(result, Err(StorageError::MovieNotFound(_))));
        assert_eq!(store.list(), before);
    }

    #[test]
    fn entry_replace_keeps_stored_id() {
        let mut store = InMemoryStore::seeded();
        let entry = store.entry(&MovieId::from("3")).unwrap();
        entry.replace(Movie::new("client", "0", "Third Again", None));

        let stored = store.find_by_id(&MovieId::from("3")).unwrap();
        assert_eq!(stored, Movie::new("3", "0", "Third Again", None));
        assert!(matches!(
            store.entry(&MovieId::from("client")),
            Err(StorageError::MovieNotFound(_))
        ));
    }

    #[test]
    fn remove_shifts_later_records() {
        let mut store = InMemoryStore::seeded();
        let removed = store.remove_by_id(&MovieId::from("1")).unwrap();
        assert_eq!(removed.title, "Movie One");
        assert_eq!(ids(&store), ["2", "3"]);

        let again = store.remove_by_id(&MovieId::from("1"));
        assert!(matches!(again, Err(StorageError::MovieNotFound(_))));
    }

    #[test]
    fn count_based_ids_collide_after_delete() {
        let mut store = InMemoryStore::seeded();
        store.remove_by_id(&MovieId::from("1")).unwrap();

        // Two records remain, so the next id is "3", which "Movie Three" holds.
        let id = store.append(movie("Duplicate"));
        assert_eq!(id.as_str(), "3");
        assert_eq!(ids(&store), ["2", "3", "3"]);

        // Linear scan returns the older record.
        assert_eq!(store.find_by_id(&id).unwrap().title, "Movie Three");
    }

    #[test]
    fn monotonic_ids_are_never_reused() {
        let mut store = InMemoryStore::seeded_with(IdStrategy::Monotonic);
        store.remove_by_id(&MovieId::from("3")).unwrap();

        let id = store.append(movie("Fresh"));
        assert_eq!(id.as_str(), "4");
        store.remove_by_id(&id).unwrap();
        assert_eq!(store.append(movie("Fresher")).as_str(), "5");
    }

    #[test]
    fn monotonic_starts_past_highest_numeric_id() {
        let store_movies = vec![
            Movie::new("10", "", "Ten", None),
            Movie::new("abc", "", "Letters", None),
        ];
        let mut store = InMemoryStore::from_movies(store_movies, IdStrategy::Monotonic);
        assert_eq!(store.append(movie("Next")).as_str(), "11");

        let mut empty = InMemoryStore::with_strategy(IdStrategy::Monotonic);
        assert!(empty.is_empty());
        assert_eq!(empty.append(movie("First")).as_str(), "1");
    }

    proptest! {
        #[test]
        fn monotonic_ids_stay_unique(ops in prop::collection::vec(any::<Option<prop::sample::Index>>(), 1..60)) {
            let mut store = InMemoryStore::seeded_with(IdStrategy::Monotonic);
            for op in ops {
                match op {
                    None => { store.append(movie("p")); }
                    Some(index) if !store.is_empty() => {
                        let victim = store.list()[index.index(store.len())].id.clone();
                        store.remove_by_id(&victim).unwrap();
                    }
                    Some(_) => {}
                }
                let mut seen = ids(&store);
                let total = seen.len();
                seen.sort();
                seen.dedup();
                prop_assert_eq!(seen.len(), total);
            }
        }

        #[test]
        fn count_based_append_uses_length(extra in 0usize..20) {
            let mut store = InMemoryStore::seeded();
            for _ in 0..extra {
                store.append(movie("p"));
            }
            let expected = (store.len() + 1).to_string();
            let id = store.append(movie("last"));
            prop_assert_eq!(id.as_str(), expected.as_str());
            prop_assert_eq!(store.list().last().map(|m| m.id.clone()), Some(id));
        }
    }
}
