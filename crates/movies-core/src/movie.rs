//! Movie records and their embedded director.

use serde::Serialize;

use crate::id::MovieId;

/// A director, embedded by value in a [`Movie`]. Not stored on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Director {
    pub firstname: String,
    pub lastname: String,
}

impl Director {
    pub fn new(firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Director {
            firstname: firstname.into(),
            lastname: lastname.into(),
        }
    }
}

/// A movie record.
///
/// `director` always serializes, as `null` when absent. Decoding lives in
/// [`crate::decode`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Movie {
    pub id: MovieId,
    pub isbn: String,
    pub title: String,
    pub director: Option<Director>,
}

impl Movie {
    pub fn new(
        id: impl Into<MovieId>,
        isbn: impl Into<String>,
        title: impl Into<String>,
        director: Option<Director>,
    ) -> Self {
        Movie {
            id: id.into(),
            isbn: isbn.into(),
            title: title.into(),
            director,
        }
    }

    /// Returns the same record carrying `id` instead of its own.
    pub fn with_id(mut self, id: MovieId) -> Self {
        self.id = id;
        self
    }
}
