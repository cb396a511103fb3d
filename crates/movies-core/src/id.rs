//! The [`MovieId`] newtype.
//!
//! Ids are opaque strings on the wire. The store assigns them as decimal
//! numbers, but clients may address records by any string, so the type does
//! not assume numeric content.

use std::fmt;

use serde::Serialize;

/// Identifier of a movie record. Serializes as a bare JSON string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MovieId(pub String);

impl MovieId {
    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The numeric value of the id, if it is a plain decimal number.
    pub fn as_number(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl From<u64> for MovieId {
    fn from(n: u64) -> Self {
        MovieId(n.to_string())
    }
}

impl From<&str> for MovieId {
    fn from(s: &str) -> Self {
        MovieId(s.to_string())
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
